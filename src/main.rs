use asciify::cli::{self, Args, Command, ConvertRequest, RenderArgs};
use clap::Parser;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = args.config.as_deref();

    let result = match args.command {
        Some(Command::Convert {
            image,
            render,
            copy,
            save,
            quiet,
        }) => cli::run_convert(
            ConvertRequest {
                image: &image,
                render: &render,
                copy,
                save,
                quiet,
            },
            config_path,
        ),
        Some(Command::Interactive { render }) => cli::run_interactive(&render, config_path),
        Some(Command::Config { action }) => cli::handle_config_action(action, config_path),
        None => cli::run_interactive(&RenderArgs::default(), config_path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
