//! Subcommand handlers for convert, interactive and config actions.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::{ConfigAction, RenderArgs};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use crate::convert::convert_file;
use crate::error::Result;
use crate::interactive;
use crate::sink::{self, Clipboard, ClipboardError, SystemClipboard, HOLDS_SELECTION};

/// Options for the one-shot `convert` command.
#[derive(Debug)]
pub struct ConvertRequest<'a> {
    pub image: &'a Path,
    pub render: &'a RenderArgs,
    pub copy: bool,
    pub save: Option<Option<PathBuf>>,
    pub quiet: bool,
}

/// Convert one image, print it, then save and/or copy it.
pub fn run_convert(request: ConvertRequest<'_>, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    convert_with(request, &config, &mut std::io::stdout(), SystemClipboard::new)
}

fn convert_with<W, C, F>(
    request: ConvertRequest<'_>,
    config: &Config,
    out: &mut W,
    open_clipboard: F,
) -> Result<()>
where
    W: Write,
    C: Clipboard,
    F: FnOnce() -> std::result::Result<C, ClipboardError>,
{
    let options = request.render.resolve(config)?;
    let art = convert_file(request.image, &options)?;

    if !request.quiet {
        out.write_all(art.as_str().as_bytes())?;
        out.flush()?;
    }

    if let Some(target) = request.save {
        let path = target.unwrap_or_else(|| config.output_filename());
        let written = sink::save_as_file(art.as_str(), &path)?;
        eprintln!("Saved to {}", written.display());
    }

    // last: on X11/Wayland this keeps serving the text until it is replaced
    if request.copy {
        let mut clipboard = open_clipboard()?;
        if HOLDS_SELECTION {
            eprintln!(
                "Copied to clipboard. Keeping it available until something else is copied (Ctrl-C to stop)."
            );
        }
        clipboard.set_text_and_hold(art.as_str())?;
        if !HOLDS_SELECTION {
            eprintln!("Copied to clipboard.");
        }
    }

    Ok(())
}

/// Start the interactive session on a single-threaded runtime.
pub fn run_interactive(render: &RenderArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let options = render.resolve(&config)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(interactive::run(options, config.output_filename()))?;
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load(config_path)?;
            let options = config.convert_options()?;

            println!("Current configuration:");
            println!("  Width: {}", options.width);
            println!("  Aspect correction: {}", options.aspect_correction);
            println!("  Palette: \"{}\"", options.palette);
            println!("  Invert: {}", if options.invert { "yes" } else { "no" });
            println!("  Output file: {}", config.output_filename().display());
            println!();

            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(get_config_path);
            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(get_config_path);

            if path.exists() {
                eprintln!("Config file already exists: {}", path.display());
                eprintln!("Use 'asciify config show' to view current settings.");
                return Ok(());
            }

            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG)?;

            println!("Created config file: {}", path.display());
        }
    }
    Ok(())
}
