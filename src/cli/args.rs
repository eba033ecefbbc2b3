//! CLI argument definitions.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::ascii::{CharSet, Palette};
use crate::config::Config;
use crate::convert::ConvertOptions;
use crate::error::Result;

/// Convert images to ASCII art, then copy or save the result
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one image and print the result
    Convert {
        /// Image file (PNG, JPEG, GIF, BMP, WebP, ...)
        image: PathBuf,

        #[command(flatten)]
        render: RenderArgs,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,

        /// Save the result to a text file (default name from config)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        save: Option<Option<PathBuf>>,

        /// Don't print the art to stdout
        #[arg(long, short)]
        quiet: bool,
    },
    /// Start an interactive session (the default)
    Interactive {
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Render settings that can override the config file.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Output width in characters (default: 100)
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Row scaling multiplier (default: 0.5)
    #[arg(long, short)]
    pub aspect: Option<f64>,

    /// ASCII character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom ramp from darkest to brightest, e.g. " .:-=+*#%@"
    #[arg(long, conflicts_with = "charset")]
    pub palette: Option<String>,

    /// Invert brightness (for light backgrounds)
    #[arg(long)]
    pub invert: bool,
}

impl RenderArgs {
    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn resolve(&self, config: &Config) -> Result<ConvertOptions> {
        let mut options = config.convert_options()?;

        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(aspect) = self.aspect {
            options.aspect_correction = aspect;
        }
        if let Some(ramp) = &self.palette {
            options.palette = Palette::parse(ramp)?;
        } else if let Some(charset) = self.charset {
            options.palette = CharSet::from(charset).palette();
        }
        options.invert |= self.invert;

        options.validate()?;
        Ok(options)
    }
}
