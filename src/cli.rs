//! Command line front end over the style catalog and the converters.

use std::io::{self, Write};

use clap::{ArgAction, Parser, Subcommand};
use env_logger::Builder as LoggerBuilder;
use log::{LevelFilter as LogLevelFilter, debug, warn};

use crate::config::{self, Config};
use crate::styles::{self, FontStyle};
use crate::{CLEAR_SCREEN, Result, codes, colors};

#[derive(Debug, Clone, Parser)]
#[command(name = "termfonts", version, about, long_about = None)]
struct Args {
    /// Output more info per invocation (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all output except errors
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    /// Read settings from this file instead of `termfonts.toml`
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show every font style
    Styles {
        /// Don't clear the screen first
        #[arg(long)]
        no_clear: bool,
    },

    /// Print text in one or more styles
    Paint {
        /// Style to apply, e.g. `bold` (repeatable)
        #[arg(short, long = "style", required = true, value_parser = FontStyle::parse)]
        styles: Vec<FontStyle>,

        text: String,
    },

    /// Convert hex code points like `1F469 200D 1F469` to unicode escapes
    Escape {
        #[arg(required = true)]
        hex: Vec<String>,
    },

    /// Convert `\uXXXX`/`\UXXXXXXXX` escapes back to hex code points
    Unescape { text: String },

    /// Normalize a hex color to `AARRGGBB`
    Color {
        hex: String,

        /// Prefix the result with `#`
        #[arg(long)]
        hash: bool,
    },
}

fn init_logger(verbosity: u8, quiet: bool) {
    let level = if quiet {
        LogLevelFilter::Error
    } else {
        match verbosity {
            0 => LogLevelFilter::Warn,
            1 => LogLevelFilter::Info,
            2 => LogLevelFilter::Debug,
            _ => LogLevelFilter::Trace,
        }
    };

    LoggerBuilder::new().filter_level(level).init();
}

fn demo_lines(sample: &str) -> Vec<String> {
    let reset = FontStyle::Reset;
    let mut lines = vec![
        format!(
            " {sample} {}Blinking {}Inverted{reset} text.",
            FontStyle::Blink,
            FontStyle::Invert
        ),
        String::new(),
    ];

    for style in styles::iter() {
        let name = style.name().to_uppercase();

        if style.is_reset() {
            lines.push(format!(" {name} is only used after formatting."));
            lines.push(String::new());
        } else if style == FontStyle::Invisible.style() {
            lines.push(format!(" {sample} {style}{name}{reset} format. <-- {name} "));
        } else {
            lines.push(format!(" {sample} {style}{name}{reset} format."));
        }
    }

    lines
}

fn execute<W: Write>(command: &Command, config: &Config, out: &mut W) -> Result<()> {
    match command {
        Command::Styles { no_clear } => {
            if config.demo.clear && !no_clear {
                debug!("clearing screen");
                writeln!(out, "{CLEAR_SCREEN}")?;
            }

            for line in demo_lines(&config.demo.sample) {
                writeln!(out, "{line}")?;
            }
        }
        Command::Paint {
            styles: chosen,
            text,
        } => {
            writeln!(out, "{}", styles::apply(chosen, text))?;
        }
        Command::Escape { hex } => {
            writeln!(out, "{}", codes::hex_to_unicode_escapes(&hex.join(" ")))?;
        }
        Command::Unescape { text } => {
            writeln!(out, "{}", codes::unicode_escapes_to_hex(text))?;
        }
        Command::Color { hex, hash } => {
            if colors::to_argb(hex).is_none() {
                warn!("`{hex}` isn't a 6 or 8 digit hex color, keeping it as is");
            }

            let normalized = colors::normalize_hex_color(hex, *hash || config.color.hash);
            writeln!(out, "{normalized}")?;
        }
    }

    Ok(())
}

/// Parses arguments, sets up logging, loads the config and runs the command.
pub fn run() -> Result<()> {
    let cli = Args::parse();

    init_logger(cli.verbose, cli.quiet);

    let config = config::load(cli.config.as_deref())?;

    execute(&cli.command, &config, &mut io::stdout().lock())
}
