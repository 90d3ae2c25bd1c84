//! Optional `termfonts.toml` settings for the command line front end.
//!
//! ```toml
//! [demo]
//! sample = "This is my"
//! clear = true
//!
//! [color]
//! hash = false
//! ```

use std::path::{Path, PathBuf};
use std::result::Result as StdResult;
use std::{env, fs, io};

use log::debug;
use serde::Deserialize;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "termfonts.toml";

/// Errors loading the config file.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file exists but couldn't be read.
    #[error("failed to read `{path}`: {src}")]
    Reading { path: String, src: io::Error },
    /// The file isn't valid config TOML.
    #[error("failed to parse `{path}`: {src}")]
    Parsing {
        path: String,
        src: Box<toml::de::Error>,
    },
    /// The path references an unset variable.
    #[error("failed to expand path `{path}`: {src}")]
    Expanding {
        path: String,
        src: shellexpand::LookupError<env::VarError>,
    },
}

type Result<T> = StdResult<T, Error>;

/// Settings for the `styles` demo.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(default)]
pub struct Demo {
    /// Text in front of each styled name.
    pub sample: String,
    /// Clear the screen before printing.
    pub clear: bool,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            sample: "This is my".to_owned(),
            clear: true,
        }
    }
}

/// Settings for the `color` command.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(default)]
pub struct Color {
    /// Always prefix normalized colors with `#`.
    pub hash: bool,
}

/// Everything `termfonts.toml` can set. Missing keys fall back to defaults.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(default)]
pub struct Config {
    /// `[demo]` table.
    pub demo: Demo,
    /// `[color]` table.
    pub color: Color,
}

fn expand_path(path: &str) -> Result<PathBuf> {
    Ok(PathBuf::from(
        shellexpand::full(path)
            .map_err(|src| Error::Expanding {
                path: path.to_owned(),
                src,
            })?
            .into_owned(),
    ))
}

fn read_config(path: &Path, required: bool) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            debug!("no `{}` found, using defaults", path.display());

            Ok(None)
        }
        Err(src) => Err(Error::Reading {
            path: path.display().to_string(),
            src,
        }),
    }
}

fn parse_config(content: Option<&str>, path: &Path) -> Result<Config> {
    match content {
        Some(s) if !s.trim().is_empty() => toml::from_str(s).map_err(|src| Error::Parsing {
            path: path.display().to_string(),
            src: Box::new(src),
        }),
        _ => Ok(Config::default()),
    }
}

/// Loads the config from `path`, or from [`CONFIG_FILE`] in the working
/// directory.
///
/// A missing default file or an empty file yields the defaults. A missing
/// file that was asked for explicitly is an error.
pub fn load(path: Option<&str>) -> Result<Config> {
    let (path, required) = match path {
        Some(p) => (expand_path(p)?, true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };

    let content = read_config(&path, required)?;
    if content.is_some() {
        debug!("using config `{}`", path.display());
    }

    parse_config(content.as_deref(), &path)
}
