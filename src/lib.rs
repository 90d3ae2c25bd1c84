//! ANSI font styles and unicode escape conversion for styled terminal text.
//!
//! The crate has two independent halves:
//!
//! - [`styles`]: a closed catalog of SGR text attributes (`Bold`, `Invert`,
//!   ...) that render straight to their escape sequences, so they can be
//!   dropped into `format!` strings.
//! - [`codes`] and [`colors`]: forgiving string-to-string converters between
//!   hex code point lists and `\u`/`\U` escape literals, plus hex color
//!   cleanup.
//!
//! ```rust
//! use termfonts::{FontStyle, hex_to_unicode_escapes, unicode_escapes_to_hex};
//!
//! let text = format!("{}bold{}", FontStyle::Bold, FontStyle::Reset);
//! assert_eq!(text, "\x1b[1mbold\x1b[0m");
//!
//! let escaped = hex_to_unicode_escapes("1F43B 200D 2744 FE0F");
//! assert_eq!(escaped, r"\U0001F43B\u200D\u2744\uFE0F");
//! assert_eq!(unicode_escapes_to_hex(&escaped), "0001F43B 200D 2744 FE0F");
//! ```

use std::io;
use std::result::Result as StdResult;

pub mod cli;
pub mod codes;
pub mod colors;
pub mod config;
pub mod styles;

pub use crate::codes::{hex_to_unicode_escapes, hex_to_unicode_escapes_with, unicode_escapes_to_hex};
pub use crate::colors::{normalize_hex_color, to_argb};
pub use crate::config::{Config, Error as ConfigError};
pub use crate::styles::{Error as StyleError, FontStyle, Style, apply, style_by_id};

/// Full terminal reset followed by a scrollback clear (`ESC c ESC [ 3 J`).
///
/// Not used by the core; front ends that clear the screen must emit exactly
/// this sequence.
pub const CLEAR_SCREEN: &str = "\x1bc\x1b[3J";

/// Errors surfaced by the fallible (non-core) parts of the crate.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading `termfonts.toml` failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A style name didn't match any known style.
    #[error("style error: {0}")]
    Style(#[from] StyleError),
    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias over [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;
