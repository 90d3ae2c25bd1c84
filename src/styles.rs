//! Fixed catalog of SGR text attributes.
//!
//! Every [`FontStyle`] renders as its escape sequence, so styles can be
//! interpolated directly into output text and terminated with
//! [`FontStyle::Reset`]:
//!
//! ```rust
//! use termfonts::FontStyle;
//!
//! let line = format!(
//!     "This is my {}{}Striked and Blinking{} text.",
//!     FontStyle::Strike,
//!     FontStyle::Blink,
//!     FontStyle::Reset,
//! );
//! assert!(line.starts_with("This is my \x1b[9m\x1b[5m"));
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::result::Result as StdResult;

use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator as _};

type Result<T> = StdResult<T, Error>;

/// Error returned when looking up a style by name.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No style is named like this.
    #[error("unknown font style `{0}`")]
    Unknown(String),
}

macro_rules! define_styles {
    ( $( $( #[$meta:meta] )* $variant:ident = $code:literal ),* $( , )? ) => {
        /// Identifier of a style in the catalog.
        ///
        /// Discriminants are the SGR parameters, so two ids are equal exactly
        /// when their codes are.
        #[expect(clippy::exhaustive_enums, reason = "the sgr attribute set is closed")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString)]
        #[strum(ascii_case_insensitive)]
        #[repr(u8)]
        pub enum FontStyle {
            $(
                $( #[$meta] )*
                $variant = $code,
            )*
        }

        impl FontStyle {
            /// Looks up the catalog entry for this id.
            #[must_use]
            pub const fn style(self) -> Style {
                match self {
                    $(
                        Self::$variant => Style {
                            name: stringify!($variant),
                            code: $code,
                            escape: concat!("\x1b[", $code, "m"),
                        },
                    )*
                }
            }

            /// Finds the style whose SGR parameter is `code`.
            #[must_use]
            pub const fn from_code(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_styles! {
    /// Ends every active style and color. Only ever appended after other
    /// styles.
    Reset = 0,
    /// Bold text. Depending on the terminal font this might not look bold.
    Bold = 1,
    /// Dims the current color.
    Disabled = 2,
    /// Italic text.
    Italics = 3,
    /// Underlined text.
    Underline = 4,
    /// Blinks the current color.
    Blink = 5,
    /// Swaps foreground and background until reset or inverted again.
    Invert = 7,
    /// Draws text in the background color.
    Invisible = 8,
    /// Struck through text.
    Strike = 9,
}

impl FontStyle {
    /// Parses a style name, ignoring ascii case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_err| Error::Unknown(name.to_owned()))
    }

    /// The style's identifier, e.g. `"Bold"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.style().name
    }

    /// The numeric SGR parameter.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.style().code
    }

    /// The escape sequence, e.g. `"\x1b[1m"`.
    #[must_use]
    pub const fn escape_text(self) -> &'static str {
        self.style().escape
    }
}

impl Display for FontStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.escape_text())
    }
}

/// A catalog entry: name, SGR code and derived escape sequence.
///
/// Only the code takes part in equality and hashing.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    name: &'static str,
    code: u8,
    escape: &'static str,
}

impl Style {
    /// The style's identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn code(&self) -> u8 {
        self.code
    }

    /// `ESC [ code m`.
    #[must_use]
    pub const fn escape_text(&self) -> &'static str {
        self.escape
    }

    /// Whether this is the style that ends all others.
    #[must_use]
    pub const fn is_reset(&self) -> bool {
        self.code == FontStyle::Reset as u8
    }
}

impl From<FontStyle> for Style {
    fn from(id: FontStyle) -> Self {
        id.style()
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Style {}

impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.escape)
    }
}

/// Catalog entry for `id`.
#[must_use]
pub const fn style_by_id(id: FontStyle) -> Style {
    id.style()
}

/// Every style, `Reset` first, in code order.
pub fn iter() -> impl Iterator<Item = Style> {
    FontStyle::iter().map(FontStyle::style)
}

/// Wraps `text` in the given styles followed by a single `Reset`.
///
/// `Reset` entries in `styles` are skipped. When nothing is left to apply the
/// text comes back unchanged.
#[must_use]
pub fn apply(styles: &[FontStyle], text: &str) -> String {
    let prefix = styles
        .iter()
        .filter(|&&style| style != FontStyle::Reset)
        .map(|style| style.escape_text())
        .collect::<String>();

    if prefix.is_empty() {
        return text.to_owned();
    }

    format!("{prefix}{text}{}", FontStyle::Reset)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    fn expected_codes() -> Vec<(&'static str, u8)> {
        vec![
            ("Reset", 0),
            ("Bold", 1),
            ("Disabled", 2),
            ("Italics", 3),
            ("Underline", 4),
            ("Blink", 5),
            ("Invert", 7),
            ("Invisible", 8),
            ("Strike", 9),
        ]
    }

    #[test]
    fn catalog_matches_sgr_parameters() {
        let actual = iter()
            .map(|style| (style.name(), style.code()))
            .collect::<Vec<_>>();

        assert_eq!(actual, expected_codes(), "catalog drifted from sgr codes");
        assert_eq!(FontStyle::COUNT, expected_codes().len(), "style count");
    }

    #[test]
    fn escape_text_is_csi_code_m() {
        for style in iter() {
            let code = style
                .escape_text()
                .strip_prefix("\x1b[")
                .and_then(|rest| rest.strip_suffix('m'))
                .unwrap_or_else(|| panic!("`{}` isn't `ESC [ n m`", style.name()));

            assert!(
                !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()),
                "`{}` has non-numeric parameter `{code}`",
                style.name()
            );
            assert_eq!(code, style.code().to_string(), "`{}`", style.name());
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes = iter().map(|style| style.code()).collect::<HashSet<_>>();

        assert_eq!(codes.len(), FontStyle::COUNT, "duplicate sgr code");
    }

    #[test]
    fn reset_is_code_zero() {
        let reset = style_by_id(FontStyle::Reset);

        assert_eq!(reset.code(), 0, "reset code");
        assert_eq!(reset.escape_text(), "\x1b[0m", "reset escape");
        assert!(reset.is_reset(), "reset should know it's reset");
        assert!(!FontStyle::Bold.style().is_reset(), "bold isn't reset");
    }

    #[test]
    fn display_renders_escape_not_name() {
        assert_eq!(FontStyle::Underline.to_string(), "\x1b[4m", "id display");
        assert_eq!(
            Style::from(FontStyle::Invert).to_string(),
            "\x1b[7m",
            "style display"
        );
        assert_eq!(
            format!("{}x{}", FontStyle::Bold, FontStyle::Reset),
            "\x1b[1mx\x1b[0m",
            "interpolated"
        );
    }

    #[test]
    fn equality_and_hash_follow_code() {
        let forged = Style {
            name: "NotBold",
            code: 1,
            escape: "",
        };

        assert_eq!(forged, FontStyle::Bold.style(), "same code, same style");
        assert_ne!(FontStyle::Bold.style(), FontStyle::Blink.style(), "codes differ");

        let set = [forged, FontStyle::Bold.style()]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 1, "hash should only see the code");
    }

    #[test]
    fn from_code_round_trips_and_skips_gaps() {
        for style in iter() {
            let found = FontStyle::from_code(style.code()).map(FontStyle::style);

            assert_eq!(found, Some(style), "`{}`", style.name());
        }

        assert_eq!(FontStyle::from_code(6), None, "rapid blink isn't cataloged");
        assert_eq!(FontStyle::from_code(42), None, "out of range");
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(FontStyle::parse("bold").ok(), Some(FontStyle::Bold), "lower");
        assert_eq!(FontStyle::parse("STRIKE").ok(), Some(FontStyle::Strike), "upper");
        assert_eq!(
            FontStyle::parse("  Invisible ").ok(),
            Some(FontStyle::Invisible),
            "padded"
        );
    }

    #[test]
    fn parse_errors_on_unknown_name() {
        let err = FontStyle::parse("sparkle").map_or_else(|e| e.to_string(), |s| s.name().to_owned());

        assert_eq!(err, "unknown font style `sparkle`", "error message");
    }

    #[test]
    fn apply_wraps_and_appends_one_reset() {
        let painted = apply(&[FontStyle::Blink, FontStyle::Invert], "hi");

        assert_eq!(painted, "\x1b[5m\x1b[7mhi\x1b[0m", "styled text");
    }

    #[test]
    fn apply_skips_reset() {
        assert_eq!(
            apply(&[FontStyle::Reset, FontStyle::Bold, FontStyle::Reset], "hi"),
            "\x1b[1mhi\x1b[0m",
            "reset is only appended"
        );
        assert_eq!(apply(&[FontStyle::Reset], "hi"), "hi", "nothing to apply");
        assert_eq!(apply(&[], "hi"), "hi", "no styles");
    }
}
