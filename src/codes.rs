//! Conversion between hex code point lists and unicode escape literals.
//!
//! Both directions are forgiving: malformed input passes through instead of
//! failing, and empty input comes back as is.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

const SHORT_PREFIX: &str = r"\u";
const LONG_PREFIX: &str = r"\U";
const SHORT_WIDTH: usize = 4;
const LONG_WIDTH: usize = 8;

#[expect(clippy::expect_used, reason = "literal pattern")]
static ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\U([0-9A-Fa-f]{8})|\\u([0-9A-Fa-f]{4})").expect("escape regex should be valid")
});

/// Converts space separated hex code points into escape literals.
///
/// Up to four digits become `\uXXXX`, five to eight become `\UXXXXXXXX`, both
/// zero padded on the left. Escapes are emitted back to back with no
/// separator:
///
/// ```rust
/// use termfonts::hex_to_unicode_escapes;
///
/// assert_eq!(
///     hex_to_unicode_escapes("1F469 200D 1F469"),
///     r"\U0001F469\u200D\U0001F469",
/// );
/// ```
///
/// A fragment longer than eight characters is logged as a warning and kept
/// verbatim with a trailing space. Use [`hex_to_unicode_escapes_with`] to
/// handle those fragments yourself.
#[must_use]
pub fn hex_to_unicode_escapes(input: &str) -> String {
    hex_to_unicode_escapes_with(input, |fragment| {
        warn!("invalid hex value `{fragment}`, keeping it as is");
    })
}

/// Like [`hex_to_unicode_escapes`], but reports each fragment longer than
/// eight characters to `on_malformed` instead of logging it.
pub fn hex_to_unicode_escapes_with<F>(input: &str, mut on_malformed: F) -> String
where
    F: FnMut(&str),
{
    input
        .split(' ')
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            let len = fragment.chars().count();

            if len <= SHORT_WIDTH {
                format!("{SHORT_PREFIX}{fragment:0>SHORT_WIDTH$}")
            } else if len <= LONG_WIDTH {
                format!("{LONG_PREFIX}{fragment:0>LONG_WIDTH$}")
            } else {
                on_malformed(fragment);

                format!("{fragment} ")
            }
        })
        .collect()
}

/// Converts `\uXXXX` and `\UXXXXXXXX` escapes back into space separated hex.
///
/// Text around the escapes is copied through untouched. Each escape
/// contributes its digits and a space, and trailing whitespace is trimmed
/// from the result.
///
/// ```rust
/// use termfonts::unicode_escapes_to_hex;
///
/// assert_eq!(
///     unicode_escapes_to_hex(r"\U0001F469\u200D\U0001F467"),
///     "0001F469 200D 0001F467",
/// );
/// ```
#[must_use]
pub fn unicode_escapes_to_hex(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for caps in ESCAPE.captures_iter(input) {
        let Some(escape) = caps.get(0) else {
            continue;
        };
        let digits = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());

        output.push_str(input.get(last_end..escape.start()).unwrap_or_default());
        output.push_str(digits);
        output.push(' ');

        last_end = escape.end();
    }

    output.push_str(input.get(last_end..).unwrap_or_default());
    output.truncate(output.trim_end().len());

    output
}
