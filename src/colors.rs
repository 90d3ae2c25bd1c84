//! Hex color cleanup into `AARRGGBB` form.

use hex_color::HexColor;

const OPAQUE_ALPHA: &str = "FF";
const RGB_DIGITS: usize = 6;
const ARGB_DIGITS: usize = 8;

fn strip_to_argb(input: &str) -> Option<String> {
    let digits = input
        .chars()
        .filter(char::is_ascii_hexdigit)
        .collect::<String>();

    match digits.len() {
        RGB_DIGITS => Some(format!("{OPAQUE_ALPHA}{digits}")),
        ARGB_DIGITS => Some(digits),
        _ => None,
    }
}

/// Cleans up a hex color string into eight `AARRGGBB` digits.
///
/// Everything that isn't a hex digit is dropped first. Six remaining digits
/// get an opaque `FF` alpha in front; eight are kept as they are. Any other
/// count means the input isn't a color, and it is returned untouched. Digit
/// case is preserved.
///
/// ```rust
/// use termfonts::normalize_hex_color;
///
/// assert_eq!(normalize_hex_color("00FF00", false), "FF00FF00");
/// assert_eq!(normalize_hex_color("00FF00", true), "#FF00FF00");
/// assert_eq!(normalize_hex_color("ZZQQ", false), "ZZQQ");
/// ```
#[must_use]
pub fn normalize_hex_color(input: &str, add_hash: bool) -> String {
    match strip_to_argb(input) {
        Some(argb) if add_hash => format!("#{argb}"),
        Some(argb) => argb,
        None => input.to_owned(),
    }
}

/// Parses the same inputs as [`normalize_hex_color`] into a color, or `None`
/// when the input wouldn't normalize.
///
/// The leading byte of the `AARRGGBB` form becomes the alpha channel.
#[must_use]
pub fn to_argb(input: &str) -> Option<HexColor> {
    let argb = strip_to_argb(input)?;
    let [a, r, g, b] = u32::from_str_radix(&argb, 16).ok()?.to_be_bytes();

    Some(HexColor::rgba(r, g, b, a))
}
