//! Foreground color parsing for rendered QR codes.

use image::Rgb;

use crate::error::CoreError;

/// Background color of every rendered symbol.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Basic CSS color keywords accepted alongside hex notation.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("lime", [0, 255, 0]),
    ("teal", [0, 128, 128]),
    ("navy", [0, 0, 128]),
    ("purple", [128, 0, 128]),
    ("orange", [255, 165, 0]),
];

/// Parse `#rgb`, `#rrggbb`, or a basic color name into an RGB pixel.
pub fn parse_color(raw: &str) -> Result<Rgb<u8>, CoreError> {
    let trimmed = raw.trim();
    let invalid = || CoreError::InvalidColor(raw.to_string());

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        return match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let nibble = c.to_digit(16).ok_or_else(invalid)? as u8;
                    channels[i] = nibble * 17;
                }
                Ok(Rgb(channels))
            }
            6 => {
                let mut channels = [0u8; 3];
                for (i, channel) in channels.iter_mut().enumerate() {
                    *channel =
                        u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
                }
                Ok(Rgb(channels))
            }
            _ => Err(invalid()),
        };
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, rgb)| Rgb(*rgb))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn six_digit_hex_parsed() {
        assert_eq!(parse_color("#1a2B3c").unwrap(), Rgb([0x1a, 0x2b, 0x3c]));
    }

    #[test]
    fn three_digit_hex_expanded() {
        assert_eq!(parse_color("#f80").unwrap(), Rgb([0xff, 0x88, 0x00]));
    }

    #[test]
    fn named_color_case_insensitive() {
        assert_eq!(parse_color("Navy").unwrap(), Rgb([0, 0, 128]));
    }

    #[test]
    fn malformed_colors_rejected() {
        for raw in ["#12345", "#gggggg", "000000", "", "chartreuse-ish"] {
            assert_matches!(parse_color(raw), Err(CoreError::InvalidColor(_)), "{raw}");
        }
    }
}
