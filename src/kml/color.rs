/// Used whenever a KML color value is absent or malformed.
pub const FALLBACK_COLOR: &str = "#0000ff";

/// Convert a packed KML color (`aabbggrr`) to a CSS hex color (`#rrggbb`).
///
/// Alpha is discarded. Anything that is not at least eight hex digits yields [`FALLBACK_COLOR`];
/// characters past the eighth are ignored.
pub fn kml_color_to_hex(kml_color: Option<&str>) -> String {
    let packed = match kml_color.map(str::trim) {
        Some(packed) if packed.len() >= 8 && packed.is_char_boundary(8) => &packed[..8],
        _ => return FALLBACK_COLOR.to_string(),
    };
    if !packed.chars().all(|c| c.is_ascii_hexdigit()) {
        return FALLBACK_COLOR.to_string();
    }
    let (blue, green, red) = (&packed[2..4], &packed[4..6], &packed[6..8]);
    format!("#{red}{green}{blue}").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{kml_color_to_hex, FALLBACK_COLOR};

    #[rstest]
    #[case("ff0000ff", "#ff0000")]
    #[case("ffff0000", "#0000ff")]
    #[case("ff00ff00", "#00ff00")]
    #[case("80123456", "#563412")]
    #[case("FF1A2B3C", "#3c2b1a")]
    #[case(" ff0000ff\n", "#ff0000")]
    #[case("ff0000ff00", "#ff0000")]
    fn test_kml_color_to_hex(#[case] kml_color: &str, #[case] expected: &str) {
        assert_eq!(kml_color_to_hex(Some(kml_color)), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("ff00ff"))]
    #[case(Some("ff0000f"))]
    #[case(Some("zz0000ff"))]
    #[case(Some("ff00ÿ00ff"))]
    fn test_malformed_colors_fall_back(#[case] kml_color: Option<&str>) {
        assert_eq!(kml_color_to_hex(kml_color), FALLBACK_COLOR);
    }
}
