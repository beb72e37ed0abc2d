use image::Rgba;

/// Parse a color given either as "#rrggbb" or as one of the named colors the
/// tool accepts for backgrounds. Returns a fully opaque pixel.
pub fn parse_color(value: &str) -> Option<Rgba<u8>> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Rgba([r, g, b, 255]));
    }

    let [r, g, b] = match value.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "navy" => [0, 0, 128],
        "gray" | "grey" => [128, 128, 128],
        _ => return None,
    };
    Some(Rgba([r, g, b, 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("black"), Some(Rgba([0, 0, 0, 255])));
        assert_eq!(parse_color("White"), Some(Rgba([255, 255, 255, 255])));
        assert_eq!(parse_color("  navy "), Some(Rgba([0, 0, 128, 255])));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#ff8000"), Some(Rgba([255, 128, 0, 255])));
        assert_eq!(parse_color("#000000"), Some(Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color(""), None);
    }
}
