/// Reads a `data-speed` value, falling back when it is missing or not a finite number.
pub fn parse_speed(raw: Option<&str>, default_speed: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(default_speed)
}

pub fn offset_for(scroll: f64, speed: f64) -> f64 {
    // Subtracting from zero keeps a resting element at `0px` instead of `-0px`.
    0.0 - scroll * speed
}

pub fn transform_for(scroll: f64, speed: f64) -> String {
    format!("translateY({}px)", offset_for(scroll, speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_defaults_when_missing_or_invalid() {
        assert_eq!(parse_speed(None, 0.5), 0.5);
        assert_eq!(parse_speed(Some(""), 0.5), 0.5);
        assert_eq!(parse_speed(Some("fast"), 0.5), 0.5);
        assert_eq!(parse_speed(Some("NaN"), 0.5), 0.5);
        assert_eq!(parse_speed(Some(" 0.25 "), 0.5), 0.25);
        assert_eq!(parse_speed(Some("-1"), 0.5), -1.0);
    }

    #[test]
    fn moves_against_scroll_direction() {
        assert_eq!(offset_for(200.0, 0.5), -100.0);
        assert_eq!(transform_for(200.0, 0.5), "translateY(-100px)");
        assert_eq!(transform_for(0.0, 0.3), "translateY(0px)");
    }
}
