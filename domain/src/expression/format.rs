//! Result formatting

/// Render an evaluation result for display.
///
/// Whole values print without a decimal point. Anything else is rounded to
/// two decimals, then trailing zeros and a dangling `.` are dropped.
/// The evaluator rejects non-finite results, so `inf`/`NaN` only appear when
/// called directly.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 {
        // `Display` for f64 never uses exponent notation; `+ 0.0` folds -0 into 0
        return format!("{}", value + 0.0);
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(23.00), "23");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(23.50), "23.5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(320.0 / 3.0), "106.67");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_rounds_to_whole() {
        assert_eq!(format_number(2.999), "3");
        assert_eq!(format_number(10.9000001), "10.9");
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero() {
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_large_whole_number_has_no_exponent() {
        assert_eq!(format_number(1e20), "100000000000000000000");
    }
}
