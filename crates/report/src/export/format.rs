/// `0.1234` becomes `"12.34%"`. Non-finite input renders as `"0.00%"`.
pub fn format_percent(value: f64) -> String {
    let percent = if value.is_finite() { value * 100.0 } else { 0.0 };
    // Ties round away from zero; `{:.2}` alone rounds them to even.
    format!("{:.2}%", (percent * 100.0).round() / 100.0)
}

/// Rounds to two decimal places; non-finite input becomes `0.0`.
pub fn format_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.1234, "12.34%")]
    #[case(0.0, "0.00%")]
    #[case(1.0, "100.00%")]
    #[case(0.5, "50.00%")]
    #[case(0.00125, "0.13%")]
    #[case(f64::NAN, "0.00%")]
    #[case(f64::INFINITY, "0.00%")]
    #[case(f64::NEG_INFINITY, "0.00%")]
    fn percent(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_percent(value), expected);
    }

    #[rstest]
    #[case(3.14159, 3.14)]
    #[case(2.0, 2.0)]
    #[case(10.999, 11.0)]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    fn decimal(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(format_decimal(value), expected);
    }
}
