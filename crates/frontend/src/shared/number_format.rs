//! Money and count formatting for table cells and totals.

/// Format a money value as `$1234.56`. Missing or non-numeric values fall
/// back to `$0.00`, matching how totals treat them.
pub fn format_money(value: Option<f64>) -> String {
    format!("${:.2}", value.unwrap_or(0.0))
}

/// Format a count without decimals; fractional inputs are rounded.
pub fn format_entero(value: f64) -> String {
    format!("{:.0}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Some(1234.5)), "$1234.50");
        assert_eq!(format_money(Some(0.0)), "$0.00");
        assert_eq!(format_money(Some(-12.345)), "$-12.35");
    }

    #[test]
    fn test_missing_value_is_zero() {
        assert_eq!(format_money(None), "$0.00");
    }

    #[test]
    fn test_format_entero_rounds() {
        assert_eq!(format_entero(12.0), "12");
        assert_eq!(format_entero(12.6), "13");
    }
}
