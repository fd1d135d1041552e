//! Number formatting for tables, cards and chart axes

/// Formats a number with `,` thousands separators and the given decimals
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Separators every 3 digits from the end, never right after the sign
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Whole currency units with separators, e.g. `$1,234,568`
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 0);
    if value.round() < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Integer with separators
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// A fraction shown as percent: `0.1234` -> `12.34%`
pub fn format_percent(fraction: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(fraction * 100.0, decimals))
}

/// Short form for chart axes: `12.5M`, `950K`, `120`
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$1,235");
        assert_eq!(format_money(1234567.0), "$1,234,567");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(-1500.0), "-$1,500");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123,456");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.1234, 2), "12.34%");
        assert_eq!(format_percent(-0.02, 0), "-2%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(12_500_000.0), "12.5M");
        assert_eq!(format_compact(950_000.0), "950K");
        assert_eq!(format_compact(120.0), "120");
        assert_eq!(format_compact(1_200_000_000.0), "1.2B");
    }
}
