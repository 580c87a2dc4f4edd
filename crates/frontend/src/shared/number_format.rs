//! Number formatting for yen amounts (ja-JP grouping: comma every 3 digits)

/// Groups the integer part of an already formatted number with commas.
fn group_integer_part(formatted: &str) -> String {
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer_part, decimal_part) = match digits.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (digits, None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats like `Number.prototype.toLocaleString("ja-JP")`: thousands
/// separators and at most 3 fraction digits, trailing zeros dropped.
///
/// ```
/// use frontend::shared::number_format::format_locale;
/// assert_eq!(format_locale(1234567.5), "1,234,567.5");
/// ```
pub fn format_locale(value: f64) -> String {
    let mut formatted = format!("{:.3}", value);
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }
    if formatted == "-0" {
        formatted = "0".to_string();
    }
    group_integer_part(&formatted)
}

/// Integer amount with separators; the fraction is truncated.
///
/// Used for table cells, where amounts are shown without the `¥` sign.
/// NaN and infinities print as `0`.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_currency;
///
/// assert_eq!(format_currency(1234567.0), "1,234,567");
/// assert_eq!(format_currency(999.99), "999");
/// assert_eq!(format_currency(-1500.5), "-1,500");
/// assert_eq!(format_currency(f64::NAN), "0");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    group_integer_part(&(value.trunc() as i64).to_string())
}

/// `¥` prefixed amount as shown in tooltips and axis labels.
pub fn format_yen(value: f64) -> String {
    format!("¥{}", format_locale(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_locale() {
        assert_eq!(format_locale(0.0), "0");
        assert_eq!(format_locale(999.0), "999");
        assert_eq!(format_locale(1000.0), "1,000");
        assert_eq!(format_locale(1234567.0), "1,234,567");
        assert_eq!(format_locale(1234.5), "1,234.5");
        assert_eq!(format_locale(-1234.0), "-1,234");
        assert_eq!(format_locale(0.12345), "0.123");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.89), "1,234,567");
        assert_eq!(format_currency(-1500.0), "-1,500");
        assert_eq!(format_currency(f64::NAN), "0");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(500.0), "¥500");
        assert_eq!(format_yen(1250000.0), "¥1,250,000");
    }
}
