/// Formats a raw server price as US dollars, e.g. `"$1234.5"` → `"$1,234.50"`.
///
/// A single leading `$` is ignored. Anything that does not parse as a finite
/// number is returned exactly as the server sent it.
pub fn format_price(raw: &str) -> String {
    let cleaned = raw.strip_prefix('$').unwrap_or(raw);
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => format_usd(value),
        _ => raw.to_string(),
    }
}

fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 四捨五入後是 0.00，不顯示負號
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_with_dollar_sign() {
        assert_eq!(format_price("$1234.5"), "$1,234.50");
        assert_eq!(format_price("$500"), "$500.00");
    }

    #[test]
    fn test_format_price_plain_numbers() {
        assert_eq!(format_price("0"), "$0.00");
        assert_eq!(format_price("999"), "$999.00");
        assert_eq!(format_price("1000"), "$1,000.00");
        assert_eq!(format_price("1234567.891"), "$1,234,567.89");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price("-42"), "-$42.00");
        assert_eq!(format_price("-0.001"), "$0.00");
    }

    #[test]
    fn test_format_price_fallback_passthrough() {
        assert_eq!(format_price("abc"), "abc");
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("Call for price"), "Call for price");
        assert_eq!(format_price("$$5"), "$$5");
        assert_eq!(format_price("1,000"), "1,000");
        assert_eq!(format_price("inf"), "inf");
        assert_eq!(format_price("NaN"), "NaN");
    }
}
