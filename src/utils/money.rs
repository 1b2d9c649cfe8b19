// Currency formatting

/// Format an amount with two decimals and comma thousands separators ("1,234,567.89")
pub fn format_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0.00");
        assert_eq!(format_thousands(999.999), "1,000.00");
        assert_eq!(format_thousands(1234.5), "1,234.50");
        assert_eq!(format_thousands(1234567.891), "1,234,567.89");
        assert_eq!(format_thousands(-4500.0), "-4,500.00");
        assert_eq!(format_thousands(-0.001), "0.00");
    }
}
