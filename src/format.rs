//! Display formatting for numeric values.
//!
//! Every rendered number goes through one of these. They are pure string
//! builders; unit suffixes stay in the call sites.

/// Round to the nearest integer and group thousands with commas.
pub fn format_number(value: f64) -> String {
    let rounded = value.round() as i64;
    let grouped = group_digits(&rounded.unsigned_abs().to_string());
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Fixed two decimal places with a grouped integer part.
pub fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let grouped = group_digits(int_part);
    if value < 0.0 {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

/// Naira amount, sign ahead of the currency symbol.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-₦{}", format_decimal(-value))
    } else {
        format!("₦{}", format_decimal(value))
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.89), "1,234,568");
    }

    #[test]
    fn test_format_number_rounds_to_integer() {
        assert_eq!(format_number(700.4), "700");
        assert_eq!(format_number(700.5), "701");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_decimal_two_places() {
        assert_eq!(format_decimal(1234.5), "1,234.50");
        assert_eq!(format_decimal(0.126), "0.13");
        assert_eq!(format_decimal(-9876.543), "-9,876.54");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "₦1,234.50");
        assert_eq!(format_currency(0.0), "₦0.00");
        assert_eq!(format_currency(-50.0), "-₦50.00");
    }
}
