/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string(), '.')
}

/// Integer count with comma separators, e.g. "1,234"
pub fn format_count(n: usize) -> String {
    group_thousands(&n.to_string(), ',')
}

/// Money amount in dollars with 2 decimals, e.g. "$12,345.67"
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part, ','), frac_part)
}

/// Rating average with 2 decimals and a star, e.g. "4.21⭐"
pub fn format_rating(value: f64) -> String {
    format!("{:.2}⭐", value)
}

/// Placeholder for a value that is undefined on an empty view
pub const MISSING_VALUE: &str = "—";

fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
