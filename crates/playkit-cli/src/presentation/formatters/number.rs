/// Fixed decimal places; `-0.000` is printed as `0.000`
pub fn format_fixed(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Averages always use two decimals, matching the CSV export
pub fn format_mean(value: f64) -> String {
    format_fixed(value, 2)
}
