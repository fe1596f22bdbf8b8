//! Input parsing and result formatting for the conversion form

use crate::catalog::Unit;

/// Parse the text field. Anything that is not a finite number reads as 0.
pub fn parse_input(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Fixed-decimal rendering, e.g. `format_value(3.14159, 2) == "3.14"`
pub fn format_value(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    // Avoid "-0.00" for tiny negatives that round to zero
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Placeholder text for the input field
pub fn input_hint(unit: &Unit) -> String {
    format!("Enter {}", unit.label.to_lowercase())
}

/// "32.00 fahrenheit is equal to 0.00 celsius"
pub fn summary(input: f64, from: &Unit, output: f64, to: &Unit, decimals: usize) -> String {
    format!(
        "{} {} is equal to {} {}",
        format_value(input, decimals),
        from.label.to_lowercase(),
        format_value(output, decimals),
        to.label.to_lowercase(),
    )
}
