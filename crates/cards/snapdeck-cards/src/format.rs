//! Display formatting used on the card face.

/// Format an amount the way an en-US locale does: thousands grouped with
/// commas and at most three fraction digits, trailing zeros dropped.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Hide all but the last four characters behind `#` and set the last four
/// apart with a space: `4929123456781234` becomes `############ 1234`.
pub fn mask_card_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() < 4 {
        return number.to_string();
    }
    let hidden = chars.len() - 4;
    let mut out = String::with_capacity(chars.len() + 1);
    out.extend(std::iter::repeat('#').take(hidden));
    out.push(' ');
    out.extend(&chars[hidden..]);
    out
}
