/// Groups digits in threes with `.` the way the `id` locale prints numbers.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Badge text for a count-up value, e.g. `169.000+`. A value that could not
/// be animated shows a dash instead of a number.
pub fn stat_badge(value: Option<u64>) -> String {
    match value {
        Some(v) => format!("{}+", format_thousands(v)),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(84_500), "84.500");
        assert_eq!(format_thousands(169_000), "169.000");
        assert_eq!(format_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn badge_falls_back_for_missing_values() {
        assert_eq!(stat_badge(Some(10_000)), "10.000+");
        assert_eq!(stat_badge(None), "–");
    }
}
