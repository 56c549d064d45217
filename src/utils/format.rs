use chrono::{DateTime, NaiveDateTime};

/// Groups an 11-character phone number as `XXX-XXXX-XXXX`.
/// Any other length is returned untouched.
pub fn format_phone_number(phone_number: &str) -> String {
    let chars: Vec<char> = phone_number.chars().collect();
    if chars.len() != 11 {
        return phone_number.to_string();
    }

    let head: String = chars[..3].iter().collect();
    let middle: String = chars[3..7].iter().collect();
    let tail: String = chars[7..].iter().collect();
    format!("{}-{}-{}", head, middle, tail)
}

/// `1234567` -> `"1,234,567"`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Accepts RFC 3339 or the backend's `LocalDateTime` form; falls back to the raw text.
pub fn format_bid_time(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return parsed.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    raw.to_string()
}

/// Star string for a 0-5 seller rating, e.g. `4.4` -> `"★★★★☆ 4.4"`
pub fn format_rating(rating: f64) -> String {
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.round() as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), clamped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_digit_phone_is_grouped() {
        assert_eq!(format_phone_number("01012345678"), "010-1234-5678");
    }

    #[test]
    fn other_lengths_are_unchanged() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("0101234567"), "0101234567");
        assert_eq!(format_phone_number("010123456789"), "010123456789");
        assert_eq!(format_phone_number("010-1234-5678"), "010-1234-5678");
    }

    #[test]
    fn prices_get_thousand_separators() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1000), "1,000");
        assert_eq!(format_price(12345678), "12,345,678");
    }

    #[test]
    fn bid_times_are_shortened() {
        assert_eq!(format_bid_time("2024-05-01T13:45:10"), "2024-05-01 13:45");
        assert_eq!(format_bid_time("2024-05-01T13:45:10.123456"), "2024-05-01 13:45");
        assert_eq!(format_bid_time("2024-05-01T13:45:10+09:00"), "2024-05-01 13:45");
        assert_eq!(format_bid_time("yesterday"), "yesterday");
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(format_rating(4.4), "★★★★☆ 4.4");
        assert_eq!(format_rating(9.0), "★★★★★ 5.0");
    }
}
