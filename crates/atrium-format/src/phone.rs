//! US phone number formatting.

/// Format a raw phone string as `"(AAA) BBB-CCCC"`.
///
/// All non-digit characters are stripped first; if exactly ten digits
/// remain they are grouped US-style, otherwise the original input is
/// returned unchanged. Pass-through is deliberate: a shortcode, an
/// extension, or an international number is better shown as entered than
/// mangled into the wrong shape.
///
/// This formatter is US-only by design. International number handling is
/// a different feature with a real dependency behind it, not a missing
/// branch here.
///
/// # Example
///
/// ```
/// use atrium_format::format_phone;
///
/// assert_eq!(format_phone("5551234567"), "(555) 123-4567");
/// assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
/// assert_eq!(format_phone("12345"), "12345");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return raw.to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_bare_digits() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_format_phone_strips_punctuation() {
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("(555) 123 4567"), "(555) 123-4567");
        assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
    }

    #[test]
    fn test_format_phone_short_input_passes_through() {
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_format_phone_long_input_passes_through() {
        // Eleven digits (country code) is not reformatted.
        assert_eq!(format_phone("+1 555 123 4567"), "+1 555 123 4567");
    }

    #[test]
    fn test_format_phone_non_numeric_passes_through() {
        assert_eq!(format_phone("call me"), "call me");
    }
}
