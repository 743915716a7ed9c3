//! Money formatting per ISO 4217 conventions for the `en-US` display
//! locale.
//!
//! Digit grouping goes through ICU4X's [`DecimalFormatter`] rather than a
//! hand-maintained separator table; the ISO 4217 data this crate owns is
//! only the recognition set (which codes are real transactional
//! currencies) and each currency's minor-unit count.
//!
//! [`DecimalFormatter`]: icu::decimal::DecimalFormatter

use std::fmt;

use tracing::debug;

use crate::error::{FormatError, FormatResult};
use crate::DISPLAY_LOCALE;

/// Active ISO 4217 transactional currency codes and their minor units,
/// sorted by code.
///
/// Special-purpose codes (precious metals, bond units, the IMF's XDR, the
/// test code XTS, and the "no currency" XXX) are deliberately absent: an
/// amount tagged with one of those is a data error upstream, and showing
/// it as money would be misleading.
const MINOR_UNITS: &[(&str, u8)] = &[
    ("AED", 2), ("AFN", 2), ("ALL", 2), ("AMD", 2), ("ANG", 2), ("AOA", 2),
    ("ARS", 2), ("AUD", 2), ("AWG", 2), ("AZN", 2), ("BAM", 2), ("BBD", 2),
    ("BDT", 2), ("BGN", 2), ("BHD", 3), ("BIF", 0), ("BMD", 2), ("BND", 2),
    ("BOB", 2), ("BRL", 2), ("BSD", 2), ("BTN", 2), ("BWP", 2), ("BYN", 2),
    ("BZD", 2), ("CAD", 2), ("CDF", 2), ("CHF", 2), ("CLP", 0), ("CNY", 2),
    ("COP", 2), ("CRC", 2), ("CUP", 2), ("CVE", 2), ("CZK", 2), ("DJF", 0),
    ("DKK", 2), ("DOP", 2), ("DZD", 2), ("EGP", 2), ("ERN", 2), ("ETB", 2),
    ("EUR", 2), ("FJD", 2), ("FKP", 2), ("GBP", 2), ("GEL", 2), ("GHS", 2),
    ("GIP", 2), ("GMD", 2), ("GNF", 0), ("GTQ", 2), ("GYD", 2), ("HKD", 2),
    ("HNL", 2), ("HTG", 2), ("HUF", 2), ("IDR", 2), ("ILS", 2), ("INR", 2),
    ("IQD", 3), ("IRR", 2), ("ISK", 0), ("JMD", 2), ("JOD", 3), ("JPY", 0),
    ("KES", 2), ("KGS", 2), ("KHR", 2), ("KMF", 0), ("KPW", 2), ("KRW", 0),
    ("KWD", 3), ("KYD", 2), ("KZT", 2), ("LAK", 2), ("LBP", 2), ("LKR", 2),
    ("LRD", 2), ("LSL", 2), ("LYD", 3), ("MAD", 2), ("MDL", 2), ("MGA", 2),
    ("MKD", 2), ("MMK", 2), ("MNT", 2), ("MOP", 2), ("MRU", 2), ("MUR", 2),
    ("MVR", 2), ("MWK", 2), ("MXN", 2), ("MYR", 2), ("MZN", 2), ("NAD", 2),
    ("NGN", 2), ("NIO", 2), ("NOK", 2), ("NPR", 2), ("NZD", 2), ("OMR", 3),
    ("PAB", 2), ("PEN", 2), ("PGK", 2), ("PHP", 2), ("PKR", 2), ("PLN", 2),
    ("PYG", 0), ("QAR", 2), ("RON", 2), ("RSD", 2), ("RUB", 2), ("RWF", 0),
    ("SAR", 2), ("SBD", 2), ("SCR", 2), ("SDG", 2), ("SEK", 2), ("SGD", 2),
    ("SHP", 2), ("SLE", 2), ("SOS", 2), ("SRD", 2), ("SSP", 2), ("STN", 2),
    ("SVC", 2), ("SYP", 2), ("SZL", 2), ("THB", 2), ("TJS", 2), ("TMT", 2),
    ("TND", 3), ("TOP", 2), ("TRY", 2), ("TTD", 2), ("TWD", 2), ("TZS", 2),
    ("UAH", 2), ("UGX", 0), ("USD", 2), ("UYU", 2), ("UZS", 2), ("VES", 2),
    ("VND", 0), ("VUV", 0), ("WST", 2), ("XAF", 0), ("XCD", 2), ("XOF", 0),
    ("XPF", 0), ("YER", 2), ("ZAR", 2), ("ZMW", 2), ("ZWG", 2),
];

/// Currency code (ISO 4217).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a new currency code. Input is uppercased.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// US Dollar
    pub fn usd() -> Self {
        Self::new("USD")
    }

    /// Euro
    pub fn eur() -> Self {
        Self::new("EUR")
    }

    /// British Pound
    pub fn gbp() -> Self {
        Self::new("GBP")
    }

    /// Japanese Yen
    pub fn jpy() -> Self {
        Self::new("JPY")
    }

    /// Get the code as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a recognized active ISO 4217 transactional code.
    pub fn is_recognized(&self) -> bool {
        self.minor_units().is_some()
    }

    /// Minor units (fraction digits) for this currency, if recognized.
    pub fn minor_units(&self) -> Option<u8> {
        MINOR_UNITS
            .binary_search_by(|(code, _)| (*code).cmp(self.0.as_str()))
            .ok()
            .map(|index| MINOR_UNITS[index].1)
    }

    /// The display symbol for well-known currencies.
    ///
    /// Returns `None` for currencies `en-US` renders by code
    /// (e.g. `"CHF 12.00"`, `"PLN 12.00"`).
    pub fn symbol(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("\u{20ac}"),  // €
            "GBP" => Some("\u{00a3}"),  // £
            "JPY" | "CNY" => Some("\u{00a5}"), // ¥
            "KRW" => Some("\u{20a9}"),  // ₩
            "INR" => Some("\u{20b9}"),  // ₹
            "RUB" => Some("\u{20bd}"),  // ₽
            "NGN" => Some("\u{20a6}"),  // ₦
            "PHP" => Some("\u{20b1}"),  // ₱
            "THB" => Some("\u{0e3f}"),  // ฿
            "VND" => Some("\u{20ab}"),  // ₫
            "ILS" => Some("\u{20aa}"),  // ₪
            "TRY" => Some("\u{20ba}"),  // ₺
            "UAH" => Some("\u{20b4}"),  // ₴
            "BRL" => Some("R$"),
            "CAD" => Some("CA$"),
            "AUD" => Some("A$"),
            "MXN" => Some("MX$"),
            "HKD" => Some("HK$"),
            "NZD" => Some("NZ$"),
            _ => None,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format an amount as money in the `en-US` display locale.
///
/// Symbol placement, digit grouping, and fraction digits follow ISO 4217
/// conventions rendered for `en-US`: the symbol is prefixed
/// (`"$1,234.50"`), currencies without a common symbol are prefixed by
/// code and a no-break space (`"CHF\u{a0}1,234.50"`), and the fraction is
/// padded or rounded to the currency's minor units (`"¥1,235"` for JPY).
///
/// # Errors
///
/// - [`FormatError::InvalidCurrencyCode`] if `currency` is not a
///   recognized active ISO 4217 code. Guessing a currency for a money
///   display is unsafe, so this is surfaced to the caller instead of
///   degrading.
/// - [`FormatError::NonFiniteAmount`] for NaN or infinite amounts.
///
/// # Example
///
/// ```
/// use atrium_format::format_currency;
///
/// assert_eq!(format_currency(0.0, "USD").unwrap(), "$0.00");
/// assert_eq!(format_currency(1234.5, "USD").unwrap(), "$1,234.50");
/// assert!(format_currency(10.0, "XXX").is_err());
/// ```
pub fn format_currency(amount: f64, currency: &str) -> FormatResult<String> {
    let code = CurrencyCode::new(currency);
    let Some(minor_units) = code.minor_units() else {
        debug!(code = %code, "rejecting unrecognized currency code");
        return Err(FormatError::InvalidCurrencyCode {
            code: currency.to_string(),
        });
    };
    if !amount.is_finite() {
        return Err(FormatError::NonFiniteAmount);
    }

    let digits = grouped_digits(amount.abs(), minor_units);
    let sign = if amount < 0.0 { "-" } else { "" };
    let formatted = match code.symbol() {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code}\u{a0}{digits}"),
    };
    Ok(formatted)
}

/// Format a US-dollar amount, the marketplace's default currency.
pub fn format_usd(amount: f64) -> FormatResult<String> {
    format_currency(amount, "USD")
}

/// Group a non-negative amount with `en-US` separators at a fixed number
/// of fraction digits.
fn grouped_digits(amount: f64, fraction_digits: u8) -> String {
    use icu::decimal::input::Decimal;
    use icu::decimal::DecimalFormatter;
    use icu::locale::Locale;

    let locale: Locale = DISPLAY_LOCALE
        .parse()
        .expect("display locale literal is well-formed");
    let formatter = DecimalFormatter::try_new(locale.into(), Default::default())
        .expect("en-US decimal data is compiled in");

    // Scale to an integer so the fraction is exact, then shift back.
    let scale = 10_i64.pow(fraction_digits as u32);
    let scaled = (amount * scale as f64).round() as i64;
    let mut decimal = Decimal::from(scaled);
    decimal.multiply_pow10(-(fraction_digits as i16));

    formatter.format(&decimal).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_zero_usd() {
        assert_eq!(format_currency(0.0, "USD").unwrap(), "$0.00");
    }

    #[test]
    fn test_format_currency_grouping_and_padding() {
        assert_eq!(format_currency(1234.5, "USD").unwrap(), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0, "USD").unwrap(), "$1,000,000.00");
        assert_eq!(format_currency(999.0, "USD").unwrap(), "$999.00");
    }

    #[test]
    fn test_format_currency_unknown_code() {
        assert_eq!(
            format_currency(10.0, "XXX"),
            Err(FormatError::InvalidCurrencyCode {
                code: "XXX".to_string()
            })
        );
        assert!(format_currency(10.0, "ZZZ").is_err());
        assert!(format_currency(10.0, "").is_err());
    }

    #[test]
    fn test_format_currency_code_case_insensitive() {
        assert_eq!(format_currency(5.0, "usd").unwrap(), "$5.00");
    }

    #[test]
    fn test_format_currency_zero_minor_units() {
        assert_eq!(format_currency(1234.5, "JPY").unwrap(), "\u{00a5}1,235");
        assert_eq!(format_currency(50000.0, "KRW").unwrap(), "\u{20a9}50,000");
    }

    #[test]
    fn test_format_currency_three_minor_units() {
        assert_eq!(format_currency(12.3456, "KWD").unwrap(), "KWD\u{a0}12.346");
    }

    #[test]
    fn test_format_currency_symbolless_code_prefix() {
        assert_eq!(format_currency(12.0, "CHF").unwrap(), "CHF\u{a0}12.00");
        assert_eq!(format_currency(1234.5, "PLN").unwrap(), "PLN\u{a0}1,234.50");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5.0, "USD").unwrap(), "-$5.00");
        assert_eq!(format_currency(-1234.5, "EUR").unwrap(), "-\u{20ac}1,234.50");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(
            format_currency(f64::NAN, "USD"),
            Err(FormatError::NonFiniteAmount)
        );
        assert_eq!(
            format_currency(f64::INFINITY, "USD"),
            Err(FormatError::NonFiniteAmount)
        );
    }

    #[test]
    fn test_format_usd_default() {
        assert_eq!(format_usd(19.99).unwrap(), "$19.99");
    }

    #[test]
    fn test_currency_code_recognition() {
        assert!(CurrencyCode::usd().is_recognized());
        assert!(CurrencyCode::new("xof").is_recognized());
        assert!(!CurrencyCode::new("XXX").is_recognized());
        assert!(!CurrencyCode::new("XAU").is_recognized());
        assert_eq!(CurrencyCode::jpy().minor_units(), Some(0));
        assert_eq!(CurrencyCode::new("BHD").minor_units(), Some(3));
    }

    #[test]
    fn test_minor_units_table_sorted() {
        // Lookup binary-searches the table; it must stay sorted.
        for window in MINOR_UNITS.windows(2) {
            assert!(window[0].0 < window[1].0, "{} >= {}", window[0].0, window[1].0);
        }
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::usd().symbol(), Some("$"));
        assert_eq!(CurrencyCode::eur().symbol(), Some("\u{20ac}"));
        assert_eq!(CurrencyCode::gbp().symbol(), Some("\u{00a3}"));
        assert_eq!(CurrencyCode::new("CHF").symbol(), None);
    }
}
