//! Display formatting for the Atrium marketplace app.
//!
//! This crate converts raw domain values (dates, money amounts, phone
//! numbers, long text) into the strings screens actually show. Every
//! function is a pure transform: equal input always yields an identical
//! string, nothing is mutated, and there is no shared state, so any number
//! of concurrent render passes may call into this crate without
//! coordination.
//!
//! # Display locale
//!
//! All output follows `en-US` conventions (month-first long dates, comma
//! digit grouping, prefixed currency symbols). This is a fixed product
//! policy, not a missing feature: the app ships in a single market and its
//! design reviews sign off on `en-US` renderings only.
//!
//! # Partial input policy
//!
//! Each formatter has exactly one documented behavior for imperfect input:
//!
//! - [`format_date`] degrades to the [`INVALID_DATE`] sentinel string
//!   (calendar UIs show *something* rather than failing a render),
//! - [`format_currency`] returns a structured error (guessing a money
//!   display is unsafe),
//! - [`format_phone`] passes the original input through unchanged,
//! - [`truncate`] is total.
//!
//! # Example
//!
//! ```
//! use atrium_format::{format_currency, format_date, format_phone, truncate};
//!
//! assert_eq!(format_date("2024-01-05"), "January 5, 2024");
//! assert_eq!(format_currency(1234.5, "USD").unwrap(), "$1,234.50");
//! assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
//! assert_eq!(truncate("hello world", 5), "hello...");
//! ```

mod currency;
mod date;
mod error;
mod phone;
mod text;

pub use currency::{format_currency, format_usd, CurrencyCode};
pub use date::{format_date, DateInput, INVALID_DATE};
pub use error::{FormatError, FormatResult};
pub use phone::format_phone;
pub use text::truncate;

/// The display locale every formatter in this crate renders for.
pub const DISPLAY_LOCALE: &str = "en-US";
