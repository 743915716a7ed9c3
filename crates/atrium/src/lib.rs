//! Presentation-layer toolkit for the Atrium marketplace app.
//!
//! This crate is the facade the app shell builds on. It re-exports the
//! two presentation cores and owns the deploy-time environment surface:
//!
//! - [`format`] — locale-aware display formatting (dates, money, phone
//!   numbers, truncation),
//! - [`icons`] — the vector icon registry and generic renderer,
//! - [`env`] — typed access to the app's environment configuration.
//!
//! Screens compose these as leaf utilities: formatting produces strings,
//! icons produce rendering descriptions, and neither depends on anything
//! above it.
//!
//! # Example
//!
//! ```
//! use atrium::format::{format_usd, truncate};
//! use atrium::icons::{names, render, IconStyle};
//!
//! let price = format_usd(1234.5).unwrap();
//! let title = truncate("Vintage road bike, barely used", 20);
//! let badge = render(names::SAVED, &IconStyle::new().filled()).unwrap();
//!
//! assert_eq!(price, "$1,234.50");
//! assert_eq!(badge.size, 24.0);
//! # let _ = title;
//! ```
//!
//! # Logging
//!
//! All crates in the workspace instrument through `tracing`. The library
//! installs no subscriber; applications that want log output initialize
//! one themselves, e.g. `tracing_subscriber::fmt::init()`.

pub mod env;

/// Display formatting (re-export of `atrium-format`).
pub mod format {
    pub use atrium_format::*;
}

/// Vector icons (re-export of `atrium-icons`).
pub mod icons {
    pub use atrium_icons::*;
}

pub use env::{AppEnvironment, EnvError, EnvResult, Platform};

#[cfg(test)]
mod tests {
    #[test]
    fn test_facade_composition() {
        // One pass over the surfaces a screen actually touches.
        let price = crate::format::format_currency(0.0, "USD").unwrap();
        assert_eq!(price, "$0.00");

        let icon = crate::icons::render(
            crate::icons::names::CARD,
            &crate::icons::IconStyle::new().with_size(16.0),
        )
        .unwrap();
        assert_eq!(icon.size, 16.0);

        let env = crate::AppEnvironment::default();
        assert!(!env.payments_configured());
    }
}
