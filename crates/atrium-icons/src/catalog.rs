//! The built-in icon catalog.
//!
//! Every icon the app's screens use is defined here as a constant
//! [`IconData`] and collected into [`BUILTIN`], which the registry
//! ingests at first use. All icons are drawn in the shared 24x24 frame
//! with a 2-unit stroke so they sit on a common optical grid; the only
//! fill-only entry is the "more" menu dots, and the only dual-state entry
//! is the save/heart icon.

use crate::types::{IconData, IconPath, PaintMode, ViewBox};

/// Registry names for every built-in icon.
///
/// Screens should reference icons through these constants rather than
/// string literals so a renamed icon fails at compile time.
pub mod names {
    /// Home tab
    pub const HOME: &str = "home";
    /// Search tab
    pub const SEARCH: &str = "search";
    /// Sell tab (create listing)
    pub const SELL: &str = "sell";
    /// Saved-listings tab; dual state
    pub const SAVED: &str = "saved";
    /// Inbox tab (conversations)
    pub const INBOX: &str = "inbox";
    /// Profile tab
    pub const PROFILE: &str = "profile";
    /// Booking calendar
    pub const CALENDAR: &str = "calendar";
    /// Payment card
    pub const CARD: &str = "card";
    /// Back navigation chevron
    pub const BACK: &str = "back";
    /// Forward/disclosure chevron
    pub const FORWARD: &str = "forward";
    /// Close/dismiss
    pub const CLOSE: &str = "close";
    /// Confirmation check
    pub const CHECK: &str = "check";
    /// Generic add
    pub const PLUS: &str = "plus";
    /// Generic remove
    pub const MINUS: &str = "minus";
    /// Overflow menu dots
    pub const MORE: &str = "more";
    /// Camera capture
    pub const CAMERA: &str = "camera";
    /// Photo/image placeholder
    pub const IMAGE: &str = "image";
    /// Listing location pin
    pub const LOCATION: &str = "location";
    /// Rating star
    pub const STAR: &str = "star";
    /// Settings sliders
    pub const SETTINGS: &str = "settings";
    /// Notification bell
    pub const BELL: &str = "bell";
    /// Delete listing
    pub const TRASH: &str = "trash";
    /// Search filter funnel
    pub const FILTER: &str = "filter";
    /// Support email
    pub const MAIL: &str = "mail";
    /// Support phone
    pub const PHONE: &str = "phone";
    /// Sign out
    pub const LOGOUT: &str = "logout";
}

/// Default size for tab and toolbar icons.
const SIZE: f32 = 24.0;

/// Default ink color (near-black slate).
const INK: &str = "#111827";

/// Default color for the save/heart icon when filled.
const ROSE: &str = "#E0245E";

const STROKE: PaintMode = PaintMode::Stroke { width: 2.0 };

const HOME_PATHS: &[IconPath] = &[IconPath::new(
    "M3 9.5 12 3l9 6.5V21a1 1 0 0 1-1 1h-5v-7h-6v7H4a1 1 0 0 1-1-1z",
    STROKE,
)];

const SEARCH_PATHS: &[IconPath] = &[IconPath::new(
    "M11 4a7 7 0 1 0 0 14 7 7 0 0 0 0-14zM16 16l5 5",
    STROKE,
)];

const SELL_PATHS: &[IconPath] = &[IconPath::new(
    "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM12 8v8M8 12h8",
    STROKE,
)];

const SAVED_PATHS: &[IconPath] = &[IconPath::new(
    "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 \
     7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
    PaintMode::DualState { width: 2.0 },
)];

const INBOX_PATHS: &[IconPath] = &[IconPath::new(
    "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 \
     1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 \
     8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8z",
    STROKE,
)];

const PROFILE_PATHS: &[IconPath] = &[IconPath::new(
    "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
    STROKE,
)];

const CALENDAR_PATHS: &[IconPath] = &[IconPath::new(
    "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 \
     2-2zM16 2v4M8 2v4M3 10h18",
    STROKE,
)];

// Filled band behind a stroked outline; the two paths paint independently.
const CARD_PATHS: &[IconPath] = &[
    IconPath::new("M2 9h20v3H2z", PaintMode::Fill),
    IconPath::new(
        "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
        STROKE,
    ),
];

const BACK_PATHS: &[IconPath] = &[IconPath::new("M15 18l-6-6 6-6", STROKE)];

const FORWARD_PATHS: &[IconPath] = &[IconPath::new("M9 18l6-6-6-6", STROKE)];

const CLOSE_PATHS: &[IconPath] = &[IconPath::new("M18 6 6 18M6 6l12 12", STROKE)];

const CHECK_PATHS: &[IconPath] = &[IconPath::new("M20 6 9 17l-5-5", STROKE)];

const PLUS_PATHS: &[IconPath] = &[IconPath::new("M12 5v14M5 12h14", STROKE)];

const MINUS_PATHS: &[IconPath] = &[IconPath::new("M5 12h14", STROKE)];

const MORE_PATHS: &[IconPath] = &[IconPath::new(
    "M12 10.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3zM5 10.5a1.5 1.5 0 1 0 0 3 \
     1.5 1.5 0 0 0 0-3zM19 10.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3z",
    PaintMode::Fill,
)];

const CAMERA_PATHS: &[IconPath] = &[IconPath::new(
    "M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 \
     0 0 1 2 2zM12 9a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
    STROKE,
)];

const IMAGE_PATHS: &[IconPath] = &[IconPath::new(
    "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 \
     2-2zM8.5 8a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3zM21 15l-5-5L5 21",
    STROKE,
)];

const LOCATION_PATHS: &[IconPath] = &[IconPath::new(
    "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
    STROKE,
)];

const STAR_PATHS: &[IconPath] = &[IconPath::new(
    "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 \
     14.14 2 9.27l6.91-1.01z",
    STROKE,
)];

const SETTINGS_PATHS: &[IconPath] = &[IconPath::new(
    "M4 21v-7M4 10V3M12 21v-9M12 8V3M20 21v-5M20 12V3M1 14h6M9 8h6M17 16h6",
    STROKE,
)];

const BELL_PATHS: &[IconPath] = &[IconPath::new(
    "M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9M13.73 21a2 2 0 0 1-3.46 0",
    STROKE,
)];

const TRASH_PATHS: &[IconPath] = &[IconPath::new(
    "M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2M5 6v14a2 2 0 0 0 2 2h10a2 \
     2 0 0 0 2-2V6",
    STROKE,
)];

const FILTER_PATHS: &[IconPath] = &[IconPath::new(
    "M22 3H2l8 9.46V19l4 2v-8.54z",
    STROKE,
)];

const MAIL_PATHS: &[IconPath] = &[IconPath::new(
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 \
     2-2zM22 6l-10 7L2 6",
    STROKE,
)];

const PHONE_PATHS: &[IconPath] = &[IconPath::new(
    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 \
     1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 \
     12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 \
     6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
    STROKE,
)];

const LOGOUT_PATHS: &[IconPath] = &[IconPath::new(
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9",
    STROKE,
)];

const HOME: IconData = IconData::new(names::HOME, ViewBox::SQUARE_24, HOME_PATHS, SIZE, INK);
const SEARCH: IconData = IconData::new(names::SEARCH, ViewBox::SQUARE_24, SEARCH_PATHS, SIZE, INK);
const SELL: IconData = IconData::new(names::SELL, ViewBox::SQUARE_24, SELL_PATHS, SIZE, INK);
const SAVED: IconData = IconData::new(names::SAVED, ViewBox::SQUARE_24, SAVED_PATHS, SIZE, ROSE);
const INBOX: IconData = IconData::new(names::INBOX, ViewBox::SQUARE_24, INBOX_PATHS, SIZE, INK);
const PROFILE: IconData =
    IconData::new(names::PROFILE, ViewBox::SQUARE_24, PROFILE_PATHS, SIZE, INK);
const CALENDAR: IconData =
    IconData::new(names::CALENDAR, ViewBox::SQUARE_24, CALENDAR_PATHS, SIZE, INK);
const CARD: IconData = IconData::new(names::CARD, ViewBox::SQUARE_24, CARD_PATHS, SIZE, INK);
const BACK: IconData = IconData::new(names::BACK, ViewBox::SQUARE_24, BACK_PATHS, SIZE, INK);
const FORWARD: IconData =
    IconData::new(names::FORWARD, ViewBox::SQUARE_24, FORWARD_PATHS, SIZE, INK);
const CLOSE: IconData = IconData::new(names::CLOSE, ViewBox::SQUARE_24, CLOSE_PATHS, SIZE, INK);
const CHECK: IconData = IconData::new(names::CHECK, ViewBox::SQUARE_24, CHECK_PATHS, SIZE, INK);
const PLUS: IconData = IconData::new(names::PLUS, ViewBox::SQUARE_24, PLUS_PATHS, SIZE, INK);
const MINUS: IconData = IconData::new(names::MINUS, ViewBox::SQUARE_24, MINUS_PATHS, SIZE, INK);
const MORE: IconData = IconData::new(names::MORE, ViewBox::SQUARE_24, MORE_PATHS, SIZE, INK);
const CAMERA: IconData = IconData::new(names::CAMERA, ViewBox::SQUARE_24, CAMERA_PATHS, SIZE, INK);
const IMAGE: IconData = IconData::new(names::IMAGE, ViewBox::SQUARE_24, IMAGE_PATHS, SIZE, INK);
const LOCATION: IconData =
    IconData::new(names::LOCATION, ViewBox::SQUARE_24, LOCATION_PATHS, SIZE, INK);
const STAR: IconData = IconData::new(names::STAR, ViewBox::SQUARE_24, STAR_PATHS, SIZE, INK);
const SETTINGS: IconData =
    IconData::new(names::SETTINGS, ViewBox::SQUARE_24, SETTINGS_PATHS, SIZE, INK);
const BELL: IconData = IconData::new(names::BELL, ViewBox::SQUARE_24, BELL_PATHS, SIZE, INK);
const TRASH: IconData = IconData::new(names::TRASH, ViewBox::SQUARE_24, TRASH_PATHS, SIZE, INK);
const FILTER: IconData = IconData::new(names::FILTER, ViewBox::SQUARE_24, FILTER_PATHS, SIZE, INK);
const MAIL: IconData = IconData::new(names::MAIL, ViewBox::SQUARE_24, MAIL_PATHS, SIZE, INK);
const PHONE: IconData = IconData::new(names::PHONE, ViewBox::SQUARE_24, PHONE_PATHS, SIZE, INK);
const LOGOUT: IconData = IconData::new(names::LOGOUT, ViewBox::SQUARE_24, LOGOUT_PATHS, SIZE, INK);

/// Every built-in icon, in registry order.
pub(crate) const BUILTIN: &[&IconData] = &[
    &HOME, &SEARCH, &SELL, &SAVED, &INBOX, &PROFILE, &CALENDAR, &CARD, &BACK, &FORWARD, &CLOSE,
    &CHECK, &PLUS, &MINUS, &MORE, &CAMERA, &IMAGE, &LOCATION, &STAR, &SETTINGS, &BELL, &TRASH,
    &FILTER, &MAIL, &PHONE, &LOGOUT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<&str> = BUILTIN.iter().map(|icon| icon.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn test_catalog_shared_frame_and_defaults() {
        for icon in BUILTIN {
            assert_eq!(icon.view_box, ViewBox::SQUARE_24, "{}", icon.name);
            assert_eq!(icon.default_size, 24.0, "{}", icon.name);
            assert!(!icon.paths.is_empty(), "{}", icon.name);
        }
    }

    #[test]
    fn test_saved_is_the_only_dual_state_icon() {
        let dual: Vec<&str> = BUILTIN
            .iter()
            .filter(|icon| icon.has_dual_state())
            .map(|icon| icon.name)
            .collect();
        assert_eq!(dual, vec![names::SAVED]);
    }

    #[test]
    fn test_card_mixes_fill_and_stroke_paths() {
        assert_eq!(CARD.paths.len(), 2);
        assert_eq!(CARD.paths[0].mode, PaintMode::Fill);
        assert_eq!(CARD.paths[1].mode, PaintMode::Stroke { width: 2.0 });
    }

    #[test]
    fn test_more_is_fill_only() {
        assert!(MORE
            .paths
            .iter()
            .all(|path| path.mode == PaintMode::Fill));
    }
}
