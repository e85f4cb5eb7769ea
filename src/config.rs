use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose binding table when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Selectors and ids the rendered page provides
pub const FRAGMENT_LINKS: &str = "a[href^=\"#\"]";
pub const FADE_IN: &str = ".fade-in";
pub const VISIBLE_CLASS: &str = "visible";
pub const NAVBAR: &str = ".navbar";
pub const BOOKING_FORM_ID: &str = "bookingForm";
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "phone", "email", "session_timing"];
pub const EMAIL_FIELD_ID: &str = "email";
pub const PHONE_FIELD_ID: &str = "phone";
pub const CHOICE_GROUP: &str = "sliding_scale";
pub const CHECKED_CHOICE: &str = "input[name=\"sliding_scale\"]:checked";
pub const CHOICE_LABELS: &str = ".form-check-label";
pub const CTA_BUTTON: &str = ".cta-button";
pub const VIDEO_PLACEHOLDER: &str = ".video-placeholder";
pub const SERVICE_CARD: &str = ".service-card";
pub const TESTIMONIAL_CARD: &str = ".testimonial-card";
pub const FLOATING_ELEMENT: &str = ".floating-element";
pub const HERO_SECTION: &str = ".hero-section";
pub const HERO_SUBTITLE: &str = ".hero-subtitle";
pub const COUNTED_TEXTAREAS: &str = "textarea";
pub const NOTIFICATION: &str = ".notification";
pub const NOTIFICATION_STYLES_ID: &str = "notification-styles";

// Scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const NAVBAR_BACKGROUND_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const NAVBAR_BACKGROUND_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

// Colors
pub const ERROR_COLOR: &str = "#ff6b6b";
pub const DEFAULT_BORDER_COLOR: &str = "#e0e0e0";
pub const MUTED_TEXT_COLOR: &str = "#7F8C8D";

// Timings, milliseconds
pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const CHOICE_LABEL_RESET_MS: u32 = 3_000;
pub const CTA_RELEASE_MS: u32 = 150;
pub const PAGE_FADE_DELAY_MS: u32 = 100;
pub const TYPING_START_DELAY_MS: u32 = 1_000;
pub const TYPING_CHAR_MS: u32 = 30;

pub const COUNTER_WARNING_BELOW: i64 = 50;

// Messages
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const BOOKING_SUCCESS_MESSAGE: &str =
    "Thank you for your booking request! I will get back to you soon to confirm your session details.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const VIDEO_PLACEHOLDER_MESSAGE: &str =
    "Video testimonial would play here. Integration with video platform needed.";
