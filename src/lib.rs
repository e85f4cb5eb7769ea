pub mod config;
pub mod error;
pub mod dom;
pub mod bindings;
pub mod form;
pub mod validation;
pub mod notification;
pub mod controller;

pub mod components {
    pub mod notification;
}

pub mod behaviors {
    pub mod smooth_scroll;
    pub mod reveal;
    pub mod navbar;
    pub mod booking_form;
    pub mod cta;
    pub mod video;
    pub mod hover;
    pub mod parallax;
    pub mod page_fade;
    pub mod typing;
    pub mod char_counter;
}

pub use controller::PageInteractionController;
pub use error::BindError;
pub use notification::Severity;
