//! Transient notification banner.
//!
//! At most one banner is live at a time. This module owns that banner and the
//! keyframes stylesheet it animates with; nothing else touches either.

use std::cell::{Cell, RefCell};
use std::fmt;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Document, Element};
use yew::{AppHandle, Callback};

use crate::components::notification::{NotificationBanner, NotificationBannerProps};
use crate::config;
use crate::dom;
use crate::error::BindError;

const BANNER_STYLE: &str = "position: fixed; top: 100px; right: 20px; max-width: 400px; padding: 20px; border-radius: 10px; box-shadow: 0 10px 30px rgba(0,0,0,0.2); z-index: 9999; font-family: 'Poppins', sans-serif; animation: slideInRight 0.3s ease;";
const EXIT_ANIMATION: &str = "slideInRight 0.3s ease reverse";
const KEYFRAMES: &str = "
    @keyframes slideInRight {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }
";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "linear-gradient(45deg, #64B5A6, #A8D5E2)",
            Severity::Error => "linear-gradient(45deg, #ff6b6b, #ffa8a8)",
            Severity::Info => "linear-gradient(45deg, #4ecdc4, #44a08d)",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at: Utc::now(),
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.severity)
    }

    pub fn inline_style(&self) -> String {
        format!(
            "{} background: {}; color: white;",
            BANNER_STYLE,
            self.severity.background()
        )
    }
}

struct LiveNotification {
    id: u64,
    host: Element,
    app: AppHandle<NotificationBanner>,
    notification: Notification,
}

impl LiveNotification {
    fn tear_down(self) {
        self.app.destroy();
        self.host.remove();
    }
}

thread_local! {
    static LIVE: RefCell<Option<LiveNotification>> = RefCell::new(None);
    static NEXT_ID: Cell<u64> = Cell::new(0);
}

/// Shows `message`, replacing whatever notification is currently displayed.
pub fn show(message: impl Into<String>, severity: Severity) {
    let notification = Notification::new(message, severity);
    if let Err(err) = present(notification) {
        warn!("could not show notification: {}", err);
    }
}

/// Removes the live notification right away. Safe to call when none is shown.
pub fn dismiss() {
    if let Some(live) = LIVE.with(|live| live.borrow_mut().take()) {
        live.tear_down();
    }
}

/// Message of the notification currently attached to the page, if any.
pub fn current_message() -> Option<String> {
    LIVE.with(|live| {
        live.borrow()
            .as_ref()
            .filter(|live| live.host.is_connected())
            .map(|live| live.notification.message.clone())
    })
}

fn present(notification: Notification) -> Result<(), BindError> {
    let document = dom::document()?;
    evict(&document);
    ensure_keyframes(&document)?;

    let body = document
        .body()
        .ok_or_else(|| BindError::MissingElement("body".to_string()))?;
    let host = document
        .create_element("div")
        .map_err(BindError::js("createElement"))?;
    host.set_class_name(&notification.class_name());
    dom::set_css_text(&host, &notification.inline_style());
    body.append_child(&host).map_err(BindError::js("appendChild"))?;

    let id = NEXT_ID.with(|next| {
        let id = next.get() + 1;
        next.set(id);
        id
    });

    let on_close = {
        let host = host.clone();
        Callback::from(move |_: ()| {
            host.remove();
            debug!("notification {} closed", id);
        })
    };
    let app = yew::Renderer::<NotificationBanner>::with_root_and_props(
        host.clone(),
        NotificationBannerProps {
            message: notification.message.clone(),
            on_close,
        },
    )
    .render();

    debug!(
        "notification {} ({}) shown at {}",
        id,
        notification.severity,
        notification.created_at.to_rfc3339()
    );
    LIVE.with(|live| {
        *live.borrow_mut() = Some(LiveNotification {
            id,
            host: host.clone(),
            app,
            notification,
        })
    });
    schedule_dismissal(id, host);
    Ok(())
}

fn evict(document: &Document) {
    dismiss();
    for stray in dom::query_all(document, config::NOTIFICATION) {
        stray.remove();
    }
}

fn ensure_keyframes(document: &Document) -> Result<(), BindError> {
    if document.get_element_by_id(config::NOTIFICATION_STYLES_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(BindError::js("createElement"))?;
    style.set_id(config::NOTIFICATION_STYLES_ID);
    style.set_text_content(Some(KEYFRAMES));
    let head = document
        .head()
        .ok_or_else(|| BindError::MissingElement("head".to_string()))?;
    head.append_child(&style).map_err(BindError::js("appendChild"))?;
    Ok(())
}

fn schedule_dismissal(id: u64, host: Element) {
    Timeout::new(config::NOTIFICATION_LIFETIME_MS, move || {
        if !host.is_connected() {
            release(id);
            return;
        }
        dom::set_style(&host, "animation", EXIT_ANIMATION);
        Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
            host.remove();
            release(id);
        })
        .forget();
    })
    .forget();
}

/// Drops the live entry if it still belongs to notification `id`.
fn release(id: u64) {
    let stale = LIVE.with(|live| {
        let mut live = live.borrow_mut();
        if live.as_ref().map_or(false, |current| current.id == id) {
            live.take()
        } else {
            None
        }
    });
    if let Some(stale) = stale {
        debug!("notification {} expired", id);
        stale.tear_down();
    }
}
