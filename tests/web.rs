#![cfg(target_arch = "wasm32")]

use booking_site::behaviors::{booking_form, smooth_scroll};
use booking_site::{config, notification, BindError, PageInteractionController, Severity};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
<nav class="navbar"></nav>
<section class="hero-section"><p class="hero-subtitle">Gentle support</p></section>
<a id="jump" href="#services">Services</a>
<a id="nowhere" href="#missing">Missing</a>
<a id="bare" href="#">Top</a>
<div id="services" class="fade-in service-card">Individual therapy</div>
<div id="video" class="video-placeholder">Play</div>
<form id="bookingForm">
    <input id="name" name="name">
    <input id="phone" name="phone">
    <input id="email" name="email">
    <input id="session_timing" name="session_timing">
    <input type="radio" id="scale_yes" name="sliding_scale" value="yes">
    <label class="form-check-label" for="scale_yes">Yes</label>
    <input type="radio" id="scale_no" name="sliding_scale" value="no">
    <label class="form-check-label" for="scale_no">No</label>
    <div><textarea id="notes" name="notes" maxlength="100"></textarea></div>
</form>
<button class="cta-button">Book a session</button>
"##;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Page markup lives in its own container so the test runner's output stays in place.
fn fixture(document: &Document, markup: &str) {
    let container = match document.get_element_by_id("fixture") {
        Some(container) => container,
        None => {
            let container = document.create_element("div").unwrap();
            container.set_id("fixture");
            document.body().unwrap().append_child(&container).unwrap();
            container
        }
    };
    container.set_inner_html(markup);
}

fn mount() -> (Document, PageInteractionController) {
    mount_page(PAGE)
}

fn mount_page(markup: &str) -> (Document, PageInteractionController) {
    let document = document();
    notification::dismiss();
    fixture(&document, markup);
    let controller = PageInteractionController::bind(&document).unwrap();
    (document, controller)
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

/// Dispatches a cancelable event; returns `false` when a handler prevented the default.
fn fire(target: &Element, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

fn notification_count(document: &Document) -> u32 {
    document.query_selector_all(config::NOTIFICATION).unwrap().length()
}

fn fill_booking(document: &Document) {
    for (id, value) in [
        ("name", "Ann Example"),
        ("phone", "555-123-4567"),
        ("email", "a@b.com"),
        ("session_timing", "evening"),
    ] {
        by_id::<HtmlInputElement>(document, id).set_value(value);
    }
    by_id::<HtmlInputElement>(document, "scale_yes").set_checked(true);
}

fn label_color(document: &Document) -> String {
    by_id::<HtmlElement>(document, "bookingForm")
        .query_selector(config::CHOICE_LABELS)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("color")
        .unwrap()
}

#[wasm_bindgen_test]
fn missing_booking_form_fails_to_bind() {
    let document = document();
    fixture(&document, "<nav class=\"navbar\"></nav>");
    match PageInteractionController::bind(&document) {
        Err(BindError::MissingElement(selector)) => assert_eq!(selector, "#bookingForm"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("binding should fail without the booking form"),
    }
}

#[wasm_bindgen_test]
fn fragment_links_cancel_navigation() {
    let (document, controller) = mount();
    assert!(controller.bindings().listener_count() > 0);
    assert!(!fire(&by_id(&document, "jump"), "click"));
    assert!(!fire(&by_id(&document, "nowhere"), "click"));
    assert!(!fire(&by_id(&document, "bare"), "click"));
}

#[wasm_bindgen_test]
fn only_resolvable_fragments_scroll() {
    let (document, _controller) = mount();
    assert!(smooth_scroll::scroll_to_fragment(&document, "#services"));
    assert!(!smooth_scroll::scroll_to_fragment(&document, "#missing"));
    assert!(!smooth_scroll::scroll_to_fragment(&document, "#"));
}

#[wasm_bindgen_test]
fn collected_booking_matches_form_in_document_order() {
    let (document, _controller) = mount();
    fill_booking(&document);
    let state = booking_form::collect(&by_id::<HtmlFormElement>(&document, "bookingForm")).unwrap();
    let fields: Vec<(&str, &str)> = state.iter().collect();
    assert_eq!(
        fields,
        [
            ("name", "Ann Example"),
            ("phone", "555-123-4567"),
            ("email", "a@b.com"),
            ("session_timing", "evening"),
            ("sliding_scale", "yes"),
            ("notes", ""),
        ]
    );
}

#[wasm_bindgen_test]
fn required_fields_are_read_by_id_not_by_name() {
    let page = PAGE.replace(r#"<input id="name" name="name">"#, r#"<input id="name" name="full_name">"#);
    let (document, _controller) = mount_page(&page);
    fill_booking(&document);

    assert!(!fire(&by_id(&document, "bookingForm"), "submit"));
    assert_eq!(
        notification::current_message().as_deref(),
        Some(config::BOOKING_SUCCESS_MESSAGE)
    );
    assert_eq!(by_id::<HtmlInputElement>(&document, "name").value(), "");
}

#[wasm_bindgen_test]
fn blank_required_field_blocks_submission() {
    let (document, _controller) = mount();
    fill_booking(&document);
    by_id::<HtmlInputElement>(&document, "phone").set_value("   ");

    assert!(!fire(&by_id(&document, "bookingForm"), "submit"));
    assert_eq!(notification_count(&document), 1);
    assert_eq!(
        notification::current_message().as_deref(),
        Some(config::REQUIRED_FIELDS_MESSAGE)
    );
    // Nothing was reset.
    assert_eq!(by_id::<HtmlInputElement>(&document, "name").value(), "Ann Example");
    let phone = by_id::<HtmlInputElement>(&document, "phone");
    let name = by_id::<HtmlInputElement>(&document, "name");
    assert_ne!(
        phone.style().get_property_value("border-color").unwrap(),
        name.style().get_property_value("border-color").unwrap()
    );
}

#[wasm_bindgen_test]
fn complete_booking_is_accepted_and_cleared() {
    let (document, _controller) = mount();
    fill_booking(&document);

    assert!(!fire(&by_id(&document, "bookingForm"), "submit"));
    assert_eq!(
        notification::current_message().as_deref(),
        Some(config::BOOKING_SUCCESS_MESSAGE)
    );
    assert_eq!(by_id::<HtmlInputElement>(&document, "name").value(), "");
    assert_eq!(by_id::<HtmlInputElement>(&document, "email").value(), "");
    assert!(!by_id::<HtmlInputElement>(&document, "scale_yes").checked());
}

#[wasm_bindgen_test]
async fn missing_choice_flags_labels_then_always_resets() {
    let (document, _controller) = mount();
    fill_booking(&document);
    by_id::<HtmlInputElement>(&document, "scale_yes").set_checked(false);

    assert!(!fire(&by_id(&document, "bookingForm"), "submit"));
    assert_eq!(
        notification::current_message().as_deref(),
        Some(config::REQUIRED_FIELDS_MESSAGE)
    );
    assert!(!label_color(&document).is_empty());

    // Picking an option does not cancel the pending reset.
    by_id::<HtmlInputElement>(&document, "scale_yes").set_checked(true);
    TimeoutFuture::new(config::CHOICE_LABEL_RESET_MS + 100).await;
    assert_eq!(label_color(&document), "");
}

#[wasm_bindgen_test]
fn email_checked_on_blur() {
    let (document, _controller) = mount();
    let email = by_id::<HtmlInputElement>(&document, "email");

    email.set_value("not-an-email");
    fire(&email, "blur");
    assert_eq!(
        notification::current_message().as_deref(),
        Some(config::INVALID_EMAIL_MESSAGE)
    );
    let flagged = email.style().get_property_value("border-color").unwrap();

    notification::dismiss();
    email.set_value("a@b.com");
    fire(&email, "blur");
    assert_eq!(notification_count(&document), 0);
    assert_ne!(email.style().get_property_value("border-color").unwrap(), flagged);
}

#[wasm_bindgen_test]
fn phone_checked_on_blur() {
    let (document, _controller) = mount();
    let phone = by_id::<HtmlInputElement>(&document, "phone");

    phone.set_value("555-123-4567");
    fire(&phone, "blur");
    assert_eq!(notification_count(&document), 0);

    phone.set_value("12345");
    fire(&phone, "blur");
    assert_eq!(
        notification::current_message().as_deref(),
        Some(config::INVALID_PHONE_MESSAGE)
    );
}

#[wasm_bindgen_test]
async fn second_notification_replaces_first() {
    let document = document();
    notification::show("first", Severity::Info);
    notification::show("second", Severity::Success);
    TimeoutFuture::new(20).await;

    assert_eq!(notification_count(&document), 1);
    let banner = document.query_selector(config::NOTIFICATION).unwrap().unwrap();
    assert_eq!(banner.class_name(), "notification notification-success");
    let message = document.query_selector(".notification-message").unwrap().unwrap();
    assert_eq!(message.text_content().as_deref(), Some("second"));
    assert!(document.get_element_by_id(config::NOTIFICATION_STYLES_ID).is_some());
    notification::dismiss();
}

#[wasm_bindgen_test]
async fn closing_removes_immediately_and_timer_is_harmless() {
    let document = document();
    notification::show("closable", Severity::Info);
    TimeoutFuture::new(20).await;

    let close = document
        .query_selector(".notification-close")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    close.click();
    assert_eq!(notification_count(&document), 0);
    assert_eq!(notification::current_message(), None);

    TimeoutFuture::new(config::NOTIFICATION_LIFETIME_MS + config::NOTIFICATION_EXIT_MS + 100).await;
    assert_eq!(notification_count(&document), 0);
}

#[wasm_bindgen_test]
async fn notification_expires_on_its_own() {
    let document = document();
    notification::show("short lived", Severity::Error);
    assert_eq!(notification_count(&document), 1);

    TimeoutFuture::new(config::NOTIFICATION_LIFETIME_MS - 200).await;
    assert_eq!(notification_count(&document), 1);

    TimeoutFuture::new(200 + config::NOTIFICATION_EXIT_MS + 100).await;
    assert_eq!(notification_count(&document), 0);
}

#[wasm_bindgen_test]
fn character_counter_tracks_input() {
    let (document, _controller) = mount();
    let notes = by_id::<HtmlTextAreaElement>(&document, "notes");
    let counter = notes.next_element_sibling().unwrap();
    assert_eq!(counter.text_content().as_deref(), Some("100 characters remaining"));
    let calm = counter.dyn_ref::<HtmlElement>().unwrap().style().get_property_value("color").unwrap();

    notes.set_value(&"x".repeat(60));
    fire(&notes, "input");
    assert_eq!(counter.text_content().as_deref(), Some("40 characters remaining"));
    let warning = counter.dyn_ref::<HtmlElement>().unwrap().style().get_property_value("color").unwrap();
    assert_ne!(calm, warning);
}

#[wasm_bindgen_test]
async fn hero_subtitle_types_out_once() {
    let (document, _controller) = mount();
    let subtitle = document.query_selector(config::HERO_SUBTITLE).unwrap().unwrap();
    let text = "Gentle support";

    TimeoutFuture::new(config::TYPING_START_DELAY_MS / 2).await;
    assert_eq!(subtitle.text_content().as_deref(), Some(""));

    let typing = config::TYPING_CHAR_MS * text.chars().count() as u32;
    TimeoutFuture::new(config::TYPING_START_DELAY_MS + typing + 500).await;
    assert_eq!(subtitle.text_content().as_deref(), Some(text));

    // The hero is no longer observed, so nothing restarts the effect.
    window_scroll_round_trip();
    TimeoutFuture::new(config::TYPING_START_DELAY_MS + 200).await;
    assert_eq!(subtitle.text_content().as_deref(), Some(text));
}

fn window_scroll_round_trip() {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 10_000.0);
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn cta_press_springs_back() {
    let (document, _controller) = mount();
    let cta = document
        .query_selector(config::CTA_BUTTON)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    cta.click();
    assert_eq!(cta.style().get_property_value("transform").unwrap(), "scale(0.95)");
    TimeoutFuture::new(config::CTA_RELEASE_MS + 50).await;
    assert_eq!(cta.style().get_property_value("transform").unwrap(), "scale(1)");
}

#[wasm_bindgen_test]
fn dropping_the_controller_detaches_handlers() {
    let (document, controller) = mount();
    drop(controller);
    assert!(fire(&by_id(&document, "jump"), "click"));
}

#[wasm_bindgen_test]
fn navbar_background_follows_scroll() {
    let (document, _controller) = mount();
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let init = EventInit::new();
    let scroll = Event::new_with_event_init_dict("scroll", &init).unwrap();
    window.dispatch_event(&scroll).unwrap();

    let navbar = document
        .query_selector(config::NAVBAR)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(
        navbar.style().get_property_value("background-color").unwrap(),
        config::NAVBAR_BACKGROUND_TOP
    );
}

#[wasm_bindgen_test]
fn service_card_lifts_and_settles() {
    let (document, _controller) = mount();
    let card = by_id::<HtmlElement>(&document, "services");

    fire(&card, "mouseenter");
    let lifted = card.style().get_property_value("transform").unwrap();
    assert!(lifted.contains("scale(1.02)"), "{lifted}");

    fire(&card, "mouseleave");
    let settled = card.style().get_property_value("transform").unwrap();
    assert_ne!(lifted, settled);
    assert!(settled.contains("scale(1)"), "{settled}");
}

#[wasm_bindgen_test]
fn video_placeholder_announces_itself() {
    let (document, _controller) = mount();
    by_id::<HtmlElement>(&document, "video").click();
    assert_eq!(
        notification::current_message().as_deref(),
        Some(config::VIDEO_PLACEHOLDER_MESSAGE)
    );
    let banner = document.query_selector(config::NOTIFICATION).unwrap().unwrap();
    assert_eq!(banner.class_name(), "notification notification-info");
}

#[wasm_bindgen_test]
async fn fade_in_candidates_become_visible() {
    let (document, _controller) = mount();
    TimeoutFuture::new(300).await;
    assert!(by_id::<Element>(&document, "services")
        .class_list()
        .contains(config::VISIBLE_CLASS));
}

#[wasm_bindgen_test]
async fn body_fades_in_after_load() {
    let (document, _controller) = mount();
    let body = document.body().unwrap();
    assert_eq!(body.style().get_property_value("opacity").unwrap(), "0");
    TimeoutFuture::new(config::PAGE_FADE_DELAY_MS + 50).await;
    assert_eq!(body.style().get_property_value("opacity").unwrap(), "1");
}
