use web_sys::Document;

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

/// Inline styles applied while the pointer is over a card, and the ones that
/// put it back.
pub struct CardHover {
    pub selector: &'static str,
    pub enter: &'static [(&'static str, &'static str)],
    pub leave: &'static [(&'static str, &'static str)],
}

pub const CARDS: [CardHover; 2] = [
    CardHover {
        selector: config::SERVICE_CARD,
        enter: &[("transform", "translateY(-10px) scale(1.02)")],
        leave: &[("transform", "translateY(0) scale(1)")],
    },
    CardHover {
        selector: config::TESTIMONIAL_CARD,
        enter: &[
            ("transform", "scale(1.02)"),
            ("box-shadow", "0 15px 40px rgba(0,0,0,0.15)"),
        ],
        leave: &[
            ("transform", "scale(1)"),
            ("box-shadow", "0 10px 30px rgba(0,0,0,0.1)"),
        ],
    },
];

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    for hover in &CARDS {
        for card in dom::query_all(document, hover.selector) {
            for (event, styles) in [("mouseenter", hover.enter), ("mouseleave", hover.leave)] {
                let target = card.clone();
                bindings.listen(&card, hover.selector, event, move |_| {
                    for (property, value) in styles {
                        dom::set_style(&target, property, value);
                    }
                })?;
            }
        }
    }
    Ok(())
}
