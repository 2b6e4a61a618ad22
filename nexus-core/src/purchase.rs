//! Purchase message and WhatsApp deep-link construction.
//!
//! The link is an opaque URL scheme (`https://wa.me/...`); nothing is
//! awaited or parsed after opening it. The blank canvas is never eligible
//! for purchase - its primary action opens the editing flow instead, which
//! is the web layer's business.

use crate::catalog::CatalogEntry;
use crate::pricing::format_inr;

/// Human-readable purchase inquiry for a template.
pub fn purchase_message(title: &str, price: u32) -> String {
    format!(
        "Hello! I'm interested in purchasing the \"{title}\" template for \u{20b9}{}.",
        format_inr(price)
    )
}

/// WhatsApp deep link carrying a URL-encoded message.
pub fn whatsapp_url(recipient: &str, message: &str) -> String {
    format!("https://wa.me/{recipient}?text={}", urlencoding::encode(message))
}

/// Purchase link for a catalog entry, `None` for the blank canvas.
pub fn purchase_url(entry: &CatalogEntry, recipient: &str) -> Option<String> {
    match entry {
        CatalogEntry::Purchasable(record) => Some(whatsapp_url(
            recipient,
            &purchase_message(&record.title, record.price),
        )),
        CatalogEntry::BlankCanvas(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, DraftDetails};
    use pretty_assertions::assert_eq;

    #[test]
    fn message_names_title_and_localized_price() {
        let message = purchase_message("Luxury Hotel & Resort", 3999);
        assert_eq!(
            message,
            "Hello! I'm interested in purchasing the \"Luxury Hotel & Resort\" template for \u{20b9}3,999."
        );
    }

    #[test]
    fn deep_link_url_encodes_the_message() {
        let url = whatsapp_url("9310739038", "Hello! \"quoted\" & spaced");
        assert!(url.starts_with("https://wa.me/9310739038?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("Hello%21"));
        assert!(url.contains("%26"));
    }

    #[test]
    fn blank_canvas_never_yields_a_purchase_link() {
        let blank = CatalogEntry::BlankCanvas(DraftDetails::default());
        assert_eq!(purchase_url(&blank, "9310739038"), None);
    }

    #[test]
    fn purchasable_entries_yield_exactly_one_link() {
        for entry in catalog().iter().filter(|e| e.is_purchasable()) {
            let url = purchase_url(entry, "9310739038").expect("purchasable entry must link out");
            let encoded_title = urlencoding::encode(entry.title()).into_owned();
            assert!(url.contains(&encoded_title));
        }
    }
}
