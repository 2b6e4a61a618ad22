//! Template catalog data model and the built-in catalog.
//!
//! A catalog entry is either a purchasable [`TemplateRecord`] or the blank
//! "create your own" canvas. The original site discriminated the two with a
//! reserved `id == "new"` string; here the distinction is a proper tagged
//! union so selection eligibility, the buy action, and thumbnail rendering
//! can't silently diverge on a magic string.

use serde::{Deserialize, Serialize};

use crate::preview::escape_html;

/// Display categories offered by the storefront (also used by the
/// details-editing modal and the footer link column).
pub const CATEGORIES: &[&str] = &["Business", "E-commerce", "Portfolio", "Landing Page", "SaaS"];

/// How a template's preview content is supplied.
///
/// Exactly one shape is present per record: either a set of files resolved
/// lazily over HTTP, or a literal HTML document that needs no fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateContent {
    /// Ordered mapping from virtual in-preview path (e.g. `/index.html`) to
    /// the real fetchable source path. Order is the declared render order.
    Files(Vec<(String, String)>),
    /// A complete HTML document embedded directly.
    Inline(String),
}

/// One purchasable website template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Stable unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display category.
    pub category: String,
    /// Longer sales copy shown in the details panel.
    pub description: String,
    /// Price in INR.
    pub price: u32,
    /// Pre-discount price in INR; equal to `price` means no discount.
    pub original_price: u32,
    /// Short labels, rendered in order.
    pub tags: Vec<String>,
    /// Thumbnail/backdrop asset path.
    pub image_path: String,
    /// Preview content shape.
    pub content: TemplateContent,
}

impl TemplateRecord {
    /// Amount saved when discounted, `None` when `original_price <= price`.
    pub fn discount(&self) -> Option<u32> {
        (self.original_price > self.price).then(|| self.original_price - self.price)
    }
}

/// User-editable details for the blank canvas.
///
/// Empty fields are not rejected; display falls back to placeholder copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDetails {
    /// Working title, may be empty.
    pub title: String,
    /// Working description, may be empty.
    pub description: String,
    /// Chosen category, one of [`CATEGORIES`].
    pub category: String,
}

impl Default for DraftDetails {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: CATEGORIES[0].to_string(),
        }
    }
}

impl DraftDetails {
    /// Title with placeholder fallback.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "[Your Title Here]"
        } else {
            &self.title
        }
    }

    /// Description with placeholder fallback.
    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            "[Your description will appear here]"
        } else {
            &self.description
        }
    }

    /// Synthesize the editable preview document from the current draft.
    ///
    /// This is the Inline-shape content for the blank canvas; it re-renders
    /// whenever the draft is saved from the details modal.
    pub fn preview_document(&self) -> String {
        let title = escape_html(self.display_title());
        let description = escape_html(self.display_description());
        let category = escape_html(&self.category);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>New Website</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: 'Arial', sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
        }}
        .placeholder {{
            text-align: center;
            padding: 60px 40px;
            background: rgba(255, 255, 255, 0.1);
            border-radius: 20px;
            backdrop-filter: blur(10px);
            border: 1px solid rgba(255, 255, 255, 0.2);
            max-width: 600px;
        }}
        .placeholder h1 {{ font-size: 3rem; margin-bottom: 20px; opacity: 0.8; }}
        .placeholder p {{ font-size: 1.2rem; opacity: 0.7; margin-bottom: 30px; }}
        .placeholder .category {{
            display: inline-block;
            background: rgba(255, 255, 255, 0.2);
            padding: 8px 20px;
            border-radius: 999px;
            font-size: 0.9rem;
            letter-spacing: 0.08em;
            text-transform: uppercase;
        }}
    </style>
</head>
<body>
    <div class="placeholder">
        <h1>{title}</h1>
        <p>{description}</p>
        <span class="category">{category}</span>
    </div>
</body>
</html>"#
        )
    }
}

/// A catalog entry: a purchasable template or the blank canvas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEntry {
    /// A real template with a price and preview content.
    Purchasable(TemplateRecord),
    /// The "start from scratch" entry; never eligible for the buy action.
    BlankCanvas(DraftDetails),
}

impl CatalogEntry {
    /// Stable key for list rendering and the favorites set.
    pub fn key(&self) -> &str {
        match self {
            CatalogEntry::Purchasable(record) => &record.id,
            CatalogEntry::BlankCanvas(_) => "blank-canvas",
        }
    }

    /// Title shown in the details panel and thumbnail card.
    pub fn title(&self) -> &str {
        match self {
            CatalogEntry::Purchasable(record) => &record.title,
            CatalogEntry::BlankCanvas(draft) => draft.display_title(),
        }
    }

    /// Thumbnail asset, absent for the blank canvas (it renders a plus tile).
    pub fn image_path(&self) -> Option<&str> {
        match self {
            CatalogEntry::Purchasable(record) => Some(&record.image_path),
            CatalogEntry::BlankCanvas(_) => None,
        }
    }

    /// Whether the buy action applies to this entry.
    pub fn is_purchasable(&self) -> bool {
        matches!(self, CatalogEntry::Purchasable(_))
    }

    /// Owned preview content for this entry.
    ///
    /// The blank canvas synthesizes its Inline document from the draft.
    pub fn preview_content(&self) -> TemplateContent {
        match self {
            CatalogEntry::Purchasable(record) => record.content.clone(),
            CatalogEntry::BlankCanvas(draft) => TemplateContent::Inline(draft.preview_document()),
        }
    }
}

/// The built-in catalog, in carousel order. The blank canvas is last.
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::Purchasable(TemplateRecord {
            id: "luxury-hotel".into(),
            title: "Luxury Hotel & Resort".into(),
            category: "Hospitality".into(),
            description: "An elegant and responsive template perfect for luxury hotels, \
                          resorts, and vacation rentals. Features a stunning hero section \
                          and an easy-to-navigate room showcase."
                .into(),
            price: 3999,
            original_price: 5999,
            tags: vec!["Premium".into(), "Responsive".into(), "Booking".into()],
            image_path: "/assets/thumbs/luxury-hotel.svg".into(),
            content: TemplateContent::Files(vec![(
                "/index.html".into(),
                "/templates/luxury-hotel/index.html".into(),
            )]),
        }),
        CatalogEntry::Purchasable(TemplateRecord {
            id: "creative-agency".into(),
            title: "Creative Digital Agency".into(),
            category: "Agency".into(),
            description: "A bold and modern dark-themed template for creative agencies, \
                          studios, and freelancers. Features gradient text and glassy UI \
                          elements to make your portfolio pop."
                .into(),
            price: 4999,
            original_price: 7999,
            tags: vec!["Creative".into(), "Portfolio".into(), "Dark Theme".into()],
            image_path: "/assets/thumbs/creative-agency.svg".into(),
            content: TemplateContent::Files(vec![(
                "/index.html".into(),
                "/templates/creative-agency/index.html".into(),
            )]),
        }),
        CatalogEntry::Purchasable(TemplateRecord {
            id: "restaurant".into(),
            title: "Fine Dining Restaurant".into(),
            category: "Restaurant".into(),
            description: "A sophisticated template for fine dining restaurants and bistros. \
                          The warm and inviting design, combined with elegant typography, \
                          sets the perfect mood for showcasing culinary masterpieces."
                .into(),
            price: 3499,
            original_price: 4999,
            tags: vec!["Food".into(), "Elegant".into(), "Reservation".into()],
            image_path: "/assets/thumbs/restaurant.svg".into(),
            content: TemplateContent::Files(vec![(
                "/index.html".into(),
                "/templates/restaurant/index.html".into(),
            )]),
        }),
        CatalogEntry::BlankCanvas(DraftDetails::default()),
    ]
}
