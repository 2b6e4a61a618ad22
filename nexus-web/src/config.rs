//! Site-wide constants (single source of truth)

/// Brand name shown in the header and footer.
pub const BRAND: &str = "Vertex Nexus";

/// Fixed WhatsApp recipient for purchase inquiries.
pub const WHATSAPP_RECIPIENT: &str = "9310739038";

/// Hero headline revealed by the typewriter effect.
pub const TAGLINE: &str = "Choose a stunning template. Or create something entirely new.";

/// Delay between typewriter characters.
pub const TYPE_SPEED_MS: u64 = 45;
