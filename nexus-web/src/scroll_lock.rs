//! Page scroll suspension as a scoped resource.
//!
//! Entering full-screen acquires the lock, dropping it restores the page's
//! previous overflow value. Tying the release to `Drop` (and the owning
//! component's cleanup) means no teardown path can leave the page stuck
//! unscrollable.

/// Holds `body { overflow: hidden }` for as long as the value lives.
pub struct ScrollLock {
    previous: String,
}

impl ScrollLock {
    /// Suspend page scrolling, remembering the previous overflow value.
    /// Returns `None` outside a browser document.
    pub fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        if self.previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.previous);
        }
    }
}
