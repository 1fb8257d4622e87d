/// The page-wide styling marker owned by a mounted landing view
use std::fmt;

/// Body class that switches the stylesheet into landing-page mode.
pub const WELCOME_PAGE_CLASS: &str = "welcome-page";

/// Somewhere a class marker can be added to and removed from.
///
/// Both operations are idempotent, like `DOMTokenList.add`/`remove`.
pub trait StyleMarker {
    fn add_marker(&self, class: &str);
    fn remove_marker(&self, class: &str);
}

/// Holds [`WELCOME_PAGE_CLASS`] on a [`StyleMarker`] for as long as it lives
pub struct MarkerGuard<M: StyleMarker> {
    marker: M,
}

impl<M: StyleMarker> MarkerGuard<M> {
    pub fn acquire(marker: M) -> MarkerGuard<M> {
        marker.add_marker(WELCOME_PAGE_CLASS);
        MarkerGuard { marker }
    }
}

impl<M: StyleMarker> Drop for MarkerGuard<M> {
    fn drop(&mut self) {
        self.marker.remove_marker(WELCOME_PAGE_CLASS);
    }
}

impl<M: StyleMarker> fmt::Debug for MarkerGuard<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerGuard").field("class", &WELCOME_PAGE_CLASS).finish()
    }
}
