//! Detail-overlay state and content
//!
//! Every product card exposes two activation points for the same detail
//! view: the hover "查看詳情" button and the product title. Each owns an
//! independent open/closed flag, but both must render identical content.
//! [`DetailContent`] is the single content definition they share, so the
//! identical-content requirement holds structurally rather than by
//! convention.

use serde::Serialize;

use crate::catalog::Product;

/// Open/closed state of one overlay instance. Initial state is closed;
/// transitions are explicit and idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        matches!(self, OverlayState::Open)
    }
}

/// The two activation points that can open a product's detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEntryPoint {
    /// The hover button over the card image.
    QuickView,
    /// The product title under the card.
    Title,
}

/// One entry point's overlay flag. Opening one entry point's overlay never
/// touches the other's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailOverlay {
    pub entry: DetailEntryPoint,
    state: OverlayState,
}

impl DetailOverlay {
    /// A freshly instantiated overlay starts closed.
    pub fn new(entry: DetailEntryPoint) -> Self {
        Self {
            entry,
            state: OverlayState::default(),
        }
    }

    pub fn open(&mut self) {
        self.state = OverlayState::Open;
    }

    pub fn dismiss(&mut self) {
        self.state = OverlayState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

/// The canonical detail-overlay content for one product.
///
/// Both entry points build their overlay from this view-model, which is what
/// guarantees they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailContent {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

impl DetailContent {
    pub fn of(product: &Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            description: product.description,
            details: product.details,
        }
    }

    /// Deterministic plain-text rendering of the overlay body, in display
    /// order. Used to compare what the two entry points actually show.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.name, self.price, self.description];
        lines.extend_from_slice(self.details);
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_overlay_initially_closed() {
        let overlay = DetailOverlay::new(DetailEntryPoint::QuickView);
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_overlay_open_and_dismiss() {
        let mut overlay = DetailOverlay::new(DetailEntryPoint::Title);
        overlay.open();
        assert!(overlay.is_open());

        overlay.dismiss();
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_overlay_transitions_idempotent() {
        let mut overlay = DetailOverlay::new(DetailEntryPoint::QuickView);
        overlay.open();
        overlay.open();
        assert!(overlay.is_open());

        overlay.dismiss();
        overlay.dismiss();
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_entry_point_flags_independent() {
        let mut quick_view = DetailOverlay::new(DetailEntryPoint::QuickView);
        let mut title = DetailOverlay::new(DetailEntryPoint::Title);

        quick_view.open();
        assert!(quick_view.is_open());
        assert!(!title.is_open(), "opening one entry point must not open the other");

        title.open();
        quick_view.dismiss();
        assert!(title.is_open(), "dismissing one entry point must not close the other");
    }

    #[test]
    fn test_entry_points_render_identical_content() {
        for product in catalog() {
            let via_quick_view = DetailContent::of(product);
            let via_title = DetailContent::of(product);

            assert_eq!(via_quick_view, via_title);
            assert_eq!(
                via_quick_view.to_text(),
                via_title.to_text(),
                "entry points diverged for product {}",
                product.id
            );
        }
    }

    #[test]
    fn test_detail_content_text_covers_every_field() {
        let product = &catalog()[0];
        let text = DetailContent::of(product).to_text();

        assert!(text.contains(product.name));
        assert!(text.contains(product.price));
        assert!(text.contains(product.description));
        for line in product.details {
            assert!(text.contains(line));
        }
    }
}
