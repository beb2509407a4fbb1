//! Navbar state machine and anchor-link table
//!
//! Models the scroll-coupled navigation bar: the `scrolled` flag that drives
//! the opaque/transparent treatment, the mobile menu flag, and the
//! smooth-scroll contract for anchor activation. State is component-local
//! and updated unidirectionally -- every event goes through a method here and
//! produces a new state for the view to render.

use serde::Serialize;

/// Vertical scroll offset above which the navbar switches to its opaque
/// treatment. Strictly greater-than: an offset of exactly 50 is not scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Anchor the 立即購買 buttons target.
pub const SHOP_ANCHOR: &str = "#shop";

/// One navbar menu entry: display label plus the anchor it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// The navbar menu. These anchors are the page's fixed identifier contract;
/// every section the site renders carries one of them.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "首頁", href: "#hero" },
    NavLink { name: "品牌理念", href: "#brand-story" },
    NavLink { name: "產品特色", href: "#product" },
    NavLink { name: "精選商品", href: "#shop" },
    NavLink { name: "好評推薦", href: "#reviews" },
    NavLink { name: "品牌精神", href: "#spirit" },
    NavLink { name: "聯絡我們", href: "#contact-form" },
];

/// Navigation bar state: scroll treatment and mobile menu, independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest observed vertical scroll offset.
    pub fn observe_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// True when the last observed offset exceeded [`SCROLL_THRESHOLD`].
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Resolve a nav-link activation.
    ///
    /// Returns `true` when a smooth scroll to the target must be issued.
    /// When the anchor was found the mobile menu also closes. A missing
    /// anchor is a silent no-op -- never a fault, never a state change.
    pub fn navigate(&mut self, anchor_found: bool) -> bool {
        if anchor_found {
            self.menu_open = false;
        }
        anchor_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold_boundary() {
        let mut nav = NavState::new();

        nav.observe_scroll(49.0);
        assert!(!nav.scrolled());

        nav.observe_scroll(50.0);
        assert!(!nav.scrolled(), "offset equal to the threshold is not scrolled");

        nav.observe_scroll(51.0);
        assert!(nav.scrolled());
    }

    #[test]
    fn test_scrolled_recomputed_on_every_observation() {
        let mut nav = NavState::new();
        nav.observe_scroll(200.0);
        assert!(nav.scrolled());

        nav.observe_scroll(0.0);
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_menu_toggle_independent_of_scroll() {
        let mut nav = NavState::new();
        nav.observe_scroll(120.0);

        nav.toggle_menu();
        assert!(nav.menu_open());
        assert!(nav.scrolled());

        nav.toggle_menu();
        assert!(!nav.menu_open());
        assert!(nav.scrolled());
    }

    #[test]
    fn test_navigate_existing_anchor_scrolls_and_closes_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.menu_open());

        assert!(nav.navigate(true));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigate_existing_anchor_with_menu_closed() {
        let mut nav = NavState::new();
        assert!(nav.navigate(true));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigate_missing_anchor_is_noop() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        let before = nav;

        assert!(!nav.navigate(false), "missing anchor must not scroll");
        assert_eq!(nav, before, "missing anchor must not change state");
    }

    #[test]
    fn test_nav_links_anchor_contract() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            vec![
                "#hero",
                "#brand-story",
                "#product",
                "#shop",
                "#reviews",
                "#spirit",
                "#contact-form",
            ]
        );
    }

    #[test]
    fn test_shop_anchor_is_a_nav_target() {
        assert!(NAV_LINKS.iter().any(|l| l.href == SHOP_ANCHOR));
    }
}
