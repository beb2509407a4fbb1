//! Smooth-scroll helpers shared by the navbar and section call-to-actions.
//!
//! Anchor lookup and scrolling are split so callers can feed the lookup
//! result through [`nuwe_core::nav::NavState::navigate`] before scrolling.

/// Locate the page element matching an anchor selector (e.g. `#shop`).
pub fn find_anchor(anchor: &str) -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .query_selector(anchor)
        .ok()
        .flatten()
}

/// Smoothly scroll an element into view.
pub fn smooth_scroll_into_view(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll to an anchor if it exists. A missing anchor is a silent no-op.
pub fn scroll_to_anchor(anchor: &str) {
    if let Some(element) = find_anchor(anchor) {
        smooth_scroll_into_view(&element);
    }
}
