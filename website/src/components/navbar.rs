use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use nuwe_core::nav::{NavState, NAV_LINKS, SHOP_ANCHOR};

use super::icons::{Close, Menu};
use crate::scroll;

/// Fixed navigation bar.
///
/// Tracks the window scroll offset to switch between the transparent and
/// opaque treatments, owns the mobile menu flag, and smooth-scrolls to the
/// section anchors. The scroll listener is registered once per mount and
/// removed again on cleanup.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::new());

    let callback = Closure::<dyn Fn()>::new(move || {
        if let Some(window) = web_sys::window() {
            if let Ok(offset) = window.scroll_y() {
                nav.update(|state| state.observe_scroll(offset));
            }
        }
    });
    if let Some(window) = web_sys::window() {
        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach scroll listener");
        }
        // Seed the state for reloads that restore a scroll position.
        if let Ok(offset) = window.scroll_y() {
            nav.update(|state| state.observe_scroll(offset));
        }
    }
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    });

    let navigate_to = move |href: &'static str| {
        let target = scroll::find_anchor(href);
        let should_scroll = nav
            .try_update(|state| state.navigate(target.is_some()))
            .unwrap_or(false);
        if should_scroll {
            if let Some(element) = target {
                scroll::smooth_scroll_into_view(&element);
            }
        }
    };

    view! {
        <nav class=move || {
            if nav.get().scrolled() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/80 backdrop-blur-md shadow-sm py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
            }
        }>
            <div class="container mx-auto px-6 flex items-center justify-between">
                <a href="/" class="text-2xl font-serif font-bold tracking-wider text-primary cursor-pointer">
                    "NUWE"
                </a>

                // Desktop nav
                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <button
                                    class="text-sm font-medium text-foreground/80 hover:text-primary transition-colors"
                                    on:click=move |_| navigate_to(href)
                                >
                                    {link.name}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="rounded-full px-6 py-2 text-sm bg-primary text-white shadow-sm hover:bg-primary/90 transition-colors"
                        on:click=move |_| navigate_to(SHOP_ANCHOR)
                    >
                        "立即購買"
                    </button>
                </div>

                // Mobile toggle
                <button
                    class="md:hidden text-foreground"
                    on:click=move |_| nav.update(|state| state.toggle_menu())
                >
                    <Show
                        when=move || nav.get().menu_open()
                        fallback=|| view! { <Menu class="w-6 h-6" /> }
                    >
                        <Close class="w-6 h-6" />
                    </Show>
                </button>
            </div>

            // Mobile nav
            <Show when=move || nav.get().menu_open()>
                <div class="absolute top-full left-0 right-0 bg-white border-t border-border p-6 flex flex-col gap-4 shadow-lg md:hidden">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <button
                                    class="text-left text-base font-medium text-foreground/80 py-2"
                                    on:click=move |_| navigate_to(href)
                                >
                                    {link.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
