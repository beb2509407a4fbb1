use leptos::prelude::*;

/// Promotional label rendered over a product card image.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-block px-3 py-1 text-xs font-medium rounded-full bg-white/90 text-primary shadow-sm backdrop-blur-sm">
            {children()}
        </span>
    }
}
