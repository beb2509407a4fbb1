use leptos::prelude::*;

use nuwe_core::catalog::Product;
use nuwe_core::overlay::{DetailEntryPoint, DetailOverlay};

use super::badge::Badge;
use super::product_detail::ProductDetail;

/// One product summary: image, tag badge, price, and the two independent
/// entry points into the detail overlay (the hover button and the title).
#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    // Each entry point owns its overlay flag; opening one never opens the other.
    let quick_view = RwSignal::new(DetailOverlay::new(DetailEntryPoint::QuickView));
    let title_view = RwSignal::new(DetailOverlay::new(DetailEntryPoint::Title));

    view! {
        <div class="group">
            <div class="relative aspect-[4/5] bg-secondary/30 rounded-2xl overflow-hidden mb-6">
                <img
                    src=product.image
                    alt=product.name
                    class="w-full h-full object-cover object-center group-hover:scale-105 transition-transform duration-500"
                />
                {product
                    .tag
                    .map(|tag| {
                        view! {
                            <div class="absolute top-4 left-4">
                                <Badge>{tag}</Badge>
                            </div>
                        }
                    })}

                // Quick-view button, revealed on hover
                <div class="absolute inset-x-4 bottom-4 translate-y-full group-hover:translate-y-0 transition-transform duration-300">
                    <button
                        class="w-full rounded-full bg-white/90 text-foreground hover:bg-white shadow-lg backdrop-blur-sm py-2"
                        on:click=move |_| quick_view.update(|overlay| overlay.open())
                    >
                        "查看詳情"
                    </button>
                </div>
            </div>

            <div class="text-center space-y-2">
                <h3
                    class="text-xl font-serif font-medium text-foreground cursor-pointer hover:text-primary transition-colors"
                    on:click=move |_| title_view.update(|overlay| overlay.open())
                >
                    {product.name}
                </h3>
                <p class="text-muted-foreground font-medium">{product.price}</p>
            </div>

            <Show when=move || quick_view.get().is_open()>
                <ProductDetail
                    product=product
                    on_close=Callback::new(move |_| quick_view.update(|overlay| overlay.dismiss()))
                />
            </Show>
            <Show when=move || title_view.get().is_open()>
                <ProductDetail
                    product=product
                    on_close=Callback::new(move |_| title_view.update(|overlay| overlay.dismiss()))
                />
            </Show>
        </div>
    }
}
