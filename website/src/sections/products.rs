use leptos::prelude::*;

use nuwe_core::catalog::catalog;

use crate::components::product_card::ProductCard;

/// 精選商品 -- one card per catalog entry, in catalog order.
#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id="shop" class="py-24 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <span class="text-primary font-medium tracking-wider text-sm uppercase">"Online Shop"</span>
                    <h2 class="text-4xl font-serif text-foreground mt-2">"精選系列"</h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    {catalog()
                        .iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
