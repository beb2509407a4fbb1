use leptos::prelude::*;

use nuwe_core::catalog::Product;
use nuwe_core::overlay::DetailContent;

/// Full-specification overlay for one product.
///
/// This is the single detail-view definition; every entry point mounts the
/// same component with the same [`DetailContent`], so the two activation
/// paths cannot drift apart.
#[component]
pub fn ProductDetail(
    product: &'static Product,
    on_close: Callback<()>,
    /// External purchase hook. Nothing in this site wires it; the button is
    /// a visual affordance until a commerce flow claims it.
    #[prop(optional)]
    on_purchase: Option<Callback<u32>>,
) -> impl IntoView {
    let content = DetailContent::of(product);

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center px-4"
            on:click=move |_| on_close.run(())
        >
            <div class="absolute inset-0 bg-black/40"></div>
            <div
                class="relative w-full max-w-[600px] max-h-[90vh] overflow-y-auto bg-white/95 backdrop-blur-xl border border-white/20 rounded-2xl p-6 shadow-xl"
                on:click=move |ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-muted-foreground hover:text-foreground transition-colors"
                    on:click=move |_| on_close.run(())
                >
                    "\u{2715}"
                </button>

                <h2 class="text-2xl font-serif text-primary">{content.name}</h2>
                <p class="text-lg font-medium text-foreground/80 mt-2">{content.price}</p>

                <div class="grid gap-6 py-4">
                    <div class="aspect-video rounded-lg overflow-hidden bg-secondary/20">
                        <img src=product.image alt=content.name class="w-full h-full object-contain" />
                    </div>

                    <div class="space-y-4">
                        <p class="text-muted-foreground leading-relaxed">{content.description}</p>

                        <div class="space-y-2">
                            <h4 class="font-medium text-foreground">"產品規格"</h4>
                            <ul class="list-disc list-inside text-sm text-muted-foreground space-y-1">
                                {content
                                    .details
                                    .iter()
                                    .map(|line| view! { <li>{*line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="flex justify-end gap-4">
                    <button
                        class="w-full rounded-full text-lg h-12 bg-primary text-white shadow-lg shadow-primary/20 hover:bg-primary/90 transition-colors"
                        on:click=move |_| {
                            if let Some(purchase) = on_purchase {
                                purchase.run(product.id);
                            }
                        }
                    >
                        "立即購買"
                    </button>
                </div>
            </div>
        </div>
    }
}
