use leptos::prelude::*;

use crate::data::features;

#[component]
pub fn ProductFeature() -> impl IntoView {
    let feats = features();

    view! {
        <section id="product" class="py-24 bg-secondary/20">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <span class="text-primary font-medium tracking-wider text-sm uppercase">"Why NUWE"</span>
                    <h2 class="text-4xl font-serif text-foreground mt-2">"產品特色"</h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {feats
                        .into_iter()
                        .map(|feat| {
                            view! {
                                <div class="bg-white p-8 rounded-2xl shadow-sm hover:shadow-md transition-shadow">
                                    <h3 class="text-xl font-serif font-medium text-foreground mb-3">{feat.title}</h3>
                                    <p class="text-muted-foreground leading-relaxed">{feat.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
