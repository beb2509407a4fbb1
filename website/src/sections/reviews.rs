use leptos::prelude::*;

use crate::components::icons::Star;
use crate::data::reviews;

#[component]
pub fn Reviews() -> impl IntoView {
    let entries = reviews();

    view! {
        <section id="reviews" class="py-24 bg-secondary/20">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <span class="text-primary font-medium tracking-wider text-sm uppercase">"Reviews"</span>
                    <h2 class="text-4xl font-serif text-foreground mt-2">"好評推薦"</h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {entries
                        .into_iter()
                        .map(|review| {
                            view! {
                                <div class="bg-white p-8 rounded-2xl shadow-sm">
                                    <div class="flex gap-1 text-primary mb-4">
                                        {(0..review.rating)
                                            .map(|_| view! { <Star class="w-4 h-4" /> })
                                            .collect_view()}
                                    </div>
                                    <p class="text-muted-foreground leading-relaxed mb-6">
                                        {review.quote}
                                    </p>
                                    <p class="font-medium text-foreground">{review.name}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
