use leptos::prelude::*;

use crate::components::icons::Cloud;

#[component]
pub fn Spirit() -> impl IntoView {
    view! {
        <section id="spirit" class="py-24 bg-white relative overflow-hidden">
            <div class="absolute top-10 right-10 opacity-[0.04] pointer-events-none">
                <Cloud class="w-[260px] h-[260px]" />
            </div>

            <div class="container mx-auto px-6 max-w-3xl text-center">
                <span class="text-primary font-medium tracking-wider text-sm uppercase">"Our Spirit"</span>
                <h2 class="text-4xl font-serif text-foreground mt-2 mb-8">"品牌精神"</h2>
                <p class="font-serif text-2xl italic text-primary mb-6">
                    "「美，是抬頭看鏡子時的那個微笑。」"
                </p>
                <p class="text-lg text-muted-foreground leading-relaxed">
                    "我們不追求完美無瑕，而是陪你找回與自己相處的自在。像雲一樣，輕輕的，剛剛好。"
                </p>
            </div>
        </section>
    }
}
