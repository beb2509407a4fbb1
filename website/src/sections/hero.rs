use leptos::prelude::*;

use nuwe_core::nav::SHOP_ANCHOR;

use crate::scroll::scroll_to_anchor;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-b from-secondary/40 to-white">
            <div class="container mx-auto px-6 text-center relative z-10">
                <p class="text-primary font-medium tracking-[0.3em] text-sm uppercase mb-6">
                    "Like a Cloud"
                </p>
                <h1 class="text-5xl md:text-7xl font-serif text-foreground tracking-wide mb-6">
                    "如雲朵般輕盈的"
                    <span class="text-primary">"偽素顏"</span>
                </h1>
                <p class="text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto mb-10 leading-relaxed">
                    "NUWE 輕透素顏霜，一抹提亮、妝養合一。讓肌膚自在呼吸，輕鬆擁有自然好氣色。"
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <button
                        class="rounded-full px-8 py-3 bg-primary text-white font-medium shadow-lg shadow-primary/20 hover:bg-primary/90 transition-colors"
                        on:click=move |_| scroll_to_anchor(SHOP_ANCHOR)
                    >
                        "立即選購"
                    </button>
                    <button
                        class="rounded-full px-8 py-3 bg-white text-foreground font-medium border border-border hover:bg-secondary/30 transition-colors"
                        on:click=move |_| scroll_to_anchor("#brand-story")
                    >
                        "認識 NUWE"
                    </button>
                </div>
            </div>
        </section>
    }
}
