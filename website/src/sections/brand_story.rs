use leptos::prelude::*;

use crate::components::icons::Cloud;

#[component]
pub fn BrandStory() -> impl IntoView {
    view! {
        <section id="brand-story" class="py-24 bg-white relative overflow-hidden">
            // Decorative clouds
            <div class="absolute top-20 -left-20 opacity-[0.03] pointer-events-none">
                <Cloud class="w-[400px] h-[400px]" />
            </div>
            <div class="absolute bottom-20 -right-20 opacity-[0.03] pointer-events-none">
                <Cloud class="w-[300px] h-[300px]" />
            </div>

            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center gap-16">
                    <div class="w-full md:w-1/2 relative">
                        <div class="aspect-[4/5] rounded-2xl overflow-hidden bg-secondary/30 relative">
                            <div class="absolute inset-0 flex items-center justify-center">
                                <span class="text-9xl font-serif text-primary/10 select-none">"NUWE"</span>
                            </div>
                            <div class="absolute inset-0 bg-gradient-to-tr from-white/50 to-transparent"></div>
                        </div>
                        // Floating card
                        <div class="absolute -bottom-10 -right-10 bg-white p-8 rounded-xl shadow-xl max-w-xs hidden md:block">
                            <p class="font-serif text-xl italic text-primary mb-2">"\"Like a Cloud\""</p>
                            <p class="text-sm text-muted-foreground">"柔軟、輕盈，象徵著我們的品牌理念。"</p>
                        </div>
                    </div>

                    <div class="w-full md:w-1/2 space-y-8">
                        <h2 class="text-4xl font-serif text-foreground mb-6">
                            "靈感來自「雲」"
                        </h2>
                        <div class="space-y-6 text-lg text-muted-foreground leading-relaxed">
                            <p>
                                "NUWE 的名稱靈感來自「雲」。雲，柔軟、輕盈，象徵著我們的品牌理念——希望每個人都能輕鬆擁有如雲朵般輕盈、自然的妝容。"
                            </p>
                            <p>
                                "我們相信，美不該是焦慮的來源，也不應成為生活中的壓力。真正的美，是當你抬頭看鏡子時，能微笑地說：「我怎麼這麼好看。」"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
