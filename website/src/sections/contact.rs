use leptos::prelude::*;

/// Static contact affordance. Submission is an external collaborator; the
/// form is not wired to any handler in this site.
#[component]
pub fn ContactForm() -> impl IntoView {
    view! {
        <section id="contact-form" class="py-24 bg-secondary/20">
            <div class="container mx-auto px-6 max-w-xl">
                <div class="text-center mb-12">
                    <span class="text-primary font-medium tracking-wider text-sm uppercase">"Contact"</span>
                    <h2 class="text-4xl font-serif text-foreground mt-2">"聯絡我們"</h2>
                </div>

                <div class="bg-white p-8 rounded-2xl shadow-sm space-y-6">
                    <div class="space-y-2">
                        <label class="text-sm font-medium text-foreground" for="contact-name">"姓名"</label>
                        <input
                            id="contact-name"
                            type="text"
                            class="w-full rounded-lg border border-border px-4 py-2 focus:outline-none focus:border-primary"
                            placeholder="請輸入您的姓名"
                        />
                    </div>
                    <div class="space-y-2">
                        <label class="text-sm font-medium text-foreground" for="contact-email">"Email"</label>
                        <input
                            id="contact-email"
                            type="email"
                            class="w-full rounded-lg border border-border px-4 py-2 focus:outline-none focus:border-primary"
                            placeholder="name@example.com"
                        />
                    </div>
                    <div class="space-y-2">
                        <label class="text-sm font-medium text-foreground" for="contact-message">"訊息"</label>
                        <textarea
                            id="contact-message"
                            rows="4"
                            class="w-full rounded-lg border border-border px-4 py-2 focus:outline-none focus:border-primary"
                            placeholder="想對我們說的話"
                        ></textarea>
                    </div>
                    <button
                        type="button"
                        class="w-full rounded-full py-3 bg-primary text-white font-medium shadow-sm hover:bg-primary/90 transition-colors"
                    >
                        "送出"
                    </button>
                </div>
            </div>
        </section>
    }
}
