use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border bg-white py-12 mt-auto">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-muted-foreground text-sm">
                <p>"\u{00A9} 2026 NUWE. All rights reserved."</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    <a href="#" class="hover:text-primary transition-colors">"隱私權政策"</a>
                    <a href="#" class="hover:text-primary transition-colors">"服務條款"</a>
                    <a href="#" class="hover:text-primary transition-colors">"退換貨須知"</a>
                </div>
            </div>
        </footer>
    }
}
