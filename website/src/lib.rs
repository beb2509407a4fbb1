pub mod components;
pub mod data;
pub mod scroll;
pub mod sections;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use sections::brand_story::BrandStory;
use sections::contact::ContactForm;
use sections::hero::Hero;
use sections::product_feature::ProductFeature;
use sections::products::Products;
use sections::reviews::Reviews;
use sections::spirit::Spirit;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="NUWE 輕透素顏霜 - 如雲朵般輕盈的偽素顏" />
        <div class="min-h-screen bg-white text-foreground font-sans antialiased">
            <Navbar />
            <main>
                <Hero />
                <BrandStory />
                <ProductFeature />
                <Products />
                <Reviews />
                <Spirit />
                <ContactForm />
            </main>
            <Footer />
        </div>
    }
}
