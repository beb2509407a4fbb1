use leptos::prelude::*;

#[component]
pub fn Menu(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16M4 18h16" />
        </svg>
    }
}

#[component]
pub fn Close(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12" />
        </svg>
    }
}

#[component]
pub fn Cloud(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M17.5 19a4.5 4.5 0 1 0-1.03-8.88A6 6 0 0 0 4.7 12.3 3.5 3.5 0 0 0 6.5 19h11Z"
            />
        </svg>
    }
}

#[component]
pub fn Star(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 24 24">
            <path d="M12 17.3l-6.2 3.7 1.6-7L2 9.2l7.1-.6L12 2l2.9 6.6 7.1.6-5.4 4.8 1.6 7z" />
        </svg>
    }
}
