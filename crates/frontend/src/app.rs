use crate::studio::StudioPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <StudioPage />
    }
}
