use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    MagicWand,
    Download,
    Spinner,
}

pub fn icon(kind: Icon) -> AnyView {
    match kind {
        Icon::MagicWand => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M15 4V2"/>
                <path d="M15 10V8"/>
                <path d="M12.5 7H17.5"/>
                <path d="M20 5.5V2.5"/>
                <path d="M4 15l4.9-4.9"/>
                <path d="M13 22l4.9-4.9"/>
                <path d="M2 22l2.5-2.5"/>
                <path d="M19.5 6.5L22 4"/>
                <path d="M9.8 14.2l-2.5 2.5"/>
                <path d="M14.2 9.8l2.5-2.5"/>
                <path d="M7.3 2.3L5.5 4"/>
                <path d="M4 5.5L2.3 7.3"/>
            </svg>
        }.into_any(),
        Icon::Download => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
                <polyline points="7 10 12 15 17 10"/>
                <line x1="12" y1="15" x2="12" y2="3"/>
            </svg>
        }.into_any(),
        Icon::Spinner => view! {
            <svg class="icon-spin" width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.25"/>
                <path fill="currentColor" opacity="0.75" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"/>
            </svg>
        }.into_any(),
    }
}
