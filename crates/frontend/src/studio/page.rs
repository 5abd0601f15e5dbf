use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::{RequestStatus, StudioState};
use crate::shared::download::{download_file_name, trigger_download};
use crate::shared::icons::{icon, Icon};

#[component]
pub fn StudioPage() -> impl IntoView {
    let (prompt, set_prompt) = signal(String::new());
    let state = RwSignal::new(StudioState::default());

    let is_loading = move || state.with(|s| s.is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let prompt_val = prompt.get_untracked();
        let Some(ticket) = state.try_update(|s| s.begin(&prompt_val)).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::generate_image(prompt_val)
                .await
                .map(|response| response.data_uri());

            if let Err(e) = &result {
                log::error!("Image generation failed: {}", e);
            }

            let applied = state.try_update(|s| s.finish(ticket, result)).unwrap_or(false);
            if !applied {
                log::debug!("Discarded superseded generation response");
            }
        });
    };

    let on_download = move |_: leptos::ev::MouseEvent| {
        let Some(url) = state.with_untracked(|s| s.image_url().map(str::to_string)) else {
            return;
        };
        let filename = download_file_name(&prompt.get_untracked());
        if let Err(e) = trigger_download(&url, &filename) {
            log::error!("Download failed: {}", e);
        }
    };

    view! {
        <div class="studio">
            <main class="studio__container">
                <header class="studio__header">
                    <h1 class="studio__title">"Creative Studio"</h1>
                    <p class="studio__subtitle">"AI-Powered Image Generation"</p>
                </header>

                <div class="studio__card">
                    <form class="studio__form" on:submit=on_submit>
                        <textarea
                            class="studio__prompt"
                            placeholder="e.g., A cinematic photo of a fox on a Goa beach..."
                            rows="3"
                            required
                            prop:value=move || prompt.get()
                            on:input=move |ev| set_prompt.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            type="submit"
                            class="studio__button"
                            disabled=is_loading
                        >
                            {move || if is_loading() { icon(Icon::Spinner) } else { icon(Icon::MagicWand) }}
                            <span>{move || if is_loading() { "Generating..." } else { "Generate Image" }}</span>
                        </button>
                    </form>
                </div>

                <div class="studio__result">
                    {move || match state.with(|s| s.status().clone()) {
                        RequestStatus::Idle => ().into_any(),
                        RequestStatus::Loading => view! {
                            <p class="studio__hint">"Generating your masterpiece..."</p>
                        }.into_any(),
                        RequestStatus::Failed(message) => view! {
                            <div class="studio__error">
                                <p><strong>"Error: "</strong>{message}</p>
                            </div>
                        }.into_any(),
                        RequestStatus::Ready(url) => view! {
                            <div class="studio__image-block">
                                <div class="studio__image-frame">
                                    <img class="studio__image" src=url alt=move || prompt.get() />
                                </div>
                                <button type="button" class="studio__button studio__button--secondary" on:click=on_download>
                                    {icon(Icon::Download)}
                                    <span>"Download Image"</span>
                                </button>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}
