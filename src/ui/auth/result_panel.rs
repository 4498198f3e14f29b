//! Panel showing the tokens returned by the last register/login call

use leptos::prelude::*;

use crate::core::AuthResponse;

/// Pretty-printed auth response with a copy button
#[component]
pub fn AuthResultPanel(
    /// Response to show; the panel is hidden when None
    #[prop(into)]
    response: Signal<Option<AuthResponse>>,
    /// Note rendered below the JSON
    #[prop(optional, into)]
    helper_text: Option<String>,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    move || {
        let helper_text = helper_text.clone();
        response.get().map(|response| {
            let json_text = serde_json::to_string_pretty(&response).unwrap_or_default();
            let copy_text = json_text.clone();
            let minutes = response.expires_in_minutes();

            view! {
                <section class="space-y-3 rounded-2xl border border-emerald-200 bg-emerald-50 p-4 text-sm text-emerald-900 shadow-sm">
                    <div class="flex items-center justify-between gap-4">
                        <div>
                            <p class="text-xs uppercase tracking-wide text-emerald-600">"取得したトークン"</p>
                            {minutes.map(|minutes| view! {
                                <p class="text-xs text-emerald-700/80">{format!("有効期限: 約 {} 分", minutes)}</p>
                            })}
                        </div>
                        <button
                            type="button"
                            class="rounded-full border border-emerald-300 bg-white px-3 py-1 text-xs font-medium text-emerald-700 shadow-sm transition hover:bg-emerald-100"
                            on:click=move |_| copy_to_clipboard(copy_text.clone(), copied)
                        >
                            {move || if copied.get() { "コピー済" } else { "コピー" }}
                        </button>
                    </div>
                    <pre class="overflow-x-auto rounded-xl bg-zinc-950/90 p-4 text-xs text-lime-200">{json_text}</pre>
                    {helper_text.map(|text| view! {
                        <p class="text-xs text-emerald-700/80">{text}</p>
                    })}
                </section>
            }
        })
    }
}

/// Copy `text` to the clipboard and flag `copied` for two seconds
fn copy_to_clipboard(text: String, copied: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;
        use wasm_bindgen_futures::JsFuture;

        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            match JsFuture::from(promise).await {
                Ok(_) => {
                    copied.set(true);
                    TimeoutFuture::new(2_000).await;
                    // The panel may have been unmounted meanwhile
                    let _ = copied.try_set(false);
                }
                Err(e) => leptos::logging::warn!("Failed to copy auth response: {:?}", e),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, copied);
    }
}
