//! Reusable message components for errors and configuration problems

use leptos::prelude::*;

use crate::ui::context::use_app_context;

/// Error message component
/// Shows the message when Some, hidden when None. Multi-line messages keep
/// their line breaks.
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="rounded-2xl border border-rose-200 bg-rose-50 px-4 py-3 text-sm text-rose-800 whitespace-pre-line">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Banner shown when the API base URL is missing. Nothing can reach the
/// backend until the configuration is fixed.
#[component]
pub fn ConfigErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    ctx.config_error().map(|error| {
        view! {
            <div class="rounded-2xl border border-amber-300 bg-amber-50 px-4 py-3 text-sm text-amber-900">
                <p class="font-semibold">"設定エラー"</p>
                <p>{error.to_string()}</p>
            </div>
        }
    })
}
