//! Protected page
//!
//! Calls the `[Authorize]`-guarded forecast endpoint with the stored token.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::controller::ProtectedResource;
use crate::ui::common::{ConfigErrorBanner, ErrorMessage, ForecastCard};
use crate::ui::context::use_app_context;

/// Protected resource page component
#[component]
pub fn ProtectedPage() -> impl IntoView {
    let ctx = use_app_context();
    let page = RwSignal::new(ProtectedResource::default());

    let restore_sessions = ctx.sessions.clone();
    Effect::new(move |_| {
        page.update(|p| p.restore(&restore_sessions));
    });

    let fetch_ctx = ctx.clone();
    let on_fetch = move |_| {
        let client = match fetch_ctx.client() {
            Ok(client) => client,
            Err(e) => {
                page.update(|p| p.reject(&e));
                return;
            }
        };
        let Some(ticket) = page.try_update(|p| p.begin_fetch()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = ticket.send(&client).await;
            let _ = page.try_update(|p| p.complete(&ticket, outcome));
        });
    };

    let clear_sessions = ctx.sessions.clone();
    let on_clear = move |_| page.update(|p| p.clear_session(&clear_sessions));

    let token_status = move || {
        page.with(|p| match &p.session {
            Some(session) => view! {
                <span class="rounded-full bg-emerald-100 px-3 py-1 text-xs font-semibold text-emerald-700">
                    {format!("保存済 ({})", session.stored_at_label())}
                </span>
            }
            .into_any(),
            None => view! {
                <span class="rounded-full bg-zinc-200 px-3 py-1 text-xs font-semibold text-zinc-600">
                    "未取得"
                </span>
            }
            .into_any(),
        })
    };

    view! {
        <div class="flex min-h-[calc(100vh-5rem)] items-center justify-center bg-zinc-50 px-4 py-12">
            <div class="w-full max-w-4xl space-y-8 rounded-3xl border border-zinc-200 bg-white p-10 shadow-xl">
                <div class="space-y-3">
                    <p class="text-sm uppercase tracking-wide text-emerald-500">"Protected API"</p>
                    <h1 class="text-3xl font-semibold text-zinc-900">"[Authorize] API 呼び出し"</h1>
                    <p class="text-sm text-zinc-600">
                        "/weatherforecast エンドポイントは [Authorize] で保護されています。事前に"
                        <A href="/register" attr:class="mx-1 font-medium text-emerald-600 hover:underline">
                            "ユーザー登録"
                        </A>
                        "または"
                        <A href="/login" attr:class="mx-1 font-medium text-emerald-600 hover:underline">
                            "ログイン"
                        </A>
                        "し、トークンを取得してから「API を呼び出す」を押してください。"
                    </p>
                </div>

                <ConfigErrorBanner />

                <div class="space-y-4 rounded-2xl border border-zinc-200 bg-zinc-50 p-5 text-sm text-zinc-700">
                    <div class="flex flex-wrap items-center gap-3">
                        <span class="text-xs uppercase tracking-wide text-zinc-500">"現在のトークン状態"</span>
                        {token_status}
                    </div>
                    <div class="flex flex-wrap gap-3">
                        <button
                            type="button"
                            class="rounded-2xl bg-emerald-500 px-4 py-2 text-sm font-semibold text-white shadow transition hover:bg-emerald-600 disabled:cursor-not-allowed disabled:opacity-60"
                            disabled=move || page.with(|p| p.is_loading())
                            on:click=on_fetch
                        >
                            "API を呼び出す"
                        </button>
                        <button
                            type="button"
                            class="rounded-2xl border border-zinc-300 px-4 py-2 text-sm font-medium text-zinc-700 transition hover:border-zinc-400"
                            on:click=on_clear
                        >
                            "ローカルのトークンを削除"
                        </button>
                    </div>
                    <Show when=move || page.with(|p| p.is_loading())>
                        <p class="text-xs text-zinc-500">"呼び出し中です..."</p>
                    </Show>
                    <ErrorMessage error=Signal::derive(move || page.with(|p| p.error.clone())) />
                </div>

                <Show when=move || page.with(|p| !p.forecasts.is_empty())>
                    <section class="space-y-4">
                        <h2 class="text-xl font-semibold text-zinc-900">"レスポンス例"</h2>
                        <ul class="grid gap-4 md:grid-cols-2">
                            {move || {
                                page.with(|p| p.forecasts.clone())
                                    .into_iter()
                                    .map(|forecast| view! { <ForecastCard forecast=forecast /> })
                                    .collect_view()
                            }}
                        </ul>
                    </section>
                </Show>
            </div>
        </div>
    }
}
