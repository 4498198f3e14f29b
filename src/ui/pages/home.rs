//! Home page
//!
//! Backend health check: fetches the public forecast once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::controller::{FORECAST_FAILED_MESSAGE, error_message};
use crate::core::weather::{WeatherForecast, fetch_forecasts};
use crate::ui::common::ForecastCard;
use crate::ui::context::use_app_context;

type ForecastResult = Result<Vec<WeatherForecast>, String>;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let forecasts: RwSignal<Option<ForecastResult>> = RwSignal::new(None);

    Effect::new(move |_| {
        let client = match ctx.client() {
            Ok(client) => client,
            Err(e) => {
                forecasts.set(Some(Err(e.to_string())));
                return;
            }
        };

        spawn_local(async move {
            let outcome = fetch_forecasts(&client, None)
                .await
                .map_err(|e| error_message(&e, FORECAST_FAILED_MESSAGE));
            let _ = forecasts.try_set(Some(outcome));
        });
    });

    view! {
        <div class="flex min-h-screen items-center justify-center bg-zinc-50 px-4 py-10">
            <main class="w-full max-w-4xl space-y-8 rounded-3xl border border-zinc-200 bg-white p-10 shadow-xl">
                <header class="space-y-2">
                    <p class="text-sm uppercase tracking-wide text-emerald-500">"Backend health check"</p>
                    <h1 class="text-3xl font-semibold text-zinc-900">"Latest weather forecast"</h1>
                    <p class="text-base text-zinc-600">
                        "このカードはフロントエンドからバックエンド API の"
                        <code class="mx-1 rounded bg-zinc-100 px-1 py-0.5 text-sm">"/weatherforecast"</code>
                        "エンドポイントへ直接フェッチした結果を表示します。"
                    </p>
                </header>

                {move || match forecasts.get() {
                    None => view! {
                        <p class="text-sm text-zinc-500">"読み込み中です..."</p>
                    }
                    .into_any(),
                    Some(Err(message)) => view! {
                        <div class="rounded-2xl border border-rose-200 bg-rose-50 px-6 py-4 text-rose-800">
                            <p class="font-medium">"API 呼び出しに失敗しました"</p>
                            <p class="whitespace-pre-line text-sm text-rose-700">{message}</p>
                            <p class="text-sm text-rose-700">
                                "① バックエンド API を起動 ②"
                                <code class="mx-1 rounded bg-rose-100 px-1 py-0.5 text-xs text-rose-800">"API_BASE_URL"</code>
                                "を正しく設定しているか確認してください。"
                            </p>
                        </div>
                    }
                    .into_any(),
                    Some(Ok(list)) => view! {
                        <ul class="grid gap-4 md:grid-cols-2">
                            {list
                                .into_iter()
                                .map(|forecast| view! { <ForecastCard forecast=forecast /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
