//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[calc(100vh-5rem)] flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="mb-4 text-6xl font-bold text-zinc-900">"404"</h1>

                <h2 class="mb-2 text-2xl font-semibold text-zinc-900">"ページが見つかりません"</h2>
                <p class="mx-auto mb-8 max-w-md text-zinc-600">
                    "お探しのページは存在しないか、移動した可能性があります。"
                </p>

                // Actions
                <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <A
                        href="/"
                        attr:class="rounded-2xl bg-emerald-500 px-6 py-3 font-medium text-white transition hover:bg-emerald-600"
                    >
                        "ホームへ戻る"
                    </A>
                    <A
                        href="/login"
                        attr:class="rounded-2xl border border-zinc-300 px-6 py-3 font-medium text-zinc-700 transition hover:border-zinc-400"
                    >
                        "ログイン"
                    </A>
                </div>
            </div>
        </div>
    }
}
