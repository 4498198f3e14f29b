//! Register page component

use leptos::prelude::*;

use crate::ui::auth::RegisterForm;
use crate::ui::common::ConfigErrorBanner;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[calc(100vh-5rem)] items-center justify-center bg-zinc-50 px-4 py-12">
            <div class="w-full max-w-2xl space-y-8 rounded-3xl border border-zinc-200 bg-white p-10 shadow-xl">
                <div class="space-y-2 text-center">
                    <p class="text-sm uppercase tracking-wide text-emerald-500">"Auth demo"</p>
                    <h1 class="text-3xl font-semibold text-zinc-900">"ユーザー登録"</h1>
                    <p class="text-sm text-zinc-600">
                        "/api/auth/register に登録情報を送信し、発行されたトークンを表示します。"
                    </p>
                </div>

                <ConfigErrorBanner />
                <RegisterForm />
            </div>
        </div>
    }
}
