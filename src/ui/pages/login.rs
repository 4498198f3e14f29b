//! Login page component
//!
//! Shows the login form; a previously stored session is restored by the form
//! itself once the page is mounted.

use leptos::prelude::*;

use crate::ui::auth::LoginForm;
use crate::ui::common::ConfigErrorBanner;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[calc(100vh-5rem)] items-center justify-center bg-zinc-50 px-4 py-12">
            <div class="w-full max-w-2xl space-y-8 rounded-3xl border border-zinc-200 bg-white p-10 shadow-xl">
                <div class="space-y-2 text-center">
                    <p class="text-sm uppercase tracking-wide text-emerald-500">"Auth demo"</p>
                    <h1 class="text-3xl font-semibold text-zinc-900">"ログイン"</h1>
                    <p class="text-sm text-zinc-600">
                        "/api/auth/login のレスポンスをそのまま表示します。Authorization: Bearer ... ヘッダーに設定して保護 API を呼び出してください。"
                    </p>
                </div>

                <ConfigErrorBanner />
                <LoginForm />
            </div>
        </div>
    }
}
