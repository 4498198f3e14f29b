//! Register form component
//!
//! Posts email, user name and password to the backend's register endpoint.
//! Password policy is enforced by the backend; its validation messages are
//! shown as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::result_panel::AuthResultPanel;
use crate::core::RegisterPayload;
use crate::core::controller::{AuthForm, Credentials};
use crate::ui::common::ErrorMessage;
use crate::ui::context::use_app_context;

const INPUT_CLASS: &str = "w-full rounded-2xl border border-zinc-200 bg-white px-4 py-3 text-base text-zinc-900 shadow-sm focus:border-emerald-500 focus:outline-none focus:ring-2 focus:ring-emerald-200";

/// Register form component
#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(AuthForm::<RegisterPayload>::default());

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let client = match ctx.client() {
            Ok(client) => client,
            Err(e) => {
                form.update(|f| f.reject(&e));
                return;
            }
        };
        let Some(payload) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let sessions = ctx.sessions.clone();

        spawn_local(async move {
            let outcome = payload.authenticate(&client).await;
            // Dropped if the page was left in the meantime
            let _ = form.try_update(|f| f.complete(outcome, &sessions));
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid gap-5">
                <label class="space-y-2">
                    <span class="text-sm font-medium text-zinc-800">"メールアドレス"</span>
                    <input
                        type="email"
                        name="email"
                        required=true
                        autocomplete="email"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.payload.email.clone())
                        on:input=move |ev| form.update(|f| f.payload.email = event_target_value(&ev))
                    />
                </label>

                <label class="space-y-2">
                    <span class="text-sm font-medium text-zinc-800">"ユーザー名"</span>
                    <input
                        type="text"
                        name="userName"
                        required=true
                        autocomplete="username"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.payload.user_name.clone())
                        on:input=move |ev| form.update(|f| f.payload.user_name = event_target_value(&ev))
                    />
                </label>

                <label class="space-y-2">
                    <span class="text-sm font-medium text-zinc-800">"パスワード"</span>
                    <input
                        type="password"
                        name="password"
                        required=true
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.payload.password.clone())
                        on:input=move |ev| form.update(|f| f.payload.password = event_target_value(&ev))
                    />
                    <p class="text-xs text-zinc-500">
                        "12文字以上・数字・記号・大文字を含む必要があります (バックエンドの Identity 設定に準拠)。"
                    </p>
                </label>
            </div>

            <ErrorMessage error=Signal::derive(move || form.with(|f| f.error.clone())) />

            <button
                type="submit"
                class="flex w-full items-center justify-center rounded-2xl bg-emerald-500 px-4 py-3 text-base font-semibold text-white shadow-lg transition hover:bg-emerald-600 disabled:cursor-not-allowed disabled:opacity-60"
                disabled=move || form.with(|f| f.submitting)
            >
                {move || if form.with(|f| f.submitting) { "登録中..." } else { "ユーザー登録" }}
            </button>
        </form>

        <div class="text-center text-sm text-zinc-600">
            "すでにアカウントをお持ちですか？"
            <A href="/login" attr:class="ml-2 font-medium text-emerald-600 hover:underline">
                "ログインはこちら"
            </A>
        </div>

        <AuthResultPanel
            response=Signal::derive(move || form.with(|f| f.result.clone()))
            helper_text="取得したトークンはローカルストレージ (omocha-bako.auth) に保存されます。必要に応じて secure storage への移行を検討してください。"
        />
    }
}
