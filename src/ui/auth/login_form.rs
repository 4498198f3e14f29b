//! Login form component
//!
//! Signs in with email and password. A session stored by an earlier visit is
//! shown on mount and can be discarded with the sign-out button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::result_panel::AuthResultPanel;
use crate::core::LoginPayload;
use crate::core::controller::{AuthForm, Credentials};
use crate::ui::common::ErrorMessage;
use crate::ui::context::use_app_context;

const INPUT_CLASS: &str = "w-full rounded-2xl border border-zinc-200 bg-white px-4 py-3 text-base text-zinc-900 shadow-sm focus:border-emerald-500 focus:outline-none focus:ring-2 focus:ring-emerald-200";

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(AuthForm::<LoginPayload>::default());

    // Restore a stored session after hydration, off the first paint
    let restore_sessions = ctx.sessions.clone();
    Effect::new(move |_| {
        form.update(|f| f.restore(&restore_sessions));
    });

    let submit_ctx = ctx.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let client = match submit_ctx.client() {
            Ok(client) => client,
            Err(e) => {
                form.update(|f| f.reject(&e));
                return;
            }
        };
        let Some(payload) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let sessions = submit_ctx.sessions.clone();

        spawn_local(async move {
            let outcome = payload.authenticate(&client).await;
            let _ = form.try_update(|f| f.complete(outcome, &sessions));
        });
    };

    let sign_out_sessions = ctx.sessions.clone();
    let on_sign_out = move |_| form.update(|f| f.sign_out(&sign_out_sessions));

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
                    <span class="text-sm font-medium text-zinc-800">"パスワード"</span>
                    <input
                        type="password"
                        name="password"
                        required=true
                        autocomplete="current-password"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.payload.password.clone())
                        on:input=move |ev| form.update(|f| f.payload.password = event_target_value(&ev))
                    />
                </label>
            </div>

            <ErrorMessage error=Signal::derive(move || form.with(|f| f.error.clone())) />

            <button
                type="submit"
                class="flex w-full items-center justify-center rounded-2xl bg-emerald-500 px-4 py-3 text-base font-semibold text-white shadow-lg transition hover:bg-emerald-600 disabled:cursor-not-allowed disabled:opacity-60"
                disabled=move || form.with(|f| f.submitting)
            >
                {move || if form.with(|f| f.submitting) { "ログイン中..." } else { "ログイン" }}
            </button>
        </form>

        <div class="flex flex-wrap items-center justify-between gap-3 text-sm text-zinc-600">
            <span>
                "アカウントが必要ですか？"
                <A href="/register" attr:class="ml-2 font-medium text-emerald-600 hover:underline">
                    "ユーザー登録へ"
                </A>
            </span>
            // Always offered, so an unreadable stored session can be cleared too
            <button
                type="button"
                class="rounded-2xl border border-zinc-300 px-3 py-1 text-xs font-medium text-zinc-700 transition hover:border-zinc-400"
                on:click=on_sign_out
            >
                "ローカルのトークンを削除"
            </button>
        </div>

        <AuthResultPanel
            response=Signal::derive(move || form.with(|f| f.result.clone()))
            helper_text="この JSON を Bearer トークンとして利用してください。ログアウトボタンでローカルストレージをクリーンアップできます。"
        />
    }
}
