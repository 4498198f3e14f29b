use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{A, Route, Router, Routes};

use crate::ui::{
    HomePage, LoginPage, NotFoundPage, ProtectedPage, RegisterPage, provide_app_context,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased bg-zinc-50 text-zinc-900">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // API configuration and token storage for every page
    provide_app_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/omocha-bako.css"/>

        <Title text="Omocha Bako Dashboard"/>

        <Router>
            <div class="min-h-screen">
                <SiteHeader />
                <main>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=StaticSegment("register") view=RegisterPage />
                        <Route path=StaticSegment("login") view=LoginPage />
                        <Route path=StaticSegment("protected") view=ProtectedPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    const LINK_CLASS: &str = "transition hover:text-emerald-600";

    view! {
        <header class="sticky top-0 z-50 border-b border-zinc-200 bg-white/80 backdrop-blur">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <A href="/" attr:class="text-lg font-semibold text-zinc-900 transition hover:text-emerald-600">
                    "Omocha Bako"
                </A>
                <nav class="flex items-center gap-6 text-sm font-medium text-zinc-600">
                    <A href="/register" attr:class=LINK_CLASS>"ユーザー登録"</A>
                    <A href="/login" attr:class=LINK_CLASS>"ログイン"</A>
                    <A href="/protected" attr:class=LINK_CLASS>"保護 API"</A>
                </nav>
            </div>
        </header>
    }
}
