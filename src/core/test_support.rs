//! Stub backend used by the HTTP tests

use axum::Router;

use crate::core::api::ApiClient;
use crate::core::config::ApiConfig;

/// Serve `router` on an ephemeral local port and return its base URL
pub(crate) async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub server stopped");
    });

    format!("http://{}", addr)
}

/// API client pointed at a freshly spawned stub
pub(crate) async fn stub_client(router: Router) -> ApiClient {
    let base_url = spawn_stub(router).await;
    ApiClient::new(&ApiConfig::with_base_url(base_url)).expect("stub base url is set")
}
