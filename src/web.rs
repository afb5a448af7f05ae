//! Browser front-end (axum): the view rendered server-side as one HTML page.
//!
//! Every page load mounts a fresh view, so nothing survives a reload.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::client::SearchClient;
use crate::config::ViewConfig;
use crate::view::SearchView;

struct WebState {
    config: ViewConfig,
    http: reqwest::Client,
}

type AppState = Arc<WebState>;

/// Form posted by the page.
#[derive(Debug, serde::Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

pub fn router(config: ViewConfig) -> Router {
    let state: AppState = Arc::new(WebState {
        config,
        http: reqwest::Client::new(),
    });
    Router::new()
        .route("/", get(index_page).post(search_page))
        .with_state(state)
}

/// Serve until the listener fails.
pub async fn serve(listener: TcpListener, config: ViewConfig) -> std::io::Result<()> {
    info!(addr = %listener.local_addr()?, backend = %config.endpoint, "serving search page");
    axum::serve(listener, router(config)).await
}

fn mount(state: &WebState) -> SearchView {
    let client = SearchClient::with_http(state.http.clone(), state.config.endpoint.clone());
    SearchView::with_client(state.config.clone(), client)
}

/// GET / -> the freshly mounted view.
async fn index_page(State(state): State<AppState>) -> Html<String> {
    Html(mount(&state).screen().to_html("/"))
}

/// POST / -> type the submitted query, press Enter, render what the view shows.
async fn search_page(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Html<String> {
    let mut view = mount(&state);
    view.submit_query(form.query).await;
    Html(view.screen().to_html("/"))
}
