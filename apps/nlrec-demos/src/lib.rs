#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! nlrec-demos
//!
//! Serves one demo page per binary. Each request parses its view state from
//! the query string and re-renders the page; there is no other state.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nlrec_core::config::Config;
use nlrec_core::traits::DemoPage;

/// Build the router for one page.
pub fn create_router<P>(page: P) -> Router
where
    P: DemoPage + 'static,
{
    Router::new()
        .route("/", get(render_page::<P>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(page))
}

/// Render the page for the request's view state. A query value outside the
/// page's closed key set is a bad request, answered with the deserializer's
/// diagnostic rather than a blank page.
async fn render_page<P>(
    State(page): State<Arc<P>>,
    query: Result<Query<P::View>, QueryRejection>,
) -> Response
where
    P: DemoPage + 'static,
{
    match query {
        Ok(Query(view)) => Html(page.render(&view)).into_response(),
        Err(rejection) => {
            let status = rejection.status();
            (status, rejection.body_text()).into_response()
        }
    }
}

/// Load config, bind, and serve the page until terminated.
pub async fn serve<P>(page: P, default_port: u16) -> anyhow::Result<()>
where
    P: DemoPage + 'static,
{
    let config = Config::load()?;
    let server = config.server(default_port);
    let title = page.meta().title;

    let app = create_router(page);

    let listener = tokio::net::TcpListener::bind(server.bind_addr()).await?;
    info!(page = title, addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
