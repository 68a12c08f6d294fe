//! Vela API Gateway

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post_service};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use vela_bootstrap::{MetricsRecorder, shutdown_signal};
use vela_gateway::client::{AccountApi, AccountClient};
use vela_gateway::config::GatewayConfig;
use vela_gateway::graphql::build_schema;
use vela_telemetry::init_tracing;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let config = GatewayConfig::from_env();

    let metrics = Arc::new(MetricsRecorder::new());

    // 懒连接，下游未就绪不阻塞网关启动
    info!("Using account service at {}", config.account_endpoint);
    let account_api: Arc<dyn AccountApi> = Arc::new(AccountClient::new(&config)?);

    let schema = build_schema(account_api);

    // GraphiQL 只在非生产环境开放
    let graphql_route = if config.is_production() {
        post_service(GraphQL::new(schema))
    } else {
        get(graphiql).post_service(GraphQL::new(schema))
    };

    let app = Router::new()
        .route("/graphql", graphql_route)
        .route("/health", get(health))
        .route(
            "/metrics",
            get(move || {
                let metrics = metrics.clone();
                async move { metrics.render() }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(%addr, "Starting gateway");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
