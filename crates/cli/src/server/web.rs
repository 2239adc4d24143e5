use axum::Router;
use livehub_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        api_url = format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Web server stopped");
    Ok(())
}

fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::{Repositories, UseCases};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use livehub_domain::config::DatabaseConfig;
    use livehub_domain::Config;
    use livehub_infrastructure::database::create_pool;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = DatabaseConfig {
            path: ":memory:".to_string(),
            ..Default::default()
        };
        let pool = create_pool(&db).await.unwrap();
        let repos = Repositories::new(pool);
        let use_cases = UseCases::new(&repos, &Config::default());
        create_app(use_cases.app_state())
    }

    #[tokio::test]
    async fn test_health_is_served_under_api_prefix() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_unprefixed_routes_are_not_found() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_orders_report_unconfigured_gateway() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::post("/api/orders")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"total_amount":"1.00","subject":"VIP"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
