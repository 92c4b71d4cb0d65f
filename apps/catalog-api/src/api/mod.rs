use axum::Router;

pub mod categories;
pub mod health;
pub mod products;

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest(domain_products::handlers::URL, products::router(state))
        .nest(domain_categories::handlers::URL, categories::router(state))
}

/// `/ready`, with state applied so it merges into the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use core_config::{app_info, server::ServerConfig};
    use database::sqlite::SqliteConfig;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use test_utils::TestDatabase;
    use tower::ServiceExt;

    fn state(db: &TestDatabase) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: SqliteConfig::new(db.connection_string.clone()),
                server: ServerConfig::default(),
                environment: Environment::Production,
            },
            db: db.connection(),
        }
    }

    fn app(state: AppState) -> Router {
        let router = temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            axum_helpers::create_router::<ApiDoc>(routes(&state), &state.config.environment)
                .unwrap()
        });
        router.merge(ready_router(state))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_full_product_flow_under_api_prefix() {
        let db = TestDatabase::new().await;
        let app = app(state(&db));

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/categorias")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"nome": "Periféricos"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let categoria_id = json_body(response).await["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/produtos")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"nome": "Mouse", "preco": 89.9, "categoriaId": categoria_id})
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

        let response = app
            .oneshot(Request::get(location.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["nome"], "Mouse");
        assert_eq!(body["categoria"]["nome"], "Periféricos");
    }

    #[tokio::test]
    async fn test_ready_reports_database() {
        let db = TestDatabase::new().await;

        let response = app(state(&db))
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_404() {
        let db = TestDatabase::new().await;

        let response = app(state(&db))
            .oneshot(Request::get("/api/fornecedores").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
