use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Products and categories"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_products::handlers::URL, api = domain_products::handlers::ApiDoc),
        (path = domain_categories::handlers::URL, api = domain_categories::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_both_resources() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/produtos".to_string()));
        assert!(paths.contains(&"/produtos/{id}".to_string()));
        assert!(paths.contains(&"/categorias".to_string()));
        assert!(paths.contains(&"/categorias/{id}".to_string()));
    }
}
