//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers:
//!
//! - **Paths**: the product CRUD endpoints and the health probes
//! - **Schemas**: request and response bodies plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep utoipa out of the domain
//!
//! The generated document backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::products::{ProductRequestBody, ProductResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product catalogue API",
        description = "CRUD access to the product catalogue plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ProductRequestBody,
        ProductResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "products", description = "Product catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI paths and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::path::HttpMethod;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    fn schema(name: &str) -> RefOr<Schema> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        schemas
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("{name} schema registered"))
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "message")]
    #[case(ERROR_SCHEMA_NAME, "traceId")]
    #[case("ProductRequestBody", "name")]
    #[case("ProductRequestBody", "price")]
    #[case("ProductResponseBody", "id")]
    #[case("ProductResponseBody", "createdAt")]
    #[case("ProductResponseBody", "isActive")]
    fn schema_has_field(#[case] name: &str, #[case] field: &str) {
        assert_object_schema_has_field(&schema(name), field);
    }

    #[rstest]
    #[case("/products", HttpMethod::Get, "listProducts")]
    #[case("/products", HttpMethod::Post, "createProduct")]
    #[case("/products/{id}", HttpMethod::Get, "getProduct")]
    #[case("/products/{id}", HttpMethod::Put, "updateProduct")]
    #[case("/products/{id}", HttpMethod::Delete, "deleteProduct")]
    fn product_operations_are_documented(
        #[case] path: &str,
        #[case] method: HttpMethod,
        #[case] operation_id: &str,
    ) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path documented");
        let operation = match method {
            HttpMethod::Get => item.get.as_ref(),
            HttpMethod::Post => item.post.as_ref(),
            HttpMethod::Put => item.put.as_ref(),
            HttpMethod::Delete => item.delete.as_ref(),
            _ => None,
        }
        .expect("operation documented");
        assert_eq!(operation.operation_id.as_deref(), Some(operation_id));
    }

    #[rstest]
    fn health_probes_are_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health/ready"));
        assert!(doc.paths.paths.contains_key("/health/live"));
    }
}
