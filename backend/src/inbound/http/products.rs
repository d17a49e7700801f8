//! Product catalogue HTTP handlers.
//!
//! ```text
//! GET    /products
//! GET    /products/{id}
//! POST   /products
//! PUT    /products/{id}
//! DELETE /products/{id}
//! ```
//!
//! Update and delete look the product up first and answer 404 when it is
//! absent. The lookup and the write are separate statements, so a concurrent
//! delete between them also surfaces as 404.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::ports::ProductRepositoryError;
use crate::domain::{Error, Product, ProductDraft, ProductId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    invalid_id_error, malformed_body_error, product_validation_error,
};

/// Request payload for creating or replacing a product.
///
/// `id`, `createdAt` and `isActive` are never taken from the caller; unknown
/// fields are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequestBody {
    /// Display name, 1 to 100 characters.
    #[schema(example = "Widget", max_length = 100)]
    pub name: String,
    /// Optional description.
    #[schema(example = "A very useful widget")]
    pub description: Option<String>,
    /// Non-negative unit price, stored with two decimal places.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 9.99, minimum = 0)]
    pub price: Decimal,
}

/// Product representation returned by every read and by create.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseBody {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Widget")]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    /// Creation timestamp (RFC 3339, UTC).
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    /// Active flag.
    pub is_active: bool,
}

impl From<Product> for ProductResponseBody {
    fn from(value: Product) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            description: value.description().map(str::to_owned),
            price: value.price(),
            created_at: value.created_at(),
            is_active: value.is_active(),
        }
    }
}

fn parse_draft(body: ProductRequestBody) -> Result<ProductDraft, Error> {
    let ProductRequestBody {
        name,
        description,
        price,
    } = body;
    ProductDraft::new(name, description, price).map_err(|err| product_validation_error(&err))
}

fn not_found(id: ProductId) -> Error {
    Error::not_found(format!("Product with ID {id} not found"))
}

fn map_repository_error(err: ProductRepositoryError) -> Error {
    match err {
        ProductRepositoryError::NotFound { id } => not_found(id),
        ProductRepositoryError::Validation { message } => Error::invalid_request(message),
        other => {
            error!(error = %other, "product storage operation failed");
            Error::internal(other.to_string())
        }
    }
}

async fn require_product(state: &HttpState, id: ProductId) -> ApiResult<Product> {
    state
        .products
        .get_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(|| not_found(id))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    malformed_body_error(&err).into()
}

fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    invalid_id_error().into()
}

/// Register the product routes and their extractor error handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use product_api::domain::ports::FixtureProductRepository;
/// use product_api::inbound::http::products::configure_products;
/// use product_api::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(FixtureProductRepository::default()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_products);
/// ```
pub fn configure_products(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(list_products)
        .service(get_product)
        .service(create_product)
        .service(update_product)
        .service(delete_product);
}

/// List every product, lowest id first.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponseBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProductResponseBody>>> {
    let products = state
        .products
        .get_all()
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(
        products.into_iter().map(ProductResponseBody::from).collect(),
    ))
}

/// Fetch one product.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The product", body = ProductResponseBody),
        (status = 400, description = "Invalid product id", body = ErrorSchema),
        (status = 404, description = "Product not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<ProductResponseBody>> {
    let id = ProductId::new(path.into_inner());
    let product = require_product(&state, id).await?;
    Ok(web::Json(ProductResponseBody::from(product)))
}

/// Create a product.
///
/// Responds 201 with the stored representation and a `Location` header.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequestBody,
    responses(
        (
            status = 201,
            description = "Product created",
            body = ProductResponseBody,
            headers(("Location" = String, description = "Path of the new product"))
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(payload.into_inner())?;
    let product = state
        .products
        .create(&draft)
        .await
        .map_err(map_repository_error)?;
    info!(product_id = %product.id(), "product created");

    let body = ProductResponseBody::from(product);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/products/{}", body.id)))
        .json(body))
}

/// Replace the name, description and price of a product.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    request_body = ProductRequestBody,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Product not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[put("/products/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ProductRequestBody>,
) -> ApiResult<HttpResponse> {
    let id = ProductId::new(path.into_inner());
    let draft = parse_draft(payload.into_inner())?;
    require_product(&state, id).await?;

    state
        .products
        .update(id, &draft)
        .await
        .map_err(map_repository_error)?;
    info!(product_id = %id, "product updated");
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid product id", body = ErrorSchema),
        (status = 404, description = "Product not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = ProductId::new(path.into_inner());
    require_product(&state, id).await?;

    state
        .products
        .delete(id)
        .await
        .map_err(map_repository_error)?;
    info!(product_id = %id, "product deleted");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
