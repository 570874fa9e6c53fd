//! Handlers for the `/products` resource.
//!
//! Products and their portions are shared lookup data: any authenticated
//! account can read them and add to them. Entries reference them by id.

use axum::extract::{Path, State};
use axum::Json;
use foodlog_core::error::CoreError;
use foodlog_core::types::DbId;
use serde::{Deserialize, Serialize};

use foodlog_db::models::{NewPortion, NewProduct, Portion, Product};
use foodlog_db::repositories::{PortionRepo, ProductRepo};

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for `POST /products`.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product: Option<NewProduct>,
}

/// Body for `POST /products/{id}/portions`.
#[derive(Debug, Deserialize)]
pub struct AddPortionRequest {
    pub portion: Option<NewPortion>,
}

/// A product together with its serving-size options.
#[derive(Debug, Serialize)]
pub struct ProductWithPortions {
    #[serde(flatten)]
    pub product: Product,
    pub portions: Vec<Portion>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    pub product: ProductWithPortions,
}

#[derive(Debug, Serialize)]
pub struct PortionResponse {
    pub portion: Portion,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/products
///
/// Create a product, recording the caller as its creator.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let new_product = input
        .product
        .ok_or_else(|| ApiError::BadRequest("no product provided".into()))?;

    let product = ProductRepo::create(&state.pool, auth.account_id, &new_product)
        .await
        .map_err(|e| ApiError::store("while creating product", e))?;

    tracing::info!(product_id = product.id, account_id = auth.account_id, "product created");

    Ok(Json(ProductResponse { product }))
}

/// GET /api/v1/products
///
/// List all products, ordered by name.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<ProductsResponse>> {
    let products = ProductRepo::list(&state.pool)
        .await
        .map_err(|e| ApiError::store("while listing products", e))?;

    Ok(Json(ProductsResponse { products }))
}

/// GET /api/v1/products/{id}
///
/// Fetch a single product with its portions.
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<ProductDetailResponse>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|e| ApiError::store("while fetching product", e))?
        .ok_or(ApiError::Domain(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    let portions = PortionRepo::list_by_product(&state.pool, id)
        .await
        .map_err(|e| ApiError::store("while fetching product portions", e))?;

    Ok(Json(ProductDetailResponse {
        product: ProductWithPortions { product, portions },
    }))
}

/// POST /api/v1/products/{id}/portions
///
/// Add a serving-size option to an existing product.
pub async fn add_portion(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<AddPortionRequest>,
) -> ApiResult<Json<PortionResponse>> {
    let new_portion = input
        .portion
        .ok_or_else(|| ApiError::BadRequest("no portion provided".into()))?;

    // Resolve the product first so a bad id gets a 404 rather than a
    // foreign-key error dressed up as a 400.
    ProductRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|e| ApiError::store("while fetching product", e))?
        .ok_or(ApiError::Domain(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    let portion = PortionRepo::create(&state.pool, id, &new_portion)
        .await
        .map_err(|e| ApiError::store("while adding portion", e))?;

    tracing::info!(portion_id = portion.id, product_id = id, "portion added");

    Ok(Json(PortionResponse { portion }))
}
