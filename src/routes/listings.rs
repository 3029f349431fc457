use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::Catalog;
use crate::models::{
    CompareQuery, CompareResponse, ErrorResponse, HealthResponse, ImageVariant, ListingsQuery,
    ListingsResponse, NeighborhoodsResponse, PropertyView,
};
use crate::services::AuthService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub auth: Arc<AuthService>,
    /// Variant served when a request does not ask for one
    pub default_variant: ImageVariant,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings", web::get().to(list_listings))
        .route("/listings/compare", web::get().to(compare_listings))
        .route("/listings/{id}", web::get().to(get_listing))
        .route("/neighborhoods", web::get().to(get_neighborhoods));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Browse listings endpoint
///
/// GET /api/v1/listings?neighborhood=Kilimani&priceMin=50000&type=apartment,studio
///
/// Multi-valued facets are comma-separated; unrecognized tokens place no
/// constraint. The result keeps catalog order.
async fn list_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingsQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let variant = query.variant.unwrap_or(state.default_variant);
    let criteria = query.into_criteria();

    let matches = state.catalog.filter(&criteria);

    tracing::debug!(
        "Listings query matched {} of {} ({} filters active)",
        matches.len(),
        state.catalog.len(),
        criteria.active_count()
    );

    let properties: Vec<PropertyView> = matches
        .iter()
        .map(|property| PropertyView::from_property(property, variant))
        .collect();

    HttpResponse::Ok().json(ListingsResponse {
        total_results: properties.len(),
        active_filters: criteria.active_count(),
        properties,
    })
}

#[derive(Debug, Deserialize)]
struct DetailQuery {
    variant: Option<ImageVariant>,
}

/// Single listing endpoint
///
/// GET /api/v1/listings/{id}
async fn get_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DetailQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let variant = query.variant.unwrap_or(state.default_variant);

    match state.catalog.get(&id) {
        Some(property) => HttpResponse::Ok().json(PropertyView::from_property(property, variant)),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: format!("No listing with id {}", id),
            status_code: 404,
        }),
    }
}

/// Comparison endpoint
///
/// GET /api/v1/listings/compare?ids=1,3,7
///
/// Selects up to three distinct listings; unknown ids are ignored.
async fn compare_listings(
    state: web::Data<AppState>,
    query: web::Query<CompareQuery>,
) -> impl Responder {
    let variant = query.variant.unwrap_or(state.default_variant);
    let ids = query.ids();

    let properties: Vec<PropertyView> = state
        .catalog
        .compare_selection(&ids)
        .iter()
        .map(|property| PropertyView::from_property(property, variant))
        .collect();

    HttpResponse::Ok().json(CompareResponse { properties })
}

/// Neighborhoods endpoint
///
/// GET /api/v1/neighborhoods
///
/// Returns the distinct neighborhoods that actually have listings, for
/// search suggestions.
async fn get_neighborhoods(state: web::Data<AppState>) -> impl Responder {
    let neighborhoods = state.catalog.neighborhoods();

    HttpResponse::Ok().json(NeighborhoodsResponse {
        count: neighborhoods.len(),
        neighborhoods,
    })
}
