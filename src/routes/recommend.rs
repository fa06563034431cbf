use actix_web::{web, HttpResponse, Responder};
use crate::core::Recommender;
use crate::models::{HealthResponse, PreferenceRequest};
use crate::services::{GoogleBooksClient, SearchOptions};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<GoogleBooksClient>,
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(books: GoogleBooksClient, recommender: Recommender) -> Self {
        Self {
            books: Arc::new(books),
            recommender,
        }
    }
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        variant: state.recommender.profile().variant.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend books endpoint
///
/// POST /recommend
///
/// Request body:
/// ```json
/// {
///   "genre": "fantasy",
///   "mood": "dark",
///   "age": "teen",
///   "rating": "high",
///   "author": "string"
/// }
/// ```
///
/// Always answers 200; upstream failures become an apology message.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<PreferenceRequest>,
) -> impl Responder {
    let recommender = &state.recommender;
    let profile = recommender.profile();
    let query = recommender.build_query(&req);

    tracing::info!("Recommendation request ({}): query={:?}", profile.variant, query);

    let options = SearchOptions {
        style: profile.request_style,
        max_results: profile.max_results,
    };

    let envelope = match state.books.search(&query, &options).await {
        Ok(volumes) => {
            tracing::debug!("Formatting {} volumes for query {:?}", volumes.len(), query);
            recommender.recommend(&req, volumes)
        }
        Err(e) => {
            tracing::error!("Error querying Google Books API: {}", e);
            recommender.failure()
        }
    };

    HttpResponse::Ok().json(envelope)
}
