use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use bookbot::config::Settings;
use bookbot::core::Recommender;
use bookbot::routes::{self, recommend::AppState};
use bookbot::services::GoogleBooksClient;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting BookBot recommendation service...");

    let books = GoogleBooksClient::new(
        settings.google_books.endpoint.clone(),
        settings.google_books.api_key.clone(),
        settings.google_books.timeout(),
    )
    .map_err(|e| {
        error!("Failed to create Google Books client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Google Books client initialized ({})", books.endpoint());

    let profile = settings.profile();
    info!(
        "Recommender initialized: variant={}, max_results={}, selection_count={}",
        profile.variant, profile.max_results, profile.selection_count
    );

    let app_state = AppState::new(books, Recommender::new(profile));

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.port();

    info!("BookBot backend running at http://{}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    let server = match settings.server.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.bind((host, port))?.run().await
}
