use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::{middleware::from_fn, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use kala_api::config;
use kala_api::database::Database;
use kala_api::handlers;
use kala_api::middleware::admin_auth;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();

    // The service must never run with an unsigned session scheme
    if config.security.jwt_secret.is_empty() {
        eprintln!("FATAL ERROR: JWT_SECRET is not defined.");
        std::process::exit(1);
    }

    tracing::info!("Starting kala-api in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("KALA_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("kala-api listening on http://{}", bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Entity routers (public reads merged with admin-gated mutations)
        .nest("/api/admin", admin_routes())
        .nest("/api/courses", course_routes())
        .nest("/api/teachers", teacher_routes())
        .nest("/api/artists", artist_routes())
        .nest("/api/events", event_routes())
        .nest("/api/about", about_routes())
        .nest("/api/register", registration_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config::config().api.request_timeout_secs,
        )))
}

fn admin_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::admin;

    let protected = Router::new()
        .route("/logout", post(admin::logout))
        .route("/update-password", put(admin::update_password))
        .route("/me", get(admin::me))
        .route_layer(from_fn(admin_auth));

    Router::new().route("/login", post(admin::login)).merge(protected)
}

fn course_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::courses;

    let public = Router::new()
        .route("/", get(courses::list))
        .route("/:id", get(courses::get));

    let protected = Router::new()
        .route("/", post(courses::create))
        .route("/:id", put(courses::update).delete(courses::delete))
        .route_layer(from_fn(admin_auth));

    public.merge(protected)
}

fn teacher_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::teachers;

    let public = Router::new()
        .route("/", get(teachers::list))
        .route("/:id", get(teachers::get));

    let protected = Router::new()
        .route("/", post(teachers::create))
        .route("/:id", put(teachers::update).delete(teachers::delete))
        .route_layer(from_fn(admin_auth));

    public.merge(protected)
}

fn artist_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::artists;

    let public = Router::new()
        .route("/", get(artists::list))
        .route("/:id", get(artists::get));

    let protected = Router::new()
        .route("/", post(artists::create))
        .route("/:id", put(artists::update).delete(artists::delete))
        .route_layer(from_fn(admin_auth));

    public.merge(protected)
}

fn event_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::events;

    let public = Router::new()
        .route("/", get(events::list))
        .route("/:id", get(events::get));

    let protected = Router::new()
        .route("/", post(events::create))
        .route("/:id", put(events::update).delete(events::delete))
        .route_layer(from_fn(admin_auth));

    public.merge(protected)
}

fn about_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::about;

    let public = Router::new()
        .route("/bod", get(about::list_bod))
        .route("/bod/:id", get(about::get_bod))
        .route("/team-members", get(about::list_team_members))
        .route("/team-members/:id", get(about::get_team_member))
        .route("/programs", get(about::list_programs))
        .route("/programs/:id", get(about::get_program));

    let protected = Router::new()
        .route("/bod", post(about::create_bod))
        .route("/bod/:id", put(about::update_bod).delete(about::delete_bod))
        .route("/team-members", post(about::create_team_member))
        .route(
            "/team-members/:id",
            put(about::update_team_member).delete(about::delete_team_member),
        )
        .route("/programs", post(about::create_program))
        .route(
            "/programs/:id",
            put(about::update_program).delete(about::delete_program),
        )
        .route_layer(from_fn(admin_auth));

    public.merge(protected)
}

fn registration_routes() -> Router {
    use axum::routing::{patch, post};
    use handlers::registrations;

    // Public signup form
    let public = Router::new().route("/", post(registrations::public_register));

    // Dashboard: students and registrations are admin-only, reads included
    let protected = Router::new()
        .route(
            "/students",
            get(registrations::list_students).post(registrations::create_student),
        )
        .route(
            "/students/:id",
            get(registrations::get_student)
                .put(registrations::update_student)
                .delete(registrations::delete_student),
        )
        .route(
            "/registration",
            get(registrations::list_registrations).post(registrations::create_registration),
        )
        .route(
            "/registration/:id",
            get(registrations::get_registration)
                .put(registrations::update_registration)
                .delete(registrations::delete_registration),
        )
        .route(
            "/registration/:id/status",
            patch(registrations::update_registration_status),
        )
        .route_layer(from_fn(admin_auth));

    public.merge(protected)
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::config()
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "kala-api",
        "version": version,
        "description": "Cultural-school content management API",
        "endpoints": {
            "health": "/health (public)",
            "admin": "/api/admin/* (login public, rest protected)",
            "courses": "/api/courses[/:id] (reads public, writes protected)",
            "teachers": "/api/teachers[/:id] (reads public, writes protected)",
            "artists": "/api/artists[/:id] (reads public, writes protected)",
            "events": "/api/events[/:id] (reads public, writes protected)",
            "about": "/api/about/{bod,team-members,programs} (reads public, writes protected)",
            "register": "/api/register (public signup; dashboard protected)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match Database::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
