// Saju Engine - Web Server
// JSON API over the Four Pillars engine, plus static analysis pages.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use saju_engine::{FourPillars, Pillar, ProfileRegistry, SajuEngine};

/// Shared application state. The engine is stateless and the registry is
/// read-only, so no locking is needed.
#[derive(Clone)]
struct AppState {
    engine: SajuEngine,
    profiles: Arc<ProfileRegistry>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// Request body shared by both analysis endpoints
#[derive(Deserialize)]
struct SajuRequest {
    /// YYYY-MM-DD
    birth_date: String,
    /// HH:MM
    birth_time: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    birth_place: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    status: &'static str,
    error: String,
}

/// Basic analysis response: element + trait profile + formatted message
#[derive(Serialize)]
struct AnalyzeResponse {
    status: &'static str,
    birth_date: String,
    gender: String,
    birth_place: String,
    five_element: String,
    message: String,
    traits: Option<saju_engine::ElementProfile>,
}

/// One pillar on the wire, with ten-god labels relative to the day stem
#[derive(Serialize)]
struct PillarResponse {
    stem: String,
    stem_hanja: String,
    branch: String,
    branch_hanja: String,
    /// Omitted for the day pillar: the day stem has no self-relation
    #[serde(skip_serializing_if = "Option::is_none")]
    ten_god: Option<String>,
    branch_ten_god: String,
}

#[derive(Serialize)]
struct FourPillarsResponse {
    year: PillarResponse,
    month: PillarResponse,
    day: PillarResponse,
    hour: PillarResponse,
}

/// Detailed analysis response: full chart + ten gods + profile
#[derive(Serialize)]
struct DetailedResponse {
    status: &'static str,
    birth_date: String,
    gender: String,
    birth_place: String,
    five_element: String,
    day_stem: String,
    day_branch: String,
    day_pillar: String,
    season: String,
    four_pillars: FourPillarsResponse,
    traits: Option<saju_engine::ElementProfile>,
}

impl PillarResponse {
    fn build(engine: &SajuEngine, day_stem: usize, pillar: Pillar, is_day: bool) -> Self {
        let ten_god = if is_day {
            None
        } else {
            Some(engine.compute_ten_god(day_stem, pillar.stem_index).korean().to_string())
        };
        let branch_ten_god = engine
            .compute_branch_ten_god(day_stem, pillar.branch_index)
            .korean()
            .to_string();

        Self {
            stem: pillar.stem().to_string(),
            stem_hanja: pillar.stem_hanja().to_string(),
            branch: pillar.branch().to_string(),
            branch_hanja: pillar.branch_hanja().to_string(),
            ten_god,
            branch_ten_god,
        }
    }
}

impl FourPillarsResponse {
    fn build(engine: &SajuEngine, pillars: &FourPillars) -> Self {
        let day_stem = pillars.day.stem_index;
        Self {
            year: PillarResponse::build(engine, day_stem, pillars.year, false),
            month: PillarResponse::build(engine, day_stem, pillars.month, false),
            day: PillarResponse::build(engine, day_stem, pillars.day, true),
            hour: PillarResponse::build(engine, day_stem, pillars.hour, false),
        }
    }
}

// ============================================================================
// Request Parsing
// ============================================================================

/// Parse the textual birth date/time fields into engine inputs.
fn parse_birth(request: &SajuRequest) -> Result<(NaiveDate, NaiveTime), String> {
    let date = NaiveDate::parse_from_str(&request.birth_date, "%Y-%m-%d")
        .map_err(|_| format!("birth_date '{}' must be YYYY-MM-DD", request.birth_date))?;
    let time = NaiveTime::parse_from_str(&request.birth_time, "%H:%M")
        .map_err(|_| format!("birth_time '{}' must be HH:MM", request.birth_time))?;
    Ok((date, time))
}

fn bad_request(error: String) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            status: "error",
            error,
        }),
    )
        .into_response()
}

fn format_birth_date(date: NaiveDate, time: NaiveTime) -> String {
    format!(
        "{}년 {}월 {}일 {}시 {}분",
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute()
    )
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "version": saju_engine::VERSION }))
}

/// POST /saju/analyze - Element + trait profile for a birth instant
async fn analyze_saju(
    State(state): State<AppState>,
    Json(request): Json<SajuRequest>,
) -> axum::response::Response {
    let (date, time) = match parse_birth(&request) {
        Ok(parsed) => parsed,
        Err(e) => return bad_request(e),
    };

    let pillars = match state.engine.compute_four_pillars(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
    ) {
        Ok(pillars) => pillars,
        Err(e) => return bad_request(e.to_string()),
    };

    let element = pillars.day_element();
    let profile = state.profiles.get(element).cloned();

    let message = match &profile {
        Some(p) => format!(
            "{} 당신의 오행은 '{}'입니다.\n\n📋 주요 성향: {}\n\n💪 강점: {}\n\n⚠️ 주의점: {}\n\n📝 상세 설명: {}",
            p.emoji,
            p.name,
            p.traits.join(", "),
            p.strengths,
            p.weaknesses,
            p.description
        ),
        None => format!("당신의 오행은 '{}'입니다.", element.korean()),
    };

    let response = AnalyzeResponse {
        status: "success",
        birth_date: format_birth_date(date, time),
        gender: request.gender,
        birth_place: request.birth_place,
        five_element: element.korean().to_string(),
        message,
        traits: profile,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// POST /saju/detailed - Full Four Pillars chart with ten-god labels
async fn analyze_saju_detailed(
    State(state): State<AppState>,
    Json(request): Json<SajuRequest>,
) -> axum::response::Response {
    let (date, time) = match parse_birth(&request) {
        Ok(parsed) => parsed,
        Err(e) => return bad_request(e),
    };

    let pillars = match state.engine.compute_four_pillars(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
    ) {
        Ok(pillars) => pillars,
        Err(e) => return bad_request(e.to_string()),
    };

    let element = pillars.day_element();
    let season = state
        .engine
        .approximate_season(date.month(), date.day())
        .unwrap_or("")
        .to_string();

    let response = DetailedResponse {
        status: "success",
        birth_date: format_birth_date(date, time),
        gender: request.gender,
        birth_place: request.birth_place,
        five_element: element.korean().to_string(),
        day_stem: pillars.day.stem().to_string(),
        day_branch: pillars.day.branch().to_string(),
        day_pillar: pillars.day.display(),
        season,
        four_pillars: FourPillarsResponse::build(&state.engine, &pillars),
        traits: state.profiles.get(element).cloned(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🔮 Saju Engine - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let profiles = match std::env::var("SAJU_PROFILES") {
        Ok(path) => {
            ProfileRegistry::from_file(&path).expect("Failed to load profile file")
        }
        Err(_) => ProfileRegistry::builtin(),
    };
    println!("✓ Loaded {} element profiles", profiles.len());

    let state = AppState {
        engine: SajuEngine::new(),
        profiles: Arc::new(profiles),
    };

    // Build API routes
    let saju_routes = Router::new()
        .route("/analyze", post(analyze_saju))
        .route("/detailed", post(analyze_saju_detailed))
        .route("/analysis", get(serve_index))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/api/health", get(health_check))
        .nest("/saju", saju_routes)
        .nest_service("/static", ServeDir::new("web"))
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:8000");
    println!("   API: POST http://localhost:8000/saju/detailed");
    println!("   UI:  http://localhost:8000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
