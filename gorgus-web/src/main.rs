use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use gorgus::{
    Direction, GorgusResult, Inspection, LEXICON_ENV, Lexicon, RuleMorphology, SETTINGS_ENV,
    Settings, Translator, load_lexicon_from_file, load_settings,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub direction: String,
    /// Falls back to the server settings when absent
    #[serde(default)]
    pub formal: Option<bool>,
    #[serde(default)]
    pub accents: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub direction: String,
}

#[derive(Serialize, Deserialize)]
pub struct InspectRequest {
    pub sentence: String,
}

#[derive(Serialize, Deserialize)]
pub struct InspectResponse {
    pub translation: String,
    pub inspection: Inspection,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub entries: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shared by every request; the translator is read-only
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub settings: Settings,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn build_translator() -> GorgusResult<Translator> {
    let lexicon = match env::var_os(LEXICON_ENV) {
        Some(path) => load_lexicon_from_file(Path::new(&path))?,
        None => Lexicon::builtin()?,
    };
    Translator::new(lexicon, Box::new(RuleMorphology::new()))
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", post(translate_text))
        .route("/api/inspect", post(inspect_sentence))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let translator =
        build_translator().map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let settings = env::var_os(SETTINGS_ENV)
        .map(|path| load_settings(Path::new(&path)))
        .unwrap_or_default();
    info!(entries = translator.lexicon().len(), "👽 Starting Gorgus translation server");

    let state = AppState {
        translator: Arc::new(translator),
        settings,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    info!("🚀 Server running at http://127.0.0.1:3000");

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let direction: Direction = request.direction.parse().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("{}", e),
            }),
        )
    })?;

    let formal = request.formal.unwrap_or(state.settings.formal_gorgus);
    let accents = request
        .accents
        .unwrap_or(state.settings.add_pronounciation_accents);
    let translation = state
        .translator
        .translate(&request.text, direction, formal, accents);
    info!("Translated to {}: {} → {}", direction, &request.text, &translation);

    Ok(Json(TranslateResponse {
        translation,
        direction: direction.to_string(),
    }))
}

async fn inspect_sentence(
    State(state): State<AppState>,
    Json(request): Json<InspectRequest>,
) -> Json<InspectResponse> {
    let (translation, inspection) = state.translator.inspect(&request.sentence);
    info!(words = inspection.words.len(), "Inspected \"{}\"", &request.sentence);
    Json(InspectResponse {
        translation,
        inspection,
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        entries: state.translator.lexicon().len(),
    })
}
