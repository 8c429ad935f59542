use crate::content::{self, ChartData, Language, MapData, PageContent, Section, SectionContent};
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create content API router (static, no state)
pub fn create_content_router() -> Router {
    Router::new()
        .route("/api/content/:lang", get(get_page))
        .route("/api/content/:lang/:section", get(get_section))
        .route("/api/charts", get(get_charts))
        .route("/api/map", get(get_map))
}

/// GET /api/content/:lang - Every page section in one language
async fn get_page(Path(lang): Path<String>) -> Result<Json<PageContent>, ContentError> {
    let lang: Language = lang
        .parse()
        .map_err(|e: content::UnknownLanguage| ContentError::BadLanguage(e.to_string()))?;

    Ok(Json(PageContent::for_language(lang)))
}

/// GET /api/content/:lang/:section - One section, e.g. /api/content/mr/footer
async fn get_section(
    Path((lang, section)): Path<(String, String)>,
) -> Result<Json<SectionContent>, ContentError> {
    let lang: Language = lang
        .parse()
        .map_err(|e: content::UnknownLanguage| ContentError::BadLanguage(e.to_string()))?;
    let section: Section = section
        .parse()
        .map_err(|e: content::UnknownSection| ContentError::SectionNotFound(e.to_string()))?;

    Ok(Json(content::section(lang, section)))
}

/// GET /api/charts - Daily trend and district distribution
async fn get_charts() -> Json<ChartData> {
    Json(ChartData::literal())
}

/// GET /api/map - Map centre, hotspot markers and containment zones
async fn get_map() -> Json<MapData> {
    Json(MapData::literal())
}

/// Content error types
#[derive(Debug)]
enum ContentError {
    BadLanguage(String),
    SectionNotFound(String),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ContentError::BadLanguage(msg) => (StatusCode::BAD_REQUEST, msg),
            ContentError::SectionNotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
