use axum::{extract::State, response::Json};
use serde::Serialize;
use shade_match::ShadeEntry;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::AnalysisService;

/// One shade from the configured palette
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShadeResponse {
    /// Short identifier (e.g. "N3")
    pub id: String,
    /// Display name
    pub name: String,
    /// Reference color as #RRGGBB
    #[schema(example = "#C9694A")]
    pub color: String,
    /// Flavor text
    pub description: String,
    /// "natural" or "fashion"
    pub group: String,
}

impl From<&ShadeEntry> for ShadeResponse {
    fn from(entry: &ShadeEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            color: entry.color.to_hex(),
            description: entry.description.clone(),
            group: entry.group.as_str().to_string(),
        }
    }
}

/// Response from the /api/shades endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ShadesResponse {
    /// Shades in palette order
    pub shades: Vec<ShadeResponse>,
}

/// List the configured shades
#[utoipa::path(
    get,
    path = "/api/shades",
    responses(
        (status = 200, description = "Configured palette in order", body = ShadesResponse),
    ),
    tag = "Shades"
)]
pub async fn handle_shades(State(analysis): State<Arc<AnalysisService>>) -> Json<ShadesResponse> {
    Json(ShadesResponse {
        shades: analysis.palette().iter().map(ShadeResponse::from).collect(),
    })
}
