use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use shade_match::{Analysis, PickPoint, SampleRequest};
use std::sync::Arc;
use utoipa::ToSchema;

use super::shades::ShadeResponse;
use crate::error::ApiError;
use crate::services::AnalysisService;

/// Multipart form accepted by /api/analyze (documentation only)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct AnalyzeForm {
    /// Photo of the hair (PNG, JPEG, GIF, WebP, BMP, TIFF)
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
    /// Exact color as #RRGGBB; skips image sampling when valid
    hex_override: Option<String>,
    /// Column of a single pixel to sample (requires pickY)
    pick_x: Option<u32>,
    /// Row of a single pixel to sample (requires pickX)
    pick_y: Option<u32>,
}

/// Result of analyzing one photo
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Color derived from the upload, as #RRGGBB
    #[schema(example = "#C9694A")]
    pub sampled_color: String,
    /// Closest shade
    pub matched_shade: ShadeResponse,
    /// Distance from the sampled color to the shade color
    pub distance: f64,
    /// "euclidean" or "ciede2000"
    pub metric: String,
    /// "override", "point" or "average"
    pub source: String,
    /// A hexOverride that was ignored because it was malformed
    pub rejected_override: Option<String>,
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            sampled_color: analysis.result.sampled_color.to_hex(),
            matched_shade: ShadeResponse::from(&analysis.result.matched_shade),
            distance: analysis.result.distance,
            metric: analysis.result.metric.as_str().to_string(),
            source: analysis.source.as_str().to_string(),
            rejected_override: analysis.rejected_override,
        }
    }
}

/// Match a photo to a shade
///
/// Samples the uploaded image (or uses `hexOverride` / `pickX`+`pickY`) and
/// returns the closest configured shade.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body(content = AnalyzeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Shade matched", body = AnalyzeResponse),
        (status = 400, description = "Missing image field, malformed form, or bad pick point"),
        (status = 413, description = "Image larger than the configured upload limit"),
        (status = 422, description = "Image could not be decoded or pick point is outside it"),
        (status = 500, description = "No shades configured"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(analysis): State<Arc<AnalysisService>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let (image, request) = read_form(multipart?, analysis.max_upload_bytes()).await?;
    let result = analysis.analyze(image, request).await?;
    Ok(Json(result.into()))
}

/// Collect the form fields; unknown fields are ignored
async fn read_form(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<(Bytes, SampleRequest), ApiError> {
    let mut image = None;
    let mut hex_override = None;
    let mut pick_x = None;
    let mut pick_y = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => image = Some(field.bytes().await?),
            Some("hexOverride") => hex_override = Some(field.text().await?),
            Some("pickX") => pick_x = Some(field.text().await?),
            Some("pickY") => pick_y = Some(field.text().await?),
            _ => {}
        }
    }

    let image = image.ok_or(ApiError::MissingField("image"))?;
    if image.len() > max_upload_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "image is {} bytes, limit is {max_upload_bytes}",
            image.len()
        )));
    }

    let request = SampleRequest {
        hex_override: hex_override.filter(|s| !s.trim().is_empty()),
        pick: parse_pick(pick_x.as_deref(), pick_y.as_deref())?,
    };

    Ok((image, request))
}

/// Both coordinates or neither; blank values count as absent
pub fn parse_pick(x: Option<&str>, y: Option<&str>) -> Result<Option<PickPoint>, ApiError> {
    let x = x.map(str::trim).filter(|s| !s.is_empty());
    let y = y.map(str::trim).filter(|s| !s.is_empty());

    match (x, y) {
        (None, None) => Ok(None),
        (Some(x), Some(y)) => {
            let coord = |name: &str, value: &str| {
                value.parse::<u32>().map_err(|_| {
                    ApiError::BadRequest(format!(
                        "{name} must be a non-negative integer, got {value:?}"
                    ))
                })
            };
            Ok(Some(PickPoint {
                x: coord("pickX", x)?,
                y: coord("pickY", y)?,
            }))
        }
        _ => Err(ApiError::BadRequest(
            "pickX and pickY must be given together".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pick_absent() {
        assert_eq!(parse_pick(None, None).unwrap(), None);
        assert_eq!(parse_pick(Some(""), Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_pick_both() {
        assert_eq!(
            parse_pick(Some("12"), Some(" 7 ")).unwrap(),
            Some(PickPoint { x: 12, y: 7 })
        );
    }

    #[test]
    fn test_parse_pick_requires_both() {
        assert!(matches!(
            parse_pick(Some("1"), None),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            parse_pick(None, Some("1")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_pick_rejects_garbage() {
        assert!(parse_pick(Some("-1"), Some("0")).is_err());
        assert!(parse_pick(Some("1.5"), Some("0")).is_err());
        assert!(parse_pick(Some("x"), Some("0")).is_err());
    }
}
