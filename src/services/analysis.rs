use crate::error::ApiError;
use axum::body::Bytes;
use shade_match::{Analysis, SampleRequest, ShadeAnalyzer, ShadePalette};
use std::sync::Arc;

/// Runs photo analysis off the async runtime
pub struct AnalysisService {
    analyzer: Arc<ShadeAnalyzer>,
    max_upload_bytes: usize,
}

impl AnalysisService {
    pub fn new(analyzer: ShadeAnalyzer, max_upload_bytes: usize) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            max_upload_bytes,
        }
    }

    /// Largest image the HTTP layer accepts
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn palette(&self) -> &ShadePalette {
        self.analyzer.palette()
    }

    /// Sample and match an uploaded image
    ///
    /// Decoding and resampling are CPU-bound, so the work runs in
    /// spawn_blocking.
    pub async fn analyze(&self, image: Bytes, request: SampleRequest) -> Result<Analysis, ApiError> {
        let analyzer = self.analyzer.clone();
        let size = image.len();

        let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(&image, &request))
            .await
            .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))??;

        tracing::info!(
            bytes = size,
            source = analysis.source.as_str(),
            sampled = %analysis.result.sampled_color,
            shade = %analysis.result.matched_shade.id,
            distance = analysis.result.distance,
            "Analyzed image"
        );

        Ok(analysis)
    }
}
