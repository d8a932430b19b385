//! Generation client: one round trip per call, one normalized failure.

use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    backend::{GeminiBackend, GenerateCall, GenerationBackend, JSON_MIME_TYPE},
    composer::compose,
    config::GeminiConfig,
    error::{CurateError, GenerationFailed, Result},
    types::{CurateOptions, PlaylistResponse},
};

/// Entry point the rest of the application depends on.
///
/// # Example
///
/// ```ignore
/// use curateflow_core::{CurateClient, CurateOptions, GeminiConfig};
///
/// let client = CurateClient::new(GeminiConfig::from_env())?;
/// let playlist = client
///     .generate_curated_playlist("Intro to React", &CurateOptions::default())
///     .await?;
/// println!("{} ({} videos)", playlist.playlist_name, playlist.items.len());
/// ```
#[derive(Clone)]
pub struct CurateClient {
    config: GeminiConfig,
    backend: Arc<dyn GenerationBackend>,
}

impl CurateClient {
    /// Create a client talking to the Gemini REST API
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let backend = GeminiBackend::new(&config)?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    pub fn with_backend(config: GeminiConfig, backend: Arc<dyn GenerationBackend>) -> Self {
        Self { config, backend }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate a curated playlist.
    ///
    /// Every failure is logged with its cause and reported as
    /// [`GenerationFailed`]; nothing backend specific reaches the caller.
    pub async fn generate_curated_playlist(
        &self,
        prompt: &str,
        options: &CurateOptions,
    ) -> std::result::Result<PlaylistResponse, GenerationFailed> {
        self.try_generate(prompt, options).await.map_err(|e| {
            error!(error = %e, model = %self.config.model, "Playlist generation failed");
            GenerationFailed
        })
    }

    async fn try_generate(&self, prompt: &str, options: &CurateOptions) -> Result<PlaylistResponse> {
        let api_key = self.config.validate_api_key()?;
        let request = compose(prompt, options);

        debug!(
            model = %self.config.model,
            duration_minutes = options.duration_minutes(),
            depth = %options.depth(),
            vibe = %options.vibe(),
            course_mode = options.is_course_mode(),
            "Requesting curated playlist"
        );

        let text = self
            .backend
            .generate(GenerateCall {
                api_key,
                model: &self.config.model,
                response_mime_type: JSON_MIME_TYPE,
                request: &request,
            })
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or(CurateError::EmptyResponse)?;

        // Item order comes straight from the payload
        let playlist: PlaylistResponse = serde_json::from_str(&text)?;
        debug!(items = playlist.items.len(), "Playlist parsed");

        Ok(playlist)
    }
}
