use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::confirmation::GenerationPayload;
use super::domain::FormRecord;
use crate::config::GeneratorConfig;

/// Shown whenever the generator gives no usable reason of its own.
pub const FALLBACK_FAILURE_MESSAGE: &str = "PDF生成に失敗しました";

const FALLBACK_APPLICANT_NAME: &str = "申請者";

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generator rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("generator unreachable: {0}")]
    Transport(String),
    #[error("generator returned an unreadable body: {0}")]
    UnexpectedPayload(String),
}

impl GenerationError {
    /// Message suitable for the user-facing error banner.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
            Self::Transport(_) | Self::UnexpectedPayload(_) => FALLBACK_FAILURE_MESSAGE,
        }
    }
}

/// Raw document bytes as returned by a generator.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub media_type: mime::Mime,
}

/// A rendered document ready to hand to the user.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub file_name: String,
    pub media_type: mime::Mime,
    pub bytes: Vec<u8>,
    pub generated_at: DateTime<Local>,
}

/// Service that turns a [`GenerationPayload`] into the filled form bundle.
#[async_trait]
pub trait DocumentGenerator: Debug + Send + Sync {
    async fn render(&self, payload: &GenerationPayload) -> Result<RenderedDocument, GenerationError>;
}

/// `古物商許可申請書一式_{姓}{名}.pdf`, using a generic name when both are blank.
pub fn download_file_name(record: &FormRecord) -> String {
    let full_name = format!(
        "{}{}",
        record.applicant.last_name_kanji, record.applicant.first_name_kanji
    );
    let full_name = if full_name.is_empty() {
        FALLBACK_APPLICANT_NAME
    } else {
        full_name.as_str()
    };
    format!("古物商許可申請書一式_{full_name}.pdf")
}

/// Sends the record to `generator` and names the result for download.
pub async fn generate_document<G>(
    generator: &G,
    record: &FormRecord,
) -> Result<GeneratedDocument, GenerationError>
where
    G: DocumentGenerator + ?Sized,
{
    let payload = GenerationPayload::from(record);
    let rendered = generator.render(&payload).await?;
    let file_name = download_file_name(record);
    info!(file_name = %file_name, bytes = rendered.bytes.len(), "document generated");

    Ok(GeneratedDocument {
        file_name,
        media_type: rendered.media_type,
        bytes: rendered.bytes,
        generated_at: Local::now(),
    })
}

#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

fn failure_message(body: &[u8]) -> String {
    serde_json::from_slice::<FailureBody>(body)
        .ok()
        .and_then(|parsed| match parsed.detail {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string())
}

/// Generator reached over HTTP at `{base}/api/generate-pdf`.
#[derive(Debug, Clone)]
pub struct HttpDocumentGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when the generator answers its health probe with a success status.
    pub async fn health(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(error = %err, "generator health probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl DocumentGenerator for HttpDocumentGenerator {
    async fn render(&self, payload: &GenerationPayload) -> Result<RenderedDocument, GenerationError> {
        let url = format!("{}/api/generate-pdf", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<mime::Mime>().ok())
            .unwrap_or(mime::APPLICATION_PDF);

        let body = response
            .bytes()
            .await
            .map_err(|err| GenerationError::UnexpectedPayload(err.to_string()))?;

        if !status.is_success() {
            let message = failure_message(&body);
            warn!(status = status.as_u16(), %message, "generator rejected payload");
            return Err(GenerationError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(RenderedDocument {
            bytes: body.to_vec(),
            media_type,
        })
    }
}
