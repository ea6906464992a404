use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::wizard::address::{AddressCandidate, AddressResolver, LookupError};
use crate::wizard::confirmation::GenerationPayload;
use crate::wizard::domain::{ApplicantKind, CorporationType, FormRecord, Prefecture};
use crate::wizard::export::{DocumentGenerator, GenerationError, RenderedDocument};
use crate::wizard::sample::sample_record;

pub(super) fn individual_record() -> FormRecord {
    sample_record()
}

pub(super) fn corporation_record() -> FormRecord {
    let mut record = sample_record();
    record.applicant_kind = ApplicantKind::Corporation;
    record.corporation_type = CorporationType::KabushikiKaisha;
    record.corporation_name = "山田商事".to_string();
    record
}

pub(super) fn blank_applicant_record() -> FormRecord {
    let mut record = FormRecord::default();
    record.applicant.address.prefecture = Prefecture::from("大阪府");
    record
}

pub(super) fn payload_json(record: &FormRecord) -> Value {
    serde_json::to_value(GenerationPayload::from(record)).expect("payload serializes")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Directory backed by a fixed map of cleaned postal codes.
#[derive(Debug, Default)]
pub(super) struct MapResolver {
    entries: HashMap<String, AddressCandidate>,
    pub(super) calls: AtomicUsize,
}

impl MapResolver {
    pub(super) fn with_osaka() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "5450053".to_string(),
            AddressCandidate::new("大阪府", "大阪市阿倍野区", "松崎町"),
        );
        entries.insert(
            "5300001".to_string(),
            AddressCandidate::new("大阪府", "大阪市北区", "梅田"),
        );
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AddressResolver for MapResolver {
    async fn resolve(&self, postal_code: &str) -> Result<Vec<AddressCandidate>, LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.entries
            .get(postal_code)
            .map(|candidate| vec![candidate.clone()])
            .ok_or_else(|| LookupError::NotFound(postal_code.to_string()))
    }
}

/// Generator that records payloads and answers with a canned outcome.
#[derive(Debug)]
pub(super) struct ScriptedGenerator {
    failure: Option<(u16, String)>,
    pub(super) received: Mutex<Vec<GenerationPayload>>,
}

impl ScriptedGenerator {
    pub(super) fn succeeding() -> Self {
        Self {
            failure: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DocumentGenerator for ScriptedGenerator {
    async fn render(
        &self,
        payload: &GenerationPayload,
    ) -> Result<RenderedDocument, GenerationError> {
        self.received
            .lock()
            .expect("payload log poisoned")
            .push(payload.clone());

        match &self.failure {
            Some((status, message)) => Err(GenerationError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(RenderedDocument {
                bytes: b"%PDF-1.7\n".to_vec(),
                media_type: mime::APPLICATION_PDF,
            }),
        }
    }
}
