use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use permit_wizard::error::AppError;
use permit_wizard::wizard::{
    sample_record, AddressCandidate, AddressResolver, FormRecord, GenerationPayload, LookupError,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) sample_enabled: bool,
}

/// Small fixed postal directory used by the CLI demo.
#[derive(Debug, Clone)]
pub(crate) struct StaticAddressDirectory {
    entries: HashMap<&'static str, (&'static str, &'static str, &'static str)>,
}

impl Default for StaticAddressDirectory {
    fn default() -> Self {
        let entries = HashMap::from([
            ("0600001", ("北海道", "札幌市中央区", "北一条西")),
            ("1000001", ("東京都", "千代田区", "千代田")),
            ("5300001", ("大阪府", "大阪市北区", "梅田")),
            ("5420081", ("大阪府", "大阪市中央区", "南船場")),
            ("5450053", ("大阪府", "大阪市阿倍野区", "松崎町")),
            ("5500002", ("大阪府", "大阪市西区", "江戸堀")),
        ]);
        Self { entries }
    }
}

#[async_trait]
impl AddressResolver for StaticAddressDirectory {
    async fn resolve(&self, postal_code: &str) -> Result<Vec<AddressCandidate>, LookupError> {
        self.entries
            .get(postal_code)
            .map(|(prefecture, city, area)| vec![AddressCandidate::new(*prefecture, *city, *area)])
            .ok_or_else(|| LookupError::NotFound(postal_code.to_string()))
    }
}

/// Reads a flat generator payload from `path`, or returns the sample record.
pub(crate) async fn load_record(path: Option<&Path>) -> Result<FormRecord, AppError> {
    let Some(path) = path else {
        return Ok(sample_record());
    };
    let raw = tokio::fs::read_to_string(path).await?;
    let payload: GenerationPayload = serde_json::from_str(&raw)?;
    Ok(FormRecord::from(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn directory_resolves_known_codes_only() {
        let directory = StaticAddressDirectory::default();
        let candidates = directory.resolve("5450053").await.expect("known code");
        assert_eq!(candidates[0].city_line(), "大阪市阿倍野区松崎町");

        assert!(matches!(
            directory.resolve("9999999").await,
            Err(LookupError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn missing_path_falls_back_to_sample() {
        let record = load_record(None).await.expect("sample loads");
        assert_eq!(record.applicant.last_name_kanji, "山田");
    }

    #[tokio::test]
    async fn record_files_use_the_flat_payload_shape() {
        let path = std::env::temp_dir().join(format!(
            "permit-wizard-record-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, r#"{"lastNameKanji":"佐藤","hasWebsite":true}"#)
            .await
            .expect("write fixture");

        let record = load_record(Some(&path)).await.expect("record loads");
        tokio::fs::remove_file(&path).await.expect("cleanup");

        assert_eq!(record.applicant.last_name_kanji, "佐藤");
        assert!(record.has_website);
        assert!(record.office_same_as_address);
    }
}
