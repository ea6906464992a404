use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::{FormRecord, Prefecture};
use super::fields::AddressRole;

/// One match returned by a postal-code directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCandidate {
    pub prefecture_name: String,
    pub city_name: String,
    pub area_name: String,
}

impl AddressCandidate {
    pub fn new(
        prefecture_name: impl Into<String>,
        city_name: impl Into<String>,
        area_name: impl Into<String>,
    ) -> Self {
        Self {
            prefecture_name: prefecture_name.into(),
            city_name: city_name.into(),
            area_name: area_name.into(),
        }
    }

    /// City and area joined without a separator, as written on the form.
    pub fn city_line(&self) -> String {
        format!("{}{}", self.city_name, self.area_name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no address registered for postal code {0}")]
    NotFound(String),
    #[error("address lookup unavailable: {0}")]
    Unavailable(String),
}

/// Postal-code to address directory consumed by the wizard.
///
/// Implementations receive the cleaned 7-digit code produced by [`lookup_key`].
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, postal_code: &str) -> Result<Vec<AddressCandidate>, LookupError>;
}

/// Strips hyphens and returns the code when exactly seven ASCII digits remain.
pub fn lookup_key(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|ch| *ch != '-').collect();
    (cleaned.len() == 7 && cleaned.bytes().all(|byte| byte.is_ascii_digit())).then_some(cleaned)
}

/// Handle for one in-flight lookup, compared against the newest edit on the same role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub role: AddressRole,
    pub postal_code: String,
    pub generation: u64,
}

/// Fills prefecture and city from the first candidate, overwriting prior values.
///
/// Returns `None` when there is nothing to apply.
pub fn apply_first_candidate(
    record: &FormRecord,
    role: AddressRole,
    candidates: &[AddressCandidate],
) -> Option<FormRecord> {
    let candidate = candidates.first()?;
    let mut next = record.clone();
    let address = next.address_mut(role);
    address.prefecture = Prefecture::new(candidate.prefecture_name.clone());
    address.city = candidate.city_line();
    Some(next)
}
