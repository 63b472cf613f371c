use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Post-processing values of a single transaction, as produced by the poller.
///
/// Only `provider_code` and `landing_route` are understood by the dispatcher.
/// Every other field is kept untouched in `extra` for whichever handler wants it.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct StatusRecord {
    pub provider_code: String,
    #[serde(default)]
    pub landing_route: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatusRecord {
    pub fn new(provider_code: impl Into<String>, landing_route: Option<&str>) -> Self {
        Self {
            provider_code: provider_code.into(),
            landing_route: landing_route.map(str::to_owned),
            extra: Map::new(),
        }
    }

    /// Adds a provider-defined field. Builder style, mostly for tests and fixtures.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_owned(), value.into());
        self
    }

    /// The landing route, treating an empty string as absent.
    pub fn landing_route(&self) -> Option<&str> {
        self.landing_route.as_deref().filter(|route| !route.is_empty())
    }

    /// Reads an auxiliary string field.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    pub fn state(&self) -> Option<TransactionState> {
        self.extra
            .get("state")
            .and_then(|state| TransactionState::deserialize(state).ok())
    }

    pub fn reference(&self) -> Option<&str> {
        self.field_str("reference")
    }
}

/// All records delivered on one poll tick.
///
/// The first record decides how the whole batch is handled; the batch is
/// assumed to come from a single provider and this is not checked.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
#[serde(transparent)]
pub struct StatusBatch(pub Vec<StatusRecord>);

impl StatusBatch {
    pub fn new(records: Vec<StatusRecord>) -> Self {
        Self(records)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<&StatusRecord> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn records(&self) -> &[StatusRecord] {
        &self.0
    }
}

impl From<Vec<StatusRecord>> for StatusBatch {
    fn from(records: Vec<StatusRecord>) -> Self {
        Self(records)
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    Draft,
    Pending,
    Authorized,
    Done,
    Cancel,
    Error,
}

impl TransactionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Authorized => "authorized",
            Self::Done => "done",
            Self::Cancel => "cancel",
            Self::Error => "error",
        }
    }

    /// Whether the customer can be sent to the landing page.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Authorized | Self::Done | Self::Error)
    }
}

/// What the generic status page shows: transaction references grouped by state.
///
/// Records without a recognised state are grouped under `None`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct StatusView {
    pub groups: BTreeMap<Option<TransactionState>, Vec<String>>,
}

impl StatusView {
    pub fn from_batch(batch: &StatusBatch) -> Self {
        let mut groups: BTreeMap<Option<TransactionState>, Vec<String>> = BTreeMap::new();
        for record in batch.records() {
            let reference = record.reference().unwrap_or("?").to_owned();
            groups.entry(record.state()).or_default().push(reference);
        }
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn references(&self, state: TransactionState) -> &[String] {
        self.groups
            .get(&Some(state))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialization_keeps_extra_fields() {
        let json = r#"{"provider_code": "urway", "landing_route": "/shop/confirm", "reference": "S0042", "amount": 10.5}"#;
        let record: StatusRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.provider_code, "urway");
        assert_eq!(record.landing_route(), Some("/shop/confirm"));
        assert_eq!(record.reference(), Some("S0042"));
        assert_eq!(record.extra.len(), 2);
    }

    #[test]
    fn test_empty_landing_route_is_absent() {
        let record = StatusRecord::new("urway", Some(""));
        assert_eq!(record.landing_route(), None);

        let json = r#"{"provider_code": "urway"}"#;
        let record: StatusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.landing_route(), None);
    }

    #[test]
    fn test_batch_is_a_plain_json_array() {
        let batch: StatusBatch = serde_json::from_str("[]").unwrap();
        assert!(batch.is_empty());

        let batch: StatusBatch =
            serde_json::from_str(r#"[{"provider_code": "demo"}, {"provider_code": "urway"}]"#)
                .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.first().unwrap().provider_code, "demo");
    }

    #[test]
    fn test_state_is_read_from_extra_fields() {
        let record = StatusRecord::new("demo", None).with_field("state", "authorized");
        assert_eq!(record.state(), Some(TransactionState::Authorized));
    }

    #[test]
    fn test_unknown_state_is_ignored() {
        let record = StatusRecord::new("demo", None).with_field("state", "refunded");
        assert_eq!(record.state(), None);

        let record = StatusRecord::new("demo", None).with_field("state", 3);
        assert_eq!(record.state(), None);
    }

    #[test]
    fn test_view_groups_references_by_state() {
        let batch = StatusBatch::new(vec![
            StatusRecord::new("demo", None)
                .with_field("state", "pending")
                .with_field("reference", "S1"),
            StatusRecord::new("demo", None)
                .with_field("state", "done")
                .with_field("reference", "S2"),
            StatusRecord::new("demo", None)
                .with_field("state", "pending")
                .with_field("reference", "S3"),
        ]);

        let view = StatusView::from_batch(&batch);
        assert_eq!(view.references(TransactionState::Pending), ["S1", "S3"]);
        assert_eq!(view.references(TransactionState::Done), ["S2"]);
        assert!(view.references(TransactionState::Error).is_empty());
    }
}
