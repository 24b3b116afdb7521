use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::storage::Record;
use crate::shared::constants::KEY_MESSAGES;

/// A contact form submission. Stored only; no endpoint reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

impl Record for ContactMessage {
    const COLLECTION: &'static str = KEY_MESSAGES;

    fn record_key(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}
