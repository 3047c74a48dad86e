use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A registered app user. `registered_at` anchors the free-trial window and
/// never changes after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub registered_at: jiff::Timestamp,
}

impl UserAccount {
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        now: jiff::Timestamp,
    ) -> Result<Self, CoreError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        if name.is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        if email.is_empty() {
            return Err(CoreError::MissingField("email".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            registered_at: now,
        })
    }
}
