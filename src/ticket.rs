use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One booked ticket, built per request and returned straight to the caller.
/// Nothing is stored anywhere.
#[derive(Clone, Debug, Serialize)]
pub struct Ticket {
    pub id: String,
    pub name: String,
    pub event: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Ticket {
    pub fn new(name: String, event: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            event,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
