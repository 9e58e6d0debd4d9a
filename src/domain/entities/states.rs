use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::record_statuses::RecordStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateEntity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: RecordStatus,
}
