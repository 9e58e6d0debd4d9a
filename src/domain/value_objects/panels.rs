use serde::{Deserialize, Serialize};

/// Record staged for deletion, awaiting the user's explicit confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingDelete {
    pub id: i64,
    pub name: String,
}

impl PendingDelete {
    /// The confirmation prompt shown before anything leaves the client.
    pub fn prompt(&self, kind: &str) -> String {
        format!("Delete {} \"{}\"?", kind, self.name)
    }
}
