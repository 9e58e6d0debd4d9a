pub mod dependent_lookup;
pub mod destination_panel;
pub mod hotel_panel;
pub mod package_details;

use thiserror::Error;

use crate::domain::value_objects::api_errors::ApiError;

pub const GENERIC_FAILURE_ALERT: &str = "Something went wrong. Please try again.";

/// Screen-level failure taxonomy: validation stops before any network call,
/// backend messages surface verbatim, transport failures surface generic text.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PanelError {
    /// Text for the user-facing alert.
    pub fn alert_text(&self) -> String {
        match self {
            PanelError::Validation(message) => message.clone(),
            PanelError::Internal(error) => match error.downcast_ref::<ApiError>() {
                Some(ApiError::Server(message)) => message.clone(),
                None => GENERIC_FAILURE_ALERT.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_messages_surface_verbatim() {
        let error = PanelError::Internal(anyhow::Error::new(ApiError::Server(
            "Destination name already exists".to_string(),
        )));
        assert_eq!(error.alert_text(), "Destination name already exists");
    }

    #[test]
    fn transport_failures_surface_generic_text() {
        let error = PanelError::Internal(anyhow::anyhow!("connection refused"));
        assert_eq!(error.alert_text(), GENERIC_FAILURE_ALERT);
    }
}
