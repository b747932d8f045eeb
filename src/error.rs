use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeetError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("invalid {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Only the person responsible can delete meeting \"{meeting}\"")]
    NotResponsible { meeting: String },

    #[error("{person} is already part of meeting \"{meeting}\"")]
    AlreadyAttending { person: String, meeting: String },

    #[error("{person} is not assigned to meeting \"{meeting}\"")]
    NotAttending { person: String, meeting: String },

    #[error("Cannot remove the person responsible for meeting \"{meeting}\"")]
    CannotRemoveResponsible { meeting: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt meeting data in {path:?}: {source}")]
    CorruptData {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MeetError {
    pub(crate) fn meeting_not_found(name: &str) -> Self {
        MeetError::NotFound {
            entity_type: "Meeting".into(),
            id: name.to_string(),
        }
    }

    /// True for policy rejections, false for persistence faults.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            MeetError::Io(_) | MeetError::CorruptData { .. } | MeetError::Json(_)
        )
    }
}

pub type MeetResult<T> = Result<T, MeetError>;
