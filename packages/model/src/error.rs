use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Invalid content for {section_type} section: {message}")]
    InvalidContent {
        section_type: String,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    pub fn invalid_content(section_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            section_type: section_type.into(),
            message: message.into(),
        }
    }
}
