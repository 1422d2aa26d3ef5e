//! Error types for the editor

use sitebuilder_model::SectionType;
use thiserror::Error;

/// Content edit failures. The draft is left unchanged when one is returned.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid list path: {0}")]
    InvalidListPath(String),

    #[error("Field '{0}' is not a list")]
    NotAList(String),

    #[error("Item {index} of '{field}' is not an object")]
    NotAnObject { field: String, index: usize },

    #[error("Edit rejected: {0}")]
    Rejected(#[from] sitebuilder_model::ModelError),

    #[error("Value could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Problems with an imported document. The current collection is kept.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid file format: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid file format: missing 'sections' array")]
    MissingSections,

    #[error("Section {index} has no '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Section {index} has unknown type '{section_type}'")]
    UnknownType { index: usize, section_type: String },

    #[error("Section {index} is invalid: {source}")]
    InvalidSection {
        index: usize,
        #[source]
        source: sitebuilder_model::ModelError,
    },

    #[error("Duplicate section id: {0}")]
    DuplicateId(String),
}

/// Durable state could not be written or cleared.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Section {id} is a {stored} section and cannot become a {given} section")]
    TypeChange {
        id: String,
        stored: SectionType,
        given: SectionType,
    },

    #[error("No section is being edited")]
    NoEditInProgress,

    #[error("Section {editing} is being edited, not {given}")]
    NotEditing { editing: String, given: String },

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Edit error: {0}")]
    Editor(#[from] EditorError),
}

pub type BuilderResult<T> = Result<T, BuilderError>;
