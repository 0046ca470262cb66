use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Unable to handle {0}")]
    UnsupportedTag(String),

    #[error("Unable to handle {0} without a recognized wrapper class")]
    UnsupportedStructure(String),

    #[error("{dialect} has no mapping for tag '{tag}'")]
    UnmappedTag { dialect: &'static str, tag: String },

    #[error("{dialect} has no mapping for heading level {level}")]
    UnmappedHeadingLevel { dialect: &'static str, level: u8 },

    #[error("Document has no canonical URL (expected link[rel=canonical])")]
    MissingCanonicalUrl,

    #[error("Empty content: document has no .content container. Cannot process")]
    EmptyContent,

    #[error("Unknown renderer '{0}'")]
    UnknownRenderer(String),
}

impl ExportError {
    pub(crate) fn unsupported_tag(tag: &str) -> Self {
        ExportError::UnsupportedTag(tag.to_uppercase())
    }

    pub(crate) fn unsupported_structure(tag: &str) -> Self {
        ExportError::UnsupportedStructure(tag.to_uppercase())
    }
}
