use thiserror::Error;

/// Errors surfaced at the host boundary. The detection and mapping pipeline
/// itself is total; only I/O, parsing and live-document mutation can fail.
#[derive(Debug, Error)]
pub enum AutofillError {
    /// Page snapshot or profile file could not be read
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Report or trace output could not be written
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Page snapshot JSON was malformed
    #[error("snapshot parse error ({context}): {source}")]
    SnapshotParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Profile YAML/JSON was malformed
    #[error("profile parse error ({context}): {message}")]
    ProfileParse { context: String, message: String },

    /// Summary serialization failed (JSON output mode)
    #[error("serialize error ({context}): {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A selector string could not be parsed
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// Target node was removed from the document between detection and fill
    #[error("element no longer present in document")]
    ElementMissing,
}
