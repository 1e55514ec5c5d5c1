use thiserror::Error;

/// Configuration errors detected while validating a funnel or laying it out.
///
/// These are fatal: the engine refuses to produce geometry rather than
/// silently drawing something wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Funnel has no steps; at least one step is required")]
    EmptyFunnel,

    #[error(
        "Bucket id '{id}' is declared more than once (in step {first_step} and step {second_step})"
    )]
    DuplicateBucketId {
        id: String,
        first_step: usize,
        second_step: usize,
    },

    #[error("Flow into bucket '{target}' references unknown source bucket '{source_id}'")]
    UnknownFlowSource { source_id: String, target: String },

    #[error(
        "Flow into bucket '{target}' comes from bucket '{source_id}', which is not in an earlier step"
    )]
    BackwardFlow { source_id: String, target: String },

    #[error("{item} has an invalid magnitude: {value}")]
    InvalidMagnitude { item: String, value: f64 },

    #[error("Invalid layout options: {0}")]
    InvalidOptions(String),
}

/// Errors raised while loading a funnel definition or layout options.
#[derive(Error, Debug, Clone)]
pub enum SpecError {
    #[error("Failed to parse JSON: {0}")]
    Json(String),

    #[error("Could not read file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors raised while persisting or restoring a computed layout.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    #[error("File error on '{path}': {message}")]
    Io { path: String, message: String },
}
