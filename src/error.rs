use thiserror::Error;

/// Domain-specific errors for the background customizer.
///
/// Only input-contract violations surface as errors. Validation rejections
/// silently degrade to the previously stored value, and running outside the
/// customization preview is a guarded no-op rather than a failure.
#[derive(Error, Debug)]
pub enum CustomizeError {
    #[error("section descriptor is missing an id (name: {name:?})")]
    MissingSectionId { name: String },

    #[error("section descriptor {id:?} is missing a display name")]
    MissingSectionName { id: String },

    #[error("base id {base:?} sanitizes to an empty identifier")]
    EmptyBaseId { base: String },

    #[error("section id {id:?} sanitizes to an empty identifier")]
    EmptySectionId { id: String },
}
