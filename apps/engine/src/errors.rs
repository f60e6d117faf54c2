use thiserror::Error;

/// Engine-level error type surfaced to collaborators.
///
/// Provider network and parse failures never reach this enum — they are
/// absorbed inside the provider module and converted into heuristic output.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}
