use thiserror::Error;

/// Everything that can go wrong while constructing, loading, or firing a net.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("name '{0}' is already used by a place or transition")]
    DuplicateName(String),
    #[error("arc endpoint '{0}' is not a known place or transition")]
    UnknownNode(String),
    #[error("marking references unknown place '{0}'")]
    UnknownPlace(String),
    // field deliberately not named `source`, thiserror reserves that name
    // for the error cause
    #[error("arc '{from}' -> '{to}' must connect a place and a transition")]
    InvalidArc { from: String, to: String },
    #[error("arc weight must be positive, got {0}")]
    InvalidWeight(u64),
    #[error("transition '{0}' is not enabled")]
    NotEnabled(String),
    #[error("parse error: {0}")]
    Parse(String),
}
