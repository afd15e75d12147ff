use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The reply does not have the expected JSON shape. Nothing is decoded.
    Structural,
    /// Instructions and geometry of a route cannot be reconciled.
    Alignment,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Couldn't parse json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Reply is not a json object")]
    NotAnObject,

    #[error("Route {route} has no legs")]
    NoLegs { route: usize },

    #[error("Leg {leg} of route {route} has no points")]
    EmptyLeg { route: usize, leg: usize },

    #[error("Not enough instructions")]
    NotEnoughInstructions,

    #[error("First instruction doesn't match the route departure")]
    DepartureMismatch,

    #[error("Instructions out of geographical order ({previous} > {current:?})")]
    OutOfOrder {
        previous: usize,
        current: Option<usize>,
    },

    #[error("Instruction {instruction} switches past the last leg")]
    LegOverflow { instruction: usize },

    #[error("Route has {legs} legs but instructions only cover {covered}")]
    UncoveredLegs { legs: usize, covered: usize },
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidJson(_)
            | DecodeError::NotAnObject
            | DecodeError::NoLegs { .. }
            | DecodeError::EmptyLeg { .. } => DecodeErrorKind::Structural,
            DecodeError::NotEnoughInstructions
            | DecodeError::DepartureMismatch
            | DecodeError::OutOfOrder { .. }
            | DecodeError::LegOverflow { .. }
            | DecodeError::UncoveredLegs { .. } => DecodeErrorKind::Alignment,
        }
    }
}
