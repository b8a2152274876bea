use thiserror::Error;

/// Errors that can occur while configuring or running Pig simulations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("random source never produced face(s) {missing:?} of a {faces}-sided die")]
    BiasedRandomSource { faces: u32, missing: Vec<u32> },
    #[error("game exceeded the turn limit of {0}")]
    TurnLimitExceeded(usize),
    #[error("unrecognized strategy spec: {0}")]
    UnknownStrategy(String),
}
