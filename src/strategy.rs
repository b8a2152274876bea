use crate::action::TurnAction;
use crate::error::GameError;
use crate::score::Score;

/// Interface for Pig decision policies.
///
/// Strategies are immutable for the duration of a run; all randomness lives in
/// the game, not in the policy.
pub trait Strategy {
    fn choose(&self, score: &Score) -> TurnAction;

    /// Short name used in logs and reports.
    fn label(&self) -> String;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose(&self, score: &Score) -> TurnAction {
        (**self).choose(score)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn choose(&self, score: &Score) -> TurnAction {
        (**self).choose(score)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

/// Rolls until this turn holds at least `k` points, then stays.
///
/// `k = 0` stays immediately every turn. A `k` above the winning score never
/// stays and rolls until a bust or a win.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StayAtK {
    k: u32,
}

impl StayAtK {
    pub const fn new(k: u32) -> Self {
        Self { k }
    }

    /// Threshold that is never reached.
    pub const fn never_stay() -> Self {
        Self::new(u32::MAX)
    }

    pub fn threshold(&self) -> u32 {
        self.k
    }
}

impl Strategy for StayAtK {
    fn choose(&self, score: &Score) -> TurnAction {
        if score.this_turn >= self.k {
            TurnAction::Stay
        } else {
            TurnAction::Roll
        }
    }

    fn label(&self) -> String {
        if self.k == u32::MAX {
            "roll".to_string()
        } else {
            format!("stay{}", self.k)
        }
    }
}

/// One strategy per threshold in `0..=max_k`, in ascending order.
pub fn stay_at_k_family(max_k: u32) -> Vec<StayAtK> {
    (0..=max_k).map(StayAtK::new).collect()
}

/// Create a strategy from a CLI-style spec.
/// Supported specs:
/// - stay:<k> or stay<k>
/// - roll (never stays)
pub fn create_strategy_from_spec(spec: &str) -> Result<StayAtK, GameError> {
    let spec_lower = spec.trim().to_ascii_lowercase();
    if spec_lower == "roll" {
        return Ok(StayAtK::never_stay());
    }
    let threshold = spec_lower
        .strip_prefix("stay")
        .map(|rest| rest.strip_prefix(':').unwrap_or(rest).trim())
        .and_then(|value| value.parse::<u32>().ok());
    match threshold {
        Some(k) => Ok(StayAtK::new(k)),
        None => Err(GameError::UnknownStrategy(spec.to_string())),
    }
}
