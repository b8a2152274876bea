//! Pig dice game simulator for comparing "stay at k" strategies.

pub mod action;
pub mod die;
pub mod error;
pub mod game;
pub mod report;
pub mod rules;
pub mod score;
pub mod strategy;
pub mod tournament;

pub use crate::action::{Side, Transition, TurnAction, roll, stay};
pub use crate::die::Die;
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig, Outcome};
pub use crate::report::ratio_string;
pub use crate::score::Score;
pub use crate::strategy::{StayAtK, Strategy, create_strategy_from_spec, stay_at_k_family};
pub use crate::tournament::{RoundRobin, Standings};
