pub mod calculator;
pub mod constants;
pub mod resolver;

pub use resolver::{Actor, GameOverReason, MatchSnapshot, MatchState, Phase, TurnOutcome, TurnRecord};
