//! Battle resolution state machine
//!
//! One `MatchState` per playthrough, mutated only through
//! `apply_player_turn` and replaced wholesale by `reset`. The resolver is
//! synchronous and timer-free; staggered display of the counter message is
//! the caller's job, which is why `TurnOutcome` carries it separately.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::calculator::{counter_damage, effective_block_risk, effective_damage};
use crate::catalog::Action;
use crate::core::config::DifficultyProfile;
use crate::core::error::{BrawlError, Result};
use crate::narrative::{self, Language, Tier};

/// Match lifecycle. `InProgress` is the only non-terminal phase; terminal
/// phases freeze HP and the turn log until `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    PlayerWon,
    PlayerBlocked,
    PlayerDefeated,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

/// Who produced a turn-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Opponent,
}

/// One entry of the append-only turn log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub actor: Actor,
    pub text: String,
    pub damage: u32,
}

/// How the match ended, if it did this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    None,
    Won,
    Blocked,
    Defeated,
}

/// Everything the caller needs to present one resolved turn
///
/// `message` is the primary outcome; `counter_message` is kept separate so
/// the presentation layer can delay it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub damage_dealt: u32,
    pub was_blocked: bool,
    pub counter_damage: u32,
    pub game_over: GameOverReason,
    pub message: String,
    pub counter_message: Option<String>,
}

/// Read-only view of the match for rendering
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub player_hp: u32,
    pub opponent_hp: u32,
    pub cumulative_block_risk: f32,
    pub phase: Phase,
    pub last_opponent_line: String,
    pub turn_log: Vec<TurnRecord>,
}

/// The mutable core entity, owned exclusively by its holder
#[derive(Debug, Clone)]
pub struct MatchState {
    pub player_hp: u32,
    pub opponent_hp: u32,
    pub cumulative_block_risk: f32,
    pub phase: Phase,
    pub last_opponent_line: String,
    pub turn_log: Vec<TurnRecord>,
    pub language: Language,
    pub profile: DifficultyProfile,
}

impl MatchState {
    /// Start a match with HP seeded from the profile
    pub fn new(profile: DifficultyProfile, language: Language) -> Result<Self> {
        profile.validate().map_err(BrawlError::InvalidProfile)?;

        Ok(Self {
            player_hp: profile.player_max_hp,
            opponent_hp: profile.opponent_max_hp,
            cumulative_block_risk: 0.0,
            phase: Phase::InProgress,
            last_opponent_line: narrative::initial_line(language).to_string(),
            turn_log: Vec::new(),
            language,
            profile,
        })
    }

    /// Resolve one player turn. The sole mutating entry point.
    pub fn apply_player_turn<R: Rng>(&mut self, action: &Action, rng: &mut R) -> Result<TurnOutcome> {
        if self.phase.is_terminal() {
            return Err(BrawlError::MatchOver(self.phase));
        }
        action.validate()?;

        let damage = effective_damage(action, &self.profile);
        let risk = effective_block_risk(action, &self.profile);

        // Block check runs before any HP mutation; a block nullifies the
        // whole turn, it is never a partial hit.
        let draw: f32 = rng.gen();
        if draw < self.cumulative_block_risk + risk {
            self.phase = Phase::PlayerBlocked;
            let message = narrative::blocked_message(self.language).to_string();
            self.turn_log.push(TurnRecord {
                actor: Actor::Opponent,
                text: message.clone(),
                damage: 0,
            });
            tracing::info!(draw, risk, "player blocked, match lost");

            return Ok(TurnOutcome {
                damage_dealt: 0,
                was_blocked: true,
                counter_damage: 0,
                game_over: GameOverReason::Blocked,
                message,
                counter_message: None,
            });
        }

        self.opponent_hp = self.opponent_hp.saturating_sub(damage);
        self.cumulative_block_risk += risk * self.profile.block_risk_carryover;
        self.turn_log.push(TurnRecord {
            actor: Actor::Player,
            text: action.text.clone(),
            damage,
        });
        tracing::debug!(
            damage,
            opponent_hp = self.opponent_hp,
            cumulative_block_risk = self.cumulative_block_risk,
            "player reply landed"
        );

        // A defeated opponent cannot counter
        if self.opponent_hp == 0 {
            self.phase = Phase::PlayerWon;
            self.last_opponent_line = narrative::concession_line(self.language).to_string();
            tracing::info!("opponent mental broken, player wins");

            return Ok(TurnOutcome {
                damage_dealt: damage,
                was_blocked: false,
                counter_damage: 0,
                game_over: GameOverReason::Won,
                message: narrative::victory_message(self.language).to_string(),
                counter_message: None,
            });
        }

        let mut counter = 0;
        let mut counter_message = None;
        if rng.gen::<f32>() < self.profile.counter_attack_chance {
            counter = counter_damage(
                self.opponent_hp,
                self.profile.opponent_max_hp,
                damage,
                &self.profile,
            );
            self.player_hp = self.player_hp.saturating_sub(counter);
            let text = narrative::counter_message(self.language, counter);
            self.turn_log.push(TurnRecord {
                actor: Actor::Opponent,
                text: text.clone(),
                damage: counter,
            });
            tracing::debug!(counter, player_hp = self.player_hp, "counter-attack landed");
            counter_message = Some(text);
        }

        if self.player_hp == 0 {
            self.phase = Phase::PlayerDefeated;
            tracing::info!("player mental broken, match lost");

            return Ok(TurnOutcome {
                damage_dealt: damage,
                was_blocked: false,
                counter_damage: counter,
                game_over: GameOverReason::Defeated,
                message: narrative::defeat_message(self.language).to_string(),
                counter_message,
            });
        }

        let tier = Tier::for_hp(self.opponent_hp, self.profile.opponent_max_hp);
        self.last_opponent_line = narrative::reaction(tier, self.language, rng).to_string();
        self.turn_log.push(TurnRecord {
            actor: Actor::Opponent,
            text: self.last_opponent_line.clone(),
            damage: 0,
        });

        Ok(TurnOutcome {
            damage_dealt: damage,
            was_blocked: false,
            counter_damage: counter,
            game_over: GameOverReason::None,
            message: narrative::damage_message(self.language, damage),
            counter_message,
        })
    }

    /// Wholesale replacement: new HP pools, cleared log, `InProgress` phase
    pub fn reset(&mut self, profile: DifficultyProfile) -> Result<()> {
        *self = MatchState::new(profile, self.language)?;
        Ok(())
    }

    /// Cosmetic only; refreshes the greeting if the match is still live
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if self.phase == Phase::InProgress && self.turn_log.is_empty() {
            self.last_opponent_line = narrative::initial_line(language).to_string();
        }
    }

    /// Full view for rendering
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            player_hp: self.player_hp,
            opponent_hp: self.opponent_hp,
            cumulative_block_risk: self.cumulative_block_risk,
            phase: self.phase,
            last_opponent_line: self.last_opponent_line.clone(),
            turn_log: self.turn_log.clone(),
        }
    }
}
