//! Match configuration with documented tunables
//!
//! All balance knobs are collected here with explanations of their purpose
//! and how they interact with each other. The block-risk carryover and
//! counter multipliers were tuned inconsistently across early builds; they
//! now live in the profile so a single formula set serves every difficulty.

use serde::{Deserialize, Serialize};

/// Difficulty profile for one match
///
/// Selected before a match starts and immutable for its duration.
/// These values have been tuned so a Normal match lasts roughly 5-8 turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyProfile {
    // === HEALTH POOLS ===
    /// Player starting (and maximum) mental HP
    pub player_max_hp: u32,

    /// Opponent starting (and maximum) mental HP
    pub opponent_max_hp: u32,

    // === DAMAGE ===
    /// Multiplier on the damage rating of the player's chosen reply
    ///
    /// Applied before flooring, so 1.25 turns a 10-damage reply into 12.
    pub player_damage_multiplier: f32,

    /// Multiplier on everything the opponent inflicts
    ///
    /// Stacks with `counter_damage_multiplier` for counter-attacks.
    pub opponent_damage_multiplier: f32,

    // === BLOCK RISK ===
    /// Attenuates the block probability of the player's replies
    ///
    /// At 0.7 a reply rated 0.30 block risk only contributes 0.21 to the
    /// draw. 1.0 means replies carry their full rating.
    pub player_block_risk_multiplier: f32,

    /// Fraction of each turn's block risk added to the cumulative pool
    ///
    /// The cumulative pool raises the block probability of every later
    /// turn. At 1.0 a few strong replies snowball into a near-certain
    /// block; 0.3 keeps long matches winnable while still punishing
    /// repeated provocation.
    pub block_risk_carryover: f32,

    // === COUNTER-ATTACKS ===
    /// Probability that a surviving opponent fires back after a hit
    pub counter_attack_chance: f32,

    /// Multiplier on counter-attack damage
    ///
    /// Stacks with `opponent_damage_multiplier`. Lower on easier
    /// difficulties so the player's own gauge drains slower.
    pub counter_damage_multiplier: f32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::normal()
    }
}

impl DifficultyProfile {
    /// Baseline difficulty: symmetric 100 HP pools, no favoritism
    pub fn normal() -> Self {
        Self {
            player_max_hp: 100,
            opponent_max_hp: 100,
            player_damage_multiplier: 1.0,
            opponent_damage_multiplier: 1.0,
            player_block_risk_multiplier: 1.0,
            block_risk_carryover: 0.3,
            counter_attack_chance: 0.4,
            counter_damage_multiplier: 1.0,
        }
    }

    /// Favorable difficulty: more player HP, softer opponent, gentler risk
    pub fn easy() -> Self {
        Self {
            player_max_hp: 130,
            opponent_max_hp: 80,
            player_damage_multiplier: 1.25,
            opponent_damage_multiplier: 0.75,
            player_block_risk_multiplier: 0.7,
            block_risk_carryover: 0.3,
            counter_attack_chance: 0.25,
            counter_damage_multiplier: 0.75,
        }
    }

    /// Look up a built-in profile by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::normal()),
            "easy" => Some(Self::easy()),
            _ => None,
        }
    }

    /// Parse a profile from TOML, falling back to Normal for omitted keys
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let profile: DifficultyProfile = toml::from_str(contents)
            .map_err(|e| format!("Failed to parse difficulty profile TOML: {}", e))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.player_max_hp == 0 || self.opponent_max_hp == 0 {
            return Err("HP pools must be positive".into());
        }

        if self.player_damage_multiplier < 0.0
            || self.opponent_damage_multiplier < 0.0
            || self.counter_damage_multiplier < 0.0
        {
            return Err("Damage multipliers must not be negative".into());
        }

        if !(0.0..=1.0).contains(&self.counter_attack_chance) {
            return Err(format!(
                "counter_attack_chance ({}) must be within [0, 1]",
                self.counter_attack_chance
            ));
        }

        if self.player_block_risk_multiplier < 0.0 {
            return Err("player_block_risk_multiplier must not be negative".into());
        }

        if !(0.0..=1.0).contains(&self.block_risk_carryover) {
            return Err(format!(
                "block_risk_carryover ({}) must be within [0, 1]",
                self.block_risk_carryover
            ));
        }

        Ok(())
    }
}
