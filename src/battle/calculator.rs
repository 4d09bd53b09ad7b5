//! Damage and block-risk arithmetic
//!
//! Pure functions from a chosen reply plus the active difficulty profile to
//! the numbers the resolver needs. No sampling happens here; callers combine
//! the risk with the cumulative pool before drawing.

use crate::battle::constants::{
    COUNTER_BASE_DAMAGE, COUNTER_DESPERATION_SCALE, COUNTER_REACTION_CAP,
    COUNTER_REACTION_DIVISOR,
};
use crate::catalog::Action;
use crate::core::config::DifficultyProfile;

/// Damage the player's reply inflicts, floored to an integer
pub fn effective_damage(action: &Action, profile: &DifficultyProfile) -> u32 {
    let scaled = action.base_damage as f32 * profile.player_damage_multiplier;
    scaled.max(0.0).floor() as u32
}

/// Block probability contributed by this reply alone
pub fn effective_block_risk(action: &Action, profile: &DifficultyProfile) -> f32 {
    (action.base_block_risk * profile.player_block_risk_multiplier).clamp(0.0, 1.0)
}

/// Counter-attack damage from a surviving opponent
///
/// Desperation rises as the opponent's HP fraction falls, and the opponent
/// reacts harder to a big hit. Both terms are bounded, so a single counter
/// never exceeds a fixed ceiling times the difficulty multipliers.
pub fn counter_damage(
    opponent_hp: u32,
    opponent_max_hp: u32,
    incoming_damage: u32,
    profile: &DifficultyProfile,
) -> u32 {
    if opponent_max_hp == 0 {
        return 0;
    }

    let hp_fraction = opponent_hp as f32 / opponent_max_hp as f32;
    let desperation = (1.0 - hp_fraction).clamp(0.0, 1.0);
    let reaction = (incoming_damage as f32 / COUNTER_REACTION_DIVISOR).min(COUNTER_REACTION_CAP);

    let raw = COUNTER_BASE_DAMAGE + desperation * COUNTER_DESPERATION_SCALE + reaction;
    let scaled = raw * profile.opponent_damage_multiplier * profile.counter_damage_multiplier;
    scaled.max(0.0).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(damage: u32, risk: f32) -> Action {
        Action {
            text: "test reply".into(),
            base_damage: damage,
            base_block_risk: risk,
        }
    }

    #[test]
    fn test_damage_floors_after_multiplier() {
        let mut profile = DifficultyProfile::normal();
        profile.player_damage_multiplier = 1.25;

        // 10 * 1.25 = 12.5 floors to 12
        assert_eq!(effective_damage(&action(10, 0.0), &profile), 12);
    }

    #[test]
    fn test_damage_identity_on_normal() {
        let profile = DifficultyProfile::normal();
        assert_eq!(effective_damage(&action(20, 0.0), &profile), 20);
    }

    #[test]
    fn test_block_risk_attenuated() {
        let mut profile = DifficultyProfile::normal();
        profile.player_block_risk_multiplier = 0.7;

        let risk = effective_block_risk(&action(10, 0.3), &profile);
        assert!((risk - 0.21).abs() < 1e-6);
    }

    #[test]
    fn test_block_risk_clamped_to_one() {
        let mut profile = DifficultyProfile::normal();
        profile.player_block_risk_multiplier = 5.0;

        assert_eq!(effective_block_risk(&action(10, 0.5), &profile), 1.0);
    }

    #[test]
    fn test_counter_grows_with_desperation() {
        let profile = DifficultyProfile::normal();
        let healthy = counter_damage(90, 100, 10, &profile);
        let desperate = counter_damage(10, 100, 10, &profile);
        assert!(desperate > healthy);
    }

    #[test]
    fn test_counter_grows_with_incoming_damage() {
        let profile = DifficultyProfile::normal();
        let soft = counter_damage(50, 100, 5, &profile);
        let hard = counter_damage(50, 100, 30, &profile);
        assert!(hard > soft);
    }

    #[test]
    fn test_counter_reaction_is_capped() {
        let profile = DifficultyProfile::normal();
        // Past the cap, bigger hits stop raising the counter
        let at_cap = counter_damage(50, 100, 32, &profile);
        let beyond = counter_damage(50, 100, 320, &profile);
        assert_eq!(at_cap, beyond);
    }

    #[test]
    fn test_counter_never_exceeds_ceiling() {
        let profile = DifficultyProfile::normal();
        let worst = counter_damage(1, 100, u32::MAX, &profile);
        let ceiling =
            (COUNTER_BASE_DAMAGE + COUNTER_DESPERATION_SCALE + COUNTER_REACTION_CAP) as u32;
        assert!(worst <= ceiling);
    }

    #[test]
    fn test_counter_scaled_by_multipliers() {
        let mut profile = DifficultyProfile::normal();
        profile.counter_damage_multiplier = 0.0;
        assert_eq!(counter_damage(10, 100, 30, &profile), 0);
    }

    #[test]
    fn test_counter_zero_max_hp_is_total() {
        let profile = DifficultyProfile::normal();
        assert_eq!(counter_damage(0, 0, 10, &profile), 0);
    }
}
