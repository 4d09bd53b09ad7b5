//! Battle tuning constants - all fixed values in one place
//!
//! Per-match knobs live in `DifficultyProfile`; these are the parts of the
//! formula set that stay the same across difficulties.

// Counter-attack formula terms
pub const COUNTER_BASE_DAMAGE: f32 = 4.0;
pub const COUNTER_DESPERATION_SCALE: f32 = 6.0;
pub const COUNTER_REACTION_DIVISOR: f32 = 4.0;
pub const COUNTER_REACTION_CAP: f32 = 8.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_terms_bounded() {
        // Worst case before difficulty multipliers: base + full desperation + capped reaction
        let ceiling = COUNTER_BASE_DAMAGE + COUNTER_DESPERATION_SCALE + COUNTER_REACTION_CAP;
        assert!(ceiling <= 20.0);
        assert!(COUNTER_REACTION_DIVISOR > 0.0);
    }
}
