//! Reply catalog
//!
//! Candidate replies ship as embedded JSON, one file per language, in the
//! same shape the word lists were originally curated in (`word`, `damage`,
//! `block_risk`). Stronger replies carry a higher block risk.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{BrawlError, Result};
use crate::narrative::Language;

const ACTIONS_JA: &str = include_str!("../../data/actions_ja.json");
const ACTIONS_RU: &str = include_str!("../../data/actions_ru.json");

/// How many reply options are offered per turn
pub const OPTIONS_PER_TURN: usize = 3;

/// A selectable reply with its intrinsic ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "word")]
    pub text: String,
    #[serde(rename = "damage")]
    pub base_damage: u32,
    #[serde(rename = "block_risk")]
    pub base_block_risk: f32,
}

impl Action {
    /// Reject ratings outside their documented ranges
    ///
    /// Invalid actions are a collaborator bug and surface immediately;
    /// clamping is reserved for HP bounds, never action validity.
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(BrawlError::InvalidAction("empty reply text".into()));
        }

        if !self.base_block_risk.is_finite() || !(0.0..=1.0).contains(&self.base_block_risk) {
            return Err(BrawlError::InvalidAction(format!(
                "block risk {} outside [0, 1] for {:?}",
                self.base_block_risk, self.text
            )));
        }

        Ok(())
    }
}

/// The full per-language reply pool
#[derive(Debug, Clone)]
pub struct ActionCatalog {
    ja: Vec<Action>,
    ru: Vec<Action>,
}

impl ActionCatalog {
    /// Load the embedded word lists, validating every entry
    pub fn load_embedded() -> Result<Self> {
        Self::from_json(ACTIONS_JA, ACTIONS_RU)
    }

    fn from_json(ja: &str, ru: &str) -> Result<Self> {
        let catalog = Self {
            ja: serde_json::from_str(ja)?,
            ru: serde_json::from_str(ru)?,
        };

        for language in [Language::Ja, Language::Ru] {
            let pool = catalog.actions(language);
            if pool.len() < OPTIONS_PER_TURN {
                return Err(BrawlError::DataError(format!(
                    "Catalog for {:?} has only {} entries, need at least {}",
                    language,
                    pool.len(),
                    OPTIONS_PER_TURN
                )));
            }
            for action in pool {
                action.validate()?;
            }
        }

        Ok(catalog)
    }

    pub fn actions(&self, language: Language) -> &[Action] {
        match language {
            Language::Ja => &self.ja,
            Language::Ru => &self.ru,
        }
    }

    /// Sample `count` distinct replies uniformly, order irrelevant
    pub fn pick_actions<R: Rng>(
        &self,
        language: Language,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Action>> {
        let pool = self.actions(language);
        if pool.len() < count {
            return Err(BrawlError::DataError(format!(
                "Cannot pick {} replies from a pool of {}",
                count,
                pool.len()
            )));
        }

        Ok(pool.choose_multiple(rng, count).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = ActionCatalog::load_embedded().expect("Embedded catalog should load");
        assert!(catalog.actions(Language::Ja).len() >= OPTIONS_PER_TURN);
        assert!(catalog.actions(Language::Ru).len() >= OPTIONS_PER_TURN);
    }

    #[test]
    fn test_pick_actions_distinct() {
        let catalog = ActionCatalog::load_embedded().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let picked = catalog
            .pick_actions(Language::Ja, OPTIONS_PER_TURN, &mut rng)
            .unwrap();
        assert_eq!(picked.len(), OPTIONS_PER_TURN);

        // Sampling is without replacement
        for (i, a) in picked.iter().enumerate() {
            for b in &picked[i + 1..] {
                assert_ne!(a.text, b.text);
            }
        }
    }

    #[test]
    fn test_pick_more_than_pool_fails() {
        let catalog = ActionCatalog::load_embedded().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pool_size = catalog.actions(Language::Ja).len();

        assert!(catalog
            .pick_actions(Language::Ja, pool_size + 1, &mut rng)
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_risk() {
        let action = Action {
            text: "oi".into(),
            base_damage: 10,
            base_block_risk: 1.5,
        };
        assert!(action.validate().is_err());

        let action = Action {
            text: "oi".into(),
            base_damage: 10,
            base_block_risk: f32::NAN,
        };
        assert!(action.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_text() {
        let action = Action {
            text: String::new(),
            base_damage: 10,
            base_block_risk: 0.1,
        };
        assert!(action.validate().is_err());
    }

    #[test]
    fn test_stronger_replies_carry_more_risk() {
        let catalog = ActionCatalog::load_embedded().unwrap();
        for language in [Language::Ja, Language::Ru] {
            let pool = catalog.actions(language);
            let weakest = pool.iter().min_by_key(|a| a.base_damage).unwrap();
            let strongest = pool.iter().max_by_key(|a| a.base_damage).unwrap();
            assert!(strongest.base_block_risk > weakest.base_block_risk);
        }
    }
}
