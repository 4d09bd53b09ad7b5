//! Opponent narrative tables
//!
//! Reaction lines are bucketed into tiers by the opponent's remaining HP
//! fraction and keyed by language. The engine treats this module as an
//! opaque string source; display pacing belongs to the caller.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{BrawlError, Result};

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Ja,
    Ru,
}

impl Language {
    /// Parse a language tag, falling back to Japanese for unknown tags
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ru" => Language::Ru,
            _ => Language::Ja,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::Ru => "ru",
        }
    }
}

pub const ALL_LANGUAGES: [Language; 2] = [Language::Ja, Language::Ru];

/// Narrative bucket selected from the opponent's remaining HP fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Above 60% HP - still mocking the player
    Confident,
    /// 21-60% HP - visibly rattled
    Agitated,
    /// 20% HP or below - on the verge of breaking
    Desperate,
}

impl Tier {
    /// Bucket an HP value against its maximum
    ///
    /// Integer arithmetic so the 60% and 20% boundaries are exact.
    pub fn for_hp(hp: u32, max_hp: u32) -> Self {
        let hp = hp as u64;
        let max_hp = max_hp as u64;
        if hp * 5 > max_hp * 3 {
            Tier::Confident
        } else if hp * 5 > max_hp {
            Tier::Agitated
        } else {
            Tier::Desperate
        }
    }
}

pub const ALL_TIERS: [Tier; 3] = [Tier::Confident, Tier::Agitated, Tier::Desperate];

const CONFIDENT_JA: &[&str] = &[
    "その程度？もっと本気出せよ😏",
    "まだまだ余裕だわ🤣",
    "そんな返しで俺が怯むと思ってる？",
    "温すぎる。もう少し頑張れ💪",
];

const AGITATED_JA: &[&str] = &[
    "おい...ちょっと待てよ😠",
    "だんだんムカついてきた...",
    "調子に乗るなよ？😤",
    "そろそろ本気で怒るぞ",
];

const DESPERATE_JA: &[&str] = &[
    "やめろ！もうやめてくれ！😭",
    "くそ...負けるもんか...",
    "もう限界だ...💀",
    "参った...参ったよ...",
];

const CONFIDENT_RU: &[&str] = &[
    "И это всё? Давай серьёзнее 😏",
    "Мне даже не щекотно 🤣",
    "Думаешь, меня этим заденешь?",
    "Слабовато. Постарайся ещё 💪",
];

const AGITATED_RU: &[&str] = &[
    "Эй... погоди-ка 😠",
    "Ты начинаешь меня бесить...",
    "Не зарывайся, понял? 😤",
    "Сейчас я разозлюсь по-настоящему",
];

const DESPERATE_RU: &[&str] = &[
    "Хватит! Прекрати уже! 😭",
    "Чёрт... я не сдамся...",
    "Это предел... 💀",
    "Сдаюсь... сдаюсь...",
];

fn table(tier: Tier, language: Language) -> &'static [&'static str] {
    match (tier, language) {
        (Tier::Confident, Language::Ja) => CONFIDENT_JA,
        (Tier::Agitated, Language::Ja) => AGITATED_JA,
        (Tier::Desperate, Language::Ja) => DESPERATE_JA,
        (Tier::Confident, Language::Ru) => CONFIDENT_RU,
        (Tier::Agitated, Language::Ru) => AGITATED_RU,
        (Tier::Desperate, Language::Ru) => DESPERATE_RU,
    }
}

/// Pick a reaction line for the given tier, uniformly at random
pub fn reaction<R: Rng>(tier: Tier, language: Language, rng: &mut R) -> &'static str {
    // Tables are validated non-empty at startup
    table(tier, language).choose(rng).copied().unwrap_or("...")
}

/// Check that every tier/language pair has at least one candidate line
pub fn validate_tables() -> Result<()> {
    for tier in ALL_TIERS {
        for language in ALL_LANGUAGES {
            if table(tier, language).is_empty() {
                return Err(BrawlError::DataError(format!(
                    "Empty narrative table for {:?}/{:?}",
                    tier, language
                )));
            }
        }
    }
    Ok(())
}

/// Opening line shown before the first turn
pub fn initial_line(language: Language) -> &'static str {
    match language {
        Language::Ja => "よろしく、始めようか😎",
        Language::Ru => "Начнём, что ли? 😎",
    }
}

/// Shown when the opponent blocks the player (instant loss)
pub fn blocked_message(language: Language) -> &'static str {
    match language {
        Language::Ja => "ブロックされました！相手の勝利です😵",
        Language::Ru => "Заблокировали! Победа противника 😵",
    }
}

/// The opponent's concession line on player victory
pub fn concession_line(language: Language) -> &'static str {
    match language {
        Language::Ja => "参った...お前の勝ちだ😵",
        Language::Ru => "Сдаюсь... ты победил 😵",
    }
}

/// Victory banner for the player
pub fn victory_message(language: Language) -> &'static str {
    match language {
        Language::Ja => "勝利！相手のメンタルを完全に破壊しました🎉",
        Language::Ru => "Победа! Полностью сломил противника 🎉",
    }
}

/// Shown when counter-attacks drain the player's gauge to zero
pub fn defeat_message(language: Language) -> &'static str {
    match language {
        Language::Ja => "メンタルが尽きました...あなたの負けです😵",
        Language::Ru => "Твоя психика не выдержала... поражение 😵",
    }
}

/// Announces damage dealt by the player's reply
pub fn damage_message(language: Language, damage: u32) -> String {
    match language {
        Language::Ja => format!("{}ダメージ！", damage),
        Language::Ru => format!("{} урона!", damage),
    }
}

/// Announces a counter-attack landing on the player
pub fn counter_message(language: Language, damage: u32) -> String {
    match language {
        Language::Ja => format!("反撃！{}ダメージを受けた💢", damage),
        Language::Ru => format!("Контратака! Получено {} урона 💢", damage),
    }
}
