//! Removal classification.
//!
//! Oracle text is matched (lowercased) against three phrase sets. The first
//! set that matches decides the base bonus; adjustments for cost, modality,
//! repeatability and enters-the-battlefield timing apply afterwards.

const PREMIUM: [&str; 12] = [
    "destroy target creature",
    "exile target creature",
    "destroy all creatures",
    "exile all creatures",
    "destroy all nonland permanents",
    "exile all nonland permanents",
    "destroy target planeswalker",
    "exile target planeswalker",
    "destroy target permanent",
    "exile target permanent",
    "destroy any target",
    "exile any target",
];

const SITUATIONAL: [&str; 5] = [
    "destroy target tapped creature",
    "exile target nonwhite creature",
    "destroy target artifact or creature",
    "fight",
    "deals damage to target creature",
];

const WEAK: [&str; 3] = [
    "destroy target artifact",
    "destroy target enchantment",
    "destroy target land",
];

const MODAL: [&str; 2] = ["choose one or more", "choose one —"];

const REPEATABLE: [&str; 4] = [
    "at the beginning of",
    "each upkeep",
    "whenever",
    "each end step",
];

pub const PREMIUM_BONUS: f64 = 0.4;
pub const SITUATIONAL_INSTANT_BONUS: f64 = 0.3;
pub const SITUATIONAL_BONUS: f64 = 0.2;
pub const WEAK_BONUS: f64 = 0.1;

/// Strength class of a removal effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalClass {
    Premium,
    Situational,
    Weak,
    None,
}

impl RemovalClass {
    /// Classify lowercased oracle text.
    #[must_use]
    pub fn of(text: &str) -> Self {
        if PREMIUM.iter().any(|p| text.contains(p)) {
            RemovalClass::Premium
        } else if SITUATIONAL.iter().any(|p| text.contains(p)) {
            RemovalClass::Situational
        } else if WEAK.iter().any(|p| text.contains(p)) {
            RemovalClass::Weak
        } else {
            RemovalClass::None
        }
    }

    #[must_use]
    pub fn base_bonus(self, instant_speed: bool) -> f64 {
        match self {
            RemovalClass::Premium => PREMIUM_BONUS,
            RemovalClass::Situational if instant_speed => SITUATIONAL_INSTANT_BONUS,
            RemovalClass::Situational => SITUATIONAL_BONUS,
            RemovalClass::Weak => WEAK_BONUS,
            RemovalClass::None => 0.0,
        }
    }
}

/// Removal bonus for lowercased oracle text.
#[must_use]
pub fn removal_score(text: &str, instant_speed: bool, cmc: f64) -> f64 {
    let mut score = RemovalClass::of(text).base_bonus(instant_speed);

    // expensive situational removal
    if cmc >= 5.0 && score > 0.2 && score <= 0.3 {
        score -= 0.1;
    }
    if is_modal(text) && score >= 0.2 {
        score += 0.15;
    }
    if is_repeatable(text) {
        score += 0.15;
    }
    if is_etb_removal(text) {
        score -= 0.05;
    }

    score
}

#[must_use]
pub fn is_modal(text: &str) -> bool {
    MODAL.iter().any(|p| text.contains(p))
}

#[must_use]
pub fn is_repeatable(text: &str) -> bool {
    REPEATABLE.iter().any(|p| text.contains(p))
}

/// "When ... enters ..., destroy/exile ..." effects.
#[must_use]
pub fn is_etb_removal(text: &str) -> bool {
    text.contains("when")
        && (text.contains("enters the battlefield") || text.contains(" enters"))
        && (text.contains("destroy") || text.contains("exile"))
}
