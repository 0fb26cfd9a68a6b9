//! Rules configuration.
//!
//! Defaults reproduce the reference ruleset: two cards per draw phase,
//! one damage per offensive card, three damage from exploding dynamite,
//! only the core effect subset, and no turn ceiling.

use serde::{Deserialize, Serialize};

/// Which card effects the resolver models beyond plain discards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectSet {
    /// Bang! deals damage; every other card is discarded without effect.
    #[default]
    Core,
    /// Core plus equipment, Beer, Stagecoach, Wells Fargo, Dynamite and Jail.
    Extended,
}

/// Tunable rules for one episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Cards drawn in the draw phase.
    pub cards_per_draw: usize,

    /// Damage dealt by a resolved offensive card.
    pub offense_damage: u32,

    /// Damage dealt when dynamite explodes.
    pub dynamite_damage: u32,

    /// Effect subset the resolver models.
    pub effect_set: EffectSet,

    /// Turn ceiling. An episode reaching it is abandoned.
    pub max_turns: Option<u32>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            cards_per_draw: 2,
            offense_damage: 1,
            dynamite_damage: 3,
            effect_set: EffectSet::Core,
            max_turns: None,
        }
    }
}

impl RulesConfig {
    /// Create the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards drawn per draw phase.
    pub fn with_cards_per_draw(mut self, count: usize) -> Self {
        self.cards_per_draw = count;
        self
    }

    /// Set the damage of an offensive card.
    pub fn with_offense_damage(mut self, damage: u32) -> Self {
        self.offense_damage = damage;
        self
    }

    /// Set the damage of exploding dynamite.
    pub fn with_dynamite_damage(mut self, damage: u32) -> Self {
        self.dynamite_damage = damage;
        self
    }

    /// Select the modelled effect subset.
    pub fn with_effect_set(mut self, effect_set: EffectSet) -> Self {
        self.effect_set = effect_set;
        self
    }

    /// Set the turn ceiling.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();

        assert_eq!(config.cards_per_draw, 2);
        assert_eq!(config.offense_damage, 1);
        assert_eq!(config.dynamite_damage, 3);
        assert_eq!(config.effect_set, EffectSet::Core);
        assert_eq!(config.max_turns, None);
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::new()
            .with_cards_per_draw(3)
            .with_effect_set(EffectSet::Extended)
            .with_max_turns(250);

        assert_eq!(config.cards_per_draw, 3);
        assert_eq!(config.effect_set, EffectSet::Extended);
        assert_eq!(config.max_turns, Some(250));
    }
}
