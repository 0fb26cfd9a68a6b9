//! Card identity: suit, rank and effect kind.
//!
//! Cards are plain values. Two cards with the same suit, rank and effect are
//! interchangeable; the rules never observe per-instance identity.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };
        write!(f, "{}", symbol)
    }
}

/// Card rank, 2 through Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Numeric value: 2..=10, Jack = 11, Queen = 12, King = 13, Ace = 14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// Weapons a participant can have equipped.
///
/// Everyone starts with the Colt .45. Only the Volcanic lifts the
/// one-offensive-card-per-turn limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    #[default]
    Colt45,
    Volcanic,
    Schofield,
    Remington,
    RevCarbine,
    Winchester,
}

impl Weapon {
    /// Maximum effective distance at which this weapon can reach a target.
    #[must_use]
    pub const fn range(self) -> u32 {
        match self {
            Weapon::Colt45 | Weapon::Volcanic => 1,
            Weapon::Schofield => 2,
            Weapon::Remington => 3,
            Weapon::RevCarbine => 4,
            Weapon::Winchester => 5,
        }
    }

    /// Whether offensive cards may be played any number of times per turn.
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Weapon::Volcanic)
    }

    /// Printed card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weapon::Colt45 => "Colt .45",
            Weapon::Volcanic => "Volcanic",
            Weapon::Schofield => "Schofield",
            Weapon::Remington => "Remington",
            Weapon::RevCarbine => "Rev. Carbine",
            Weapon::Winchester => "Winchester",
        }
    }
}

/// What a card does when played.
///
/// A closed set: the resolver has one arm per variant and everything it does
/// not model explicitly resolves as a plain discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Bang,
    Missed,
    Beer,
    Saloon,
    Stagecoach,
    WellsFargo,
    CatBalou,
    Panic,
    GeneralStore,
    Indians,
    Duel,
    Gatling,
    Jail,
    Dynamite,
    Weapon(Weapon),
    Mustang,
    Scope,
    Barrel,
}

impl EffectKind {
    /// Printed card name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EffectKind::Bang => "Bang!",
            EffectKind::Missed => "Missed!",
            EffectKind::Beer => "Beer",
            EffectKind::Saloon => "Saloon",
            EffectKind::Stagecoach => "Stagecoach",
            EffectKind::WellsFargo => "Wells Fargo",
            EffectKind::CatBalou => "Cat Balou",
            EffectKind::Panic => "Panic!",
            EffectKind::GeneralStore => "General Store",
            EffectKind::Indians => "Indians!",
            EffectKind::Duel => "Duel",
            EffectKind::Gatling => "Gatling",
            EffectKind::Jail => "Jail",
            EffectKind::Dynamite => "Dynamite",
            EffectKind::Weapon(weapon) => weapon.name(),
            EffectKind::Mustang => "Mustang",
            EffectKind::Scope => "Scope",
            EffectKind::Barrel => "Barrel",
        }
    }

    /// Offensive cards are limited per turn and need a target in range.
    #[must_use]
    pub const fn is_offensive(self) -> bool {
        matches!(self, EffectKind::Bang)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub effect: EffectKind,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, effect: EffectKind) -> Self {
        Self { suit, rank, effect }
    }

    /// Printed card name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.effect.name()
    }

    /// Whether this card, drawn for a dynamite check, makes the dynamite explode.
    #[must_use]
    pub fn detonates_dynamite(&self) -> bool {
        self.suit == Suit::Spades && (2..=9).contains(&self.rank.value())
    }

    /// Whether this card, drawn for a jail check, frees the prisoner.
    #[must_use]
    pub fn frees_from_jail(&self) -> bool {
        self.suit == Suit::Hearts
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}{})", self.name(), self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn test_dynamite_check_window() {
        let explodes =
            |rank| Card::new(Suit::Spades, rank, EffectKind::Missed).detonates_dynamite();

        assert!(explodes(Rank::Two));
        assert!(explodes(Rank::Seven));
        assert!(explodes(Rank::Nine));
        assert!(!explodes(Rank::Ten));
        assert!(!explodes(Rank::Ace));
        assert!(!Card::new(Suit::Hearts, Rank::Seven, EffectKind::Bang).detonates_dynamite());
    }

    #[test]
    fn test_jail_check() {
        assert!(Card::new(Suit::Hearts, Rank::King, EffectKind::Saloon).frees_from_jail());
        assert!(!Card::new(Suit::Diamonds, Rank::King, EffectKind::CatBalou).frees_from_jail());
    }

    #[test]
    fn test_weapon_ranges() {
        assert_eq!(Weapon::default(), Weapon::Colt45);
        assert_eq!(Weapon::Colt45.range(), 1);
        assert_eq!(Weapon::Volcanic.range(), 1);
        assert_eq!(Weapon::Schofield.range(), 2);
        assert_eq!(Weapon::Winchester.range(), 5);
        assert!(Weapon::Volcanic.is_unlimited());
        assert!(!Weapon::Remington.is_unlimited());
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Suit::Spades, Rank::Seven, EffectKind::Bang);
        assert_eq!(card.to_string(), "Bang! (7♠)");

        let rifle = Card::new(Suit::Clubs, Rank::Three, EffectKind::Weapon(Weapon::Winchester));
        assert_eq!(rifle.name(), "Winchester");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Suit::Clubs, Rank::Two, EffectKind::Weapon(Weapon::RevCarbine));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
