//! Character traits: starting health and fixed equipment bonuses.
//!
//! The table is consulted once, when the game is set up. Characters are
//! otherwise cosmetic; the only trait that matters during play is
//! `unlimited_offense`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// What a character brings to the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTraits {
    pub name: String,
    /// Max health before the Sheriff bonus.
    pub base_health: u32,
    pub mustang: u32,
    pub scope: u32,
    pub barrel: u32,
    pub unlimited_offense: bool,
}

impl CharacterTraits {
    /// A character with no bonuses.
    pub fn new(name: impl Into<String>, base_health: u32) -> Self {
        Self {
            name: name.into(),
            base_health,
            mustang: 0,
            scope: 0,
            barrel: 0,
            unlimited_offense: false,
        }
    }

    pub fn with_mustang(mut self, points: u32) -> Self {
        self.mustang = points;
        self
    }

    pub fn with_scope(mut self, points: u32) -> Self {
        self.scope = points;
        self
    }

    pub fn with_barrel(mut self, points: u32) -> Self {
        self.barrel = points;
        self
    }

    pub fn with_unlimited_offense(mut self) -> Self {
        self.unlimited_offense = true;
        self
    }
}

/// Source of playable characters.
pub trait CharacterTable {
    /// All characters, in a stable order.
    fn characters(&self) -> &[CharacterTraits];

    /// Look up a character by name.
    fn lookup(&self, name: &str) -> Option<&CharacterTraits> {
        self.characters().iter().find(|c| c.name == name)
    }
}

/// An indexed list of characters.
///
/// ```
/// use bang_sim::game::{CharacterRoster, CharacterTable};
///
/// let roster = CharacterRoster::base();
/// let paul = roster.lookup("Paul Regret").unwrap();
/// assert_eq!(paul.base_health, 3);
/// assert_eq!(paul.mustang, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CharacterRoster {
    traits: Vec<CharacterTraits>,
    by_name: FxHashMap<String, usize>,
}

impl CharacterRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The sixteen base-game characters.
    #[must_use]
    pub fn base() -> Self {
        let mut roster = Self::new();
        for (name, health) in [
            ("Bart Cassidy", 4),
            ("Black Jack", 4),
            ("Calamity Janet", 4),
            ("El Gringo", 3),
            ("Jesse Jones", 4),
            ("Kit Carlson", 4),
            ("Lucky Duke", 4),
            ("Pedro Ramirez", 4),
            ("Sid Ketchum", 4),
            ("Slab the Killer", 4),
            ("Suzy Lafayette", 4),
            ("Vulture Sam", 4),
        ] {
            roster.register(CharacterTraits::new(name, health));
        }
        roster.register(CharacterTraits::new("Jourdonnais", 4).with_barrel(1));
        roster.register(CharacterTraits::new("Paul Regret", 3).with_mustang(1));
        roster.register(CharacterTraits::new("Rose Doolan", 4).with_scope(1));
        roster.register(CharacterTraits::new("Willy the Kid", 4).with_unlimited_offense());
        roster
    }

    /// Add a character.
    ///
    /// Panics if a character with the same name already exists.
    pub fn register(&mut self, traits: CharacterTraits) {
        if self.by_name.contains_key(&traits.name) {
            panic!("Character {} already registered", traits.name);
        }
        self.by_name.insert(traits.name.clone(), self.traits.len());
        self.traits.push(traits);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

impl CharacterTable for CharacterRoster {
    fn characters(&self) -> &[CharacterTraits] {
        &self.traits
    }

    fn lookup(&self, name: &str) -> Option<&CharacterTraits> {
        self.by_name.get(name).map(|&i| &self.traits[i])
    }
}
