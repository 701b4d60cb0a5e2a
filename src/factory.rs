//! Themed component factories.
//!
//! A component factory produces the abilities, loot table and AI tag for
//! exactly one theme. Because one factory hands out all three, a builder
//! fed from a single factory can never mix themes (no fire abilities
//! with ice loot). Adding a theme means adding one more implementation
//! of [`ComponentFactory`].

use crate::ability::{Ability, FlameBreath, FrostBreath, ShadowStrike};
use crate::loot::LootTable;
use crate::tag::Tag;
use std::fmt;

/// Trait for factories producing a consistent family of enemy components.
///
/// All three operations are pure: every call returns freshly constructed
/// components and no state is shared between calls.
///
/// # Examples
///
/// ```rust
/// use enemyforge::factory::{ComponentFactory, FireComponentFactory};
///
/// let factory = FireComponentFactory;
/// let abilities = factory.create_abilities();
/// let loot = factory.create_loot_table();
///
/// assert_eq!(abilities[0].name(), "Flame Breath");
/// assert_eq!(loot.theme().as_str(), "FIRE");
/// assert_eq!(factory.create_ai_behavior().as_str(), "AGGRESSIVE");
/// ```
pub trait ComponentFactory {
    /// Abilities for this theme, in display order.
    fn create_abilities(&self) -> Vec<Box<dyn Ability>>;

    /// Loot table for this theme.
    fn create_loot_table(&self) -> LootTable;

    /// AI-behavior tag for this theme.
    fn create_ai_behavior(&self) -> Tag;

    /// Name of the theme, taken from the loot table.
    fn theme_name(&self) -> Tag {
        self.create_loot_table().theme().clone()
    }
}

/// Fire theme: Flame Breath, fire loot, aggressive AI.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireComponentFactory;

impl ComponentFactory for FireComponentFactory {
    fn create_abilities(&self) -> Vec<Box<dyn Ability>> {
        vec![Box::new(FlameBreath::new())]
    }

    fn create_loot_table(&self) -> LootTable {
        LootTable::fire()
    }

    fn create_ai_behavior(&self) -> Tag {
        Tag::new("AGGRESSIVE")
    }
}

/// Ice theme: Frost Breath, ice loot, defensive AI.
#[derive(Debug, Clone, Copy, Default)]
pub struct IceComponentFactory;

impl ComponentFactory for IceComponentFactory {
    fn create_abilities(&self) -> Vec<Box<dyn Ability>> {
        vec![Box::new(FrostBreath::new())]
    }

    fn create_loot_table(&self) -> LootTable {
        LootTable::ice()
    }

    fn create_ai_behavior(&self) -> Tag {
        Tag::new("DEFENSIVE")
    }
}

/// Shadow theme: Shadow Strike, shadow loot, tactical AI.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadowComponentFactory;

impl ComponentFactory for ShadowComponentFactory {
    fn create_abilities(&self) -> Vec<Box<dyn Ability>> {
        vec![Box::new(ShadowStrike::new())]
    }

    fn create_loot_table(&self) -> LootTable {
        LootTable::shadow()
    }

    fn create_ai_behavior(&self) -> Tag {
        Tag::new("TACTICAL")
    }
}

/// The themes shipped with the crate.
///
/// Lets a driver pick a theme by value and get the matching factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Fire,
    Ice,
    Shadow,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Fire, Theme::Ice, Theme::Shadow];

    /// The component factory for this theme.
    pub fn factory(self) -> Box<dyn ComponentFactory> {
        match self {
            Theme::Fire => Box::new(FireComponentFactory),
            Theme::Ice => Box::new(IceComponentFactory),
            Theme::Shadow => Box::new(ShadowComponentFactory),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Fire => "Fire",
            Theme::Ice => "Ice",
            Theme::Shadow => "Shadow",
        };
        f.write_str(name)
    }
}
