//! Enemy module.
//!
//! Provides the `Enemy` type, the composite entity assembled by a
//! builder. Enemy variants are a closed set of kinds ([`EnemyKind`]);
//! kind-specific state such as a dragon's phase map lives inside the
//! kind, while the fields every enemy shares live on `Enemy` itself.
//!
//! Enemies own their abilities and loot table exclusively. Cloning an
//! enemy duplicates every ability, the loot table and any kind-specific
//! container, so a clone and its source never share mutable state.

use crate::ability::Ability;
use crate::info::EnemyInfo;
use crate::loot::LootTable;
use crate::stats::StatBlock;
use crate::tag::Tag;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Extra state carried by dragon bosses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragonTraits {
    /// Phase number -> health threshold at which the phase activates.
    pub phases: BTreeMap<u32, i32>,
    pub can_fly: bool,
    pub has_breath_attack: bool,
    pub wingspan: u32,
}

/// The closed set of enemy variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Plain enemy with no extra state.
    Basic,
    /// Multi-phase dragon boss.
    Dragon(DragonTraits),
}

impl EnemyKind {
    /// Short label used in displays.
    pub fn label(&self) -> &'static str {
        match self {
            EnemyKind::Basic => "Basic Enemy",
            EnemyKind::Dragon(_) => "Dragon Boss",
        }
    }
}

/// A fully assembled enemy.
///
/// Only builders create enemies (see [`crate::builder`]). After
/// construction the only mutations are the variant hooks
/// [`multiply_stats`](Enemy::multiply_stats),
/// [`set_element`](Enemy::set_element) and
/// [`add_ability`](Enemy::add_ability), meant for clones rather than
/// registered templates.
///
/// # Examples
///
/// ```rust
/// use enemyforge::builder::{BasicEnemyBuilder, EnemyBuilder};
/// use enemyforge::LootTable;
///
/// let goblin = BasicEnemyBuilder::new()
///     .set_name("Goblin")
///     .set_health(100)
///     .set_damage(10)
///     .set_loot_table(LootTable::fire())
///     .build()
///     .unwrap();
///
/// let mut elite = goblin.clone();
/// elite.multiply_stats(2.0);
///
/// assert_eq!(goblin.health(), 100);
/// assert_eq!(elite.health(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct Enemy {
    name: String,
    stats: StatBlock,
    element: Tag,
    ai_behavior: Tag,
    abilities: Vec<Box<dyn Ability>>,
    loot_table: LootTable,
    kind: EnemyKind,
}

impl Enemy {
    pub(crate) fn from_parts(
        name: String,
        stats: StatBlock,
        element: Tag,
        ai_behavior: Tag,
        abilities: Vec<Box<dyn Ability>>,
        loot_table: LootTable,
        kind: EnemyKind,
    ) -> Self {
        Self {
            name,
            stats,
            element,
            ai_behavior,
            abilities,
            loot_table,
            kind,
        }
    }

    /// Display name given at build time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current combat stats, after any scaling.
    pub fn stats(&self) -> StatBlock {
        self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn damage(&self) -> i32 {
        self.stats.damage
    }

    pub fn defense(&self) -> i32 {
        self.stats.defense
    }

    pub fn speed(&self) -> i32 {
        self.stats.speed
    }

    /// Element tag, `NONE` when the builder never set one.
    pub fn element(&self) -> &Tag {
        &self.element
    }

    /// AI behavior tag, `IDLE` when the builder never set one.
    pub fn ai_behavior(&self) -> &Tag {
        &self.ai_behavior
    }

    /// Abilities in display order.
    pub fn abilities(&self) -> &[Box<dyn Ability>] {
        &self.abilities
    }

    /// Ability names in display order.
    pub fn ability_names(&self) -> Vec<String> {
        self.abilities.iter().map(|a| a.name().to_string()).collect()
    }

    pub fn loot_table(&self) -> &LootTable {
        &self.loot_table
    }

    pub fn kind(&self) -> &EnemyKind {
        &self.kind
    }

    /// Dragon-specific state, `None` for other kinds.
    pub fn dragon_traits(&self) -> Option<&DragonTraits> {
        match &self.kind {
            EnemyKind::Dragon(traits) => Some(traits),
            EnemyKind::Basic => None,
        }
    }

    /// Boss phases, empty for enemies without phases.
    pub fn phases(&self) -> BTreeMap<u32, i32> {
        self.dragon_traits()
            .map(|traits| traits.phases.clone())
            .unwrap_or_default()
    }

    /// Scale health, damage and defense by `factor`, truncating.
    ///
    /// No clamping happens here. A factor of zero or below is applied as
    /// given and reported at warn level, since it leaves the enemy with
    /// zero or negative health.
    pub fn multiply_stats(&mut self, factor: f64) {
        if factor <= 0.0 || factor.is_nan() {
            warn!(
                "Scaling '{}' by non-positive factor {}; health will not stay positive",
                self.name, factor
            );
        }
        self.stats = self.stats.scaled(factor);
        debug!("Scaled '{}' by {}: {}", self.name, factor, self.stats);
    }

    /// Replace the element tag. Only this enemy changes, never the
    /// template it was cloned from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enemyforge::builder::{BasicEnemyBuilder, EnemyBuilder};
    /// use enemyforge::LootTable;
    ///
    /// let wolf = BasicEnemyBuilder::new()
    ///     .set_name("Wolf")
    ///     .set_health(90)
    ///     .set_loot_table(LootTable::ice())
    ///     .build()
    ///     .unwrap();
    /// let mut frost_wolf = wolf.clone();
    /// frost_wolf.set_element("ICE");
    ///
    /// assert_eq!(frost_wolf.element(), "ICE");
    /// assert_eq!(wolf.element(), "NONE");
    /// ```
    pub fn set_element(&mut self, element: impl Into<Tag>) {
        self.element = element.into();
    }

    /// Append an ability after the existing ones.
    pub fn add_ability(&mut self, ability: Box<dyn Ability>) {
        self.abilities.push(ability);
    }

    /// Read-only snapshot of every field.
    pub fn info(&self) -> EnemyInfo {
        EnemyInfo {
            name: self.name.clone(),
            kind: self.kind.clone(),
            stats: self.stats,
            element: self.element.clone(),
            ai_behavior: self.ai_behavior.clone(),
            abilities: self.abilities.iter().map(|a| a.info()).collect(),
            loot_table: self.loot_table.clone(),
        }
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ({}) ===", self.name, self.kind.label())?;
        writeln!(f, "{}", self.stats)?;
        writeln!(f, "Element: {}", self.element)?;
        writeln!(f, "AI Behavior: {}", self.ai_behavior)?;
        writeln!(f, "Abilities ({}):", self.abilities.len())?;
        for ability in &self.abilities {
            write!(f, "  - {} ({} dmg)", ability.name(), ability.damage())?;
            if let Some(effect) = ability.effect() {
                write!(f, " [{}]", effect)?;
            }
            writeln!(f, ": {}", ability.description())?;
        }
        if let EnemyKind::Dragon(traits) = &self.kind {
            writeln!(f, "Boss Phases: {}", traits.phases.len())?;
            for (phase, threshold) in &traits.phases {
                writeln!(f, "  Phase {}: triggers at {} HP", phase, threshold)?;
            }
            writeln!(
                f,
                "Can Fly: {} | Breath Attack: {} | Wingspan: {}",
                traits.can_fly, traits.has_breath_attack, traits.wingspan
            )?;
        }
        write!(f, "Loot: {}", self.loot_table)
    }
}
