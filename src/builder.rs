//! Enemy builders.
//!
//! Provides the [`EnemyBuilder`] trait and its two implementations.
//! A builder accumulates construction parameters through fluent setters
//! and turns them into one validated [`Enemy`] with [`build`]. `build`
//! is the factory-method step: each builder decides which enemy kind it
//! produces from the same accumulated parameters.
//!
//! [`build`]: EnemyBuilder::build

use crate::ability::Ability;
use crate::enemy::{DragonTraits, Enemy, EnemyKind};
use crate::error::EnemyError;
use crate::loot::LootTable;
use crate::stats::StatBlock;
use crate::tag::Tag;
use log::debug;

/// Parameters accumulated by a builder.
///
/// Unset tags fall back to `NONE` (element) and `IDLE` (AI behavior)
/// at build time. Name, positive health and a loot table are required.
/// Fields are only written through the [`EnemyBuilder`] setters and an
/// enemy only comes out of [`EnemyBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct EnemyBlueprint {
    pub(crate) name: Option<String>,
    pub(crate) stats: StatBlock,
    pub(crate) element: Option<Tag>,
    // working ability list, in display order
    pub(crate) abilities: Vec<Box<dyn Ability>>,
    pub(crate) loot_table: Option<LootTable>,
    pub(crate) ai_behavior: Option<Tag>,
}

impl EnemyBlueprint {
    /// Name set so far, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn stats(&self) -> StatBlock {
        self.stats
    }

    pub fn element(&self) -> Option<&Tag> {
        self.element.as_ref()
    }

    /// Working ability list. Built enemies receive duplicates of these.
    pub fn abilities(&self) -> &[Box<dyn Ability>] {
        &self.abilities
    }

    pub fn loot_table(&self) -> Option<&LootTable> {
        self.loot_table.as_ref()
    }

    pub fn ai_behavior(&self) -> Option<&Tag> {
        self.ai_behavior.as_ref()
    }

    /// Check the build-time invariants.
    pub fn validate(&self) -> Result<(), EnemyError> {
        match self.name.as_deref() {
            None | Some("") => return Err(EnemyError::MissingName),
            Some(_) => {}
        }
        if self.stats.health <= 0 {
            return Err(EnemyError::NonPositiveHealth(self.stats.health));
        }
        if self.loot_table.is_none() {
            return Err(EnemyError::MissingLootTable);
        }
        Ok(())
    }

    /// Validate, then produce an enemy of `kind` that owns duplicates of
    /// the working abilities and loot table.
    ///
    /// The blueprint is left untouched either way, so it can be fixed
    /// and retried after an error or reused for another build.
    pub(crate) fn assemble(&self, kind: EnemyKind) -> Result<Enemy, EnemyError> {
        self.validate()?;
        if let EnemyKind::Dragon(traits) = &kind {
            if traits.phases.contains_key(&0) {
                return Err(EnemyError::InvalidPhase(0));
            }
        }

        let name = self.name.clone().ok_or(EnemyError::MissingName)?;
        let loot_table = self
            .loot_table
            .as_ref()
            .map(LootTable::duplicate)
            .ok_or(EnemyError::MissingLootTable)?;
        let abilities = self.abilities.iter().map(|a| a.duplicate()).collect();

        let enemy = Enemy::from_parts(
            name,
            self.stats,
            self.element.clone().unwrap_or_else(Tag::none),
            self.ai_behavior.clone().unwrap_or_else(Tag::idle),
            abilities,
            loot_table,
            kind,
        );
        debug!(
            "Built {} '{}' with {} abilities",
            enemy.kind().label(),
            enemy.name(),
            enemy.abilities().len()
        );
        Ok(enemy)
    }
}

/// Fluent builder contract for enemies.
///
/// Implementors only expose their [`EnemyBlueprint`], say how to
/// [`reset`](EnemyBuilder::reset) and how to [`build`](EnemyBuilder::build);
/// the setters are shared. Every setter mutates in place and returns the
/// same builder. Setting a field twice keeps the last value.
///
/// # Examples
///
/// ```rust
/// use enemyforge::builder::{BasicEnemyBuilder, EnemyBuilder};
/// use enemyforge::factory::{ComponentFactory, ShadowComponentFactory};
///
/// let factory = ShadowComponentFactory;
/// let assassin = BasicEnemyBuilder::new()
///     .set_name("Shade Assassin")
///     .set_health(220)
///     .set_damage(35)
///     .set_defense(8)
///     .set_speed(30)
///     .set_element("SHADOW")
///     .set_abilities(factory.create_abilities())
///     .set_loot_table(factory.create_loot_table())
///     .set_ai_behavior(factory.create_ai_behavior())
///     .build()
///     .unwrap();
///
/// assert_eq!(assassin.speed(), 30);
/// assert_eq!(assassin.ai_behavior().as_str(), "TACTICAL");
/// ```
pub trait EnemyBuilder {
    /// Accumulated parameters.
    fn blueprint(&self) -> &EnemyBlueprint;

    /// Mutable access to the accumulated parameters.
    fn blueprint_mut(&mut self) -> &mut EnemyBlueprint;

    /// Return to the initial accumulating state, dropping every value set
    /// so far, including implementation-specific ones.
    fn reset(&mut self) -> &mut Self;

    /// Validate the accumulated parameters and produce a new enemy.
    ///
    /// # Errors
    ///
    /// A configuration error when the name is missing or empty, health
    /// is not positive, or no loot table was set.
    fn build(&self) -> Result<Enemy, EnemyError>;

    /// Set the display name. Required, and must not be empty.
    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.blueprint_mut().name = Some(name.into());
        self
    }

    /// Set starting health. Must be positive by build time.
    fn set_health(&mut self, health: i32) -> &mut Self {
        self.blueprint_mut().stats.health = health;
        self
    }

    /// Set damage per attack.
    fn set_damage(&mut self, damage: i32) -> &mut Self {
        self.blueprint_mut().stats.damage = damage;
        self
    }

    /// Set defense.
    fn set_defense(&mut self, defense: i32) -> &mut Self {
        self.blueprint_mut().stats.defense = defense;
        self
    }

    /// Set speed. Stat scaling never touches it.
    fn set_speed(&mut self, speed: i32) -> &mut Self {
        self.blueprint_mut().stats.speed = speed;
        self
    }

    /// Set health, damage, defense and speed at once.
    fn set_stats(&mut self, stats: StatBlock) -> &mut Self {
        self.blueprint_mut().stats = stats;
        self
    }

    /// Set the element tag. Defaults to `NONE`.
    fn set_element(&mut self, element: impl Into<Tag>) -> &mut Self {
        self.blueprint_mut().element = Some(element.into());
        self
    }

    /// Replace the working ability list.
    fn set_abilities(&mut self, abilities: Vec<Box<dyn Ability>>) -> &mut Self {
        self.blueprint_mut().abilities = abilities;
        self
    }

    /// Append one ability to the working list.
    fn add_ability(&mut self, ability: Box<dyn Ability>) -> &mut Self {
        self.blueprint_mut().abilities.push(ability);
        self
    }

    /// Set the loot table. Required.
    fn set_loot_table(&mut self, loot_table: LootTable) -> &mut Self {
        self.blueprint_mut().loot_table = Some(loot_table);
        self
    }

    /// Set the AI behavior tag. Defaults to `IDLE`.
    fn set_ai_behavior(&mut self, ai_behavior: impl Into<Tag>) -> &mut Self {
        self.blueprint_mut().ai_behavior = Some(ai_behavior.into());
        self
    }
}

/// Builds [`EnemyKind::Basic`] enemies.
#[derive(Debug, Clone, Default)]
pub struct BasicEnemyBuilder {
    blueprint: EnemyBlueprint,
}

impl BasicEnemyBuilder {
    /// Empty builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnemyBuilder for BasicEnemyBuilder {
    fn blueprint(&self) -> &EnemyBlueprint {
        &self.blueprint
    }

    fn blueprint_mut(&mut self) -> &mut EnemyBlueprint {
        &mut self.blueprint
    }

    fn reset(&mut self) -> &mut Self {
        self.blueprint = EnemyBlueprint::default();
        self
    }

    fn build(&self) -> Result<Enemy, EnemyError> {
        self.blueprint.assemble(EnemyKind::Basic)
    }
}

/// Builds [`EnemyKind::Dragon`] bosses with health-threshold phases.
///
/// # Examples
///
/// ```rust
/// use enemyforge::builder::{BossEnemyBuilder, EnemyBuilder};
/// use enemyforge::factory::{ComponentFactory, FireComponentFactory};
///
/// let fire = FireComponentFactory;
/// let dragon = BossEnemyBuilder::new()
///     .set_name("Ancient Fire Dragon")
///     .set_health(50000)
///     .set_damage(500)
///     .set_abilities(fire.create_abilities())
///     .set_loot_table(fire.create_loot_table())
///     .add_phase(1, 50000)
///     .add_phase(2, 30000)
///     .add_phase(3, 15000)
///     .set_can_fly(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(dragon.phases().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BossEnemyBuilder {
    blueprint: EnemyBlueprint,
    traits: DragonTraits,
}

impl BossEnemyBuilder {
    /// Empty builder: no phases, no flight, no breath attack, zero wingspan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a phase that activates once health drops to
    /// `health_threshold`. Re-adding a phase number replaces its
    /// threshold. Phase numbers start at 1; zero fails the build.
    pub fn add_phase(&mut self, phase: u32, health_threshold: i32) -> &mut Self {
        self.traits.phases.insert(phase, health_threshold);
        self
    }

    /// Mark the dragon as able to fly.
    pub fn set_can_fly(&mut self, can_fly: bool) -> &mut Self {
        self.traits.can_fly = can_fly;
        self
    }

    /// Mark the dragon as having a breath attack.
    pub fn set_breath_attack(&mut self, has_breath_attack: bool) -> &mut Self {
        self.traits.has_breath_attack = has_breath_attack;
        self
    }

    /// Set the wingspan.
    pub fn set_wingspan(&mut self, wingspan: u32) -> &mut Self {
        self.traits.wingspan = wingspan;
        self
    }
}

impl EnemyBuilder for BossEnemyBuilder {
    fn blueprint(&self) -> &EnemyBlueprint {
        &self.blueprint
    }

    fn blueprint_mut(&mut self) -> &mut EnemyBlueprint {
        &mut self.blueprint
    }

    fn reset(&mut self) -> &mut Self {
        self.blueprint = EnemyBlueprint::default();
        self.traits = DragonTraits::default();
        self
    }

    /// # Errors
    ///
    /// Everything [`EnemyBlueprint::validate`] rejects, plus
    /// [`EnemyError::InvalidPhase`] for a phase numbered zero.
    fn build(&self) -> Result<Enemy, EnemyError> {
        self.blueprint
            .assemble(EnemyKind::Dragon(self.traits.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{FlameBreath, FrostBreath};

    fn ready() -> BasicEnemyBuilder {
        let mut builder = BasicEnemyBuilder::new();
        builder
            .set_name("Goblin")
            .set_health(100)
            .set_loot_table(LootTable::fire());
        builder
    }

    #[test]
    fn test_build_defaults() {
        let enemy = ready().build().unwrap();
        assert_eq!(enemy.element().as_str(), "NONE");
        assert_eq!(enemy.ai_behavior().as_str(), "IDLE");
        assert!(enemy.abilities().is_empty());
        assert_eq!(enemy.kind(), &EnemyKind::Basic);
    }

    #[test]
    fn test_last_value_wins() {
        let mut builder = ready();
        builder.set_health(10).set_health(42).set_element("ICE").set_element("FIRE");
        let enemy = builder.build().unwrap();
        assert_eq!(enemy.health(), 42);
        assert_eq!(enemy.element().as_str(), "FIRE");
    }

    #[test]
    fn test_set_abilities_replaces_add_appends() {
        let mut builder = ready();
        builder
            .add_ability(Box::new(FrostBreath::new()))
            .set_abilities(vec![Box::new(FlameBreath::new())])
            .add_ability(Box::new(FrostBreath::new()));
        let enemy = builder.build().unwrap();
        assert_eq!(enemy.ability_names(), vec!["Flame Breath", "Frost Breath"]);
    }

    #[test]
    fn test_missing_name() {
        let mut builder = ready();
        builder.set_name("");
        assert_eq!(builder.build().unwrap_err(), EnemyError::MissingName);

        let mut unnamed = BasicEnemyBuilder::new();
        unnamed.set_health(5).set_loot_table(LootTable::ice());
        assert_eq!(unnamed.build().unwrap_err(), EnemyError::MissingName);
    }

    #[test]
    fn test_non_positive_health() {
        let mut builder = ready();
        builder.set_health(0);
        assert_eq!(builder.build().unwrap_err(), EnemyError::NonPositiveHealth(0));
        builder.set_health(-3);
        assert_eq!(
            builder.build().unwrap_err(),
            EnemyError::NonPositiveHealth(-3)
        );
    }

    #[test]
    fn test_missing_loot_table() {
        let mut builder = BasicEnemyBuilder::new();
        builder.set_name("Wisp").set_health(1);
        assert_eq!(builder.build().unwrap_err(), EnemyError::MissingLootTable);
    }

    #[test]
    fn test_failed_build_keeps_state() {
        let mut builder = ready();
        builder.set_health(0).set_damage(7);
        assert!(builder.build().is_err());

        assert_eq!(builder.blueprint().name(), Some("Goblin"));
        assert_eq!(builder.blueprint().stats().damage, 7);

        builder.set_health(1);
        let enemy = builder.build().unwrap();
        assert_eq!(enemy.damage(), 7);
    }

    #[test]
    fn test_builder_reuse_does_not_touch_built_enemy() {
        let mut builder = ready();
        builder.add_ability(Box::new(FlameBreath::new()));
        let first = builder.build().unwrap();

        builder
            .add_ability(Box::new(FrostBreath::new()))
            .set_loot_table(LootTable::ice());
        let second = builder.build().unwrap();

        assert_eq!(first.ability_names(), vec!["Flame Breath"]);
        assert_eq!(first.loot_table(), &LootTable::fire());
        assert_eq!(second.abilities().len(), 2);
    }

    #[test]
    fn test_reset() {
        let mut builder = ready();
        builder.reset();
        assert!(builder.blueprint().name().is_none());
        assert!(builder.blueprint().loot_table().is_none());
    }

    #[test]
    fn test_boss_builder_phases() {
        let mut builder = BossEnemyBuilder::new();
        builder
            .set_name("Frost Wyrm")
            .set_health(20000)
            .set_loot_table(LootTable::ice())
            .add_phase(2, 10000)
            .add_phase(1, 20000)
            .add_phase(2, 9000)
            .set_breath_attack(true)
            .set_wingspan(18);
        let boss = builder.build().unwrap();

        let phases: Vec<_> = boss.phases().into_iter().collect();
        assert_eq!(phases, vec![(1, 20000), (2, 9000)]);
        let traits = boss.dragon_traits().unwrap();
        assert!(traits.has_breath_attack);
        assert!(!traits.can_fly);
        assert_eq!(traits.wingspan, 18);
    }

    #[test]
    fn test_boss_builder_rejects_phase_zero() {
        let mut builder = BossEnemyBuilder::new();
        builder
            .set_name("Broken Dragon")
            .set_health(100)
            .set_loot_table(LootTable::fire())
            .add_phase(0, 100);
        assert_eq!(builder.build().unwrap_err(), EnemyError::InvalidPhase(0));
    }

    #[test]
    fn test_assemble_rejects_dragon_phase_zero() {
        let blueprint = EnemyBlueprint {
            name: Some("Hatchling".to_string()),
            stats: StatBlock::new(100, 1, 1, 1),
            loot_table: Some(LootTable::fire()),
            ..Default::default()
        };
        let traits = DragonTraits {
            phases: [(0, 50)].into_iter().collect(),
            ..Default::default()
        };

        assert_eq!(
            blueprint.assemble(EnemyKind::Dragon(traits)).unwrap_err(),
            EnemyError::InvalidPhase(0)
        );
        assert!(blueprint.assemble(EnemyKind::Basic).is_ok());
    }

    #[test]
    fn test_boss_reset_clears_phases() {
        let mut builder = BossEnemyBuilder::new();
        builder.add_phase(1, 10).set_can_fly(true);
        builder
            .reset()
            .set_name("Drake")
            .set_health(10)
            .set_loot_table(LootTable::fire());
        let drake = builder.build().unwrap();
        assert!(drake.phases().is_empty());
        assert!(!drake.dragon_traits().unwrap().can_fly);
    }
}
