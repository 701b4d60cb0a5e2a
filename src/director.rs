//! Enemy director module.
//!
//! The director encodes the named presets. It owns one builder and
//! drives it through a preset's fixed stats combined with the abilities,
//! loot and AI of a caller-supplied component factory.

use crate::builder::EnemyBuilder;
use crate::enemy::Enemy;
use crate::error::EnemyError;
use crate::factory::ComponentFactory;
use crate::preset::Preset;

/// Creates preset enemies with an injected builder.
///
/// The builder is reset before every preset, so nothing set by an
/// earlier call (boss phases, extra abilities, ...) leaks into the next
/// enemy. The builder type decides the enemy kind: a director over a
/// [`BossEnemyBuilder`](crate::builder::BossEnemyBuilder) produces
/// dragons, one over a [`BasicEnemyBuilder`](crate::builder::BasicEnemyBuilder)
/// produces basic enemies.
///
/// # Examples
///
/// ```rust
/// use enemyforge::builder::BasicEnemyBuilder;
/// use enemyforge::director::EnemyDirector;
/// use enemyforge::factory::FireComponentFactory;
///
/// let mut director = EnemyDirector::new(BasicEnemyBuilder::new());
/// let goblin = director.create_minion("Fire Goblin", &FireComponentFactory).unwrap();
///
/// assert_eq!(goblin.health(), 100);
/// assert_eq!(goblin.element().as_str(), "NONE");
/// assert_eq!(goblin.ai_behavior().as_str(), "AGGRESSIVE");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnemyDirector<B: EnemyBuilder> {
    builder: B,
}

impl<B: EnemyBuilder> EnemyDirector<B> {
    /// Director driving `builder`.
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// The builder, holding whatever the last preset call left in it.
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Give the builder back.
    pub fn into_builder(self) -> B {
        self.builder
    }

    /// Build `name` from `preset`'s template and `factory`'s components.
    ///
    /// # Errors
    ///
    /// Propagates the builder's configuration error, which can only be
    /// [`EnemyError::MissingName`] for an empty `name`.
    pub fn create<F>(
        &mut self,
        preset: Preset,
        name: &str,
        factory: &F,
    ) -> Result<Enemy, EnemyError>
    where
        F: ComponentFactory + ?Sized,
    {
        let template = preset.template();
        self.builder
            .reset()
            .set_name(name)
            .set_stats(template.stats)
            .set_element(template.element)
            .set_abilities(factory.create_abilities())
            .set_loot_table(factory.create_loot_table())
            .set_ai_behavior(factory.create_ai_behavior())
            .build()
    }

    /// Weak enemy: 100 health, 10 damage, 5 defense, 10 speed, element `NONE`.
    ///
    /// # Errors
    ///
    /// [`EnemyError::MissingName`] for an empty `name`.
    pub fn create_minion<F>(&mut self, name: &str, factory: &F) -> Result<Enemy, EnemyError>
    where
        F: ComponentFactory + ?Sized,
    {
        self.create(Preset::Minion, name, factory)
    }

    /// Stronger enemy: 300 health, 25 damage, 15 defense, 12 speed,
    /// element `ELITE`.
    ///
    /// # Errors
    ///
    /// [`EnemyError::MissingName`] for an empty `name`.
    pub fn create_elite<F>(&mut self, name: &str, factory: &F) -> Result<Enemy, EnemyError>
    where
        F: ComponentFactory + ?Sized,
    {
        self.create(Preset::Elite, name, factory)
    }

    /// Mini-boss: 800 health, 50 damage, 30 defense, 8 speed, element `BOSS`.
    ///
    /// # Errors
    ///
    /// [`EnemyError::MissingName`] for an empty `name`.
    pub fn create_mini_boss<F>(&mut self, name: &str, factory: &F) -> Result<Enemy, EnemyError>
    where
        F: ComponentFactory + ?Sized,
    {
        self.create(Preset::MiniBoss, name, factory)
    }

    /// Raid boss: 3000 health, 120 damage, 60 defense, 5 speed,
    /// element `RAID`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enemyforge::builder::BossEnemyBuilder;
    /// use enemyforge::director::EnemyDirector;
    /// use enemyforge::factory::IceComponentFactory;
    ///
    /// let mut director = EnemyDirector::new(BossEnemyBuilder::new());
    /// let wyrm = director.create_raid_boss("Frost Wyrm", &IceComponentFactory).unwrap();
    ///
    /// assert_eq!(wyrm.health(), 3000);
    /// assert_eq!(wyrm.kind().label(), "Dragon Boss");
    /// ```
    ///
    /// # Errors
    ///
    /// [`EnemyError::MissingName`] for an empty `name`.
    pub fn create_raid_boss<F>(&mut self, name: &str, factory: &F) -> Result<Enemy, EnemyError>
    where
        F: ComponentFactory + ?Sized,
    {
        self.create(Preset::RaidBoss, name, factory)
    }
}
