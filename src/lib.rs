//! # enemyforge - Themed Enemy Assembly and Prototype Cloning
//!
//! Builds RPG enemies from themed component families and clones them
//! into variants:
//! - **Family-consistent** components (a fire factory never hands out ice loot)
//! - **Validated** construction through fluent builders
//! - **Preset** stat tiers applied uniformly across themes
//! - **Deep** clones that never share abilities or loot with their source
//!
//! ## Pipeline
//!
//! ```text
//! [ComponentFactory] → [EnemyBuilder / EnemyDirector] → [Enemy] → [EnemyRegistry] → clones
//! ```
//!
//! 1. A **component factory** produces matching abilities, loot and AI for one theme
//! 2. A **builder** (optionally driven by the **director**'s presets) assembles an enemy
//! 3. The **registry** stores enemies as templates and hands out independent clones
//!
//! ## Example
//!
//! ```rust
//! use enemyforge::*;
//! use enemyforge::builder::BasicEnemyBuilder;
//! use enemyforge::factory::ShadowComponentFactory;
//!
//! let mut director = EnemyDirector::new(BasicEnemyBuilder::new());
//! let demon = director.create_mini_boss("Demon Lord", &ShadowComponentFactory).unwrap();
//!
//! let mut registry = EnemyRegistry::new();
//! registry.register_template("demon-lord", demon);
//!
//! let mut greater = registry.create_from_template("demon-lord").unwrap();
//! greater.multiply_stats(2.0);
//!
//! assert_eq!(greater.health(), 1600);
//! assert_eq!(registry.create_from_template("demon-lord").unwrap().health(), 800);
//! ```
//!
//! ## Modules
//!
//! - [`tag`] - String tags for elements, AI behaviors and themes
//! - [`ability`] - Abilities and their duplication
//! - [`loot`] - Loot tables
//! - [`stats`] - Core combat stats
//! - [`factory`] - Themed component factories
//! - [`enemy`] - The enemy entity and its kinds
//! - [`info`] - Serializable enemy snapshots
//! - [`builder`] - Fluent enemy builders
//! - [`preset`] - Named stat presets
//! - [`director`] - Preset-driven construction
//! - [`registry`] - Prototype template store
//! - [`error`] - Error types

pub mod ability;
pub mod builder;
pub mod director;
pub mod enemy;
pub mod error;
pub mod factory;
pub mod info;
pub mod loot;
pub mod preset;
pub mod registry;
pub mod stats;
pub mod tag;

// Re-export main types for convenience
pub use director::EnemyDirector;
pub use enemy::{DragonTraits, Enemy, EnemyKind};
pub use error::{EnemyError, ErrorKind};
pub use info::EnemyInfo;
pub use loot::LootTable;
pub use preset::{Preset, PresetTemplate};
pub use registry::EnemyRegistry;
pub use stats::StatBlock;
pub use tag::Tag;

// Re-export the extension seams
pub use ability::{Ability, AbilityEffect, AbilityInfo};
pub use builder::{BasicEnemyBuilder, BossEnemyBuilder, EnemyBlueprint, EnemyBuilder};
pub use factory::{
    ComponentFactory, FireComponentFactory, IceComponentFactory, ShadowComponentFactory, Theme,
};
