//! Enemy snapshots.
//!
//! Contains the `EnemyInfo` type, a read-only, serializable copy of
//! every observable field of an enemy. Useful for diagnostics, logs and
//! for comparing a template against its clones.

use crate::ability::AbilityInfo;
use crate::enemy::EnemyKind;
use crate::loot::LootTable;
use crate::stats::StatBlock;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// Snapshot of an enemy.
///
/// Holds owned copies only, so it can be kept around or sent elsewhere
/// without touching the enemy it was taken from.
///
/// # Examples
///
/// ```rust
/// use enemyforge::builder::{BasicEnemyBuilder, EnemyBuilder};
/// use enemyforge::factory::{ComponentFactory, IceComponentFactory};
///
/// let factory = IceComponentFactory;
/// let yeti = BasicEnemyBuilder::new()
///     .set_name("Yeti")
///     .set_health(250)
///     .set_abilities(factory.create_abilities())
///     .set_loot_table(factory.create_loot_table())
///     .build()
///     .unwrap();
///
/// let info = yeti.info();
/// assert_eq!(info.name, "Yeti");
/// assert_eq!(info.ability_names(), vec!["Frost Breath"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub name: String,
    pub kind: EnemyKind,
    pub stats: StatBlock,
    pub element: Tag,
    pub ai_behavior: Tag,
    /// In display order.
    pub abilities: Vec<AbilityInfo>,
    pub loot_table: LootTable,
}

impl EnemyInfo {
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.name.as_str()).collect()
    }

    /// Sum of the damage of every ability.
    pub fn total_ability_damage(&self) -> u32 {
        self.abilities.iter().map(|a| a.damage).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityEffect;

    fn sample() -> EnemyInfo {
        EnemyInfo {
            name: "Frost Wraith".to_string(),
            kind: EnemyKind::Basic,
            stats: StatBlock::new(300, 25, 15, 12),
            element: Tag::new("ELITE"),
            ai_behavior: Tag::new("DEFENSIVE"),
            abilities: vec![AbilityInfo {
                name: "Frost Breath".to_string(),
                damage: 40,
                description: "cold".to_string(),
                effect: Some(AbilityEffect::Slow { percent: 30 }),
            }],
            loot_table: LootTable::ice(),
        }
    }

    #[test]
    fn test_total_ability_damage() {
        assert_eq!(sample().total_ability_damage(), 40);
    }

    #[test]
    fn test_serde_round_trip() {
        let info = sample();
        let json = serde_json::to_string(&info).unwrap();
        let back: EnemyInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
