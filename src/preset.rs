//! Named stat presets used by the director.
//!
//! A preset fixes the stats and element tag of an enemy tier. Themes
//! never change a preset's numbers.

use crate::stats::StatBlock;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enemy tiers known to the director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    Minion,
    Elite,
    MiniBoss,
    RaidBoss,
}

/// Stats and element tag a preset applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTemplate {
    pub stats: StatBlock,
    pub element: Tag,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Minion,
        Preset::Elite,
        Preset::MiniBoss,
        Preset::RaidBoss,
    ];

    /// The fixed template for this preset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enemyforge::{Preset, StatBlock};
    ///
    /// let elite = Preset::Elite.template();
    /// assert_eq!(elite.stats, StatBlock::new(300, 25, 15, 12));
    /// assert_eq!(elite.element.as_str(), "ELITE");
    /// ```
    pub fn template(self) -> PresetTemplate {
        let (stats, element) = match self {
            Preset::Minion => (StatBlock::new(100, 10, 5, 10), Tag::NONE),
            Preset::Elite => (StatBlock::new(300, 25, 15, 12), "ELITE"),
            Preset::MiniBoss => (StatBlock::new(800, 50, 30, 8), "BOSS"),
            Preset::RaidBoss => (StatBlock::new(3000, 120, 60, 5), "RAID"),
        };
        PresetTemplate {
            stats,
            element: Tag::new(element),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Minion => "Minion",
            Preset::Elite => "Elite",
            Preset::MiniBoss => "Mini-boss",
            Preset::RaidBoss => "Raid boss",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table() {
        let expected = [
            (Preset::Minion, 100, 10, 5, 10, "NONE"),
            (Preset::Elite, 300, 25, 15, 12, "ELITE"),
            (Preset::MiniBoss, 800, 50, 30, 8, "BOSS"),
            (Preset::RaidBoss, 3000, 120, 60, 5, "RAID"),
        ];

        for (preset, health, damage, defense, speed, element) in expected {
            let template = preset.template();
            assert_eq!(
                template.stats,
                StatBlock::new(health, damage, defense, speed)
            );
            assert_eq!(template.element, element);
        }
    }

    #[test]
    fn test_template_serializes() {
        let json = serde_json::to_value(Preset::RaidBoss.template()).unwrap();
        assert_eq!(json["stats"]["health"], 3000);
        assert_eq!(json["element"], "RAID");
    }
}
