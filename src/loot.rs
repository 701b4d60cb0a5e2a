//! Loot tables module.
//!
//! A loot table lists the items an enemy drops together with the gold
//! and experience it yields. Tables are immutable; the item accessor
//! hands out copies so a caller can never corrupt a template's table.

use crate::tag::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Themed drop table.
///
/// Item order is preserved for display. Cloning a table is its
/// duplication operation and yields a fully independent copy.
///
/// # Examples
///
/// ```rust
/// use enemyforge::LootTable;
///
/// let loot = LootTable::fire();
/// let mut items = loot.items();
/// items.push("Stolen Goods".to_string());
///
/// // The table itself is untouched
/// assert_eq!(loot.items().len(), 3);
/// assert_eq!(loot.gold_drop(), 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootTable {
    theme: Tag,
    items: Vec<String>,
    gold_drop: u32,
    experience_drop: u32,
}

impl LootTable {
    /// Create a loot table from its parts.
    pub fn new<I, S>(theme: impl Into<Tag>, items: I, gold_drop: u32, experience_drop: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            theme: theme.into(),
            items: items.into_iter().map(Into::into).collect(),
            gold_drop,
            experience_drop,
        }
    }

    /// Fire-themed drops: 150 gold, 300 experience.
    pub fn fire() -> Self {
        Self::new("FIRE", ["Fire Gem", "Flame Rune", "Dragon Scale"], 150, 300)
    }

    /// Ice-themed drops: 120 gold, 280 experience.
    pub fn ice() -> Self {
        Self::new("ICE", ["Ice Gem", "Frost Rune", "Frozen Scale"], 120, 280)
    }

    /// Shadow-themed drops: 180 gold, 350 experience.
    pub fn shadow() -> Self {
        Self::new(
            "SHADOW",
            ["Shadow Gem", "Dark Essence", "Shadow Rune"],
            180,
            350,
        )
    }

    /// Theme this table belongs to.
    pub fn theme(&self) -> &Tag {
        &self.theme
    }

    /// Owned copy of the dropped items, in display order. Changing the
    /// returned list never changes the table.
    pub fn items(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Borrowed, read-only iteration over the items.
    pub fn iter_items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Gold awarded on defeat.
    pub fn gold_drop(&self) -> u32 {
        self.gold_drop
    }

    /// Experience awarded on defeat.
    pub fn experience_drop(&self) -> u32 {
        self.experience_drop
    }

    /// Independent copy of this table. Same as `clone`.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for LootTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} gold, {} xp, items: ",
            self.theme, self.gold_drop, self.experience_drop
        )?;
        for (i, item) in self.iter_items().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themed_tables() {
        let fire = LootTable::fire();
        assert_eq!(fire.theme(), &Tag::new("FIRE"));
        assert_eq!(fire.items(), vec!["Fire Gem", "Flame Rune", "Dragon Scale"]);
        assert_eq!(fire.experience_drop(), 300);

        let ice = LootTable::ice();
        assert_eq!(ice.items(), vec!["Ice Gem", "Frost Rune", "Frozen Scale"]);
        assert_eq!((ice.gold_drop(), ice.experience_drop()), (120, 280));

        let shadow = LootTable::shadow();
        assert_eq!(
            shadow.items(),
            vec!["Shadow Gem", "Dark Essence", "Shadow Rune"]
        );
        assert_eq!((shadow.gold_drop(), shadow.experience_drop()), (180, 350));
    }

    #[test]
    fn test_items_returns_copy() {
        let loot = LootTable::ice();
        let mut items = loot.items();
        items.clear();
        assert_eq!(loot.iter_items().count(), 3);
    }

    #[test]
    fn test_duplicate() {
        let loot = LootTable::shadow();
        let copy = loot.duplicate();
        assert_eq!(copy, loot);
        assert_ne!(copy.items.as_ptr(), loot.items.as_ptr());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LootTable::fire().to_string(),
            "[FIRE] 150 gold, 300 xp, items: Fire Gem, Flame Rune, Dragon Scale"
        );
        let empty = LootTable::new("NONE", Vec::<String>::new(), 0, 0);
        assert_eq!(empty.to_string(), "[NONE] 0 gold, 0 xp, items: ");
    }
}
