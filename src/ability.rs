//! Abilities module.
//!
//! Abilities are immutable combat actions owned by an enemy. Every
//! ability can duplicate itself so that cloning an enemy never shares
//! ability objects between two enemies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Secondary, theme-specific effect carried by an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Slows the target by a percentage.
    Slow { percent: u32 },
    /// Blinds the target for a number of turns.
    Blind { turns: u32 },
}

impl fmt::Display for AbilityEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbilityEffect::Slow { percent } => write!(f, "slow {}%", percent),
            AbilityEffect::Blind { turns } => write!(f, "blind {} turns", turns),
        }
    }
}

/// Trait for enemy abilities.
///
/// Implementations must be immutable once constructed. `duplicate` must
/// return a value-equal copy that shares no mutable state with `self`;
/// if an implementation ever carries mutable state it has to deep-copy it
/// there.
///
/// # Examples
///
/// ```rust
/// use enemyforge::ability::{Ability, FlameBreath};
///
/// let flame = FlameBreath::new();
/// let copy = flame.duplicate();
///
/// assert_eq!(copy.name(), "Flame Breath");
/// assert_eq!(copy.damage(), flame.damage());
/// ```
pub trait Ability: fmt::Debug + Send + Sync {
    /// Display name, also the identity of the ability.
    fn name(&self) -> &str;

    /// Damage dealt per use.
    fn damage(&self) -> u32;

    /// Human-readable description.
    fn description(&self) -> String;

    /// Theme-specific secondary effect, if any.
    fn effect(&self) -> Option<AbilityEffect> {
        None
    }

    /// Create an independent copy of this ability.
    fn duplicate(&self) -> Box<dyn Ability>;

    /// Snapshot of the observable attributes.
    fn info(&self) -> AbilityInfo {
        AbilityInfo {
            name: self.name().to_string(),
            damage: self.damage(),
            description: self.description(),
            effect: self.effect(),
        }
    }
}

impl Clone for Box<dyn Ability> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

/// Read-only, serializable view of an ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityInfo {
    pub name: String,
    pub damage: u32,
    pub description: String,
    pub effect: Option<AbilityEffect>,
}

/// Fire breath attack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlameBreath;

impl FlameBreath {
    pub const DAMAGE: u32 = 50;

    pub fn new() -> Self {
        Self
    }
}

impl Ability for FlameBreath {
    fn name(&self) -> &str {
        "Flame Breath"
    }

    fn damage(&self) -> u32 {
        Self::DAMAGE
    }

    fn description(&self) -> String {
        "Breathes fire dealing AoE damage.".to_string()
    }

    fn duplicate(&self) -> Box<dyn Ability> {
        Box::new(self.clone())
    }
}

/// Icy breath that also slows the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrostBreath {
    damage: u32,
    slow_percentage: u32,
}

impl FrostBreath {
    pub fn new() -> Self {
        Self {
            damage: 40,
            slow_percentage: 30,
        }
    }

    pub fn slow_percentage(&self) -> u32 {
        self.slow_percentage
    }
}

impl Default for FrostBreath {
    fn default() -> Self {
        Self::new()
    }
}

impl Ability for FrostBreath {
    fn name(&self) -> &str {
        "Frost Breath"
    }

    fn damage(&self) -> u32 {
        self.damage
    }

    fn description(&self) -> String {
        format!(
            "Breathes icy wind, dealing damage and slowing enemies by {}%.",
            self.slow_percentage
        )
    }

    fn effect(&self) -> Option<AbilityEffect> {
        Some(AbilityEffect::Slow {
            percent: self.slow_percentage,
        })
    }

    fn duplicate(&self) -> Box<dyn Ability> {
        Box::new(self.clone())
    }
}

/// Strike from the shadows that blinds the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowStrike {
    damage: u32,
    // in turns
    blind_duration: u32,
}

impl ShadowStrike {
    pub fn new() -> Self {
        Self {
            damage: 55,
            blind_duration: 2,
        }
    }

    pub fn blind_duration(&self) -> u32 {
        self.blind_duration
    }
}

impl Default for ShadowStrike {
    fn default() -> Self {
        Self::new()
    }
}

impl Ability for ShadowStrike {
    fn name(&self) -> &str {
        "Shadow Strike"
    }

    fn damage(&self) -> u32 {
        self.damage
    }

    fn description(&self) -> String {
        format!(
            "A powerful strike from the shadows dealing heavy damage and blinding the target for {} turns.",
            self.blind_duration
        )
    }

    fn effect(&self) -> Option<AbilityEffect> {
        Some(AbilityEffect::Blind {
            turns: self.blind_duration,
        })
    }

    fn duplicate(&self) -> Box<dyn Ability> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flame_breath() {
        let flame = FlameBreath::new();
        assert_eq!(flame.name(), "Flame Breath");
        assert_eq!(flame.damage(), 50);
        assert_eq!(flame.effect(), None);
    }

    #[test]
    fn test_frost_breath_effect() {
        let frost = FrostBreath::new();
        assert_eq!(frost.damage(), 40);
        assert_eq!(frost.slow_percentage(), 30);
        assert_eq!(frost.effect(), Some(AbilityEffect::Slow { percent: 30 }));
        assert!(frost.description().contains("30%"));
    }

    #[test]
    fn test_shadow_strike_effect() {
        let strike = ShadowStrike::new();
        assert_eq!(strike.damage(), 55);
        assert_eq!(strike.effect(), Some(AbilityEffect::Blind { turns: 2 }));
        assert!(strike.description().contains("2 turns"));
    }

    #[test]
    fn test_duplicate_is_value_equal() {
        let abilities: Vec<Box<dyn Ability>> = vec![
            Box::new(FlameBreath::new()),
            Box::new(FrostBreath::new()),
            Box::new(ShadowStrike::new()),
        ];

        for ability in &abilities {
            let copy = ability.duplicate();
            assert_eq!(copy.info(), ability.info());
            // Distinct allocations for sized abilities
            let original_ptr = &**ability as *const dyn Ability as *const u8;
            let copy_ptr = &*copy as *const dyn Ability as *const u8;
            if std::mem::size_of_val(&**ability) > 0 {
                assert_ne!(original_ptr, copy_ptr);
            }
        }
    }

    #[test]
    fn test_boxed_clone_uses_duplicate() {
        let original: Vec<Box<dyn Ability>> = vec![Box::new(ShadowStrike::new())];
        let cloned = original.clone();
        assert_eq!(cloned.len(), 1);
        assert_eq!(cloned[0].info(), original[0].info());
    }
}
