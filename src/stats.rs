//! Core combat stats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health, damage, defense and speed of an enemy.
///
/// Values are signed so that scaling by a non-positive factor stays
/// representable; nothing here clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub health: i32,
    pub damage: i32,
    pub defense: i32,
    pub speed: i32,
}

impl StatBlock {
    pub const fn new(health: i32, damage: i32, defense: i32, speed: i32) -> Self {
        Self {
            health,
            damage,
            defense,
            speed,
        }
    }

    /// Scale health, damage and defense by `factor`, truncating toward zero.
    ///
    /// Speed is left as is. The result is not clamped, so a factor of zero
    /// or below yields zero or negative health.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enemyforge::StatBlock;
    ///
    /// let stats = StatBlock::new(100, 10, 5, 10).scaled(2.5);
    /// assert_eq!(stats, StatBlock::new(250, 25, 12, 10));
    /// ```
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            health: scale(self.health, factor),
            damage: scale(self.damage, factor),
            defense: scale(self.defense, factor),
            speed: self.speed,
        }
    }
}

// `as` saturates on overflow and maps NaN to 0.
fn scale(value: i32, factor: f64) -> i32 {
    (value as f64 * factor) as i32
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Health: {} | Damage: {} | Defense: {} | Speed: {}",
            self.health, self.damage, self.defense, self.speed
        )
    }
}
