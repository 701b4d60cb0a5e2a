//! Prototype registry module.
//!
//! Provides the `EnemyRegistry` type, a store of named template enemies
//! that hands out independent clones on demand.

use crate::enemy::Enemy;
use crate::error::EnemyError;
use log::{debug, warn};
use std::collections::HashMap;

/// Store of template enemies keyed by name.
///
/// Templates are never handed out. Every
/// [`create_from_template`](EnemyRegistry::create_from_template) call
/// returns a fresh deep clone, so callers can mutate what they get back
/// without touching the template or each other.
///
/// The registry is a plain owned value with no internal locking. A host
/// sharing it across threads must serialize registrations against
/// lookups itself.
///
/// # Examples
///
/// ```rust
/// use enemyforge::builder::BasicEnemyBuilder;
/// use enemyforge::director::EnemyDirector;
/// use enemyforge::factory::FireComponentFactory;
/// use enemyforge::EnemyRegistry;
///
/// let mut director = EnemyDirector::new(BasicEnemyBuilder::new());
/// let goblin = director.create_minion("Goblin", &FireComponentFactory).unwrap();
///
/// let mut registry = EnemyRegistry::new();
/// registry.register_template("goblin", goblin);
///
/// let mut elite = registry.create_from_template("goblin").unwrap();
/// elite.multiply_stats(2.0);
///
/// let regular = registry.create_from_template("goblin").unwrap();
/// assert_eq!(elite.health(), 200);
/// assert_eq!(regular.health(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnemyRegistry {
    templates: HashMap<String, Enemy>,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Store `enemy` as the template under `key`.
    ///
    /// An existing template under the same key is replaced (last write
    /// wins); the replacement is logged at warn level.
    pub fn register_template(&mut self, key: impl Into<String>, enemy: Enemy) {
        let key = key.into();
        debug!("Registering template '{}' ({})", key, enemy.name());
        if let Some(previous) = self.templates.insert(key.clone(), enemy) {
            warn!(
                "Template '{}' replaced; previous template was '{}'",
                key,
                previous.name()
            );
        }
    }

    /// Clone the template registered under `key`.
    ///
    /// # Errors
    ///
    /// [`EnemyError::TemplateNotFound`] when no template is registered
    /// under `key`.
    pub fn create_from_template(&self, key: &str) -> Result<Enemy, EnemyError> {
        let template = self
            .templates
            .get(key)
            .ok_or_else(|| EnemyError::TemplateNotFound(key.to_string()))?;
        debug!("Cloning template '{}'", key);
        Ok(template.clone())
    }

    /// Registered keys, sorted.
    pub fn list_templates(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.templates.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BasicEnemyBuilder, EnemyBuilder};
    use crate::loot::LootTable;

    fn enemy(name: &str, health: i32) -> Enemy {
        BasicEnemyBuilder::new()
            .set_name(name)
            .set_health(health)
            .set_loot_table(LootTable::shadow())
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_template() {
        let registry = EnemyRegistry::new();
        let err = registry.create_from_template("ghost").unwrap_err();
        assert_eq!(err, EnemyError::TemplateNotFound("ghost".to_string()));
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = EnemyRegistry::new();
        registry.register_template("boss", enemy("Old Boss", 10));
        registry.register_template("boss", enemy("New Boss", 20));

        assert_eq!(registry.len(), 1);
        let clone = registry.create_from_template("boss").unwrap();
        assert_eq!(clone.name(), "New Boss");
        assert_eq!(clone.health(), 20);
    }

    #[test]
    fn test_list_templates_sorted() {
        let mut registry = EnemyRegistry::new();
        assert!(registry.is_empty());
        registry.register_template("skeleton", enemy("Skeleton", 40));
        registry.register_template("goblin", enemy("Goblin", 100));
        registry.register_template("dragon", enemy("Dragon", 5000));

        assert_eq!(
            registry.list_templates(),
            vec!["dragon", "goblin", "skeleton"]
        );
        assert!(registry.contains("goblin"));
        assert!(!registry.contains("orc"));
    }

    #[test]
    fn test_clones_are_not_the_template() {
        let mut registry = EnemyRegistry::new();
        registry.register_template("goblin", enemy("Goblin", 100));

        let mut first = registry.create_from_template("goblin").unwrap();
        first.set_element("FIRE");
        first.multiply_stats(4.0);

        let template = &registry.templates["goblin"];
        assert_eq!(template.health(), 100);
        assert_eq!(template.element().as_str(), "NONE");
        assert!(!std::ptr::eq(template.loot_table(), first.loot_table()));
    }
}
