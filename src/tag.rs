//! Tag module.
//!
//! Elements, AI behaviors and loot themes are all short upper-case
//! labels (`"FIRE"`, `"TACTICAL"`, ...). [`Tag`] holds one behind an
//! `Arc<str>`: enemies are cloned often and clones of a tag share the
//! same text instead of copying it.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Immutable label for an element, an AI behavior or a loot theme.
///
/// Serialized as a plain string. Compares equal to `str` so call sites
/// can check a tag without building one.
///
/// # Examples
///
/// ```rust
/// use enemyforge::Tag;
///
/// let fire = Tag::new("FIRE");
/// let same: Tag = String::from("FIRE").into();
///
/// assert_eq!(fire, same);
/// assert_eq!(fire, "FIRE");
/// assert_eq!(Tag::none().as_str(), Tag::NONE);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Tag(Arc<str>);

impl Tag {
    /// Element of enemies that have none; also the minion preset element.
    pub const NONE: &'static str = "NONE";

    /// AI behavior of enemies built without one.
    pub const IDLE: &'static str = "IDLE";

    pub fn new(label: &str) -> Self {
        Self(label.into())
    }

    pub fn none() -> Self {
        Self::new(Self::NONE)
    }

    pub fn idle() -> Self {
        Self::new(Self::IDLE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        Self(label.into())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0.as_ref().to_owned()
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
