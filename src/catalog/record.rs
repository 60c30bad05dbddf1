//! Static content records shown by the directory.
//!
//! Records are plain data. Field-level rules live in [`crate::catalog::schema`]; enum
//! membership is enforced here through typed deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A curated external site listed in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub category: Category,
    /// Path of the screenshot relative to the site root (e.g. `/images/void.jpg`)
    pub image: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Design,
    Saas,
    Ecommerce,
    Portfolio,
    Nothing,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Design,
        Category::Saas,
        Category::Ecommerce,
        Category::Portfolio,
        Category::Nothing,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Design => "design",
            Category::Saas => "saas",
            Category::Ecommerce => "ecommerce",
            Category::Portfolio => "portfolio",
            Category::Nothing => "nothing",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A curated link dressed up as a loot item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub url: String,
    pub lore: String,
    pub slot: Slot,
    pub item_type: ItemType,
    pub rarity: Rarity,
    /// Kept signed so that zero and negative values reach the schema check
    pub durability: i64,
    pub genre: Genre,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Utile,
    Nawak,
    Inutile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Accessory,
    Relic,
}

impl ItemType {
    /// Label printed on artifact cards
    pub fn label(self) -> &'static str {
        match self {
            ItemType::Weapon => "ARME",
            ItemType::Armor => "ARMURE",
            ItemType::Accessory => "ACCESSOIRE",
            ItemType::Relic => "RELIQUE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
}

impl Rarity {
    /// Display order, rarest first
    pub const ORDER: [Rarity; 3] = [Rarity::Legendary, Rarity::Epic, Rarity::Rare];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Metal,
    Rock,
    Blues,
    Classical,
}

/// Filter node for the genre skill tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreNode {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

/// Filter entry for artifact slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotFilter {
    pub id: String,
    pub name: String,
}
