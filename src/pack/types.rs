use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Pack colours. Declaration order is the canonical WUBRG order used in labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Colour {
    pub const ALL: [Colour; 5] = [
        Colour::White,
        Colour::Blue,
        Colour::Black,
        Colour::Red,
        Colour::Green,
    ];

    /// Convert to the single character representation
    pub fn to_char(&self) -> char {
        match self {
            Colour::White => 'W',
            Colour::Blue => 'U',
            Colour::Black => 'B',
            Colour::Red => 'R',
            Colour::Green => 'G',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Creature types that packs are built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreatureType {
    Bird,
    Rat,
    Lizard,
    Raccoon,
    Rabbit,
    Bat,
    Otter,
    Squirrel,
    Mouse,
    Frog,
}

impl CreatureType {
    pub const ALL: [CreatureType; 10] = [
        CreatureType::Bird,
        CreatureType::Rat,
        CreatureType::Lizard,
        CreatureType::Raccoon,
        CreatureType::Rabbit,
        CreatureType::Bat,
        CreatureType::Otter,
        CreatureType::Squirrel,
        CreatureType::Mouse,
        CreatureType::Frog,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CreatureType::Bird => "Bird",
            CreatureType::Rat => "Rat",
            CreatureType::Lizard => "Lizard",
            CreatureType::Raccoon => "Raccoon",
            CreatureType::Rabbit => "Rabbit",
            CreatureType::Bat => "Bat",
            CreatureType::Otter => "Otter",
            CreatureType::Squirrel => "Squirrel",
            CreatureType::Mouse => "Mouse",
            CreatureType::Frog => "Frog",
        }
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How well two packs play together. Variants are ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Playability {
    Unplayable,
    Weak,
    Medium,
    Strong,
}

impl Playability {
    pub const ALL: [Playability; 4] = [
        Playability::Unplayable,
        Playability::Weak,
        Playability::Medium,
        Playability::Strong,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Playability::Unplayable => "Unplayable",
            Playability::Weak => "Weak",
            Playability::Medium => "Medium",
            Playability::Strong => "Strong",
        }
    }
}

impl fmt::Display for Playability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("Pack '{0}' has no colours")]
    NoColours(String),
    #[error("Pack '{0}' has no creature types")]
    NoCreatureTypes(String),
    #[error("Pack name must not be empty")]
    EmptyName,
    #[error("Pack '{name}' does not have exactly one colour (has {count})")]
    NotSingleColour { name: String, count: usize },
    #[error("Pack '{name}' does not have exactly one creature type (has {count})")]
    NotSingleCreatureType { name: String, count: usize },
}

/// Raw pack record as it appears in the packs file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackRecord {
    pub name: String,
    pub colours: Vec<Colour>,
    pub creature_types: Vec<CreatureType>,
}

/// A draftable pack: a name plus its colour and creature-type tags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pack {
    name: String,
    colours: BTreeSet<Colour>,
    creature_types: BTreeSet<CreatureType>,
    label: String,
}

impl Pack {
    pub fn new(
        name: impl Into<String>,
        colours: impl IntoIterator<Item = Colour>,
        creature_types: impl IntoIterator<Item = CreatureType>,
    ) -> Result<Self, PackError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PackError::EmptyName);
        }
        let colours: BTreeSet<Colour> = colours.into_iter().collect();
        if colours.is_empty() {
            return Err(PackError::NoColours(name));
        }
        let creature_types: BTreeSet<CreatureType> = creature_types.into_iter().collect();
        if creature_types.is_empty() {
            return Err(PackError::NoCreatureTypes(name));
        }

        let colour_code: String = colours.iter().map(Colour::to_char).collect();
        let label = format!("{} {}", colour_code, name);

        Ok(Pack {
            name,
            colours,
            creature_types,
            label,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colours(&self) -> &BTreeSet<Colour> {
        &self.colours
    }

    pub fn creature_types(&self) -> &BTreeSet<CreatureType> {
        &self.creature_types
    }

    /// Display label: colours in WUBRG order, a space, then the name (e.g. "WU Birds")
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_single_colour(&self) -> bool {
        self.colours.len() == 1
    }

    /// The pack's only colour
    pub fn colour(&self) -> Result<Colour, PackError> {
        match self.colours.iter().next() {
            Some(colour) if self.colours.len() == 1 => Ok(*colour),
            _ => Err(PackError::NotSingleColour {
                name: self.name.clone(),
                count: self.colours.len(),
            }),
        }
    }

    /// The pack's only creature type
    pub fn creature_type(&self) -> Result<CreatureType, PackError> {
        match self.creature_types.iter().next() {
            Some(creature_type) if self.creature_types.len() == 1 => Ok(*creature_type),
            _ => Err(PackError::NotSingleCreatureType {
                name: self.name.clone(),
                count: self.creature_types.len(),
            }),
        }
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl TryFrom<PackRecord> for Pack {
    type Error = PackError;

    fn try_from(record: PackRecord) -> Result<Self, Self::Error> {
        Pack::new(record.name, record.colours, record.creature_types)
    }
}
