//! Numbering definitions: abstract list definitions and their instances.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IndentSpec, NumberFormat};

/// Definition of one list level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberingLevel {
    /// Zero-based level index
    pub level: u8,
    /// Counter format
    pub format: NumberFormat,
    /// Marker template, e.g. `"%1."` or `"•"`
    pub text: String,
    /// First counter value
    pub start: u32,
    /// Level indentation in points
    pub indent: IndentSpec,
    /// Definition was replaced or restarted by a numbering instance
    pub overridden: bool,
}

impl Default for NumberingLevel {
    fn default() -> Self {
        Self {
            level: 0,
            format: NumberFormat::Decimal,
            text: "%1.".to_string(),
            start: 1,
            indent: IndentSpec::default(),
            overridden: false,
        }
    }
}

impl NumberingLevel {
    /// Create a level definition starting at 1 with no indentation.
    pub fn new(level: u8, format: NumberFormat, text: impl Into<String>) -> Self {
        Self {
            level,
            format,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Decimal level with the conventional `"%N."` template.
    pub fn decimal(level: u8) -> Self {
        Self::new(level, NumberFormat::Decimal, format!("%{}.", level + 1))
    }

    /// Bullet level.
    pub fn bullet(level: u8, glyph: impl Into<String>) -> Self {
        Self::new(level, NumberFormat::Bullet, glyph)
    }

    /// Set the first counter value.
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the level indentation.
    pub fn with_indent(mut self, indent: IndentSpec) -> Self {
        self.indent = indent;
        self
    }

    /// Build a definition for a list paragraph that has no numbering id.
    ///
    /// The format is guessed from the marker: any digit or placeholder
    /// makes it decimal, anything else is a bullet.
    pub fn from_marker(level: u8, marker: &str, indent: IndentSpec) -> Self {
        let format = if marker.chars().any(|c| c.is_ascii_digit()) {
            NumberFormat::Decimal
        } else {
            NumberFormat::Bullet
        };
        Self {
            level,
            format,
            text: marker.to_string(),
            start: 1,
            indent,
            overridden: false,
        }
    }
}

/// An abstract list definition: up to nine levels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbstractNumbering {
    /// Abstract definition id
    pub id: u32,
    /// Level definitions
    #[serde(default)]
    pub levels: Vec<NumberingLevel>,
}

impl AbstractNumbering {
    /// Create an empty abstract definition.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            levels: Vec::new(),
        }
    }

    /// Add a level definition.
    pub fn with_level(mut self, level: NumberingLevel) -> Self {
        self.levels.push(level);
        self
    }

    /// Definition for `level`, clamped to the deepest defined level at or below it.
    pub fn level(&self, level: u8) -> Option<&NumberingLevel> {
        self.levels
            .iter()
            .filter(|l| l.level <= level)
            .max_by_key(|l| l.level)
            .or_else(|| self.levels.iter().min_by_key(|l| l.level))
    }
}

/// Per-level override carried by a numbering instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelOverride {
    /// Level the override applies to
    pub level: u8,
    /// Replacement start value
    pub start: Option<u32>,
    /// Replacement level definition
    pub definition: Option<NumberingLevel>,
}

/// A numbering instance: what paragraphs reference by numbering id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberingInstance {
    /// Numbering id referenced by paragraphs
    pub num_id: u32,
    /// Abstract definition it instantiates
    pub abstract_id: u32,
    /// Level overrides
    #[serde(default)]
    pub overrides: Vec<LevelOverride>,
}

impl NumberingInstance {
    /// Create an instance without overrides.
    pub fn new(num_id: u32, abstract_id: u32) -> Self {
        Self {
            num_id,
            abstract_id,
            overrides: Vec::new(),
        }
    }

    /// Restart `level` at `start`.
    pub fn with_start_override(mut self, level: u8, start: u32) -> Self {
        self.overrides.push(LevelOverride {
            level,
            start: Some(start),
            definition: None,
        });
        self
    }

    /// Replace the definition of a level.
    pub fn with_level_override(mut self, definition: NumberingLevel) -> Self {
        self.overrides.push(LevelOverride {
            level: definition.level,
            start: None,
            definition: Some(definition),
        });
        self
    }
}

/// The numbering definition table of a document.
///
/// Static for the lifetime of a document: resolver resets keep it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberingTable {
    /// Abstract definitions by id
    #[serde(default)]
    pub abstracts: BTreeMap<u32, AbstractNumbering>,
    /// Instances by numbering id
    #[serde(default)]
    pub instances: BTreeMap<u32, NumberingInstance>,
}

impl NumberingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an abstract definition.
    pub fn add_abstract(&mut self, definition: AbstractNumbering) {
        self.abstracts.insert(definition.id, definition);
    }

    /// Register a numbering instance.
    pub fn add_instance(&mut self, instance: NumberingInstance) {
        self.instances.insert(instance.num_id, instance);
    }

    /// Builder form of [`NumberingTable::add_abstract`].
    pub fn with_abstract(mut self, definition: AbstractNumbering) -> Self {
        self.add_abstract(definition);
        self
    }

    /// Builder form of [`NumberingTable::add_instance`].
    pub fn with_instance(mut self, instance: NumberingInstance) -> Self {
        self.add_instance(instance);
        self
    }

    /// Check if a numbering id resolves to a definition.
    pub fn contains(&self, num_id: u32) -> bool {
        self.instances
            .get(&num_id)
            .and_then(|i| self.abstracts.get(&i.abstract_id))
            .is_some_and(|a| !a.levels.is_empty())
    }

    /// Effective definition of `(num_id, level)`.
    ///
    /// Levels beyond the definition table clamp to the deepest defined
    /// level. Instance overrides are applied and mark the result
    /// `overridden`.
    pub fn level(&self, num_id: u32, level: u8) -> Option<NumberingLevel> {
        let instance = self.instances.get(&num_id)?;
        let definition = self.abstracts.get(&instance.abstract_id)?;
        let mut resolved = definition.level(level)?.clone();
        let level = resolved.level;

        for ov in instance.overrides.iter().filter(|o| o.level == level) {
            if let Some(replacement) = &ov.definition {
                resolved = replacement.clone();
                resolved.level = level;
                resolved.overridden = true;
            }
            if let Some(start) = ov.start {
                resolved.start = start;
                resolved.overridden = true;
            }
        }
        Some(resolved)
    }
}
