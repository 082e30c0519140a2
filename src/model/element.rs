use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The fixed set of categories an extracted element can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    End,
    Means,
    Way,
    Context,
    Risk,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 5] = [
        ElementCategory::End,
        ElementCategory::Means,
        ElementCategory::Way,
        ElementCategory::Context,
        ElementCategory::Risk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::End => "End",
            ElementCategory::Means => "Means",
            ElementCategory::Way => "Way",
            ElementCategory::Context => "Context",
            ElementCategory::Risk => "Risk",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementCategory {
    type Err = String;

    // Exact, case-sensitive match: the End/Means partition depends on it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// One strategic element recognised in the source text.
///
/// Fields are private so an element cannot change after extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategicElement {
    id: Uuid,
    name: String,
    category: ElementCategory,
    metadata: Map<String, Value>,
}

impl StrategicElement {
    /// Builds an element with a fresh random identifier.
    pub fn new(
        name: impl Into<String>,
        category: ElementCategory,
        metadata: Map<String, Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            metadata,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ElementCategory {
        self.category
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn is(&self, category: ElementCategory) -> bool {
        self.category == category
    }
}
