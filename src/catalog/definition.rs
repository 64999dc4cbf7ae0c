//! Data structures for the embedded agent catalog.

use serde::Deserialize;
use std::fmt;

/// Agent category. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Core,
    Architecture,
    Quality,
    Operations,
    Specialized,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Core,
        Category::Architecture,
        Category::Quality,
        Category::Operations,
        Category::Specialized,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::Architecture => "Architecture",
            Category::Quality => "Quality",
            Category::Operations => "Operations",
            Category::Specialized => "Specialized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentDescriptor {
    pub id: String,
    pub category: Category,
    pub description: String,
    pub icon: String,

    /// Short role summary shown by `info`
    #[serde(default)]
    pub role: Option<String>,
}

/// Top-level layout of the catalog TOML file.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(rename = "agent", default)]
    pub agents: Vec<AgentDescriptor>,
}
