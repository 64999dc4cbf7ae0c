//! Catalog registry: lookup and grouped listing of known agents.

use super::definition::{AgentDescriptor, CatalogFile, Category};
use crate::error::{AgentsError, Result};
use std::collections::HashMap;

const CATALOG_TOML: &str = include_str!("../../agents/catalog.toml");

/// Immutable catalog of known agents, in declaration order.
#[derive(Debug)]
pub struct Catalog {
    agents: Vec<AgentDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Load the catalog embedded in the binary
    pub fn load() -> Result<Self> {
        Self::from_toml(CATALOG_TOML)
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| {
            AgentsError::InvalidConfig(format!("Failed to parse agent catalog: {}", e))
        })?;

        let mut index = HashMap::with_capacity(file.agents.len());
        for (pos, agent) in file.agents.iter().enumerate() {
            validate_descriptor(agent)?;
            if index.insert(agent.id.clone(), pos).is_some() {
                return Err(AgentsError::InvalidConfig(format!(
                    "Duplicate agent id in catalog: {}",
                    agent.id
                )));
            }
        }

        Ok(Self {
            agents: file.agents,
            index,
        })
    }

    /// Get an agent by ID
    pub fn get(&self, id: &str) -> Option<&AgentDescriptor> {
        self.index.get(id).map(|&pos| &self.agents[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All agents in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &AgentDescriptor> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// All agent IDs in declaration order
    pub fn ids(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.id.as_str()).collect()
    }

    /// Agents grouped by category, in fixed category order.
    ///
    /// Empty categories are omitted; entries keep declaration order.
    pub fn grouped(&self) -> Vec<(Category, Vec<&AgentDescriptor>)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let members: Vec<_> = self
                    .agents
                    .iter()
                    .filter(|a| a.category == category)
                    .collect();
                (!members.is_empty()).then_some((category, members))
            })
            .collect()
    }
}

fn validate_descriptor(agent: &AgentDescriptor) -> Result<()> {
    if agent.id.trim().is_empty() {
        return Err(AgentsError::InvalidConfig(
            "Agent id cannot be empty".to_string(),
        ));
    }
    if agent.id != normalize_id(&agent.id) {
        return Err(AgentsError::InvalidConfig(format!(
            "Agent id '{}' must not carry whitespace or a .md suffix",
            agent.id
        )));
    }
    if agent.description.trim().is_empty() {
        return Err(AgentsError::InvalidConfig(format!(
            "Agent '{}' description cannot be empty",
            agent.id
        )));
    }
    Ok(())
}

/// Normalize a user-supplied agent name: trims whitespace and strips a `.md` suffix.
pub fn normalize_id(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix(".md").unwrap_or(trimmed)
}
