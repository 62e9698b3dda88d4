//! Tool catalog types.

use serde::{Deserialize, Serialize};

/// A group of related tools (e.g. "Image Tools").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub id: String,
    pub category: String,
    pub icon: String,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// A single file tool listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub category: String,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub logo: String,
}
