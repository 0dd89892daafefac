//! Mindmap tree shape requested from the vision model.

use serde::{Deserialize, Serialize};

/// One node of the recursive mindmap tree.
///
/// The analyze endpoint relays whatever JSON the provider produced without
/// forcing it through this type; the struct documents the requested shape
/// and backs the mock provider and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub children: Vec<MindmapNode>,
}
