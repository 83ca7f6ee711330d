//! Data structures shown on the board.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The kinds of data structure the board can teach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataStructureType {
    /// Contiguous indexed array.
    Array,
    /// Singly or doubly linked list.
    LinkedList,
    /// Rooted tree.
    Tree,
    /// General graph.
    Graph,
    /// LIFO stack.
    Stack,
    /// FIFO queue.
    Queue,
}

impl DataStructureType {
    /// All kinds, in display order.
    pub const ALL: [Self; 6] = [
        Self::Array,
        Self::LinkedList,
        Self::Tree,
        Self::Graph,
        Self::Stack,
        Self::Queue,
    ];

    /// Wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::LinkedList => "linkedList",
            Self::Tree => "tree",
            Self::Graph => "graph",
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }
}

impl std::fmt::Display for DataStructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data structure snapshot: ordered elements plus free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStructure {
    /// Unique identifier.
    pub id: String,
    /// Structure kind.
    #[serde(rename = "type")]
    pub kind: DataStructureType,
    /// Elements in order.
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl DataStructure {
    /// Create an empty structure of the given kind.
    #[must_use]
    pub fn new(kind: DataStructureType) -> Self {
        Self {
            id: crate::new_id(),
            kind,
            elements: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Set the elements.
    #[must_use]
    pub fn with_elements(mut self, elements: Vec<serde_json::Value>) -> Self {
        self.elements = elements;
        self
    }
}
