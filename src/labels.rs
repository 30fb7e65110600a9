use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label name -> index of the instruction that follows the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    map: BTreeMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `index`. Redefining a label silently replaces the old binding.
    pub fn define(&mut self, name: impl Into<String>, index: usize) {
        let name = name.into();
        if let Some(old) = self.map.insert(name.clone(), index) {
            tracing::debug!(label = %name, old, new = index, "label redefined");
        }
    }

    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    /// All labels bound to `index`, in name order.
    pub fn names_at(&self, index: usize) -> Vec<&str> {
        self.map
            .iter()
            .filter(|(_, i)| **i == index)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(n, &i)| (n.as_str(), i))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
