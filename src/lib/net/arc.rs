use serde::{Deserialize, Serialize};

/// A directed, weighted edge between a place and a transition. The net keeps
/// arcs in insertion order so iteration and display stay reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    source: String,
    target: String,
    weight: u64,
}

impl Arc {
    pub fn new(source: String, target: String, weight: u64) -> Self {
        Arc {
            source,
            target,
            weight,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }
}
