use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::net::{error::NetError, place::Place};

/// Petri net transition. Input and output arcs map place names to positive
/// token weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    name: String,
    input_arcs: HashMap<String, u64>,
    output_arcs: HashMap<String, u64>,
}

impl Transition {
    pub fn new(name: &str) -> Self {
        Transition {
            name: name.to_owned(),
            input_arcs: HashMap::new(),
            output_arcs: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requires `weight` tokens from `place` for this transition to fire.
    /// Registering the same place again overwrites the weight.
    pub fn add_input_arc(&mut self, place: &str, weight: u64) -> Result<(), NetError> {
        if weight == 0 {
            return Err(NetError::InvalidWeight(weight));
        }
        self.input_arcs.insert(place.to_owned(), weight);
        Ok(())
    }

    /// Produces `weight` tokens into `place` when this transition fires.
    pub fn add_output_arc(&mut self, place: &str, weight: u64) -> Result<(), NetError> {
        if weight == 0 {
            return Err(NetError::InvalidWeight(weight));
        }
        self.output_arcs.insert(place.to_owned(), weight);
        Ok(())
    }

    /// Weight-aware enabling: every input place must hold at least as many
    /// tokens as its arc weight. A transition with no input arcs is vacuously
    /// enabled. Note that the analyzer uses a different, weight-ignoring
    /// notion of enabling on top of this one.
    pub fn is_enabled(&self, places: &HashMap<String, Place>) -> bool {
        self.input_arcs
            .iter()
            .all(|(place, weight)| places.get(place).is_some_and(|p| p.tokens() >= *weight))
    }

    pub fn input_arcs(&self) -> &HashMap<String, u64> {
        &self.input_arcs
    }

    pub fn output_arcs(&self) -> &HashMap<String, u64> {
        &self.output_arcs
    }
}
