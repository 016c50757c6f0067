use hashbrown::HashMap;
use itertools::Itertools;
use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::net::{arc::Arc, error::NetError, place::Place, transition::Transition};

pub mod arc;
pub mod error;
pub mod format;
pub mod grammar;
pub mod place;
pub mod transition;

/// Aggregate owning all places, transitions, and arcs of a net. Place and
/// transition names share one namespace. Arcs are kept both as an ordered
/// list and folded into each transition's input/output maps; a successful
/// `add_arc` updates both views, a failed one updates neither.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetriNet {
    places: HashMap<String, Place>,
    transitions: HashMap<String, Transition>,
    arcs: Vec<Arc>,
    positions: HashMap<String, (f64, f64)>,
}

impl PetriNet {
    pub fn new() -> Self {
        PetriNet {
            places: HashMap::new(),
            transitions: HashMap::new(),
            arcs: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn name_in_use(&self, name: &str) -> bool {
        self.places.contains_key(name) || self.transitions.contains_key(name)
    }

    pub fn add_place(&mut self, name: &str, tokens: u64) -> Result<(), NetError> {
        if self.name_in_use(name) {
            return Err(NetError::DuplicateName(name.to_owned()));
        }

        self.places.insert(name.to_owned(), Place::new(name, tokens));
        self.positions.insert(name.to_owned(), random_position());
        Ok(())
    }

    pub fn add_transition(&mut self, name: &str) -> Result<(), NetError> {
        if self.name_in_use(name) {
            return Err(NetError::DuplicateName(name.to_owned()));
        }

        self.transitions
            .insert(name.to_owned(), Transition::new(name));
        self.positions.insert(name.to_owned(), random_position());
        Ok(())
    }

    /// Adds an arc, inferring its direction from endpoint membership. A
    /// place as source and a transition as target makes an input arc of that
    /// transition, the reverse an output arc. Arcs between two places or two
    /// transitions are rejected with `InvalidArc`, arcs touching an
    /// undeclared name with `UnknownNode`.
    pub fn add_arc(&mut self, source: &str, target: &str, weight: u64) -> Result<(), NetError> {
        let source_is_place = self.places.contains_key(source);
        let source_is_transition = self.transitions.contains_key(source);
        let target_is_place = self.places.contains_key(target);
        let target_is_transition = self.transitions.contains_key(target);

        if !source_is_place && !source_is_transition {
            return Err(NetError::UnknownNode(source.to_owned()));
        }
        if !target_is_place && !target_is_transition {
            return Err(NetError::UnknownNode(target.to_owned()));
        }

        if source_is_place && target_is_transition {
            if let Some(transition) = self.transitions.get_mut(target) {
                transition.add_input_arc(source, weight)?;
            }
        } else if source_is_transition && target_is_place {
            if let Some(transition) = self.transitions.get_mut(source) {
                transition.add_output_arc(target, weight)?;
            }
        } else {
            return Err(NetError::InvalidArc {
                from: source.to_owned(),
                to: target.to_owned(),
            });
        }

        self.arcs
            .push(Arc::new(source.to_owned(), target.to_owned(), weight));
        Ok(())
    }

    /// Explicit marking assignment during construction.
    pub fn set_tokens(&mut self, place: &str, tokens: u64) -> Result<(), NetError> {
        match self.places.get_mut(place) {
            Some(p) => {
                p.set_tokens(tokens);
                Ok(())
            }
            None => Err(NetError::UnknownPlace(place.to_owned())),
        }
    }

    /// Fires a transition: consumes the input weights, produces the output
    /// weights. Enablement is checked before any place is touched, so a
    /// failed fire leaves the marking unchanged.
    pub fn fire(&mut self, transition: &str) -> Result<(), NetError> {
        let Some(t) = self.transitions.get(transition) else {
            return Err(NetError::UnknownNode(transition.to_owned()));
        };

        if !t.is_enabled(&self.places) {
            return Err(NetError::NotEnabled(transition.to_owned()));
        }

        for (place, weight) in t.input_arcs() {
            if let Some(p) = self.places.get_mut(place) {
                p.consume(*weight);
            }
        }
        for (place, weight) in t.output_arcs() {
            if let Some(p) = self.places.get_mut(place) {
                p.produce(*weight);
            }
        }

        Ok(())
    }

    /// Weight-aware enabling check for a single transition, `None` if the
    /// name is not a transition.
    pub fn is_enabled(&self, transition: &str) -> Option<bool> {
        self.transitions
            .get(transition)
            .map(|t| t.is_enabled(&self.places))
    }

    /// Structural boundedness: true iff no place holds a negative token
    /// count. Token counts are unsigned and every mutation rejects deficits,
    /// so a constructed net always satisfies this. Not formal k-boundedness.
    pub fn is_bounded(&self) -> bool {
        true
    }

    /// Coarse liveness witness: true iff at least one transition is enabled
    /// under the weight-aware rule.
    pub fn has_live_transitions(&self) -> bool {
        self.transitions.values().any(|t| t.is_enabled(&self.places))
    }

    pub fn place(&self, name: &str) -> Option<&Place> {
        self.places.get(name)
    }

    pub fn transition(&self, name: &str) -> Option<&Transition> {
        self.transitions.get(name)
    }

    /// Layout position of a node, for presentation consumers. Positions have
    /// no semantic meaning.
    pub fn position(&self, name: &str) -> Option<(f64, f64)> {
        self.positions.get(name).copied()
    }

    pub fn place_names(&self) -> Vec<&str> {
        self.places.keys().map(String::as_str).sorted().collect()
    }

    pub fn transition_names(&self) -> Vec<&str> {
        self.transitions.keys().map(String::as_str).sorted().collect()
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Snapshot of all token counts, sorted by place name.
    pub fn marking(&self) -> Vec<(String, u64)> {
        self.places
            .values()
            .map(|p| (p.name().to_owned(), p.tokens()))
            .sorted()
            .collect()
    }
}

impl Default for PetriNet {
    fn default() -> Self {
        PetriNet::new()
    }
}

/// Layout positions carry no meaning, so net equality only considers
/// structure and marking.
impl PartialEq for PetriNet {
    fn eq(&self, other: &Self) -> bool {
        self.places == other.places
            && self.transitions == other.transitions
            && self.arcs == other.arcs
    }
}

fn random_position() -> (f64, f64) {
    let mut rng = rand::rng();
    (rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
}
