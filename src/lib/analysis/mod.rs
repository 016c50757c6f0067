use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};
use serde::{Deserialize, Serialize};

use crate::{
    analysis::report::{AnalysisReport, AnalysisStatistics},
    logger::{LogLevel, Logger},
    net::{PetriNet, error::NetError, grammar::NetDefinition},
};

pub mod report;

/// Node data of the analyzer's bipartite graph view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetNode {
    Place(String),
    Transition(String),
}

impl NetNode {
    pub fn name(&self) -> &str {
        match self {
            NetNode::Place(name) | NetNode::Transition(name) => name,
        }
    }

    pub fn is_place(&self) -> bool {
        matches!(self, NetNode::Place(_))
    }
}

/// Structural analysis over a net snapshot.
///
/// The analyzer works on names, unweighted arc pairs, and an externally
/// supplied marking, so it can judge inputs that a `PetriNet` itself would
/// never hold (negative counts in particular). Its enabling rule ignores arc
/// weights entirely: a transition counts as enabled when it has at least one
/// predecessor and every predecessor holds a strictly positive marking. This
/// intentionally differs from the weight-aware rule the net applies when
/// firing; both rules are part of the public contract.
pub struct NetAnalyzer<'a> {
    places: HashSet<String>,
    transitions: HashSet<String>,
    marking: HashMap<String, i64>,
    graph: DiGraph<NetNode, ()>,
    nodes: HashMap<String, NodeIndex>,
    logger: Option<&'a Logger>,
    analysis_start_time: Option<std::time::Instant>,
}

impl<'a> NetAnalyzer<'a> {
    pub fn new(logger: Option<&'a Logger>) -> Self {
        NetAnalyzer {
            places: HashSet::new(),
            transitions: HashSet::new(),
            marking: HashMap::new(),
            graph: DiGraph::new(),
            nodes: HashMap::new(),
            logger,
            analysis_start_time: None,
        }
    }

    /// Validates and loads a net snapshot: every arc endpoint must be a
    /// declared place or transition, every marking key a declared place.
    /// Validation runs before anything is stored, so a failed load leaves
    /// the previously loaded snapshot intact.
    pub fn load(
        &mut self,
        places: Vec<String>,
        transitions: Vec<String>,
        arcs: Vec<(String, String)>,
        marking: HashMap<String, i64>,
    ) -> Result<(), NetError> {
        let place_set: HashSet<String> = places.into_iter().collect();
        let transition_set: HashSet<String> = transitions.into_iter().collect();

        for (source, target) in &arcs {
            if !place_set.contains(source) && !transition_set.contains(source) {
                return Err(NetError::UnknownNode(source.clone()));
            }
            if !place_set.contains(target) && !transition_set.contains(target) {
                return Err(NetError::UnknownNode(target.clone()));
            }
        }

        for place in marking.keys() {
            if !place_set.contains(place) {
                return Err(NetError::UnknownPlace(place.clone()));
            }
        }

        self.places = place_set;
        self.transitions = transition_set;
        self.marking = marking;
        self.rebuild_graph(&arcs);

        if let Some(logger) = self.logger {
            logger
                .object("Loaded Net")
                .add_field("places", &self.places.len().to_string())
                .add_field("transitions", &self.transitions.len().to_string())
                .add_field("arcs", &arcs.len().to_string())
                .log(LogLevel::Info);
        }

        Ok(())
    }

    /// Loads the snapshot described by parsed construction grammar entries.
    pub fn load_definition(&mut self, definition: &NetDefinition) -> Result<(), NetError> {
        self.load(
            definition.places.iter().map(|s| s.to_string()).collect(),
            definition
                .transitions
                .iter()
                .map(|s| s.to_string())
                .collect(),
            definition
                .arcs
                .iter()
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect(),
            definition
                .marking
                .iter()
                .map(|(place, value)| (place.to_string(), *value))
                .collect(),
        )
    }

    /// Loads the current state of a constructed net. Arc weights are dropped
    /// on purpose, the analyzer does not use them. Token counts past
    /// `i64::MAX` saturate.
    pub fn load_petri_net(&mut self, net: &PetriNet) -> Result<(), NetError> {
        self.load(
            net.place_names().iter().map(|s| s.to_string()).collect(),
            net.transition_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            net.arcs()
                .iter()
                .map(|arc| (arc.source().to_owned(), arc.target().to_owned()))
                .collect(),
            net.marking()
                .into_iter()
                .map(|(place, tokens)| (place, i64::try_from(tokens).unwrap_or(i64::MAX)))
                .collect(),
        )
    }

    fn rebuild_graph(&mut self, arcs: &[(String, String)]) {
        self.graph = DiGraph::new();
        self.nodes = HashMap::new();

        for place in self.places.iter().sorted() {
            let index = self.graph.add_node(NetNode::Place(place.clone()));
            self.nodes.insert(place.clone(), index);
        }
        for transition in self.transitions.iter().sorted() {
            let index = self.graph.add_node(NetNode::Transition(transition.clone()));
            self.nodes.insert(transition.clone(), index);
        }
        for (source, target) in arcs {
            self.graph
                .add_edge(self.nodes[source], self.nodes[target], ());
        }
    }

    /// True iff every marking value is a non-negative count.
    pub fn analyze_boundedness(&self) -> bool {
        self.marking.values().all(|tokens| *tokens >= 0)
    }

    /// Fraction of transitions that are structurally live: at least one
    /// incoming arc, at least one outgoing arc, and every predecessor marked
    /// strictly positive. A net without transitions scores 0.0.
    pub fn analyze_liveness(&self) -> f64 {
        if self.transitions.is_empty() {
            return 0.0;
        }

        let live = self
            .transitions
            .iter()
            .filter(|transition| self.is_structurally_live(transition))
            .count();

        live as f64 / self.transitions.len() as f64
    }

    /// Transitions with a non-empty predecessor set where every predecessor
    /// holds a strictly positive marking, sorted by name.
    pub fn enabled_transitions(&self) -> Vec<String> {
        self.transitions
            .iter()
            .filter(|transition| self.transition_can_fire(transition))
            .sorted()
            .cloned()
            .collect()
    }

    fn transition_can_fire(&self, transition: &str) -> bool {
        let Some(&index) = self.nodes.get(transition) else {
            return false;
        };

        let mut inputs = self
            .graph
            .neighbors_directed(index, Direction::Incoming)
            .peekable();

        if inputs.peek().is_none() {
            return false;
        }

        // predecessors that are not places read as marking 0 and block
        inputs.all(|input| self.marked_positive(self.graph[input].name()))
    }

    fn is_structurally_live(&self, transition: &str) -> bool {
        let Some(&index) = self.nodes.get(transition) else {
            return false;
        };

        if self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .next()
            .is_none()
        {
            return false;
        }

        self.transition_can_fire(transition)
    }

    fn marked_positive(&self, name: &str) -> bool {
        self.marking.get(name).copied().unwrap_or(0) > 0
    }

    /// Marking snapshot sorted by place name.
    pub fn marking_snapshot(&self) -> Vec<(String, i64)> {
        self.marking
            .iter()
            .map(|(place, tokens)| (place.clone(), *tokens))
            .sorted()
            .collect()
    }

    /// Runs all analyses and bundles them with counts and wall time.
    pub fn analyze(&mut self) -> AnalysisReport {
        self.analysis_start_time = Some(std::time::Instant::now());

        let report = AnalysisReport::new(
            self.analyze_boundedness(),
            self.analyze_liveness(),
            self.enabled_transitions(),
            self.marking_snapshot(),
            self.get_analysis_statistics(),
        );

        if let Some(logger) = self.logger {
            logger
                .object("Analysis Report")
                .add_field("bounded", &report.bounded.to_string())
                .add_field("liveness", &report.liveness.to_string())
                .add_field("enabled", &report.enabled_transitions.len().to_string())
                .log(LogLevel::Info);
        }

        report
    }

    /// The bipartite graph view built at load time, for presentation
    /// consumers.
    pub fn graph(&self) -> &DiGraph<NetNode, ()> {
        &self.graph
    }

    fn get_analysis_statistics(&self) -> AnalysisStatistics {
        AnalysisStatistics::new(
            self.places.len(),
            self.transitions.len(),
            self.graph.edge_count(),
            self.get_analysis_time().unwrap_or_default(),
        )
    }

    fn get_analysis_time(&self) -> Option<std::time::Duration> {
        self.analysis_start_time.map(|x| x.elapsed())
    }
}
