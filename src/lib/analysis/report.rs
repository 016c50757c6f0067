use serde::{Deserialize, Serialize};

/// Result of one analysis pass over a loaded net snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub bounded: bool,
    pub liveness: f64,
    pub enabled_transitions: Vec<String>,
    pub marking: Vec<(String, i64)>,
    pub statistics: AnalysisStatistics,
}

impl AnalysisReport {
    pub fn new(
        bounded: bool,
        liveness: f64,
        enabled_transitions: Vec<String>,
        marking: Vec<(String, i64)>,
        statistics: AnalysisStatistics,
    ) -> Self {
        AnalysisReport {
            bounded,
            liveness,
            enabled_transitions,
            marking,
            statistics,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStatistics {
    pub place_count: usize,
    pub transition_count: usize,
    pub arc_count: usize,
    pub time: std::time::Duration,
}

impl AnalysisStatistics {
    pub fn new(
        place_count: usize,
        transition_count: usize,
        arc_count: usize,
        time: std::time::Duration,
    ) -> Self {
        AnalysisStatistics {
            place_count,
            transition_count,
            arc_count,
            time,
        }
    }
}
