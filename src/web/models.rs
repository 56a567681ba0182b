use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::bellman_ford::RelaxationStats;
use crate::graph::DirectedEdge;

/// Represents an edge of a submitted graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

impl From<DirectedEdge<f64>> for WebEdge {
    fn from(edge: DirectedEdge<f64>) -> Self {
        WebEdge {
            source: edge.from(),
            target: edge.to(),
            weight: edge.weight(),
        }
    }
}

/// Parameters for a shortest path run
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
    pub source: usize,
}

/// Distance and path to one vertex; both null when it is unreachable
#[derive(Debug, Clone, Serialize)]
pub struct VertexPath {
    pub vertex: usize,
    pub distance: Option<f64>,
    pub path: Option<Vec<WebEdge>>,
}

/// Response containing the outcome of a run
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub execution_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub source: usize,
    pub execution_time_ms: f64,
    pub stats: RelaxationStats,
    /// Set when a negative cycle is reachable; `paths` is then empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<Vec<WebEdge>>,
    pub paths: Vec<VertexPath>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
