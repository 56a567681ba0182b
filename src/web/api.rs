use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::bellman_ford::BellmanFordSP;
use crate::algorithm::ShortestPaths;
use crate::graph::{EdgeWeightedDigraph, Graph};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Largest graph a single request may ask for
pub const MAX_REQUEST_VERTICES: usize = 1_000_000;

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/api/shortest-paths", post(shortest_paths))
        .route("/api/health", get(health_check))
}

/// Run Bellman-Ford on a submitted graph
pub async fn shortest_paths(
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let graph = build_graph(&request).map_err(bad_request)?;

    // The run is CPU bound and may be long on large graphs
    let source = request.source;
    let response = tokio::task::spawn_blocking(move || run(&graph, source))
        .await
        .map_err(|err| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "execution_failed".to_string(),
                    message: err.to_string(),
                }),
            )
        })?
        .map_err(bad_request)?;

    info!(
        "run {} from {}: {} vertices, negative cycle = {}, {:.2} ms",
        response.execution_id,
        response.source,
        request.vertex_count,
        response.negative_cycle.is_some(),
        response.execution_time_ms
    );
    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn build_graph(request: &ShortestPathRequest) -> crate::Result<EdgeWeightedDigraph<f64>> {
    if request.vertex_count > MAX_REQUEST_VERTICES {
        return Err(Error::MalformedGraph(format!(
            "vertex count {} exceeds the limit of {}",
            request.vertex_count, MAX_REQUEST_VERTICES
        )));
    }
    let mut graph = EdgeWeightedDigraph::new(request.vertex_count);
    for edge in &request.edges {
        graph.add(edge.source, edge.target, edge.weight)?;
    }
    Ok(graph)
}

fn run(graph: &EdgeWeightedDigraph<f64>, source: usize) -> crate::Result<ShortestPathResponse> {
    let start_time = Instant::now();
    let sp = BellmanFordSP::new(graph, source)?;
    let execution_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let negative_cycle = sp
        .negative_cycle()
        .map(|cycle| cycle.into_iter().map(WebEdge::from).collect::<Vec<_>>());

    let mut paths = Vec::new();
    if negative_cycle.is_none() {
        for vertex in 0..graph.vertex_count() {
            let path = sp.path_to(vertex)?;
            let distance = Some(sp.dist_to(vertex)?).filter(|d| d.is_finite());
            paths.push(VertexPath {
                vertex,
                distance,
                path: path.map(|edges| edges.into_iter().map(WebEdge::from).collect()),
            });
        }
    }

    Ok(ShortestPathResponse {
        execution_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        source,
        execution_time_ms,
        stats: *sp.stats(),
        negative_cycle,
        paths,
    })
}

fn bad_request(err: Error) -> ApiError {
    warn!("rejected shortest path request: {}", err);
    let error = match err {
        Error::InvalidVertex(_) => "invalid_vertex",
        Error::InvalidEdge(..) => "invalid_edge",
        Error::MalformedGraph(_) => "malformed_graph",
        _ => "execution_failed",
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(vertex_count: usize, edges: &[(usize, usize, f64)], source: usize) -> ShortestPathRequest {
        ShortestPathRequest {
            vertex_count,
            edges: edges
                .iter()
                .map(|&(source, target, weight)| WebEdge { source, target, weight })
                .collect(),
            source,
        }
    }

    #[tokio::test]
    async fn returns_distances_and_paths() {
        let Json(response) = shortest_paths(Json(request(3, &[(0, 1, 2.0), (1, 2, -1.0)], 0)))
            .await
            .unwrap();

        assert!(response.negative_cycle.is_none());
        assert_eq!(response.paths.len(), 3);
        assert_eq!(response.paths[2].distance, Some(1.0));
        assert_eq!(response.paths[2].path.as_ref().unwrap().len(), 2);
        assert_eq!(response.paths[0].path, Some(vec![]));
    }

    #[tokio::test]
    async fn unreachable_vertex_serializes_as_null() {
        let Json(response) = shortest_paths(Json(request(2, &[], 0))).await.unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["paths"][1]["distance"].is_null());
        assert!(json["paths"][1]["path"].is_null());
        assert!(json.get("negative_cycle").is_none());
    }

    #[tokio::test]
    async fn reports_negative_cycle() {
        let Json(response) = shortest_paths(Json(request(2, &[(0, 1, -1.0), (1, 0, -1.0)], 0)))
            .await
            .unwrap();

        let cycle = response.negative_cycle.unwrap();
        assert_eq!(cycle.iter().map(|e| e.weight).sum::<f64>(), -2.0);
        assert!(response.paths.is_empty());
    }

    #[tokio::test]
    async fn rejects_bad_input() {
        let (status, Json(body)) = shortest_paths(Json(request(2, &[(0, 1, 1.0)], 4)))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "invalid_vertex");

        let (_, Json(body)) = shortest_paths(Json(request(2, &[(0, 3, 1.0)], 0)))
            .await
            .unwrap_err();
        assert_eq!(body.error, "invalid_edge");
    }

    #[tokio::test]
    async fn rejects_oversized_vertex_count_before_allocating() {
        let (status, Json(body)) = shortest_paths(Json(request(usize::MAX / 2, &[], 0)))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "malformed_graph");

        let (_, Json(body)) = shortest_paths(Json(request(MAX_REQUEST_VERTICES + 1, &[], 0)))
            .await
            .unwrap_err();
        assert_eq!(body.error, "malformed_graph");
    }
}
