//! Plain-text graph input and shortest path reports.
//!
//! The input format is whitespace separated: the vertex count, the edge
//! count, then one `from to weight` triple per edge.
//!
//! ```text
//! 3 2
//! 0 1 1.0
//! 1 2 -0.5
//! ```

use std::fmt::Write as _;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::algorithm::bellman_ford::BellmanFordSP;
use crate::algorithm::ShortestPaths;
use crate::graph::{EdgeWeightedDigraph, Graph};
use crate::{Error, Result};

/// Largest vertex count accepted from text input
pub const MAX_VERTICES: usize = 1 << 24;

/// Parses a graph from the text format
pub fn parse_digraph(input: &str) -> Result<EdgeWeightedDigraph<f64>> {
    let mut tokens = input.split_whitespace();

    let vertices: i64 = next_token(&mut tokens, "vertex count")?;
    let vertices = usize::try_from(vertices).map_err(|_| {
        Error::MalformedGraph(format!("number of vertices must be non-negative, got {}", vertices))
    })?;
    if vertices > MAX_VERTICES {
        return Err(Error::MalformedGraph(format!(
            "number of vertices {} exceeds the limit of {}",
            vertices, MAX_VERTICES
        )));
    }
    let edges: i64 = next_token(&mut tokens, "edge count")?;
    let edges = usize::try_from(edges).map_err(|_| {
        Error::MalformedGraph(format!("number of edges must be non-negative, got {}", edges))
    })?;

    let mut graph = EdgeWeightedDigraph::new(vertices);
    for i in 0..edges {
        let from: usize = next_token(&mut tokens, &format!("origin of edge {}", i))?;
        let to: usize = next_token(&mut tokens, &format!("destination of edge {}", i))?;
        let weight: f64 = next_token(&mut tokens, &format!("weight of edge {}", i))?;
        graph.add(from, to, weight)?;
    }

    Ok(graph)
}

/// Reads and parses a graph file
pub fn read_digraph<P: AsRef<Path>>(path: P) -> Result<EdgeWeightedDigraph<f64>> {
    let text = std::fs::read_to_string(path)?;
    parse_digraph(&text)
}

fn next_token<T: FromStr>(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<T> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::MalformedGraph(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::MalformedGraph(format!("invalid {}: {:?}", what, token)))
}

/// Renders the outcome of a run: the negative cycle, one edge per line, or
/// one line per vertex with its distance and path
pub fn format_report<G>(sp: &BellmanFordSP<'_, f64, G>) -> Result<String>
where
    G: Graph<f64>,
{
    let mut out = String::new();
    if let Some(cycle) = sp.negative_cycle() {
        for edge in cycle {
            writeln!(out, "{}", edge)?;
        }
        return Ok(out);
    }

    let s = sp.source();
    for v in 0..sp.graph().vertex_count() {
        match sp.path_to(v)? {
            Some(path) => {
                write!(out, "{} to {} ({:5.2})", s, v, sp.dist_to(v)?)?;
                for edge in path {
                    write!(out, "  {}", edge)?;
                }
                out.push('\n');
            }
            None => writeln!(out, "{} to {}  no path", s, v)?,
        }
    }
    Ok(out)
}
