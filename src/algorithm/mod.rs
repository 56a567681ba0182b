pub mod bellman_ford;
pub mod dijkstra;
mod tree;
pub mod traits;

pub use traits::ShortestPaths;
