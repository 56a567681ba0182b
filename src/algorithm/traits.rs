use num_traits::Float;
use std::fmt::Debug;

use crate::graph::DirectedEdge;
use crate::Result;

/// Query interface of a finished single-source shortest path computation
///
/// All methods are read-only; calling them repeatedly returns the same answer.
pub trait ShortestPaths<W>
where
    W: Float + Debug + Copy,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Source vertex ID
    fn source(&self) -> usize;

    /// Length of the shortest path to `v`, `+inf` when unreachable
    fn dist_to(&self, v: usize) -> Result<W>;

    /// Whether `v` is reachable from the source
    fn has_path_to(&self, v: usize) -> Result<bool>;

    /// Edges of a shortest path from the source to `v`, `None` when unreachable
    ///
    /// The path to the source itself is empty.
    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge<W>>>>;
}
