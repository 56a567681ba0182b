use num_traits::Float;
use std::fmt::{self, Debug, Display};

use crate::{Error, Result};

/// Handle to an edge stored in a graph, in insertion order
///
/// Handles are only meaningful for the graph that issued them (or for views
/// such as [`EdgeSubgraph`](crate::graph::EdgeSubgraph) that borrow it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in its graph's insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable weighted directed edge `from -> to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new edge, rejecting NaN weights
    pub fn new(from: usize, to: usize, weight: W) -> Result<Self> {
        if weight.is_nan() {
            return Err(Error::MalformedGraph(format!(
                "edge {}->{} has a NaN weight",
                from, to
            )));
        }
        Ok(DirectedEdge { from, to, weight })
    }

    /// Tail vertex
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// The same edge pointing the other way
    pub fn reversed(&self) -> Self {
        DirectedEdge {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl<W> Display for DirectedEdge<W>
where
    W: Float + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_weight() {
        let err = DirectedEdge::new(0, 1, f64::NAN).unwrap_err();
        assert!(matches!(err, Error::MalformedGraph(_)));
    }

    #[test]
    fn accepts_negative_and_infinite_weights() {
        let e = DirectedEdge::new(2, 3, -1.5).unwrap();
        assert_eq!((e.from(), e.to(), e.weight()), (2, 3, -1.5));
        assert!(DirectedEdge::new(0, 0, f64::INFINITY).is_ok());
    }

    #[test]
    fn display_uses_two_decimals() {
        let e = DirectedEdge::new(4, 5, 0.35).unwrap();
        assert_eq!(e.to_string(), "4->5 0.35");
    }
}
