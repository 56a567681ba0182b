pub mod priority_queue;
pub mod vertex_queue;

pub use priority_queue::BinaryHeapWrapper;
pub use vertex_queue::VertexQueue;
