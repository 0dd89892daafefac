pub mod mindmap;

pub use mindmap::MindmapNode;
