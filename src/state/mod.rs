pub mod drag;

pub use drag::DragState;
