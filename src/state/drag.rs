// Pointer-drag state for a single workspace pill, kept outside the reducer.
// Mid-drag positions never reach the session state; only the final settled
// position is dispatched.
#[derive(Default, Debug, Clone)]
pub struct DragState {
    pub dragging: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub pending_x: f64,
    pub pending_y: f64,
}
