/// A render that failed for a reason other than being superseded.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    pub generation: u64,
    pub message: String,
}
