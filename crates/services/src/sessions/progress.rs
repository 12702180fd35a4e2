/// Aggregated view of quiz progress, useful for a presentation shell.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProgress {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub fraction: f64,
    pub is_complete: bool,
}
