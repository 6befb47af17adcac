use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingMeanSettings {
    /// Number of closes averaged, the current one included.
    pub window: NonZeroUsize,
}
