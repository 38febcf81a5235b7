//! Assignment strategy variants.
//!
//! Ward assignment admits several reasonable behaviors along three
//! independent axes: rotation start, pre-assignment shuffling, and how the
//! forward capacity scan picks a target. Rather than hard-coding one
//! combination, each axis is an explicit policy and [`Strategy`] is their
//! product.

/// Where the rotation cursor starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPolicy {
    /// Start at a fixed index into the auxiliary order (wrapped).
    Fixed(usize),
    /// Draw the starting index from the RNG on every call.
    Random,
}

impl Default for StartPolicy {
    fn default() -> Self {
        Self::Fixed(0)
    }
}

/// Whether bed-sorted patients are locally shuffled before assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShufflePolicy {
    /// Keep strict bed order.
    #[default]
    Off,
    /// Shuffle each consecutive block of the given size after sorting.
    ///
    /// Keeps bed-order locality approximately intact while varying
    /// assignments between calls. Block sizes below 2 are a no-op.
    Block(usize),
}

/// How the forward capacity scan picks among auxiliaries with room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitPolicy {
    /// Take the first auxiliary with room, in rotation order.
    FirstFit,
    /// Take the auxiliary with the most remaining capacity; ties go to
    /// the earliest candidate in rotation order.
    #[default]
    BestFit,
}

/// Combined assignment strategy.
///
/// The default is the deterministic corner: fixed start at index 0, no
/// shuffling, best-fit scanning.
///
/// # Example
/// ```
/// use ward_assign::engine::{ShufflePolicy, StartPolicy, Strategy};
///
/// let strategy = Strategy::new()
///     .with_start(StartPolicy::Random)
///     .with_shuffle(ShufflePolicy::Block(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Strategy {
    /// Rotation start policy.
    pub start: StartPolicy,
    /// Pre-assignment shuffle policy.
    pub shuffle: ShufflePolicy,
    /// Capacity scan policy.
    pub fit: FitPolicy,
}

impl Strategy {
    /// Creates the default strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation start policy.
    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    /// Sets the shuffle policy.
    pub fn with_shuffle(mut self, shuffle: ShufflePolicy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the capacity scan policy.
    pub fn with_fit(mut self, fit: FitPolicy) -> Self {
        self.fit = fit;
        self
    }
}
