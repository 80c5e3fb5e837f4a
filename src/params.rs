//! Cost parameters and execution knobs.

/// How the per-slice lane segments are executed.
///
/// Both modes produce bit-identical tags; the slice barrier fixes the set
/// of blocks a segment may reference regardless of interleaving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreadMode {
    /// Fill the lanes of each slice one after the other on the calling
    /// thread.
    Sequential,
    /// Fill the lanes of each slice as parallel tasks on the rayon pool,
    /// joined at the slice boundary.
    Parallel,
}

/// Tunable parameters for one hash computation.
///
/// `mem_cost` is the requested matrix size in 1024-byte blocks; it is
/// rounded down to a multiple of `4 * lanes` before allocation. `lanes`
/// controls how many independent rows the matrix has, and therefore the
/// available parallelism.
#[derive(Clone, Debug)]
pub struct Params {
    /// Requested number of memory blocks (minimum `8 * lanes`).
    pub mem_cost: u32,
    /// Number of passes over the matrix (minimum 1).
    pub time_cost: u32,
    /// Number of lanes (1..=255; the wire format stores this in a byte).
    pub lanes: u32,
    /// Length of the output tag in bytes (minimum 4).
    pub tag_len: usize,
    /// Sequential or pooled execution of the lane segments.
    pub thread_mode: ThreadMode,
    /// Overwrite the matrix with zeros before releasing it.
    pub clear_memory: bool,
}

impl Default for Params {
    /// 64 MiB matrix, 3 passes, one lane, 32-byte tag, sequential fill.
    fn default() -> Self {
        Self {
            mem_cost: 64 * 1024,
            time_cost: 3,
            lanes: 1,
            tag_len: 32,
            thread_mode: ThreadMode::Sequential,
            clear_memory: false,
        }
    }
}
