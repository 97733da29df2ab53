/*!
 * Memory Module
 * First-fit allocation over a fixed-size simulated address space
 */

pub mod manager;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use manager::{BlockId, BlockList, FirstFitManager, SharedMemoryManager};
pub use traits::*;
pub use types::*;
