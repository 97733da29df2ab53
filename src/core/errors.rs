/*!
 * Error Types
 * Centralized re-exports of every error the crate produces
 */

pub use crate::driver::{CommandError, DriverError, DriverResult};
pub use crate::memory::{MemoryError, MemoryResult};
