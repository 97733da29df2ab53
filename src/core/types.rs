/*!
 * Core Types
 * Common types used across the simulator
 */

use super::data_structures::InlineString;

/// Start position of a block inside the simulated address space
pub type Offset = usize;

/// Size type for memory operations (abstract units, rendered as KB)
pub type Size = usize;

/// Label of the request that owns an allocated block
pub type Owner = InlineString;
