/*!
 * Data Structures
 *
 * Specialized data structures shared by the allocator and the driver.
 */

mod inline_string;

pub use inline_string::InlineString;
