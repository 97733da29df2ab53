/*!
 * Monitoring Module
 * Logging setup shared by the binary and tests
 */

pub mod tracer;

pub use tracer::init_tracing;
