// ABOUTME: Tool module - defines tools, registry, and execution results.
// ABOUTME: Core abstraction for operations exposed over MCP.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;
