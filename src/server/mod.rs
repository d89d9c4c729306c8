// file: src/server/mod.rs
// description: JSON-lines stdio transport over the service operations
// reference: internal module structure

pub mod protocol;
pub mod stdio;

pub use protocol::{Request, Response};
pub use stdio::{handle_line, run_stdio, serve};
