//! Shared state handed to modules on every call

use super::process_pool::ProcessPool;

/// Explicit context passed to `update` and `handle_input`.
///
/// Everything a module may touch outside its own state lives here; there is
/// no ambient global state.
#[derive(Debug, Default)]
pub struct Context {
    pub pool: ProcessPool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }
}
