//! Core framework: module abstraction, events, registry, and helper processes

pub mod context;
pub mod event;
pub mod module;
pub mod process_pool;
pub mod registry;

pub use context::Context;
pub use event::{ClickEvent, MouseButton};
pub use module::{BarWidget, Module, ModuleBase, ModuleKind};
pub use process_pool::ProcessPool;
pub use registry::{build_all, build_module};
