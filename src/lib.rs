//! swaystatus: a status-line generator for the swaybar/i3bar JSON protocol
//!
//! This library provides the core functionality for swaystatus, including:
//! - The module abstraction and the closed set of block modules
//! - The registry that builds modules from config descriptors
//! - Bar and color rendering primitives
//! - The stdin/stdout protocol driver and its event loop

pub mod config;
pub mod core;
pub mod modules;
pub mod protocol;
pub mod render;

// Re-export commonly used types
pub use config::ModuleDescriptor;
pub use core::{ClickEvent, Context, Module, ModuleBase, MouseButton};
pub use protocol::StatusBar;
