//! Fire-and-forget helper process tracking
//!
//! Modules spawn short-lived helpers (notifications, sounds, volume and
//! screen-color adjustments) through the pool and never touch them again.
//! The pool owns every handle until the child exits and is reaped.

use std::ffi::OsStr;
use std::process::{Child, Command, Stdio};

/// Owns detached helper processes and reaps finished ones without blocking.
#[derive(Debug, Default)]
pub struct ProcessPool {
    children: Vec<Child>,
}

impl ProcessPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch a detached helper and register it for later reaping.
    ///
    /// Spawn failures are best-effort: they are logged and never surfaced to
    /// the spawning module.
    pub fn spawn<I, S>(&mut self, program: &str, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match result {
            Ok(child) => {
                log::debug!("spawned helper {} (pid {})", program, child.id());
                self.children.push(child);
            }
            Err(e) => log::warn!("failed to spawn helper {}: {}", program, e),
        }
    }

    /// Probe every registered child once and drop the ones that have exited.
    ///
    /// Uses a non-blocking `try_wait` per handle, so a still-running helper
    /// never stalls the caller. Called once per polling tick.
    pub fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("helper pid {} exited with {}", child.id(), status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                log::warn!("failed to probe helper pid {}: {}", child.id(), e);
                false
            }
        });
    }

    /// Number of helpers still owned by the pool.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
