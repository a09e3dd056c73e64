//! Clock module

use crate::core::{BarWidget, Context, ModuleBase};
use anyhow::Result;
use chrono::Local;

/// Format shown in the block, e.g. `Tue 25 Aug 14:03:59`.
pub const CLOCK_FORMAT: &str = "%a %d %b %H:%M:%S";

#[derive(Debug, Default)]
pub struct ClockModule;

impl ClockModule {
    pub fn new() -> Self {
        Self
    }
}

impl BarWidget for ClockModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        base.full_text = Local::now().format(CLOCK_FORMAT).to_string();
        Ok(())
    }
}
