//! Memory usage module

use crate::core::{BarWidget, Context, ModuleBase};
use crate::render::{color, render_bar};
use anyhow::Result;
use sysinfo::System;

#[derive(Debug)]
pub struct MemoryModule {
    width: usize,
    system: System,
}

impl MemoryModule {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            system: System::new(),
        }
    }
}

impl BarWidget for MemoryModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            base.full_text = "mem n/a".to_string();
            base.color.clear();
            return Ok(());
        }

        let fraction = self.system.used_memory() as f64 / total as f64;
        let hue = ((1.0 - fraction) * 120.0) as u32;
        base.color = color(hue, 100, 50);
        base.full_text = format!(
            "mem {} {:.0}%",
            render_bar(fraction, self.width),
            fraction * 100.0
        );
        Ok(())
    }
}
