//! Swap usage module

use crate::core::{BarWidget, Context, ModuleBase};
use anyhow::Result;
use sysinfo::System;

#[derive(Debug)]
pub struct SwapModule {
    system: System,
}

impl SwapModule {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SwapModule {
    fn default() -> Self {
        Self::new()
    }
}

impl BarWidget for SwapModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        self.system.refresh_memory();
        let total = self.system.total_swap();
        if total == 0 {
            base.full_text = "swap off".to_string();
            return Ok(());
        }

        let fraction = self.system.used_swap() as f64 / total as f64;
        base.full_text = format!("swap {:.0}%", fraction * 100.0);
        Ok(())
    }
}
