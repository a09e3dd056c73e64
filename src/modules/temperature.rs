//! Temperature module
//!
//! Reads a thermal-zone `temp` file (millidegrees Celsius).

use crate::core::{BarWidget, Context, ModuleBase};
use crate::render::color;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug)]
pub struct TemperatureModule {
    path: PathBuf,
}

impl TemperatureModule {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_celsius(&self) -> Option<i64> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let millidegrees: i64 = raw.trim().parse().ok()?;
        Some(millidegrees / 1000)
    }
}

impl BarWidget for TemperatureModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        let Some(celsius) = self.read_celsius() else {
            log::debug!("temperature unreadable at {}", self.path.display());
            base.full_text = "temp n/a".to_string();
            base.color.clear();
            return Ok(());
        };

        // Cyan at 30 degrees and below, red at 90 and above.
        let clamped = celsius.clamp(30, 90);
        let hue = ((90 - clamped) * 3) as u32;
        base.color = color(hue, 100, 50);
        base.full_text = format!("{}\u{B0}C", celsius);
        Ok(())
    }
}
