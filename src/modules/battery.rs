//! Battery charge module
//!
//! Reads `capacity` and `status` from a power-supply sysfs directory. A
//! missing battery is a normal condition (desktop machines, undocked
//! laptops) and renders a fallback text instead of failing.

use crate::core::{BarWidget, Context, ModuleBase};
use crate::render::color;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug)]
pub struct BatteryModule {
    path: PathBuf,
}

impl BatteryModule {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_capacity(&self) -> Option<u32> {
        let raw = std::fs::read_to_string(self.path.join("capacity")).ok()?;
        raw.trim().parse().ok()
    }

    fn read_status(&self) -> Option<String> {
        let raw = std::fs::read_to_string(self.path.join("status")).ok()?;
        Some(raw.trim().to_string())
    }
}

impl BarWidget for BatteryModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        let Some(capacity) = self.read_capacity() else {
            log::debug!("battery capacity unreadable at {}", self.path.display());
            base.full_text = "bat n/a".to_string();
            base.color.clear();
            return Ok(());
        };

        let marker = match self.read_status().as_deref() {
            Some("Charging") => "+",
            Some("Discharging") => "-",
            _ => "",
        };

        // Red at empty, green at full.
        let hue = capacity.min(100) * 120 / 100;
        base.color = color(hue, 100, 50);
        base.full_text = format!("bat {}%{}", capacity, marker);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_supply_renders_fallback() {
        let mut module = BatteryModule::new(PathBuf::from("/nonexistent/power_supply/BAT9"));
        let mut base = ModuleBase::new("bat");
        let mut ctx = Context::new();

        module.update(&mut base, &mut ctx).unwrap();
        assert_eq!(base.full_text, "bat n/a");
        assert!(base.color.is_empty());
    }

    #[test]
    fn test_charge_level_drives_text_and_color() {
        let dir = std::env::temp_dir().join(format!("swaystatus-bat-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("capacity"), "85\n").unwrap();
        std::fs::write(dir.join("status"), "Charging\n").unwrap();

        let mut module = BatteryModule::new(dir.clone());
        let mut base = ModuleBase::new("bat");
        let mut ctx = Context::new();
        module.update(&mut base, &mut ctx).unwrap();

        assert_eq!(base.full_text, "bat 85%+");
        assert_eq!(base.color, color(102, 100, 50));

        std::fs::remove_dir_all(dir).ok();
    }
}
