//! Wireless network module
//!
//! Probes the ESSID by shelling out to `iwgetid`. The probe is expensive, so
//! the module is built with a cache interval and only re-runs it when the
//! interval has elapsed, independent of the global tick rate.

use crate::core::{BarWidget, Context, ModuleBase};
use anyhow::Result;
use std::process::Command;

#[derive(Debug)]
pub struct NetworkModule {
    iface: String,
}

impl NetworkModule {
    pub fn new(iface: String) -> Self {
        Self { iface }
    }

    fn probe_essid(&self) -> Option<String> {
        let output = Command::new("iwgetid").arg("-r").arg(&self.iface).output();
        match output {
            Ok(output) if output.status.success() => {
                let essid = String::from_utf8_lossy(&output.stdout).trim().to_string();
                (!essid.is_empty()).then_some(essid)
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("iwgetid unavailable: {}", e);
                None
            }
        }
    }
}

impl BarWidget for NetworkModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        base.full_text = match self.probe_essid() {
            Some(essid) => format!("{} {}", self.iface, essid),
            None => format!("{} down", self.iface),
        };
        Ok(())
    }
}
