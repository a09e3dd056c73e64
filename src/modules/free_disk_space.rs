//! Free disk space module

use crate::core::{BarWidget, Context, ModuleBase};
use anyhow::Result;
use std::path::PathBuf;
use sysinfo::Disks;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Debug)]
pub struct FreeDiskSpaceModule {
    path: PathBuf,
    disks: Disks,
}

impl FreeDiskSpaceModule {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            disks: Disks::new_with_refreshed_list(),
        }
    }
}

impl BarWidget for FreeDiskSpaceModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        self.disks.refresh_list();

        // Longest mount point that is a prefix of the configured path wins,
        // so "/home/user" resolves to "/home" when that is its own mount.
        let disk = self
            .disks
            .list()
            .iter()
            .filter(|d| self.path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len());

        match disk {
            Some(disk) => {
                let free = disk.available_space() as f64 / BYTES_PER_GIB;
                base.full_text = format!("{:.1}G free", free);
            }
            None => {
                log::debug!("no mounted filesystem contains {}", self.path.display());
                base.full_text = "disk n/a".to_string();
            }
        }
        Ok(())
    }
}
