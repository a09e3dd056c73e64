//! Registry: builds module instances from config descriptors

use super::module::{Module, ModuleBase, ModuleKind};
use crate::config::ModuleDescriptor;
use crate::modules::{
    BatteryModule, ClockModule, CpuModule, FreeDiskSpaceModule, MemoryModule, NetworkModule,
    NetworkTrafficModule, PlayerControlModule, PomodoroModule, RedShiftModule, SwapModule,
    TemperatureModule,
};
use anyhow::{bail, Result};
use std::collections::HashSet;
use std::time::Duration;

/// Build one module from its descriptor.
///
/// The match is exhaustive over the closed descriptor set; unknown types
/// never reach this point because they already fail config deserialization.
pub fn build_module(descriptor: ModuleDescriptor) -> Module {
    match descriptor {
        ModuleDescriptor::Clock { name } => {
            Module::new(ModuleBase::new(name), ModuleKind::Clock(ClockModule::new()))
        }
        ModuleDescriptor::Battery { name, path } => Module::new(
            ModuleBase::new(name),
            ModuleKind::Battery(BatteryModule::new(path)),
        ),
        ModuleDescriptor::Cpu { name, width } => Module::new(
            ModuleBase::new(name),
            ModuleKind::Cpu(CpuModule::new(width)),
        ),
        ModuleDescriptor::FreeDiskSpace { name, path } => Module::new(
            ModuleBase::new(name),
            ModuleKind::FreeDiskSpace(FreeDiskSpaceModule::new(path)),
        ),
        ModuleDescriptor::Memory { name, width } => Module::new(
            ModuleBase::new(name),
            ModuleKind::Memory(MemoryModule::new(width)),
        ),
        ModuleDescriptor::Network {
            name,
            iface,
            cache_seconds,
        } => Module::new(
            ModuleBase::new(name).with_cache_interval(Duration::from_secs(cache_seconds)),
            ModuleKind::Network(NetworkModule::new(iface)),
        ),
        ModuleDescriptor::NetworkTraffic {
            name,
            iface,
            when_up,
            when_down,
            max_bw,
            when_down_color,
            width,
        } => Module::new(
            ModuleBase::new(name),
            ModuleKind::NetworkTraffic(NetworkTrafficModule::new(
                iface,
                when_up,
                when_down,
                max_bw,
                when_down_color,
                width,
            )),
        ),
        ModuleDescriptor::Swap { name } => {
            Module::new(ModuleBase::new(name), ModuleKind::Swap(SwapModule::new()))
        }
        ModuleDescriptor::Temperature { name, path } => Module::new(
            ModuleBase::new(name),
            ModuleKind::Temperature(TemperatureModule::new(path)),
        ),
        ModuleDescriptor::PlayerControl { name, step_percent } => Module::new(
            ModuleBase::new(name),
            ModuleKind::PlayerControl(PlayerControlModule::new(step_percent)),
        ),
        ModuleDescriptor::Pomodoro {
            name,
            minutes,
            segments,
            end_sound_fname,
            start_sound_fname,
            start_msg,
            end_msg,
        } => Module::new(
            ModuleBase::new(name),
            ModuleKind::Pomodoro(PomodoroModule::new(
                Duration::from_secs(minutes * 60),
                segments,
                end_sound_fname,
                start_sound_fname,
                start_msg,
                end_msg,
            )),
        ),
        ModuleDescriptor::RedShift { name, step } => Module::new(
            ModuleBase::new(name),
            ModuleKind::RedShift(RedShiftModule::new(step)),
        ),
    }
}

/// Build all configured modules, in configured order.
///
/// Click routing is by name, so duplicate names are a fatal config error
/// rather than silent shadowing.
pub fn build_all(descriptors: Vec<ModuleDescriptor>) -> Result<Vec<Module>> {
    let mut seen = HashSet::new();
    for descriptor in &descriptors {
        if !seen.insert(descriptor.name().to_string()) {
            bail!("duplicate module name in config: {}", descriptor.name());
        }
    }
    Ok(descriptors.into_iter().map(build_module).collect())
}
