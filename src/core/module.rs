//! Module abstraction: common block state plus the update/input capability

use super::context::Context;
use super::event::ClickEvent;
use crate::modules::{
    BatteryModule, ClockModule, CpuModule, FreeDiskSpaceModule, MemoryModule, NetworkModule,
    NetworkTrafficModule, PlayerControlModule, PomodoroModule, RedShiftModule, SwapModule,
    TemperatureModule,
};
use anyhow::Result;
use serde::Serialize;
use std::time::{Duration, Instant};

/// State every block shares: identity, display state, and cache policy.
#[derive(Debug, Clone)]
pub struct ModuleBase {
    /// Unique block name; click events reference a module only by name.
    pub name: String,
    /// Block color code; empty string means "use the bar default".
    pub color: String,
    /// Text currently shown in the block.
    pub full_text: String,
    /// Minimum spacing between two real recomputations; zero disables caching.
    pub cache_interval: Duration,
    last_update: Option<Instant>,
}

impl ModuleBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            full_text: String::new(),
            cache_interval: Duration::ZERO,
            last_update: None,
        }
    }

    pub fn with_cache_interval(mut self, interval: Duration) -> Self {
        self.cache_interval = interval;
        self
    }

    /// Cache policy gate for `update`.
    ///
    /// With a zero interval every call passes. Otherwise the call passes (and
    /// `last_update` is refreshed) only when the interval has fully elapsed.
    pub fn should_update(&mut self, now: Instant) -> bool {
        if self.cache_interval.is_zero() {
            return true;
        }
        match self.last_update {
            Some(last) if now < last + self.cache_interval => false,
            _ => {
                self.last_update = Some(now);
                true
            }
        }
    }

    /// Serialize this block as one object of the protocol's render line.
    ///
    /// `color` is emitted verbatim even when empty; an empty string is a
    /// valid "use default" signal, not an omitted field.
    pub fn render_block(&self) -> String {
        #[derive(Serialize)]
        struct Block<'a> {
            color: &'a str,
            name: &'a str,
            full_text: &'a str,
        }

        serde_json::to_string(&Block {
            color: &self.color,
            name: &self.name,
            full_text: &self.full_text,
        })
        .unwrap_or_else(|_| String::from("{}"))
    }
}

/// Capability interface implemented by every module kind.
pub trait BarWidget {
    /// Recompute `full_text`/`color` from the external data source.
    ///
    /// Absent data sources are a normal branch: set a fallback text and
    /// return `Ok`. `Err` is reserved for unexpected failures and is logged
    /// by the dispatcher.
    fn update(&mut self, base: &mut ModuleBase, ctx: &mut Context) -> Result<()>;

    /// React to a click or scroll on this block. Default: ignore it.
    fn handle_input(&mut self, _base: &mut ModuleBase, _event: &ClickEvent, _ctx: &mut Context) {}
}

/// Closed set of module kinds, one variant per configurable block type.
#[derive(Debug)]
pub enum ModuleKind {
    Clock(ClockModule),
    Battery(BatteryModule),
    Cpu(CpuModule),
    FreeDiskSpace(FreeDiskSpaceModule),
    Memory(MemoryModule),
    Network(NetworkModule),
    NetworkTraffic(NetworkTrafficModule),
    Swap(SwapModule),
    Temperature(TemperatureModule),
    PlayerControl(PlayerControlModule),
    Pomodoro(PomodoroModule),
    RedShift(RedShiftModule),
}

macro_rules! for_each_kind {
    ($kind:expr, $module:ident => $body:expr) => {
        match $kind {
            ModuleKind::Clock($module) => $body,
            ModuleKind::Battery($module) => $body,
            ModuleKind::Cpu($module) => $body,
            ModuleKind::FreeDiskSpace($module) => $body,
            ModuleKind::Memory($module) => $body,
            ModuleKind::Network($module) => $body,
            ModuleKind::NetworkTraffic($module) => $body,
            ModuleKind::Swap($module) => $body,
            ModuleKind::Temperature($module) => $body,
            ModuleKind::PlayerControl($module) => $body,
            ModuleKind::Pomodoro($module) => $body,
            ModuleKind::RedShift($module) => $body,
        }
    };
}

/// One configured block: shared state plus its kind-specific behavior.
#[derive(Debug)]
pub struct Module {
    pub base: ModuleBase,
    pub kind: ModuleKind,
}

impl Module {
    pub fn new(base: ModuleBase, kind: ModuleKind) -> Self {
        Self { base, kind }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Run the module's periodic work if its cache interval allows it.
    pub fn update(&mut self, ctx: &mut Context) {
        if !self.base.should_update(Instant::now()) {
            return;
        }
        let base = &mut self.base;
        let result = for_each_kind!(&mut self.kind, module => module.update(base, ctx));
        if let Err(e) = result {
            log::warn!("module {} failed to update: {:#}", base.name, e);
        }
    }

    /// Deliver a click event to the module.
    pub fn handle_input(&mut self, event: &ClickEvent, ctx: &mut Context) {
        let base = &mut self.base;
        for_each_kind!(&mut self.kind, module => module.handle_input(base, event, ctx));
    }
}
