//! Concrete modules, one per configurable block type

pub mod battery;
pub mod clock;
pub mod cpu;
pub mod free_disk_space;
pub mod memory;
pub mod network;
pub mod network_traffic;
pub mod player;
pub mod pomodoro;
pub mod redshift;
pub mod swap;
pub mod temperature;

pub use battery::BatteryModule;
pub use clock::ClockModule;
pub use cpu::CpuModule;
pub use free_disk_space::FreeDiskSpaceModule;
pub use memory::MemoryModule;
pub use network::NetworkModule;
pub use network_traffic::NetworkTrafficModule;
pub use player::PlayerControlModule;
pub use pomodoro::{PomodoroModule, PomodoroPhase};
pub use redshift::RedShiftModule;
pub use swap::SwapModule;
pub use temperature::TemperatureModule;
