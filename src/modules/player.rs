//! Player and volume control module
//!
//! `update` reads the current sink volume by shelling out to `pactl`. The
//! read is synchronous and blocks the loop for its duration, an accepted
//! latency cost. Clicks go through the process pool: play/pause via
//! `playerctl`, volume nudges via `pactl`.

use crate::core::{BarWidget, ClickEvent, Context, ModuleBase, MouseButton};
use anyhow::Result;
use std::process::Command;

const DEFAULT_SINK: &str = "@DEFAULT_SINK@";

#[derive(Debug)]
pub struct PlayerControlModule {
    step_percent: u32,
}

impl PlayerControlModule {
    pub fn new(step_percent: u32) -> Self {
        Self { step_percent }
    }

    fn read_volume(&self) -> Option<u32> {
        let output = Command::new("pactl")
            .args(["get-sink-volume", DEFAULT_SINK])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        parse_volume(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extract the first percentage token from `pactl get-sink-volume` output.
fn parse_volume(output: &str) -> Option<u32> {
    output
        .split_whitespace()
        .find_map(|token| token.strip_suffix('%')?.parse().ok())
}

impl BarWidget for PlayerControlModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        base.full_text = match self.read_volume() {
            Some(volume) => format!("vol {}%", volume),
            None => "vol n/a".to_string(),
        };
        Ok(())
    }

    fn handle_input(&mut self, _base: &mut ModuleBase, event: &ClickEvent, ctx: &mut Context) {
        match event.button {
            MouseButton::Left => ctx.pool.spawn("playerctl", ["play-pause"]),
            MouseButton::WheelUp => {
                let delta = format!("+{}%", self.step_percent);
                ctx.pool
                    .spawn("pactl", ["set-sink-volume", DEFAULT_SINK, delta.as_str()]);
            }
            MouseButton::WheelDown => {
                let delta = format!("-{}%", self.step_percent);
                ctx.pool
                    .spawn("pactl", ["set-sink-volume", DEFAULT_SINK, delta.as_str()]);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_volume_finds_percent_token() {
        let output = "Volume: front-left: 42978 /  66% / -10.92 dB\n";
        assert_eq!(parse_volume(output), Some(66));
    }

    #[test]
    fn test_parse_volume_handles_garbage() {
        assert_eq!(parse_volume(""), None);
        assert_eq!(parse_volume("no volume here"), None);
        assert_eq!(parse_volume("x% y%"), None);
    }

    #[test]
    fn test_wheel_click_spawns_volume_helper() {
        let mut module = PlayerControlModule::new(5);
        let mut base = ModuleBase::new("player");
        let mut ctx = Context::new();
        let event: ClickEvent =
            serde_json::from_str(r#"{"name":"player","button":4,"x":0,"y":0}"#).unwrap();

        module.handle_input(&mut base, &event, &mut ctx);
        // pactl may not exist in the test environment; spawn failure is
        // swallowed, so the pool holds at most one child.
        assert!(ctx.pool.len() <= 1);
    }
}
