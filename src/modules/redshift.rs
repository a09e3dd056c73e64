//! Screen color adjustment module
//!
//! Holds a brightness/color-temperature pair and nudges it multiplicatively
//! on clicks, then hands the new values to the external `redshift` command
//! through the process pool. Brightness is clamped to 1.0; the color
//! temperature is deliberately unbounded.

use crate::core::{BarWidget, ClickEvent, Context, ModuleBase, MouseButton};
use anyhow::Result;

const ADJUST_COMMAND: &str = "redshift";
const DEFAULT_BRIGHTNESS: f64 = 1.0;
const DEFAULT_TEMPERATURE: f64 = 6500.0;

#[derive(Debug)]
pub struct RedShiftModule {
    brightness: f64,
    temperature: f64,
    step: f64,
}

impl RedShiftModule {
    pub fn new(step: f64) -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            temperature: DEFAULT_TEMPERATURE,
            step,
        }
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    fn apply(&self, ctx: &mut Context) {
        ctx.pool.spawn(
            ADJUST_COMMAND,
            [
                "-P".to_string(),
                "-O".to_string(),
                format!("{:.0}", self.temperature),
                "-b".to_string(),
                format!("{:.2}", self.brightness),
            ],
        );
    }

    fn refresh_display(&self, base: &mut ModuleBase) {
        base.full_text = format!("{:.0}K {:.2}", self.temperature, self.brightness);
    }
}

impl BarWidget for RedShiftModule {
    /// No autonomous work; only keeps the displayed values current.
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        self.refresh_display(base);
        Ok(())
    }

    fn handle_input(&mut self, base: &mut ModuleBase, event: &ClickEvent, ctx: &mut Context) {
        match event.button {
            MouseButton::WheelUp => {
                self.brightness = (self.brightness * (1.0 + self.step)).min(1.0);
            }
            MouseButton::WheelDown => {
                self.brightness *= 1.0 - self.step;
            }
            MouseButton::Left => {
                self.temperature *= 1.0 - self.step;
            }
            MouseButton::Right => {
                self.temperature *= 1.0 + self.step;
            }
            _ => return,
        }
        self.apply(ctx);
        self.refresh_display(base);
    }
}
