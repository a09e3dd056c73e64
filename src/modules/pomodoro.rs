//! Pomodoro countdown module
//!
//! A four-phase workflow driven by clicks and the passage of time:
//! `WaitingToStart -> Running -> EndOfRun -> InBreak -> WaitingToStart`.
//! Notifications and sounds are best-effort helpers spawned through the
//! process pool; a missing config key simply skips the side effect.

use crate::core::{BarWidget, ClickEvent, Context, ModuleBase, MouseButton};
use crate::render::{color, render_bar};
use anyhow::Result;
use std::time::{Duration, Instant};

/// Fixed alert color for the break marker.
const BREAK_COLOR: &str = "#FF0000";

/// Command used to play the start/end sounds.
const SOUND_PLAYER: &str = "paplay";

/// Command used to post desktop notifications.
const NOTIFIER: &str = "notify-send";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroPhase {
    WaitingToStart,
    Running,
    EndOfRun,
    InBreak,
}

#[derive(Debug)]
pub struct PomodoroModule {
    phase: PomodoroPhase,
    /// Meaningful only while `phase == Running`.
    end_time: Option<Instant>,
    window: Duration,
    segments: usize,
    end_sound: String,
    start_sound: Option<String>,
    start_msg: Option<String>,
    end_msg: Option<String>,
}

impl PomodoroModule {
    pub fn new(
        window: Duration,
        segments: usize,
        end_sound: String,
        start_sound: Option<String>,
        start_msg: Option<String>,
        end_msg: Option<String>,
    ) -> Self {
        Self {
            phase: PomodoroPhase::WaitingToStart,
            end_time: None,
            window,
            segments,
            end_sound,
            start_sound,
            start_msg,
            end_msg,
        }
    }

    pub fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    fn notify(&self, ctx: &mut Context, message: &Option<String>) {
        if let Some(message) = message {
            ctx.pool.spawn(NOTIFIER, ["pomodoro", message.as_str()]);
        }
    }

    fn play_sound(&self, ctx: &mut Context, path: &str) {
        ctx.pool.spawn(SOUND_PLAYER, [path]);
    }

    fn refresh_display(&self, base: &mut ModuleBase, now: Instant) {
        match self.phase {
            PomodoroPhase::WaitingToStart => {
                base.full_text = format!("[{}]", "-".repeat(self.segments));
                base.color.clear();
            }
            PomodoroPhase::Running => {
                let remaining = self
                    .end_time
                    .map(|end| end.saturating_duration_since(now))
                    .unwrap_or(Duration::ZERO);
                let fraction = remaining.as_secs_f64() / self.window.as_secs_f64();
                base.full_text = render_bar(fraction, self.segments);
                base.color = color(15, 90, 55);
            }
            PomodoroPhase::EndOfRun => {
                base.full_text = "time's up!".to_string();
                base.color = color(15, 90, 55);
            }
            PomodoroPhase::InBreak => {
                base.full_text = "break".to_string();
                base.color = BREAK_COLOR.to_string();
            }
        }
    }
}

impl BarWidget for PomodoroModule {
    fn update(&mut self, base: &mut ModuleBase, ctx: &mut Context) -> Result<()> {
        let now = Instant::now();
        if self.phase == PomodoroPhase::Running {
            if let Some(end) = self.end_time {
                if now >= end {
                    self.phase = PomodoroPhase::EndOfRun;
                    self.end_time = None;
                    self.notify(ctx, &self.end_msg);
                    self.play_sound(ctx, &self.end_sound);
                }
            }
        }
        self.refresh_display(base, now);
        Ok(())
    }

    fn handle_input(&mut self, base: &mut ModuleBase, event: &ClickEvent, ctx: &mut Context) {
        let now = Instant::now();
        match (self.phase, event.button) {
            (PomodoroPhase::WaitingToStart, MouseButton::Left) => {
                self.phase = PomodoroPhase::Running;
                self.end_time = Some(now + self.window);
                self.notify(ctx, &self.start_msg);
                if let Some(sound) = &self.start_sound {
                    self.play_sound(ctx, sound);
                }
            }
            (PomodoroPhase::Running, MouseButton::Right) => {
                self.phase = PomodoroPhase::WaitingToStart;
                self.end_time = None;
            }
            (PomodoroPhase::EndOfRun, _) => {
                self.phase = PomodoroPhase::InBreak;
            }
            (PomodoroPhase::InBreak, MouseButton::Right) => {
                self.phase = PomodoroPhase::WaitingToStart;
            }
            _ => {}
        }
        self.refresh_display(base, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> PomodoroModule {
        PomodoroModule::new(
            Duration::from_secs(25 * 60),
            8,
            "/tmp/ring.ogg".to_string(),
            None,
            None,
            None,
        )
    }

    fn click(button: u64) -> ClickEvent {
        serde_json::from_str(&format!(
            r#"{{"name":"pomo","button":{button},"x":0,"y":0}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_left_click_starts_the_run() {
        let mut module = module();
        let mut base = ModuleBase::new("pomo");
        let mut ctx = Context::new();
        let before = Instant::now();

        module.handle_input(&mut base, &click(1), &mut ctx);

        assert_eq!(module.phase(), PomodoroPhase::Running);
        let end = module.end_time.unwrap();
        let expected = before + Duration::from_secs(25 * 60);
        assert!(end >= expected && end <= expected + Duration::from_secs(5));
        // Running shows a nearly full bar, not the dashed waiting pattern.
        assert!(!base.full_text.contains('-'));
        assert_eq!(base.color, color(15, 90, 55));
    }

    #[test]
    fn test_right_click_aborts_the_run() {
        let mut module = module();
        let mut base = ModuleBase::new("pomo");
        let mut ctx = Context::new();

        module.handle_input(&mut base, &click(1), &mut ctx);
        module.handle_input(&mut base, &click(3), &mut ctx);

        assert_eq!(module.phase(), PomodoroPhase::WaitingToStart);
        assert!(module.end_time.is_none());
        assert_eq!(base.full_text, format!("[{}]", "-".repeat(8)));
    }

    #[test]
    fn test_expired_run_transitions_to_end_of_run() {
        let mut module = module();
        let mut base = ModuleBase::new("pomo");
        let mut ctx = Context::new();

        module.handle_input(&mut base, &click(1), &mut ctx);
        module.end_time = Some(Instant::now() - Duration::from_secs(1));
        module.update(&mut base, &mut ctx).unwrap();

        assert_eq!(module.phase(), PomodoroPhase::EndOfRun);
        assert!(module.end_time.is_none());
        assert_eq!(base.full_text, "time's up!");
    }

    #[test]
    fn test_any_click_after_end_enters_break() {
        let mut module = module();
        let mut base = ModuleBase::new("pomo");
        let mut ctx = Context::new();

        module.handle_input(&mut base, &click(1), &mut ctx);
        module.end_time = Some(Instant::now() - Duration::from_secs(1));
        module.update(&mut base, &mut ctx).unwrap();
        module.handle_input(&mut base, &click(4), &mut ctx);

        assert_eq!(module.phase(), PomodoroPhase::InBreak);
        assert_eq!(base.full_text, "break");
        assert_eq!(base.color, BREAK_COLOR);
    }

    #[test]
    fn test_right_click_in_break_rearms() {
        let mut module = module();
        let mut base = ModuleBase::new("pomo");
        let mut ctx = Context::new();

        module.handle_input(&mut base, &click(1), &mut ctx);
        module.end_time = Some(Instant::now() - Duration::from_secs(1));
        module.update(&mut base, &mut ctx).unwrap();
        module.handle_input(&mut base, &click(2), &mut ctx);
        module.handle_input(&mut base, &click(3), &mut ctx);

        assert_eq!(module.phase(), PomodoroPhase::WaitingToStart);
        assert_eq!(base.full_text, format!("[{}]", "-".repeat(8)));
    }

    #[test]
    fn test_clicks_in_waiting_other_than_left_are_ignored() {
        let mut module = module();
        let mut base = ModuleBase::new("pomo");
        let mut ctx = Context::new();

        module.handle_input(&mut base, &click(3), &mut ctx);
        module.handle_input(&mut base, &click(5), &mut ctx);
        assert_eq!(module.phase(), PomodoroPhase::WaitingToStart);
    }
}
