//! Event loop and bar protocol driver
//!
//! Speaks the swaybar/i3bar JSON protocol to exactly one parent process:
//! an endless JSON array of render lines on stdout, click events as JSON
//! lines on stdin. The loop alternates between a bounded wait for one input
//! line and the periodic update of every module.

use crate::core::{ClickEvent, Context, Module};
use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Header object that opens the conversation with the bar host.
pub const PROTOCOL_HEADER: &str = r#"{"click_events": true, "version": 1}"#;

/// Bounded wait for one input line before an idle tick runs.
pub const INPUT_TIMEOUT: Duration = Duration::from_secs(1);

/// Outcome of one bounded wait on the input stream.
#[derive(Debug)]
pub enum Input {
    /// One line arrived.
    Line(String),
    /// Nothing arrived within the bound.
    Timeout,
    /// The bar host closed our stdin.
    Closed,
}

/// The module collection plus everything needed to drive one tick.
pub struct StatusBar {
    modules: Vec<Module>,
    ctx: Context,
    saw_frame: bool,
}

impl StatusBar {
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules,
            ctx: Context::new(),
            saw_frame: false,
        }
    }

    /// Sweep the helper process pool once; never blocks.
    pub fn reap_helpers(&mut self) {
        self.ctx.pool.reap();
    }

    /// Run one idle tick: update every module, then render.
    pub fn tick(&mut self) -> String {
        for module in &mut self.modules {
            module.update(&mut self.ctx);
        }
        self.render_line()
    }

    /// Render the current block states as one protocol line.
    pub fn render_line(&self) -> String {
        let blocks: Vec<String> = self
            .modules
            .iter()
            .map(|module| module.base.render_block())
            .collect();
        format!(",[{}]", blocks.join(","))
    }

    /// Process one input line; returns the render line it produced, if any.
    ///
    /// A bare `[` before any other input is the host's array framing and is
    /// swallowed. A leading `,` is inter-event framing and is stripped.
    /// Malformed JSON and clicks for unregistered names produce no output;
    /// the loop simply continues.
    pub fn handle_line(&mut self, raw: &str) -> Option<String> {
        let line = raw.trim();
        if line.is_empty() {
            return None;
        }
        if line == "[" && !self.saw_frame {
            self.saw_frame = true;
            return None;
        }
        self.saw_frame = true;

        let payload = line.strip_prefix(',').unwrap_or(line);
        let event: ClickEvent = match serde_json::from_str(payload) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("malformed input line {:?}: {}", payload, e);
                return None;
            }
        };

        let ctx = &mut self.ctx;
        let Some(module) = self.modules.iter_mut().find(|m| m.name() == event.name) else {
            log::debug!("dropping click for unregistered module {:?}", event.name);
            return None;
        };
        module.handle_input(&event, ctx);
        module.update(ctx);
        Some(self.render_line())
    }
}

/// Wait for the next input with a bounded timeout.
async fn next_input<R>(lines: &mut tokio::io::Lines<R>) -> Input
where
    R: AsyncBufRead + Unpin,
{
    match tokio::time::timeout(INPUT_TIMEOUT, lines.next_line()).await {
        Err(_) => Input::Timeout,
        Ok(Ok(Some(line))) => Input::Line(line),
        Ok(Ok(None)) => Input::Closed,
        Ok(Err(e)) => {
            log::warn!("failed to read input line: {}", e);
            Input::Timeout
        }
    }
}

/// Drive the bar until the host closes our stdin.
pub async fn run(mut bar: StatusBar) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", PROTOCOL_HEADER)?;
    writeln!(out, "[")?;
    writeln!(out, "[]")?;
    out.flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        bar.reap_helpers();
        match next_input(&mut lines).await {
            Input::Timeout => {
                let line = bar.tick();
                writeln!(out, "{}", line)?;
                out.flush()?;
            }
            Input::Line(raw) => {
                if let Some(line) = bar.handle_line(&raw) {
                    writeln!(out, "{}", line)?;
                    out.flush()?;
                }
            }
            Input::Closed => {
                log::info!("input stream closed, shutting down");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::core::build_all;

    fn bar(config: &str) -> StatusBar {
        StatusBar::new(build_all(config::parse(config).unwrap()).unwrap())
    }

    #[test]
    fn test_initial_framing_is_swallowed_once() {
        let mut bar = bar(r#"[{"type": "red_shift", "name": "shift"}]"#);
        assert!(bar.handle_line("[").is_none());
        // A second bare `[` is no longer framing and must fail the parse.
        assert!(bar.handle_line("[").is_none());
        assert!(bar.saw_frame);
    }

    #[test]
    fn test_leading_comma_is_stripped() {
        let mut bar = bar(r#"[{"type": "red_shift", "name": "shift"}]"#);
        let line = bar
            .handle_line(r#",{"name":"shift","button":5,"x":0,"y":0}"#)
            .expect("click should produce a render line");
        assert!(line.contains("0.90"));
    }

    #[test]
    fn test_malformed_json_produces_no_output() {
        let mut bar = bar(r#"[{"type": "red_shift", "name": "shift"}]"#);
        assert!(bar.handle_line("{not json").is_none());
        assert!(bar.handle_line(",{\"name\":").is_none());
    }

    #[test]
    fn test_unregistered_name_is_dropped_silently() {
        let mut bar = bar(r#"[{"type": "red_shift", "name": "shift"}]"#);
        assert!(bar
            .handle_line(r#"{"name":"nope","button":1,"x":0,"y":0}"#)
            .is_none());
    }

    #[test]
    fn test_render_line_joins_blocks_in_order() {
        let bar = bar(
            r#"[
                {"type": "red_shift", "name": "a"},
                {"type": "red_shift", "name": "b"}
            ]"#,
        );
        let line = bar.render_line();
        assert!(line.starts_with(",["));
        assert!(line.ends_with(']'));
        let a = line.find(r#""name":"a""#).unwrap();
        let b = line.find(r#""name":"b""#).unwrap();
        assert!(a < b);
    }
}
