//! Network traffic module
//!
//! Tracks the raw packet counters under
//! `/sys/class/net/<iface>/statistics/`. The counters are monotonically
//! increasing kernel values; the module keeps the last-seen absolute values
//! and shows the received delta as a bar scaled against the configured
//! bandwidth ceiling. The first sample only stores a baseline.

use crate::core::{BarWidget, Context, ModuleBase};
use crate::render::render_bar;
use anyhow::Result;

const DEFAULT_DOWN_COLOR: &str = "#FF0000";

#[derive(Debug, Clone, Copy)]
struct TrafficSample {
    received: u64,
    combined: u64,
}

#[derive(Debug)]
pub struct NetworkTrafficModule {
    iface: String,
    when_up: String,
    when_down: String,
    down_color: String,
    max_bw: u64,
    width: usize,
    prev: Option<TrafficSample>,
}

impl NetworkTrafficModule {
    pub fn new(
        iface: String,
        when_up: String,
        when_down: String,
        max_bw: u64,
        when_down_color: Option<String>,
        width: usize,
    ) -> Self {
        Self {
            iface,
            when_up,
            when_down,
            down_color: when_down_color.unwrap_or_else(|| DEFAULT_DOWN_COLOR.to_string()),
            max_bw: max_bw.max(1),
            width,
            prev: None,
        }
    }

    fn read_counter(&self, counter: &str) -> Option<u64> {
        let path = format!("/sys/class/net/{}/statistics/{}", self.iface, counter);
        std::fs::read_to_string(path).ok()?.trim().parse().ok()
    }

    fn read_sample(&self) -> Option<TrafficSample> {
        let received = self.read_counter("rx_packets")?;
        let transmitted = self.read_counter("tx_packets")?;
        Some(TrafficSample {
            received,
            combined: received + transmitted,
        })
    }

    /// Fold one sample (or its absence) into the display state.
    ///
    /// Split from `update` so the delta logic is testable without a live
    /// interface.
    fn apply_sample(&mut self, base: &mut ModuleBase, sample: Option<TrafficSample>) {
        let Some(sample) = sample else {
            // Interface gone; counters restart from zero when it returns,
            // so the baseline is dropped too.
            self.prev = None;
            base.full_text = self.when_down.clone();
            base.color = self.down_color.clone();
            return;
        };

        let prev = self.prev.replace(sample);
        match prev {
            None => {
                base.full_text = format!("{} {}", self.when_up, render_bar(0.0, self.width));
                base.color.clear();
            }
            Some(prev) => {
                let received_delta = sample.received.saturating_sub(prev.received);
                let combined_delta = sample.combined.saturating_sub(prev.combined);
                if combined_delta == 0 {
                    base.full_text = self.when_down.clone();
                    base.color = self.down_color.clone();
                } else {
                    let fraction = received_delta as f64 / self.max_bw as f64;
                    base.full_text =
                        format!("{} {}", self.when_up, render_bar(fraction, self.width));
                    base.color.clear();
                }
            }
        }
    }
}

impl BarWidget for NetworkTrafficModule {
    fn update(&mut self, base: &mut ModuleBase, _ctx: &mut Context) -> Result<()> {
        let sample = self.read_sample();
        self.apply_sample(base, sample);
        Ok(())
    }
}
