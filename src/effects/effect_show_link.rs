/// Edge reveal effect: flash an edge wide in the highlight color, then
/// fade its width down to the resting value over a fixed duration.

use crate::core::config::{self, ShowLinkConfig};
use crate::core::types::{Color, Edge};
use crate::effects::instance::Step;

pub struct ShowLink {
    state: Option<ShowLinkState>,
}

struct ShowLinkState {
    ticks_remaining: f64,
    width_step: f64,
    end_width: f64,
}

impl ShowLinkState {
    fn new(cfg: &ShowLinkConfig, tick_ms: u64) -> Self {
        let ticks = (cfg.duration_ms / tick_ms.max(1) as f64).max(1.0);
        Self {
            ticks_remaining: ticks,
            width_step: (cfg.start_width - cfg.end_width) / ticks,
            end_width: cfg.end_width,
        }
    }
}

impl ShowLink {
    pub fn new() -> Self {
        Self { state: None }
    }

    pub(crate) fn step(&mut self, edge: &mut Edge, cfg: &ShowLinkConfig, tick_ms: u64) -> Step {
        let st = self.state.get_or_insert_with(|| {
            edge.size = cfg.start_width;
            edge.color = Color::from_hex(config::LINK_HIGHLIGHT, 1.0);
            ShowLinkState::new(cfg, tick_ms)
        });

        st.ticks_remaining -= 1.0;
        edge.size -= st.width_step;
        if st.ticks_remaining <= 0.0 {
            edge.size = st.end_width;
            return Step::Done;
        }
        Step::Continue
    }
}

impl Default for ShowLink {
    fn default() -> Self {
        Self::new()
    }
}
