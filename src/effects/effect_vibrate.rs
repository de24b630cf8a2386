/// Horizontal jitter effect: bounce a node around its resting x position
/// in alternating directions, then settle it back where it started.

use crate::core::config::VibrateConfig;
use crate::core::types::Node;
use crate::effects::instance::Step;

/// Per-request overrides; unset fields fall back to [`VibrateConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VibrateParams {
    pub slow_by: Option<u32>,
    pub intensity: Option<f64>,
    pub repeat: Option<u32>,
}

pub struct Vibrate {
    params: VibrateParams,
    state: Option<VibrateState>,
}

struct VibrateState {
    /// Signed displacement magnitude; flips on every move.
    sign: f64,
    origin_x: f64,
    /// Size captured at start, so a concurrent size effect cannot modulate
    /// the jitter amplitude.
    origin_size: f64,
    tick_count: u32,
    slow_by: u32,
    total_ticks: u32,
}

impl VibrateState {
    fn new(params: &VibrateParams, cfg: &VibrateConfig, node: &Node) -> Self {
        let slow_by = params.slow_by.unwrap_or(cfg.slow_by).max(1);
        Self {
            sign: params.intensity.unwrap_or(cfg.intensity),
            origin_x: node.x,
            origin_size: node.size,
            tick_count: 0,
            slow_by,
            total_ticks: slow_by * params.repeat.unwrap_or(cfg.repeat),
        }
    }
}

impl Vibrate {
    pub fn new(params: VibrateParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    pub(crate) fn step(&mut self, node: &mut Node, cfg: &VibrateConfig) -> Step {
        let params = self.params;
        let st = self
            .state
            .get_or_insert_with(|| VibrateState::new(&params, cfg, node));

        st.tick_count += 1;
        if st.tick_count >= st.total_ticks {
            node.x = st.origin_x;
            return Step::Done;
        }

        if st.tick_count % st.slow_by == 0 {
            st.sign = -st.sign;
            node.x = st.origin_x + st.origin_size * st.sign;
        }
        Step::Continue
    }
}
