/// Pulsing size effect: inflate a node to a multiple of its base size and
/// back, following a half-sine curve, for a fixed number of cycles.

use crate::core::config::GlowConfig;
use crate::core::types::Node;
use crate::effects::instance::Step;

/// Per-request overrides; unset fields fall back to [`GlowConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GlowParams {
    pub speed: Option<f64>,
    pub grow_factor: Option<f64>,
    pub repeat: Option<u32>,
    pub size: Option<f64>,
}

pub struct Glow {
    params: GlowParams,
    state: Option<GlowState>,
}

struct GlowState {
    /// Pulse phase in degrees; one half-sine cycle spans 0..180.
    phase: f64,
    repeats_left: u32,
    base_size: f64,
    max_size: f64,
    speed: f64,
}

impl GlowState {
    fn new(params: &GlowParams, cfg: &GlowConfig) -> Self {
        let base_size = params.size.unwrap_or(cfg.size);
        Self {
            phase: 0.0,
            repeats_left: params.repeat.unwrap_or(cfg.repeat),
            base_size,
            max_size: base_size * params.grow_factor.unwrap_or(cfg.grow_factor),
            speed: params.speed.unwrap_or(cfg.speed),
        }
    }
}

impl Glow {
    pub fn new(params: GlowParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    pub(crate) fn step(&mut self, node: &mut Node, cfg: &GlowConfig) -> Step {
        let params = self.params;
        let st = self.state.get_or_insert_with(|| GlowState::new(&params, cfg));

        st.phase += st.speed;
        if st.phase >= 180.0 {
            st.repeats_left = st.repeats_left.saturating_sub(1);
            node.size = st.base_size;
            if st.repeats_left == 0 {
                return Step::Done;
            }
            // restart just past the zero-crossing so the pulse does not stutter
            st.phase = st.speed;
            return Step::Continue;
        }

        node.size = st.phase.to_radians().sin() * (st.max_size - st.base_size) + st.base_size;
        Step::Continue
    }
}
