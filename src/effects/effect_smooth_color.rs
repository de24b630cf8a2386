/// Cyclic hue ramp: walk a node's color through the HSV hue wheel until
/// the ramp threshold is reached.
///
/// Defined with the same contract as the other kinds but not wired to the
/// scheduler's public surface.

use crate::core::config::SmoothColorConfig;
use crate::core::types::{Color, Node};
use crate::effects::instance::Step;

/// Hue value (0-100 scale) at which the ramp retires.
pub const HUE_LIMIT: f64 = 100.0;

pub struct SmoothColor {
    state: Option<SmoothColorState>,
}

struct SmoothColorState {
    /// Hue position on a 0-100 scale.
    hue: f64,
    tick_count: u32,
}

impl SmoothColor {
    pub fn new() -> Self {
        Self { state: None }
    }

    pub(crate) fn step(&mut self, node: &mut Node, cfg: &SmoothColorConfig) -> Step {
        let st = self.state.get_or_insert(SmoothColorState {
            hue: 0.0,
            tick_count: 0,
        });

        st.tick_count += 1;
        if st.tick_count % cfg.speed.max(1) == 0 {
            st.hue += cfg.step;
            if st.hue >= HUE_LIMIT {
                st.hue = HUE_LIMIT;
                node.color = hue_color(st.hue);
                return Step::Done;
            }
            node.color = hue_color(st.hue);
        }
        Step::Continue
    }
}

impl Default for SmoothColor {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a 0-100 hue position onto the color wheel at half saturation.
fn hue_color(hue: f64) -> Color {
    Color::from_hsv(hue * 3.6, 0.5, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_at_hue_limit() {
        let mut node = Node::new("n");
        let mut ramp = SmoothColor::new();
        let cfg = SmoothColorConfig {
            step: 3.0,
            speed: 1,
        };

        let mut ticks = 0;
        while ramp.step(&mut node, &cfg) == Step::Continue {
            ticks += 1;
            assert!(ticks < 10_000, "hue ramp never terminated");
        }
        // 3.0 per tick crosses 100 on the 34th update
        assert_eq!(ticks, 33);
        assert_eq!(node.color, hue_color(HUE_LIMIT));
    }

    #[test]
    fn test_speed_throttles_updates() {
        let mut node = Node::new("n");
        let mut ramp = SmoothColor::new();
        let cfg = SmoothColorConfig {
            step: 10.0,
            speed: 3,
        };
        let initial = node.color;

        assert_eq!(ramp.step(&mut node, &cfg), Step::Continue);
        assert_eq!(ramp.step(&mut node, &cfg), Step::Continue);
        assert_eq!(node.color, initial, "color holds between updates");

        assert_eq!(ramp.step(&mut node, &cfg), Step::Continue);
        assert_ne!(node.color, initial, "third tick advances the hue");
    }
}
