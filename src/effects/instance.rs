/// Active-animation bookkeeping: one instance per running effect.

use crate::core::config::EffectConfig;
use crate::effects::effect_glow::{Glow, GlowParams};
use crate::effects::effect_show_link::ShowLink;
use crate::effects::effect_smooth_color::SmoothColor;
use crate::effects::effect_vibrate::{Vibrate, VibrateParams};
use crate::graph::host::GraphHost;

/// What a step decided about its instance's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

/// Identity of the graph element an instance mutates.
#[derive(Debug, Clone)]
pub enum Target {
    Node(String),
    Edge(String),
}

/// Tagged animation kinds, each carrying its own state machine.
pub enum Effect {
    Glow(Glow),
    Vibrate(Vibrate),
    ShowLink(ShowLink),
    SmoothColor(SmoothColor),
}

/// A single in-flight animation bound to one node or edge.
pub struct AnimationInstance {
    target: Target,
    effect: Effect,
}

impl AnimationInstance {
    pub fn glow(node_id: &str, params: GlowParams) -> Self {
        Self {
            target: Target::Node(node_id.to_string()),
            effect: Effect::Glow(Glow::new(params)),
        }
    }

    pub fn vibrate(node_id: &str, params: VibrateParams) -> Self {
        Self {
            target: Target::Node(node_id.to_string()),
            effect: Effect::Vibrate(Vibrate::new(params)),
        }
    }

    pub fn show_link(edge_id: &str) -> Self {
        Self {
            target: Target::Edge(edge_id.to_string()),
            effect: Effect::ShowLink(ShowLink::new()),
        }
    }

    pub fn smooth_color(node_id: &str) -> Self {
        Self {
            target: Target::Node(node_id.to_string()),
            effect: Effect::SmoothColor(SmoothColor::new()),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Advance this animation by one tick against the host graph.
    /// A target that has vanished from the host ends the instance.
    pub(crate) fn step(&mut self, host: &mut dyn GraphHost, config: &EffectConfig) -> Step {
        match (&mut self.effect, &self.target) {
            (Effect::Glow(fx), Target::Node(id)) => match host.find_node_mut(id) {
                Some(node) => fx.step(node, &config.glow),
                None => Step::Done,
            },
            (Effect::Vibrate(fx), Target::Node(id)) => match host.find_node_mut(id) {
                Some(node) => fx.step(node, &config.vibrate),
                None => Step::Done,
            },
            (Effect::SmoothColor(fx), Target::Node(id)) => match host.find_node_mut(id) {
                Some(node) => fx.step(node, &config.color),
                None => Step::Done,
            },
            (Effect::ShowLink(fx), Target::Edge(id)) => match host.find_edge_mut(id) {
                Some(edge) => fx.step(edge, &config.show_link, config.update_interval_ms),
                None => Step::Done,
            },
            // Constructors pair kinds with the right target variant; a
            // mismatch has nothing to animate.
            _ => Step::Done,
        }
    }
}
