/// Time-based visual effects for graph views.
///
/// The embedding application hands its graph view to an
/// [`AnimationScheduler`] through the [`GraphHost`] trait and requests
/// effects by node/edge id; the scheduler drives them on a fixed tick.
pub mod core;
pub mod effects;
pub mod graph;

pub use crate::core::config::{
    EffectConfig, GlowConfig, ShowLinkConfig, SmoothColorConfig, VibrateConfig,
};
pub use crate::core::types::{link_id, Color, Edge, Node};
pub use crate::effects::effect_glow::GlowParams;
pub use crate::effects::effect_vibrate::VibrateParams;
pub use crate::effects::scheduler::AnimationScheduler;
pub use crate::graph::host::{GraphHost, SharedHost};
pub use crate::graph::store::GraphStore;
