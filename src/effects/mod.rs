pub mod effect_glow;
pub mod effect_show_link;
pub mod effect_smooth_color;
pub mod effect_vibrate;
pub mod instance;
pub mod scheduler;
