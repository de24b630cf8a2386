/// Headless demo: build a small graph, run every effect to completion,
/// then dump the final graph state as JSON.
///
/// Run with: cargo run --example effects-demo

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use relay_effects::{
    AnimationScheduler, Edge, GlowParams, GraphStore, Node, SharedHost, VibrateParams,
};

fn main() {
    env_logger::init();

    let mut store = GraphStore::new();
    store.add_node(Node::at("alpha", 0.0, 0.0));
    store.add_node(Node::at("beta", 120.0, 40.0));
    store.add_node(Node::at("gamma", 240.0, 80.0));
    store.add_edge(Edge::new("alpha_beta", "alpha", "beta"));

    let store = Arc::new(Mutex::new(store));
    let host: SharedHost = store.clone();

    let mut effects = AnimationScheduler::new(host);
    effects.start();

    effects.glow("alpha", GlowParams::default());
    effects.vibrate("beta", VibrateParams::default());
    effects.show_link("alpha", "gamma");

    // unknown target: dropped silently, visible with RUST_LOG=debug
    effects.glow("nobody", GlowParams::default());

    while effects.active_animations() > 0 {
        thread::sleep(Duration::from_millis(100));
    }
    effects.stop();

    let store = store.lock().unwrap();
    println!("{}", serde_json::to_string_pretty(&*store).unwrap());
}
