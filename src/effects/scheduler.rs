/// Per-frame animation scheduler: owns the active instance list and the
/// periodic driver, steps every effect once per tick, asks the host to
/// repaint, and retires finished instances.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::core::config::EffectConfig;
use crate::core::types::{link_id, Edge};
use crate::effects::effect_glow::GlowParams;
use crate::effects::effect_vibrate::VibrateParams;
use crate::effects::instance::{AnimationInstance, Step};
use crate::graph::host::SharedHost;

pub struct AnimationScheduler {
    host: SharedHost,
    config: Arc<EffectConfig>,
    instances: Arc<Mutex<Vec<AnimationInstance>>>,
    running: Arc<AtomicBool>,
    driver: Option<JoinHandle<()>>,
}

impl AnimationScheduler {
    pub fn new(host: SharedHost) -> Self {
        Self::with_config(host, EffectConfig::default())
    }

    pub fn with_config(host: SharedHost, config: EffectConfig) -> Self {
        Self {
            host,
            config: Arc::new(config),
            instances: Arc::new(Mutex::new(Vec::new())),
            running: Arc::new(AtomicBool::new(false)),
            driver: None,
        }
    }

    /// Begin ticking every `update_interval_ms`. A second call while
    /// already running is a no-op; there is never more than one driver.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let host = Arc::clone(&self.host);
        let config = Arc::clone(&self.config);
        let instances = Arc::clone(&self.instances);
        let running = Arc::clone(&self.running);
        let interval = Duration::from_millis(self.config.update_interval_ms.max(1));

        self.driver = Some(thread::spawn(move || {
            // ticks are strictly sequential: the next sleep starts only
            // after the previous tick has returned
            while running.load(Ordering::SeqCst) {
                Self::tick(&host, &config, &instances);
                thread::sleep(interval);
            }
        }));
        log::debug!("animation driver started, {}ms tick", interval.as_millis());
    }

    /// Halt ticking. In-flight effect state is kept and resumes on the
    /// next `start()`.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(driver) = self.driver.take() {
            driver.join().ok();
            log::debug!("animation driver stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Number of animations currently in flight.
    pub fn active_animations(&self) -> usize {
        lock(&self.instances).len()
    }

    /// Start a glow pulse on a node. Unknown ids are dropped silently.
    pub fn glow(&self, node_id: &str, params: GlowParams) {
        let mut instances = lock(&self.instances);
        let mut host = lock(&self.host);
        if host.find_node_mut(node_id).is_none() {
            log::debug!("glow: no node {:?}, request dropped", node_id);
            return;
        }
        instances.push(AnimationInstance::glow(node_id, params));
    }

    /// Start a vibrate jitter on a node. Unknown ids are dropped silently.
    pub fn vibrate(&self, node_id: &str, params: VibrateParams) {
        let mut instances = lock(&self.instances);
        let mut host = lock(&self.host);
        if host.find_node_mut(node_id).is_none() {
            log::debug!("vibrate: no node {:?}, request dropped", node_id);
            return;
        }
        instances.push(AnimationInstance::vibrate(node_id, params));
    }

    /// Reveal the edge from `source_id` to `target_id`, creating it
    /// through the host if it does not exist yet.
    pub fn show_link(&self, source_id: &str, target_id: &str) {
        let id = link_id(source_id, target_id);
        let mut instances = lock(&self.instances);
        let mut host = lock(&self.host);
        if host.find_edge_mut(&id).is_none() {
            host.create_edge(&id, source_id, target_id);
        }
        instances.push(AnimationInstance::show_link(&id));
    }

    pub fn has_edge(&self, id: &str) -> bool {
        lock(&self.host).find_edge_mut(id).is_some()
    }

    pub fn get_edge(&self, id: &str) -> Option<Edge> {
        lock(&self.host).find_edge_mut(id).map(|edge| edge.clone())
    }

    /// One scheduler cycle: step every instance once in insertion order,
    /// request a repaint, then drop the instances that finished.
    ///
    /// Lock order is instances before host on every path through this
    /// type; requests taking the same locks cannot interleave with a tick,
    /// so an instance appended during a tick is first stepped on the next.
    fn tick(host: &SharedHost, config: &EffectConfig, instances: &Mutex<Vec<AnimationInstance>>) {
        let mut instances = lock(instances);
        let mut host = lock(host);

        let mut finished = Vec::new();
        for (index, instance) in instances.iter_mut().enumerate() {
            if instance.step(&mut *host, config) == Step::Done {
                finished.push(index);
            }
        }

        host.request_redraw();

        for index in finished.into_iter().rev() {
            instances.remove(index);
        }
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A poisoned lock must not wedge a purely cosmetic subsystem.
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Node;
    use crate::graph::host::GraphHost;
    use crate::graph::store::GraphStore;

    /// GraphStore wrapper counting collaborator calls.
    struct ProbeHost {
        store: GraphStore,
        redraws: usize,
        edges_created: usize,
    }

    impl ProbeHost {
        fn new(store: GraphStore) -> Self {
            Self {
                store,
                redraws: 0,
                edges_created: 0,
            }
        }
    }

    impl GraphHost for ProbeHost {
        fn find_node_mut(&mut self, id: &str) -> Option<&mut Node> {
            self.store.find_node_mut(id)
        }

        fn find_edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
            self.store.find_edge_mut(id)
        }

        fn create_edge(&mut self, id: &str, source_id: &str, target_id: &str) -> &mut Edge {
            self.edges_created += 1;
            self.store.create_edge(id, source_id, target_id)
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }
    }

    fn probe_with_nodes(ids: &[&str]) -> Arc<Mutex<ProbeHost>> {
        let mut store = GraphStore::new();
        for id in ids {
            store.add_node(Node::new(id));
        }
        Arc::new(Mutex::new(ProbeHost::new(store)))
    }

    fn tick(scheduler: &AnimationScheduler) {
        AnimationScheduler::tick(&scheduler.host, &scheduler.config, &scheduler.instances);
    }

    #[test]
    fn test_unknown_node_is_dropped() {
        let probe = probe_with_nodes(&["a"]);
        let scheduler = AnimationScheduler::new(probe);

        scheduler.glow("missing", GlowParams::default());
        scheduler.vibrate("missing", VibrateParams::default());
        assert_eq!(scheduler.active_animations(), 0);

        scheduler.glow("a", GlowParams::default());
        assert_eq!(scheduler.active_animations(), 1);
    }

    #[test]
    fn test_show_link_creates_edge_once() {
        let probe = probe_with_nodes(&["a", "b"]);
        let scheduler = AnimationScheduler::new(Arc::clone(&probe) as SharedHost);

        assert!(!scheduler.has_edge("a_b"));
        scheduler.show_link("a", "b");
        assert!(scheduler.has_edge("a_b"));
        assert!(scheduler.get_edge("a_b").is_some());

        scheduler.show_link("a", "b");
        assert_eq!(lock(&probe).edges_created, 1, "second request reuses the edge");
        assert_eq!(scheduler.active_animations(), 2);
    }

    #[test]
    fn test_finished_instance_removed_before_next_tick() {
        let probe = probe_with_nodes(&["a"]);
        let scheduler = AnimationScheduler::new(probe);

        // slow_by 1 x repeat 1 = one tick to terminal
        scheduler.vibrate(
            "a",
            VibrateParams {
                slow_by: Some(1),
                repeat: Some(1),
                ..VibrateParams::default()
            },
        );
        assert_eq!(scheduler.active_animations(), 1);

        tick(&scheduler);
        assert_eq!(scheduler.active_animations(), 0);
    }

    #[test]
    fn test_tick_steps_every_instance_and_redraws() {
        let probe = probe_with_nodes(&["a", "b"]);
        let scheduler = AnimationScheduler::new(Arc::clone(&probe) as SharedHost);

        scheduler.glow("a", GlowParams::default());
        scheduler.glow("b", GlowParams::default());

        tick(&scheduler);
        {
            let probe = lock(&probe);
            assert_eq!(probe.redraws, 1);
            let glow = &probe.store.nodes[0];
            assert!(glow.size > 10.0, "first tick inflates the node");
            assert!(probe.store.nodes[1].size > 10.0);
        }

        // a tick with no instances still requests a repaint
        tick(&scheduler);
        tick(&scheduler);
        assert_eq!(lock(&probe).redraws, 3);
    }

    #[test]
    fn test_glow_runs_to_terminal_through_scheduler() {
        let probe = probe_with_nodes(&["a"]);
        let scheduler = AnimationScheduler::new(Arc::clone(&probe) as SharedHost);

        scheduler.glow("a", GlowParams::default());
        let mut ticks = 0;
        while scheduler.active_animations() > 0 {
            tick(&scheduler);
            ticks += 1;
            assert!(ticks < 10_000, "glow never retired");
        }
        assert_eq!(lock(&probe).store.nodes[0].size, 10.0);
    }

    #[test]
    fn test_show_link_runs_to_terminal_through_scheduler() {
        let probe = probe_with_nodes(&["a", "b"]);
        let config = EffectConfig {
            update_interval_ms: 25,
            ..EffectConfig::default()
        };
        let scheduler =
            AnimationScheduler::with_config(Arc::clone(&probe) as SharedHost, config);

        scheduler.show_link("a", "b");
        let mut ticks = 0;
        while scheduler.active_animations() > 0 {
            tick(&scheduler);
            ticks += 1;
            assert!(ticks < 10_000, "show link never retired");
        }
        assert_eq!(ticks, 100);
        assert_eq!(scheduler.get_edge("a_b").map(|e| e.size), Some(1.0));
    }

    #[test]
    fn test_driver_ticks_and_stops() {
        let probe = probe_with_nodes(&["a"]);
        let mut scheduler = AnimationScheduler::new(Arc::clone(&probe) as SharedHost);

        scheduler.start();
        assert!(scheduler.is_running());
        thread::sleep(Duration::from_millis(300));
        scheduler.stop();
        assert!(!scheduler.is_running());

        let ticked = lock(&probe).redraws;
        assert!(ticked >= 2, "driver should have ticked, saw {}", ticked);

        // no further ticks after stop
        thread::sleep(Duration::from_millis(100));
        assert_eq!(lock(&probe).redraws, ticked);
    }

    #[test]
    fn test_start_is_idempotent() {
        let probe = probe_with_nodes(&[]);
        let mut scheduler = AnimationScheduler::new(Arc::clone(&probe) as SharedHost);

        scheduler.start();
        scheduler.start();
        thread::sleep(Duration::from_millis(300));
        scheduler.stop();

        // one driver sleeping 25ms between ticks cannot exceed this
        // ceiling; a duplicate driver would roughly double the count
        let ticked = lock(&probe).redraws;
        assert!(ticked <= 300 / 25 + 2, "too many ticks: {}", ticked);
    }

    #[test]
    fn test_stop_preserves_in_flight_state() {
        let probe = probe_with_nodes(&["a", "b"]);
        let mut scheduler = AnimationScheduler::new(Arc::clone(&probe) as SharedHost);

        // default show-link fade takes 2.5s; 100ms of ticking cannot finish it
        scheduler.show_link("a", "b");
        scheduler.start();
        thread::sleep(Duration::from_millis(100));
        scheduler.stop();

        assert_eq!(scheduler.active_animations(), 1);
        let width_at_stop = scheduler.get_edge("a_b").map(|e| e.size);

        // no tick while stopped, the fade holds
        thread::sleep(Duration::from_millis(50));
        assert_eq!(scheduler.get_edge("a_b").map(|e| e.size), width_at_stop);

        // restart resumes from the preserved state
        scheduler.start();
        thread::sleep(Duration::from_millis(100));
        scheduler.stop();
        let width_after_restart = scheduler.get_edge("a_b").map(|e| e.size);
        assert!(width_after_restart < width_at_stop);
    }
}
