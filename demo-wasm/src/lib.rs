use rosary::{FrameClock, NodeKind, Rosary, SimConfig, Surface, Vec2};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

// ---- Rosary Demo ----

/// Browser-facing wrapper. The page owns the canvas, converts pointer events to
/// CSS-pixel coordinates and calls `frame` from `requestAnimationFrame`.
#[wasm_bindgen]
pub struct RosaryDemo {
    rosary: Rosary<f32>,
    clock: FrameClock<f32>,
}

#[wasm_bindgen]
impl RosaryDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<RosaryDemo, JsError> {
        let config = SimConfig::new().with_jitter(1.0, seed_from_time());
        let max_dt = config.max_frame_dt;
        let rosary = Rosary::new(Surface::new(width, height), config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(RosaryDemo {
            rosary,
            clock: FrameClock::new(max_dt),
        })
    }

    /// Start (or restart) the clock at `now_ms`.
    pub fn start(&mut self, now_ms: f64) {
        self.clock.start(now_ms);
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Advance by the time elapsed since the last frame. Returns false while stopped.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        match self.clock.tick(now_ms) {
            Some(dt) => {
                self.rosary.step(dt);
                true
            }
            None => false,
        }
    }

    /// Returns true when the graph was rebuilt at a new scale.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.rosary.resize(Surface::new(width, height))
    }

    pub fn reset(&mut self) {
        self.rosary.reset();
    }

    pub fn destroy(&mut self) {
        self.clock.stop();
        self.rosary.destroy();
    }

    pub fn highlight(&mut self, id: &str) -> bool {
        self.rosary.highlight(id)
    }

    /// Index of the highlighted node, or -1.
    pub fn highlighted_index(&self) -> i32 {
        self.rosary
            .highlighted()
            .and_then(|id| self.rosary.graph().find(id))
            .map_or(-1, |i| i as i32)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.rosary.pointer_down(Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.rosary.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.rosary.pointer_up();
    }

    /// Toggle the pin of the node under the pointer. Returns 1 (pinned), 0 (unpinned) or -1 (no node).
    pub fn context_menu(&mut self, x: f32, y: f32) -> i32 {
        match self.rosary.secondary_action(Vec2::new(x, y)) {
            Some(true) => 1,
            Some(false) => 0,
            None => -1,
        }
    }

    pub fn set_gravity(&mut self, enabled: bool) {
        self.rosary.set_gravity_enabled(enabled);
    }

    pub fn set_collision(&mut self, enabled: bool) {
        self.rosary.set_collision_enabled(enabled);
    }

    /// Index of the dragged node, or -1.
    pub fn dragged_index(&self) -> i32 {
        self.rosary.dragged_node().map_or(-1, |i| i as i32)
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.rosary.nodes().len() * 2);
        for n in self.rosary.nodes() {
            out.push(n.pos.x);
            out.push(n.pos.y);
        }
        out
    }

    pub fn radii(&self) -> Vec<f32> {
        self.rosary.nodes().iter().map(|n| n.radius).collect()
    }

    /// Per node: 0 ave, 1 pater, 2 medal, 3 cross anchor
    pub fn kinds(&self) -> Vec<u8> {
        self.rosary
            .nodes()
            .iter()
            .map(|n| match n.kind {
                NodeKind::Ave => 0,
                NodeKind::Pater => 1,
                NodeKind::Medal => 2,
                NodeKind::CrossAnchor => 3,
            })
            .collect()
    }

    pub fn pinned(&self) -> Vec<u8> {
        self.rosary.nodes().iter().map(|n| n.pinned as u8).collect()
    }

    /// Node id at `index`, for step-through UIs.
    pub fn node_id(&self, index: usize) -> Option<String> {
        self.rosary.nodes().get(index).map(|n| n.id.clone())
    }

    /// Returns flat [a0, b0, a1, b1, ...] node indices per link
    pub fn links(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.rosary.links().len() * 2);
        for l in self.rosary.links() {
            out.push(l.a as u32);
            out.push(l.b as u32);
        }
        out
    }

    /// Returns [cross_width, cross_height] at the active scale
    pub fn cross_size(&self) -> Vec<f32> {
        let scaled = self.rosary.config().scaled;
        vec![scaled.cross_width, scaled.cross_height]
    }

    pub fn scale(&self) -> f32 {
        self.rosary.scale()
    }

    pub fn node_count(&self) -> usize {
        self.rosary.nodes().len()
    }
}

fn seed_from_time() -> u64 {
    date_now().to_bits()
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}
