//! Frame pacing: skip redundant redraws once the fog has settled.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    last_static: bool,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            last_static: false,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false` (fog still blending): always render.
    /// - When `is_static` turns true: render once, so the final blended fog
    ///   colors reach the screen.
    /// - Otherwise render immediately on fingerprint change, or at most once
    ///   per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = fingerprint != self.last_fingerprint;
        let settled_now = is_static && !self.last_static;
        let due = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        self.last_static = is_static;

        if self.has_rendered && is_static && !settled_now && !changed && !due {
            return false;
        }

        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }
}
