//! Redraw throttling.
//!
//! A moving snake changes the frame every tick, so those frames always render.
//! A paused or finished game only needs a redraw when its fingerprint changes,
//! plus an occasional refresh.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Force the next call to render.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: render whenever the fingerprint changed.
    /// - When `is_static=true`: render on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = is_static
            && now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if !changed && !stale {
            return false;
        }

        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }
}
