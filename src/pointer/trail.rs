// trail.rs - Cursor trail
//
// The dot rides the pointer directly; the ring follows through a stiff
// spring for a short trailing feel. Inert on touch layouts and under
// reduced motion.

use crate::spring::Spring;

const RING_STIFFNESS: f32 = 4000.0;
const RING_DAMPING: f32 = 120.0;

/// Parked well outside the viewport until the first pointer event.
const OFFSCREEN: f32 = -100.0;

pub struct CursorTrail {
    active: bool,
    dot_x: f32,
    dot_y: f32,
    ring_x: Spring,
    ring_y: Spring,
}

impl CursorTrail {
    pub fn new(small_viewport: bool, reduced_motion: bool) -> Self {
        Self {
            active: !(small_viewport || reduced_motion),
            dot_x: OFFSCREEN,
            dot_y: OFFSCREEN,
            ring_x: Spring::new(OFFSCREEN, RING_STIFFNESS, RING_DAMPING),
            ring_y: Spring::new(OFFSCREEN, RING_STIFFNESS, RING_DAMPING),
        }
    }

    /// False means the host should not render (or listen) at all.
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn on_pointer(&mut self, x: f32, y: f32) {
        if !self.active {
            return;
        }
        self.dot_x = x;
        self.dot_y = y;
        self.ring_x.set_target(x);
        self.ring_y.set_target(y);
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.ring_x.step(dt);
        self.ring_y.step(dt);
    }

    /// Zero-latency dot position.
    pub fn dot(&self) -> (f32, f32) {
        (self.dot_x, self.dot_y)
    }

    /// Spring-delayed ring position.
    pub fn ring(&self) -> (f32, f32) {
        (self.ring_x.position(), self.ring_y.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_on_touch_or_reduced_motion() {
        for (small, reduced) in [(true, false), (false, true), (true, true)] {
            let mut trail = CursorTrail::new(small, reduced);
            assert!(!trail.active());
            trail.on_pointer(100.0, 100.0);
            trail.tick(1.0);
            assert_eq!(trail.dot(), (OFFSCREEN, OFFSCREEN));
        }
    }

    #[test]
    fn dot_leads_and_ring_catches_up() {
        let mut trail = CursorTrail::new(false, false);
        assert!(trail.active());

        trail.on_pointer(200.0, 120.0);
        assert_eq!(trail.dot(), (200.0, 120.0));

        trail.tick(1.0 / 60.0);
        let (rx, _) = trail.ring();
        assert!(rx > OFFSCREEN && rx < 200.0);

        for _ in 0..600 {
            trail.tick(1.0 / 60.0);
        }
        let (rx, ry) = trail.ring();
        assert!((rx - 200.0).abs() < 1e-2);
        assert!((ry - 120.0).abs() < 1e-2);
    }
}
