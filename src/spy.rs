// spy.rs - Scroll-spy navigation state machine
//
// One active section index, recomputed from viewport geometry at most
// once per animation frame: scroll handlers store a snapshot, the frame
// callback consumes the latest one. Explicit navigation wins for a
// fixed cooldown so the spy does not fight the smooth scroll it just
// triggered.

/// A section is active while its top sits at or above this line.
const TOP_THRESHOLD_PX: f32 = 100.0;
/// Within this many px of the document end, the last section wins
/// regardless of geometry.
const BOTTOM_EPSILON_PX: f32 = 2.0;
/// Scroll recompute suppression after an explicit selection.
pub const COOLDOWN_MS: f64 = 1200.0;

/// Scroll geometry sampled by the host on each scroll/resize event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f32,
    pub viewport_h: f32,
    pub document_h: f32,
}

struct Snapshot {
    viewport: Viewport,
    /// Viewport-relative top per section; None when the host could not
    /// measure the element.
    tops: Vec<Option<f32>>,
}

pub struct ScrollSpy {
    section_count: usize,
    active: usize,
    cooldown_until: f64,
    pending: Option<Snapshot>,
}

impl ScrollSpy {
    pub fn new(section_count: usize) -> Self {
        Self {
            section_count,
            active: 0,
            cooldown_until: 0.0,
            pending: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn in_cooldown(&self, now_ms: f64) -> bool {
        now_ms < self.cooldown_until
    }

    /// Scroll/resize handler: stage the latest geometry. An earlier
    /// snapshot from the same frame is superseded, not queued.
    pub fn request(&mut self, viewport: Viewport, tops: &[Option<f32>]) {
        self.pending = Some(Snapshot {
            viewport,
            tops: tops.to_vec(),
        });
    }

    /// Animation-frame callback: consume the staged snapshot, unless an
    /// explicit selection is still holding the state.
    pub fn on_frame(&mut self, now_ms: f64) {
        let Some(snapshot) = self.pending.take() else {
            return;
        };
        if self.in_cooldown(now_ms) {
            return;
        }
        self.active = self.pick(&snapshot);
    }

    /// Explicit navigation: select immediately, drop any staged
    /// recompute, and hold through the cooldown.
    pub fn select(&mut self, index: usize, now_ms: f64) {
        if index >= self.section_count {
            return;
        }
        self.active = index;
        self.cooldown_until = now_ms + COOLDOWN_MS;
        self.pending = None;
    }

    fn pick(&self, snapshot: &Snapshot) -> usize {
        if self.section_count == 0 {
            return 0;
        }
        let last = self.section_count - 1;
        let vp = snapshot.viewport;

        // bottom override beats geometry outright
        if vp.scroll_y + vp.viewport_h >= vp.document_h - BOTTOM_EPSILON_PX {
            return last;
        }

        // last section in document order whose top has crossed the
        // threshold; unmeasured sections are no-match
        let mut pick = 0;
        for (i, top) in snapshot.tops.iter().take(self.section_count).enumerate() {
            if matches!(top, Some(t) if *t <= TOP_THRESHOLD_PX) {
                pick = i;
            }
        }
        pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [&str; 4] = ["about", "projects", "skills", "contact"];

    fn tall_page() -> Viewport {
        Viewport {
            scroll_y: 0.0,
            viewport_h: 800.0,
            document_h: 5000.0,
        }
    }

    fn spy_with_about_on_top() -> ScrollSpy {
        let mut spy = ScrollSpy::new(SECTIONS.len());
        spy.request(
            tall_page(),
            &[Some(70.0), Some(1070.0), Some(2070.0), Some(3070.0)],
        );
        spy.on_frame(0.0);
        spy
    }

    #[test]
    fn initial_state_picks_the_section_nearest_the_top() {
        let spy = spy_with_about_on_top();
        assert_eq!(SECTIONS[spy.active()], "about");
    }

    #[test]
    fn picks_the_last_section_past_the_threshold() {
        let mut spy = ScrollSpy::new(SECTIONS.len());
        spy.request(
            tall_page(),
            &[Some(-900.0), Some(40.0), Some(1040.0), Some(2040.0)],
        );
        spy.on_frame(0.0);
        assert_eq!(SECTIONS[spy.active()], "projects");
    }

    #[test]
    fn no_match_falls_back_to_the_first_section() {
        let mut spy = ScrollSpy::new(SECTIONS.len());
        spy.request(
            tall_page(),
            &[Some(400.0), Some(1400.0), Some(2400.0), Some(3400.0)],
        );
        spy.on_frame(0.0);
        assert_eq!(SECTIONS[spy.active()], "about");
    }

    #[test]
    fn unmeasured_sections_never_match() {
        let mut spy = ScrollSpy::new(SECTIONS.len());
        spy.request(tall_page(), &[None, None, None, None]);
        spy.on_frame(0.0);
        assert_eq!(SECTIONS[spy.active()], "about");
    }

    #[test]
    fn bottom_of_page_forces_the_last_section() {
        let mut spy = ScrollSpy::new(SECTIONS.len());
        // about is geometrically nearest the top, but the viewport
        // bottom touches the document end
        spy.request(
            Viewport {
                scroll_y: 5000.0,
                viewport_h: 800.0,
                document_h: 5800.0,
            },
            &[Some(70.0), Some(170.0), Some(270.0), Some(370.0)],
        );
        spy.on_frame(0.0);
        assert_eq!(SECTIONS[spy.active()], "contact");
    }

    #[test]
    fn click_cooldown_suppresses_scroll_recompute() {
        let mut spy = spy_with_about_on_top();

        // click "projects" at t=0
        spy.select(1, 0.0);
        assert_eq!(SECTIONS[spy.active()], "projects");

        // a scroll inside the cooldown that favors "about" is dropped
        spy.request(
            tall_page(),
            &[Some(70.0), Some(1070.0), Some(2070.0), Some(3070.0)],
        );
        spy.on_frame(16.0);
        assert_eq!(SECTIONS[spy.active()], "projects");

        // a scroll after the cooldown re-selects "about"
        spy.request(
            tall_page(),
            &[Some(70.0), Some(1070.0), Some(2070.0), Some(3070.0)],
        );
        spy.on_frame(COOLDOWN_MS + 16.0);
        assert_eq!(SECTIONS[spy.active()], "about");
    }

    #[test]
    fn snapshots_supersede_within_a_frame() {
        let mut spy = ScrollSpy::new(SECTIONS.len());
        spy.request(
            tall_page(),
            &[Some(70.0), Some(1070.0), Some(2070.0), Some(3070.0)],
        );
        spy.request(
            tall_page(),
            &[Some(-900.0), Some(40.0), Some(1040.0), Some(2040.0)],
        );
        spy.on_frame(0.0);
        assert_eq!(SECTIONS[spy.active()], "projects");

        // consumed: a second frame with no new scroll changes nothing
        spy.select(3, 100.0);
        spy.on_frame(COOLDOWN_MS + 200.0);
        assert_eq!(SECTIONS[spy.active()], "contact");
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut spy = spy_with_about_on_top();
        spy.select(17, 0.0);
        assert_eq!(SECTIONS[spy.active()], "about");
    }

    #[test]
    fn zero_sections_never_panics() {
        let mut spy = ScrollSpy::new(0);
        spy.request(tall_page(), &[]);
        spy.on_frame(0.0);
        assert_eq!(spy.active(), 0);
    }
}
