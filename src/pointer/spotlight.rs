// spotlight.rs - Pointer-tracking card spotlight
//
// Maps a page-space pointer position into card-local coordinates for
// the two radial gradients the renderer paints (inner spotlight and
// border glow). Inactive on touch layouts, where the card renders bare.

/// Inner spotlight gradient radius, px.
pub const SPOTLIGHT_RADIUS_PX: f32 = 200.0;
/// Outer border-glow gradient radius, px.
pub const BORDER_GLOW_RADIUS_PX: f32 = 400.0;

pub struct Spotlight {
    active: bool,
    x: f32,
    y: f32,
}

impl Spotlight {
    pub fn new(small_viewport: bool) -> Self {
        Self {
            active: !small_viewport,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Pointer in client coords plus the card rect origin.
    pub fn on_pointer(&mut self, client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) {
        if !self.active {
            return;
        }
        self.x = client_x - rect_left;
        self.y = client_y - rect_top;
    }

    /// Gradient center in card-local coordinates.
    pub fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_into_card_local_space() {
        let mut spot = Spotlight::new(false);
        spot.on_pointer(640.0, 480.0, 600.0, 400.0);
        assert_eq!(spot.center(), (40.0, 80.0));
    }

    #[test]
    fn inactive_on_small_viewports() {
        let mut spot = Spotlight::new(true);
        assert!(!spot.active());
        spot.on_pointer(640.0, 480.0, 600.0, 400.0);
        assert_eq!(spot.center(), (0.0, 0.0));
    }
}
