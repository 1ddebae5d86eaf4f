use engine::scene::Transform;

use crate::assets::{BLUE_GLOW_MODEL, ORANGE_GLOW_MODEL};

/// One glow child entity; shown at scale 1, hidden at scale 0.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowIndicator {
    pub model: &'static str,
    pub transform: Transform,
}

impl GlowIndicator {
    fn new(model: &'static str) -> GlowIndicator {
        GlowIndicator {
            model,
            transform: Transform::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.transform.is_hidden()
    }

    fn set_visible(&mut self, visible: bool) {
        self.transform.set_uniform_scale(if visible { 1.0 } else { 0.0 });
    }
}

/// Blue while the disc can be thrown or is coming back, orange while it is out.
/// Exactly one of the two is visible at any time.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowPair {
    pub blue: GlowIndicator,
    pub orange: GlowIndicator,
}

impl GlowPair {
    pub fn new() -> GlowPair {
        let mut pair = GlowPair {
            blue: GlowIndicator::new(BLUE_GLOW_MODEL),
            orange: GlowIndicator::new(ORANGE_GLOW_MODEL),
        };
        pair.show_fired(false);
        pair
    }

    pub fn show_fired(&mut self, is_fired: bool) {
        self.blue.set_visible(!is_fired);
        self.orange.set_visible(is_fired);
    }

    pub fn is_blue(&self) -> bool {
        self.blue.is_visible()
    }

    pub fn is_orange(&self) -> bool {
        self.orange.is_visible()
    }
}

impl Default for GlowPair {
    fn default() -> Self {
        Self::new()
    }
}
