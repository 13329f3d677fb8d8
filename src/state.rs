use cell_core::{InteractionState, SceneParams, View, Viewport};

/// Page-lifetime state shared by the input handlers and the frame loop.
pub struct HeroState {
    pub interaction: InteractionState,
    pub view: View,
    /// Hero height in CSS pixels, measured once at startup.
    pub hero_height: f64,
}

impl HeroState {
    pub fn new(params: SceneParams, viewport: Viewport, hero_height: f64) -> Self {
        Self {
            interaction: InteractionState::new(params),
            view: View::new(viewport),
            hero_height,
        }
    }
}
