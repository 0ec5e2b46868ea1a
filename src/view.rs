use crate::config::ViewConfig;
use crate::error::Rejected;

/// Presentation state the input layer keeps alongside the map: the zoom level and whether the
/// portal room is being looked at instead of the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    config: ViewConfig,
    zoom: u32,
    viewing_portal: bool,
}

impl View {
    pub fn new(config: ViewConfig) -> View {
        View {
            zoom: config.default_zoom.clamp(config.min_zoom, config.max_zoom),
            config,
            viewing_portal: false,
        }
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Zoom used for drawing. The portal view is always drawn at the smallest scale.
    pub fn effective_zoom(&self) -> u32 {
        if self.viewing_portal {
            self.config.min_zoom
        } else {
            self.zoom
        }
    }

    pub fn viewing_portal(&self) -> bool {
        self.viewing_portal
    }

    pub fn zoom_in(&mut self) -> Result<u32, Rejected> {
        if self.zoom >= self.config.max_zoom {
            return Err(Rejected::ZoomLimit);
        }
        self.zoom += 1;
        Ok(self.zoom)
    }

    pub fn zoom_out(&mut self) -> Result<u32, Rejected> {
        if self.zoom <= self.config.min_zoom {
            return Err(Rejected::ZoomLimit);
        }
        self.zoom -= 1;
        Ok(self.zoom)
    }

    pub fn set_viewing_portal(&mut self, viewing: bool) {
        self.viewing_portal = viewing;
    }

    pub fn reset(&mut self) {
        *self = View::new(self.config.clone());
    }
}

impl Default for View {
    fn default() -> View {
        View::new(ViewConfig::default())
    }
}
