/// Tuning of the portal router. The scales multiply the heuristic of a room depending on how
/// much is known about it.
#[derive(Clone, Debug, PartialEq)]
pub struct RouterConfig {
    /// Longest route, in steps, explored before any route to the portal is known.
    pub initial_max_length: u32,
    pub avoid_scale: f32,
    pub unvisited_scale: f32,
    pub undiscovered_scale: f32,
    pub visited_scale: f32,
}

impl Default for RouterConfig {
    fn default() -> RouterConfig {
        RouterConfig {
            initial_max_length: 64,
            avoid_scale: 5.0,
            unvisited_scale: 1.5,
            undiscovered_scale: 3.0,
            visited_scale: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    pub min_zoom: u32,
    pub max_zoom: u32,
    pub default_zoom: u32,
}

impl Default for ViewConfig {
    fn default() -> ViewConfig {
        ViewConfig {
            min_zoom: 1,
            max_zoom: 8,
            default_zoom: 6,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub router: RouterConfig,
    pub view: ViewConfig,
}
