//! Zoom state for the chart container.

/// Fixed zoom increment per event.
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom-out guard: decrements apply only while the scale exceeds this floor.
pub const ZOOM_FLOOR: f64 = 0.5;

/// Per-session view state. The initial scale is 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    scale: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// View state starting at the given scale.
    pub fn with_scale(scale: f64) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Increase the scale by one step. There is no upper bound.
    pub fn zoom_in(&mut self) -> f64 {
        self.scale += ZOOM_STEP;
        self.scale
    }

    /// Decrease the scale by one step, only while above the floor.
    ///
    /// The guard is checked against the current value before decrementing,
    /// so repeated calls at or below the floor are silent no-ops. Returns
    /// None when the event was ignored.
    pub fn zoom_out(&mut self) -> Option<f64> {
        if self.scale > ZOOM_FLOOR {
            self.scale -= ZOOM_STEP;
            Some(self.scale)
        } else {
            None
        }
    }
}
