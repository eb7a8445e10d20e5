//! Interactive zoom and pan over a [`ViewState`].

use log::debug;

use crate::{
    generate::FractalParameters,
    kernel::FractalKind,
    viewport::ViewState,
};

/// Pointer button relayed by the UI together with a click position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Recenter and zoom in.
    Primary,
    /// Recenter and zoom out.
    Secondary,
    /// Any other button; ignored.
    Other,
}

/// Owns the current view for an interactive session.
///
/// Transitions never fail. Callers snapshot the view with [`ViewController::parameters`]
/// before dispatching a pass, so a pass in flight never sees a later transition.
#[derive(Clone, Debug)]
pub struct ViewController {
    initial: ViewState,
    current: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::with_view(ViewState::DEFAULT)
    }

    /// Start from `initial`; [`ViewController::reset`] returns here.
    pub fn with_view(initial: ViewState) -> Self {
        Self {
            initial,
            current: initial,
        }
    }

    pub fn view(&self) -> ViewState {
        self.current
    }

    pub fn zoom_in(&mut self) -> ViewState {
        self.current.zoom_factor /= 2.0;
        debug!("zoom in -> {:?}", self.current);
        self.current
    }

    pub fn zoom_out(&mut self) -> ViewState {
        self.current.zoom_factor *= 2.0;
        debug!("zoom out -> {:?}", self.current);
        self.current
    }

    pub fn recenter(&mut self, x: f64, y: f64) -> ViewState {
        self.current.center_x = x;
        self.current.center_y = y;
        debug!("recenter -> {:?}", self.current);
        self.current
    }

    pub fn reset(&mut self) -> ViewState {
        self.current = self.initial;
        debug!("reset -> {:?}", self.current);
        self.current
    }

    /// Handle a click at plane coordinates `(x, y)`.
    ///
    /// Returns `None` for buttons that do not change the view.
    pub fn click(&mut self, x: f64, y: f64, button: PointerButton) -> Option<ViewState> {
        match button {
            PointerButton::Primary => {
                self.recenter(x, y);
                Some(self.zoom_in())
            }
            PointerButton::Secondary => {
                self.recenter(x, y);
                Some(self.zoom_out())
            }
            PointerButton::Other => None,
        }
    }

    /// Snapshot the current view into the parameters for the next pass.
    pub fn parameters(
        &self,
        kind: FractalKind,
        max_iterations: u32,
        width: u32,
        height: u32,
    ) -> FractalParameters {
        FractalParameters::builder(kind)
            .with_max_iterations(max_iterations)
            .with_resolution(width, height)
            .with_view(self.current)
            .build()
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default_view() {
        assert_eq!(ViewController::new().view(), ViewState::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn zoom_halves_and_doubles() {
        let mut controller = ViewController::new();
        assert_eq!(controller.zoom_in().zoom_factor, 0.5);
        assert_eq!(controller.zoom_in().zoom_factor, 0.25);
        assert_eq!(controller.zoom_out().zoom_factor, 0.5);
    }

    #[test]
    fn recenter_keeps_zoom() {
        let mut controller = ViewController::new();
        controller.zoom_in();
        let view = controller.recenter(-0.75, 0.1);
        assert_eq!(view, ViewState::new(-0.75, 0.1, 0.5));
    }

    #[test]
    fn primary_click_zooms_in_on_point() {
        let mut controller = ViewController::new();
        let view = controller.click(0.3, -0.2, PointerButton::Primary);
        assert_eq!(view, Some(ViewState::new(0.3, -0.2, 0.5)));
    }

    #[test]
    fn secondary_click_zooms_out_on_point() {
        let mut controller = ViewController::new();
        let view = controller.click(-1.0, 0.5, PointerButton::Secondary);
        assert_eq!(view, Some(ViewState::new(-1.0, 0.5, 2.0)));
    }

    #[test]
    fn other_buttons_leave_view_alone() {
        let mut controller = ViewController::new();
        assert_eq!(controller.click(1.0, 1.0, PointerButton::Other), None);
        assert_eq!(controller.view(), ViewState::DEFAULT);
    }

    #[test]
    fn reset_returns_to_initial_view() {
        let initial = ViewState::new(-0.5, 0.0, 1.0);
        let mut controller = ViewController::with_view(initial);
        controller.click(0.1, 0.2, PointerButton::Primary);
        controller.zoom_in();
        assert_eq!(controller.reset(), initial);
    }

    #[test]
    fn parameters_snapshot_the_view() {
        let mut controller = ViewController::new();
        controller.click(0.25, 0.5, PointerButton::Primary);
        let parameters = controller.parameters(FractalKind::mandelbrot(), 64, 10, 8);

        controller.zoom_in();

        assert_eq!(parameters.view, ViewState::new(0.25, 0.5, 0.5));
        assert_eq!(parameters.max_iterations, 64);
        assert_eq!(parameters.resolution.width, 10);
        assert_eq!(parameters.resolution.height, 8);
    }
}
