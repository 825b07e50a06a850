//! View transform state for the canvas: pan offset, zoom scale, and the
//! drag gesture that mutates them.
//!
//! The combined transform `translate(pan) scale(scale)` applies to the
//! entire drawn content as one group, so the legend and the diagram move
//! and scale together.

use crate::geometry::Point;

/// Lower clamp for the zoom scale.
pub const MIN_SCALE: f32 = 0.1;
/// Upper clamp for the zoom scale.
pub const MAX_SCALE: f32 = 3.0;

/// Scale factor applied per wheel tick when zooming in / out.
const WHEEL_STEP_IN: f32 = 1.1;
const WHEEL_STEP_OUT: f32 = 0.9;

/// Scale factor applied by the discrete toolbar-style zoom operations.
const BUTTON_STEP_IN: f32 = 1.2;
const BUTTON_STEP_OUT: f32 = 0.8;

/// Direction of a wheel tick over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Wheel scrolled up / away from the user: zoom in.
    Up,
    /// Wheel scrolled down / toward the user: zoom out.
    Down,
}

/// Pointer affordance the host should display over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

/// Pan/zoom state owned by the renderer, independent of the diagram data.
///
/// Reset to identity (`scale = 1`, `pan = (0, 0)`) on every new render.
/// Mutated only by the gesture methods here or the explicit zoom calls.
#[derive(Debug, Clone)]
pub struct ViewState {
    scale: f32,
    pan: Point,
    drag_origin: Option<Point>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan: Point::default(),
            drag_origin: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom scale, always within [`MIN_SCALE`, `MAX_SCALE`].
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current pan offset in surface units.
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// True while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Cursor affordance for the current gesture state.
    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    /// Restore the identity transform: scale 1, pan (0, 0).
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan = Point::default();
    }

    /// Discrete zoom-in step for toolbar buttons, clamped.
    pub fn zoom_in(&mut self) {
        self.apply_zoom(BUTTON_STEP_IN);
    }

    /// Discrete zoom-out step for toolbar buttons, clamped.
    pub fn zoom_out(&mut self) {
        self.apply_zoom(BUTTON_STEP_OUT);
    }

    /// Apply one wheel tick, clamped.
    pub fn wheel(&mut self, direction: WheelDirection) {
        let factor = match direction {
            WheelDirection::Up => WHEEL_STEP_IN,
            WheelDirection::Down => WHEEL_STEP_OUT,
        };
        self.apply_zoom(factor);
    }

    fn apply_zoom(&mut self, factor: f32) {
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Begin a drag gesture at the given pointer position.
    pub fn begin_drag(&mut self, at: Point) {
        self.drag_origin = Some(at);
    }

    /// Accumulate the pointer's frame-to-frame delta into the pan offset.
    /// Does nothing when no drag is in progress.
    pub fn drag_to(&mut self, at: Point) {
        if let Some(origin) = self.drag_origin {
            self.pan = self.pan.add_point(at.sub_point(origin));
            self.drag_origin = Some(at);
        }
    }

    /// End the drag gesture, keeping the accumulated pan.
    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    /// The SVG transform attribute for the content group.
    pub fn transform_attribute(&self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.pan.x(),
            self.pan.y(),
            self.scale
        )
    }

    /// Map a point from surface space back to diagram space by inverting
    /// the view transform. Used for click hit-testing.
    pub fn to_diagram_space(&self, point: Point) -> Point {
        point.sub_point(self.pan).scale(1.0 / self.scale)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum ZoomOp {
        ButtonIn,
        ButtonOut,
        WheelUp,
        WheelDown,
    }

    fn zoom_op_strategy() -> impl Strategy<Value = ZoomOp> {
        prop_oneof![
            Just(ZoomOp::ButtonIn),
            Just(ZoomOp::ButtonOut),
            Just(ZoomOp::WheelUp),
            Just(ZoomOp::WheelDown),
        ]
    }

    /// After any sequence of zoom operations the scale stays clamped.
    fn check_scale_always_clamped(ops: Vec<ZoomOp>) -> Result<(), TestCaseError> {
        let mut view = ViewState::new();
        for op in ops {
            match op {
                ZoomOp::ButtonIn => view.zoom_in(),
                ZoomOp::ButtonOut => view.zoom_out(),
                ZoomOp::WheelUp => view.wheel(WheelDirection::Up),
                ZoomOp::WheelDown => view.wheel(WheelDirection::Down),
            }
            prop_assert!(view.scale() >= MIN_SCALE);
            prop_assert!(view.scale() <= MAX_SCALE);
        }
        Ok(())
    }

    /// Reset restores identity no matter what came before.
    fn check_reset_restores_identity(
        ops: Vec<ZoomOp>,
        drag_to: (f32, f32),
    ) -> Result<(), TestCaseError> {
        let mut view = ViewState::new();
        for op in ops {
            match op {
                ZoomOp::ButtonIn => view.zoom_in(),
                ZoomOp::ButtonOut => view.zoom_out(),
                ZoomOp::WheelUp => view.wheel(WheelDirection::Up),
                ZoomOp::WheelDown => view.wheel(WheelDirection::Down),
            }
        }
        view.begin_drag(Point::new(0.0, 0.0));
        view.drag_to(Point::new(drag_to.0, drag_to.1));
        view.end_drag();

        view.reset();
        prop_assert_eq!(view.scale(), 1.0);
        prop_assert!(view.pan().is_zero());
        Ok(())
    }

    proptest! {
        #[test]
        fn scale_always_clamped(ops in proptest::collection::vec(zoom_op_strategy(), 0..200)) {
            check_scale_always_clamped(ops)?;
        }

        #[test]
        fn reset_restores_identity(
            ops in proptest::collection::vec(zoom_op_strategy(), 0..50),
            drag_to in (-500.0f32..500.0, -500.0f32..500.0),
        ) {
            check_reset_restores_identity(ops, drag_to)?;
        }
    }
}
