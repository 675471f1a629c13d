use crate::{
    overlay::{Geometry, RenderSurface, Stroke, StrokeLog, StrokeStyle, SurfacePoint},
    session::OverlayDirective,
};

use tracing::{debug, instrument, trace};

#[derive(Debug, Default)]
enum PenState {
    #[default]
    Idle,
    Drawing {
        points: Vec<SurfacePoint>,
    },
}

/// Freehand ink layer registered to the video's pixel space.
///
/// Only accepts pointer input while active, which the session arranges to be
/// exactly the time a clip is under review.
pub struct AnnotationOverlay {
    surface: Box<dyn RenderSurface + Send>,
    geometry: Option<Geometry>,
    style: StrokeStyle,
    active: bool,
    pen: PenState,
    strokes: StrokeLog,
}

impl AnnotationOverlay {
    /// Creates an inactive overlay with no geometry yet.
    pub fn new(surface: Box<dyn RenderSurface + Send>, style: StrokeStyle) -> Self {
        Self {
            surface,
            geometry: None,
            style,
            active: false,
            pen: PenState::Idle,
            strokes: StrokeLog::default(),
        }
    }

    /// Resizes the surface to `geometry` and drops every stroke.
    ///
    /// Stroke coordinates only mean something relative to the geometry they
    /// were drawn against, so nothing survives a resize.
    #[instrument(skip(self))]
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.surface.resize(geometry);
        self.geometry = Some(geometry);
        self.pen = PenState::Idle;
        self.strokes.clear();
        debug!(width = geometry.width, height = geometry.height, "Overlay resized");
    }

    /// Enables or disables pointer input.
    ///
    /// Disabling seals a stroke in progress; existing ink stays on the surface.
    #[instrument(skip(self))]
    pub fn set_active(&mut self, active: bool) {
        if !active {
            self.seal_current();
        }
        self.active = active;
        debug!(active, "Overlay activation changed");
    }

    /// Drops every stroke and erases the surface.
    pub fn clear_strokes(&mut self) {
        self.pen = PenState::Idle;
        self.strokes.clear();
        self.surface.clear();
    }

    /// Applies a side effect requested by the session controller.
    pub fn apply(&mut self, directive: OverlayDirective) {
        match directive {
            OverlayDirective::Resize(geometry) => self.set_geometry(geometry),
            OverlayDirective::Activate => self.set_active(true),
            OverlayDirective::Deactivate => self.set_active(false),
            OverlayDirective::ClearStrokes => self.clear_strokes(),
        }
    }

    /// Starts a stroke at `point`.
    pub fn on_pointer_down(&mut self, point: SurfacePoint) {
        let Some(geometry) = self.accepting_geometry() else {
            trace!("Pointer down ignored, overlay inactive");
            return;
        };
        // A missed pointer-up must not glue two strokes together.
        self.seal_current();
        self.pen = PenState::Drawing {
            points: vec![geometry.clamp(point)],
        };
    }

    /// Extends the current stroke to `point` and paints the new segment.
    pub fn on_pointer_move(&mut self, point: SurfacePoint) {
        let Some(geometry) = self.accepting_geometry() else {
            return;
        };
        let PenState::Drawing { points } = &mut self.pen else {
            return;
        };

        let to = geometry.clamp(point);
        if let Some(&from) = points.last() {
            self.surface.begin_path();
            self.surface.move_to(from);
            self.surface.line_to(to);
            self.surface.stroke(&self.style);
        }
        points.push(to);
    }

    /// Seals the current stroke.
    pub fn on_pointer_up(&mut self) {
        self.seal_current();
    }

    /// Sealed strokes, oldest first.
    pub fn strokes(&self) -> &StrokeLog {
        &self.strokes
    }

    /// Whether pointer input is accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.pen, PenState::Drawing { .. })
    }

    /// Geometry in effect, once a video has been displayable.
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Paint style for new segments.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    fn accepting_geometry(&self) -> Option<Geometry> {
        if self.active { self.geometry } else { None }
    }

    fn seal_current(&mut self) {
        if let PenState::Drawing { points } = std::mem::take(&mut self.pen) {
            let stroke = Stroke::seal(points);
            trace!(points = stroke.points().len(), "Stroke sealed");
            self.strokes.push(stroke);
        }
    }
}
