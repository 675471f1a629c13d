use crate::overlay::SurfacePoint;

/// One continuous ink path from pointer-down to pointer-up. Immutable once sealed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<SurfacePoint>,
}

impl Stroke {
    pub(crate) fn seal(points: Vec<SurfacePoint>) -> Self {
        Self { points }
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    /// Number of rendered segments.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Sealed strokes, oldest first.
#[derive(Debug, Clone, Default)]
pub struct StrokeLog {
    strokes: Vec<Stroke>,
}

impl StrokeLog {
    pub(crate) fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Whether no strokes are logged.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Strokes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// Strokes as a slice.
    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes
    }
}
