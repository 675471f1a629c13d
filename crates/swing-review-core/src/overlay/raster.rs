use crate::overlay::{Geometry, RenderSurface, StrokeStyle, SurfacePoint};

use image::{Rgba, RgbaImage};
use tracing::{error, trace};

/// Longest side a surface may have.
pub const MAX_SURFACE_SIDE: u32 = 8192;

/// [`RenderSurface`] that paints into an RGBA buffer.
///
/// Pixels outside the buffer are never written, whatever the path says.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    path: Vec<(SurfacePoint, SurfacePoint)>,
    pen: Option<SurfacePoint>,
}

impl RasterSurface {
    /// Creates a transparent surface.
    ///
    /// A geometry too large to allocate yields an empty surface.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            image: allocate(geometry),
            path: Vec::new(),
            pen: None,
        }
    }

    /// Current size.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.image.width(), self.image.height())
    }

    /// Backing buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel at `(x, y)`, if inside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Number of pixels carrying any ink.
    pub fn painted_pixels(&self) -> usize {
        self.image.pixels().filter(|p| p.0[3] > 0).count()
    }

    fn stamp(&mut self, center: SurfacePoint, radius: f64, color: Rgba<u8>) {
        let (width, height) = (i64::from(self.image.width()), i64::from(self.image.height()));
        let min_x = ((center.x - radius).floor() as i64).max(0);
        let max_x = ((center.x + radius).ceil() as i64).min(width - 1);
        let min_y = ((center.y - radius).floor() as i64).max(0);
        let max_y = ((center.y + radius).ceil() as i64).min(height - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius * radius {
                    // Bounds were clamped above; both casts are in range.
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

impl RenderSurface for RasterSurface {
    fn resize(&mut self, geometry: Geometry) {
        self.image = allocate(geometry);
        self.path.clear();
        self.pen = None;
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.pen = None;
    }

    fn move_to(&mut self, point: SurfacePoint) {
        self.pen = Some(point);
    }

    fn line_to(&mut self, point: SurfacePoint) {
        if let Some(from) = self.pen {
            self.path.push((from, point));
        }
        self.pen = Some(point);
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let color = Rgba([style.color.r, style.color.g, style.color.b, style.color.a]);
        // Thin lines still cover the pixel under the pen.
        let radius = (style.width / 2.0).max(0.5);

        let segments = std::mem::take(&mut self.path);
        for (from, to) in &segments {
            let (dx, dy) = (to.x - from.x, to.y - from.y);
            let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
            for i in 0..=steps {
                let t = f64::from(i) / f64::from(steps);
                let center = SurfacePoint::new(from.x + dx * t, from.y + dy * t);
                self.stamp(center, radius, color);
            }
        }
        trace!(segments = segments.len(), "Path stroked");
        self.path = segments;
    }
}

fn allocate(geometry: Geometry) -> RgbaImage {
    let within_limits = geometry.width <= MAX_SURFACE_SIDE && geometry.height <= MAX_SURFACE_SIDE;
    let byte_len = (geometry.width as usize)
        .checked_mul(geometry.height as usize)
        .and_then(|pixels| pixels.checked_mul(4));

    match byte_len {
        Some(_) if within_limits => RgbaImage::new(geometry.width, geometry.height),
        _ => {
            error!(
                width = geometry.width,
                height = geometry.height,
                max_side = MAX_SURFACE_SIDE,
                "Surface too large, drawing disabled"
            );
            RgbaImage::new(0, 0)
        }
    }
}
