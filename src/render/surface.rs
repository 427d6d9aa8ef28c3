/// RGBA color for drawn markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
}

/// Marker radius in pixels. Presentation constant, not computed.
pub const MARKER_RADIUS: f32 = 2.0;

/// Marker fill color. Presentation constant, not computed.
pub const MARKER_COLOR: Color = Color::RED;

/// Output drawing surface the bridge renders onto.
///
/// Raster primitives are an external capability; implementations may be a
/// window, a shared framebuffer, or nothing at all when running headless.
pub trait RenderSurface: Send {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Change the output resolution. Stored landmark data is normalized and
    /// must not be affected by this.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase everything drawn since the last clear.
    fn clear(&mut self);

    /// Draw a filled circle at pixel coordinates.
    fn draw_marker(&mut self, x: f32, y: f32, radius: f32, color: Color);
}

/// Surface with no attached display; draw calls go nowhere.
///
/// Used when the service runs headless and only the recording side of the
/// frame loop matters.
#[derive(Debug)]
pub struct NullSurface {
    width: u32,
    height: u32,
}

impl NullSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl RenderSurface for NullSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {}

    fn draw_marker(&mut self, _x: f32, _y: f32, _radius: f32, _color: Color) {}
}
