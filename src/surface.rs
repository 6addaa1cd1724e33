//! Contract between the frame loop and whatever draws the pattern.

/// GLSL sources for the pattern program.
pub const VERTEX_SOURCE: &str = include_str!("shaders/pattern.vert");
pub const FRAGMENT_SOURCE: &str = include_str!("shaders/pattern.frag");

/// Two triangles covering clip space, `(x, y)` per vertex.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

pub const QUAD_VERTEX_COUNT: i32 = (QUAD_VERTICES.len() / 2) as i32;

/// Uniform names the pattern program declares.
pub mod uniform {
    pub const TIME: &str = "time";
    pub const TWEEN: &str = "tween";
    pub const POINTER_COUNT: &str = "pointerCount";
    pub const RESOLUTION: &str = "resolution";
}

/// Drawing-buffer size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Window size in CSS pixels scaled by the device pixel ratio.
    pub fn from_window(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: to_pixels(css_width * dpr),
            height: to_pixels(css_height * dpr),
        }
    }

    pub fn as_resolution(self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

// Canvas sizes truncate fractional pixels.
fn to_pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Values written into the pattern program for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub tween: f32,
    pub pointer_count: i32,
    pub resolution: [f32; 2],
}

/// Something that can show a frame of the pattern.
pub trait RenderSurface {
    fn size(&self) -> SurfaceSize;

    fn set_uniforms(&mut self, uniforms: &FrameUniforms);

    fn draw_full_viewport_quad(&mut self);

    fn resize(&mut self, size: SurfaceSize);

    fn present(&mut self, uniforms: &FrameUniforms) {
        self.set_uniforms(uniforms);
        self.draw_full_viewport_quad();
    }
}
