#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use tween_field::{
    AnimationState, ConfigError, FieldConfig, FrameLoop, FrameUniforms, RenderSurface, SurfaceSize,
};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct CountingSurface {
    size: SurfaceSize,
    draws: u32,
    last: Option<FrameUniforms>,
}

impl RenderSurface for CountingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_uniforms(&mut self, uniforms: &FrameUniforms) {
        self.last = Some(*uniforms);
    }

    fn draw_full_viewport_quad(&mut self) {
        self.draws += 1;
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }
}

#[wasm_bindgen_test]
fn window_size_is_in_device_pixels() {
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();
    let dpr = window.device_pixel_ratio();

    let size = SurfaceSize::from_window(width, height, dpr);
    assert_eq!(size.width, (width * dpr) as u32);
    assert_eq!(size.height, (height * dpr) as u32);
}

#[wasm_bindgen_test]
fn canvas_dataset_overrides_config() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    let dataset = canvas.dataset();
    dataset.set("gain", "0.5").unwrap();
    dataset.set("initialTween", "2").unwrap();
    dataset.set("logLevel", "trace").unwrap();

    let (config, rejected) = FieldConfig::default().with_dataset(&dataset);

    assert_eq!(config.gain, 0.5);
    assert_eq!(config.initial_tween, 1.0);
    assert_eq!(config.log_level, log::Level::Trace);
    assert_eq!(rejected, vec![ConfigError::InitialTween(2.0)]);
}

#[wasm_bindgen_test]
fn frame_loop_runs_on_browser_clock() {
    let mut field = FrameLoop::new(AnimationState::default(), CountingSurface::default());
    field.resize(SurfaceSize::from_window(400.0, 300.0, 2.0));
    field.contact_started(1);

    let frames = field.run_until_cancelled((0..60).map(|i| i as f64 * 1000.0 / 60.0));
    assert_eq!(frames, 60);
    assert_eq!(field.surface().draws, 60);

    let last = field.surface().last.unwrap();
    assert_eq!(last.resolution, [800.0, 600.0]);
    assert!(last.tween < 1.0);
}
