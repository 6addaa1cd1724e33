#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Full-viewport shader pattern that eases between two looks while the page
//! is being touched.
//!
//! The animation core ([`FrameLoop`], [`AnimationState`]) is plain Rust and
//! runs on any host; the WebGL2 surface and DOM wiring only exist on wasm32.

pub mod animation;
pub mod clock;
pub mod config;
pub mod contacts;
pub mod controller;
pub mod error;
pub mod frame_loop;
pub mod surface;

pub use animation::{AnimationState, ModeFlag};
pub use config::FieldConfig;
pub use contacts::{ContactId, InteractionTracker, Transition};
pub use controller::{AnimationController, Direction};
pub use error::{ConfigError, ProgramError};
pub use frame_loop::{CancelToken, FrameLoop};
pub use surface::{FrameUniforms, RenderSurface, SurfaceSize};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::{AnimationState, FieldConfig, FrameLoop};

    mod events;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let defaults = FieldConfig::default();
        let canvas = document
            .get_element_by_id(&defaults.canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        let (config, rejected) = defaults.with_dataset(&canvas.dataset());
        console_log::init_with_level(config.log_level).ok();
        for err in rejected {
            log::warn!("ignoring canvas setting: {err}");
        }
        log::info!(
            "starting pattern: gain {}, initial tween {}",
            config.gain,
            config.initial_tween
        );

        let surface = render::WebGlSurface::new(
            canvas,
            crate::surface::VERTEX_SOURCE,
            crate::surface::FRAGMENT_SOURCE,
        )?;
        let shared = Rc::new(RefCell::new(FrameLoop::new(
            AnimationState::new(&config),
            surface,
        )));
        shared.borrow_mut().resize(events::window_size(&window));

        events::bind_pointer(&document, &shared)?;
        events::bind_resize(&window, &shared)?;
        events::bind_teardown(&window, &shared)?;
        events::run(shared)
    }
}
