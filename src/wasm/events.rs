use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Event, EventTarget, PointerEvent, Window};

use crate::frame_loop::FrameLoop;
use crate::surface::{RenderSurface, SurfaceSize};

pub type SharedLoop<S> = Rc<RefCell<FrameLoop<S>>>;

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

pub fn window_size(window: &Window) -> SurfaceSize {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    SurfaceSize::from_window(width, height, window.device_pixel_ratio())
}

/// Pointer down/up/cancel on the document feed the contact set.
pub fn bind_pointer<S: RenderSurface + 'static>(
    target: &EventTarget,
    shared: &SharedLoop<S>,
) -> Result<(), JsValue> {
    let frame_loop = shared.clone();
    listen(target, "pointerdown", move |e: Event| {
        if let Some(e) = e.dyn_ref::<PointerEvent>() {
            frame_loop.borrow_mut().contact_started(e.pointer_id());
        }
    })?;

    for kind in ["pointerup", "pointercancel"] {
        let frame_loop = shared.clone();
        listen(target, kind, move |e: Event| {
            if let Some(e) = e.dyn_ref::<PointerEvent>() {
                frame_loop.borrow_mut().contact_ended(e.pointer_id());
            }
        })?;
    }
    Ok(())
}

pub fn bind_resize<S: RenderSurface + 'static>(
    window: &Window,
    shared: &SharedLoop<S>,
) -> Result<(), JsValue> {
    let frame_loop = shared.clone();
    let win = window.clone();
    listen(window, "resize", move |_: Event| {
        frame_loop.borrow_mut().resize(window_size(&win));
    })
}

/// Stop the loop when the page goes away.
pub fn bind_teardown<S: RenderSurface + 'static>(
    window: &Window,
    shared: &SharedLoop<S>,
) -> Result<(), JsValue> {
    let token = shared.borrow().cancel_token();
    listen(window, "pagehide", move |_: Event| {
        log::info!("page hidden, stopping frame loop");
        token.cancel();
    })
}

/// Render once at time zero, then follow `requestAnimationFrame` until the
/// loop's cancel token fires.
pub fn run<S: RenderSurface + 'static>(shared: SharedLoop<S>) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;

    if shared.borrow_mut().tick(0.0).is_break() {
        return Ok(());
    }

    // `f` holds the animation-frame closure so that it can re-register itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::new(move |now: f64| {
        if let ControlFlow::Break(()) = shared.borrow_mut().tick(now) {
            return;
        }
        let scheduled = f
            .borrow()
            .as_ref()
            .map(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()));
        if let Some(Err(err)) = scheduled {
            log::error!("requestAnimationFrame failed: {err:?}");
        }
    }));

    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
