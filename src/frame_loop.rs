//! Per-refresh orchestration: clock, flag check, step, present.

use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::animation::AnimationState;
use crate::contacts::{ContactId, Transition};
use crate::surface::{FrameUniforms, RenderSurface, SurfaceSize};

/// Stops a [`FrameLoop`] before its next tick. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct FrameLoop<S> {
    state: AnimationState,
    surface: S,
    cancel: CancelToken,
    frames: u64,
}

impl<S: RenderSurface> FrameLoop<S> {
    pub fn new(state: AnimationState, surface: S) -> Self {
        Self {
            state,
            surface,
            cancel: CancelToken::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn contact_started(&mut self, id: ContactId) -> Option<Transition> {
        self.state.contact_started(id)
    }

    pub fn contact_ended(&mut self, id: ContactId) -> Option<Transition> {
        self.state.contact_ended(id)
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        if size != self.surface.size() {
            log::debug!("surface resized to {}x{}", size.width, size.height);
        }
        self.surface.resize(size);
    }

    /// Run one refresh. Breaks once the loop has been cancelled, in which
    /// case nothing is drawn and the caller must not reschedule.
    pub fn tick(&mut self, raw_timestamp_ms: f64) -> ControlFlow<()> {
        if self.cancel.is_cancelled() {
            return ControlFlow::Break(());
        }

        let elapsed = self.state.advance_clock(raw_timestamp_ms);
        self.state.evaluate_flip();
        let tween = self.state.step();

        let uniforms = FrameUniforms {
            time: elapsed as f32,
            tween: tween as f32,
            pointer_count: self.state.mode().as_uniform(),
            resolution: self.surface.size().as_resolution(),
        };
        self.surface.present(&uniforms);
        self.frames += 1;

        ControlFlow::Continue(())
    }

    /// Drive the loop from a stream of refresh timestamps until it is
    /// cancelled or the stream ends. Returns the number of frames drawn.
    pub fn run_until_cancelled<I>(&mut self, timestamps: I) -> u64
    where
        I: IntoIterator<Item = f64>,
    {
        let start = self.frames;
        for now in timestamps {
            if self.tick(now).is_break() {
                log::info!("frame loop stopped after {} frames", self.frames);
                break;
            }
        }
        self.frames - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ModeFlag;

    #[derive(Default)]
    struct NullSurface {
        size: SurfaceSize,
        last: Option<FrameUniforms>,
        draws: usize,
    }

    impl RenderSurface for NullSurface {
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

    #[test]
    fn tick_presents_current_values() {
        let mut frame_loop = FrameLoop::new(AnimationState::default(), NullSurface::default());
        frame_loop.resize(SurfaceSize::new(320, 200));
        assert!(frame_loop.tick(1000.0).is_continue());

        let last = frame_loop.surface().last.expect("uniforms written");
        assert_eq!(last.time, 1.0);
        assert_eq!(last.tween, 1.0);
        assert_eq!(last.pointer_count, 0);
        assert_eq!(last.resolution, [320.0, 200.0]);
        assert_eq!(frame_loop.surface().draws, 1);
    }

    #[test]
    fn cancelled_loop_draws_nothing() {
        let mut frame_loop = FrameLoop::new(AnimationState::default(), NullSurface::default());
        frame_loop.cancel_token().cancel();
        assert!(frame_loop.tick(16.0).is_break());
        assert_eq!(frame_loop.surface().draws, 0);
        assert_eq!(frame_loop.frames(), 0);
    }

    #[test]
    fn run_stops_at_cancellation() {
        let mut frame_loop = FrameLoop::new(AnimationState::default(), NullSurface::default());
        let token = frame_loop.cancel_token();
        let timestamps = (0..10).map(|i| {
            if i == 4 {
                token.cancel();
            }
            i as f64 * 16.0
        });
        assert_eq!(frame_loop.run_until_cancelled(timestamps), 4);
    }

    #[test]
    fn flip_is_checked_before_step() {
        let config = crate::config::FieldConfig {
            initial_tween: 0.0,
            ..Default::default()
        };
        let mut frame_loop =
            FrameLoop::new(AnimationState::new(&config), NullSurface::default());
        frame_loop.tick(1000.0);
        // flipped at rest, then stepped away from zero in the same tick
        assert_eq!(frame_loop.state().mode(), ModeFlag::On);
        assert!((frame_loop.state().tween() - 0.1).abs() < 1e-12);
        assert_eq!(frame_loop.surface().last.map(|u| u.pointer_count), Some(1));
    }
}
