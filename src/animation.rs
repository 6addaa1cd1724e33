//! Owned animation state shared by the frame loop and pointer callbacks.

use crate::clock::FrameClock;
use crate::config::FieldConfig;
use crate::contacts::{ContactId, InteractionTracker, Transition};
use crate::controller::{AnimationController, Direction};

/// Binary switch selecting the pattern's visual branch. Uploaded as the
/// `pointerCount` uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeFlag {
    #[default]
    Off,
    On,
}

impl ModeFlag {
    pub fn flipped(self) -> Self {
        match self {
            ModeFlag::Off => ModeFlag::On,
            ModeFlag::On => ModeFlag::Off,
        }
    }

    pub fn as_uniform(self) -> i32 {
        match self {
            ModeFlag::Off => 0,
            ModeFlag::On => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationState {
    clock: FrameClock,
    contacts: InteractionTracker,
    controller: AnimationController,
    mode: ModeFlag,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(&FieldConfig::default())
    }
}

impl AnimationState {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            clock: FrameClock::new(),
            contacts: InteractionTracker::new(),
            controller: AnimationController::new(config.initial_tween, config.gain),
            mode: ModeFlag::Off,
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn contacts(&self) -> &InteractionTracker {
        &self.contacts
    }

    pub fn tween(&self) -> f64 {
        self.controller.tween()
    }

    pub fn mode(&self) -> ModeFlag {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.controller.direction()
    }

    pub fn contact_started(&mut self, id: ContactId) -> Option<Transition> {
        let transition = self.contacts.on_contact_start(id);
        self.apply(transition);
        transition
    }

    /// Handles both pointer-up and pointer-cancel.
    pub fn contact_ended(&mut self, id: ContactId) -> Option<Transition> {
        let transition = self.contacts.on_contact_end(id);
        self.apply(transition);
        transition
    }

    fn apply(&mut self, transition: Option<Transition>) {
        let Some(transition) = transition else {
            return;
        };
        self.clock.mark();
        let direction = match transition {
            Transition::BecameActive => Direction::Decreasing,
            Transition::BecameIdle => Direction::Increasing,
        };
        self.controller.set_direction(direction);
        log::debug!(
            "{transition:?} at {:.3}s, tween {:.3}",
            self.clock.elapsed_seconds(),
            self.controller.tween()
        );
    }

    pub(crate) fn advance_clock(&mut self, raw_timestamp_ms: f64) -> f64 {
        self.clock.tick(raw_timestamp_ms)
    }

    /// Flip the mode flag when idle at rest. Runs every tick, so the flag
    /// alternates on each frame for as long as the condition holds.
    pub(crate) fn evaluate_flip(&mut self) -> bool {
        if self.contacts.is_idle() && self.controller.at_rest() {
            self.mode = self.mode.flipped();
            log::trace!("mode flag -> {:?}", self.mode);
            true
        } else {
            false
        }
    }

    pub(crate) fn step(&mut self) -> f64 {
        let dt = self.clock.since_mark();
        self.controller.step(dt)
    }
}
