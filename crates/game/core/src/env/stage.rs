//! Presentation port.

use crate::state::{Flight, Hud, Target, TargetId};

/// Retained scene the session draws into.
///
/// The engine never reads anything back from the stage; hit-testing uses the
/// target list and the flight curve instead of rendered geometry.
pub trait Stage {
    /// Adds a renderable for a freshly spawned target.
    fn spawn_sprite(&mut self, target: &Target);

    /// Removes a renderable. Unknown ids must be ignored.
    fn remove_sprite(&mut self, id: TargetId);

    /// Starts moving a renderable along its flight path.
    fn animate_flight(&mut self, id: TargetId, flight: &Flight);

    fn update_hud(&mut self, hud: &Hud);

    /// Freezes play and shows the final score with Restart and Quit.
    fn show_end_screen(&mut self, final_score: u32);

    /// Drops every renderable and overlay of the previous session.
    fn clear(&mut self);
}

/// Stage that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStage;

impl Stage for NullStage {
    fn spawn_sprite(&mut self, _target: &Target) {}
    fn remove_sprite(&mut self, _id: TargetId) {}
    fn animate_flight(&mut self, _id: TargetId, _flight: &Flight) {}
    fn update_hud(&mut self, _hud: &Hud) {}
    fn show_end_screen(&mut self, _final_score: u32) {}
    fn clear(&mut self) {}
}
