use game_core::{Flight, Hud, Stage, Target, TargetId};

use crate::events::{Event, EventBus, StageEvent};

/// Stage that turns every draw call into a [`StageEvent`] on the bus.
pub struct BusStage {
    event_bus: EventBus,
}

impl BusStage {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }

    fn publish(&self, event: StageEvent) {
        self.event_bus.publish(Event::Stage(event));
    }
}

impl Stage for BusStage {
    fn spawn_sprite(&mut self, target: &Target) {
        self.publish(StageEvent::SpriteSpawned {
            target: target.clone(),
        });
    }

    fn remove_sprite(&mut self, id: TargetId) {
        self.publish(StageEvent::SpriteRemoved { id });
    }

    fn animate_flight(&mut self, id: TargetId, flight: &Flight) {
        self.publish(StageEvent::FlightStarted {
            id,
            flight: *flight,
        });
    }

    fn update_hud(&mut self, hud: &Hud) {
        self.publish(StageEvent::HudUpdated(*hud));
    }

    fn show_end_screen(&mut self, final_score: u32) {
        self.publish(StageEvent::EndScreenShown { final_score });
    }

    fn clear(&mut self) {
        self.publish(StageEvent::Cleared);
    }
}
