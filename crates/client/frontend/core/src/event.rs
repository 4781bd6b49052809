//! Utilities for reacting to runtime events inside UI layers.
use game_core::GameConfig;
use runtime::{Event, SessionEvent};

use crate::format;
use crate::message::MessageLog;
use crate::view_model::ViewModel;

#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn view_model(&self) -> &ViewModel;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Keeps a [`ViewModel`] and a [`MessageLog`] in step with the runtime.
///
/// Stage events drive the scene; session events only produce messages.
pub struct SessionEventConsumer {
    view_model: ViewModel,
    messages: MessageLog,
}

impl SessionEventConsumer {
    pub fn new(config: &GameConfig, message_capacity: usize) -> Self {
        Self {
            view_model: ViewModel::new(config),
            messages: MessageLog::new(message_capacity),
        }
    }
}

impl EventConsumer for SessionEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Stage(stage) => self.view_model.apply(stage),
            Event::Session(SessionEvent::CommandApplied {
                command,
                outcome,
                at,
            }) => match format::describe_outcome(command, outcome, *at) {
                Some(entry) => {
                    self.messages.push(entry);
                    EventImpact::redraw()
                }
                None => EventImpact::none(),
            },
        }
    }

    fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{IgnoreReason, Outcome, SessionCommand, SessionTime};
    use runtime::StageEvent;

    #[test]
    fn stage_events_update_scene_and_session_events_log() {
        let mut consumer = SessionEventConsumer::new(&GameConfig::default(), 8);

        let impact = consumer.on_event(&Event::Stage(StageEvent::Cleared));
        assert!(impact.requires_redraw);
        assert!(consumer.view_model().is_playing());

        let impact = consumer.on_event(&Event::Session(SessionEvent::CommandApplied {
            command: SessionCommand::RequestReload,
            outcome: Outcome::Ignored(IgnoreReason::AlreadyReloading),
            at: SessionTime::from_millis(500),
        }));
        assert!(impact.requires_redraw);
        assert_eq!(consumer.message_log().len(), 1);

        // Quiet outcomes leave the log alone.
        let impact = consumer.on_event(&Event::Session(SessionEvent::CommandApplied {
            command: SessionCommand::Tick,
            outcome: Outcome::Ignored(IgnoreReason::NotPlaying),
            at: SessionTime::from_millis(600),
        }));
        assert!(!impact.requires_redraw);
        assert_eq!(consumer.message_log().len(), 1);
    }
}
