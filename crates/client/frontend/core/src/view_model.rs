//! Retained scene rebuilt from [`runtime::StageEvent`]s.
//!
//! The runtime never sends full snapshots while playing. The view model
//! mirrors every draw call the engine makes, so a frontend can repaint at any
//! frame rate without querying the worker.
use game_core::{Bounds, GameConfig, Hud, SessionTime, SpriteKind, Target, TargetId};
use runtime::StageEvent;

use crate::event::EventImpact;

/// One live sprite.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteView {
    pub target: Target,
}

impl SpriteView {
    pub fn id(&self) -> TargetId {
        self.target.id
    }

    pub fn kind(&self) -> SpriteKind {
        self.target.sprite
    }

    /// Arena rectangle at `now`; flying sprites move along their flight.
    pub fn bounds_at(&self, now: SessionTime) -> Bounds {
        self.target.bounds_at(now)
    }
}

/// What covers the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Title menu with Play and Quit.
    #[default]
    Menu,
    /// Nothing; the session is running.
    None,
    /// Final score with Play Again and Quit.
    EndScreen { final_score: u32 },
}

/// Presentation state owned by the event loop.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub arena_width: f64,
    pub arena_height: f64,
    /// Spawn order; later sprites are drawn on top.
    pub sprites: Vec<SpriteView>,
    pub hud: Hud,
    pub overlay: Overlay,
}

impl ViewModel {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            arena_width: config.arena.width,
            arena_height: config.arena.height,
            sprites: Vec::new(),
            hud: Hud {
                score: 0,
                time_remaining: config.session.duration_secs,
                ammo: Some(config.session.ammo_capacity),
            },
            overlay: Overlay::Menu,
        }
    }

    pub fn apply(&mut self, event: &StageEvent) -> EventImpact {
        match event {
            StageEvent::SpriteSpawned { target } => {
                self.sprites.push(SpriteView {
                    target: target.clone(),
                });
            }
            StageEvent::SpriteRemoved { id } => {
                let before = self.sprites.len();
                self.sprites.retain(|sprite| sprite.id() != *id);
                if self.sprites.len() == before {
                    return EventImpact::none();
                }
            }
            StageEvent::FlightStarted { id, flight } => {
                match self.sprites.iter_mut().find(|sprite| sprite.id() == *id) {
                    Some(sprite) => sprite.target.flight = Some(*flight),
                    None => return EventImpact::none(),
                }
            }
            StageEvent::HudUpdated(hud) => self.hud = *hud,
            StageEvent::EndScreenShown { final_score } => {
                self.overlay = Overlay::EndScreen {
                    final_score: *final_score,
                };
            }
            StageEvent::Cleared => {
                self.sprites.clear();
                self.overlay = Overlay::None;
            }
        }
        EventImpact::redraw()
    }

    pub fn sprite(&self, id: TargetId) -> Option<&SpriteView> {
        self.sprites.iter().find(|sprite| sprite.id() == id)
    }

    pub fn has_flying(&self) -> bool {
        self.sprites.iter().any(|sprite| sprite.target.is_flying())
    }

    pub fn is_playing(&self) -> bool {
        self.overlay == Overlay::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Flight, Point};
    use std::time::Duration;

    fn perched(id: u32) -> Target {
        Target {
            id: TargetId(id),
            sprite: SpriteKind::Perched,
            size: 60.0,
            origin: Point::new(10.0, 450.0),
            flight: None,
        }
    }

    #[test]
    fn mirrors_spawn_remove_and_clear() {
        let mut view = ViewModel::new(&GameConfig::default());
        assert_eq!(view.overlay, Overlay::Menu);

        assert!(view.apply(&StageEvent::Cleared).requires_redraw);
        assert!(view.is_playing());

        view.apply(&StageEvent::SpriteSpawned { target: perched(1) });
        view.apply(&StageEvent::SpriteSpawned { target: perched(2) });
        assert!(view.apply(&StageEvent::SpriteRemoved { id: TargetId(1) }).requires_redraw);
        assert!(!view.apply(&StageEvent::SpriteRemoved { id: TargetId(1) }).requires_redraw);

        let ids: Vec<_> = view.sprites.iter().map(SpriteView::id).collect();
        assert_eq!(ids, [TargetId(2)]);

        view.apply(&StageEvent::EndScreenShown { final_score: 140 });
        assert_eq!(view.overlay, Overlay::EndScreen { final_score: 140 });

        view.apply(&StageEvent::Cleared);
        assert!(view.sprites.is_empty());
    }

    #[test]
    fn flight_moves_the_sprite() {
        let mut view = ViewModel::new(&GameConfig::default());
        let mut target = perched(3);
        target.sprite = SpriteKind::FlyingRight;
        view.apply(&StageEvent::SpriteSpawned { target });

        let flight = Flight {
            start_x: -60.0,
            end_x: 1360.0,
            y: 100.0,
            started_at: SessionTime::ZERO,
            duration: Duration::from_secs(7),
        };
        view.apply(&StageEvent::FlightStarted {
            id: TargetId(3),
            flight,
        });

        let sprite = view.sprite(TargetId(3)).unwrap();
        assert!(view.has_flying());
        assert_eq!(sprite.bounds_at(SessionTime::ZERO).x, -60.0);
        assert_eq!(sprite.bounds_at(SessionTime::from_millis(3_500)).x, 650.0);
    }

    #[test]
    fn hud_follows_updates() {
        let mut view = ViewModel::new(&GameConfig::default());
        assert_eq!(view.hud.ammo, Some(10));
        let hud = Hud {
            score: 20,
            time_remaining: 12,
            ammo: None,
        };
        view.apply(&StageEvent::HudUpdated(hud));
        assert_eq!(view.hud, hud);
    }
}
