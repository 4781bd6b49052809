//! Message text for session outcomes.
use game_core::{FireOutcome, IgnoreReason, Outcome, SessionCommand, SessionTime, Target};

use crate::message::{MessageEntry, MessageLevel};

/// Message for an applied command, or `None` when nothing is worth saying.
///
/// Rejections are only reported for input the player gave; stray timer
/// firings stay silent.
pub fn describe_outcome(
    command: &SessionCommand,
    outcome: &Outcome,
    at: SessionTime,
) -> Option<MessageEntry> {
    let (text, level) = match outcome {
        Outcome::Started => ("Session started. Good hunting!".to_string(), MessageLevel::Info),
        Outcome::Fired(FireOutcome::Hit { target, points }) => (
            format!("Hit {}: +{points}", target_label(target)),
            MessageLevel::Success,
        ),
        Outcome::Fired(FireOutcome::Miss) => ("Miss".to_string(), MessageLevel::Info),
        Outcome::ReloadStarted => ("Reloading...".to_string(), MessageLevel::Info),
        Outcome::Reloaded => ("Reloaded".to_string(), MessageLevel::Info),
        Outcome::Ticked(tick) if tick.ended => ("Time's up!".to_string(), MessageLevel::Info),
        Outcome::Ticked(_) => return None,
        Outcome::FlightEnded { target, removed: true } => (
            format!("Chicken {target} got away"),
            MessageLevel::Info,
        ),
        Outcome::FlightEnded { .. } => return None,
        Outcome::Ignored(reason) => (ignored_text(command, *reason)?, MessageLevel::Warning),
    };
    Some(MessageEntry::new(text, Some(at), level))
}

fn target_label(target: &Target) -> String {
    if target.is_flying() {
        format!("flying chicken {}", target.id)
    } else {
        format!("chicken {}", target.id)
    }
}

fn ignored_text(command: &SessionCommand, reason: IgnoreReason) -> Option<String> {
    let text = match (command, reason) {
        (SessionCommand::Fire(_), IgnoreReason::OutOfAmmo) => "Out of ammo! Press R to reload",
        (SessionCommand::Fire(_), IgnoreReason::Reloading) => "Still reloading",
        (SessionCommand::RequestReload, IgnoreReason::AlreadyReloading) => "Already reloading",
        _ => return None,
    };
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Point, SpriteKind, TargetId, TickOutcome};

    fn at() -> SessionTime {
        SessionTime::from_millis(1_000)
    }

    #[test]
    fn hit_reports_points() {
        let target = Target {
            id: TargetId(7),
            sprite: SpriteKind::Pecking,
            size: 100.0,
            origin: Point::ORIGIN,
            flight: None,
        };
        let entry = describe_outcome(
            &SessionCommand::Fire(Point::ORIGIN),
            &Outcome::Fired(FireOutcome::Hit { target, points: 20 }),
            at(),
        )
        .unwrap();
        assert_eq!(entry.text, "Hit chicken #7: +20");
        assert_eq!(entry.level, MessageLevel::Success);
        assert_eq!(entry.at, Some(at()));
    }

    #[test]
    fn empty_magazine_hints_at_reload() {
        let entry = describe_outcome(
            &SessionCommand::Fire(Point::ORIGIN),
            &Outcome::Ignored(IgnoreReason::OutOfAmmo),
            at(),
        )
        .unwrap();
        assert_eq!(entry.level, MessageLevel::Warning);
        assert!(entry.text.contains("Press R"));
    }

    #[test]
    fn routine_ticks_and_stray_timers_are_silent() {
        let tick = Outcome::Ticked(TickOutcome {
            spawned_static: vec![],
            spawned_flying: None,
            time_remaining: 12,
            ended: false,
        });
        assert!(describe_outcome(&SessionCommand::Tick, &tick, at()).is_none());
        assert!(
            describe_outcome(
                &SessionCommand::ReloadFinished,
                &Outcome::Ignored(IgnoreReason::NotReloading),
                at()
            )
            .is_none()
        );
        assert!(
            describe_outcome(
                &SessionCommand::Fire(Point::ORIGIN),
                &Outcome::Ignored(IgnoreReason::NotPlaying),
                at()
            )
            .is_none()
        );
    }
}
