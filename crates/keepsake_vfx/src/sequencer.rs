//! Timed step sequences — the staggered spawn chains behind emoji rain
//! and the magic finale.

use std::time::Duration;

use bevy::prelude::*;

use crate::settings::VfxSettings;
use crate::spawners::{spawn_rain_drop, FireworkEvent, RainKind};
use crate::surface::OverlaySurface;

/// What a sequencer does on each step.
#[derive(Clone, Copy, Debug)]
pub enum SequencerAction {
    /// Launch a firework at a random surface position.
    FireworkAtRandom,
    /// Drop a single rain emoji.
    RainDrop(RainKind),
}

/// Emits a fixed number of evenly spaced steps — the first immediately —
/// then removes itself. The entity is the handle for the whole chain:
/// despawning it cancels the remaining steps.
#[derive(Component)]
pub struct Sequencer {
    timer: Timer,
    remaining: u32,
    started: bool,
    pub action: SequencerAction,
}

impl Sequencer {
    pub fn new(interval: f32, steps: u32, action: SequencerAction) -> Self {
        Self {
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
            remaining: steps,
            started: false,
            action,
        }
    }

    /// Advance by `delta` and return how many steps are due this frame.
    /// Never returns more steps than remain.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        let mut due = 0;
        if !self.started {
            self.started = true;
            due += 1;
        }
        self.timer.tick(delta);
        due += self.timer.times_finished_this_tick();

        let due = due.min(self.remaining);
        self.remaining -= due;
        due
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

pub(crate) fn tick_sequencers(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<VfxSettings>,
    surface: Res<OverlaySurface>,
    mut sequencers: Query<(Entity, &mut Sequencer)>,
    mut fireworks: MessageWriter<FireworkEvent>,
) {
    for (entity, mut sequencer) in &mut sequencers {
        let action = sequencer.action;
        for _ in 0..sequencer.advance(time.delta()) {
            match action {
                SequencerAction::FireworkAtRandom => {
                    fireworks.write(FireworkEvent {
                        origin: surface.random_point(),
                    });
                }
                SequencerAction::RainDrop(kind) => {
                    spawn_rain_drop(&mut commands, &settings, &surface, kind);
                }
            }
        }
        if sequencer.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn first_step_fires_immediately() {
        let mut seq = Sequencer::new(0.1, 3, SequencerAction::FireworkAtRandom);
        assert_eq!(seq.advance(Duration::ZERO), 1);
        assert!(!seq.is_finished());
    }

    #[test]
    fn emits_exactly_the_requested_steps() {
        let mut seq = Sequencer::new(0.1, 5, SequencerAction::RainDrop(RainKind::Hearts));
        let mut total = 0;
        for _ in 0..100 {
            total += seq.advance(secs(0.05));
        }
        assert_eq!(total, 5);
        assert!(seq.is_finished());
    }

    #[test]
    fn a_long_stall_catches_up_without_overshooting() {
        let mut seq = Sequencer::new(0.1, 4, SequencerAction::FireworkAtRandom);
        // Immediate step plus every interval covered by the stall, capped
        // at the remaining step count.
        assert_eq!(seq.advance(secs(10.0)), 4);
        assert!(seq.is_finished());
        assert_eq!(seq.advance(secs(10.0)), 0);
    }

    #[test]
    fn zero_step_sequencer_finishes_at_once() {
        let mut seq = Sequencer::new(0.1, 0, SequencerAction::FireworkAtRandom);
        assert_eq!(seq.advance(secs(1.0)), 0);
        assert!(seq.is_finished());
    }
}
