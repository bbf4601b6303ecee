//! Event System
//!
//! Screens don't own audio devices. They send sound events into a queue on
//! the `GameContext`, and the host drains the queue once per tick and plays
//! them through the audio backend.

/// A queue for events of a single type.
/// Events are collected during the tick and drained by the host.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Short sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    /// Menu confirm
    Coin,
}

/// Requests for the audio backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundEvent {
    /// Play a one-shot effect
    PlaySfx(Sfx),
    /// Change background music volume (0.0 - 1.0)
    SetMusicVolume(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();
        assert!(queue.is_empty());

        queue.send(1);
        queue.send(2);
        assert!(!queue.is_empty());

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sound_events_keep_order() {
        let mut queue = EventQueue::new();
        queue.send(SoundEvent::SetMusicVolume(0.5));
        queue.send(SoundEvent::PlaySfx(Sfx::Coin));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![SoundEvent::SetMusicVolume(0.5), SoundEvent::PlaySfx(Sfx::Coin)]
        );
    }
}
