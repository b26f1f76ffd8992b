//! One-shot timers driven by the frame tick
//!
//! Nothing here sleeps: a timer only counts down when `advance` is called,
//! and fires on the first advance that takes it to zero or below.

/// Deferred work the game schedules for itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    EnableInput,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OneShot {
    remaining: f32,
    action: TimerAction,
}

/// Pending one-shot timers
#[derive(Debug, Clone, Default)]
pub struct Timers {
    pending: Vec<OneShot>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: f32, action: TimerAction) {
        self.pending.push(OneShot {
            remaining: delay.max(0.0),
            action,
        });
    }

    /// Drop every pending timer
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, action: TimerAction) -> bool {
        self.pending.iter().any(|t| t.action == action)
    }

    /// Count every timer down by `dt`; returns the actions that fired, in
    /// scheduling order
    pub fn advance(&mut self, dt: f32) -> Vec<TimerAction> {
        let dt = dt.max(0.0);
        let mut fired = Vec::new();
        self.pending.retain_mut(|t| {
            t.remaining -= dt;
            if t.remaining <= 0.0 {
                fired.push(t.action);
                false
            } else {
                true
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut timers = Timers::new();
        timers.schedule(0.0, TimerAction::EnableInput);
        assert!(timers.is_pending(TimerAction::EnableInput));
        assert_eq!(timers.advance(0.0), vec![TimerAction::EnableInput]);
        assert!(timers.advance(1.0).is_empty());
    }

    #[test]
    fn test_fires_across_several_frames() {
        let mut timers = Timers::new();
        timers.schedule(0.1, TimerAction::EnableInput);
        assert!(timers.advance(0.04).is_empty());
        assert!(timers.advance(0.04).is_empty());
        assert_eq!(timers.advance(0.04), vec![TimerAction::EnableInput]);
        assert!(!timers.is_pending(TimerAction::EnableInput));
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = Timers::new();
        timers.schedule(0.1, TimerAction::EnableInput);
        timers.cancel_all();
        assert!(timers.advance(1.0).is_empty());
    }
}
