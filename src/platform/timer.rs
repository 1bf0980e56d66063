//! Repeating tick timer bookkeeping
//!
//! At most one timer is armed, and only while playing. Its period must track
//! the session speed, so a speed change tears the old timer down and arms a
//! new one. `TickTimer` only decides; the platform applies the decision.

/// What the platform should do with its repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the current timer as is
    Keep,
    /// Cancel any armed timer, then arm one with this period (ms)
    Arm(u32),
    /// Cancel the armed timer
    Disarm,
}

/// Tracks the period of the armed timer, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickTimer {
    armed_ms: Option<u32>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the armed timer
    pub fn armed(&self) -> Option<u32> {
        self.armed_ms
    }

    /// Reconcile the timer with the game after any command or tick
    pub fn sync(&mut self, playing: bool, speed_ms: u32) -> TimerCommand {
        match (playing, self.armed_ms) {
            (true, Some(period)) if period == speed_ms => TimerCommand::Keep,
            (true, _) => {
                self.armed_ms = Some(speed_ms);
                TimerCommand::Arm(speed_ms)
            }
            (false, Some(_)) => {
                self.armed_ms = None;
                TimerCommand::Disarm
            }
            (false, None) => TimerCommand::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_keep_rearm_disarm() {
        let mut timer = TickTimer::new();
        assert_eq!(timer.sync(false, 150), TimerCommand::Keep);
        assert_eq!(timer.sync(true, 150), TimerCommand::Arm(150));
        assert_eq!(timer.sync(true, 150), TimerCommand::Keep);
        assert_eq!(timer.sync(true, 148), TimerCommand::Arm(148));
        assert_eq!(timer.armed(), Some(148));
        assert_eq!(timer.sync(false, 148), TimerCommand::Disarm);
        assert_eq!(timer.armed(), None);
        assert_eq!(timer.sync(false, 148), TimerCommand::Keep);
    }

    #[test]
    fn test_restart_at_same_speed_keeps_timer() {
        let mut timer = TickTimer::new();
        timer.sync(true, 150);
        // Restart while playing, speed back to the initial value
        assert_eq!(timer.sync(true, 150), TimerCommand::Keep);
        assert_eq!(timer.armed(), Some(150));
    }
}
