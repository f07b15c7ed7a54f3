//! Player immunity bookkeeping and the dodge state machine.

use std::time::Duration;

use gridfire_core::ImmunitySource;

/// Independent timed-immunity windows, one per named source.
///
/// Damage-hit windows expire on the clock during the status update; the
/// dodge window is revoked by the dodge state machine when the dodge ends.
/// Keeping the sources separate means a dodge that ends while a damage-hit
/// window is still open leaves that window intact.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ImmunityTimers {
    damage_hit: Option<Duration>,
    dodge: Option<Duration>,
}

impl ImmunityTimers {
    pub(crate) fn grant(&mut self, source: ImmunitySource, now: Duration) {
        match source {
            ImmunitySource::DamageHit => self.damage_hit = Some(now),
            ImmunitySource::Dodge => self.dodge = Some(now),
        }
    }

    pub(crate) fn revoke(&mut self, source: ImmunitySource) {
        match source {
            ImmunitySource::DamageHit => self.damage_hit = None,
            ImmunitySource::Dodge => self.dodge = None,
        }
    }

    /// Aggregate query: any active source shields the player.
    pub(crate) fn is_immune(&self) -> bool {
        self.damage_hit.is_some() || self.dodge.is_some()
    }

    /// Clears the damage-hit window once `window` has elapsed.
    ///
    /// Returns `true` when the window expired during this call.
    pub(crate) fn expire_damage_hit(&mut self, now: Duration, window: Duration) -> bool {
        match self.damage_hit {
            Some(start) if now.saturating_sub(start) >= window => {
                self.damage_hit = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum DodgePhase {
    Ready,
    Dodging { started: Duration },
}

/// Dodge state machine: ready/dodging with a cooldown gate between dodges.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DodgeState {
    phase: DodgePhase,
    next_allowed: Duration,
}

impl DodgeState {
    pub(crate) const fn new() -> Self {
        Self {
            phase: DodgePhase::Ready,
            next_allowed: Duration::ZERO,
        }
    }

    /// Honors a dodge request only when ready and past the cooldown instant.
    pub(crate) fn request(&mut self, now: Duration) -> bool {
        match self.phase {
            DodgePhase::Ready if now >= self.next_allowed => {
                self.phase = DodgePhase::Dodging { started: now };
                true
            }
            _ => false,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self.phase, DodgePhase::Dodging { .. })
    }

    /// Transitions back to ready once the dodge duration has elapsed.
    ///
    /// Returns `true` when the dodge ended during this call; the cooldown is
    /// measured from that instant.
    pub(crate) fn update(&mut self, now: Duration, duration: Duration, cooldown: Duration) -> bool {
        match self.phase {
            DodgePhase::Dodging { started } if now.saturating_sub(started) >= duration => {
                self.phase = DodgePhase::Ready;
                self.next_allowed = now.saturating_add(cooldown);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(300);
    const COOLDOWN: Duration = Duration::from_secs(1);

    #[test]
    fn dodge_requests_respect_cooldown() {
        let mut dodge = DodgeState::new();
        assert!(dodge.request(Duration::ZERO));
        assert!(!dodge.request(Duration::from_millis(100)));

        assert!(dodge.update(DURATION, DURATION, COOLDOWN));
        assert!(!dodge.is_active());

        // Cooldown runs from the end of the dodge.
        assert!(!dodge.request(Duration::from_millis(800)));
        assert!(dodge.request(Duration::from_millis(1300)));
    }

    #[test]
    fn update_is_idle_while_ready() {
        let mut dodge = DodgeState::new();
        assert!(!dodge.update(Duration::from_secs(5), DURATION, COOLDOWN));
    }

    #[test]
    fn dodge_end_leaves_damage_hit_window_intact() {
        let mut timers = ImmunityTimers::default();
        timers.grant(ImmunitySource::Dodge, Duration::ZERO);
        timers.grant(ImmunitySource::DamageHit, Duration::from_millis(100));

        timers.revoke(ImmunitySource::Dodge);
        assert!(timers.is_immune(), "damage-hit window must survive dodge end");

        assert!(timers.expire_damage_hit(Duration::from_millis(1100), Duration::from_secs(1)));
        assert!(!timers.is_immune());
    }

    #[test]
    fn damage_hit_window_expires_on_the_boundary() {
        let mut timers = ImmunityTimers::default();
        timers.grant(ImmunitySource::DamageHit, Duration::from_secs(2));

        assert!(!timers.expire_damage_hit(Duration::from_millis(2999), Duration::from_secs(1)));
        assert!(timers.is_immune());
        assert!(timers.expire_damage_hit(Duration::from_secs(3), Duration::from_secs(1)));
        assert!(!timers.is_immune());
    }
}
