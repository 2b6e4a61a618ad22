//! Readiness gate for the preview host.
//!
//! The host should not be shown half-initialized, but the loader must never
//! block forever either. Modeled as an explicit state machine,
//! `Loading -> SettlePending -> Ready`, with a fallback edge straight to
//! `Ready` when the timeout fires, so the race-freedom is visible in the
//! transitions rather than buried in interacting timers.
//!
//! Timers live in the web layer. Each reset bumps an epoch; a scheduled
//! timer captures the epoch current at schedule time and is dropped via
//! [`ReadinessGate::apply_at`] if a reset happened in between. This gate
//! only affects perceived latency, never correctness.

/// Debounce after the host reports settled, to avoid a single-frame flash.
pub const SETTLE_DEBOUNCE_MS: u64 = 10;

/// Upper bound on how long the loader may cover the preview, even if the
/// host never reports settled.
pub const FALLBACK_TIMEOUT_MS: u64 = 500;

/// Lifecycle signal from the preview host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostStatus {
    /// Content is still initializing.
    Busy,
    /// Content has fully initialized (the host's "idle" signal).
    Settled,
}

/// Gate phase. `Ready` drives the cross-fade from loader to preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Loader shown, waiting on the host.
    Loading,
    /// Host settled, debounce running.
    SettlePending,
    /// Preview visible.
    Ready,
}

/// Inputs to the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    /// New content swapped in; start over.
    Reset,
    /// Host status changed.
    Status(HostStatus),
    /// The settle debounce elapsed.
    SettleDelayElapsed,
    /// The fallback timeout elapsed.
    FallbackElapsed,
}

/// The readiness state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadinessGate {
    phase: Phase,
    epoch: u64,
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessGate {
    /// A fresh gate in the loading phase, epoch zero.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            epoch: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Epoch of the current loading cycle. Capture this when scheduling a
    /// timer and pass it back through [`ReadinessGate::apply_at`].
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the preview may be shown.
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Apply an event unconditionally.
    pub fn apply(&mut self, event: GateEvent) {
        self.phase = match (self.phase, event) {
            (_, GateEvent::Reset) => {
                self.epoch += 1;
                Phase::Loading
            }
            (Phase::Loading, GateEvent::Status(HostStatus::Settled)) => Phase::SettlePending,
            (Phase::SettlePending | Phase::Ready, GateEvent::Status(HostStatus::Busy)) => {
                Phase::Loading
            }
            (Phase::SettlePending, GateEvent::SettleDelayElapsed) => Phase::Ready,
            (_, GateEvent::FallbackElapsed) => Phase::Ready,
            (phase, _) => phase,
        };
    }

    /// Apply a timer event only if it belongs to the current loading cycle.
    /// Returns whether the event was applied.
    pub fn apply_at(&mut self, epoch: u64, event: GateEvent) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.apply(event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn settle_then_debounce_reaches_ready() {
        let mut gate = ReadinessGate::new();
        assert_eq!(gate.phase(), Phase::Loading);
        gate.apply(GateEvent::Status(HostStatus::Settled));
        assert_eq!(gate.phase(), Phase::SettlePending);
        assert!(!gate.is_ready());
        gate.apply(GateEvent::SettleDelayElapsed);
        assert!(gate.is_ready());
    }

    #[test]
    fn fallback_forces_ready_from_any_phase() {
        for seed in [
            GateEvent::Reset,
            GateEvent::Status(HostStatus::Settled),
            GateEvent::SettleDelayElapsed,
        ] {
            let mut gate = ReadinessGate::new();
            gate.apply(seed);
            gate.apply(GateEvent::FallbackElapsed);
            assert!(gate.is_ready(), "fallback must guarantee forward progress");
        }
    }

    #[test]
    fn busy_status_regresses_to_loading() {
        let mut gate = ReadinessGate::new();
        gate.apply(GateEvent::Status(HostStatus::Settled));
        gate.apply(GateEvent::SettleDelayElapsed);
        assert!(gate.is_ready());
        gate.apply(GateEvent::Status(HostStatus::Busy));
        assert_eq!(gate.phase(), Phase::Loading);
    }

    #[test]
    fn reset_invalidates_timers_from_the_previous_cycle() {
        let mut gate = ReadinessGate::new();
        let stale_epoch = gate.epoch();
        gate.apply(GateEvent::Reset);
        // A fallback timer scheduled before the reset fires late.
        assert!(!gate.apply_at(stale_epoch, GateEvent::FallbackElapsed));
        assert_eq!(gate.phase(), Phase::Loading);
        // The current cycle's timer still lands.
        assert!(gate.apply_at(gate.epoch(), GateEvent::FallbackElapsed));
        assert!(gate.is_ready());
    }

    #[test]
    fn stray_debounce_in_loading_is_ignored() {
        let mut gate = ReadinessGate::new();
        gate.apply(GateEvent::SettleDelayElapsed);
        assert_eq!(gate.phase(), Phase::Loading);
    }
}
