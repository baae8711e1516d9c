//! Clock provider interface
//!
//! The dispatch surface a host clock framework drives. Callers are expected
//! to serialize mutating operations per device (the framework lock); the
//! driver performs no internal locking.

use crate::errors::*;

/// Parent clock graph, supplied by the host framework.
///
/// Only the current-rate query is needed here; parent handles and topology
/// stay on the framework side.
pub trait ParentRate {
    /// Current rate of the parent at `index`, Hz
    fn rate(&self, index: usize) -> u64;
}

/// Outcome of a rate negotiation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RateRequest {
    /// Negotiated output rate (the table entry's nominal frequency), Hz
    pub rate: u64,
    /// Parent to run from
    pub parent_index: usize,
    /// Rate to request from that parent, Hz
    pub parent_rate: u64,
}

/// Clock operations dispatch table.
pub trait ClockOps {
    /// True when the root clock is running (root-off bit clear).
    fn is_enabled(&mut self) -> Result<bool, Error>;

    /// Logical index of the currently selected parent.
    fn get_parent(&mut self) -> Result<usize, Error>;

    /// Switches to the parent at `index` and commits.
    fn set_parent(&mut self, index: usize) -> Result<(), Error>;

    /// Output rate implied by the current hardware state, given the
    /// parent's rate.
    fn recalc_rate(&mut self, parent_rate: u64) -> Result<u64, Error>;

    /// Negotiates the closest achievable rate for `rate`, reporting which
    /// parent to use and what rate to ask of it.
    fn determine_rate(&mut self, rate: u64, parents: &dyn ParentRate) -> Result<RateRequest, Error>;

    /// Programs the dividers for `rate` and commits.
    fn set_rate(&mut self, rate: u64, parent_rate: u64) -> Result<(), Error>;

    /// Programs the dividers for `rate`, switching parents in the same
    /// configuration update.
    fn set_rate_and_parent(
        &mut self,
        rate: u64,
        parent_rate: u64,
        index: usize,
    ) -> Result<(), Error>;
}
