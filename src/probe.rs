//! Step probes.
//!
//! Every scan in this crate has a `*_probed` form that reports one `step()`
//! per loop iteration that inspects input elements. The plain entry points
//! pass `&mut ()`, which compiles away. Tests pass a [`StepCounter`] to assert
//! the linear / quadratic bounds without relying on wall-clock time.

/// Observer of scan iterations.
pub trait Probe {
    /// Called once per scan iteration.
    fn step(&mut self);
}

impl Probe for () {
    #[inline(always)]
    fn step(&mut self) {}
}

/// Counts scan iterations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    /// Iterations observed so far.
    pub steps: u64,
}

impl StepCounter {
    #[inline(always)]
    pub fn new() -> Self {
        Self { steps: 0 }
    }
}

impl Probe for StepCounter {
    #[inline(always)]
    fn step(&mut self) {
        self.steps += 1;
    }
}
