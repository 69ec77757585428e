use std::fmt::Debug;

use tracing::trace;

/// Hook called by a solver after each step.
///
/// Returning `Some(action)` asks the solver to act on the step, `None`
/// continues. Any `FnMut(&E) -> Option<A>` closure is an observer, and `()`
/// ignores every step.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Emits every step as a `trace` event tagged with what is being solved.
///
/// Never intervenes. Inversions use it so that a slow dew point or molarity
/// search can be followed with `RUST_LOG=brine_solve=trace`.
#[derive(Debug, Clone, Copy)]
pub struct Traced {
    pub label: &'static str,
    pub steps: usize,
}

impl Traced {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label, steps: 0 }
    }
}

impl<E: Debug, A> Observer<E, A> for Traced {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.steps += 1;
        trace!(label = self.label, step = self.steps, ?event, "solver step");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_can_stop_on_a_condition() {
        let mut stop_past_three = |step: &usize| (*step > 3).then_some("stop");
        assert_eq!(stop_past_three.observe(&2), None);
        assert_eq!(stop_past_three.observe(&4), Some("stop"));
    }

    #[test]
    fn traced_counts_and_never_acts() {
        let mut traced = Traced::new("dew point");
        for step in 0..5 {
            let action: Option<()> = traced.observe(&step);
            assert!(action.is_none());
        }
        assert_eq!(traced.steps, 5);
    }
}
