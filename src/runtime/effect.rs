//! Effects: deferred fallible computations mapped to messages.
//!
//! An effect is a plain function producing a success-or-failure result,
//! scheduled on a background worker. Both outcomes are mapped to
//! application messages when the effect is performed; a failed effect is
//! never dropped silently.

use crate::runtime::command::Cmd;
use std::time::Duration;

/// Error type surfaced by a failed effect.
pub type EffectError = Box<dyn std::error::Error + Send + Sync>;

/// A deferred computation producing a value after an optional delay.
pub struct Effect<T> {
    delay: Duration,
    task: Box<dyn FnOnce() -> Result<T, EffectError> + Send>,
}

impl<T: Send + 'static> Effect<T> {
    /// An effect that runs `task` as soon as a worker picks it up.
    pub fn new(task: impl FnOnce() -> Result<T, EffectError> + Send + 'static) -> Self {
        Self {
            delay: Duration::ZERO,
            task: Box::new(task),
        }
    }

    /// Delay the effect by `delay` before it runs.
    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Chain a pure transformation onto the success value.
    pub fn and_then<U: Send + 'static>(
        self,
        f: impl FnOnce(T) -> U + Send + 'static,
    ) -> Effect<U> {
        let task = self.task;
        Effect {
            delay: self.delay,
            task: Box::new(move || task().map(f)),
        }
    }

    /// Run several effects in order, collecting their values. The first
    /// failure aborts the rest.
    pub fn sequence(effects: Vec<Self>) -> Effect<Vec<T>> {
        Effect {
            delay: Duration::ZERO,
            task: Box::new(move || {
                let mut values = Vec::with_capacity(effects.len());
                for effect in effects {
                    values.push((effect.task)()?);
                }
                Ok(values)
            }),
        }
    }

    /// Schedule the effect, mapping both outcomes to messages.
    pub fn perform<Msg: Send + 'static>(
        self,
        failure: impl FnOnce(EffectError) -> Msg + Send + 'static,
        success: impl FnOnce(T) -> Msg + Send + 'static,
    ) -> Cmd<Msg> {
        let task = self.task;
        Cmd::task(self.delay, move || match task() {
            Ok(value) => success(value),
            Err(err) => failure(err),
        })
    }
}

impl Effect<()> {
    /// An effect that produces nothing after sleeping for `interval`.
    pub fn sleep(interval: Duration) -> Self {
        Self::new(|| Ok(())).after(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::command::Command;

    fn run<T>(effect: Effect<T>) -> Result<T, EffectError> {
        (effect.task)()
    }

    #[derive(Debug, PartialEq)]
    enum Msg {
        Number(i32),
        Failed,
    }

    #[test]
    fn test_and_then_chains_transformations() {
        let effect = Effect::new(|| Ok(1)).and_then(|n| n + 1).and_then(|n| n * 10);
        assert_eq!(run(effect).unwrap(), 20);
    }

    #[test]
    fn test_sequence_collects_in_order() {
        let effects = vec![Effect::new(|| Ok(1)), Effect::new(|| Ok(2))];
        assert_eq!(run(Effect::sequence(effects)).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_sequence_aborts_on_first_failure() {
        let effects = vec![
            Effect::new(|| Ok(1)),
            Effect::new(|| Err("boom".into())),
            Effect::new(|| Ok(3)),
        ];
        assert!(run(Effect::sequence(effects)).is_err());
    }

    #[test]
    fn test_perform_maps_success() {
        let cmd = Effect::new(|| Ok(2)).perform(|_| Msg::Failed, Msg::Number);
        let Command::Task(_, thunk) = cmd.command else {
            panic!("expected a task");
        };
        assert_eq!(thunk(), Msg::Number(2));
    }

    #[test]
    fn test_perform_maps_failure_to_message() {
        let cmd =
            Effect::<i32>::new(|| Err("boom".into())).perform(|_| Msg::Failed, Msg::Number);
        let Command::Task(_, thunk) = cmd.command else {
            panic!("expected a task");
        };
        assert_eq!(thunk(), Msg::Failed);
    }

    #[test]
    fn test_sleep_carries_its_delay() {
        let cmd = Effect::sleep(Duration::from_millis(250)).perform(|_| Msg::Failed, |()| Msg::Number(0));
        let Command::Task(delay, _) = cmd.command else {
            panic!("expected a task");
        };
        assert_eq!(delay, Duration::from_millis(250));
    }
}
