//! Progress reporting and cooperative cancellation.
//!
//! The algorithms report coarse-grained steps to a [`Progress`] sink.
//! The return value of a sink is never consulted;
//! cancellation goes through [`Progress::is_interrupted`],
//! which is polled between recursive calls.
use colored::Colorize;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::error::{MiniSplitsError, Result};


/// A sink for progress reports.
pub trait Progress {
    /// Start a new phase named `label` made of `total` steps.
    fn set(&mut self, label: &str, total: usize);


    /// Report that one step of the current phase is done.
    fn step(&mut self);


    /// Returns `true` if the running computation should stop.
    fn is_interrupted(&self) -> bool {
        false
    }
}


/// Returns `Err(Interrupted)` if `progress` asks to stop.
#[inline]
pub(crate) fn check<P>(progress: &P) -> Result<()>
    where P: Progress + ?Sized
{
    if progress.is_interrupted() {
        Err(MiniSplitsError::Interrupted)
    } else {
        Ok(())
    }
}


/// A sink that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;


impl Progress for NoProgress {
    fn set(&mut self, _label: &str, _total: usize) {}
    fn step(&mut self) {}
}


/// A sink that prints each step to the standard output.
#[derive(Debug, Clone)]
pub struct ConsoleProgress {
    label: String,
    total: usize,
    current: usize,
    verbose: bool,
}


impl ConsoleProgress {
    /// Construct a new instance of [`ConsoleProgress`].
    pub fn new() -> Self {
        Self {
            label: String::new(),
            total: 0,
            current: 0,
            verbose: true,
        }
    }


    /// If `false`, only the last step of each phase is printed.
    /// Default is `true`.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }
}


impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}


impl Progress for ConsoleProgress {
    fn set(&mut self, label: &str, total: usize) {
        self.label = label.to_string();
        self.total = total;
        self.current = 0;
        println!("{}", format!("[{label}]").bold().cyan());
    }


    fn step(&mut self) {
        self.current += 1;
        if !self.verbose && self.current < self.total { return; }
        let counter = format!("{: >4}/{: <4}", self.current, self.total);
        println!("  {} {}", self.label.cyan(), counter.green());
    }
}


/// A shared flag used to cancel a running computation
/// from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);


impl CancelFlag {
    /// Construct a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }


    /// Raise the flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }


    /// Returns `true` if the flag is raised.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}


/// Wraps a sink so that it reports an interruption
/// once the associated [`CancelFlag`] is raised.
#[derive(Debug, Clone)]
pub struct Interruptible<P> {
    inner: P,
    flag: CancelFlag,
}


impl<P> Interruptible<P> {
    /// Wrap `inner` with `flag`.
    pub fn new(inner: P, flag: CancelFlag) -> Self {
        Self { inner, flag }
    }


    /// Returns the wrapped sink.
    pub fn into_inner(self) -> P {
        self.inner
    }
}


impl<P: Progress> Progress for Interruptible<P> {
    fn set(&mut self, label: &str, total: usize) {
        self.inner.set(label, total);
    }


    fn step(&mut self) {
        self.inner.step();
    }


    fn is_interrupted(&self) -> bool {
        self.flag.is_cancelled() || self.inner.is_interrupted()
    }
}
