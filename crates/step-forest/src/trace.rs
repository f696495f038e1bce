//! Step traces.
//!
//! Every engine operation applies its mutation completely and hands back a
//! [`Trace`]: an ordered, finite, one-shot iterator over the primitive steps
//! it took. Dropping a trace early only drops the remaining records; the tree
//! has already changed. Running the operation again produces a new trace.

use std::fmt::Debug;
use std::iter::FusedIterator;

use serde::Serialize;

/// A step record kind set that a renderer can enumerate exhaustively.
pub trait Step: Debug + Serialize {
    /// Every kind label this step type can produce.
    const KINDS: &'static [&'static str];

    /// Kind label of this record, as serialized in its `kind` tag.
    fn kind(&self) -> &'static str;
}

/// One-shot iterator over the steps of a finished operation.
///
/// Not `Clone`: a trace is consumed once.
#[derive(Debug)]
pub struct Trace<S> {
    steps: std::vec::IntoIter<S>,
}

impl<S> Iterator for Trace<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        self.steps.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl<S> ExactSizeIterator for Trace<S> {}

impl<S> FusedIterator for Trace<S> {}

/// Operation status paired with its trace.
#[derive(Debug)]
pub struct Traced<R, S> {
    pub result: R,
    pub steps: Trace<S>,
}

impl<R, S> Traced<R, S> {
    pub fn into_parts(self) -> (R, Trace<S>) {
        (self.result, self.steps)
    }

    /// Drops the trace and keeps the status.
    pub fn into_result(self) -> R {
        self.result
    }
}

/// Collects steps while an engine runs.
#[derive(Debug)]
pub(crate) struct Recorder<S> {
    steps: Vec<S>,
}

impl<S: Step> Recorder<S> {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, step: S) {
        tracing::trace!(kind = step.kind(), "step");
        self.steps.push(step);
    }

    pub(crate) fn finish<R>(self, result: R) -> Traced<R, S> {
        Traced {
            result,
            steps: Trace {
                steps: self.steps.into_iter(),
            },
        }
    }
}
