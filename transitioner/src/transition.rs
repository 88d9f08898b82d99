use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::{PlayAction, ScopeRegistry};

/// The host capability "force any pending re-render to complete now".
///
/// This is the protocol's one hard synchronization point: after the flush returns,
/// rendered geometry must already reflect the mutated state. A batched or deferred
/// re-render would make the after-measurement racy and wrong.
pub type RenderFlush = Rc<dyn Fn()>;

/// The transition orchestrator, bound to one [`ScopeRegistry`].
///
/// This is what a binding layer hands to application code in place of the ambient
/// `useViewTransition()` accessor: the owning scope and the host's render flush are
/// passed explicitly at construction.
///
/// Each [`run`](Self::run) is an independent, self-contained one-shot cycle. There is
/// no queueing or coalescing: a second call while a previous call's animations are
/// still playing starts a fresh cycle, and rapid repeated calls may play overlapping
/// animations on the same element.
#[derive(Clone)]
pub struct ViewTransition {
    scope: Rc<ScopeRegistry>,
    flush: RenderFlush,
}

impl ViewTransition {
    pub fn new(scope: Rc<ScopeRegistry>, flush: impl Fn() + 'static) -> Self {
        Self {
            scope,
            flush: Rc::new(flush),
        }
    }

    pub fn scope(&self) -> &Rc<ScopeRegistry> {
        &self.scope
    }

    /// Runs the measure/mutate/re-measure/play protocol around `mutation`.
    ///
    /// In order: snapshot the scope's membership, capture every performer's before-rect,
    /// apply the mutation, flush the render so geometry reflects the new state, collect
    /// every performer's animation decision over the *same* snapshot, then play all
    /// collected motions. Walking the snapshot (not a fresh lookup) guarantees a
    /// performer unmounted by the mutation still receives its matching after-call and
    /// clears its pending slot; it simply no-ops as unmounted.
    pub fn run(&self, mutation: impl FnOnce()) {
        let snapshot = self.scope.snapshot();
        tdebug!(performers = snapshot.len(), "ViewTransition::run");

        for performer in &snapshot {
            performer.before_transition();
        }

        mutation();
        (self.flush)();

        let actions: Vec<PlayAction> = snapshot
            .iter()
            .filter_map(|performer| performer.after_transition())
            .collect();
        tdebug!(plays = actions.len(), "ViewTransition::run: playing");

        for action in actions {
            action.play();
        }
    }

    /// Fallible variant of [`run`](Self::run).
    ///
    /// An `Err` from the mutation propagates to the caller unmodified and aborts the
    /// protocol: the flush, the after-phase, and playback are all skipped. Pending
    /// before-rects are left in place; the next successful cycle overwrites them.
    pub fn try_run<T, E>(&self, mutation: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let snapshot = self.scope.snapshot();
        tdebug!(performers = snapshot.len(), "ViewTransition::try_run");

        for performer in &snapshot {
            performer.before_transition();
        }

        let value = mutation()?;
        (self.flush)();

        let actions: Vec<PlayAction> = snapshot
            .iter()
            .filter_map(|performer| performer.after_transition())
            .collect();

        for action in actions {
            action.play();
        }
        Ok(value)
    }
}

impl fmt::Debug for ViewTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTransition")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
