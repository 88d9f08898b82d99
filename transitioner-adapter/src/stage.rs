use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use transitioner::{AnimatedElement, Animator, ElementKind, Motion, Rect, ScopeRegistry, ViewTransition};

/// Identifies one element on a [`Stage`].
pub type ElementId = u64;

/// One recorded playback: which element played which motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayedMotion {
    pub id: ElementId,
    pub motion: Motion,
}

/// A simulated single-threaded host for the transition engine.
///
/// The stage owns element geometry (`ElementId -> Rect`), supplies each mounted
/// element's geometry probe and motion player, records every played motion, and
/// provides the render flush: a registered layout hook that recomputes geometry from
/// application state after a mutation.
///
/// This is the reference binding layer used by tests and examples; a real GUI/TUI
/// binding follows the same shape with its framework's geometry and animation
/// facilities in place of the maps here.
#[derive(Clone)]
pub struct Stage {
    inner: Rc<StageInner>,
}

struct StageInner {
    rects: RefCell<BTreeMap<ElementId, Rect>>,
    plays: RefCell<Vec<PlayedMotion>>,
    layout: RefCell<Option<Rc<dyn Fn()>>>,
    animator: Animator<ElementKind>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StageInner {
                rects: RefCell::new(BTreeMap::new()),
                plays: RefCell::new(Vec::new()),
                layout: RefCell::new(None),
                animator: Animator::new(),
            }),
        }
    }

    /// Registers the layout hook invoked as the render flush.
    ///
    /// The hook must leave every mounted element's rect reflecting the new application
    /// state before it returns; the after-measurement reads it synchronously.
    pub fn set_layout(&self, layout: impl Fn() + 'static) {
        *self.inner.layout.borrow_mut() = Some(Rc::new(layout));
    }

    /// Runs the layout hook, if one is registered.
    pub fn relayout(&self) {
        let layout = self.inner.layout.borrow().clone();
        if let Some(layout) = layout {
            layout();
        }
    }

    /// Mounts an element of `kind` at `rect`, registered into `scope`.
    ///
    /// The element stays mounted (geometry present, performer registered) until the
    /// returned [`StagedElement`] is dropped.
    pub fn mount(
        &self,
        scope: &Rc<ScopeRegistry>,
        kind: ElementKind,
        id: ElementId,
        rect: Rect,
    ) -> StagedElement {
        let prev = self.inner.rects.borrow_mut().insert(id, rect);
        debug_assert!(prev.is_none(), "element id {id} is already mounted");

        let probe_inner = Rc::clone(&self.inner);
        let play_inner = Rc::clone(&self.inner);
        let element = self.inner.animator.kind(kind).mount(
            scope,
            move || probe_inner.rects.borrow().get(&id).copied(),
            move |motion| play_inner.plays.borrow_mut().push(PlayedMotion { id, motion }),
        );

        StagedElement {
            id,
            inner: Rc::clone(&self.inner),
            element,
        }
    }

    /// Builds the transition operation bound to `scope`, with this stage's layout hook
    /// as the render flush.
    pub fn view_transition(&self, scope: &Rc<ScopeRegistry>) -> ViewTransition {
        let stage = self.clone();
        ViewTransition::new(Rc::clone(scope), move || stage.relayout())
    }

    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.inner.rects.borrow().get(&id).copied()
    }

    /// Updates an element's geometry. No-op for unmounted ids.
    pub fn set_rect(&self, id: ElementId, rect: Rect) {
        let mut rects = self.inner.rects.borrow_mut();
        if let Some(slot) = rects.get_mut(&id) {
            *slot = rect;
        }
    }

    pub fn mounted_count(&self) -> usize {
        self.inner.rects.borrow().len()
    }

    /// Motions played so far, in playback order.
    pub fn plays(&self) -> Vec<PlayedMotion> {
        self.inner.plays.borrow().clone()
    }

    pub fn clear_plays(&self) {
        self.inner.plays.borrow_mut().clear();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("mounted", &self.mounted_count())
            .field("plays", &self.inner.plays.borrow().len())
            .finish_non_exhaustive()
    }
}

/// One element mounted on a [`Stage`].
///
/// Dropping it is the unmount: the stage forgets its geometry first (so an in-flight
/// snapshot observes absent data), then the underlying performer deregisters from its
/// parent scope.
pub struct StagedElement {
    id: ElementId,
    inner: Rc<StageInner>,
    element: AnimatedElement,
}

impl StagedElement {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn element(&self) -> &AnimatedElement {
        &self.element
    }

    /// The scope this element's descendants register into.
    pub fn child_scope(&self) -> &Rc<ScopeRegistry> {
        self.element.child_scope()
    }
}

impl Drop for StagedElement {
    fn drop(&mut self) {
        // Geometry goes first; the performer field deregisters when it drops after this.
        let _ = self.inner.rects.borrow_mut().remove(&self.id);
    }
}

impl fmt::Debug for StagedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedElement")
            .field("id", &self.id)
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}
