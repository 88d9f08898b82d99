use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::kind::{KindCache, KindCacheKey};
use crate::{Motion, Performer, Rect, ScopeRegistry};

/// The default element-kind identifier (e.g. `"div"`, `"li"`, `"button"`).
pub type ElementKind = &'static str;

/// The animated-element factory: the `animate.<kind>` surface.
///
/// For any element kind, [`kind`](Self::kind) returns a wrapper usable as a drop-in
/// replacement for the plain element wherever layout-transition tracking is desired.
/// Wrappers are memoized per kind: the same identifier always yields the same
/// (pointer-identical) wrapper, so repeated use never reallocates it and element
/// identity stays stable across renders.
///
/// The cache is owned by the factory instance; entries are pure, reusable wrapper
/// definitions with no per-instance state, so there is no teardown.
pub struct Animator<K = ElementKind>
where
    K: KindCacheKey,
{
    cache: RefCell<KindCache<K>>,
}

impl<K: KindCacheKey + Clone> Animator<K> {
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(KindCache::<K>::new()),
        }
    }

    /// Looks up the wrapper for `kind`, creating and caching it on first use.
    pub fn kind(&self, kind: K) -> Rc<AnimatedKind<K>> {
        let mut cache = self.cache.borrow_mut();
        if let Some(wrapper) = cache.get(&kind) {
            return Rc::clone(wrapper);
        }
        tdebug!("Animator::kind: creating wrapper");
        let wrapper = Rc::new(AnimatedKind { kind: kind.clone() });
        cache.insert(kind, Rc::clone(&wrapper));
        wrapper
    }

    /// Number of distinct kinds cached so far.
    pub fn cached_kinds(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<K: KindCacheKey + Clone> Default for Animator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KindCacheKey> fmt::Debug for Animator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("cached_kinds", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// A memoized wrapper for one element kind.
///
/// Mounting an instance wires up the full lifecycle bookkeeping: a [`Performer`]
/// registered into the nearest enclosing scope, and a fresh child scope for the
/// element's own descendants. No business logic beyond delegation.
pub struct AnimatedKind<K = ElementKind> {
    kind: K,
}

impl<K> AnimatedKind<K> {
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Mounts one instance of this kind.
    ///
    /// `probe` and `player` bind the instance to the host's rendered element: the probe
    /// reads its current rect (`None` once unmounted), the player starts a two-keyframe
    /// transform animation on it.
    ///
    /// The returned element deregisters its performer on drop, which is how the host
    /// binding signals unmount.
    pub fn mount(
        self: &Rc<Self>,
        parent: &Rc<ScopeRegistry>,
        probe: impl Fn() -> Option<Rect> + 'static,
        player: impl Fn(Motion) + 'static,
    ) -> AnimatedElement<K> {
        let performer = Rc::new(Performer::new(probe, player));
        parent.register(&performer);
        AnimatedElement {
            kind: Rc::clone(self),
            parent: Rc::clone(parent),
            performer,
            children: ScopeRegistry::new(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for AnimatedKind<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedKind").field("kind", &self.kind).finish()
    }
}

/// One mounted animated element.
///
/// Holds the element's performer (registered into the parent scope for this value's
/// lifetime) and the fresh scope its descendants register into. Dropping the value is
/// the unmount: the performer is deregistered from the parent scope. An in-flight
/// transition that already snapshotted the performer still delivers its matching
/// after-call, which no-ops once the host's probe reports the element gone.
pub struct AnimatedElement<K = ElementKind> {
    kind: Rc<AnimatedKind<K>>,
    parent: Rc<ScopeRegistry>,
    performer: Rc<Performer>,
    children: Rc<ScopeRegistry>,
}

impl<K> AnimatedElement<K> {
    pub fn kind(&self) -> &K {
        self.kind.kind()
    }

    pub fn performer(&self) -> &Rc<Performer> {
        &self.performer
    }

    /// The scope this element's descendants register into.
    pub fn child_scope(&self) -> &Rc<ScopeRegistry> {
        &self.children
    }
}

impl<K> Drop for AnimatedElement<K> {
    fn drop(&mut self) {
        self.parent.deregister(&self.performer);
    }
}

impl<K: fmt::Debug> fmt::Debug for AnimatedElement<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedElement")
            .field("kind", self.kind.kind())
            .field("performer", &self.performer)
            .finish_non_exhaustive()
    }
}
