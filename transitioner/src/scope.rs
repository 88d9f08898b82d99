use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::Performer;

/// The set of performers visible to one transition call.
///
/// A registry bounds a transition's effect to one nesting level of the UI tree: an
/// animated element registers into its *parent's* registry, while everything nested
/// inside it registers into the fresh registry the element opens for its children.
/// Deeper-nested animated elements are insulated and trigger their own transitions
/// independently.
///
/// There is no implicit default scope: the application root creates one explicitly
/// with [`ScopeRegistry::new`] and threads it down through the composition call chain.
///
/// Membership is by performer identity (`Rc` pointer). Registry operations are local,
/// synchronous, and infallible; duplicate registration and absent deregistration are
/// harmless no-ops.
#[derive(Default)]
pub struct ScopeRegistry {
    performers: RefCell<Vec<Rc<Performer>>>,
}

impl ScopeRegistry {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Adds a performer. Registering an already-present performer is a no-op.
    pub fn register(&self, performer: &Rc<Performer>) {
        let mut performers = self.performers.borrow_mut();
        if performers.iter().any(|p| Rc::ptr_eq(p, performer)) {
            twarn!("ScopeRegistry::register: performer already registered");
            return;
        }
        performers.push(Rc::clone(performer));
        ttrace!(len = performers.len(), "ScopeRegistry::register");
    }

    /// Removes a performer. Deregistering an absent performer is a no-op.
    pub fn deregister(&self, performer: &Rc<Performer>) {
        let mut performers = self.performers.borrow_mut();
        performers.retain(|p| !Rc::ptr_eq(p, performer));
        ttrace!(len = performers.len(), "ScopeRegistry::deregister");
    }

    /// Returns the current membership as a defensive copy.
    ///
    /// The orchestrator iterates a snapshot across the mutation boundary, during which
    /// mounts/unmounts may change the live membership.
    pub fn snapshot(&self) -> Vec<Rc<Performer>> {
        self.performers.borrow().clone()
    }

    pub fn contains(&self, performer: &Rc<Performer>) -> bool {
        self.performers
            .borrow()
            .iter()
            .any(|p| Rc::ptr_eq(p, performer))
    }

    pub fn len(&self) -> usize {
        self.performers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.performers.borrow().is_empty()
    }
}

impl fmt::Debug for ScopeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
