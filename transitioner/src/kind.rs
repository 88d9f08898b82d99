use alloc::rc::Rc;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::animate::AnimatedKind;

#[cfg(feature = "std")]
pub(crate) type KindCache<K> = HashMap<K, Rc<AnimatedKind<K>>>;
#[cfg(not(feature = "std"))]
pub(crate) type KindCache<K> = BTreeMap<K, Rc<AnimatedKind<K>>>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait KindCacheKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> KindCacheKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait KindCacheKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> KindCacheKey for K {}
