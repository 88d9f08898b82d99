use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// One fake host element: a settable rect (None = unmounted) and a play log.
struct TestElement {
    rect: Rc<Cell<Option<Rect>>>,
    plays: Rc<RefCell<Vec<Motion>>>,
}

impl TestElement {
    fn mounted_at(x: f64, y: f64) -> Self {
        Self {
            rect: Rc::new(Cell::new(Some(Rect::at(x, y)))),
            plays: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn performer(&self) -> Rc<Performer> {
        let rect = Rc::clone(&self.rect);
        let plays = Rc::clone(&self.plays);
        Rc::new(Performer::new(
            move || rect.get(),
            move |motion| plays.borrow_mut().push(motion),
        ))
    }

    fn move_to(&self, x: f64, y: f64) {
        self.rect.set(Some(Rect::at(x, y)));
    }

    fn unmount(&self) {
        self.rect.set(None);
    }

    fn plays(&self) -> Vec<Motion> {
        self.plays.borrow().clone()
    }
}

#[test]
fn register_is_idempotent() {
    let scope = ScopeRegistry::new();
    let el = TestElement::mounted_at(0.0, 0.0);
    let p = el.performer();

    scope.register(&p);
    scope.register(&p);
    assert_eq!(scope.len(), 1);
    assert!(scope.contains(&p));
}

#[test]
fn deregister_absent_performer_is_noop() {
    let scope = ScopeRegistry::new();
    let el = TestElement::mounted_at(0.0, 0.0);
    let p = el.performer();

    scope.deregister(&p);
    assert!(scope.is_empty());

    scope.register(&p);
    scope.deregister(&p);
    scope.deregister(&p);
    assert!(scope.is_empty());
}

#[test]
fn snapshot_is_a_defensive_copy() {
    let scope = ScopeRegistry::new();
    let a = TestElement::mounted_at(0.0, 0.0);
    let pa = a.performer();
    scope.register(&pa);

    let snapshot = scope.snapshot();

    let b = TestElement::mounted_at(0.0, 10.0);
    let pb = b.performer();
    scope.register(&pb);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(scope.len(), 2);
}

#[test]
fn unchanged_rect_produces_no_play() {
    let el = TestElement::mounted_at(10.0, 10.0);
    let p = el.performer();

    p.before_transition();
    assert!(p.after_transition().is_none());
}

#[test]
fn delta_is_before_minus_after() {
    let el = TestElement::mounted_at(10.0, 10.0);
    let p = el.performer();

    p.before_transition();
    el.move_to(10.0, 30.0);

    let action = p.after_transition().unwrap();
    let motion = action.motion();
    assert_eq!(motion.delta_x, 0.0);
    assert_eq!(motion.delta_y, -20.0);
    assert_eq!(motion.duration_ms, DEFAULT_MOTION_DURATION_MS);
    assert_eq!(motion.easing, DEFAULT_MOTION_EASING);

    action.play();
    assert_eq!(el.plays().len(), 1);
    assert_eq!(el.plays()[0].delta_y, -20.0);
}

#[test]
fn pending_slot_is_cleared_by_after_transition() {
    let el = TestElement::mounted_at(0.0, 0.0);
    let p = el.performer();

    p.before_transition();
    el.move_to(0.0, 40.0);
    assert!(p.after_transition().is_some());
    assert!(!p.has_pending());

    // A stray later call is a no-op, even after further movement.
    el.move_to(0.0, 80.0);
    assert!(p.after_transition().is_none());
}

#[test]
fn pending_slot_is_cleared_even_without_motion() {
    let el = TestElement::mounted_at(5.0, 5.0);
    let p = el.performer();

    p.before_transition();
    assert!(p.after_transition().is_none());
    assert!(!p.has_pending());

    el.move_to(5.0, 50.0);
    assert!(p.after_transition().is_none());
}

#[test]
fn unmount_between_phases_is_safe() {
    let el = TestElement::mounted_at(0.0, 0.0);
    let p = el.performer();

    p.before_transition();
    el.unmount();
    assert!(p.after_transition().is_none());
    assert!(!p.has_pending());
    assert!(el.plays().is_empty());
}

#[test]
fn before_transition_on_unmounted_element_is_noop() {
    let el = TestElement::mounted_at(0.0, 0.0);
    let p = el.performer();

    el.unmount();
    p.before_transition();
    assert!(!p.has_pending());
}

#[test]
fn custom_motion_policy_is_applied() {
    let rect = Rc::new(Cell::new(Some(Rect::at(0.0, 0.0))));
    let probe_rect = Rc::clone(&rect);
    let p = Performer::new(move || probe_rect.get(), |_| {}).with_motion(150, Easing::Linear);

    p.before_transition();
    rect.set(Some(Rect::at(7.0, 0.0)));

    let motion = p.after_transition().unwrap().motion();
    assert_eq!(motion.delta_x, -7.0);
    assert_eq!(motion.duration_ms, 150);
    assert_eq!(motion.easing, Easing::Linear);
}

#[test]
fn run_measures_everything_before_playing_anything() {
    let log = Rc::new(RefCell::new(Vec::<&'static str>::new()));

    let scope = ScopeRegistry::new();
    let rects: [Rc<Cell<Option<Rect>>>; 2] = [
        Rc::new(Cell::new(Some(Rect::at(0.0, 0.0)))),
        Rc::new(Cell::new(Some(Rect::at(0.0, 40.0)))),
    ];
    for rect in &rects {
        let probe_rect = Rc::clone(rect);
        let probe_log = Rc::clone(&log);
        let play_log = Rc::clone(&log);
        let p = Rc::new(Performer::new(
            move || {
                probe_log.borrow_mut().push("measure");
                probe_rect.get()
            },
            move |_| play_log.borrow_mut().push("play"),
        ));
        scope.register(&p);
    }

    let flush_log = Rc::clone(&log);
    let transition = ViewTransition::new(Rc::clone(&scope), move || {
        flush_log.borrow_mut().push("flush");
    });

    let mutate_log = Rc::clone(&log);
    let mutate_rects = [Rc::clone(&rects[0]), Rc::clone(&rects[1])];
    transition.run(move || {
        mutate_log.borrow_mut().push("mutate");
        mutate_rects[0].set(Some(Rect::at(0.0, 40.0)));
        mutate_rects[1].set(Some(Rect::at(0.0, 0.0)));
    });

    assert_eq!(
        log.borrow().as_slice(),
        &[
            "measure", "measure", "mutate", "flush", "measure", "measure", "play", "play",
        ]
    );
}

#[test]
fn run_walks_the_snapshot_not_live_membership() {
    let scope = ScopeRegistry::new();

    // `old` unmounts during the mutation; `new` mounts during it.
    let old = TestElement::mounted_at(0.0, 0.0);
    let p_old = old.performer();
    scope.register(&p_old);

    let new = TestElement::mounted_at(0.0, 40.0);
    let p_new = new.performer();

    let transition = ViewTransition::new(Rc::clone(&scope), || {});
    let mutation_scope = Rc::clone(&scope);
    let p_old_in_mutation = Rc::clone(&p_old);
    let p_new_in_mutation = Rc::clone(&p_new);
    let old_rect = Rc::clone(&old.rect);
    transition.run(move || {
        old_rect.set(None);
        mutation_scope.deregister(&p_old_in_mutation);
        mutation_scope.register(&p_new_in_mutation);
    });

    // The unmounted performer got its matching after-call: slot cleared, no play.
    assert!(!p_old.has_pending());
    assert!(old.plays().is_empty());
    // The newly-mounted performer was not part of the snapshot: nothing pending, no play.
    assert!(!p_new.has_pending());
    assert!(new.plays().is_empty());
}

#[test]
fn nested_scopes_are_insulated() {
    let outer = ScopeRegistry::new();
    let inner = ScopeRegistry::new();

    let probes = Rc::new(RefCell::new(Vec::<&'static str>::new()));

    let outer_probes = Rc::clone(&probes);
    let p_outer = Rc::new(Performer::new(
        move || {
            outer_probes.borrow_mut().push("outer");
            Some(Rect::at(0.0, 0.0))
        },
        |_| {},
    ));
    outer.register(&p_outer);

    let inner_probes = Rc::clone(&probes);
    let p_inner = Rc::new(Performer::new(
        move || {
            inner_probes.borrow_mut().push("inner");
            Some(Rect::at(0.0, 0.0))
        },
        |_| {},
    ));
    inner.register(&p_inner);

    ViewTransition::new(Rc::clone(&inner), || {}).run(|| {});
    assert!(probes.borrow().iter().all(|&name| name == "inner"));

    probes.borrow_mut().clear();
    ViewTransition::new(Rc::clone(&outer), || {}).run(|| {});
    assert!(probes.borrow().iter().all(|&name| name == "outer"));
}

#[test]
fn try_run_error_aborts_protocol_and_self_heals() {
    let el = TestElement::mounted_at(0.0, 0.0);
    let p = el.performer();
    let scope = ScopeRegistry::new();
    scope.register(&p);

    let flushes = Rc::new(Cell::new(0usize));
    let flush_count = Rc::clone(&flushes);
    let transition = ViewTransition::new(Rc::clone(&scope), move || {
        flush_count.set(flush_count.get() + 1);
    });

    let result: Result<(), &str> = transition.try_run(|| Err("mutation failed"));
    assert_eq!(result, Err("mutation failed"));
    assert_eq!(flushes.get(), 0);
    // The aborted cycle leaves the before-rect pending; it is not cleared.
    assert!(p.has_pending());
    assert!(el.plays().is_empty());

    // The next successful cycle overwrites the stale slot and animates normally.
    let el_rect = Rc::clone(&el.rect);
    let value = transition.try_run(move || {
        el_rect.set(Some(Rect::at(0.0, 40.0)));
        Ok::<_, &str>(42)
    });
    assert_eq!(value, Ok(42));
    assert_eq!(flushes.get(), 1);
    assert_eq!(el.plays().len(), 1);
    assert_eq!(el.plays()[0].delta_y, -40.0);
    assert!(!p.has_pending());
}

#[test]
fn repeated_runs_may_overlap_playback() {
    let el = TestElement::mounted_at(0.0, 0.0);
    let p = el.performer();
    let scope = ScopeRegistry::new();
    scope.register(&p);

    let transition = ViewTransition::new(Rc::clone(&scope), || {});

    let rect = Rc::clone(&el.rect);
    transition.run(move || rect.set(Some(Rect::at(0.0, 40.0))));
    let rect = Rc::clone(&el.rect);
    transition.run(move || rect.set(Some(Rect::at(0.0, 0.0))));

    let plays = el.plays();
    assert_eq!(plays.len(), 2);
    assert_eq!(plays[0].delta_y, -40.0);
    assert_eq!(plays[1].delta_y, 40.0);
}

#[test]
fn animator_memoizes_wrappers_per_kind() {
    let animator = Animator::<ElementKind>::new();
    let div = animator.kind("div");
    let div_again = animator.kind("div");
    let li = animator.kind("li");

    assert!(Rc::ptr_eq(&div, &div_again));
    assert!(!Rc::ptr_eq(&div, &li));
    assert_eq!(animator.cached_kinds(), 2);
    assert_eq!(*div.kind(), "div");
}

#[test]
fn mounting_registers_and_drop_deregisters() {
    let animator = Animator::<ElementKind>::new();
    let scope = ScopeRegistry::new();
    let el = TestElement::mounted_at(0.0, 0.0);

    let rect = Rc::clone(&el.rect);
    let plays = Rc::clone(&el.plays);
    let mounted = animator.kind("li").mount(
        &scope,
        move || rect.get(),
        move |motion| plays.borrow_mut().push(motion),
    );

    assert_eq!(scope.len(), 1);
    assert!(scope.contains(mounted.performer()));
    // The element's own registration lives in the parent scope; its children get a
    // fresh, empty registry.
    assert!(mounted.child_scope().is_empty());
    assert!(!Rc::ptr_eq(mounted.child_scope(), &scope));

    drop(mounted);
    assert!(scope.is_empty());
}

#[test]
fn unmount_during_transition_clears_pending_state() {
    let animator = Animator::<ElementKind>::new();
    let scope = ScopeRegistry::new();
    let el = TestElement::mounted_at(0.0, 0.0);

    let rect = Rc::clone(&el.rect);
    let plays = Rc::clone(&el.plays);
    let mounted = animator.kind("div").mount(
        &scope,
        move || rect.get(),
        move |motion| plays.borrow_mut().push(motion),
    );
    let performer = Rc::clone(mounted.performer());

    let transition = ViewTransition::new(Rc::clone(&scope), || {});
    let el_rect = Rc::clone(&el.rect);
    transition.run(move || {
        el_rect.set(None);
        drop(mounted);
    });

    assert!(scope.is_empty());
    assert!(!performer.has_pending());
    assert!(el.plays().is_empty());
}

#[test]
fn prepend_scenario_animates_shifted_items_only() {
    // An ordered list [3, 2, 1] rendered top-down at 40px rows; prepending 4 shifts
    // every existing element down by one row and the new element takes the top slot.
    let animator = Animator::<ElementKind>::new();
    let scope = ScopeRegistry::new();

    let items: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(alloc::vec![3, 2, 1]));
    let rects: Rc<RefCell<alloc::collections::BTreeMap<i32, Rect>>> =
        Rc::new(RefCell::new(alloc::collections::BTreeMap::new()));
    let plays: Rc<RefCell<Vec<(i32, Motion)>>> = Rc::new(RefCell::new(Vec::new()));

    let layout = {
        let items = Rc::clone(&items);
        let rects = Rc::clone(&rects);
        move || {
            let mut rects = rects.borrow_mut();
            for (row, &item) in items.borrow().iter().enumerate() {
                let _ = rects.insert(item, Rect::new(0.0, row as f64 * 40.0, 100.0, 40.0));
            }
        }
    };
    layout();

    let mut mounted = Vec::new();
    let mut mount_item = |item: i32| {
        let rect_src = Rc::clone(&rects);
        let play_log = Rc::clone(&plays);
        animator.kind("li").mount(
            &scope,
            move || rect_src.borrow().get(&item).copied(),
            move |motion| play_log.borrow_mut().push((item, motion)),
        )
    };
    for &item in items.borrow().iter() {
        mounted.push(mount_item(item));
    }

    let transition = ViewTransition::new(Rc::clone(&scope), layout);
    let mutation_items = Rc::clone(&items);
    transition.run(move || mutation_items.borrow_mut().insert(0, 4));

    // Item 4 mounts after the cycle, as the host would on its next commit.
    mounted.push(mount_item(4));

    assert_eq!(rects.borrow()[&4].y, 0.0);
    assert_eq!(rects.borrow()[&3].y, 40.0);
    assert_eq!(rects.borrow()[&2].y, 80.0);
    assert_eq!(rects.borrow()[&1].y, 120.0);

    let plays = plays.borrow();
    assert_eq!(plays.len(), 3);
    for &(item, motion) in plays.iter() {
        assert!(item != 4, "the freshly-mounted element must not animate");
        assert_eq!(motion.delta_x, 0.0);
        // Every shifted element starts 40px above its new position and settles to 0.
        assert_eq!(motion.delta_y, -40.0);
        assert_eq!(motion.duration_ms, DEFAULT_MOTION_DURATION_MS);
    }
}
