use std::cell::Cell;
use std::rc::Rc;

use transitioner::{Animator, Rect, ScopeRegistry, ViewTransition};

fn main() {
    // Example: scope nesting bounds what a transition measures. An animated element's
    // own registration lives in its parent's scope; its descendants register into the
    // fresh scope it opens. Running a transition on the inner scope leaves the outer
    // element untouched.
    let animator = Animator::new();
    let root = ScopeRegistry::new();

    let panel_rect = Rc::new(Cell::new(Some(Rect::at(0.0, 0.0))));
    let panel_src = Rc::clone(&panel_rect);
    let panel = animator.kind("section").mount(
        &root,
        move || panel_src.get(),
        |motion| println!("panel plays: dy={}", motion.delta_y),
    );

    let row_rect = Rc::new(Cell::new(Some(Rect::at(0.0, 20.0))));
    let row_src = Rc::clone(&row_rect);
    let _row = animator.kind("div").mount(
        panel.child_scope(),
        move || row_src.get(),
        |motion| println!("row plays: dy={}", motion.delta_y),
    );

    // Both elements move, but the transition is scoped to the panel's children:
    // only the row is measured and animated.
    let inner = ViewTransition::new(Rc::clone(panel.child_scope()), || {});
    let panel_dst = Rc::clone(&panel_rect);
    let row_dst = Rc::clone(&row_rect);
    inner.run(move || {
        panel_dst.set(Some(Rect::at(0.0, 100.0)));
        row_dst.set(Some(Rect::at(0.0, 120.0)));
    });
}
