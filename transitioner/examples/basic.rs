use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use transitioner::{Animator, Rect, ScopeRegistry, ViewTransition};

fn main() {
    // Example: a headless todo list [3, 2, 1] rendered top-down at 40px rows.
    // Prepending an item shifts every existing row down; the engine decides a
    // motion correction for each shifted element and none for the new one.
    let animator = Animator::new();
    let root = ScopeRegistry::new();

    let items = Rc::new(RefCell::new(vec![3, 2, 1]));
    let rects: Rc<RefCell<BTreeMap<i32, Rect>>> = Rc::new(RefCell::new(BTreeMap::new()));

    // The host's layout pass: recompute every element's rect from the item order.
    let layout = {
        let items = Rc::clone(&items);
        let rects = Rc::clone(&rects);
        move || {
            let mut rects = rects.borrow_mut();
            for (row, &item) in items.borrow().iter().enumerate() {
                rects.insert(item, Rect::new(0.0, row as f64 * 40.0, 100.0, 40.0));
            }
        }
    };
    layout();

    let mut mounted = Vec::new();
    for &item in items.borrow().iter() {
        let rect_src = Rc::clone(&rects);
        mounted.push(animator.kind("li").mount(
            &root,
            move || rect_src.borrow().get(&item).copied(),
            move |motion| {
                println!(
                    "item {item}: translate({}px, {}px) -> (0, 0) over {}ms",
                    motion.delta_x, motion.delta_y, motion.duration_ms
                );
            },
        ));
    }

    let transition = ViewTransition::new(Rc::clone(&root), layout);
    let new_items = Rc::clone(&items);
    transition.run(move || new_items.borrow_mut().insert(0, 4));

    println!("new order: {:?}", items.borrow());
}
