use std::cell::RefCell;
use std::rc::Rc;

use transitioner::{Rect, ScopeRegistry};
use transitioner_adapter::{ElementId, Stage};

fn row_rect(row: usize) -> Rect {
    Rect::new(0.0, row as f64 * 40.0, 100.0, 40.0)
}

fn main() {
    // Example: drive the engine through a simulated host. The binding flow is:
    // 1) mount elements with their current geometry
    // 2) register a layout hook that recomputes geometry from application state
    // 3) run mutations through the stage's view transition
    let stage = Stage::new();
    let root = ScopeRegistry::new();

    let items: Rc<RefCell<Vec<ElementId>>> = Rc::new(RefCell::new(vec![3, 2, 1]));

    let layout_stage = stage.clone();
    let layout_items = Rc::clone(&items);
    stage.set_layout(move || {
        for (row, &id) in layout_items.borrow().iter().enumerate() {
            layout_stage.set_rect(id, row_rect(row));
        }
    });

    let mut mounted = Vec::new();
    for (row, &id) in items.borrow().iter().enumerate() {
        mounted.push(stage.mount(&root, "li", id, row_rect(row)));
    }

    let transition = stage.view_transition(&root);
    let new_items = Rc::clone(&items);
    transition.run(move || new_items.borrow_mut().insert(0, 4));
    mounted.push(stage.mount(&root, "li", 4, row_rect(0)));

    println!("order after prepend: {:?}", items.borrow());
    for play in stage.plays() {
        println!(
            "element {}: translate({}px, {}px) -> (0, 0) over {}ms",
            play.id, play.motion.delta_x, play.motion.delta_y, play.motion.duration_ms
        );
    }
}
