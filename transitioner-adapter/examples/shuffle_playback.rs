use std::cell::RefCell;
use std::rc::Rc;

use transitioner::{Rect, ScopeRegistry};
use transitioner_adapter::{ElementId, Playback, Stage};

fn slot_rect(slot: usize) -> Rect {
    Rect::new(slot as f64 * 100.0, 0.0, 100.0, 200.0)
}

fn main() {
    // Example: shuffle three blocks laid out left to right, then drive the resulting
    // motions frame by frame. Frame-driven hosts (TUIs, immediate-mode GUIs) apply
    // the sampled offset as a translate on every tick instead of handing the motion
    // to a platform animation facility.
    let stage = Stage::new();
    let root = ScopeRegistry::new();

    let blocks: Rc<RefCell<Vec<ElementId>>> = Rc::new(RefCell::new(vec![1, 2, 3]));

    let layout_stage = stage.clone();
    let layout_blocks = Rc::clone(&blocks);
    stage.set_layout(move || {
        for (slot, &id) in layout_blocks.borrow().iter().enumerate() {
            layout_stage.set_rect(id, slot_rect(slot));
        }
    });

    let mut mounted = Vec::new();
    for (slot, &id) in blocks.borrow().iter().enumerate() {
        mounted.push(stage.mount(&root, "div", id, slot_rect(slot)));
    }

    let transition = stage.view_transition(&root);
    let shuffled = Rc::clone(&blocks);
    transition.run(move || shuffled.borrow_mut().reverse());

    let playbacks: Vec<(ElementId, Playback)> = stage
        .plays()
        .into_iter()
        .map(|play| (play.id, Playback::new(play.motion, 0)))
        .collect();

    for now_ms in [0u64, 100, 200, 300, 400] {
        for (id, playback) in &playbacks {
            let (dx, dy) = playback.offset(now_ms);
            println!("t={now_ms:3}ms block {id}: translate({dx:7.2}px, {dy}px)");
        }
    }
}
