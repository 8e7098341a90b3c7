use crate::card::SharedCard;
use crate::dom;
use glam::Vec2;

/// Routes pointer enter/move/leave on the card wrapper into its view.
pub fn wire_card_pointer(card: &SharedCard) {
    let target = card.borrow().root.clone();

    let c = card.clone();
    dom::add_pointer_listener(&target, "pointerenter", move |_ev| {
        c.borrow_mut().pointer_enter();
    });

    let c = card.clone();
    dom::add_pointer_listener(&target, "pointermove", move |ev| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        c.borrow_mut().pointer_move(client);
    });

    let c = card.clone();
    dom::add_pointer_listener(&target, "pointerleave", move |_ev| {
        c.borrow_mut().pointer_leave();
    });
}
