use crate::card::{CardView, SharedCard};
use crate::controls::HoloControls;
use crate::data::CARDS;
use crate::dom;
use crate::events;
use crate::navbar;
use crate::state::PageState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const INTRO: &str = "Interact with the cards below. Experience the CSS 3D transformations, \
dynamic lighting, and holographic foil effects.";

/// Top-level composition: owns the holo flag and the mounted cards.
pub struct Page {
    pub state: Rc<RefCell<PageState>>,
    pub cards: Rc<Vec<SharedCard>>,
}

pub fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<Page> {
    let state = Rc::new(RefCell::new(PageState::default()));
    let holo = state.borrow().holo_enabled;

    let shell = dom::el_in(document, root, "div", "page")?;
    let ambient = dom::el_in(document, &shell, "div", "ambient")?;
    dom::el_in(document, &ambient, "div", "blob blob-purple")?;
    dom::el_in(document, &ambient, "div", "blob blob-cyan")?;

    navbar::mount(document, &shell)?;

    let main = dom::el_in(document, &shell, "main", "main")?;
    let hero = dom::el_in(document, &main, "div", "hero")?;
    dom::text_in(document, &hero, "h1", "hero-title", "COLLECTIBLE TRADING CARDS")?;
    dom::text_in(document, &hero, "p", "hero-intro", INTRO)?;
    let controls = HoloControls::mount(document, &hero, holo)?;

    let grid = dom::el_in(document, &main, "div", "card-grid")?;
    let mut cards = Vec::with_capacity(CARDS.len());
    for record in CARDS {
        let cell = dom::el_in(document, &grid, "div", "card-cell")?;

        let s = state.clone();
        dom::add_pointer_listener(&cell, "pointerenter", move |_ev| {
            s.borrow_mut().set_active(Some(record.id));
        });
        let s = state.clone();
        dom::add_pointer_listener(&cell, "pointerleave", move |_ev| {
            s.borrow_mut().set_active(None);
        });

        let card = CardView::mount(document, &cell, record, holo)?;
        events::pointer::wire_card_pointer(&card);
        cards.push(card);
    }
    let cards = Rc::new(cards);

    let footer = dom::el_in(document, &shell, "footer", "footer")?;
    dom::text_in(
        document,
        &footer,
        "p",
        "",
        "Built with Rust + WebAssembly. Rendered through web-sys.",
    )?;

    {
        let state = state.clone();
        let cards = cards.clone();
        let controls_for_click = controls.clone();
        let document = document.clone();
        controls.on_toggle(move || {
            let on = state.borrow_mut().toggle_holo();
            log::info!("[holo] enabled={}", on);
            controls_for_click.render(on);
            for card in cards.iter() {
                if let Err(e) = card.borrow_mut().set_holo(&document, on) {
                    log::error!("[holo] card update failed: {:?}", e);
                }
            }
        });
    }

    log::info!("[page] mounted {} cards", cards.len());
    Ok(Page { state, cards })
}
