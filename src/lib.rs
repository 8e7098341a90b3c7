#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod card;
mod constants;
mod controls;
mod data;
mod dom;
mod events;
mod navbar;
mod overlay;
mod page;
mod state;
mod tilt;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("holo-cards starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(constants::MOUNT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::MOUNT_ID))?;

    let page = page::mount(&document, &root)?;
    let s = page.state.borrow();
    log::info!(
        "[page] ready cards={} holo={} active={:?}",
        page.cards.len(),
        s.holo_enabled,
        s.active_id
    );
    Ok(())
}
