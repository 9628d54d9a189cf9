#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod controller;
pub mod dom;
pub mod events;
pub mod hook;
pub mod layout;
pub mod meta;
pub mod state;

use controller::Controller;

fn insert_meta_tags(document: &web_sys::Document) {
    for tag in meta::DEFAULT_META_TAGS.iter() {
        match dom::add_meta_tag(document, tag) {
            Ok(true) => log::debug!("[meta] added {}", tag.name),
            Ok(false) => {}
            Err(e) => log::warn!("[meta] could not add {}: {}", tag.name, e),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("anime-recommender-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:#}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;

    insert_meta_tags(&document);

    let controller: Rc<RefCell<Controller>> = Controller::shared(window.clone(), document.clone());
    hook::install(&window, controller.clone())
        .map_err(|e| anyhow::anyhow!("installing host hook: {:?}", e))?;
    events::wire_resize(&window, controller.clone());
    events::wire_document_ready(&document, controller);
    Ok(())
}
