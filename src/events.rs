use crate::controller::Controller;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn run_resize(controller: &Rc<RefCell<Controller>>, failure_level: log::Level) {
    match controller.try_borrow_mut() {
        Ok(mut c) => {
            if let Err(e) = c.on_resize() {
                log::log!(failure_level, "[layout] resize failed: {:#}", e);
            }
        }
        Err(_) => log::warn!("[layout] resize while controller busy; skipping"),
    }
}

pub fn wire_resize(window: &web::Window, controller: Rc<RefCell<Controller>>) {
    dom::add_listener(window, "resize", move || {
        run_resize(&controller, log::Level::Error)
    });
}

/// Lay out once the document is parsed: immediately when it already is,
/// otherwise on `DOMContentLoaded`. The page framework may not have rendered
/// the layout yet at that point, so a failed lookup is only a warning; the
/// host hook lays out again once it has.
pub fn wire_document_ready(document: &web::Document, controller: Rc<RefCell<Controller>>) {
    if document.ready_state() != "loading" {
        run_resize(&controller, log::Level::Warn);
        return;
    }
    dom::add_listener(document, "DOMContentLoaded", move || {
        run_resize(&controller, log::Level::Warn)
    });
}
