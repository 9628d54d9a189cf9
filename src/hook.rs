use crate::constants::{HOOK_FUNCTION_NAME, HOOK_NAMESPACE, HOOK_ROOT_NAMESPACE};
use crate::controller::Controller;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Property `key` of `target`, created as an empty object when missing so
/// members other scripts registered are kept.
fn namespace(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    let key = JsValue::from_str(key);
    let existing = js_sys::Reflect::get(target, &key)?;
    if existing.is_object() {
        return Ok(existing);
    }
    let created: JsValue = js_sys::Object::new().into();
    js_sys::Reflect::set(target, &key, &created)?;
    Ok(created)
}

/// Publish `window.dash_clientside.clientside.resizeOnPageLoad`.
///
/// Dash calls it after rendering the layout; the markup may be new, so the
/// cached elements are dropped before laying out again. The argument is
/// returned untouched to keep the bound output stable.
pub fn install(window: &web::Window, controller: Rc<RefCell<Controller>>) -> Result<(), JsValue> {
    let root = namespace(window.as_ref(), HOOK_ROOT_NAMESPACE)?;
    let clientside = namespace(&root, HOOK_NAMESPACE)?;

    let hook = Closure::wrap(Box::new(move |children: JsValue| -> JsValue {
        match controller.try_borrow_mut() {
            Ok(mut c) => {
                c.invalidate();
                if let Err(e) = c.on_resize() {
                    log::warn!("[hook] {} layout pass failed: {:#}", HOOK_FUNCTION_NAME, e);
                }
            }
            Err(_) => log::warn!("[hook] controller busy; skipping layout pass"),
        }
        children
    }) as Box<dyn FnMut(JsValue) -> JsValue>);
    js_sys::Reflect::set(
        &clientside,
        &JsValue::from_str(HOOK_FUNCTION_NAME),
        hook.as_ref(),
    )?;
    hook.forget();
    log::info!(
        "[hook] installed {}.{}.{}",
        HOOK_ROOT_NAMESPACE,
        HOOK_NAMESPACE,
        HOOK_FUNCTION_NAME
    );
    Ok(())
}
