use crate::meta::{self, MetaTag};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    MissingWindow,
    #[error("no document")]
    MissingDocument,
    #[error("missing element `{selector}`")]
    MissingElement { selector: String },
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(v: JsValue) -> Self {
        DomError::Js(format!("{:?}", v))
    }
}

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), DomError> {
    let window = web::window().ok_or(DomError::MissingWindow)?;
    let document = window.document().ok_or(DomError::MissingDocument)?;
    Ok((window, document))
}

/// Viewport width in CSS pixels.
pub fn viewport_width(window: &web::Window) -> Result<f64, DomError> {
    window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerWidth is not a number".into()))
}

/// First element under `parent` matching `selector`, as an `HtmlElement`.
pub fn query_html(parent: &web::Element, selector: &str) -> Result<web::HtmlElement, DomError> {
    parent
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingElement {
            selector: selector.to_string(),
        })
}

pub fn query_document_html(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlElement, DomError> {
    let root = document
        .document_element()
        .ok_or_else(|| DomError::MissingElement {
            selector: ":root".into(),
        })?;
    query_html(&root, selector)
}

pub fn query_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>, DomError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

/// Set an inline style property, or remove it when `value` is `None`.
pub fn set_style(el: &web::HtmlElement, property: &str, value: Option<&str>) -> Result<(), DomError> {
    let style = el.style();
    match value {
        Some(v) => style.set_property(property, v)?,
        None => {
            style.remove_property(property)?;
        }
    }
    Ok(())
}

/// Replace whichever of `family` is present on `el` with `class`.
pub fn swap_class(el: &web::Element, family: &[&str], class: &str) -> Result<(), DomError> {
    let cl = el.class_list();
    for c in family {
        if *c != class {
            cl.remove_1(c)?;
        }
    }
    cl.add_1(class)?;
    Ok(())
}

pub fn set_class(el: &web::Element, class: &str, on: bool) -> Result<(), DomError> {
    let cl = el.class_list();
    if on {
        cl.add_1(class)?;
    } else {
        cl.remove_1(class)?;
    }
    Ok(())
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Append `<meta name content>` to the head unless a tag with that name is
/// already present. Returns whether a tag was inserted.
pub fn add_meta_tag(document: &web::Document, tag: &MetaTag) -> Result<bool, DomError> {
    let existing = document.get_elements_by_tag_name("meta");
    let names: Vec<String> = (0..existing.length())
        .filter_map(|i| existing.item(i))
        .filter_map(|el| el.get_attribute("name"))
        .collect();
    if !meta::needs_insert(names.iter().map(String::as_str), tag.name) {
        return Ok(false);
    }
    let head = document.head().ok_or_else(|| DomError::MissingElement {
        selector: "head".into(),
    })?;
    let el = document.create_element("meta")?;
    el.set_attribute("name", tag.name)?;
    el.set_attribute("content", tag.content)?;
    head.append_child(&el)?;
    Ok(true)
}
