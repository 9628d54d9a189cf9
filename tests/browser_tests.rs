#![cfg(target_arch = "wasm32")]

use anime_recommender_web::constants::*;
use anime_recommender_web::controller::Controller;
use anime_recommender_web::dom;
use anime_recommender_web::hook;
use anime_recommender_web::meta::{MetaTag, DEFAULT_META_TAGS};
use anime_recommender_web::state::ToggleState;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div class="card main-card">
  <div class="row">
    <div class="col col-8 main-column">
      <div class="header-container">
        <h2>Anime Recommender</h2>
        <button><span>Parameters</span><i class="bi bi-arrow-right"></i></button>
      </div>
    </div>
    <div class="col col-4 settings-column">
      <div class="row settings-accordion">
        <div class="accordion-collapse collapse show"></div>
        <div class="accordion-collapse collapse show"></div>
        <div class="accordion-collapse collapse show"></div>
      </div>
    </div>
  </div>
</div>
"#;

fn mount_fixture() -> (web::Window, web::Document) {
    let (window, document) = dom::window_document().expect("window");
    let body = document.body().expect("body");
    body.set_inner_html(FIXTURE);
    (window, document)
}

/// Everything the controller writes, flattened for comparison.
fn snapshot(document: &web::Document) -> Vec<String> {
    let mut out = Vec::new();
    for sel in [
        CARD_SELECTOR,
        MAIN_COLUMN_SELECTOR,
        SETTINGS_COLUMN_SELECTOR,
        TOGGLE_BUTTON_SELECTOR,
    ] {
        let el = dom::query_document_html(document, sel).expect(sel);
        out.push(format!("{sel} class={}", el.class_name()));
        out.push(format!("{sel} style={}", el.style().css_text()));
    }
    for el in dom::query_all(document, ACCORDION_SECTIONS_SELECTOR).expect("sections") {
        out.push(format!("section class={}", el.class_name()));
    }
    let root = document.document_element().expect("root");
    out.push(format!("root style={}", root.get_attribute("style").unwrap_or_default()));
    let label = document
        .query_selector(".header-container button span")
        .expect("query")
        .expect("label");
    out.push(format!("label={}", label.text_content().unwrap_or_default()));
    out
}

fn label_text(document: &web::Document) -> String {
    document
        .query_selector(".header-container button span")
        .expect("query")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn card_transform(document: &web::Document) -> String {
    dom::query_document_html(document, CARD_SELECTOR)
        .expect("card")
        .style()
        .get_property_value("transform")
        .expect("transform")
}

#[wasm_bindgen_test]
fn resize_twice_renders_like_once() {
    for width in [800.0, 1280.0] {
        let (window, document) = mount_fixture();
        let mut c = Controller::new(window, document.clone());
        c.apply_width(width).expect("first pass");
        let once = snapshot(&document);
        c.apply_width(width).expect("second pass");
        assert_eq!(once, snapshot(&document), "width {width}");
    }
}

#[wasm_bindgen_test]
fn narrow_layout_stacks_columns_and_opens_sections() {
    let (window, document) = mount_fixture();
    let mut c = Controller::new(window, document.clone());
    c.apply_width(800.0).expect("layout");

    let main = dom::query_document_html(&document, MAIN_COLUMN_SELECTOR).expect("main");
    assert!(main.class_list().contains(NARROW_COLUMN_CLASS));
    assert!(!main.class_list().contains(WIDE_MAIN_COLUMN_CLASS));
    for el in dom::query_all(&document, ACCORDION_SECTIONS_SELECTOR).expect("sections") {
        assert!(el.class_list().contains(ACCORDION_EXPANDED_CLASS));
    }
    let button = dom::query_document_html(&document, TOGGLE_BUTTON_SELECTOR).expect("button");
    assert_eq!(
        button.style().get_property_value("display").expect("display"),
        BUTTON_DISPLAY_SHOWN
    );
    assert!(button.onclick().is_none(), "plain controller has no click closure");
}

#[wasm_bindgen_test]
fn wide_layout_hides_button_and_collapses_rest() {
    let (window, document) = mount_fixture();
    let mut c = Controller::new(window, document.clone());
    c.apply_width(1280.0).expect("layout");

    let settings = dom::query_document_html(&document, SETTINGS_COLUMN_SELECTOR).expect("settings");
    assert!(settings.class_list().contains(WIDE_SETTINGS_COLUMN_CLASS));
    let sections = dom::query_all(&document, ACCORDION_SECTIONS_SELECTOR).expect("sections");
    assert!(sections[0].class_list().contains(ACCORDION_EXPANDED_CLASS));
    assert!(!sections[1].class_list().contains(ACCORDION_EXPANDED_CLASS));
    assert!(!sections[2].class_list().contains(ACCORDION_EXPANDED_CLASS));

    let button = dom::query_document_html(&document, TOGGLE_BUTTON_SELECTOR).expect("button");
    assert_eq!(
        button.style().get_property_value("display").expect("display"),
        BUTTON_DISPLAY_HIDDEN
    );
}

#[wasm_bindgen_test]
fn toggle_round_trip_restores_label_and_card() {
    let (window, document) = mount_fixture();
    let mut c = Controller::new(window, document.clone());
    c.apply_width(800.0).expect("layout");
    let label = label_text(&document);
    let card = card_transform(&document);

    c.on_click().expect("first click");
    assert_eq!(c.state().view.pane, ToggleState::ShowingSearch);
    assert_eq!(label_text(&document), LABEL_SEARCH);
    assert_eq!(card_transform(&document), "translateX(100%)");

    c.on_click().expect("second click");
    assert_eq!(label_text(&document), label);
    assert_eq!(card_transform(&document), card);
}

#[wasm_bindgen_test]
fn shared_controller_binds_click_only_when_narrow() {
    let (window, document) = mount_fixture();
    let ctrl = Controller::shared(window, document.clone());
    let button = dom::query_document_html(&document, TOGGLE_BUTTON_SELECTOR).expect("button");

    ctrl.borrow_mut().apply_width(800.0).expect("narrow");
    assert!(button.onclick().is_some());

    button.click();
    assert_eq!(label_text(&document), LABEL_SEARCH);

    ctrl.borrow_mut().apply_width(1280.0).expect("wide");
    assert!(button.onclick().is_none());
    assert_eq!(label_text(&document), LABEL_PARAMETERS);
}

#[wasm_bindgen_test]
fn missing_elements_are_reported() {
    let (window, document) = dom::window_document().expect("window");
    document.body().expect("body").set_inner_html("<p>nothing here</p>");
    let mut c = Controller::new(window, document);
    let err = c.apply_width(800.0).expect_err("lookup should fail");
    assert!(format!("{:#}", err).contains("missing element"));
}

fn get(target: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).expect("reflect get")
}

fn set(target: &JsValue, key: &str, value: &JsValue) {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).expect("reflect set");
}

#[wasm_bindgen_test]
fn detached_card_is_looked_up_again() {
    let (window, document) = mount_fixture();
    let mut c = Controller::new(window, document.clone());
    c.apply_width(800.0).expect("first layout");
    c.on_click().expect("click");

    // Same markup, new nodes: the cached card is no longer connected.
    mount_fixture();
    assert_eq!(card_transform(&document), "");
    c.apply_width(800.0).expect("second layout");
    assert_eq!(card_transform(&document), "translateX(100%)");
    assert_eq!(label_text(&document), LABEL_SEARCH);
}

#[wasm_bindgen_test]
fn invalidate_forces_fresh_lookup() {
    let (window, document) = mount_fixture();
    let mut c = Controller::new(window, document.clone());
    c.apply_width(800.0).expect("first layout");
    c.invalidate();
    c.apply_width(800.0).expect("after invalidate");
    assert_eq!(card_transform(&document), "translateX(0%)");
}

#[wasm_bindgen_test]
fn hook_is_published_next_to_existing_members() {
    let (window, document) = mount_fixture();
    let root = js_sys::Object::new();
    let clientside = js_sys::Object::new();
    set(&clientside, "other", &JsValue::from_f64(1.0));
    set(&root, HOOK_NAMESPACE, &clientside);
    set(&window, HOOK_ROOT_NAMESPACE, &root);

    let ctrl = Controller::shared(window.clone(), document.clone());
    hook::install(&window, ctrl).expect("install");

    let ns = get(&get(&window, HOOK_ROOT_NAMESPACE), HOOK_NAMESPACE);
    assert_eq!(get(&ns, "other").as_f64(), Some(1.0));
    let f = get(&ns, HOOK_FUNCTION_NAME);
    assert!(f.is_function());

    let f: js_sys::Function = f.dyn_into().expect("function");
    let marker = JsValue::from_str("hidden-children");
    let out = f.call1(&JsValue::NULL, &marker).expect("call");
    assert_eq!(out.as_string().as_deref(), Some("hidden-children"));

    // New markup from the host: the hook lays it out.
    mount_fixture();
    assert_eq!(card_transform(&document), "");
    f.call1(&JsValue::NULL, &JsValue::UNDEFINED).expect("second call");
    assert_eq!(card_transform(&document), "translateX(0%)");
}

#[wasm_bindgen_test]
fn hook_creates_missing_namespaces() {
    let (window, document) = mount_fixture();
    js_sys::Reflect::delete_property(&window, &JsValue::from_str(HOOK_ROOT_NAMESPACE))
        .expect("delete");

    let ctrl = Controller::shared(window.clone(), document);
    hook::install(&window, ctrl).expect("install");

    let ns = get(&get(&window, HOOK_ROOT_NAMESPACE), HOOK_NAMESPACE);
    assert!(ns.is_object());
    assert!(get(&ns, HOOK_FUNCTION_NAME).is_function());
}

#[wasm_bindgen_test]
fn meta_tag_inserted_once() {
    let (_, document) = dom::window_document().expect("window");
    let tag = MetaTag {
        name: "x-layout-test",
        content: "1",
    };
    assert!(dom::add_meta_tag(&document, &tag).expect("first insert"));
    assert!(!dom::add_meta_tag(&document, &tag).expect("second insert"));
    let count = document
        .query_selector_all("meta[name='x-layout-test']")
        .expect("query")
        .length();
    assert_eq!(count, 1);
}

#[wasm_bindgen_test]
fn default_meta_tags_are_idempotent() {
    let (_, document) = dom::window_document().expect("window");
    for _ in 0..2 {
        for tag in DEFAULT_META_TAGS.iter() {
            dom::add_meta_tag(&document, tag).expect("insert");
        }
    }
    for tag in DEFAULT_META_TAGS.iter() {
        let sel = format!("meta[name='{}']", tag.name);
        let count = document.query_selector_all(&sel).expect("query").length();
        assert_eq!(count, 1, "{}", tag.name);
    }
}
