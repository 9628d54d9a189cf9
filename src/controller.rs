use crate::constants::{
    ACCORDION_COLLAPSE_CLASS, ACCORDION_EXPANDED_CLASS, ACCORDION_SECTIONS_SELECTOR,
    CARD_SELECTOR, CSS_VAR_GRAPH_MARGIN, CSS_VAR_ROTATION, CSS_VAR_WINDOW_WIDTH,
    MAIN_COLUMN_SELECTOR, NARROW_COLUMN_CLASS, SETTINGS_COLUMN_SELECTOR, TOGGLE_BUTTON_SELECTOR,
    TOGGLE_LABEL_SELECTOR, WIDE_MAIN_COLUMN_CLASS, WIDE_SETTINGS_COLUMN_CLASS,
};
use crate::dom::{self, DomError};
use crate::state::{UiState, View};
use anyhow::Context;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const GRID_CLASSES: [&str; 3] = [
    WIDE_MAIN_COLUMN_CLASS,
    WIDE_SETTINGS_COLUMN_CLASS,
    NARROW_COLUMN_CLASS,
];

/// Cached references to the page elements the controller writes to.
pub struct Elements {
    pub root: web::HtmlElement,
    pub card: web::HtmlElement,
    pub main_column: web::HtmlElement,
    pub settings_column: web::HtmlElement,
    pub accordion_sections: Vec<web::Element>,
    pub button: web::HtmlElement,
    pub label: web::HtmlElement,
}

impl Elements {
    pub fn lookup(document: &web::Document) -> Result<Self, DomError> {
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .ok_or_else(|| DomError::MissingElement {
                selector: ":root".into(),
            })?;
        let button = dom::query_document_html(document, TOGGLE_BUTTON_SELECTOR)?;
        let label = dom::query_html(&button, TOGGLE_LABEL_SELECTOR)?;
        Ok(Elements {
            root,
            card: dom::query_document_html(document, CARD_SELECTOR)?,
            main_column: dom::query_document_html(document, MAIN_COLUMN_SELECTOR)?,
            settings_column: dom::query_document_html(document, SETTINGS_COLUMN_SELECTOR)?,
            accordion_sections: dom::query_all(document, ACCORDION_SECTIONS_SELECTOR)?,
            button,
            label,
        })
    }
}

/// Keeps the two-pane layout in step with the viewport and drives the
/// narrow-layout toggle button.
pub struct Controller {
    window: web::Window,
    document: web::Document,
    elements: Option<Elements>,
    state: UiState,
    click: Option<Closure<dyn FnMut()>>,
}

impl Controller {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        let width = dom::viewport_width(&window).unwrap_or(0.0);
        Controller {
            window,
            document,
            elements: None,
            state: UiState::new(width),
            click: None,
        }
    }

    /// Wrap a controller for sharing with event closures and create its
    /// click handler. The handler holds a weak reference so dropping the
    /// last strong handle releases everything.
    pub fn shared(window: web::Window, document: web::Document) -> Rc<RefCell<Self>> {
        let ctrl = Rc::new(RefCell::new(Controller::new(window, document)));
        let weak: Weak<RefCell<Controller>> = Rc::downgrade(&ctrl);
        let click = Closure::wrap(Box::new(move || {
            let Some(ctrl) = weak.upgrade() else {
                return;
            };
            let Ok(mut c) = ctrl.try_borrow_mut() else {
                log::warn!("[layout] click while controller busy; ignoring");
                return;
            };
            if let Err(e) = c.on_click() {
                log::error!("[layout] toggle failed: {:#}", e);
            }
        }) as Box<dyn FnMut()>);
        ctrl.borrow_mut().click = Some(click);
        ctrl
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Drop cached element references; the next render looks them up again.
    pub fn invalidate(&mut self) {
        self.elements = None;
    }

    pub fn on_resize(&mut self) -> anyhow::Result<()> {
        let width = dom::viewport_width(&self.window).context("reading viewport width")?;
        self.apply_width(width)
    }

    /// Lay the page out for `width_px` as a resize to that width would.
    pub fn apply_width(&mut self, width_px: f64) -> anyhow::Result<()> {
        let before = self.state.view.mode;
        self.state = self.state.resize(width_px);
        let after = self.state.view.mode;
        if before != after {
            log::info!(
                "[layout] {} -> {} at {}px",
                before.name(),
                after.name(),
                width_px
            );
        }
        self.render()
    }

    pub fn on_click(&mut self) -> anyhow::Result<()> {
        self.state = self.state.toggle();
        log::debug!(
            "[layout] toggled to {:?}, next {:?}",
            self.state.view.pane,
            self.state.next
        );
        self.render()
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let stale = match &self.elements {
            Some(els) => !els.card.is_connected(),
            None => true,
        };
        if stale {
            self.elements =
                Some(Elements::lookup(&self.document).context("looking up layout elements")?);
        }
        if let Some(els) = &self.elements {
            render_view(&self.state.view, els, self.click.as_ref()).context("rendering layout")?;
        }
        Ok(())
    }
}

fn render_view(
    view: &View,
    els: &Elements,
    click: Option<&Closure<dyn FnMut()>>,
) -> Result<(), DomError> {
    let root = &els.root;
    dom::set_style(root, CSS_VAR_WINDOW_WIDTH, Some(&*view.window_width_value()))?;
    dom::set_style(root, CSS_VAR_GRAPH_MARGIN, Some(&*view.graph_margin_value()))?;
    dom::set_style(root, CSS_VAR_ROTATION, Some(&*view.rotation_value()))?;

    dom::swap_class(&els.main_column, &GRID_CLASSES, view.main_column_class())?;
    dom::swap_class(&els.settings_column, &GRID_CLASSES, view.settings_column_class())?;

    for (i, section) in els.accordion_sections.iter().enumerate() {
        dom::set_class(section, ACCORDION_COLLAPSE_CLASS, true)?;
        dom::set_class(section, ACCORDION_EXPANDED_CLASS, view.accordion_expanded(i))?;
    }

    dom::set_style(&els.button, "display", Some(view.button_display()))?;
    if view.button_visible() {
        els.button.set_onclick(click.map(|c| c.as_ref().unchecked_ref()));
    } else {
        els.button.set_onclick(None);
    }

    dom::set_style(&els.card, "transform", Some(&*view.card_transform()))?;
    dom::set_style(&els.button, "transform", Some(&*view.button_transform()))?;
    els.label.set_text_content(Some(view.label()));
    dom::set_style(&els.main_column, "display", view.main_column_display())?;
    dom::set_style(&els.settings_column, "display", view.settings_column_display())?;
    Ok(())
}
