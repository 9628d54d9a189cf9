// UI state owned by the layout controller.
//
// `UiState` is a plain value: the resize and click handlers take it and
// hand back the next one. `View` describes everything the controller
// writes into the DOM, so rendering it twice is the same as rendering it
// once and every decision can be checked without a browser.

use crate::constants::{
    BUTTON_DISPLAY_HIDDEN, BUTTON_DISPLAY_SHOWN, CARD_SHIFT_PARAMETERS_PCT, CARD_SHIFT_SEARCH_PCT, ICON_ROTATION_PARAMETERS_DEG,
    ICON_ROTATION_SEARCH_DEG, LABEL_PARAMETERS, LABEL_SEARCH, NARROW_COLUMN_CLASS,
    WIDE_MAIN_COLUMN_CLASS, WIDE_SETTINGS_COLUMN_CLASS,
};
use crate::layout::{graph_margin_px, translation_rem, LayoutMode};

/// Which pane the toggle button currently exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleState {
    /// Baseline: search/results in front, button offers "Parameters".
    ShowingParameters,
    /// Card slid away, settings in front, button offers "Search".
    ShowingSearch,
}

/// The two transitions a click alternates between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    ShowSearch,
    ShowParameters,
}

impl Transition {
    #[inline]
    pub fn target(self) -> ToggleState {
        match self {
            Transition::ShowSearch => ToggleState::ShowingSearch,
            Transition::ShowParameters => ToggleState::ShowingParameters,
        }
    }

    #[inline]
    pub fn following(self) -> Self {
        match self {
            Transition::ShowSearch => Transition::ShowParameters,
            Transition::ShowParameters => Transition::ShowSearch,
        }
    }
}

/// Snapshot of the DOM state the controller owns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub mode: LayoutMode,
    pub width_px: f64,
    pub pane: ToggleState,
    /// Button translation captured when the search pane was shown.
    pub button_shift_rem: f64,
}

impl View {
    fn apply(&mut self, transition: Transition) {
        self.pane = transition.target();
        self.button_shift_rem = match transition {
            Transition::ShowSearch => translation_rem(self.width_px),
            Transition::ShowParameters => 0.0,
        };
    }

    pub fn is_narrow(&self) -> bool {
        self.mode == LayoutMode::Narrow
    }

    /// The toggle button is shown, and its click handler bound, only in
    /// the narrow layout.
    pub fn button_visible(&self) -> bool {
        self.is_narrow()
    }

    pub fn button_display(&self) -> &'static str {
        if self.button_visible() {
            BUTTON_DISPLAY_SHOWN
        } else {
            BUTTON_DISPLAY_HIDDEN
        }
    }

    pub fn main_column_class(&self) -> &'static str {
        match self.mode {
            LayoutMode::Wide => WIDE_MAIN_COLUMN_CLASS,
            LayoutMode::Narrow => NARROW_COLUMN_CLASS,
        }
    }

    pub fn settings_column_class(&self) -> &'static str {
        match self.mode {
            LayoutMode::Wide => WIDE_SETTINGS_COLUMN_CLASS,
            LayoutMode::Narrow => NARROW_COLUMN_CLASS,
        }
    }

    /// Narrow opens every accordion section, wide only the first.
    pub fn accordion_expanded(&self, index: usize) -> bool {
        self.is_narrow() || index == 0
    }

    pub fn window_width_value(&self) -> String {
        format!("{}px", self.width_px)
    }

    pub fn graph_margin_value(&self) -> String {
        format!("{}px", graph_margin_px(self.width_px))
    }

    pub fn label(&self) -> &'static str {
        match self.pane {
            ToggleState::ShowingParameters => LABEL_PARAMETERS,
            ToggleState::ShowingSearch => LABEL_SEARCH,
        }
    }

    pub fn rotation_value(&self) -> String {
        let deg = match self.pane {
            ToggleState::ShowingParameters => ICON_ROTATION_PARAMETERS_DEG,
            ToggleState::ShowingSearch => ICON_ROTATION_SEARCH_DEG,
        };
        format!("{}deg", deg)
    }

    pub fn card_transform(&self) -> String {
        let pct = match self.pane {
            ToggleState::ShowingParameters => CARD_SHIFT_PARAMETERS_PCT,
            ToggleState::ShowingSearch => CARD_SHIFT_SEARCH_PCT,
        };
        format!("translateX({}%)", pct)
    }

    pub fn button_transform(&self) -> String {
        format!("translateX({}rem)", self.button_shift_rem)
    }

    /// `display` for the main (search/results) column; `None` leaves it to
    /// the stylesheet.
    pub fn main_column_display(&self) -> Option<&'static str> {
        match self.pane {
            ToggleState::ShowingParameters => None,
            ToggleState::ShowingSearch => Some("none"),
        }
    }

    pub fn settings_column_display(&self) -> Option<&'static str> {
        match self.pane {
            ToggleState::ShowingParameters => None,
            ToggleState::ShowingSearch => Some("block"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    /// Transition the next click performs. Only clicks advance it.
    pub next: Transition,
    pub view: View,
}

impl UiState {
    pub fn new(width_px: f64) -> Self {
        let view = View {
            mode: LayoutMode::for_width(width_px),
            width_px,
            pane: ToggleState::ShowingParameters,
            button_shift_rem: 0.0,
        };
        UiState {
            next: Transition::ShowSearch,
            view,
        }
    }

    /// Re-derive the layout for a new viewport width. Entering (or staying
    /// in) the wide layout drops the view back to the parameters baseline.
    pub fn resize(self, width_px: f64) -> Self {
        let mut view = self.view;
        view.width_px = width_px;
        view.mode = LayoutMode::for_width(width_px);
        if view.mode == LayoutMode::Wide {
            view.apply(Transition::ShowParameters);
        }
        UiState { view, ..self }
    }

    /// Perform the next transition of the rotation. Ignored in the wide
    /// layout, where the button is not wired.
    pub fn toggle(self) -> Self {
        if !self.view.is_narrow() {
            return self;
        }
        let mut view = self.view;
        view.apply(self.next);
        UiState {
            next: self.next.following(),
            view,
        }
    }
}
