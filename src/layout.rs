// Width-driven layout decisions: breakpoint classification, the graph
// margin and the toggle button translation polynomial. Pure, so the host
// tests include this file directly.

use crate::constants::{
    GRAPH_MARGIN_INTERCEPT_PX, GRAPH_MARGIN_SLOPE, LARGE_SCREEN_COEFFS, LAYOUT_BREAKPOINT_PX,
    SMALL_SCREEN_BREAKPOINT_PX, SMALL_SCREEN_COEFFS,
};

/// Responsive layout of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Two columns side by side, toggle button hidden.
    Wide,
    /// Single column with a slide-over settings panel and a toggle button.
    Narrow,
}

impl LayoutMode {
    #[inline]
    pub fn for_width(width_px: f64) -> Self {
        if width_px > LAYOUT_BREAKPOINT_PX {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Wide => "wide",
            LayoutMode::Narrow => "narrow",
        }
    }
}

/// Which polynomial positions the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoefficientSet {
    Small,
    Large,
}

impl CoefficientSet {
    #[inline]
    pub fn for_width(width_px: f64) -> Self {
        if width_px < SMALL_SCREEN_BREAKPOINT_PX {
            CoefficientSet::Small
        } else {
            CoefficientSet::Large
        }
    }

    /// Coefficients, highest power first.
    pub fn coefficients(self) -> &'static [f64] {
        match self {
            CoefficientSet::Small => &SMALL_SCREEN_COEFFS,
            CoefficientSet::Large => &LARGE_SCREEN_COEFFS,
        }
    }

    #[inline]
    pub fn degree(self) -> usize {
        self.coefficients().len().saturating_sub(1)
    }
}

/// Evaluate a polynomial with Horner's scheme; `coeffs` is highest power
/// first. An empty slice evaluates to zero.
#[inline]
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, c| acc * x + c)
}

/// Horizontal translation of the toggle button, in rem, for a viewport of
/// `width_px` CSS pixels.
#[inline]
pub fn translation_rem(width_px: f64) -> f64 {
    horner(CoefficientSet::for_width(width_px).coefficients(), width_px)
}

/// Value of the `--graph-margin` custom property, in px.
#[inline]
pub fn graph_margin_px(width_px: f64) -> f64 {
    GRAPH_MARGIN_SLOPE * width_px + GRAPH_MARGIN_INTERCEPT_PX
}
