/// Layout breakpoints, tuning coefficients and the DOM vocabulary shared by
/// the controller.
///
/// Keeping every class name and magic number here lets the pure layout code
/// and the DOM renderer agree without string literals scattered around.
// Breakpoints (CSS pixels)
pub const LAYOUT_BREAKPOINT_PX: f64 = 1100.0; // strictly wider is the two-column layout
pub const SMALL_SCREEN_BREAKPOINT_PX: f64 = 210.0; // below this the cubic coefficient set applies

// Toggle button translation polynomials, highest power first, result in rem.
// Degree 9, used for widths >= SMALL_SCREEN_BREAKPOINT_PX.
pub const LARGE_SCREEN_COEFFS: [f64; 10] = [
    -1.9e-25, 1.1e-21, -2.7e-18, 3.6e-15, -2.8e-12, 1.25e-9, -3.0e-7, 3.4e-5, 6.05e-2, -9.7,
];
// Degree 3, used for widths below SMALL_SCREEN_BREAKPOINT_PX.
pub const SMALL_SCREEN_COEFFS: [f64; 4] = [-4.0e-7, 1.0e-4, 2.0e-2, -1.4];

// --graph-margin = slope * width + intercept (px)
pub const GRAPH_MARGIN_SLOPE: f64 = 0.05;
pub const GRAPH_MARGIN_INTERCEPT_PX: f64 = -10.0;

// Element selectors
pub const CARD_SELECTOR: &str = ".main-card";
pub const MAIN_COLUMN_SELECTOR: &str = ".main-column";
pub const SETTINGS_COLUMN_SELECTOR: &str = ".settings-column";
pub const ACCORDION_SECTIONS_SELECTOR: &str = ".settings-accordion .accordion-collapse";
pub const TOGGLE_BUTTON_SELECTOR: &str = ".header-container button";
pub const TOGGLE_LABEL_SELECTOR: &str = "span";

// Bootstrap grid and collapse classes
pub const WIDE_MAIN_COLUMN_CLASS: &str = "col-8";
pub const WIDE_SETTINGS_COLUMN_CLASS: &str = "col-4";
pub const NARROW_COLUMN_CLASS: &str = "col-12";
pub const ACCORDION_COLLAPSE_CLASS: &str = "collapse";
pub const ACCORDION_EXPANDED_CLASS: &str = "show";

// CSS custom properties on the document root
pub const CSS_VAR_ROTATION: &str = "--rotation";
pub const CSS_VAR_WINDOW_WIDTH: &str = "--window-width";
pub const CSS_VAR_GRAPH_MARGIN: &str = "--graph-margin";

// Toggle button presentation; the button's display is always written inline
pub const BUTTON_DISPLAY_SHOWN: &str = "inline-block";
pub const BUTTON_DISPLAY_HIDDEN: &str = "none";
pub const LABEL_PARAMETERS: &str = "Parameters";
pub const LABEL_SEARCH: &str = "Search";
pub const ICON_ROTATION_PARAMETERS_DEG: f64 = 0.0;
pub const ICON_ROTATION_SEARCH_DEG: f64 = 180.0;
pub const CARD_SHIFT_PARAMETERS_PCT: f64 = 0.0;
pub const CARD_SHIFT_SEARCH_PCT: f64 = 100.0;

// Host hook published for the Dash clientside callback
pub const HOOK_ROOT_NAMESPACE: &str = "dash_clientside";
pub const HOOK_NAMESPACE: &str = "clientside";
pub const HOOK_FUNCTION_NAME: &str = "resizeOnPageLoad";

// Head metadata inserted at startup
pub const META_DESCRIPTION_NAME: &str = "Description";
pub const META_DESCRIPTION_CONTENT: &str =
    "Anime recommender system for Anilist user profiles and individual title(s).";
pub const META_SITE_VERIFICATION_NAME: &str = "google-site-verification";
pub const META_SITE_VERIFICATION_CONTENT: &str = "gld465HiecZa8jy-0b1iduTEp9Mg_hITVSqJpk35onQ";
