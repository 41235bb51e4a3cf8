// DOM hooks the host page provides. Missing elements degrade to defaults.

// Elements
pub const CANVAS_ID: &str = "c";
pub const LEGACY_CONTAINER_ID: &str = "original-container";
pub const CONTROLS_SELECTOR: &str = ".controls";
pub const PAGE_LINKS_SELECTOR: &str = ".page-links";

// Mode checkboxes
pub const DARK_BG_TOGGLE_ID: &str = "darkBg";
pub const FPS30_TOGGLE_ID: &str = "fps30";
pub const LEGACY_TOGGLE_ID: &str = "originalMode";

// Body classes the stylesheet keys off
pub const DARK_BG_CLASS: &str = "dark-bg";
pub const LEGACY_BODY_CLASS: &str = "original-mode";

// Legacy circle elements
pub const LEGACY_CIRCLE_CLASS: &str = "original-circle";
pub const LEGACY_CIRCLE_Z_INDEX: &str = "-1";

// Display values restored when the controls are shown again
pub const CONTROLS_DISPLAY: &str = "flex";
pub const PAGE_LINKS_DISPLAY: &str = "block";
