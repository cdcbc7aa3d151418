// DOM contract shared by the wiring modules: element ids, selectors and class
// names the page is expected to provide. A missing element only disables its
// feature.

// Theme
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ICON_ID: &str = "themeIcon";
pub const THEME_ATTR: &str = "data-theme";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// Navigation
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_LINK_CLASS: &str = "nav-link"; // handled by the nav wiring, skipped by the anchor wiring
pub const NAV_HEADER_SELECTOR: &str = ".main-nav";
pub const NAV_MENU_ID: &str = "navMenu";
pub const MOBILE_TOGGLE_ID: &str = "mobileMenuToggle";
pub const NAV_SECTION_SELECTOR: &str = ".section, #hero";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ACTIVE_CLASS: &str = "active";

// Scroll track
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const SCROLL_DOT_SELECTOR: &str = ".scroll-dot";
pub const SCROLL_DOT_ATTR: &str = "data-section";
pub const TRACK_SECTION_SELECTOR: &str = "section[id], #hero";

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const REVEAL_CLASS: &str = "animated";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Decorative layers
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const BUBBLE_CONTAINER_ID: &str = "bubbleContainer";
pub const BUBBLE_CLASS: &str = "bubble";
pub const TRAIL_CONTAINER_ID: &str = "cursorMicrobes";
pub const TRAIL_NODE_CLASS: &str = "cursor-microbe";

// Typing and cards
pub const TYPING_TEXT_ID: &str = "typingText";
pub const SWIPE_CARD_SELECTOR: &str = ".project-card, .achievement-card, .cert-card";
pub const BODY_LOADED_CLASS: &str = "loaded";
