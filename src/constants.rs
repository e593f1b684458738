// Markup contract and tuning constants shared by the effect groups.

// Element ids
pub const MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const NAV_MENU_ID: &str = "nav-menu";

// Selectors
pub const MENU_ICON_SELECTOR: &str = "i";
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const HERO_BG_SELECTOR: &str = ".hero-bg";
pub const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const FLOATING_CONTAINER_SELECTOR: &str = ".floating-elements";
pub const CARD_SELECTOR: &str = ".project-card";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const ENTRANCE_SELECTOR: &str = ".skill-item, .project-card";

// Marker classes
pub const MENU_OPEN_CLASS: &str = "active";
pub const ICON_CLOSED_CLASS: &str = "fa-bars";
pub const ICON_OPEN_CLASS: &str = "fa-times";
pub const VISIBLE_CLASS: &str = "visible";
pub const FLOATING_ELEMENT_CLASS: &str = "floating-element";
pub const RIPPLE_CLASS: &str = "ripple";
pub const CURSOR_CLASS: &str = "custom-cursor";
pub const LOADED_CLASS: &str = "loaded";
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";
pub const SKILL_ITEM_CLASS: &str = "skill-item";
pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const SKILL_ENTRANCE_CLASS: &str = "animate-in";
pub const CARD_ENTRANCE_CLASS: &str = "slide-in";

// Navbar shading
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const NAVBAR_BG_TOP: &str = "rgba(10, 10, 10, 0.9)";
pub const NAVBAR_BG_SCROLLED: &str = "rgba(10, 10, 10, 0.95)";

// Parallax: background moves at half the scroll speed
pub const PARALLAX_SPEED: f64 = 0.5;

// Intersection observers
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const ENTRANCE_THRESHOLD: f64 = 0.1;
pub const ENTRANCE_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const SKILL_STAGGER_MAX_SECS: f64 = 0.5;
pub const CARD_STAGGER_MAX_SECS: f64 = 0.3;

// Typewriter
pub const SUBTITLE_TYPE_SPEED_MS: u32 = 50;
pub const SUBTITLE_START_DELAY_MS: u32 = 1500;

// Floating decorations
pub const FLOATING_ELEMENT_COUNT: usize = 5;
pub const FLOATING_DELAY_MAX_SECS: f64 = 6.0;
pub const FLOATING_DURATION_MIN_SECS: f64 = 4.0;
pub const FLOATING_DURATION_SPAN_SECS: f64 = 4.0;

// Card hover transforms
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-15px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(-10px) scale(1)";

// Custom cursor
pub const HOVER_CAPABLE_QUERY: &str = "(hover: hover)";
pub const CURSOR_OFFSET_PX: f64 = 10.0;
pub const CURSOR_PRESSED_TRANSFORM: &str = "scale(0.8)";
pub const CURSOR_RELEASED_TRANSFORM: &str = "scale(1)";

// Reserved debounced scroll hook
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

// Accessibility
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const KEYBOARD_NAV_KEY: &str = "Tab";
