//! Shared constants: markup hooks, storage keys, and default timings.

// ── Markup hooks ────────────────────────────────────────────────

/// Root attribute carrying the active theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root attribute present (as `light`) only in light mode.
pub const MODE_ATTRIBUTE: &str = "data-mode";

/// CSS custom property holding the theme accent color.
pub const ACCENT_PROPERTY: &str = "--accent-color";

/// Class toggled on nav links, tab buttons, tab panels, and switcher options.
pub const ACTIVE_CLASS: &str = "active";

/// Id of the scroll progress bar.
pub const PROGRESS_ELEMENT_ID: &str = "scrollProgress";

/// Suffix appended to a tab name to find its panel id.
pub const PANEL_SUFFIX: &str = "-panel";

/// Attribute naming a tab button's panel.
pub const TAB_ATTRIBUTE: &str = "data-tab";

/// Id of the injected theme switcher container.
pub const SWITCHER_ID: &str = "themeSwitcher";

/// Attribute carrying a switcher option's theme name.
pub const THEME_OPTION_ATTRIBUTE: &str = "data-theme-option";

/// Id of the injected light/dark toggle.
pub const MODE_TOGGLE_ID: &str = "modeToggle";

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "resume-config";

/// Banner and its close button.
pub const BANNER_ID: &str = "templateBanner";
pub const BANNER_CLOSE_ID: &str = "closeBanner";

/// Class hiding a dismissed element.
pub const HIDDEN_CLASS: &str = "hidden";

/// Notification classes: base, visible, and fading.
pub const NOTIFICATION_CLASS: &str = "notification";
pub const NOTIFICATION_SHOW_CLASS: &str = "show";
pub const NOTIFICATION_FADE_CLASS: &str = "fade-out";

/// Reveal animation classes.
pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "revealed";

/// Body class set while the user navigates with the keyboard.
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

// ── Navigation targets ──────────────────────────────────────────

/// Section whose activation highlights the `#top` link.
pub const PROFILE_SECTION: &str = "profile";

/// Fragment of the link highlighted for the profile section.
pub const TOP_FRAGMENT: &str = "top";

/// Fragment of the link force-activated near the page bottom.
pub const CLONE_FRAGMENT: &str = "clone";

/// Fragment scrolled with the wider header offset alongside `#clone`.
pub const EXPERIENCE_FRAGMENT: &str = "experience";

// ── Storage keys ────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "resume-theme";
pub const MODE_STORAGE_KEY: &str = "resume-mode";

/// Session-scoped banner flag.
pub const BANNER_STORAGE_KEY: &str = "banner-closed";

// ── Timings and offsets ─────────────────────────────────────────

/// Scroll progress debounce wait.
pub const PROGRESS_DEBOUNCE_MS: u32 = 10;

/// Active-section debounce wait.
pub const SECTION_DEBOUNCE_MS: u32 = 100;

/// Header allowance when deciding which section is active.
pub const SECTION_OFFSET_PX: f64 = 100.0;

/// Distance from the document bottom that forces the `#clone` link active.
pub const BOTTOM_THRESHOLD_PX: f64 = 50.0;

/// Default header allowance for anchor navigation.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Header allowance for `#experience` and `#clone`.
pub const NAV_WIDE_OFFSET_PX: f64 = 100.0;

/// Time a notification stays fully visible.
pub const NOTIFICATION_TTL_MS: u32 = 3000;

/// Fade-out duration before a notification is removed.
pub const NOTIFICATION_FADE_MS: u32 = 300;

/// Delay before a freshly created notification gets its `show` class.
pub const NOTIFICATION_ENTER_MS: u32 = 10;

/// Intersection ratio at which an article is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for the reveal observer.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
