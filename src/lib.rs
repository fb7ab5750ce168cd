//! Progressive enhancement for a static single-page resume.
//!
//! The page works without this crate. Once loaded as WebAssembly it adds a
//! scroll progress bar, accessible tabs, a persisted color theme and
//! light/dark mode, transient notifications, smooth in-page navigation with
//! active-link highlighting, reveal-on-scroll, lazy images, and a dismissible
//! template banner.
//!
//! Every component is a plain state machine that returns [`dom::Mutation`]s.
//! Only the `browser` feature touches the real DOM, so the cores are tested
//! natively against [`dom::MemoryDocument`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Element targets, mutations, and the in-memory test document |
//! | [`config`] | Tunables read from the page's `#resume-config` block |
//! | [`storage`] | Key/value persistence seam (memory, `localStorage`, `sessionStorage`) |
//! | [`prefs`] | Theme and mode values and their persisted store |
//! | [`theme`] | Applying theme/mode and the switcher control |
//! | [`scroll`] | Progress percentage and active-section tracking |
//! | [`debounce`] | Trailing-edge debouncer driven by explicit timestamps |
//! | [`tabs`] | Tab group activation and keyboard movement |
//! | [`notify`] | Single transient notification lifecycle |
//! | [`nav`] | Offset scrolling and focus for in-page links |
//! | [`banner`] | Session-dismissible template banner |
//! | [`keyboard`] | Keyboard-navigation mode and Escape handling |
//! | [`telemetry`] | Download labels and load timing for the console log |
//! | [`error`] | Error types shared by all modules |
//! | [`consts`] | Markup hooks, storage keys, and timing defaults |

pub mod banner;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod keyboard;
pub mod nav;
pub mod notify;
pub mod prefs;
pub mod scroll;
pub mod storage;
pub mod tabs;
pub mod telemetry;
pub mod theme;

#[cfg(feature = "browser")]
mod page;

#[cfg(feature = "browser")]
pub use page::start;
