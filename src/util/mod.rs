//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and session plumbing
//! from component markup so they can be tested off-browser.

pub mod credentials;
pub mod session_watch;
pub mod storage;
pub mod theme;
