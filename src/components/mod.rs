//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the storefront chrome: the theme root, the navigation
//! bar and the dialogs it hosts. Shared state arrives through Leptos context
//! (`AuthClient`, `Theme`).

pub mod cart_dialog;
pub mod modal;
pub mod navbar;
pub mod profile_menu;
pub mod sign_in_dialog;
pub mod sign_up_dialog;
pub mod theme_wrapper;
