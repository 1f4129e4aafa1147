//! Client-side UI state.
//!
//! DESIGN
//! ======
//! State types are plain data with pure transitions; components wrap them in
//! `RwSignal`s.

pub mod nav;
