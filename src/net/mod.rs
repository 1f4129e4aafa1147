//! Networking modules for the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the collaborator seam the UI depends on, `gotrue` binds it
//! to the REST auth service, and `types` holds the wire schema.

pub mod auth;
pub mod gotrue;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_auth;
