//! Networking for the registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the shared `RegistrationApi` seam for the browser and
//! resolves which backend the page talks to.

pub mod api;
