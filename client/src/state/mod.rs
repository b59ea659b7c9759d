//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form's field state and submission lifecycle live in
//! `registration::RegistrationFlow`; this module holds the page-level view
//! toggle that owns the confirmed result.

pub mod page;
