//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `hero`, `tech_tracks`, and `location` are pure renderers of `content`.
//! `registration_form` drives the shared registration flow, and
//! `success_message` renders its confirmed result.

pub mod hero;
pub mod location;
pub mod registration_form;
pub mod success_message;
pub mod tech_tracks;
