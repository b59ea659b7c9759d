//! Top-level view toggle between the form and the confirmation.
//!
//! DESIGN
//! ======
//! A tagged union instead of a `bool` plus an optional payload: the
//! confirmation view can only exist together with the result it shows.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use registration::RegistrationResult;

/// Which half of the page is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageView {
    /// Event sections plus the registration form.
    #[default]
    Editing,
    /// Confirmation for a completed registration.
    Registered(RegistrationResult),
}

impl PageView {
    /// Switch to the confirmation view.
    pub fn register(&mut self, result: RegistrationResult) {
        *self = Self::Registered(result);
    }

    /// Drop the result and return to the form.
    pub fn back_to_form(&mut self) {
        *self = Self::Editing;
    }
}
