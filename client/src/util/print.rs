//! Browser print dialog for the confirmation view.
//!
//! Requires a browser environment; SSR paths no-op.

/// Open the browser's print dialog. Returns `false` when unavailable.
pub fn print_page() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Err(e) = window.print() {
            log::warn!("print dialog failed: {e:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
