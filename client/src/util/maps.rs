//! Google Maps deep links for the venue.
//!
//! Links must render identically on the server and in the browser, so the
//! address is encoded here instead of through `js_sys`.

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

use std::fmt::Write;

const SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Percent-encode `raw` with `encodeURIComponent` semantics: ASCII letters,
/// digits and `-_.!~*'()` pass through, everything else is UTF-8 escaped.
#[must_use]
pub fn encode_uri_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 3);
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// "Open in Maps" link for an address.
#[must_use]
pub fn search_url(address: &str) -> String {
    format!("{SEARCH_BASE}{}", encode_uri_component(address))
}

/// "Get Directions" link for an address.
#[must_use]
pub fn directions_url(address: &str) -> String {
    format!("{DIRECTIONS_BASE}{}", encode_uri_component(address))
}
