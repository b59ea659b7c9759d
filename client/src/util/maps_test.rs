use super::*;

#[test]
fn encode_keeps_unreserved_characters() {
    assert_eq!(encode_uri_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
}

#[test]
fn encode_escapes_spaces_and_commas() {
    assert_eq!(encode_uri_component("Tower 12, Pune"), "Tower%2012%2C%20Pune");
}

#[test]
fn encode_escapes_reserved_and_multibyte() {
    assert_eq!(encode_uri_component("a&b=c/d"), "a%26b%3Dc%2Fd");
    assert_eq!(encode_uri_component("é"), "%C3%A9");
}

#[test]
fn search_and_directions_urls_embed_encoded_address() {
    assert_eq!(
        search_url("Magarpatta, Pune"),
        "https://www.google.com/maps/search/?api=1&query=Magarpatta%2C%20Pune"
    );
    assert_eq!(
        directions_url("Magarpatta, Pune"),
        "https://www.google.com/maps/dir/?api=1&destination=Magarpatta%2C%20Pune"
    );
}
