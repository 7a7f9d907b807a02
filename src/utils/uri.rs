use url::{form_urlencoded, Url};

/// Percent-encodes one URI component. Spaces become `%20`, line breaks `%0A`.
///
/// `form_urlencoded` writes spaces as `+` and escapes a literal `+` as `%2B`,
/// so every remaining `+` is a space.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Percent-encodes an address for the `mailto:` path. `@` stays literal; `?`,
/// `&`, `=`, `#` and `%` are escaped so the address cannot open a query.
pub fn encode_address(address: &str) -> String {
    encode_component(address).replace("%40", "@")
}

/// `tel:` URI for a display phone number such as `+27 11 234 5678`.
pub fn tel_uri(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

pub fn mailto_uri(address: &str) -> String {
    format!("mailto:{}", encode_address(address))
}

/// Map search link for a street address.
pub fn maps_search_uri(base: &str, address: &str) -> Result<String, url::ParseError> {
    let url = Url::parse_with_params(base, &[("q", address)])?;
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("1+1"), "1%2B1");
        assert_eq!(encode_component("x\ny"), "x%0Ay");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("• R1,500 – ok"), "%E2%80%A2%20R1%2C500%20%E2%80%93%20ok");
    }

    #[test]
    fn test_encode_address_keeps_query_out() {
        assert_eq!(encode_address("info@example.co.za"), "info@example.co.za");
        assert_eq!(encode_address("a?cc=evil@b.com"), "a%3Fcc%3Devil@b.com");
        assert_eq!(encode_address("x&y#z%@b.com"), "x%26y%23z%25@b.com");
        assert_eq!(mailto_uri("a?cc=evil@b.com"), "mailto:a%3Fcc%3Devil@b.com");
    }

    #[test]
    fn test_tel_uri_strips_spacing() {
        assert_eq!(tel_uri("+27 11 234 5678"), "tel:+27112345678");
    }

    #[test]
    fn test_maps_search_uri() {
        let uri = maps_search_uri("https://maps.google.com/", "115 Vilakazi street, Soweto").unwrap();
        assert_eq!(uri, "https://maps.google.com/?q=115+Vilakazi+street%2C+Soweto");
    }
}
