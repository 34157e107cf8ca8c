//! Identifier normalization between the text form and the stored form.
//!
//! Stored identifiers are lowercase with words joined by `-` (`flare-blitz`).
//! The text form splits those words with spaces and title-cases them
//! (`Flare Blitz`).

/// Lowercases and hyphen-joins whitespace separated words.
pub fn normalize_id(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Display form of a stored identifier. Every letter that starts a token
/// (first character, or after any non-alphanumeric character) is upper-cased.
pub fn display_name(id: &str) -> String {
    let spaced = id.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_boundary = true;
    for ch in spaced.chars() {
        if at_boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = !ch.is_alphanumeric();
    }
    out
}

/// Upper-cases only the first character, leaving the rest as given.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_multiword_names() {
        assert_eq!(normalize_id("Flare Blitz"), "flare-blitz");
        assert_eq!(normalize_id("  Choice   Scarf "), "choice-scarf");
        assert_eq!(normalize_id("Ho-Oh"), "ho-oh");
        assert_eq!(normalize_id(""), "");
    }

    #[test]
    fn title_cases_every_token() {
        assert_eq!(display_name("flare-blitz"), "Flare Blitz");
        assert_eq!(display_name("u-turn"), "U Turn");
        assert_eq!(display_name("king's-rock"), "King'S Rock");
        assert_eq!(display_name("leftovers"), "Leftovers");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn display_then_normalize_is_stable() {
        for id in ["great-tusk", "heavy-duty-boots", "will-o-wisp", "dragon-dance"] {
            assert_eq!(normalize_id(&display_name(id)), id);
        }
    }

    #[test]
    fn capitalize_first_keeps_tail() {
        assert_eq!(capitalize_first("fire"), "Fire");
        assert_eq!(capitalize_first("sTELLAR"), "STELLAR");
        assert_eq!(capitalize_first(""), "");
    }
}
