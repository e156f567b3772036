//! Email addresses derived from a person's name.

use rand::Rng;
use rand::seq::SliceRandom;
use unicode_normalization::UnicodeNormalization;

/// Longest local part produced.
pub const MAX_LOCAL_PART_LEN: usize = 30;

const SUFFIX_WORDS: &[&str] = &["x", "z", "pro", "2024", "2025"];
const SUFFIX_TAGS: &[&str] = &["x", "z", "pro"];

/// Lowercase ASCII letters and digits of `text`, with diacritics removed.
///
/// Letters without a canonical decomposition (ø, ł, ß, æ ...) are spelled
/// out; anything else that is not alphanumeric is dropped.
pub fn fold_ascii(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.nfkd() {
        match c {
            'a'..='z' | '0'..='9' => folded.push(c),
            'A'..='Z' => folded.push(c.to_ascii_lowercase()),
            'ø' | 'Ø' => folded.push('o'),
            'ł' | 'Ł' => folded.push('l'),
            'đ' | 'Đ' => folded.push('d'),
            'ß' => folded.push_str("ss"),
            'æ' | 'Æ' => folded.push_str("ae"),
            'œ' | 'Œ' => folded.push_str("oe"),
            'þ' | 'Þ' => folded.push_str("th"),
            _ => {}
        }
    }
    folded
}

/// Builds a local part such as `anna.nowak417` from a name.
pub fn local_part(first_name: &str, last_name: &str, rng: &mut impl Rng) -> String {
    let mut first = fold_ascii(first_name);
    let last = fold_ascii(last_name);
    if first.is_empty() {
        first = "user".to_string();
    }

    let base = match (rng.gen_range(0..6), last.is_empty()) {
        (0, false) => format!("{first}.{last}"),
        (1, false) => format!("{first}{last}"),
        (2, false) => format!("{first}_{last}"),
        (3, false) => format!("{}{last}", &first[..1]),
        (5, false) => format!("{first}.{last}{}", rng.gen_range(1..=999)),
        _ => format!("{first}{}", rng.gen_range(1980..=2005)),
    };

    let mut local = format!("{base}{}", suffix(rng));
    local.truncate(MAX_LOCAL_PART_LEN);
    local.trim_end_matches(['.', '_']).to_string()
}

fn suffix(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => rng.gen_range(1..=9999).to_string(),
        1 => rng.gen_range(10..=99).to_string(),
        2 => SUFFIX_WORDS.choose(rng).copied().unwrap_or("x").to_string(),
        _ => format!(
            "{}{}",
            rng.gen_range(1..=99),
            SUFFIX_TAGS.choose(rng).copied().unwrap_or("x")
        ),
    }
}

/// `username@provider` with the username folded to ASCII.
pub fn recovery_address(username: &str, provider: &str) -> String {
    let mut user: String = username
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_'))
        .flat_map(char::to_lowercase)
        .collect();
    user = user.trim_matches(['.', '_']).to_string();
    if user.is_empty() {
        user = "recovery".to_string();
    }
    format!("{user}@{provider}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fold_ascii() {
        assert_eq!(fold_ascii("Łukasz"), "lukasz");
        assert_eq!(fold_ascii("Gröger"), "groger");
        assert_eq!(fold_ascii("Søren"), "soren");
        assert_eq!(fold_ascii("Straße"), "strasse");
        assert_eq!(fold_ascii("O'Brien-Smith"), "obriensmith");
        assert_eq!(fold_ascii("José María"), "josemaria");
    }

    #[test]
    fn test_local_part_shape() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1_000 {
            let local = local_part("Ærøskøbing-Ånne", "Dvořáková", &mut rng);
            assert!(!local.is_empty());
            assert!(local.len() <= MAX_LOCAL_PART_LEN, "{local}");
            assert!(local.is_ascii(), "{local}");
            assert!(
                local
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '_'),
                "{local}"
            );
            assert!(!local.ends_with('.') && !local.ends_with('_'));
        }
    }

    #[test]
    fn test_local_part_without_usable_name() {
        let mut rng = StdRng::seed_from_u64(2);
        let local = local_part("", "", &mut rng);
        assert!(local.starts_with("user"));
    }

    #[test]
    fn test_recovery_address() {
        assert_eq!(recovery_address("Jörg_Meyer", "proton.me"), "jorg_meyer@proton.me");
        assert_eq!(recovery_address("__", "gmail.com"), "recovery@gmail.com");
    }
}
