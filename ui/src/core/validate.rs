//! Field validators for the subscription form.
//!
//! Both checks are shallow: they run on every keystroke and only
//! decide whether the submit guard lets a request through.

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// No trimming, no length cap, no IDN handling.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(is_js_space) {
        return false;
    }

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < domain.len())
}

/// The `\s` class of a browser regex: ECMAScript WhiteSpace plus
/// LineTerminator. Differs from [`char::is_whitespace`] on U+FEFF (included
/// here) and U+0085 (not included here).
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}' | '\u{0C}' | ' ' | '\u{A0}' | '\u{FEFF}' | '\n' | '\r' | '\u{2028}' | '\u{2029}'
            // Remaining Zs (space separator) code points.
            | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// A name is valid as soon as it is non-empty.
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{faker::internet::en::SafeEmail, Fake};
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Clone, Debug)]
    struct ValidEmailFixture(pub String);

    impl quickcheck::Arbitrary for ValidEmailFixture {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
            Self(SafeEmail().fake_with_rng(&mut rng))
        }
    }

    #[quickcheck_macros::quickcheck]
    fn generated_emails_are_valid(email: ValidEmailFixture) -> bool {
        is_valid_email(&email.0)
    }

    #[quickcheck_macros::quickcheck]
    fn strings_without_at_are_invalid(s: String) -> bool {
        !is_valid_email(&s.replace('@', ""))
    }

    #[quickcheck_macros::quickcheck]
    fn strings_without_dot_are_invalid(s: String) -> bool {
        !is_valid_email(&s.replace('.', ""))
    }

    #[test]
    fn accepts_local_at_domain_tld() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jane.doe+news@mail.example.co.uk"));
        // Only the shape matters.
        assert!(is_valid_email("x@y..z"));
        assert!(is_valid_email("ünïcode@exämple.com"));
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email(" "));
        assert!(!is_valid_email(" jane@example.com"));
        assert!(!is_valid_email("jane@example.com "));
        assert!(!is_valid_email("ja ne@example.com"));
    }

    #[test]
    fn whitespace_follows_browser_regex_rules() {
        assert!(!is_valid_email("ja\u{feff}ne@example.com"));
        assert!(!is_valid_email("jane@exa\u{3000}mple.com"));
        assert!(!is_valid_email("jane\u{2028}@example.com"));
        assert!(!is_valid_email("jane@example.c\u{0B}om"));
        assert!(is_valid_email("ja\u{85}ne@example.com"));
        assert!(is_valid_email("ja\u{200B}ne@example.com"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example."));
    }

    #[test]
    fn rejects_more_than_one_at() {
        assert!(!is_valid_email("jane@doe@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
    }

    #[test]
    fn name_only_needs_a_character() {
        assert!(!is_valid_name(""));
        assert!(is_valid_name("J"));
        assert!(is_valid_name(" "));
        assert!(is_valid_name("我"));
    }
}
