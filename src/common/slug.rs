use crate::common::error::AppError;

/// Normalises a user-supplied identifier into the lowercase, hyphenated form
/// used for primary keys: `"Acme Co"` becomes `"acme-co"`.
///
/// Non-ASCII text is transliterated first (`"Café"` -> `"cafe"`). ASCII letters
/// and digits are then kept (lowercased); every run of anything else collapses
/// into a single `-`, and hyphens at either end are dropped.
pub fn slugify(input: &str) -> String {
    let ascii = deunicode::deunicode(input);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}

/// [`slugify`] for a new primary key. A code with nothing left after slugging
/// could never be addressed by a route, so it is refused.
pub fn slug_code(input: &str) -> Result<String, AppError> {
    let code = slugify(input);
    if code.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Code '{input}' must contain at least one letter or digit"
        )));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::{slug_code, slugify};

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Acme Co"), "acme-co");
        assert_eq!(slugify("IBM"), "ibm");
    }

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(slugify("  Big   Blue!! "), "big-blue");
        assert_eq!(slugify("Ben & Jerry's"), "ben-jerry-s");
        assert_eq!(slugify("--tech--"), "tech");
    }

    #[test]
    fn already_slugged_input_is_unchanged() {
        assert_eq!(slugify("ran"), "ran");
        assert_eq!(slugify("acme-co"), "acme-co");
    }

    #[test]
    fn accented_letters_are_transliterated() {
        assert_eq!(slugify("Café Noir"), "cafe-noir");
        assert_eq!(slugify("Über Corp"), "uber-corp");
        assert_eq!(slugify("Société Générale"), "societe-generale");
    }

    #[test]
    fn punctuation_only_codes_are_refused() {
        assert_eq!(slugify("!!"), "");
        assert!(slug_code("!!").is_err());
        assert!(slug_code("  -- ").is_err());
        assert_eq!(slug_code("Über Corp").unwrap(), "uber-corp");
    }
}
