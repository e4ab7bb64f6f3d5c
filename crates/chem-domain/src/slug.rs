//! Nombre de carpeta seguro derivado del título.

pub const MAX_SLUG_LEN: usize = 96;
pub const FALLBACK_SLUG: &str = "molecule";

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Conserva `[A-Za-z0-9._-]`, colapsa cualquier otra racha en un `-`, recorta
/// guiones en los extremos y limita a `MAX_SLUG_LEN` caracteres.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_gap = false;
    for c in title.chars() {
        if is_kept(c) {
            slug.push(c);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }
    let trimmed = slug.trim_matches('-');
    // sólo quedan caracteres ASCII, el corte por bytes es seguro
    let cut = &trimmed[..trimmed.len().min(MAX_SLUG_LEN)];
    let cut = cut.trim_end_matches('-');
    if cut.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        cut.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_iupac_punctuation_that_is_safe() {
        assert_eq!(slugify("but-2-ene"), "but-2-ene");
        assert_eq!(slugify("4-bromo-3-methylhept-1-en-6-yne"), "4-bromo-3-methylhept-1-en-6-yne");
    }

    #[test]
    fn collapses_unsafe_runs() {
        assert_eq!(slugify("2,2-dimethyl propane"), "2-2-dimethyl-propane");
        assert_eq!(slugify("C1=CC=CC=C1"), "C1-CC-CC-C1");
        assert_eq!(slugify("(E)/(Z) ??"), "E-Z");
    }

    #[test]
    fn falls_back_when_nothing_survives() {
        assert_eq!(slugify("///"), FALLBACK_SLUG);
        assert_eq!(slugify("≡≡"), FALLBACK_SLUG);
    }

    #[test]
    fn bounded_length() {
        let long = "a".repeat(300);
        assert_eq!(slugify(&long).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn no_path_separators() {
        let s = slugify("../../etc/passwd");
        assert!(!s.contains('/'));
        assert_eq!(s, "..-..-etc-passwd");
    }
}
