//! Conteo de elementos a partir de una fórmula compacta (`C8H12Br`).
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static ELEMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z][a-z]?)([0-9]*)").unwrap());

/// Halógenos que cuentan como equivalentes de hidrógeno.
pub const HALOGENS: [&str; 4] = ["F", "Cl", "Br", "I"];

/// Símbolo de elemento -> cantidad. Un símbolo ausente vale 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementCounts {
    counts: BTreeMap<String, u64>,
}

impl ElementCounts {
    /// Parsea `(Símbolo)(Dígitos opcionales)`; sin dígitos la cantidad es 1.
    ///
    /// Lo que no encaja con el patrón (cargas, paréntesis, minúsculas
    /// sueltas) se ignora. Si un símbolo aparece dos veces, gana la última
    /// aparición.
    pub fn parse(formula: &str) -> Self {
        let mut counts = BTreeMap::new();
        for caps in ELEMENT_RE.captures_iter(formula) {
            let symbol = &caps[1];
            let digits = &caps[2];
            let count = if digits.is_empty() {
                1
            } else {
                match digits.parse::<u64>() {
                    Ok(n) => n,
                    Err(e) => {
                        warn!("cantidad fuera de rango para {symbol} en {formula:?}: {e}");
                        continue;
                    }
                }
            };
            counts.insert(symbol.to_string(), count);
        }
        Self { counts }
    }

    pub fn get(&self, symbol: &str) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Suma de F, Cl, Br e I. Satura en `u64::MAX`.
    pub fn halogens(&self) -> u64 {
        HALOGENS.iter().fold(0u64, |acc, x| acc.saturating_add(self.get(x)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Grado de insaturación de esta composición.
    pub fn unsaturation(&self) -> f64 {
        crate::unsaturation::degree_of_unsaturation(self.get("C"), self.get("H"), self.get("N"), self.halogens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_implicit_and_explicit_counts() {
        let counts = ElementCounts::parse("C8H12Br");
        assert_eq!(counts.get("C"), 8);
        assert_eq!(counts.get("H"), 12);
        assert_eq!(counts.get("Br"), 1);
        for missing in ["N", "F", "Cl", "I", "O"] {
            assert_eq!(counts.get(missing), 0, "{missing}");
        }
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.halogens(), 1);
    }

    #[test]
    fn two_letter_symbols_are_not_split() {
        let counts = ElementCounts::parse("CHCl3");
        assert_eq!(counts.get("C"), 1);
        assert_eq!(counts.get("H"), 1);
        assert_eq!(counts.get("Cl"), 3);
        assert_eq!(counts.halogens(), 3);
    }

    #[test]
    fn charges_and_junk_are_ignored() {
        let counts = ElementCounts::parse("C2H3O2-");
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![("C", 2), ("H", 3), ("O", 2)]);
        assert!(ElementCounts::parse("123-+").is_empty());
    }

    #[test]
    fn repeated_symbol_keeps_last_occurrence() {
        let counts = ElementCounts::parse("CH3CH2");
        assert_eq!(counts.get("C"), 1);
        assert_eq!(counts.get("H"), 2);
    }

    #[test]
    fn large_halogen_counts_do_not_overflow() {
        let counts = ElementCounts::parse("CF4000000000Cl4000000000");
        assert_eq!(counts.get("F"), 4_000_000_000);
        assert_eq!(counts.halogens(), 8_000_000_000);
        assert_eq!(counts.unsaturation(), -3_999_999_998.0);
        let huge = ElementCounts::parse("F18446744073709551615Cl18446744073709551615");
        assert_eq!(huge.halogens(), u64::MAX);
    }

    #[test]
    fn only_ascii_digits_are_counts() {
        let counts = ElementCounts::parse("C\u{663}H8");
        assert_eq!(counts.get("C"), 1);
        assert_eq!(counts.get("H"), 8);
        assert_eq!(counts.len(), 2);
    }
}
