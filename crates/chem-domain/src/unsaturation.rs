//! Grado de insaturación (índice de deficiencia de hidrógeno).
//!
//! `DU = 1 + C - (H + X - N) / 2`, con X = F + Cl + Br + I. Cuenta
//! anillos + dobles enlaces + 2 * triples enlaces. Sólo modela C, H, N y
//! halógenos: O, S y el resto no alteran el resultado.

/// Resultado real, sin truncar (p. ej. 2.5 para radicales).
pub fn degree_of_unsaturation(carbons: u64, hydrogens: u64, nitrogens: u64, halogens: u64) -> f64 {
    let h_equiv = hydrogens as f64 + halogens as f64 - nitrogens as f64;
    1.0 + carbons as f64 - h_equiv / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementCounts;

    // (fórmula, anillos + dobles + 2 * triples)
    const REFERENCE: &[(&str, f64)] = &[("C2H6O", 0.0),    // etanol
                                        ("C2H4", 1.0),     // eteno
                                        ("C2H2", 2.0),     // etino
                                        ("C6H6", 4.0),     // benceno: anillo + 3 C=C
                                        ("C6H12", 1.0),    // ciclohexano
                                        ("C5H5N", 4.0),    // piridina
                                        ("C2H3N", 2.0),    // acetonitrilo
                                        ("CH2Cl2", 0.0),   // diclorometano
                                        ("C6H5Br", 4.0),   // bromobenceno
                                        ("C8H11Br", 3.0)]; // 4-bromo-3-methylhept-1-en-6-yne

    #[test]
    fn matches_reference_molecules() {
        for (formula, expected) in REFERENCE {
            let du = ElementCounts::parse(formula).unsaturation();
            assert_eq!(du, *expected, "{formula}");
        }
    }

    #[test]
    fn odd_hydrogen_count_gives_half_values() {
        assert_eq!(ElementCounts::parse("C8H12Br").unsaturation(), 2.5);
    }

    #[test]
    fn oxygen_and_sulfur_do_not_count() {
        assert_eq!(degree_of_unsaturation(2, 6, 0, 0), ElementCounts::parse("C2H6OS3").unsaturation());
    }
}
