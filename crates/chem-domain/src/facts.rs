//! Hechos derivados de la estructura: fórmula, masa exacta y DU.
use chemengine::StructureToolkit;
use serde::{Deserialize, Serialize};

use crate::{DomainError, ElementCounts};

/// Marcador para valores que el modo sólo-fórmula no puede calcular.
pub const NOT_AVAILABLE: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facts {
    pub formula: String,
    /// Masa monoisotópica redondeada a 4 decimales.
    pub exact_mass: f64,
    pub unsaturation: f64,
}

impl Facts {
    /// Calcula los hechos de un grafo con hidrógenos explícitos.
    pub fn compute<T: StructureToolkit>(toolkit: &T, mol: &T::Mol) -> Result<Self, DomainError> {
        let formula = toolkit.formula(mol)?;
        let exact_mass = round_mass(toolkit.exact_mass(mol)?);
        let unsaturation = ElementCounts::parse(&formula).unsaturation();
        Ok(Self { formula,
                  exact_mass,
                  unsaturation })
    }
}

pub fn round_mass(mass: f64) -> f64 {
    (mass * 10_000.0).round() / 10_000.0
}

/// Formatea la masa como el literal decimal más corto (`46.0419`, `100.0`).
pub fn format_mass(mass: f64) -> String {
    if mass.fract() == 0.0 {
        format!("{mass:.1}")
    } else {
        format!("{mass}")
    }
}

/// DU con un decimal, tal como aparece en bullets y narración.
pub fn format_unsaturation(du: f64) -> String {
    format!("{du:.1}")
}

/// Conjunto de hechos que recibe el renderer.
///
/// En modo estructura todo está presente. En modo sólo-fórmula no hay grafo:
/// la fórmula es la entrada tal cual, el DU se deriva de su conteo de
/// elementos, y SMILES y masa quedan ausentes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSet {
    pub formula: String,
    pub exact_mass: Option<f64>,
    pub unsaturation: f64,
    pub smiles: Option<String>,
}

impl FactSet {
    pub fn from_structure(facts: &Facts, smiles: &str) -> Self {
        Self { formula: facts.formula.clone(),
               exact_mass: Some(facts.exact_mass),
               unsaturation: facts.unsaturation,
               smiles: Some(smiles.to_string()) }
    }

    pub fn formula_only(formula: &str) -> Self {
        let formula = formula.trim();
        Self { formula: formula.to_string(),
               exact_mass: None,
               unsaturation: ElementCounts::parse(formula).unsaturation(),
               smiles: None }
    }

    pub fn mass_display(&self) -> String {
        self.exact_mass
            .map(format_mass)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn smiles_display(&self) -> &str {
        self.smiles.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn unsaturation_display(&self) -> String {
        format_unsaturation(self.unsaturation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_is_rounded_to_four_digits() {
        assert_eq!(round_mass(46.041864814), 46.0419);
        assert_eq!(format_mass(46.0419), "46.0419");
        assert_eq!(format_mass(100.0), "100.0");
    }

    #[test]
    fn formula_only_set_leaves_structure_fields_absent() {
        let set = FactSet::formula_only("C8H12Br");
        assert_eq!(set.formula, "C8H12Br");
        assert_eq!(set.unsaturation, 2.5);
        assert_eq!(set.mass_display(), NOT_AVAILABLE);
        assert_eq!(set.smiles_display(), NOT_AVAILABLE);
        assert_eq!(set.unsaturation_display(), "2.5");
    }

    #[test]
    fn formula_only_set_handles_huge_halogen_counts() {
        let set = FactSet::formula_only("CF4000000000Cl4000000000");
        assert_eq!(set.unsaturation, -3_999_999_998.0);
        assert_eq!(set.unsaturation_display(), "-3999999998.0");
    }

    #[test]
    fn structure_set_displays_everything() {
        let facts = Facts { formula: "C2H6O".into(),
                            exact_mass: 46.0419,
                            unsaturation: 0.0 };
        let set = FactSet::from_structure(&facts, "CCO");
        assert_eq!(set.mass_display(), "46.0419");
        assert_eq!(set.smiles_display(), "CCO");
        assert_eq!(set.unsaturation_display(), "0.0");
    }
}
