//! Constantes del motor core.
//!
//! `ENGINE_VERSION` forma parte del input de hashing de cada step: cambiarla
//! invalida todos los fingerprints aunque la definición y los datos no
//! cambien. Mantener estable mientras no haya cambios incompatibles.

/// Versión lógica del motor.
pub const ENGINE_VERSION: &str = "F2.1";
