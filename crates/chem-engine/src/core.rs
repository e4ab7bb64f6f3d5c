use log::debug;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule};
use std::ffi::CString;
use std::sync::OnceLock;

use crate::{DepictOptions, EmbedOptions};

static RDKIT_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

pub fn init_python() -> PyResult<()> {
    if RDKIT_MODULE.get().is_some() {
        return Ok(());
    }
    Python::attach(|py| {
        let code = CString::new(include_str!("../python/rdkit_wrapper.py"))?;
        let module = PyModule::from_code(py, code.as_c_str(), c_str!("rdkit_wrapper.py"), c_str!("rdkit_wrapper"))?;
        // Guardamos el módulo en el OnceLock como Py<PyModule>
        RDKIT_MODULE.set(module.unbind()).ok();
        debug!("rdkit_wrapper cargado");
        Ok(())
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    RDKIT_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
                                                             PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "init_python() debe llamarse antes de usar RDKit"
        )
                                                         })
}

/// Handle de una molécula RDKit (`rdkit.Chem.Mol`).
///
/// No implementa `Clone`: RDKit muta la molécula in-place (AddHs devuelve
/// copia, pero EmbedMolecule/UFF no), así que el handle viaja por valor.
#[derive(Debug)]
pub struct RdkitMol {
    inner: Py<PyAny>,
}

fn wrap_mol(out: Bound<'_, PyAny>) -> Option<RdkitMol> {
    if out.is_none() {
        None
    } else {
        Some(RdkitMol { inner: out.unbind() })
    }
}

fn none_err(op: &str) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{op} devolvió None"))
}

pub fn parse_smiles(smiles: &str) -> PyResult<Option<RdkitMol>> {
    Python::attach(|py| {
        let rdkit = get_module(py)?;
        let out = rdkit.bind(py).getattr("parse_smiles")?.call1((smiles,))?;
        Ok(wrap_mol(out))
    })
}

pub fn parse_inchi(inchi: &str) -> PyResult<Option<RdkitMol>> {
    Python::attach(|py| {
        let rdkit = get_module(py)?;
        let out = rdkit.bind(py).getattr("parse_inchi")?.call1((inchi,))?;
        Ok(wrap_mol(out))
    })
}

pub fn add_hs(mol: RdkitMol) -> PyResult<RdkitMol> {
    Python::attach(|py| {
        let rdkit = get_module(py)?;
        let out = rdkit.bind(py).getattr("add_hs")?.call1((mol.inner.bind(py),))?;
        wrap_mol(out).ok_or_else(|| none_err("add_hs"))
    })
}

pub fn embed_and_minimize(mol: RdkitMol, options: &EmbedOptions) -> PyResult<RdkitMol> {
    // -1 deja el seed en manos de RDKit
    let seed: i64 = options.random_seed.map(i64::from).unwrap_or(-1);
    Python::attach(|py| {
        let rdkit = get_module(py)?;
        let out = rdkit.bind(py)
                       .getattr("embed_and_minimize")?
                       .call1((mol.inner.bind(py), options.max_iters, seed))?;
        wrap_mol(out).ok_or_else(|| none_err("embed_and_minimize"))
    })
}

fn describe<'py>(py: Python<'py>, op: &str, mol: &RdkitMol) -> PyResult<Bound<'py, PyAny>> {
    let rdkit = get_module(py)?.into_bound(py);
    rdkit.getattr(op)?.call1((mol.inner.bind(py),))
}

pub fn to_smiles(mol: &RdkitMol) -> PyResult<String> {
    Python::attach(|py| describe(py, "to_smiles", mol)?.extract())
}

pub fn mol_formula(mol: &RdkitMol) -> PyResult<String> {
    Python::attach(|py| describe(py, "mol_formula", mol)?.extract())
}

pub fn exact_mass(mol: &RdkitMol) -> PyResult<f64> {
    Python::attach(|py| describe(py, "exact_mass", mol)?.extract())
}

pub fn mol_block(mol: &RdkitMol) -> PyResult<String> {
    Python::attach(|py| describe(py, "mol_block", mol)?.extract())
}

pub fn depict_png(mol: &RdkitMol, options: &DepictOptions) -> PyResult<Vec<u8>> {
    Python::attach(|py| {
        let rdkit = get_module(py)?;
        let out = rdkit.bind(py)
                       .getattr("depict_png")?
                       .call1((mol.inner.bind(py), options.width, options.height, options.kekulize))?;
        let bytes = out.downcast::<PyBytes>()?;
        Ok(bytes.as_bytes().to_vec())
    })
}
