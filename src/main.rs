use std::path::PathBuf;

use anyhow::{Context, Result};
use chem_adapters::steps::{CAPTIONS_FILE, DESCRIPTION_FILE, PAGE_FILE, VOICEOVER_FILE};
use chem_adapters::CommandTranslator;
use chem_autotutor::{Plan, Tutorial, TutorialReport, CONFIG};
use chem_domain::MoleculeInput;
use chemengine::ChemEngine;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

/// Generate a mini tutorial (3D viewer page, 2D structure, narration,
/// captions and description) for a molecule.
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["name", "smiles", "inchi", "formula"])))]
struct Args {
    /// IUPAC name, translated to SMILES with OPSIN
    #[arg(long)]
    name: Option<String>,
    /// SMILES string
    #[arg(long)]
    smiles: Option<String>,
    /// InChI string
    #[arg(long)]
    inchi: Option<String>,
    /// Molecular formula (no unique 3D structure)
    #[arg(long)]
    formula: Option<String>,
    /// Subtitle for the tutorial page
    #[arg(long)]
    tutorial: Option<String>,
    /// Base output directory
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .with_target(false)
                             .init();

    let args = Args::parse();
    let input = MoleculeInput::from_options(args.name, args.smiles, args.inchi, args.formula)?;
    let tutorial = Tutorial::from_config(&CONFIG)?;

    match Plan::for_input(&input, args.tutorial.as_deref(), &args.out) {
        Plan::Formula(request) => {
            let report = tutorial.run_formula(request)?;
            println!("ℹ️ Generated formula-only explainer at {}", report.out_dir.join(PAGE_FILE).display());
        }
        Plan::Structure(request) => {
            let engine = ChemEngine::init().context("RDKit is required for structure input")?;
            let translator = CommandTranslator::opsin(&CONFIG.translator.java, &CONFIG.translator.opsin_jar);
            let report = tutorial.run_structure(&engine, translator, request)
                                 .with_context(|| format!("could not build tutorial for `{}`", input.title()))?;
            print_summary(&report);
        }
    }
    Ok(())
}

fn print_summary(report: &TutorialReport) {
    let dir = &report.out_dir;
    println!("✅ Done.");
    println!("Open {} (interactive 3D). See {} and {}.",
             dir.join(PAGE_FILE).display(),
             VOICEOVER_FILE,
             CAPTIONS_FILE);
    println!("YouTube description ready at {}.", dir.join(DESCRIPTION_FILE).display());
    tracing::debug!(files = ?report.file_names(), "written");
}
