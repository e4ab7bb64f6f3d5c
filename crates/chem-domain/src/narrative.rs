//! Compositor narrativo: bullets didácticos, guion de locución y subtítulos.
//!
//! Los bullets por nombre son un escaneo literal de subcadenas, en el orden
//! fijo de `NAME_KEYWORDS` y sin contexto químico: `"eth"` también aparece
//! dentro de `"methyl"`. Los falsos positivos son conocidos y se conservan.
use std::time::Duration;

use crate::facts::{format_unsaturation, FactSet};

/// (subcadena, frase) en orden de escaneo.
pub const NAME_KEYWORDS: [(&str, &str); 14] = [("meth", "Parent chain includes: meth- (1 carbon)."),
                                               ("eth", "Parent chain includes: eth- (2 carbons)."),
                                               ("prop", "Parent chain includes: prop- (3 carbons)."),
                                               ("but", "Parent chain includes: but- (4 carbons)."),
                                               ("pent", "Parent chain includes: pent- (5 carbons)."),
                                               ("hex", "Parent chain includes: hex- (6 carbons)."),
                                               ("hept", "Parent chain includes: hept- (7 carbons)."),
                                               ("oct", "Parent chain includes: oct- (8 carbons)."),
                                               ("non", "Parent chain includes: non- (9 carbons)."),
                                               ("dec", "Parent chain includes: dec- (10 carbons)."),
                                               ("en", "Contains a C=C double bond (-en-)."),
                                               ("yn", "Contains a C≡C triple bond (-yn-)."),
                                               ("methyl", "Has a methyl (-CH₃) substituent."),
                                               ("bromo", "Has a bromine substituent.")];

pub const FORMULA_ONLY_BULLETS: [&str; 3] = ["A single molecular formula can represent many isomers.",
                                             "Use degree of unsaturation (DU) to infer rings/double/triple bonds.",
                                             "Provide IUPAC name or SMILES to render a unique 3D structure."];

pub const NAMING_CHECKLIST: &str =
    "Naming checklist: longest chain, lowest locants for multiple bonds, then substituents alphabetically.";

/// Ventana fija por línea de subtítulo.
pub const CAPTION_WINDOW: Duration = Duration::from_secs(3);

pub fn bullets_from_name(name: &str) -> Vec<String> {
    NAME_KEYWORDS.iter()
                 .filter(|(keyword, _)| name.contains(keyword))
                 .map(|(_, sentence)| sentence.to_string())
                 .collect()
}

pub fn unsaturation_bullet(du: f64) -> String {
    format!("Double-bond equivalents (DU): {}", format_unsaturation(du))
}

/// Bullets del modo estructura: los del nombre (si hay) y el DU siempre al final.
pub fn teaching_bullets(name: Option<&str>, du: f64) -> Vec<String> {
    let mut bullets = name.map(bullets_from_name).unwrap_or_default();
    bullets.push(unsaturation_bullet(du));
    bullets
}

/// Las cuatro líneas fijas de la locución.
pub fn narration_lines(title: &str, facts: &FactSet) -> Vec<String> {
    vec![format!("Title: {title}"),
         format!("Formula: {} | Exact mass {} u | SMILES: {}",
                 facts.formula,
                 facts.mass_display(),
                 facts.smiles_display()),
         format!("Unsaturation (rings + double + 2*triple): DU = {}",
                 facts.unsaturation_display()),
         NAMING_CHECKLIST.to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionBlock {
    pub index: usize,
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

/// Una ventana por línea, contiguas desde 0 y sin solapamiento.
pub fn caption_timeline(lines: &[String], window: Duration) -> Vec<CaptionBlock> {
    let mut start = Duration::ZERO;
    lines.iter()
         .enumerate()
         .map(|(i, line)| {
             let end = start + window;
             let block = CaptionBlock { index: i + 1,
                                        start,
                                        end,
                                        text: line.clone() };
             start = end;
             block
         })
         .collect()
}

/// `HH:MM:SS,mmm`
pub fn srt_timestamp(at: Duration) -> String {
    let total_ms = at.as_millis();
    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;
    format!("{:02}:{:02}:{:02},{:03}", total_s / 3600, (total_s / 60) % 60, total_s % 60, ms)
}

/// Serializa a SubRip: bloques separados por una línea en blanco.
pub fn to_srt(blocks: &[CaptionBlock]) -> String {
    blocks.iter()
          .map(|b| format!("{}\n{} --> {}\n{}\n", b.index, srt_timestamp(b.start), srt_timestamp(b.end), b.text))
          .collect::<Vec<_>>()
          .join("\n")
}

/// Resultado del compositor para el modo estructura.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    pub bullets: Vec<String>,
    pub voiceover: String,
    pub captions: String,
}

impl Narrative {
    pub fn compose(title: &str, facts: &FactSet, name: Option<&str>) -> Self {
        let lines = narration_lines(title, facts);
        Self { bullets: teaching_bullets(name, facts.unsaturation),
               voiceover: lines.join("\n"),
               captions: to_srt(&caption_timeline(&lines, CAPTION_WINDOW)) }
    }
}
