//! Plantillas de texto con placeholders `${ident}`.
//!
//! La sustitución es literal: los valores se insertan sin escapar. Toda
//! decisión sobre qué mostrar se toma antes de llamar al renderer.
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::RenderError;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex"));

pub const PAGE_TEMPLATE: &str = "page.html.tpl";
pub const DESCRIPTION_TEMPLATE: &str = "youtube_desc.md.tpl";
pub const FORMULA_README_TEMPLATE: &str = "formula_readme.txt.tpl";

/// Valores a sustituir, por nombre de placeholder.
pub type Bindings = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(),
               source: source.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholders usados, en orden de aparición y sin repetir.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for caps in PLACEHOLDER_RE.captures_iter(&self.source) {
            if let Some(m) = caps.get(1) {
                if !seen.contains(&m.as_str()) {
                    seen.push(m.as_str());
                }
            }
        }
        seen
    }

    pub fn render(&self, bindings: &Bindings) -> Result<String, RenderError> {
        if let Some(missing) = self.placeholders().into_iter().find(|p| !bindings.contains_key(*p)) {
            return Err(RenderError::MissingBinding { template: self.name.clone(),
                                                     placeholder: missing.to_string() });
        }
        // replace_all con closure: el valor no se interpreta como `$n`
        let rendered = PLACEHOLDER_RE.replace_all(&self.source, |caps: &Captures<'_>| {
                                         bindings.get(&caps[1]).cloned().unwrap_or_default()
                                     });
        Ok(rendered.into_owned())
    }
}

/// Las tres plantillas del tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub page: Template,
    pub description: Template,
    pub formula_readme: Template,
}

impl TemplateSet {
    /// Plantillas embebidas en el binario.
    pub fn embedded() -> Self {
        Self { page: Template::new(PAGE_TEMPLATE, include_str!("../templates/page.html.tpl")),
               description: Template::new(DESCRIPTION_TEMPLATE, include_str!("../templates/youtube_desc.md.tpl")),
               formula_readme: Template::new(FORMULA_README_TEMPLATE,
                                             include_str!("../templates/formula_readme.txt.tpl")) }
    }

    /// Carga desde `dir`; un archivo ausente conserva la versión embebida.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        let mut set = Self::embedded();
        for template in [&mut set.page, &mut set.description, &mut set.formula_readme] {
            let path = dir.join(template.name());
            if path.is_file() {
                let source = fs::read_to_string(&path).map_err(|source| RenderError::TemplateIo { path: path.clone(),
                                                                                                  source })?;
                log::debug!("plantilla {} desde {}", template.name(), path.display());
                *template = Template::new(template.name().to_string(), source);
            }
        }
        Ok(set)
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(pairs: &[(&'static str, &str)]) -> Bindings {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn substitutes_every_occurrence() {
        let t = Template::new("t", "${a}-${b}-${a}");
        assert_eq!(t.render(&bind(&[("a", "1"), ("b", "2")])).unwrap(), "1-2-1");
        assert_eq!(t.placeholders(), vec!["a", "b"]);
    }

    #[test]
    fn values_are_not_escaped_nor_expanded() {
        let t = Template::new("t", "<p>${v}</p>");
        let out = t.render(&bind(&[("v", "a < b & $1 ${x}")])).unwrap();
        assert_eq!(out, "<p>a < b & $1 ${x}</p>");
    }

    #[test]
    fn missing_binding_is_an_error() {
        let t = Template::new("page", "${title} ${smiles}");
        let err = t.render(&bind(&[("title", "x")])).unwrap_err();
        assert!(matches!(err, RenderError::MissingBinding { ref placeholder, .. } if placeholder == "smiles"));
        assert_eq!(err.to_string(), "la plantilla `page` usa `${smiles}` sin valor asignado");
    }

    #[test]
    fn non_placeholder_dollars_are_kept() {
        let t = Template::new("t", "$ ${1x} $title ${ok}");
        assert_eq!(t.render(&bind(&[("ok", "y")])).unwrap(), "$ ${1x} $title y");
    }

    #[test]
    fn embedded_templates_are_well_formed() {
        let set = TemplateSet::embedded();
        assert!(set.page.placeholders().contains(&"sdf"));
        assert!(set.description.placeholders().contains(&"smiles"));
        assert!(set.formula_readme.placeholders().contains(&"formula"));
    }

    #[test]
    fn directory_override_is_partial() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DESCRIPTION_TEMPLATE), "custom ${title}").unwrap();
        let set = TemplateSet::from_dir(dir.path()).unwrap();
        assert_eq!(set.description.render(&bind(&[("title", "x")])).unwrap(), "custom x");
        assert_eq!(set.page, TemplateSet::embedded().page);
    }
}
