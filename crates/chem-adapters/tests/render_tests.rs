use chem_adapters::render::Bindings;
use chem_adapters::{Template, TemplateSet};

/// Extrae el texto entre `open` y `close`.
fn between<'a>(text: &'a str, open: &str, close: &str) -> &'a str {
    let start = text.find(open).unwrap() + open.len();
    let end = text[start..].find(close).unwrap() + start;
    &text[start..end]
}

fn special_bindings() -> Bindings {
    Bindings::from([("title", "A<B & \"C\"".to_string()),
                    ("subtitle", "x > y".to_string()),
                    ("tutorial_id", "".to_string()),
                    ("smiles", "C(=O)[O-].[Na+]&<tag>".to_string()),
                    ("formula", "C2H3O2<Na>&".to_string()),
                    ("mw", "82.0029".to_string()),
                    ("du", "1.0".to_string()),
                    ("sdf", "".to_string()),
                    ("bullets", "      <li>a</li>".to_string()),
                    ("bullets_md", "- a".to_string())])
}

#[test]
fn page_round_trips_special_characters() {
    let values = special_bindings();
    let page = TemplateSet::embedded().page.render(&values).unwrap();
    assert_eq!(between(&page, "<h1>", "</h1>"), values["title"]);
    assert_eq!(between(&page, "<td>Formula</td><td>", "</td>"), values["formula"]);
    assert_eq!(between(&page, "<code>", "</code>"), values["smiles"]);
}

#[test]
fn description_round_trips_special_characters() {
    let values = special_bindings();
    let text = TemplateSet::embedded().description.render(&values).unwrap();
    assert_eq!(between(&text, "# ", "\n"), values["title"]);
    assert_eq!(between(&text, "- Formula: ", "\n"), values["formula"]);
    assert_eq!(between(&text, "- SMILES: `", "`"), values["smiles"]);
}

#[test]
fn every_embedded_placeholder_is_bound() {
    let values = special_bindings();
    let set = TemplateSet::embedded();
    for template in [&set.page, &set.description, &set.formula_readme] {
        assert!(template.render(&values).is_ok(), "{}", template.name());
    }
}

#[test]
fn custom_template_renders_verbatim() {
    let t = Template::new("custom", "${title}|${smiles}");
    let out = t.render(&special_bindings()).unwrap();
    let (title, smiles) = out.split_once('|').unwrap();
    assert_eq!(title, "A<B & \"C\"");
    assert_eq!(smiles, "C(=O)[O-].[Na+]&<tag>");
}
