//! Tests for the outline tree model.

use crate::config::OutlineConfig;
use crate::outline::{build_outline, icon_for, render_json, render_text};
use advpl_extractors::{SourceDocument, SymbolKind};

use super::SAMPLE_SOURCE;

fn sample_outline() -> Vec<crate::outline::OutlineNode> {
    let extractor = OutlineConfig::default().extractor();
    let functions = extractor.extract(&SourceDocument::new("mem://sample", SAMPLE_SOURCE));
    build_outline(&functions)
}

#[test]
fn test_function_nodes_carry_navigation_line() {
    let nodes = sample_outline();
    assert_eq!(nodes.len(), 2);

    assert_eq!(nodes[0].label, "MyReport");
    assert_eq!(nodes[0].line_number, Some(3));
    assert!(nodes[0].collapsible);
    assert_eq!(nodes[0].icon, "symbol-function");

    assert_eq!(nodes[1].label, "Sum");
    assert_eq!(nodes[1].line_number, Some(8));
}

#[test]
fn test_children_are_parameters_then_variables() {
    let nodes = sample_outline();
    let labels: Vec<&str> = nodes[0].children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "cTitle : character",
            "nCopies : numeric",
            "Local : oReport",
            "Private : lPrinted",
        ]
    );

    let kinds: Vec<SymbolKind> = nodes[0].children.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SymbolKind::Parameter,
            SymbolKind::Parameter,
            SymbolKind::Variable,
            SymbolKind::Variable,
        ]
    );
    assert!(nodes[0].children.iter().all(|c| c.line_number.is_none() && !c.collapsible));
}

#[test]
fn test_icons() {
    assert_eq!(icon_for(SymbolKind::Function), "symbol-function");
    assert_eq!(icon_for(SymbolKind::Parameter), "symbol-parameter");
    assert_eq!(icon_for(SymbolKind::Variable), "symbol-variable");
}

#[test]
fn test_render_text() {
    let text = render_text(&sample_outline());
    let expected = "\
MyReport (line 3)
  cTitle : character
  nCopies : numeric
  Local : oReport
  Private : lPrinted
Sum (line 8)
  nA : numeric
  nB : numeric
  Local : nResult
";
    assert_eq!(text, expected);
}

#[test]
fn test_render_json() {
    let json = render_json(&sample_outline()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[1]["label"], "Sum");
    assert_eq!(value[1]["lineNumber"], 8);
    assert_eq!(value[1]["kind"], "function");
    assert_eq!(value[1]["children"][2]["icon"], "symbol-variable");
    assert!(value[1]["children"][0].get("lineNumber").is_none());
}

#[test]
fn test_empty_tree_renders_nothing() {
    assert_eq!(render_text(&[]), "");
    assert_eq!(render_json(&[]).unwrap(), "[]");
}
