//! Outline tree model handed to the UI layer.
//!
//! Functions are collapsible nodes carrying the line to jump to; their
//! children are the parameters followed by the variables.

use advpl_extractors::{FunctionSymbol, SymbolKind};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub label: String,
    pub kind: SymbolKind,
    pub icon: &'static str,
    /// Navigation target; only function nodes have one
    #[serde(rename = "lineNumber", skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    pub collapsible: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

pub fn icon_for(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::Function => "symbol-function",
        SymbolKind::Parameter => "symbol-parameter",
        SymbolKind::Variable => "symbol-variable",
    }
}

fn leaf(label: String, kind: SymbolKind) -> OutlineNode {
    OutlineNode {
        label,
        kind,
        icon: icon_for(kind),
        line_number: None,
        collapsible: false,
        children: Vec::new(),
    }
}

pub fn build_outline(functions: &[FunctionSymbol]) -> Vec<OutlineNode> {
    functions
        .iter()
        .map(|function| {
            let children = function
                .parameters
                .iter()
                .map(|p| leaf(p.label(), SymbolKind::Parameter))
                .chain(
                    function
                        .variables
                        .iter()
                        .map(|v| leaf(v.label(), SymbolKind::Variable)),
                )
                .collect();

            OutlineNode {
                label: function.name.clone(),
                kind: SymbolKind::Function,
                icon: icon_for(SymbolKind::Function),
                line_number: Some(function.line_number),
                collapsible: true,
                children,
            }
        })
        .collect()
}

/// Indented plain-text rendering, one node per line
pub fn render_text(nodes: &[OutlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, 0);
    }
    out
}

fn write_node(out: &mut String, node: &OutlineNode, depth: usize) {
    let indent = "  ".repeat(depth);
    // Writing into a String cannot fail
    let _ = match node.line_number {
        Some(line) => writeln!(out, "{}{} (line {})", indent, node.label, line),
        None => writeln!(out, "{}{}", indent, node.label),
    };
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}

pub fn render_json(nodes: &[OutlineNode]) -> Result<String> {
    serde_json::to_string_pretty(nodes).context("Failed to serialize outline")
}
