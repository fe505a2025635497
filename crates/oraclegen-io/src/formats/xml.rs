//! UCCA standard XML
//!
//! Layer `0` holds the terminals (`Word` / `Punctuation`), every other layer
//! holds units. Edges carry their tag in `type`; `remote="True"` on an
//! edge's attributes marks a remote edge and `implicit="True"` on a unit's
//! attributes marks an implicit unit. An optional `<extra>` element carries
//! passage-level entries such as `format`.

use oraclegen_core::{Edge, Error, Node, Passage, Result, Terminal};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

const TERMINAL_LAYER: &str = "0";

#[derive(Debug, Deserialize)]
#[serde(rename = "root")]
struct XmlPassage {
    #[serde(rename = "@passageID")]
    id: String,
    #[serde(rename = "layer", default)]
    layers: Vec<XmlLayer>,
    #[serde(default)]
    extra: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct XmlLayer {
    #[serde(rename = "@layerID")]
    id: String,
    #[serde(rename = "node", default)]
    nodes: Vec<XmlNode>,
}

#[derive(Debug, Deserialize)]
struct XmlNode {
    #[serde(rename = "@ID")]
    id: String,
    #[serde(rename = "@type", default)]
    kind: String,
    #[serde(default)]
    attributes: XmlAttributes,
    #[serde(rename = "edge", default)]
    edges: Vec<XmlEdge>,
}

#[derive(Debug, Deserialize)]
struct XmlEdge {
    #[serde(rename = "@toID")]
    to: String,
    #[serde(rename = "@type")]
    tag: String,
    #[serde(default)]
    attributes: XmlAttributes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlAttributes {
    #[serde(rename = "@text")]
    text: Option<String>,
    #[serde(rename = "@implicit")]
    implicit: Option<String>,
    #[serde(rename = "@remote")]
    remote: Option<String>,
    #[serde(rename = "@label")]
    label: Option<String>,
    #[serde(rename = "@wiki")]
    wiki: Option<String>,
}

fn truthy(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

pub fn from_xml(path: &Path, raw: &str) -> Result<Passage> {
    let source = path.display().to_string();
    let doc: XmlPassage = quick_xml::de::from_str(raw).map_err(|e| Error::parse(&source, e.to_string()))?;

    let mut passage = Passage::new(doc.id, String::new());
    if let Some(extra) = doc.extra {
        passage.extra = extra
            .into_iter()
            .map(|(k, v)| (k.trim_start_matches('@').to_string(), v))
            .collect();
    }

    for layer in doc.layers {
        for node in layer.nodes {
            if layer.id == TERMINAL_LAYER {
                let text = node
                    .attributes
                    .text
                    .ok_or_else(|| Error::parse(&source, format!("terminal {} has no text", node.id)))?;
                passage.terminals.push(Terminal {
                    punct: node.kind == "Punctuation",
                    ..Terminal::new(node.id, text)
                });
                continue;
            }
            let mut unit = Node::new(node.id);
            unit.implicit = truthy(&node.attributes.implicit);
            unit.label = node.attributes.label;
            if let Some(wiki) = node.attributes.wiki {
                unit.attrs.insert(super::WIKI_ATTR.into(), wiki);
            }
            unit.edges = node
                .edges
                .into_iter()
                .map(|e| Edge {
                    remote: truthy(&e.attributes.remote),
                    ..Edge::new(e.tag, e.to)
                })
                .collect();
            passage.nodes.push(unit);
        }
    }

    passage.root = find_root(&passage).ok_or_else(|| Error::parse(&source, "passage has no units"))?;
    Ok(passage)
}

/// First unit that is not the primary child of another unit.
fn find_root(passage: &Passage) -> Option<String> {
    let children: HashSet<&str> = passage
        .nodes
        .iter()
        .flat_map(|n| n.edges.iter().filter(|e| !e.remote).map(|e| e.child.as_str()))
        .collect();
    passage
        .nodes
        .iter()
        .find(|n| !children.contains(n.id.as_str()))
        .map(|n| n.id.clone())
}
