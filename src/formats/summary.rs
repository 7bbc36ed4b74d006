//! Book SUMMARY.md chapter lists, parsed with tree-sitter-md.
//!
//! ```markdown
//! # Summary
//!
//! [Introduction](README.md)
//!
//! - [Background](background/background.md)
//!     - [Sumcheck](background/sumcheck.md)
//! - [Draft chapter]()
//! ```
//!
//! Links in top-level paragraphs are unnumbered affix chapters; list items are numbered chapters
//! whose nested lists become their children. Source paths are mapped to the pages the book
//! builds from them: `README.md` becomes `index.html`, any other `.md` becomes `.html`.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::nav::{NavigationNode, NavigationTree};
use tree_sitter::{Node, Parser};

/// Tree-sitter backed reader for SUMMARY.md files.
pub struct SummaryFormat;

impl SummaryFormat {
    /// Block grammar used to find paragraphs and (nested) lists.
    #[must_use]
    pub fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }
}

impl Format for SummaryFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &["md", "markdown"]
    }

    fn parse_tree(&self, source: &str) -> Result<NavigationTree> {
        let mut parser = Parser::new();
        parser.set_language(&self.language())?;
        let tree = parser.parse(source, None).ok_or_else(|| Error::Summary {
            line: 1,
            message: "parser produced no syntax tree".to_string(),
        })?;

        let mut chapters = Vec::new();
        collect_top_level(tree.root_node(), source, &mut chapters)?;
        Ok(NavigationTree::new(chapters))
    }
}

fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

fn collect_top_level(node: Node<'_>, source: &str, out: &mut Vec<NavigationNode>) -> Result<()> {
    for child in children(node) {
        match child.kind() {
            "paragraph" => {
                for (label, target) in parse_links(text(child, source)) {
                    out.push(NavigationNode::affix(label, output_path(&target)));
                }
            }
            "list" => out.extend(collect_list(child, source)?),
            "document" | "section" => collect_top_level(child, source, out)?,
            _ => {}
        }
    }
    Ok(())
}

fn collect_list(list: Node<'_>, source: &str) -> Result<Vec<NavigationNode>> {
    let mut nodes = Vec::new();
    for item in children(list).into_iter().filter(|n| n.kind() == "list_item") {
        let parts = children(item);
        let entry = parts
            .iter()
            .find(|n| n.kind() == "paragraph")
            .and_then(|p| parse_links(text(*p, source)).into_iter().next())
            .ok_or_else(|| Error::Summary {
                line: item.start_position().row + 1,
                message: format!("expected a chapter link, found {:?}", text(item, source).trim()),
            })?;

        let mut sub = Vec::new();
        for nested in parts.iter().filter(|n| n.kind() == "list") {
            sub.extend(collect_list(*nested, source)?);
        }

        let (label, target) = entry;
        nodes.push(NavigationNode::chapter(label, output_path(&target)).with_children(sub));
    }
    Ok(nodes)
}

/// Extracts `[label](target)` pairs from inline markdown, in order of appearance.
#[must_use]
pub fn parse_links(inline: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut rest = inline;

    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        let mut depth = 1;
        let Some(close) = after_open.char_indices().find_map(|(i, c)| {
            match c {
                '[' => depth += 1,
                ']' => depth -= 1,
                _ => {}
            }
            (depth == 0).then_some(i)
        }) else {
            break;
        };

        let label = &after_open[..close];
        let after_label = &after_open[close + 1..];
        match after_label
            .strip_prefix('(')
            .and_then(|t| t.find(')').map(|end| (&t[..end], &t[end + 1..])))
        {
            Some((target, remainder)) => {
                links.push((label.trim().to_string(), target.trim().to_string()));
                rest = remainder;
            }
            None => rest = after_label,
        }
    }
    links
}

/// Maps a chapter source path to the page built from it. Empty paths (drafts) stay empty.
#[must_use]
pub fn output_path(source_path: &str) -> String {
    let (path, fragment) = match source_path.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (source_path, None),
    };

    let page = match path.strip_suffix(".md") {
        Some(stem) if stem == "README" || stem.ends_with("/README") => {
            format!("{}index.html", &stem[..stem.len() - "README".len()])
        }
        Some(stem) => format!("{stem}.html"),
        None => path.to_string(),
    };

    match fragment {
        Some(fragment) => format!("{page}#{fragment}"),
        None => page,
    }
}
