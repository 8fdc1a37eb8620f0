//! Plain-text renderings of scaffold results.
//!
//! Everything here returns lines; [`crate::output::OutputManager`] decides
//! whether and how to colour and print them.

use std::collections::BTreeMap;

use console::{Alignment, measure_text_width, pad_str};
use structor_core::domain::{CreatedFile, RelativePath};

/// `1024`-based kilobytes with two decimals, as in `3.42`.
pub fn size_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

/// Two-column table of created files: `<project>/<relative>` and size in KB.
pub fn created_files_table(project: &str, files: &[CreatedFile]) -> Vec<String> {
    const FILE: &str = "File";
    const SIZE: &str = "Size (KB)";

    let rows: Vec<(String, String)> = files
        .iter()
        .map(|f| (f.display_path(project), size_kb(f.size)))
        .collect();

    let file_width = rows
        .iter()
        .map(|(path, _)| measure_text_width(path))
        .chain([FILE.len()])
        .max()
        .unwrap_or(FILE.len());
    let size_width = rows
        .iter()
        .map(|(_, size)| size.len())
        .chain([SIZE.len()])
        .max()
        .unwrap_or(SIZE.len());

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{right}",
            "─".repeat(file_width + 2),
            "─".repeat(size_width + 2)
        )
    };
    let row = |file: &str, size: &str| {
        format!(
            "│ {} │ {} │",
            pad_str(file, file_width, Alignment::Left, None),
            pad_str(size, size_width, Alignment::Right, None)
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule("┌", "┬", "┐"));
    lines.push(row(FILE, SIZE));
    lines.push(rule("├", "┼", "┤"));
    lines.extend(rows.iter().map(|(file, size)| row(file, size)));
    lines.push(rule("└", "┴", "┘"));
    lines
}

#[derive(Debug)]
struct Node {
    name: String,
    is_dir: bool,
    children: BTreeMap<String, usize>,
}

/// Tree view of the project built from relative file paths.
///
/// Directories sort before files, each group by name. Traversal uses an
/// explicit stack, so depth is bounded only by memory.
pub fn project_tree<'a>(
    project: &str,
    paths: impl IntoIterator<Item = &'a RelativePath>,
) -> Vec<String> {
    let mut nodes = vec![Node {
        name: project.to_string(),
        is_dir: true,
        children: BTreeMap::new(),
    }];

    for path in paths {
        let components: Vec<String> = path
            .as_path()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .filter(|c| c != ".")
            .collect();
        let last = components.len().saturating_sub(1);

        let mut current = 0;
        for (depth, name) in components.into_iter().enumerate() {
            current = match nodes[current].children.get(&name) {
                Some(&idx) => idx,
                None => {
                    let idx = nodes.len();
                    nodes.push(Node {
                        name: name.clone(),
                        is_dir: depth < last,
                        children: BTreeMap::new(),
                    });
                    nodes[current].children.insert(name, idx);
                    idx
                }
            };
        }
    }

    let mut lines = vec![format!("{project}/")];
    let mut stack: Vec<(usize, String, bool)> = Vec::new();
    push_children(&nodes, 0, "", &mut stack);

    while let Some((idx, prefix, last)) = stack.pop() {
        let node = &nodes[idx];
        let branch = if last { "└── " } else { "├── " };
        let suffix = if node.is_dir { "/" } else { "" };
        lines.push(format!("{prefix}{branch}{}{suffix}", node.name));

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        push_children(&nodes, idx, &child_prefix, &mut stack);
    }

    lines
}

/// Push `parent`'s children so the first one to print is popped first.
fn push_children(
    nodes: &[Node],
    parent: usize,
    prefix: &str,
    stack: &mut Vec<(usize, String, bool)>,
) {
    let mut children: Vec<usize> = nodes[parent].children.values().copied().collect();
    children.sort_by(|&a, &b| {
        nodes[b]
            .is_dir
            .cmp(&nodes[a].is_dir)
            .then_with(|| nodes[a].name.cmp(&nodes[b].name))
    });

    let count = children.len();
    for (i, child) in children.into_iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i + 1 == count));
    }
}

/// Capitalize the first character, as template menus show names.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Numbered menu lines: ` 1. Express`.
pub fn numbered_menu(names: &[String]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:2}. {}", i + 1, capitalize(name)))
        .collect()
}
