//! Read-only helpers over the identifier-keyed collections of a document
//!
//! Validators look up every externally supplied identifier through
//! [`resolve_or_report_missing`], so a dangling reference always turns into a
//! diagnostic. Tools that add entities to a document use [`generate_id`] so
//! that new identifiers never collide with existing ones.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{GltfEntity, Node};
use crate::validator::{DiagnosticKind, ValidatorContext, ValidatorResult};

/// Look up `id` in `collection`, recording a missing-reference error on a miss
///
/// # Example
///
/// ```
/// use gltf_validator::graph::resolve_or_report_missing;
/// use gltf_validator::{Document, ValidatorContext, ValidatorResult};
///
/// let document = Document::new();
/// let mut result = ValidatorResult::new();
/// let program = resolve_or_report_missing(
///     &document.programs,
///     "program0",
///     &ValidatorContext::root(),
///     &mut result,
/// );
/// assert!(program.is_none());
/// assert!(result.has_errors());
/// ```
pub fn resolve_or_report_missing<'a, T: GltfEntity>(
    collection: &'a BTreeMap<String, T>,
    id: &str,
    context: &ValidatorContext,
    result: &mut ValidatorResult,
) -> Option<&'a T> {
    resolve_named_or_report_missing(collection, id, T::KIND_NAME, context, result)
}

/// Like [`resolve_or_report_missing`], for maps whose values do not carry a
/// kind name of their own
pub fn resolve_named_or_report_missing<'a, T>(
    collection: &'a BTreeMap<String, T>,
    id: &str,
    kind_name: &str,
    context: &ValidatorContext,
    result: &mut ValidatorResult,
) -> Option<&'a T> {
    let entry = collection.get(id);
    if entry.is_none() {
        result.add_error(
            DiagnosticKind::MissingReference,
            format!(
                "Unresolved identifier '{}' of kind {} (known IDs: {})",
                id,
                kind_name,
                known_ids(collection)
            ),
            context,
        );
    }
    entry
}

/// Check that `id` exists in `collection`
///
/// Returns a result holding one missing-reference error when it does not.
pub fn validate_map_entry<T: GltfEntity>(
    collection: &BTreeMap<String, T>,
    id: &str,
    context: &ValidatorContext,
) -> ValidatorResult {
    let mut result = ValidatorResult::new();
    resolve_or_report_missing(collection, id, context, &mut result);
    result
}

/// Number of entries in an optional mapping; an absent mapping is empty
pub fn get_size<T>(collection: Option<&BTreeMap<String, T>>) -> usize {
    collection.map_or(0, BTreeMap::len)
}

/// Generate an identifier that is not yet used in `collection`
///
/// Returns `preferred` when it is free, otherwise `preferred` followed by the
/// smallest unused non-negative integer.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use gltf_validator::graph::generate_id;
///
/// let mut shaders = BTreeMap::new();
/// assert_eq!(generate_id("vertexShader", &shaders), "vertexShader");
/// shaders.insert("vertexShader".to_string(), ());
/// shaders.insert("vertexShader0".to_string(), ());
/// assert_eq!(generate_id("vertexShader", &shaders), "vertexShader1");
/// ```
pub fn generate_id<T>(preferred: &str, collection: &BTreeMap<String, T>) -> String {
    if !collection.contains_key(preferred) {
        return preferred.to_string();
    }
    let mut suffix: u64 = 0;
    loop {
        let candidate = format!("{}{}", preferred, suffix);
        if !collection.contains_key(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Nodes that may lie on a cycle of child links
///
/// Repeatedly drops nodes without remaining parents, then nodes without
/// remaining children. Every node of a cycle survives; in an acyclic hierarchy
/// nothing does. Children that name absent nodes are ignored.
pub fn cycle_candidates(nodes: &BTreeMap<String, Node>) -> HashSet<&str> {
    let edges: Vec<(&str, &str)> = nodes
        .iter()
        .flat_map(move |(parent, node)| {
            node.child_ids()
                .iter()
                .filter(move |child| nodes.contains_key(child.as_str()))
                .map(move |child| (parent.as_str(), child.as_str()))
        })
        .collect();

    let mut remaining: HashSet<&str> = nodes.keys().map(String::as_str).collect();
    peel(&mut remaining, edges.iter().map(|&(parent, child)| (child, parent)));
    peel(&mut remaining, edges.iter().copied());
    remaining
}

/// Remove every node whose outgoing edges all lead to removed nodes
fn peel<'a>(remaining: &mut HashSet<&'a str>, edges: impl Iterator<Item = (&'a str, &'a str)>) {
    let mut out_degree: HashMap<&str, usize> = HashMap::new();
    let mut sources: HashMap<&str, Vec<&str>> = HashMap::new();
    for (from, to) in edges {
        if remaining.contains(from) && remaining.contains(to) {
            *out_degree.entry(from).or_default() += 1;
            sources.entry(to).or_default().push(from);
        }
    }

    let mut queue: Vec<&str> = remaining
        .iter()
        .copied()
        .filter(|id| !out_degree.contains_key(id))
        .collect();
    while let Some(id) = queue.pop() {
        remaining.remove(id);
        for &from in sources.get(id).into_iter().flatten() {
            if let Some(degree) = out_degree.get_mut(from) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push(from);
                }
            }
        }
    }
}

/// Comma-separated list of the identifiers in a collection, for messages
fn known_ids<T>(collection: &BTreeMap<String, T>) -> String {
    const MAX_LISTED: usize = 8;
    if collection.is_empty() {
        return "none".to_string();
    }
    let mut listed: Vec<&str> = collection
        .keys()
        .take(MAX_LISTED)
        .map(String::as_str)
        .collect();
    if collection.len() > MAX_LISTED {
        listed.push("...");
    }
    listed.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Program, Shader};

    #[test]
    fn test_resolve_hit_records_nothing() {
        let mut shaders = BTreeMap::new();
        shaders.insert("vs".to_string(), Shader::vertex("vs.glsl"));
        let mut result = ValidatorResult::new();

        let shader =
            resolve_or_report_missing(&shaders, "vs", &ValidatorContext::root(), &mut result);
        assert_eq!(shader.and_then(|s| s.uri.as_deref()), Some("vs.glsl"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_resolve_miss_names_kind_and_known_ids() {
        let mut programs = BTreeMap::new();
        programs.insert("p0".to_string(), Program::new("vs", "fs"));
        let context = ValidatorContext::root().with("techniques[t0]");

        let result = validate_map_entry(&programs, "p9", &context);
        assert_eq!(result.error_count(), 1);
        let diagnostic = &result.diagnostics()[0];
        assert_eq!(diagnostic.kind, DiagnosticKind::MissingReference);
        assert_eq!(diagnostic.context, "techniques[t0]");
        assert!(diagnostic.message.contains("'p9'"));
        assert!(diagnostic.message.contains("kind program"));
        assert!(diagnostic.message.contains("p0"));
    }

    fn hierarchy(links: &[(&str, &[&str])]) -> BTreeMap<String, Node> {
        links
            .iter()
            .map(|(id, children)| (id.to_string(), Node::with_children(children.iter().copied())))
            .collect()
    }

    #[test]
    fn test_cycle_candidates_of_tree_is_empty() {
        let nodes = hierarchy(&[("root", &["a", "b"]), ("a", &["c"]), ("b", &["c"]), ("c", &[])]);
        assert!(cycle_candidates(&nodes).is_empty());
    }

    #[test]
    fn test_cycle_candidates_keep_only_cycle_members() {
        let nodes = hierarchy(&[
            ("top", &["a"]),
            ("a", &["b"]),
            ("b", &["a", "leaf", "ghost"]),
            ("leaf", &[]),
            ("self", &["self"]),
        ]);
        let candidates = cycle_candidates(&nodes);
        let expected: HashSet<&str> = ["a", "b", "self"].into_iter().collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_generate_id_prefers_given_name() {
        let collection: BTreeMap<String, ()> = BTreeMap::new();
        assert_eq!(generate_id("program", &collection), "program");
    }

    #[test]
    fn test_generate_id_uses_smallest_free_suffix() {
        let mut collection = BTreeMap::new();
        for id in ["program", "program0", "program2"] {
            collection.insert(id.to_string(), ());
        }
        assert_eq!(generate_id("program", &collection), "program1");
    }

    #[test]
    fn test_get_size_of_absent_mapping() {
        let present: BTreeMap<String, u32> = [("a".to_string(), 1)].into_iter().collect();
        assert_eq!(get_size(Some(&present)), 1);
        assert_eq!(get_size::<u32>(None), 0);
    }

    #[test]
    fn test_known_ids_truncates() {
        let collection: BTreeMap<String, ()> =
            (0..10).map(|i| (format!("id{:02}", i), ())).collect();
        let listed = known_ids(&collection);
        assert!(listed.starts_with("id00, id01"));
        assert!(listed.ends_with("..."));
    }
}
