//! Street classification by tree height.
//!
//! The classification file nests street names under arbitrary grouping keys.
//! Only leaf keys matter: a key whose value is not an object is a street name,
//! and both its value and every grouping key above it are discarded.

use std::collections::BTreeSet;

use beamer_core::{Error, Result, StreetClasses};
use serde_json::{Map, Value};
use tracing::debug;

/// Top-level branch holding streets with short trees.
pub const SHORT_BRANCH: &str = "short";
/// Top-level branch holding streets with tall trees.
pub const TALL_BRANCH: &str = "tall";

/// Flatten the `short` and `tall` branches into two sets of street names.
///
/// A street may appear in both sets if the data places it in both branches.
pub fn parse_trees(tree: &Value) -> Result<StreetClasses> {
    let top = tree
        .as_object()
        .ok_or_else(|| Error::input("classification data must be an object"))?;

    let short = collect_leaf_keys(branch(top, SHORT_BRANCH)?);
    let tall = collect_leaf_keys(branch(top, TALL_BRANCH)?);
    debug!(short = short.len(), tall = tall.len(), "classified streets");

    Ok(StreetClasses { short, tall })
}

fn branch<'a>(top: &'a Map<String, Value>, name: &str) -> Result<&'a Map<String, Value>> {
    top.get(name)
        .ok_or_else(|| Error::MissingBranch(name.to_string()))?
        .as_object()
        .ok_or_else(|| Error::input(format!("classification branch {name:?} is not an object")))
}

/// Collect every leaf key below `node`, at any depth.
pub fn collect_leaf_keys(node: &Map<String, Value>) -> BTreeSet<String> {
    let mut leaves = BTreeSet::new();
    let mut pending = vec![node];

    while let Some(map) = pending.pop() {
        for (key, value) in map {
            match value {
                Value::Object(child) => pending.push(child),
                _ => {
                    leaves.insert(key.clone());
                }
            }
        }
    }

    leaves
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn count_leaves(value: &Value) -> usize {
        match value {
            Value::Object(map) => map
                .values()
                .map(|v| if v.is_object() { count_leaves(v) } else { 1 })
                .sum(),
            _ => 0,
        }
    }

    #[test]
    fn test_nested_leaves() {
        let tree = json!({"short": {"a": {"x": 1}, "y": 2}, "tall": {"z": 3}});

        let classes = parse_trees(&tree).unwrap();
        assert_eq!(classes.short, set(&["x", "y"]));
        assert_eq!(classes.tall, set(&["z"]));
    }

    #[test]
    fn test_deep_nesting() {
        let mut branch = json!({"Deep Street": 10});
        for depth in 0..500 {
            let mut map = Map::new();
            map.insert(format!("level-{depth}"), branch);
            branch = Value::Object(map);
        }
        let tree = json!({"short": branch, "tall": {}});

        let classes = parse_trees(&tree).unwrap();
        assert_eq!(classes.short, set(&["Deep Street"]));
        assert!(classes.tall.is_empty());
    }

    #[test]
    fn test_street_in_both_branches() {
        let tree = json!({
            "short": {"low": {"Elm Road": 5}},
            "tall": {"high": {"Elm Road": 20, "Oak Avenue": 25}}
        });

        let classes = parse_trees(&tree).unwrap();
        assert!(classes.short.contains("Elm Road"));
        assert!(classes.tall.contains("Elm Road"));
        assert_eq!(classes.tall.len(), 2);
    }

    #[test]
    fn test_leaf_values_ignored() {
        let tree = json!({
            "short": {"Ash Lane": null, "Birch Way": [1, 2], "Cedar Row": "x"},
            "tall": {}
        });

        let classes = parse_trees(&tree).unwrap();
        assert_eq!(classes.short, set(&["Ash Lane", "Birch Way", "Cedar Row"]));
    }

    #[test]
    fn test_missing_branch() {
        let err = parse_trees(&json!({"short": {}})).unwrap_err();
        assert!(matches!(err, Error::MissingBranch(ref name) if name == "tall"));

        let err = parse_trees(&json!({"tall": {}})).unwrap_err();
        assert!(matches!(err, Error::MissingBranch(ref name) if name == "short"));
    }

    #[test]
    fn test_malformed_shape() {
        assert!(matches!(parse_trees(&json!([1, 2])), Err(Error::Input(_))));
        assert!(matches!(
            parse_trees(&json!({"short": 3, "tall": {}})),
            Err(Error::Input(_))
        ));
    }

    #[test]
    fn test_leaves_come_from_source_keys() {
        let branch = json!({
            "dublin 1": {"low": {"Abbey Street": 1, "Capel Street": 2}},
            "dublin 2": {"Baggot Street": 3, "mid": {"high": {"Dawson Street": 4}}}
        });
        let map = branch.as_object().unwrap();

        let leaves = collect_leaf_keys(map);
        assert_eq!(leaves.len(), count_leaves(&branch));
        assert_eq!(
            leaves,
            set(&["Abbey Street", "Baggot Street", "Capel Street", "Dawson Street"])
        );
    }
}
