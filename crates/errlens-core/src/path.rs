//! Safe nested-path reads over JSON values
//!
//! A path is a static slice of segments. Reads never fail: a missing key, an
//! out-of-range index or a segment applied to the wrong kind of node all
//! resolve to `None`.

use std::fmt::Write as _;

use serde_json::Value;

/// One step into a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seg {
    /// Object member
    Key(&'static str),
    /// Array element
    Index(usize),
}

/// A path from the root of a value; the empty path addresses the root itself
pub type Path = &'static [Seg];

/// Resolve `path` against `value`
pub fn lookup<'v>(value: &'v Value, path: &[Seg]) -> Option<&'v Value> {
    path.iter().try_fold(value, |node, seg| match *seg {
        Seg::Key(key) => node.get(key),
        Seg::Index(idx) => node.get(idx),
    })
}

/// Resolve `path` to a string with visible content
pub fn text<'v>(value: &'v Value, path: &[Seg]) -> Option<&'v str> {
    lookup(value, path)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// True if `path` resolves to a JSON object
pub fn is_object(value: &Value, path: &[Seg]) -> bool {
    lookup(value, path).is_some_and(Value::is_object)
}

/// Resolve `path` and render whatever is there as a human-readable string
///
/// Strings are returned as-is, scalars via their JSON form, arrays of strings
/// joined with `", "` (blank entries dropped), and any other array or object
/// as compact JSON. Null, blank strings and empty containers count as absent.
pub fn render(value: &Value, path: &[Seg]) -> Option<String> {
    let node = lookup(value, path)?;
    match node {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => {
            let strings: Option<Vec<&str>> = items.iter().map(Value::as_str).collect();
            match strings {
                Some(parts) => {
                    let visible: Vec<&str> =
                        parts.into_iter().filter(|s| !s.trim().is_empty()).collect();
                    (!visible.is_empty()).then(|| visible.join(", "))
                }
                None => serde_json::to_string(items).ok(),
            }
        }
        Value::Object(map) if map.is_empty() => None,
        Value::Object(_) => serde_json::to_string(node).ok(),
    }
}

/// Dotted form of a path for shape listings, e.g. `errorMessage.payload[0].message`
pub fn display(path: &[Seg]) -> String {
    if path.is_empty() {
        return "$".to_string();
    }
    let mut out = String::new();
    for seg in path {
        match seg {
            Seg::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Seg::Index(idx) => {
                let _ = write!(out, "[{}]", idx);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use Seg::{Index, Key};

    const DEEP: Path = &[Key("a"), Key("b"), Index(1), Key("c")];

    #[test]
    fn test_lookup_follows_keys_and_indices() {
        let v = json!({"a": {"b": [{"c": 1}, {"c": "two"}]}});
        assert_eq!(lookup(&v, DEEP), Some(&json!("two")));
        assert_eq!(lookup(&v, &[]), Some(&v));
    }

    #[test]
    fn test_lookup_wrong_kind_is_absent() {
        // Index into an object, key into an array, key into a string
        let v = json!({"a": {"b": {"1": {"c": "x"}}}});
        assert_eq!(lookup(&v, DEEP), None);

        let v = json!({"a": [1, 2]});
        assert_eq!(lookup(&v, &[Key("a"), Key("b")]), None);

        let v = json!({"a": "flat"});
        assert_eq!(lookup(&v, &[Key("a"), Key("b")]), None);

        assert_eq!(lookup(&Value::Null, DEEP), None);
    }

    #[test]
    fn test_text_rejects_blank_and_non_strings() {
        let v = json!({"s": "hello", "blank": "   ", "n": 5});
        assert_eq!(text(&v, &[Key("s")]), Some("hello"));
        assert_eq!(text(&v, &[Key("blank")]), None);
        assert_eq!(text(&v, &[Key("n")]), None);
        assert_eq!(text(&json!("root"), &[]), Some("root"));
    }

    #[test]
    fn test_render_variants() {
        let v = json!({
            "s": "plain",
            "n": 42,
            "b": false,
            "fields": ["Name", "", "Email"],
            "blanks": ["", "  "],
            "mixed": [1, "x"],
            "obj": {"k": "v"},
            "empty": {},
            "none": null
        });
        assert_eq!(render(&v, &[Key("s")]).as_deref(), Some("plain"));
        assert_eq!(render(&v, &[Key("n")]).as_deref(), Some("42"));
        assert_eq!(render(&v, &[Key("b")]).as_deref(), Some("false"));
        assert_eq!(render(&v, &[Key("fields")]).as_deref(), Some("Name, Email"));
        assert_eq!(render(&v, &[Key("mixed")]).as_deref(), Some("[1,\"x\"]"));
        assert_eq!(render(&v, &[Key("obj")]).as_deref(), Some("{\"k\":\"v\"}"));
        assert_eq!(render(&v, &[Key("blanks")]), None);
        assert_eq!(render(&v, &[Key("empty")]), None);
        assert_eq!(render(&v, &[Key("none")]), None);
        assert_eq!(render(&v, &[Key("missing")]), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(display(DEEP), "a.b[1].c");
        assert_eq!(display(&[]), "$");
        assert_eq!(display(&[Index(0)]), "[0]");
    }
}
