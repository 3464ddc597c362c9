use derive_new::new;
use serde_json::Value;
use serde_path_to_error::Segment;
use std::fmt::{self, Display};

/// A payload decode error together with the path, relative to the payload, where it happened.
pub type PayloadError = serde_path_to_error::Error<serde_json::Error>;

/// One step into a JSON document: an object key or an array index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location inside a JSON document, rendered as `<root>`, `a.b[2].c`, ...
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonPath(Vec<PathSegment>);

impl JsonPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(PathSegment::Key(key.into()));
        self
    }

    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }

        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if key.is_empty() => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str("\"\"")?;
                }
                PathSegment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
            }
        }
        Ok(())
    }
}

/// Why a single variant rule rejected its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The JSON node had the wrong shape (e.g. a string where an object was required).
    TypeMismatch,
    /// A required key was absent.
    KeyNotFound,
    /// A key was present but held `null`.
    ValueNotFound,
    /// The shape was right but the content was not (wrong literal, wrong tag, nested union failure...).
    DataCorrupted,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypeMismatch => "type mismatch",
            Self::KeyNotFound => "key not found",
            Self::ValueNotFound => "value not found",
            Self::DataCorrupted => "data corrupted",
        })
    }
}

/// A single rule's failure reason, anchored at the path where it happened.
#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub path: JsonPath,
    pub detail: String,
}

impl Failure {
    /// Wraps an inner payload decode error. `prefix` is where the payload starts; the
    /// path recorded while decoding it is appended.
    pub(crate) fn from_payload(prefix: JsonPath, error: &PayloadError) -> Self {
        let path = error
            .path()
            .iter()
            .fold(prefix, |path, segment| match segment {
                Segment::Map { key } => path.key(key.as_str()),
                Segment::Seq { index } => path.index(*index),
                Segment::Enum { variant } => path.key(variant.as_str()),
                Segment::Unknown => path,
            });

        let detail = error.inner().to_string();

        Self::new(classify(&detail), path, detail)
    }

    pub(crate) fn type_mismatch(path: JsonPath, expected: &str, found: &Value) -> Self {
        Self::new(
            FailureKind::TypeMismatch,
            path,
            format!("expected {expected}, found {}", json_type_name(found)),
        )
    }
}

/// Maps a serde_json error message onto a [`FailureKind`].
///
/// serde_json exposes no structured error kind finer than "data", so this keys off the
/// message prefixes serde emits (`missing field`, `invalid type: null`, `invalid type`).
/// Anything else, including nested union reports, is [`FailureKind::DataCorrupted`].
pub(crate) fn classify(detail: &str) -> FailureKind {
    if detail.starts_with("missing field") {
        FailureKind::KeyNotFound
    } else if detail.starts_with("invalid type: null") {
        FailureKind::ValueNotFound
    } else if detail.starts_with("invalid type") {
        FailureKind::TypeMismatch
    } else {
        FailureKind::DataCorrupted
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.path, self.detail)
    }
}

/// A rejected variant, in the order it was tried.
#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub label: &'static str,
    pub failure: Failure,
}

/// Human readable summary of a failed union decode.
///
/// Lists every attempted variant in declared order and, when the input was a JSON
/// object, the keys that were actually present so schema drift is easy to spot.
pub fn render(union: &str, attempts: &[Attempt], keys: Option<&[String]>) -> String {
    let mut report = format!("could not decode any variant of {union}");

    if attempts.is_empty() {
        report.push_str(" (no variants declared)");
    }

    for attempt in attempts {
        report.push_str(&format!("\n  .{}: {}", attempt.label, attempt.failure));
    }

    if let Some(keys) = keys {
        report.push_str(&format!("\n  available keys: [{}]", keys.join(", ")));
    }

    report
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "floating point number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_path_rendering() {
        assert_eq!(JsonPath::root().to_string(), "<root>");
        assert_eq!(
            JsonPath::root()
                .key("inner")
                .index(1)
                .key("value")
                .to_string(),
            "inner[1].value"
        );
        assert_eq!(JsonPath::root().index(0).key("id").to_string(), "[0].id");
        assert_eq!(JsonPath::root().key("").to_string(), "\"\"");
    }

    #[test]
    fn test_failure_classification() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Item {
            id: u64,
        }

        let decode = |json: Value| {
            serde_path_to_error::deserialize::<_, Item>(&json)
                .map(drop)
                .unwrap_err()
        };

        let missing = decode(json!({}));
        let wrong = decode(json!({ "id": "x" }));
        let null = decode(json!({ "id": null }));
        let negative = decode(json!({ "id": -1 }));

        // The classification depends on serde's wording; fail loudly if it moves.
        assert!(missing.inner().to_string().starts_with("missing field `id`"));
        assert!(null.inner().to_string().starts_with("invalid type: null"));
        assert!(wrong.inner().to_string().starts_with("invalid type: string"));
        assert!(negative.inner().to_string().starts_with("invalid value"));

        let kind = |e: PayloadError| Failure::from_payload(JsonPath::root(), &e).kind;

        assert_eq!(kind(missing), FailureKind::KeyNotFound);
        assert_eq!(kind(wrong), FailureKind::TypeMismatch);
        assert_eq!(kind(null), FailureKind::ValueNotFound);
        assert_eq!(kind(negative), FailureKind::DataCorrupted);
        assert_eq!(
            classify("could not decode any variant of Finality"),
            FailureKind::DataCorrupted
        );
    }

    #[test]
    fn test_payload_path_is_appended_to_prefix() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Line {
            id: u64,
        }

        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Order {
            lines: Vec<Line>,
        }

        let json = json!({ "lines": [{ "id": 1 }, { "id": "two" }] });
        let err = serde_path_to_error::deserialize::<_, Order>(&json).unwrap_err();

        let failure = Failure::from_payload(JsonPath::root().key("Order"), &err);

        assert_eq!(failure.kind, FailureKind::TypeMismatch);
        assert_eq!(
            failure.path,
            JsonPath::root().key("Order").key("lines").index(1).key("id")
        );
        assert_eq!(failure.path.to_string(), "Order.lines[1].id");
        assert_eq!(failure.path.segments().len(), 4);
    }

    #[test]
    fn test_render_lists_attempts_and_keys() {
        let attempts = vec![
            Attempt::new(
                "First",
                Failure::new(FailureKind::KeyNotFound, JsonPath::root(), "no key".into()),
            ),
            Attempt::new(
                "Second",
                Failure::type_mismatch(JsonPath::root().key("x"), "string", &json!(1)),
            ),
        ];
        let keys = vec!["a".to_string(), "b".to_string()];

        let report = render("Sample", &attempts, Some(&keys));

        assert_eq!(
            report,
            "could not decode any variant of Sample\n  \
             .First: key not found at <root>: no key\n  \
             .Second: type mismatch at x: expected string, found integer\n  \
             available keys: [a, b]"
        );
    }
}
