//! Shape registry
//!
//! The ordered table of recognized upstream error shapes. Structural tests are
//! not mutually exclusive (a partial SAP payload also satisfies the loose
//! gateway test), so the order of [`SHAPES`] is the tie-break: most deeply
//! nested shapes first, the catch-all last. Adding an upstream system is an
//! edit to this file only.

use serde_json::Value;

use crate::errors::{ErrorType, LensError, Result};
use crate::path::{self, Path, Seg};

use Seg::{Index, Key};

pub const SAP_ID: &str = "sap";
pub const SALESFORCE_ID: &str = "salesforce";
pub const RAML_ID: &str = "raml";
pub const GATEWAY_ID: &str = "gateway";
pub const GENERIC_ID: &str = "generic";
pub const UNKNOWN_ID: &str = "unknown";

pub const UNKNOWN_MESSAGE: &str = "Unknown error occurred";
pub const UNKNOWN_CODE: &str = "UNKNOWN_ERROR";
pub const UNKNOWN_SOURCE: &str = "Unknown";
pub const NO_DETAILS: &str = "No additional details";

/// Code reported for SAP payloads that carry no code of their own
pub const SAP_SENTINEL_CODE: &str = "SAP_BACKEND_ERROR";

/// How a resolved node is turned into a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Only non-blank strings are accepted
    Text,
    /// Strings, scalars, arrays and objects are rendered (see [`path::render`])
    Any,
}

/// Defaulted extraction of one output field
///
/// Candidate paths are tried in order; the first that resolves to something
/// usable wins, otherwise the constant fallback is used.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub paths: &'static [Path],
    pub fallback: &'static str,
    pub render: Render,
}

impl FieldRule {
    const fn text(paths: &'static [Path], fallback: &'static str) -> Self {
        Self {
            paths,
            fallback,
            render: Render::Text,
        }
    }

    const fn rendered(paths: &'static [Path], fallback: &'static str) -> Self {
        Self {
            paths,
            fallback,
            render: Render::Any,
        }
    }

    /// First usable value along the candidate paths, if any
    pub fn resolve(&self, value: &Value) -> Option<String> {
        self.paths.iter().find_map(|p| match self.render {
            Render::Text => path::text(value, p).map(str::to_string),
            Render::Any => path::render(value, p),
        })
    }

    /// Resolved value or the fallback constant; never empty
    pub fn apply(&self, value: &Value) -> String {
        self.resolve(value)
            .unwrap_or_else(|| self.fallback.to_string())
    }
}

/// A named structural pattern plus its extraction rules
pub struct ErrorShape {
    pub id: &'static str,
    pub error_type: ErrorType,
    /// Label reported as the error's source system
    pub source: &'static str,
    test: fn(&Value) -> bool,
    pub message: FieldRule,
    pub code: FieldRule,
    pub details: FieldRule,
}

impl ErrorShape {
    /// Run this shape's structural test; extra fields never affect the result
    pub fn matches(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl std::fmt::Debug for ErrorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorShape")
            .field("id", &self.id)
            .field("error_type", &self.error_type)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// ---- SAP (OData error nested inside the gateway envelope) ----

const SAP_VALUE: Path = &[
    Key("errorMessage"),
    Key("error"),
    Key("message"),
    Key("error"),
    Key("message"),
    Key("value"),
];
const SAP_CODE: Path = &[
    Key("errorMessage"),
    Key("error"),
    Key("message"),
    Key("error"),
    Key("code"),
];
const SAP_INNER: Path = &[
    Key("errorMessage"),
    Key("error"),
    Key("message"),
    Key("error"),
    Key("innererror"),
];
const SAP_ERRORDETAILS: Path = &[
    Key("errorMessage"),
    Key("error"),
    Key("message"),
    Key("error"),
    Key("innererror"),
    Key("errordetails"),
];

fn sap_test(value: &Value) -> bool {
    path::text(value, SAP_VALUE).is_some()
}

// ---- Salesforce (Apex/REST error list) ----

const SF_MESSAGE: Path = &[Key("errorMessage"), Key("payload"), Index(0), Key("message")];
const SF_CODE: Path = &[Key("errorMessage"), Key("payload"), Index(0), Key("errorCode")];
const SF_FIELDS: Path = &[Key("errorMessage"), Key("payload"), Index(0), Key("fields")];

fn salesforce_test(value: &Value) -> bool {
    path::text(value, SF_MESSAGE).is_some() && path::text(value, SF_CODE).is_some()
}

// ---- RAML (API gateway validation envelope) ----

const RAML_DESCRIPTION: Path = &[Key("errorMessage"), Key("error"), Key("errorDescription")];
const RAML_TYPE: Path = &[Key("errorMessage"), Key("error"), Key("errorType")];
const RAML_MESSAGE: Path = &[Key("errorMessage"), Key("error"), Key("message")];

fn raml_test(value: &Value) -> bool {
    path::text(value, RAML_DESCRIPTION).is_some() && path::text(value, RAML_TYPE).is_some()
}

// ---- Gateway (loose envelope) ----

const GW_ERROR: Path = &[Key("errorMessage"), Key("error")];
const GW_MESSAGE: Path = RAML_MESSAGE;
const GW_DESCRIPTION: Path = &[Key("errorMessage"), Key("error"), Key("description")];
const GW_TOP_MESSAGE: Path = &[Key("errorMessage"), Key("message")];
const GW_CODE: Path = &[Key("errorMessage"), Key("error"), Key("code")];
const GW_STATUS: Path = &[Key("errorMessage"), Key("error"), Key("status")];
const GW_TOP_STATUS: Path = &[Key("errorMessage"), Key("status")];
const GW_DETAILS: Path = &[Key("errorMessage"), Key("error"), Key("details")];

fn gateway_test(value: &Value) -> bool {
    path::is_object(value, GW_ERROR)
}

// ---- Generic runtime wrapper / plain strings ----

const ROOT: Path = &[];
const MESSAGE: Path = &[Key("message")];
const ERROR: Path = &[Key("error")];
const CODE: Path = &[Key("code")];
const ERROR_CODE: Path = &[Key("errorCode")];
const DETAILS: Path = &[Key("details")];
const DESCRIPTION: Path = &[Key("description")];

fn generic_test(value: &Value) -> bool {
    [ROOT, MESSAGE, ERROR]
        .iter()
        .any(|p| path::text(value, p).is_some())
}

/// Registered shapes in priority order
pub static SHAPES: [ErrorShape; 5] = [
    ErrorShape {
        id: SAP_ID,
        error_type: ErrorType::Sap,
        source: "SAP",
        test: sap_test,
        message: FieldRule::text(&[SAP_VALUE], "SAP error"),
        code: FieldRule::text(&[SAP_CODE], SAP_SENTINEL_CODE),
        details: FieldRule::rendered(&[SAP_ERRORDETAILS, SAP_INNER], NO_DETAILS),
    },
    ErrorShape {
        id: SALESFORCE_ID,
        error_type: ErrorType::Salesforce,
        source: "Salesforce",
        test: salesforce_test,
        message: FieldRule::text(&[SF_MESSAGE], "Salesforce error"),
        code: FieldRule::text(&[SF_CODE], "SF_ERROR"),
        details: FieldRule::rendered(&[SF_FIELDS], NO_DETAILS),
    },
    ErrorShape {
        id: RAML_ID,
        error_type: ErrorType::Raml,
        source: "RAML",
        test: raml_test,
        message: FieldRule::text(&[RAML_DESCRIPTION], "RAML error"),
        code: FieldRule::text(&[RAML_TYPE], "RAML_ERROR"),
        details: FieldRule::rendered(&[RAML_MESSAGE], NO_DETAILS),
    },
    ErrorShape {
        id: GATEWAY_ID,
        error_type: ErrorType::Gateway,
        source: "Gateway",
        test: gateway_test,
        message: FieldRule::text(&[GW_MESSAGE, GW_DESCRIPTION, GW_TOP_MESSAGE], "Gateway error"),
        code: FieldRule::rendered(&[GW_CODE, GW_STATUS, GW_TOP_STATUS], "GATEWAY_ERROR"),
        details: FieldRule::rendered(&[GW_DETAILS], NO_DETAILS),
    },
    ErrorShape {
        id: GENERIC_ID,
        error_type: ErrorType::Gateway,
        source: "Runtime",
        test: generic_test,
        message: FieldRule::text(&[ROOT, MESSAGE, ERROR], UNKNOWN_MESSAGE),
        code: FieldRule::rendered(&[CODE, ERROR_CODE], "GENERIC_ERROR"),
        details: FieldRule::rendered(&[DETAILS, DESCRIPTION], NO_DETAILS),
    },
];

/// Registered shapes, most specific first
pub fn shapes_in_priority_order() -> &'static [ErrorShape] {
    &SHAPES
}

fn rank(id: &str) -> Option<usize> {
    match id {
        SAP_ID => Some(0),
        SALESFORCE_ID => Some(1),
        RAML_ID => Some(2),
        GATEWAY_ID => Some(3),
        GENERIC_ID => Some(4),
        _ => None,
    }
}

/// Look a shape up by id without scanning the registry
pub fn find(id: &str) -> Option<&'static ErrorShape> {
    rank(id).and_then(|idx| SHAPES.get(idx))
}

/// The shape named `id`, if first-match classification would pick it for `value`
///
/// Only the shapes ranked ahead of `id` are tested besides `id` itself, so the
/// highest-priority shape is confirmed with a single structural test.
pub fn confirm(id: &str, value: &Value) -> Option<&'static ErrorShape> {
    let idx = rank(id)?;
    let shape = SHAPES.get(idx)?;
    let outranked = SHAPES[..idx].iter().any(|earlier| earlier.matches(value));
    (shape.matches(value) && !outranked).then_some(shape)
}

/// Strict lookup for caller-supplied ids that must exist
///
/// # Errors
///
/// Returns `LensError::UnknownShape` if `id` is not registered.
pub fn require(id: &str) -> Result<&'static ErrorShape> {
    find(id).ok_or_else(|| LensError::UnknownShape { id: id.to_string() })
}
