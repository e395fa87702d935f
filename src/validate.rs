//! Transform metadata validator
//!
//! Advisory pre-flight checks over a [`TypePair`] list. The emitters never
//! consult these results — malformed metadata flows through the documented
//! fallback rules — but callers can surface problems before writing files.

use crate::model::TypePair;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub message: String,
    /// Location in the metadata that caused it (e.g. `pairs[0].fields[1]`).
    pub location: String,
    /// Whether the emitted code would fail to compile (`Error`) or merely
    /// behave unexpectedly (`Warning`).
    pub severity: Severity,
}

/// Severity of a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Emitted code would be invalid Go.
    Error,
    /// Emitted code compiles but the derived names degrade to fallbacks.
    Warning,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {}: {}", tag, self.location, self.message)
    }
}

/// Validate a pair list and return all problems found.
///
/// An empty `Vec` means the metadata is clean. Entries with
/// [`Severity::Error`] should block generation.
pub fn validate(pairs: &[TypePair]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    for (idx, pair) in pairs.iter().enumerate() {
        let loc = format!("pairs[{idx}]");
        validate_pair(pair, &loc, &mut errors);
    }

    errors
}

/// Returns `true` if [`validate`] produces no `Error`-severity issues.
pub fn is_valid(pairs: &[TypePair]) -> bool {
    !validate(pairs).iter().any(|e| e.severity == Severity::Error)
}

// ── Internal validators ──────────────────────────────────────────────────────

fn validate_pair(pair: &TypePair, loc: &str, errors: &mut Vec<ValidationError>) {
    let mut seen_decls: Vec<&str> = Vec::new();

    for (fidx, field) in pair.fields.iter().enumerate() {
        let floc = format!("{loc}.fields[{fidx}]");

        if field.name.is_empty() {
            errors.push(ValidationError {
                message: "field name is empty".to_string(),
                location: floc.clone(),
                severity: Severity::Warning,
            });
        }

        if !field.is_oneof() {
            continue;
        }

        // Oneof blocks reference the destination package and the proto
        // type in emitted identifiers; without them the block is not
        // compilable Go.
        if pair.dst_pref.is_empty() {
            errors.push(ValidationError {
                message: "oneof field requires a destination package prefix".to_string(),
                location: format!("{loc}.dst_pref"),
                severity: Severity::Error,
            });
        }
        if field.proto_type.is_empty() {
            errors.push(ValidationError {
                message: "oneof field requires a proto type".to_string(),
                location: format!("{floc}.proto_type"),
                severity: Severity::Error,
            });
        }

        let suffix = format!("To{}", field.proto_type);
        if !field.proto_type.is_empty() && !field.go_to_proto_type.ends_with(suffix.as_str()) {
            errors.push(ValidationError {
                message: format!(
                    "encode function '{}' does not end in '{}' — the decode name will use the full identifier",
                    field.go_to_proto_type, suffix
                ),
                location: format!("{floc}.go_to_proto_type"),
                severity: Severity::Warning,
            });
        }

        if seen_decls.contains(&field.oneof_decl.as_str()) {
            errors.push(ValidationError {
                message: format!(
                    "duplicate oneof declaration '{}' — emitted interfaces would collide",
                    field.oneof_decl
                ),
                location: format!("{floc}.oneof_decl"),
                severity: Severity::Error,
            });
        } else {
            seen_decls.push(&field.oneof_decl);
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
