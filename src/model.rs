//! Transformer metadata types and TOML parser
//!
//! Deserialises a transform manifest into [`TransformManifest`]. The
//! metadata is materialised upstream (descriptor and struct-tag parsing
//! live outside this crate) and consumed read-only by the emitters.

use serde::{Deserialize, Serialize};

// ── Top-level manifest ───────────────────────────────────────────────────────

/// An ordered list of type pairs to generate conversions for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformManifest {
    #[serde(default)]
    pub pairs: Vec<TypePair>,
}

impl TransformManifest {
    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialise back to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

// ── Type pair ────────────────────────────────────────────────────────────────

/// One pair of related record types: a protobuf-generated type and a plain
/// domain struct, plus the naming needed to emit conversions between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypePair {
    /// Source package prefix, e.g. `"pb"`.
    pub src_pref: String,
    /// Source type name.
    pub src: String,
    /// Source conversion-function name.
    #[serde(default)]
    pub src_fn: String,
    /// Source pointer token, e.g. `"*"` or empty.
    #[serde(default)]
    pub src_pointer: String,
    /// Destination package prefix.
    pub dst_pref: String,
    /// Destination type name.
    pub dst: String,
    /// Destination conversion-function name.
    #[serde(default)]
    pub dst_fn: String,
    /// Destination pointer token.
    #[serde(default)]
    pub dst_pointer: String,
    /// Direction indicator. When `true` the caller already reversed the
    /// source/destination roles before building this record; the emitters
    /// are direction-agnostic given the resolved names.
    #[serde(default)]
    pub swapped: bool,
    /// Package holding shared conversion helpers referenced by emitted
    /// code. Never validated here.
    #[serde(default)]
    pub helper_package: String,
    /// Destination field is accessed through a pointer rather than by value.
    #[serde(default)]
    pub ptr: bool,
    /// Ordered field metadata, one entry per field in the pair.
    #[serde(default)]
    pub fields: Vec<Field>,
}

// ── Field ────────────────────────────────────────────────────────────────────

/// One field shared by both representations of a type pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    /// Exported field identifier, identical on both sides.
    pub name: String,
    /// Scalar type name on the protobuf side.
    pub proto_type: String,
    /// Encode conversion-function identifier, conventionally
    /// `<domain type>To<proto type>`.
    pub go_to_proto_type: String,
    /// Oneof group discriminator. Empty means an ordinary scalar field,
    /// handled elsewhere in the generator; non-empty is the declared name
    /// of the oneof group and triggers union-conversion emission.
    #[serde(default)]
    pub oneof_decl: String,
}

impl Field {
    /// Whether this field is backed by a oneof group.
    pub fn is_oneof(&self) -> bool {
        !self.oneof_decl.is_empty()
    }

    /// The domain-side type token, recovered by stripping the
    /// `To<proto_type>` suffix from [`Field::go_to_proto_type`]. Falls back
    /// to the full identifier when the suffix is absent.
    pub fn domain_type(&self) -> &str {
        let suffix = format!("To{}", self.proto_type);
        self.go_to_proto_type
            .strip_suffix(suffix.as_str())
            .unwrap_or(&self.go_to_proto_type)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
