//! Transformer Codegen — protobuf oneof to domain struct conversion emitter
//!
//! This library is the emission core of a struct-transformer generator. It
//! consumes fully-materialised type-pair metadata (descriptor and
//! struct-tag parsing live upstream) and writes Go conversion source to an
//! output sink:
//!
//! - **Oneof blocks** — for every field backed by a oneof group, a
//!   union-reader interface plus decode/encode functions (see
//!   [`process_oneof_fields`])
//! - **Option headers** — the generated-file comment and functional-option
//!   boilerplate every output file starts with (see [`opt_helpers`])
//!
//! # Usage
//!
//! ```rust
//! use transformer_codegen::{BuildInfo, Field, TypePair, opt_helpers, process_oneof_fields, validate};
//!
//! let pair = TypePair {
//!     dst_pref: "pb".to_string(),
//!     dst: "Product".to_string(),
//!     fields: vec![Field {
//!         name: "Value".to_string(),
//!         proto_type: "Product".to_string(),
//!         go_to_proto_type: "stringToProduct".to_string(),
//!         oneof_decl: "value".to_string(),
//!     }],
//!     ..TypePair::default()
//! };
//!
//! let problems = validate::validate(std::slice::from_ref(&pair));
//! assert!(problems.iter().all(|p| p.severity != validate::Severity::Error));
//!
//! let mut buf = Vec::new();
//! process_oneof_fields(&mut buf, std::slice::from_ref(&pair)).unwrap();
//! let code = String::from_utf8(buf).unwrap();
//! assert!(code.contains("type OneofValue interface"));
//!
//! let info = BuildInfo::new("v1.1.1", chrono::Utc::now());
//! let header = opt_helpers("transform", &info);
//! assert!(header.starts_with("// Code generated"));
//! ```

pub mod error;
pub mod model;
pub mod oneof;
pub mod options;
pub mod validate;

// ── Convenience re-exports ───────────────────────────────────────────────────

pub use error::{CodegenError, CodegenResult};
pub use model::{Field, TransformManifest, TypePair};
pub use oneof::{process_oneof_fields, to_pascal_case, OneofVariant, V2_COMPAT_VERSION};
pub use options::{opt_helpers, BuildInfo};
pub use validate::{is_valid, validate, Severity, ValidationError};
