//! Functional-option header emitter
//!
//! Renders the fixed boilerplate every generated file starts with: a
//! do-not-edit comment stamped with the generator version, the package
//! declaration, a package-scoped `version` variable, and the variadic
//! option pattern for injecting it at runtime.

use chrono::{DateTime, SecondsFormat, Utc};

// ── Build metadata ───────────────────────────────────────────────────────────

/// Immutable generator build metadata, constructed once before a
/// generation run and threaded into the emitters as an argument. Replaces
/// any process-wide mutable state, so concurrent runs cannot observe a
/// half-updated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    build_time: String,
}

impl BuildInfo {
    /// Capture the generator version and build instant. The instant is
    /// stored in its RFC-3339 rendering (`Z`-suffixed, second precision).
    pub fn new(version: impl Into<String>, build_time: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            build_time: build_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Generator version string, e.g. `"v1.1.1"`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// RFC-3339 build timestamp.
    pub fn build_time(&self) -> &str {
        &self.build_time
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// Option-helper boilerplate. Slots: `{version}`, `{package}`.
const OPT_HELPERS_TEMPLATE: &str = concat!(
    "// Code generated by protoc-gen-struct-transformer, version: {version}. DO NOT EDIT.\n",
    "\n",
    "package {package}\n",
    "var version string\n",
    "\n",
    "// TransformParam is a function option type.\n",
    "type TransformParam func()\n",
    "\n",
    "// WithVersion sets global version variable.\n",
    "func WithVersion(v string) TransformParam {\n",
    "\treturn func() {\n",
    "\t\tversion = v\n",
    "\t}\n",
    "}\n",
    "\n",
    "func applyOptions(opts ...TransformParam) {\n",
    "\tfor _, o := range opts {\n",
    "\t\to()\n",
    "\t}\n",
    "}\n",
    "\n",
    "\n",
);

// ── Emitter ──────────────────────────────────────────────────────────────────

/// Render the option-helper header for `package`.
///
/// Pure function of its arguments; no validation is performed on the
/// package name, callers guarantee well-formed identifiers upstream. The
/// build timestamp travels in [`BuildInfo`] for header variants that stamp
/// it; this template renders only the version.
pub fn opt_helpers(package: &str, info: &BuildInfo) -> String {
    OPT_HELPERS_TEMPLATE
        .replace("{version}", info.version())
        .replace("{package}", package)
}

// ── Tests ────────────────────────────────────────────────────────────────────
