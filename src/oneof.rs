//! Oneof conversion emitter
//!
//! For every field backed by a oneof group, emits one self-contained Go
//! block to the output sink: the union-reader interface the generated
//! protobuf wrapper satisfies, a decode function flattening the union into
//! a single string, and an encode function assigning the right variant
//! back into the destination's oneof field.
//!
//! Templates are kept as data — string literals with named substitution
//! slots — so the mapping from metadata to text stays auditable.

use std::io::Write;

use crate::error::CodegenResult;
use crate::model::{Field, TypePair};

/// Schema version whose encode path always preserves the string variant,
/// even for numeric values. Compared verbatim; never generalise this to a
/// version range without a specified rule.
pub const V2_COMPAT_VERSION: &str = "v2";

// ── Variant descriptors ──────────────────────────────────────────────────────

/// One scalar variant of the generated oneof wrapper.
///
/// The interface declaration and the decode fallback chain are driven by
/// [`OneofVariant::DECODE_ORDER`]; supporting a new scalar kind means
/// adding a descriptor here, not editing the templates. The encode branch
/// is intentionally two-variant: its whole policy is "parse as int64 or
/// keep the string".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneofVariant {
    StringValue,
    Int64Value,
}

impl OneofVariant {
    /// Decode fallback order. The string variant is checked first and wins
    /// when non-empty, regardless of the integer variant.
    pub const DECODE_ORDER: &'static [OneofVariant] =
        &[OneofVariant::StringValue, OneofVariant::Int64Value];

    /// Accessor method name the generated wrapper exposes.
    pub fn accessor(self) -> &'static str {
        match self {
            Self::StringValue => "GetStringValue",
            Self::Int64Value => "GetInt64Value",
        }
    }

    /// Go scalar type returned by the accessor.
    pub fn go_type(self) -> &'static str {
        match self {
            Self::StringValue => "string",
            Self::Int64Value => "int64",
        }
    }

    /// Binding identifier used in the decode guard.
    fn bind(self) -> &'static str {
        match self {
            Self::StringValue => "s",
            Self::Int64Value => "i",
        }
    }

    /// Zero literal the decode guard compares against.
    fn zero(self) -> &'static str {
        match self {
            Self::StringValue => "\"\"",
            Self::Int64Value => "0",
        }
    }

    /// Expression flattening the bound variant value into a string.
    fn flatten(self) -> &'static str {
        match self {
            Self::StringValue => "s",
            Self::Int64Value => "strconv.FormatInt(i, 10)",
        }
    }
}

// ── Templates ────────────────────────────────────────────────────────────────

/// Union-reader interface. Slots: `{decl}`, `{accessors}`.
const INTERFACE_TEMPLATE: &str = "type Oneof{decl} interface {\n{accessors}}\n";

/// One interface accessor line. Slots: `{accessor}`, `{go_type}`.
const ACCESSOR_TEMPLATE: &str = "\t{accessor}() {go_type}\n";

/// Decode function. Slots: `{proto}`, `{domain}`, `{decl}`, `{arms}`.
const DECODE_TEMPLATE: &str =
    "func {proto}To{domain}(src Oneof{decl}) string {\n{arms}\n\treturn \"<nil>\"\n}\n";

/// One decode fallback arm. Slots: `{bind}`, `{accessor}`, `{zero}`, `{flatten}`.
const DECODE_ARM_TEMPLATE: &str =
    "\tif {bind} := src.{accessor}(); {bind} != {zero} {\n\t\treturn {flatten}\n\t}\n";

/// Encode function. Slots: `{fn}`, `{dst_pref}`, `{proto}`, `{decl}`, `{compat}`.
/// The doubled space before `||` and the missing space before `{` are part
/// of the stable output format; downstream golden checks depend on them.
const ENCODE_TEMPLATE: &str = concat!(
    "func {fn}(s string, dst *{dst_pref}.{proto}, v string) {\n",
    "\ti, err := strconv.ParseInt(s, 10, 64)\n",
    "\tif err != nil  || v == \"{compat}\"{\n",
    "\t\tdst.{decl} = &{dst_pref}.{proto}_StringValue{StringValue: s}\n",
    "\t\treturn\n",
    "\t}\n",
    "\n",
    "\tdst.{decl} = &{dst_pref}.{proto}_Int64Value{Int64Value: i}\n",
    "\treturn\n",
    "}\n",
);

// ── Emitter ──────────────────────────────────────────────────────────────────

/// Emit one conversion block per oneof-backed field, in pair-then-field
/// encounter order.
///
/// Fields with an empty `oneof_decl` contribute nothing; a pair without
/// oneof fields emits nothing at all, and an empty pair slice writes the
/// empty string. The only failure mode is a sink-write error, which aborts
/// the pass without rolling back output already written.
pub fn process_oneof_fields<W: Write>(w: &mut W, pairs: &[TypePair]) -> CodegenResult<()> {
    let mut blocks = 0usize;
    for pair in pairs {
        for field in pair.fields.iter().filter(|f| f.is_oneof()) {
            w.write_all(render_block(pair, field).as_bytes())?;
            blocks += 1;
        }
    }
    tracing::debug!(pairs = pairs.len(), blocks, "emitted oneof conversion blocks");
    Ok(())
}

/// Render the full block for one oneof field. Depends only on the field's
/// own metadata and the owning pair's destination naming.
fn render_block(pair: &TypePair, field: &Field) -> String {
    let decl = to_pascal_case(&field.oneof_decl);

    let mut out = String::from("\n");
    out.push_str(&render_interface(&decl));
    out.push('\n');
    out.push_str(&render_decode(field, &decl));
    out.push('\n');
    out.push_str(&render_encode(pair, field, &decl));
    out.push('\n');
    out
}

fn render_interface(decl: &str) -> String {
    let accessors: String = OneofVariant::DECODE_ORDER
        .iter()
        .map(|v| {
            ACCESSOR_TEMPLATE
                .replace("{accessor}", v.accessor())
                .replace("{go_type}", v.go_type())
        })
        .collect();

    INTERFACE_TEMPLATE
        .replace("{decl}", decl)
        .replace("{accessors}", &accessors)
}

fn render_decode(field: &Field, decl: &str) -> String {
    let arms: Vec<String> = OneofVariant::DECODE_ORDER
        .iter()
        .map(|v| {
            DECODE_ARM_TEMPLATE
                .replace("{bind}", v.bind())
                .replace("{accessor}", v.accessor())
                .replace("{zero}", v.zero())
                .replace("{flatten}", v.flatten())
        })
        .collect();

    DECODE_TEMPLATE
        .replace("{proto}", &field.proto_type)
        .replace("{domain}", field.domain_type())
        .replace("{decl}", decl)
        .replace("{arms}", &arms.join("\n"))
}

fn render_encode(pair: &TypePair, field: &Field, decl: &str) -> String {
    ENCODE_TEMPLATE
        .replace("{fn}", &field.go_to_proto_type)
        .replace("{dst_pref}", &pair.dst_pref)
        .replace("{proto}", &field.proto_type)
        .replace("{decl}", decl)
        .replace("{compat}", V2_COMPAT_VERSION)
}

// ── Utilities ────────────────────────────────────────────────────────────────

/// Convert a kebab-case or snake_case string to PascalCase.
///
/// # Examples
/// ```
/// # use transformer_codegen::oneof::to_pascal_case;
/// assert_eq!(to_pascal_case("decl_name"), "DeclName");
/// assert_eq!(to_pascal_case("status"), "Status");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    let upper: String = first.to_uppercase().collect();
                    upper + chars.as_str()
                }
            }
        })
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Golden block for a single oneof field with `oneof_decl = "decl_name"`
    /// and `proto_type = "pt"`.
    const SINGLE_FIELD: &str = concat!(
        "\n",
        "type OneofDeclName interface {\n",
        "\tGetStringValue() string\n",
        "\tGetInt64Value() int64\n",
        "}\n",
        "\n",
        "func ptTogt(src OneofDeclName) string {\n",
        "\tif s := src.GetStringValue(); s != \"\" {\n",
        "\t\treturn s\n",
        "\t}\n",
        "\n",
        "\tif i := src.GetInt64Value(); i != 0 {\n",
        "\t\treturn strconv.FormatInt(i, 10)\n",
        "\t}\n",
        "\n",
        "\treturn \"<nil>\"\n",
        "}\n",
        "\n",
        "func gtTopt(s string, dst *dst_pref.pt, v string) {\n",
        "\ti, err := strconv.ParseInt(s, 10, 64)\n",
        "\tif err != nil  || v == \"v2\"{\n",
        "\t\tdst.DeclName = &dst_pref.pt_StringValue{StringValue: s}\n",
        "\t\treturn\n",
        "\t}\n",
        "\n",
        "\tdst.DeclName = &dst_pref.pt_Int64Value{Int64Value: i}\n",
        "\treturn\n",
        "}\n",
        "\n",
    );

    fn oneof_field(name: &str) -> Field {
        Field {
            name: name.to_string(),
            proto_type: "pt".to_string(),
            go_to_proto_type: "gtTopt".to_string(),
            oneof_decl: "decl_name".to_string(),
        }
    }

    fn plain_field(name: &str) -> Field {
        Field {
            name: name.to_string(),
            proto_type: "pt".to_string(),
            go_to_proto_type: "gtTopt".to_string(),
            oneof_decl: String::new(),
        }
    }

    fn pair(fields: Vec<Field>) -> TypePair {
        TypePair {
            src_pref: "src_pref".to_string(),
            src: "src".to_string(),
            src_fn: "src_fn".to_string(),
            src_pointer: "src_pointer".to_string(),
            dst_pref: "dst_pref".to_string(),
            dst: "dst".to_string(),
            dst_fn: "dst_fn".to_string(),
            dst_pointer: "dst_pointer".to_string(),
            swapped: false,
            helper_package: "hp".to_string(),
            ptr: false,
            fields,
        }
    }

    fn emit(pairs: &[TypePair]) -> String {
        let mut buf = Vec::new();
        process_oneof_fields(&mut buf, pairs).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_pair_list_emits_nothing() {
        assert_eq!(emit(&[]), "");
    }

    #[test]
    fn empty_field_list_emits_nothing() {
        assert_eq!(emit(&[pair(Vec::new())]), "");
    }

    #[test]
    fn pair_without_oneof_fields_emits_nothing() {
        assert_eq!(emit(&[pair(vec![plain_field("FirstField")])]), "");
    }

    #[test]
    fn single_oneof_field_matches_golden() {
        let out = emit(&[pair(vec![oneof_field("GoField")])]);
        assert_eq!(out, SINGLE_FIELD);
    }

    #[test]
    fn non_oneof_sibling_contributes_nothing() {
        let out = emit(&[pair(vec![
            plain_field("FirstField"),
            oneof_field("SecondField"),
        ])]);
        assert_eq!(out, SINGLE_FIELD, "sibling order must not alter the block");
    }

    #[test]
    fn distinct_decls_emit_independent_blocks() {
        let mut second = oneof_field("Status");
        second.oneof_decl = "status_code".to_string();

        let out = emit(&[pair(vec![oneof_field("GoField"), second])]);
        assert_eq!(out.matches("type Oneof").count(), 2);
        let first_pos = out.find("type OneofDeclName").unwrap();
        let second_pos = out.find("type OneofStatusCode").unwrap();
        assert!(first_pos < second_pos, "blocks must keep field order");
    }

    #[test]
    fn pairs_emit_in_input_order() {
        let mut late = oneof_field("Other");
        late.oneof_decl = "late_decl".to_string();

        let out = emit(&[pair(vec![oneof_field("GoField")]), pair(vec![late])]);
        let first_pos = out.find("OneofDeclName").unwrap();
        let second_pos = out.find("OneofLateDecl").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn decode_checks_string_before_int64() {
        let out = emit(&[pair(vec![oneof_field("GoField")])]);
        let string_guard = out.find("GetStringValue(); s != \"\"").unwrap();
        let int_guard = out.find("GetInt64Value(); i != 0").unwrap();
        assert!(
            string_guard < int_guard,
            "string branch must win the fallback order:\n{out}"
        );
        assert!(out.contains("return \"<nil>\""), "missing sentinel:\n{out}");
    }

    #[test]
    fn encode_gates_string_variant_on_parse_failure_or_v2() {
        let out = emit(&[pair(vec![oneof_field("GoField")])]);
        assert!(
            out.contains("if err != nil  || v == \"v2\"{"),
            "string variant must be gated on parse failure or v2:\n{out}"
        );
        assert!(
            out.contains("&dst_pref.pt_StringValue{StringValue: s}"),
            "missing string variant constructor:\n{out}"
        );
        assert!(
            out.contains("&dst_pref.pt_Int64Value{Int64Value: i}"),
            "missing int64 variant constructor:\n{out}"
        );
    }

    #[test]
    fn write_failure_propagates() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = process_oneof_fields(&mut FailingSink, &[pair(vec![oneof_field("GoField")])])
            .unwrap_err();
        assert!(format!("{err}").contains("sink closed"));
    }

    #[test_case("decl_name", "DeclName")]
    #[test_case("status_code", "StatusCode")]
    #[test_case("kebab-decl", "KebabDecl")]
    #[test_case("Status", "Status")]
    fn pascal_case(input: &str, expected: &str) {
        assert_eq!(to_pascal_case(input), expected);
    }
}
