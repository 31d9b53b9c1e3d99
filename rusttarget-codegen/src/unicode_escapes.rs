//! Escape forms for code points that cannot appear literally in generated
//! string and character literals.

/// Appends `code_point` as `\u{XXXX}`, in uppercase hex padded to four digits.
///
/// Both Swift and Rust accept this form for every Unicode scalar value.
pub fn append_swift_style_escaped_code_point(code_point: u32, out: &mut String) {
    out.push_str(&format!("\\u{{{:04X}}}", code_point));
}
