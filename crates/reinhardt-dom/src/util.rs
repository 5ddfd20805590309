//! Attribute and text helpers used while rendering components.

/// Attributes whose mere presence switches a behaviour on.
///
/// Kept sorted so [`is_boolean_attr`] can binary search it.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Returns `true` if `name` is listed in [`BOOLEAN_ATTRS`].
pub fn is_boolean_attr(name: &str) -> bool {
	BOOLEAN_ATTRS.binary_search(&name).is_ok()
}

/// Returns `false` when an attribute should be left out of the markup.
///
/// Only boolean attributes are ever omitted, and only for the falsy values
/// `""`, `"false"` and `"0"`.
pub fn renders_attr(name: &str, value: &str) -> bool {
	!is_boolean_attr(name) || !matches!(value, "" | "false" | "0")
}

/// Appends `text` to `output`, escaping `& < > " '`.
pub(crate) fn push_escaped(output: &mut String, text: &str) {
	let mut rest = text;
	while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
		output.push_str(&rest[..pos]);
		output.push_str(match rest.as_bytes()[pos] {
			b'&' => "&amp;",
			b'<' => "&lt;",
			b'>' => "&gt;",
			b'"' => "&quot;",
			_ => "&#x27;",
		});
		rest = &rest[pos + 1..];
	}
	output.push_str(rest);
}
