//! Built-in HTML and SVG tag registry.
//!
//! Every entry pairs a tag name with its void flag. Void elements (`br`,
//! `img`, `input`, ...) never have children and render without a closing
//! tag. Names keep their HTML/SVG spelling, so SVG elements such as
//! `clipPath` and `feGaussianBlur` are camelCase and a few font elements
//! contain hyphens.
//!
//! `form` and `textarea` are plain entries here; the specialised versions in
//! [`crate::controls`] are injected over them at bootstrap.

/// A single registry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSpec {
	/// Tag name as it appears in markup.
	pub name: &'static str,
	/// Whether the element is void (no children, no closing tag).
	pub is_void: bool,
}

impl TagSpec {
	/// Creates a registry record.
	pub const fn new(name: &'static str, is_void: bool) -> Self {
		Self { name, is_void }
	}
}

const fn tag(name: &'static str, is_void: bool) -> TagSpec {
	TagSpec::new(name, is_void)
}

/// Tags known to the default factory table.
pub static HTML_TAGS: &[TagSpec] = &[
	tag("a", false),
	tag("abbr", false),
	tag("address", false),
	tag("altGlyph", false),
	tag("altGlyphDef", false),
	tag("altGlyphItem", false),
	tag("animate", false),
	tag("animateColor", false),
	tag("animateMotion", false),
	tag("animateTransform", false),
	tag("applet", false),
	tag("area", true),
	tag("article", false),
	tag("aside", false),
	tag("audio", false),
	tag("b", false),
	tag("base", true),
	tag("bdi", false),
	tag("bdo", false),
	tag("big", false),
	tag("blockquote", false),
	tag("body", false),
	tag("br", true),
	tag("button", false),
	tag("canvas", false),
	tag("caption", false),
	tag("circle", false),
	tag("cite", false),
	tag("clipPath", false),
	tag("code", false),
	tag("col", true),
	tag("colgroup", false),
	tag("color-profile", false),
	tag("command", false),
	tag("cursor", false),
	tag("data", false),
	tag("datalist", false),
	tag("dd", false),
	tag("definition-src", false),
	tag("defs", false),
	tag("del", false),
	tag("desc", false),
	tag("details", false),
	tag("dfn", false),
	tag("dialog", false),
	tag("div", false),
	tag("dl", false),
	tag("dt", false),
	tag("ellipse", false),
	tag("em", false),
	tag("embed", true),
	tag("feBlend", false),
	tag("feColorMatrix", false),
	tag("feComponentTransfer", false),
	tag("feComposite", false),
	tag("feConvolveMatrix", false),
	tag("feDiffuseLighting", false),
	tag("feDisplacementMap", false),
	tag("feDistantLight", false),
	tag("feFlood", false),
	tag("feFuncA", false),
	tag("feFuncB", false),
	tag("feFuncG", false),
	tag("feFuncR", false),
	tag("feGaussianBlur", false),
	tag("feImage", false),
	tag("feMerge", false),
	tag("feMergeNode", false),
	tag("feMorphology", false),
	tag("feOffset", false),
	tag("fePointLight", false),
	tag("feSpecularLighting", false),
	tag("feSpotLight", false),
	tag("feTile", false),
	tag("feTurbulence", false),
	tag("fieldset", false),
	tag("figcaption", false),
	tag("figure", false),
	tag("filter", false),
	tag("font", false),
	tag("font-face", false),
	tag("font-face-format", false),
	tag("font-face-name", false),
	tag("font-face-src", false),
	tag("font-face-uri", false),
	tag("footer", false),
	tag("foreignObject", false),
	tag("form", false),
	tag("g", false),
	tag("glyph", false),
	tag("glyphRef", false),
	tag("h1", false),
	tag("h2", false),
	tag("h3", false),
	tag("h4", false),
	tag("h5", false),
	tag("h6", false),
	tag("head", false),
	tag("header", false),
	tag("hgroup", false),
	tag("hkern", false),
	tag("hr", true),
	tag("html", false),
	tag("i", false),
	tag("iframe", false),
	tag("image", false),
	tag("img", true),
	tag("input", true),
	tag("ins", false),
	tag("kbd", false),
	tag("keygen", true),
	tag("label", false),
	tag("legend", false),
	tag("li", false),
	tag("line", true),
	tag("linearGradient", false),
	tag("link", true),
	tag("main", false),
	tag("map", false),
	tag("mark", false),
	tag("marker", false),
	tag("marquee", false),
	tag("mask", false),
	tag("menu", false),
	tag("menuitem", false),
	tag("meta", true),
	tag("metadata", false),
	tag("meter", false),
	tag("missing-glyph", false),
	tag("mpath", false),
	tag("nav", false),
	tag("noscript", false),
	tag("object", false),
	tag("ol", false),
	tag("optgroup", false),
	tag("option", false),
	tag("output", false),
	tag("p", false),
	tag("param", true),
	tag("path", false),
	tag("pattern", false),
	tag("polygon", false),
	tag("polyline", false),
	tag("pre", false),
	tag("progress", false),
	tag("q", false),
	tag("radialGradient", false),
	tag("rect", false),
	tag("rp", false),
	tag("rt", false),
	tag("ruby", false),
	tag("s", false),
	tag("samp", false),
	tag("script", false),
	tag("section", false),
	tag("select", false),
	tag("set", false),
	tag("small", false),
	tag("source", true),
	tag("span", false),
	tag("stop", false),
	tag("strong", false),
	tag("style", false),
	tag("sub", false),
	tag("summary", false),
	tag("sup", false),
	tag("svg", false),
	tag("switch", false),
	tag("symbol", false),
	tag("table", false),
	tag("tbody", false),
	tag("td", false),
	tag("text", false),
	tag("textPath", false),
	tag("textarea", false),
	tag("tfoot", false),
	tag("th", false),
	tag("thead", false),
	tag("time", false),
	tag("title", false),
	tag("tr", false),
	tag("track", true),
	tag("tref", false),
	tag("tspan", false),
	tag("u", false),
	tag("ul", false),
	tag("use", false),
	tag("var", false),
	tag("video", false),
	tag("view", false),
	tag("vkern", false),
	tag("wbr", true),
];

/// Looks up a tag in the built-in registry.
pub fn lookup(name: &str) -> Option<&'static TagSpec> {
	HTML_TAGS.iter().find(|spec| spec.name == name)
}

/// Returns `true` if `name` is a known void tag.
pub fn is_void_tag(name: &str) -> bool {
	lookup(name).is_some_and(|spec| spec.is_void)
}

/// Iterates over the names of all void tags in the registry.
pub fn void_tags() -> impl Iterator<Item = &'static str> {
	HTML_TAGS
		.iter()
		.filter(|spec| spec.is_void)
		.map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	#[rstest]
	fn test_registry_has_no_duplicates() {
		let mut seen = HashSet::new();
		for spec in HTML_TAGS {
			assert!(seen.insert(spec.name), "duplicate tag: {}", spec.name);
		}
	}

	#[rstest]
	#[case("br")]
	#[case("img")]
	#[case("input")]
	#[case("hr")]
	#[case("meta")]
	#[case("link")]
	#[case("wbr")]
	fn test_void_tags(#[case] name: &str) {
		assert!(is_void_tag(name));
	}

	#[rstest]
	#[case("div")]
	#[case("span")]
	#[case("form")]
	#[case("textarea")]
	#[case("menuitem")]
	#[case("svg")]
	fn test_non_void_tags(#[case] name: &str) {
		assert!(lookup(name).is_some());
		assert!(!is_void_tag(name));
	}

	#[rstest]
	fn test_case_is_significant() {
		assert!(lookup("clipPath").is_some());
		assert!(lookup("clippath").is_none());
		assert!(lookup("DIV").is_none());
	}

	#[rstest]
	fn test_hyphenated_svg_names() {
		assert!(lookup("font-face").is_some());
		assert!(lookup("missing-glyph").is_some());
		assert!(lookup("color-profile").is_some());
	}

	#[rstest]
	fn test_unknown_tag_is_not_void() {
		assert!(lookup("blink").is_none());
		assert!(!is_void_tag("blink"));
	}

	#[rstest]
	fn test_void_tag_count() {
		assert_eq!(void_tags().count(), 16);
	}
}
