//! Descriptors, constructed components and the node tree.
//!
//! A [`Descriptor`] is what callers hand to a factory: ordered attributes and
//! child nodes. A factory turns it into a [`DomComponent`] bound to the
//! factory's tag through [`DomComponent::construct`], the shared base routine
//! every generated constructor delegates to.
//!
//! ## Example
//!
//! ```
//! use reinhardt_dom::element::{Descriptor, DomComponent, IntoNode};
//!
//! let component = DomComponent::construct(
//! 	"div",
//! 	false,
//! 	Descriptor::new().attr("class", "container").child("Hello, World!"),
//! );
//! assert_eq!(
//! 	component.into_node().render_to_string(),
//! 	"<div class=\"container\">Hello, World!</div>"
//! );
//! ```

use std::borrow::Cow;

use crate::util::{push_escaped, renders_attr};

/// An attribute name/value pair.
pub type Attr = (Cow<'static, str>, Cow<'static, str>);

/// Attribute used to identify siblings in a child list. Never rendered.
pub const KEY_ATTR: &str = "key";

/// The argument passed to a component factory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
	attrs: Vec<Attr>,
	children: Vec<Node>,
}

impl Descriptor {
	/// Creates an empty descriptor.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a boolean attribute.
	///
	/// When `value` is true the attribute is added with its own name as the
	/// value (`disabled="disabled"`); otherwise nothing is added.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Sets the sibling key.
	pub fn key(self, key: impl Into<Cow<'static, str>>) -> Self {
		self.attr(KEY_ATTR, key)
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_node()));
		self
	}

	/// Returns the value of the last attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.rev()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns `true` if an attribute named `name` is present.
	pub fn has_attr(&self, name: &str) -> bool {
		self.attrs.iter().any(|(n, _)| n == name)
	}

	/// Replaces every attribute named `name` with a single value.
	pub fn set_attr(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		let name = name.into();
		self.attrs.retain(|(n, _)| *n != name);
		self.attrs.push((name, value.into()));
	}

	/// Removes every attribute named `name` and returns the last value.
	pub fn take_attr(&mut self, name: &str) -> Option<Cow<'static, str>> {
		let mut taken = None;
		self.attrs.retain_mut(|(n, v)| {
			if n == name {
				taken = Some(std::mem::take(v));
				false
			} else {
				true
			}
		});
		taken
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[Attr] {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns `true` if any child produces content.
	pub fn has_children(&self) -> bool {
		self.children.iter().any(|c| !c.is_blank())
	}

	/// Consumes the descriptor and returns `(attrs, children)`.
	pub fn into_parts(self) -> (Vec<Attr>, Vec<Node>) {
		(self.attrs, self.children)
	}
}

/// A constructed DOM component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomComponent {
	tag: Cow<'static, str>,
	is_void: bool,
	attrs: Vec<Attr>,
	children: Vec<Node>,
}

impl DomComponent {
	/// Base construction routine shared by every component class.
	///
	/// Void components never keep children. When validation is disabled a
	/// descriptor can still carry them; they are dropped here, with a warning
	/// if any of them would have rendered something.
	pub fn construct(
		tag: impl Into<Cow<'static, str>>,
		is_void: bool,
		descriptor: Descriptor,
	) -> Self {
		let tag = tag.into();
		let (attrs, mut children) = descriptor.into_parts();
		if is_void {
			let dropped = children.iter().filter(|c| !c.is_blank()).count();
			if dropped > 0 {
				tracing::warn!(
					"dropping {} child node(s) passed to void element <{}>",
					dropped,
					tag
				);
			}
			children.clear();
		}
		Self {
			tag,
			is_void,
			attrs,
			children,
		}
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[Attr] {
		&self.attrs
	}

	/// Returns the value of the last attribute named `name`.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.rev()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the sibling key, if any.
	pub fn key(&self) -> Option<&str> {
		self.attr(KEY_ATTR)
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Renders the component to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);

		for (name, value) in &self.attrs {
			let name: &str = name.as_ref();
			if name == KEY_ATTR {
				continue;
			}
			if !renders_attr(name, value) {
				continue;
			}

			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			push_escaped(output, value);
			output.push('"');
		}

		if self.is_void {
			output.push_str(" />");
		} else {
			output.push('>');
			for child in &self.children {
				child.render_into(output);
			}
			output.push_str("</");
			output.push_str(&self.tag);
			output.push('>');
		}
	}
}

/// A renderable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A constructed component.
	Component(DomComponent),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several nodes without a wrapper element.
	Fragment(Vec<Node>),
	/// Renders nothing.
	Empty,
}

impl Node {
	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_node()).collect())
	}

	/// Returns the component if this node is one.
	pub fn as_component(&self) -> Option<&DomComponent> {
		match self {
			Node::Component(component) => Some(component),
			_ => None,
		}
	}

	/// Returns `true` if the node renders nothing.
	pub fn is_blank(&self) -> bool {
		match self {
			Node::Empty => true,
			Node::Fragment(children) => children.iter().all(Node::is_blank),
			Node::Component(_) | Node::Text(_) => false,
		}
	}

	/// Renders the node to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Node::Component(component) => component.render_into(output),
			Node::Text(text) => push_escaped(output, text),
			Node::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			Node::Empty => {}
		}
	}
}

/// Conversion into a [`Node`].
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for DomComponent {
	fn into_node(self) -> Node {
		Node::Component(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Fragment(self.into_iter().map(|v| v.into_node()).collect())
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::Fragment(vec![self.0.into_node(), self.1.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::Fragment(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::capture_warnings;
	use rstest::rstest;

	fn element(tag: &'static str, descriptor: Descriptor) -> DomComponent {
		DomComponent::construct(tag, crate::tags::is_void_tag(tag), descriptor)
	}

	#[rstest]
	fn test_construct_keeps_descriptor() {
		let descriptor = Descriptor::new()
			.attr("class", "container")
			.attr("id", "main")
			.child("Hello");
		let component = DomComponent::construct("div", false, descriptor.clone());
		let (attrs, children) = descriptor.into_parts();
		assert_eq!(component.tag_name(), "div");
		assert_eq!(component.attrs(), attrs.as_slice());
		assert_eq!(component.child_nodes(), children.as_slice());
	}

	#[rstest]
	fn test_render_simple_element() {
		let node = element("div", Descriptor::new()).into_node();
		assert_eq!(node.render_to_string(), "<div></div>");
	}

	#[rstest]
	fn test_render_void_element() {
		let node = element("br", Descriptor::new()).into_node();
		assert_eq!(node.render_to_string(), "<br />");
	}

	#[rstest]
	fn test_void_construct_drops_children() {
		let descriptor = Descriptor::new().child("oops").child(()).child("again");

		let (component, warnings) =
			capture_warnings(|| DomComponent::construct("br", true, descriptor));

		assert!(component.child_nodes().is_empty());
		assert_eq!(component.render_to_string(), "<br />");
		assert_eq!(warnings.len(), 1);
		assert!(warnings[0].contains("dropping 2 child node(s) passed to void element <br>"));
	}

	#[rstest]
	#[case(Descriptor::new().child(()))]
	#[case(Descriptor::new().child(()).child(Node::fragment(Vec::<Node>::new())))]
	#[case(Descriptor::new().child(None::<String>).child(Node::fragment([(), ()])))]
	fn test_void_construct_clears_blank_children_silently(#[case] descriptor: Descriptor) {
		let (component, warnings) =
			capture_warnings(|| DomComponent::construct("br", true, descriptor));

		assert!(component.child_nodes().is_empty());
		assert_eq!(component, DomComponent::construct("br", true, Descriptor::new()));
		assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
	}

	#[rstest]
	fn test_render_nested_children() {
		let node = element(
			"div",
			Descriptor::new()
				.child("Hello, ")
				.child(element("strong", Descriptor::new().child("World"))),
		)
		.into_node();
		assert_eq!(
			node.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		let node = Node::text("<script>alert('xss')</script>");
		assert_eq!(
			node.render_to_string(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_render_attr_escaping() {
		let node = element("a", Descriptor::new().attr("title", "\"quoted\" & more")).into_node();
		assert_eq!(
			node.render_to_string(),
			"<a title=\"&quot;quoted&quot; &amp; more\"></a>"
		);
	}

	#[rstest]
	fn test_key_not_rendered() {
		let component = element("li", Descriptor::new().key("item-1").child("One"));
		assert_eq!(component.key(), Some("item-1"));
		assert_eq!(component.render_to_string(), "<li>One</li>");
	}

	#[rstest]
	#[case("", false)]
	#[case("false", false)]
	#[case("0", false)]
	#[case("true", true)]
	#[case("disabled", true)]
	fn test_boolean_attr_rendering(#[case] value: &'static str, #[case] rendered: bool) {
		let html = element("button", Descriptor::new().attr("disabled", value)).render_to_string();
		assert_eq!(html.contains("disabled"), rendered);
	}

	#[rstest]
	fn test_non_boolean_attr_empty_string_rendered() {
		let html = element("input", Descriptor::new().attr("placeholder", "")).render_to_string();
		assert_eq!(html, "<input placeholder=\"\" />");
	}

	#[rstest]
	fn test_bool_attr_builder() {
		let descriptor = Descriptor::new()
			.bool_attr("checked", true)
			.bool_attr("disabled", false);
		assert_eq!(descriptor.get_attr("checked"), Some("checked"));
		assert!(!descriptor.has_attr("disabled"));
	}

	#[rstest]
	fn test_get_attr_last_wins() {
		let descriptor = Descriptor::new().attr("class", "a").attr("class", "b");
		assert_eq!(descriptor.get_attr("class"), Some("b"));
	}

	#[rstest]
	fn test_set_and_take_attr() {
		let mut descriptor = Descriptor::new().attr("method", "POST").attr("method", "get");
		descriptor.set_attr("method", "post");
		assert_eq!(descriptor.attrs().len(), 1);
		assert_eq!(descriptor.take_attr("method").as_deref(), Some("post"));
		assert!(!descriptor.has_attr("method"));
		assert_eq!(descriptor.take_attr("method"), None);
	}

	#[rstest]
	fn test_has_children_ignores_blank_nodes() {
		assert!(!Descriptor::new().child(()).has_children());
		assert!(!Descriptor::new().child(Node::fragment([(), ()])).has_children());
		assert!(!Descriptor::new().child(None::<String>).has_children());
		assert!(Descriptor::new().child("text").has_children());
	}

	#[rstest]
	fn test_fragment_and_tuple_render() {
		assert_eq!(Node::fragment(["One", "Two"]).render_to_string(), "OneTwo");
		assert_eq!(("Hello, ", "World!").into_node().render_to_string(), "Hello, World!");
		assert_eq!(vec!["A", "B", "C"].into_node().render_to_string(), "ABC");
	}
}
