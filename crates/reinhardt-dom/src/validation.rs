//! Descriptor validation applied by development-mode factories.
//!
//! ## Rules
//!
//! 1. **Void elements**: `br`, `img`, `input`, ... cannot have children
//! 2. **Attributes**: `data-*` and `aria-*` names must follow naming conventions
//! 3. **Nesting**: interactive elements cannot contain other interactive elements
//! 4. **Required attributes**: `img` must have `src` and `alt`
//!
//! Child lists that contain several components without a `key` are reported
//! with a warning but not rejected.

use crate::element::{Descriptor, Node};
use crate::error::ValidationError;

/// Elements that may not contain one another.
pub const INTERACTIVE_TAGS: &[&str] = &["a", "button", "label", "select", "textarea"];

/// Checks a descriptor before it reaches the base construction routine.
pub trait DescriptorValidator: Send + Sync {
	/// Validates `descriptor` for a component bound to `tag`.
	fn validate(&self, tag: &str, is_void: bool, descriptor: &Descriptor)
	-> Result<(), ValidationError>;
}

/// The default HTML validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlValidator;

impl DescriptorValidator for HtmlValidator {
	fn validate(
		&self,
		tag: &str,
		is_void: bool,
		descriptor: &Descriptor,
	) -> Result<(), ValidationError> {
		if is_void && descriptor.has_children() {
			return Err(ValidationError::VoidChildren(tag.to_string()));
		}

		for (name, _) in descriptor.attrs() {
			validate_attribute_name(name)?;
		}

		if INTERACTIVE_TAGS.contains(&tag) {
			validate_interactive_nesting(tag, descriptor.child_nodes())?;
		}

		validate_required_attributes(tag, descriptor)?;
		warn_unkeyed_siblings(tag, descriptor.child_nodes());

		Ok(())
	}
}

/// Validates `data-*` and `aria-*` attribute names.
///
/// - `data-*` must match `data-[a-z][a-z0-9-]*`
/// - `aria-*` must match `aria-[a-z-]+`
pub fn validate_attribute_name(name: &str) -> Result<(), ValidationError> {
	if let Some(suffix) = name.strip_prefix("data-") {
		let valid = suffix.chars().next().is_some_and(|c| c.is_ascii_lowercase())
			&& suffix
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
		if !valid {
			return Err(ValidationError::InvalidAttributeName {
				name: name.to_string(),
				reason: "must match pattern data-[a-z][a-z0-9-]*",
			});
		}
	}

	if let Some(suffix) = name.strip_prefix("aria-") {
		if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
			return Err(ValidationError::InvalidAttributeName {
				name: name.to_string(),
				reason: "must match pattern aria-[a-z-]+",
			});
		}
	}

	Ok(())
}

fn validate_interactive_nesting(outer: &str, children: &[Node]) -> Result<(), ValidationError> {
	for child in children {
		match child {
			Node::Component(component) => {
				if INTERACTIVE_TAGS.contains(&component.tag_name()) {
					return Err(ValidationError::NestedInteractive {
						outer: outer.to_string(),
						inner: component.tag_name().to_string(),
					});
				}
				validate_interactive_nesting(outer, component.child_nodes())?;
			}
			Node::Fragment(nodes) => validate_interactive_nesting(outer, nodes)?,
			Node::Text(_) | Node::Empty => {}
		}
	}
	Ok(())
}

fn validate_required_attributes(tag: &str, descriptor: &Descriptor) -> Result<(), ValidationError> {
	if tag == "img" {
		for attr in ["src", "alt"] {
			if !descriptor.has_attr(attr) {
				return Err(ValidationError::MissingAttribute {
					tag: tag.to_string(),
					attr,
				});
			}
		}
	}
	Ok(())
}

fn warn_unkeyed_siblings(tag: &str, children: &[Node]) {
	for child in children {
		let Node::Fragment(siblings) = child else {
			continue;
		};
		let components: Vec<_> = siblings.iter().filter_map(Node::as_component).collect();
		if components.len() > 1 && components.iter().any(|c| c.key().is_none()) {
			tracing::warn!(
				"each child in a list passed to <{}> should have a unique key",
				tag
			);
		}
	}
}
