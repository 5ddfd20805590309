//! Specialised form controls injected over the default factories.
//!
//! The registry's `form` and `textarea` entries produce plain elements.
//! [`inject_form_controls`] replaces them with factories that normalise
//! their descriptors first:
//!
//! - `textarea`: a `value` (or `defaultValue`) attribute becomes the
//!   element's text content. Attribute names are matched exactly, so
//!   `default_value` or `defaultvalue` are left on the element untouched.
//! - `form`: `method` defaults to `get` and is lower-cased.

use std::sync::Arc;

use crate::component::{ComponentClass, ComponentFactory};
use crate::config::BuildMode;
use crate::element::{Descriptor, Node};
use crate::error::{DomError, DomResult, ValidationError};
use crate::table::FactoryTable;
use crate::validation::HtmlValidator;

fn with_mode(factory: ComponentFactory, mode: BuildMode) -> ComponentFactory {
	if mode.validates() {
		factory.with_validation(Arc::new(HtmlValidator))
	} else {
		factory
	}
}

/// Factory for `<textarea>`.
///
/// `value` takes precedence over `defaultValue`. A descriptor carrying a
/// value attribute and children is rejected in every mode.
pub fn textarea_factory(mode: BuildMode) -> ComponentFactory {
	let class = ComponentClass::new("textarea", false);
	let factory = ComponentFactory::from_fn("textarea", false, move |mut descriptor: Descriptor| {
		let value = descriptor.take_attr("value");
		let default_value = descriptor.take_attr("defaultValue");
		if let Some(text) = value.or(default_value) {
			if descriptor.has_children() {
				return Err(DomError::Validation {
					tag: "textarea".to_string(),
					source: ValidationError::TextareaValueAndChildren,
				});
			}
			descriptor = descriptor.child(Node::Text(text));
		}
		Ok(class.construct(descriptor))
	});
	with_mode(factory, mode)
}

/// Factory for `<form>`.
pub fn form_factory(mode: BuildMode) -> ComponentFactory {
	let class = ComponentClass::new("form", false);
	let factory = ComponentFactory::from_fn("form", false, move |mut descriptor: Descriptor| {
		let method = descriptor
			.get_attr("method")
			.map(str::to_ascii_lowercase)
			.unwrap_or_else(|| "get".to_string());
		descriptor.set_attr("method", method);
		Ok(class.construct(descriptor))
	});
	with_mode(factory, mode)
}

/// Injects the `form` and `textarea` controls into `table`, matching the
/// table's build mode.
///
/// # Errors
///
/// Returns [`DomError::TagCollision`] if the table rejects collisions and
/// still holds its default `form`/`textarea` entries.
pub fn inject_form_controls(table: &FactoryTable) -> DomResult<()> {
	let mode = table.mode();
	table.injection().inject_component_classes([
		("form", form_factory(mode)),
		("textarea", textarea_factory(mode)),
	])
}
