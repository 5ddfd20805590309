//! Error types for the DOM factory system.
//!
//! Factory creation and table construction from the built-in registry never
//! fail. Errors surface when a factory is invoked with a descriptor that the
//! development-mode validator rejects, when a tag is looked up that the table
//! does not know, or when injection is refused by the collision policy.

use thiserror::Error;

/// Errors that can occur while building or using a factory table.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// A descriptor was rejected before construction.
	#[error("Invalid descriptor for <{tag}>: {source}")]
	Validation {
		/// Tag of the factory that was invoked.
		tag: String,
		/// The rule that failed.
		#[source]
		source: ValidationError,
	},

	/// No factory is registered for the tag.
	#[error("Unknown tag: {0}")]
	UnknownTag(String),

	/// The same tag appears twice in a registry being folded into a table.
	#[error("Duplicate tag in registry: {0}")]
	DuplicateTag(String),

	/// Injection was refused because the tags already exist in the table.
	#[error("Tag collision on injection: {}", .0.join(", "))]
	TagCollision(Vec<String>),

	/// A setting could not be parsed.
	#[error("Invalid setting {key}: {value}")]
	InvalidSetting {
		/// Setting name (environment variable or field).
		key: String,
		/// The rejected value.
		value: String,
	},
}

/// Descriptor validation failures.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// A void element was given child content.
	#[error("Void element <{0}> cannot have children")]
	VoidChildren(String),

	/// A `data-*` or `aria-*` attribute name does not follow the naming rules.
	#[error("Invalid attribute name '{name}': {reason}")]
	InvalidAttributeName {
		/// The offending attribute name.
		name: String,
		/// Which pattern was violated.
		reason: &'static str,
	},

	/// An interactive element contains another interactive element.
	#[error("Interactive element <{inner}> cannot be nested inside another interactive element <{outer}>")]
	NestedInteractive {
		/// The enclosing element.
		outer: String,
		/// The nested element.
		inner: String,
	},

	/// A required attribute is missing.
	#[error("Element <{tag}> requires '{attr}' attribute")]
	MissingAttribute {
		/// Element tag.
		tag: String,
		/// Name of the missing attribute.
		attr: &'static str,
	},

	/// A `<textarea>` was given both a value attribute and children.
	#[error("Element <textarea> accepts either a value attribute or children, not both")]
	TextareaValueAndChildren,
}

/// Result type alias for DOM factory operations.
pub type DomResult<T> = Result<T, DomError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unknown_tag_error() {
		let error = DomError::UnknownTag("blink".to_string());
		assert_eq!(error.to_string(), "Unknown tag: blink");
	}

	#[rstest]
	fn test_validation_error_display() {
		let error = DomError::Validation {
			tag: "br".to_string(),
			source: ValidationError::VoidChildren("br".to_string()),
		};
		assert_eq!(
			error.to_string(),
			"Invalid descriptor for <br>: Void element <br> cannot have children"
		);
	}

	#[rstest]
	fn test_tag_collision_lists_all_tags() {
		let error = DomError::TagCollision(vec!["form".to_string(), "textarea".to_string()]);
		assert_eq!(
			error.to_string(),
			"Tag collision on injection: form, textarea"
		);
	}

	#[rstest]
	fn test_missing_attribute_display() {
		let error = ValidationError::MissingAttribute {
			tag: "img".to_string(),
			attr: "alt",
		};
		assert_eq!(error.to_string(), "Element <img> requires 'alt' attribute");
	}
}
