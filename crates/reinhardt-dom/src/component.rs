//! Component classes and their convenience factories.
//!
//! A [`ComponentClass`] is bound to one `(tag, is_void)` pair for its whole
//! life. Wrapping it in a [`ComponentFactory`] lets callers construct
//! instances function-style. Development-mode factories run a
//! [`DescriptorValidator`] before delegating to the class; production-mode
//! factories skip that step and otherwise behave identically.
//!
//! ## Example
//!
//! ```
//! use reinhardt_dom::component::create_component_class;
//! use reinhardt_dom::config::BuildMode;
//! use reinhardt_dom::element::Descriptor;
//!
//! let br = create_component_class(true, "br", BuildMode::Development);
//! assert!(br.is_void());
//! assert!(br.call(Descriptor::new().child("text")).is_err());
//!
//! let br = create_component_class(true, "br", BuildMode::Production);
//! assert_eq!(br.call(Descriptor::new()).unwrap().render_to_string(), "<br />");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::config::BuildMode;
use crate::element::{Descriptor, DomComponent};
use crate::error::{DomError, DomResult};
use crate::validation::{DescriptorValidator, HtmlValidator};

type FactoryFn = dyn Fn(Descriptor) -> DomResult<DomComponent> + Send + Sync;

/// A component type bound to one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentClass {
	tag: Cow<'static, str>,
	is_void: bool,
	display_name: Cow<'static, str>,
}

impl ComponentClass {
	/// Creates a class bound to `tag`. The display name defaults to the tag.
	pub fn new(tag: impl Into<Cow<'static, str>>, is_void: bool) -> Self {
		let tag = tag.into();
		Self {
			display_name: tag.clone(),
			tag,
			is_void,
		}
	}

	/// Overrides the diagnostic name.
	pub fn with_display_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
		self.display_name = name.into();
		self
	}

	/// Constructs an instance through the base routine.
	pub fn construct(&self, descriptor: Descriptor) -> DomComponent {
		DomComponent::construct(self.tag.clone(), self.is_void, descriptor)
	}

	/// Returns the bound tag.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the bound void flag.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Name shown in diagnostics.
	pub fn display_name(&self) -> &str {
		&self.display_name
	}
}

/// Callable factory producing [`DomComponent`]s.
///
/// Cloning is cheap; clones share the same underlying function and compare
/// equal under [`ComponentFactory::ptr_eq`].
#[derive(Clone)]
pub struct ComponentFactory {
	tag: Cow<'static, str>,
	is_void: bool,
	validated: bool,
	call: Arc<FactoryFn>,
}

impl ComponentFactory {
	/// Wraps a class in an unvalidated convenience factory.
	pub fn from_class(class: ComponentClass) -> Self {
		let tag = class.tag.clone();
		let is_void = class.is_void;
		Self {
			tag,
			is_void,
			validated: false,
			call: Arc::new(move |descriptor: Descriptor| -> DomResult<DomComponent> {
				Ok(class.construct(descriptor))
			}),
		}
	}

	/// Creates a factory from an arbitrary function.
	///
	/// Used for specialised components injected over the defaults. The
	/// function is trusted to honour `tag` and `is_void`.
	pub fn from_fn<F>(tag: impl Into<Cow<'static, str>>, is_void: bool, f: F) -> Self
	where
		F: Fn(Descriptor) -> DomResult<DomComponent> + Send + Sync + 'static,
	{
		Self {
			tag: tag.into(),
			is_void,
			validated: false,
			call: Arc::new(f),
		}
	}

	/// Wraps this factory so `validator` runs before every call.
	pub fn with_validation(self, validator: Arc<dyn DescriptorValidator>) -> Self {
		let inner = self.call;
		let tag = self.tag.clone();
		let is_void = self.is_void;
		Self {
			tag: self.tag,
			is_void,
			validated: true,
			call: Arc::new(move |descriptor: Descriptor| -> DomResult<DomComponent> {
				if let Err(source) = validator.validate(&tag, is_void, &descriptor) {
					tracing::debug!("rejected descriptor for <{}>: {}", tag, source);
					return Err(DomError::Validation {
						tag: tag.to_string(),
						source,
					});
				}
				inner(descriptor)
			}),
		}
	}

	/// Constructs a component from `descriptor`.
	///
	/// # Errors
	///
	/// Returns [`DomError::Validation`] if the factory validates and the
	/// descriptor is rejected, or whatever a custom factory function returns.
	pub fn call(&self, descriptor: Descriptor) -> DomResult<DomComponent> {
		(self.call)(descriptor)
	}

	/// Returns the tag this factory was created for.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the void flag this factory was created with.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns `true` if descriptors are validated before construction.
	pub fn is_validated(&self) -> bool {
		self.validated
	}

	/// Returns `true` if both factories share the same function.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.call, &other.call)
	}
}

impl fmt::Debug for ComponentFactory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentFactory")
			.field("tag", &self.tag)
			.field("is_void", &self.is_void)
			.field("validated", &self.validated)
			.field("call", &"<closure>")
			.finish()
	}
}

/// Creates the factory for one registry entry.
///
/// `mode` decides whether the factory is wrapped with [`HtmlValidator`].
pub fn create_component_class(
	is_void: bool,
	tag: impl Into<Cow<'static, str>>,
	mode: BuildMode,
) -> ComponentFactory {
	let factory = ComponentFactory::from_class(ComponentClass::new(tag, is_void));
	if mode.validates() {
		factory.with_validation(Arc::new(HtmlValidator))
	} else {
		factory
	}
}
