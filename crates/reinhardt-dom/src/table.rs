//! The factory table.
//!
//! A [`FactoryTable`] maps tag names to [`ComponentFactory`]s. It is built
//! once by folding a registry through a factory function and afterwards only
//! changes through [`Injection`]. The table is an ordinary owned value;
//! share it with `Arc<FactoryTable>` and every holder observes injected
//! entries.
//!
//! ## Example
//!
//! ```
//! use reinhardt_dom::config::BuildMode;
//! use reinhardt_dom::element::Descriptor;
//! use reinhardt_dom::table::FactoryTable;
//!
//! let table = FactoryTable::html(BuildMode::Production)?;
//! let div = table.create("div", Descriptor::new().child("Hello"))?;
//! assert_eq!(div.render_to_string(), "<div>Hello</div>");
//! # Ok::<(), reinhardt_dom::error::DomError>(())
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use parking_lot::RwLock;

use crate::component::{ComponentFactory, create_component_class};
use crate::config::{BuildMode, CollisionPolicy, DomSettings};
use crate::element::{Descriptor, DomComponent};
use crate::error::{DomError, DomResult};
use crate::injection::Injection;
use crate::tags::{HTML_TAGS, TagSpec};

/// Folds `registry` through `factory_fn` into a map with one entry per
/// record.
///
/// # Errors
///
/// Returns [`DomError::DuplicateTag`] if a name occurs twice.
pub fn build_factory_table<F>(
	registry: &[TagSpec],
	factory_fn: F,
) -> DomResult<HashMap<String, ComponentFactory>>
where
	F: Fn(bool, &'static str) -> ComponentFactory,
{
	registry
		.iter()
		.try_fold(HashMap::with_capacity(registry.len()), |mut map, spec| {
			match map.entry(spec.name.to_string()) {
				Entry::Occupied(_) => return Err(DomError::DuplicateTag(spec.name.to_string())),
				Entry::Vacant(slot) => {
					slot.insert(factory_fn(spec.is_void, spec.name));
				}
			}
			Ok(map)
		})
}

/// Tag name to factory mapping, safe to share across threads.
#[derive(Debug)]
pub struct FactoryTable {
	pub(crate) entries: RwLock<HashMap<String, ComponentFactory>>,
	mode: BuildMode,
	policy: CollisionPolicy,
}

impl FactoryTable {
	/// Builds a table from `registry` and `factory_fn`.
	///
	/// `mode` is recorded for diagnostics and for factories injected through
	/// helpers that need to match the table; it does not change what
	/// `factory_fn` returns.
	///
	/// # Errors
	///
	/// Returns [`DomError::DuplicateTag`] if the registry repeats a name.
	pub fn build<F>(
		registry: &[TagSpec],
		factory_fn: F,
		mode: BuildMode,
		policy: CollisionPolicy,
	) -> DomResult<Self>
	where
		F: Fn(bool, &'static str) -> ComponentFactory,
	{
		let entries = build_factory_table(registry, factory_fn)?;
		tracing::debug!(
			"built factory table with {} tags (mode: {})",
			entries.len(),
			mode
		);
		Ok(Self {
			entries: RwLock::new(entries),
			mode,
			policy,
		})
	}

	/// Builds the default HTML/SVG table.
	///
	/// # Errors
	///
	/// Only fails if the built-in registry contains a duplicate, which its
	/// tests rule out.
	pub fn html(mode: BuildMode) -> DomResult<Self> {
		Self::from_settings(&DomSettings::new(mode))
	}

	/// Builds the default HTML/SVG table from settings.
	///
	/// # Errors
	///
	/// See [`FactoryTable::html`].
	pub fn from_settings(settings: &DomSettings) -> DomResult<Self> {
		let mode = settings.mode;
		Self::build(
			HTML_TAGS,
			|is_void, tag| create_component_class(is_void, tag, mode),
			mode,
			settings.collision_policy,
		)
	}

	/// Returns the factory registered for `tag`.
	pub fn get(&self, tag: &str) -> Option<ComponentFactory> {
		self.entries.read().get(tag).cloned()
	}

	/// Constructs a component with the factory registered for `tag`.
	///
	/// The read lock is released before the factory runs.
	///
	/// # Errors
	///
	/// Returns [`DomError::UnknownTag`] if nothing is registered for `tag`,
	/// otherwise whatever the factory returns.
	pub fn create(&self, tag: &str, descriptor: Descriptor) -> DomResult<DomComponent> {
		let factory = self
			.get(tag)
			.ok_or_else(|| DomError::UnknownTag(tag.to_string()))?;
		factory.call(descriptor)
	}

	/// Returns `true` if a factory is registered for `tag`.
	pub fn contains(&self, tag: &str) -> bool {
		self.entries.read().contains_key(tag)
	}

	/// Returns all registered tag names, sorted.
	pub fn tags(&self) -> Vec<String> {
		let mut tags: Vec<String> = self.entries.read().keys().cloned().collect();
		tags.sort();
		tags
	}

	/// Returns the number of registered tags.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns true if no tags are registered.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Build mode the table was created with.
	pub fn mode(&self) -> BuildMode {
		self.mode
	}

	/// Collision policy applied by [`Injection`].
	pub fn policy(&self) -> CollisionPolicy {
		self.policy
	}

	/// Returns the injection handle for this table.
	pub fn injection(&self) -> Injection<'_> {
		Injection::new(self)
	}
}
