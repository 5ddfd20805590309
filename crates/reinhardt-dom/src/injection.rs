//! Late registration of component factories.
//!
//! Injection merges extra factories into a live [`FactoryTable`]. It is meant
//! for bootstrap code that replaces a default tag with a specialised
//! component (see [`crate::controls`]) or adds custom tags. Entries are never
//! removed.
//!
//! What happens when an injected tag already exists is decided by the
//! table's [`CollisionPolicy`]. With `Override` the injected factory wins;
//! with `Reject` the whole batch is refused and the table is left untouched.

use crate::component::ComponentFactory;
use crate::config::CollisionPolicy;
use crate::error::{DomError, DomResult};
use crate::table::FactoryTable;

/// Injection handle borrowed from a [`FactoryTable`].
#[derive(Debug, Clone, Copy)]
pub struct Injection<'a> {
	table: &'a FactoryTable,
}

impl<'a> Injection<'a> {
	pub(crate) fn new(table: &'a FactoryTable) -> Self {
		Self { table }
	}

	/// Merges `extra` into the table.
	///
	/// The batch is applied under a single write lock, so readers see either
	/// none or all of it. Injected factories are not validated here; a
	/// factory that misbehaves fails when it is called.
	///
	/// # Errors
	///
	/// Returns [`DomError::TagCollision`] listing every already-registered
	/// tag when the table's policy is [`CollisionPolicy::Reject`].
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_dom::component::create_component_class;
	/// use reinhardt_dom::config::BuildMode;
	/// use reinhardt_dom::table::FactoryTable;
	///
	/// let table = FactoryTable::html(BuildMode::Production)?;
	/// let custom = create_component_class(false, "x-panel", BuildMode::Production);
	/// table
	/// 	.injection()
	/// 	.inject_component_classes([("x-panel", custom)])?;
	/// assert!(table.contains("x-panel"));
	/// # Ok::<(), reinhardt_dom::error::DomError>(())
	/// ```
	pub fn inject_component_classes<I, K>(&self, extra: I) -> DomResult<()>
	where
		I: IntoIterator<Item = (K, ComponentFactory)>,
		K: Into<String>,
	{
		let extra: Vec<(String, ComponentFactory)> = extra
			.into_iter()
			.map(|(tag, factory)| (tag.into(), factory))
			.collect();

		let mut entries = self.table.entries.write();

		if self.table.policy() == CollisionPolicy::Reject {
			let mut collisions: Vec<String> = extra
				.iter()
				.filter(|(tag, _)| entries.contains_key(tag))
				.map(|(tag, _)| tag.clone())
				.collect();
			if !collisions.is_empty() {
				collisions.sort();
				collisions.dedup();
				tracing::warn!(
					"refusing injection of already registered tags: {}",
					collisions.join(", ")
				);
				return Err(DomError::TagCollision(collisions));
			}
		}

		for (tag, factory) in extra {
			if entries.insert(tag.clone(), factory).is_some() {
				tracing::debug!("injected factory overrides <{}>", tag);
			} else {
				tracing::debug!("injected factory for new tag <{}>", tag);
			}
		}

		Ok(())
	}
}
