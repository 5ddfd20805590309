//! HTML/SVG component factories for the Reinhardt framework.
//!
//! This crate maps every known HTML and SVG tag to a factory that constructs
//! a [`DomComponent`] from a [`Descriptor`], and lets bootstrap code inject
//! replacement or additional factories afterwards.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use reinhardt_dom::prelude::*;
//!
//! let table = Arc::new(FactoryTable::html(BuildMode::Development)?);
//! inject_form_controls(&table)?;
//!
//! let form = table.create(
//! 	"form",
//! 	Descriptor::new()
//! 		.attr("action", "/profile")
//! 		.child(table.create("textarea", Descriptor::new().attr("value", "Hi"))?)
//! 		.child(table.create("br", Descriptor::new())?),
//! )?;
//! assert_eq!(
//! 	form.render_to_string(),
//! 	"<form action=\"/profile\" method=\"get\"><textarea>Hi</textarea><br /></form>"
//! );
//! # Ok::<(), reinhardt_dom::DomError>(())
//! ```
//!
//! # Architecture
//!
//! - [`tags`] - the built-in `(name, void)` registry
//! - [`component`] - component classes and [`ComponentFactory`]
//! - [`table`] - [`FactoryTable`] and the registry fold
//! - [`injection`] - late registration into a live table
//! - [`validation`] - descriptor checks used in development mode
//! - [`controls`] - specialised `form` and `textarea` factories
//! - [`element`] - descriptors, components and HTML rendering
//! - [`util`] - attribute and escaping helpers for rendering
//! - [`config`] - build mode and collision policy settings
//!
//! # Build modes
//!
//! [`BuildMode::Development`] factories validate descriptors (void elements
//! with children, malformed `data-*`/`aria-*` names, nested interactive
//! elements, `img` without `src`/`alt`) and fail with
//! [`DomError::Validation`]. [`BuildMode::Production`] factories skip the
//! checks; for valid descriptors both produce the same output.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod component;
pub mod config;
pub mod controls;
pub mod element;
pub mod error;
pub mod injection;
pub mod prelude;
pub mod table;
pub mod tags;
#[cfg(test)]
mod testing;
pub mod util;
pub mod validation;

// Re-export commonly used types at crate root
pub use component::{ComponentClass, ComponentFactory, create_component_class};
pub use config::{BuildMode, CollisionPolicy, DomSettings};
pub use element::{Descriptor, DomComponent, IntoNode, Node};
pub use error::{DomError, DomResult, ValidationError};
pub use injection::Injection;
pub use table::{FactoryTable, build_factory_table};
pub use tags::{HTML_TAGS, TagSpec};
