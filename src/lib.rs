//! # Reinhardt
//!
//! Server-side HTML component factories for the Reinhardt framework.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `dom` - HTML/SVG tag registry, component factories and injection
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt::prelude::*;
//!
//! let table = FactoryTable::html(BuildMode::Development)?;
//! let list = table.create(
//! 	"ul",
//! 	Descriptor::new().child(table.create("li", Descriptor::new().child("One"))?),
//! )?;
//! assert_eq!(list.render_to_string(), "<ul><li>One</li></ul>");
//! # Ok::<(), DomError>(())
//! ```

#[cfg(feature = "dom")]
pub mod dom;

/// Prelude module for convenient imports
pub mod prelude {
	#[cfg(feature = "dom")]
	pub use reinhardt_dom::prelude::*;
}
