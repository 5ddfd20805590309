//! Server-side HTML component factories
//!
//! This module provides access to reinhardt-dom: the built-in HTML/SVG tag
//! registry, the factory table built from it, and late injection of
//! specialised components.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt::dom::prelude::*;
//!
//! let table = FactoryTable::html(BuildMode::Production)?;
//! let link = table.create("a", Descriptor::new().attr("href", "/").child("Home"))?;
//! assert_eq!(link.render_to_string(), "<a href=\"/\">Home</a>");
//! # Ok::<(), DomError>(())
//! ```

// Re-export all reinhardt-dom functionality
pub use reinhardt_dom::*;
