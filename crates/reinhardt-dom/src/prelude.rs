//! Convenience re-exports for common usage.
//!
//! ```
//! use reinhardt_dom::prelude::*;
//!
//! let table = FactoryTable::html(BuildMode::Production)?;
//! assert!(table.contains("div"));
//! # Ok::<(), DomError>(())
//! ```

// Error types
pub use crate::error::{DomError, DomResult, ValidationError};

// Settings
pub use crate::config::{BuildMode, CollisionPolicy, DomSettings};

// Elements
pub use crate::element::{Descriptor, DomComponent, IntoNode, Node};

// Factories and table
pub use crate::component::{ComponentClass, ComponentFactory, create_component_class};
pub use crate::controls::inject_form_controls;
pub use crate::table::FactoryTable;
pub use crate::validation::{DescriptorValidator, HtmlValidator};
