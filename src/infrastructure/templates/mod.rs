//! HTML page templates.
//!
//! Pages are plain HTML files with literal placeholder tokens, loaded from the
//! configured template directory at render time.
//!
//! - [`TemplateStore`] - Locates and reads template files
//! - [`Bindings`] / [`substitute`] - Token replacement with a per-template [`Substitution`] policy

pub mod store;
pub mod substitution;

pub use store::{TemplateKind, TemplateStore};
pub use substitution::{Bindings, Substitution, substitute};
