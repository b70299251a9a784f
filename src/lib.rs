//! This crate provides the support code for pages hosting a list of math-expression editing
//! fields: a macro [`expand`]er rewriting the custom macros of the page (`\prop`, `\variable`)
//! into plain LaTeX, the construction of the fields' context menus, available through the
//! [`menu`] module, and the [`EquationList`] tracking the fields and serializing their content.
//!
//! The editor widget itself is not part of this crate. It is reached through the
//! [`MathField`](fields::MathField) and [`MarkupRenderer`](fields::MarkupRenderer) traits.

pub mod config;
pub mod expander;
pub mod fields;
pub mod macros;
pub mod menu;

#[doc(inline)]
pub use config::EditorConfig;
#[doc(inline)]
pub use expander::{expand, expand_in, ExpandError, Storage};
#[doc(inline)]
pub use fields::EquationList;
#[doc(inline)]
pub use macros::{MacroDef, MacroTable};
#[doc(inline)]
pub use menu::{build_menu, MenuEntry};
