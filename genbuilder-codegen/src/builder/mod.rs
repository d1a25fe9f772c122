//! Text emission for generated sources.
//!
//! AST nodes implement [`Renderable`] and describe themselves as
//! [`CodeFragment`]s; [`CodeBuilder`] writes the fragments out with
//! tab indentation.

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
