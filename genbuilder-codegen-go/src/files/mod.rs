//! Generated Go files.

pub use genbuilder_core::GENERATED_HEADER;

mod builder_go;
mod immutable_go;

pub use builder_go::BuilderGo;
pub use immutable_go::ImmutableGo;
