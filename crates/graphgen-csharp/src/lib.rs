pub mod emitters;
pub mod generator;
pub mod naming;
pub mod type_mapper;

pub use generator::{CSharpGenerator, GeneratorError};
