pub mod assembler;
pub mod node_normalizer;
pub(crate) mod property_merge;
pub mod relationship_normalizer;
pub mod type_mapper;

#[cfg(test)]
pub(crate) mod testing;

pub use assembler::{AssembleOptions, assemble, assemble_with_options, load, load_detected};
pub use node_normalizer::normalize_nodes;
pub use relationship_normalizer::normalize_relationships;
pub use type_mapper::map_type;
