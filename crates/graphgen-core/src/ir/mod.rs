pub mod schema;
pub mod types;

pub use schema::{EndpointPair, NormalizedNode, NormalizedRelationship, Schema};
pub use types::{Property, PropertySet, TypeTag};
