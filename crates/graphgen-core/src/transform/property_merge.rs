use crate::config::ConflictPolicy;
use crate::error::TransformError;
use crate::ir::{Property, PropertySet};
use crate::parse::{Dialect, GraphProperty};

use super::type_mapper::map_type;

/// Merge raw properties into `target`, mapping each foreign type on the way.
///
/// Names collide case-insensitively and the incoming property replaces the
/// existing one. A collision that changes the type is logged, or rejected
/// under [`ConflictPolicy::Error`].
pub(crate) fn merge_properties<P: GraphProperty>(
    target: &mut PropertySet,
    incoming: &[P],
    owner: &str,
    dialect: Dialect,
    policy: ConflictPolicy,
) -> Result<(), TransformError> {
    for raw in incoming {
        let (type_tag, is_array) = map_type(raw.type_name(), raw.is_array())
            .map_err(|e| e.at(dialect, owner, raw.name()))?;
        let property = Property::new(raw.name(), type_tag, is_array);

        if let Some(existing) = target.get(raw.name()) {
            if !existing.same_type(&property) {
                match policy {
                    ConflictPolicy::Error => {
                        return Err(TransformError::TypeConflict {
                            dialect,
                            owner: owner.to_string(),
                            property: raw.name().to_string(),
                            existing: existing.type_display(),
                            incoming: property.type_display(),
                        });
                    }
                    ConflictPolicy::LastWriteWins => log::warn!(
                        "{dialect}: property '{}' on '{owner}' redeclared as {} (was {}); keeping the later declaration",
                        raw.name(),
                        property.type_display(),
                        existing.type_display(),
                    ),
                }
            }
        }

        target.insert(property);
    }
    Ok(())
}
