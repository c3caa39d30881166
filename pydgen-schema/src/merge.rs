//! Folding `extend` definitions into the definitions they extend.

use crate::types::{Definition, Document};
use tracing::{debug, warn};

impl Document {
    /// Returns true if the document contains any `extend` definition.
    #[must_use]
    pub fn has_extensions(&self) -> bool {
        self.definitions.iter().any(Definition::is_extension)
    }

    /// Appends the contents of every `extend` definition to the base
    /// definition of the same kind and name, then removes the extension.
    ///
    /// Fields, enum values, union members, implemented interfaces,
    /// directives and schema operations are appended in source order; an
    /// interface already implemented is not repeated. An extension may
    /// appear before its base. Returns the number of extensions without a
    /// matching base; those stay in place.
    pub fn merge_extensions(&mut self) -> usize {
        let definitions = std::mem::take(&mut self.definitions);
        let (extensions, mut bases): (Vec<_>, Vec<_>) =
            definitions.into_iter().enumerate().partition(|(_, def)| def.is_extension());

        let mut unmatched = Vec::new();
        for (position, extension) in extensions {
            let Definition::Extension(inner) = extension else {
                continue;
            };
            let target = bases.iter_mut().find(|(_, base)| same_target(base, &inner));
            match target {
                Some((_, base)) => {
                    debug!(
                        kind = inner.keyword(),
                        name = inner.name().unwrap_or_default(),
                        "merged extension"
                    );
                    extend(base, *inner);
                }
                None => {
                    warn!(
                        kind = inner.keyword(),
                        name = inner.name().unwrap_or_default(),
                        "extension has no matching definition"
                    );
                    unmatched.push((position, Definition::Extension(inner)));
                }
            }
        }

        let remaining = unmatched.len();
        bases.extend(unmatched);
        bases.sort_by_key(|(position, _)| *position);
        self.definitions = bases.into_iter().map(|(_, def)| def).collect();
        remaining
    }
}

fn same_target(base: &Definition, extension: &Definition) -> bool {
    match (base, extension) {
        (Definition::Schema(_), Definition::Schema(_)) => true,
        (Definition::Scalar(a), Definition::Scalar(b)) => a.name == b.name,
        (Definition::Object(a), Definition::Object(b)) => a.name == b.name,
        (Definition::Interface(a), Definition::Interface(b)) => a.name == b.name,
        (Definition::Union(a), Definition::Union(b)) => a.name == b.name,
        (Definition::Enum(a), Definition::Enum(b)) => a.name == b.name,
        (Definition::InputObject(a), Definition::InputObject(b)) => a.name == b.name,
        _ => false,
    }
}

fn push_unique(interfaces: &mut Vec<String>, added: Vec<String>) {
    for interface in added {
        if !interfaces.contains(&interface) {
            interfaces.push(interface);
        }
    }
}

fn extend(base: &mut Definition, extension: Definition) {
    match (base, extension) {
        (Definition::Schema(base), Definition::Schema(ext)) => {
            base.directives.extend(ext.directives);
            base.operations.extend(ext.operations);
        }
        (Definition::Scalar(base), Definition::Scalar(ext)) => {
            base.directives.extend(ext.directives);
        }
        (Definition::Object(base), Definition::Object(ext)) => {
            push_unique(&mut base.interfaces, ext.interfaces);
            base.directives.extend(ext.directives);
            base.fields.extend(ext.fields);
        }
        (Definition::Interface(base), Definition::Interface(ext)) => {
            push_unique(&mut base.interfaces, ext.interfaces);
            base.directives.extend(ext.directives);
            base.fields.extend(ext.fields);
        }
        (Definition::Union(base), Definition::Union(ext)) => {
            base.directives.extend(ext.directives);
            base.members.extend(ext.members);
        }
        (Definition::Enum(base), Definition::Enum(ext)) => {
            base.directives.extend(ext.directives);
            base.values.extend(ext.values);
        }
        (Definition::InputObject(base), Definition::InputObject(ext)) => {
            base.directives.extend(ext.directives);
            base.fields.extend(ext.fields);
        }
        _ => {}
    }
}
