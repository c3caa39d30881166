//! Translated top-level declarations.

/// One emittable top-level construct: a model class, enum class or union
/// alias.
///
/// Dependencies name other declarations this one should follow. Supertypes
/// are the subset named unquoted in the class header; those must be emitted
/// first even when the two declarations sit in a reference cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared name, unique within a document.
    pub identity: String,
    /// Full Python text of the declaration, without a trailing newline.
    pub rendered: String,
    /// Identities this declaration must follow, in first-seen order.
    pub dependencies: Vec<String>,
    /// Base classes, also listed in `dependencies`.
    pub supertypes: Vec<String>,
}

impl Declaration {
    /// Creates a declaration with no dependencies.
    #[must_use]
    pub fn new(identity: impl Into<String>, rendered: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            rendered: rendered.into(),
            dependencies: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Records a dependency; repeated identities are kept once.
    pub fn depends_on(&mut self, identity: impl Into<String>) {
        let identity = identity.into();
        if !self.dependencies.contains(&identity) {
            self.dependencies.push(identity);
        }
    }

    /// Records a base class. It is also a dependency.
    pub fn extends(&mut self, identity: impl Into<String>) {
        let identity = identity.into();
        if !self.supertypes.contains(&identity) {
            self.supertypes.push(identity.clone());
        }
        self.depends_on(identity);
    }

    /// Returns true if `identity` is a base class of this declaration.
    #[must_use]
    pub fn is_supertype(&self, identity: &str) -> bool {
        self.supertypes.iter().any(|s| s == identity)
    }

    /// Builder form of [`depends_on`](Self::depends_on).
    #[must_use]
    pub fn with_dependency(mut self, identity: impl Into<String>) -> Self {
        self.depends_on(identity);
        self
    }

    /// Builder form of [`extends`](Self::extends).
    #[must_use]
    pub fn with_supertype(mut self, identity: impl Into<String>) -> Self {
        self.extends(identity);
        self
    }
}
