//! Final document assembly.

use crate::declaration::Declaration;
use crate::graph::DependencyGraph;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Separator between the header and declarations, and between declarations.
pub const DECLARATION_SEPARATOR: &str = "\n\n\n";

/// Collects declarations and joins them in dependency order.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    declarations: IndexMap<String, Declaration>,
}

impl DocumentAssembler {
    /// Creates an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration.
    ///
    /// Dependencies may name declarations that are added later or never; the
    /// latter are dropped during [`finish`](Self::finish). A second
    /// declaration with an identity already registered is ignored.
    pub fn add(&mut self, declaration: Declaration) {
        if self.declarations.contains_key(&declaration.identity) {
            warn!(
                identity = %declaration.identity,
                "duplicate declaration ignored, keeping the first"
            );
            return;
        }

        debug!(
            identity = %declaration.identity,
            dependencies = declaration.dependencies.len(),
            "registered declaration"
        );
        self.declarations
            .insert(declaration.identity.clone(), declaration);
    }

    /// Returns the number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Builds the dependency graph over everything registered. Nodes are
    /// added in registration order before any edge, so declarations in a
    /// cycle keep the order they were registered in.
    fn graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for identity in self.declarations.keys() {
            graph.add_node(identity);
        }
        for declaration in self.declarations.values() {
            for dependency in &declaration.dependencies {
                if declaration.is_supertype(dependency) {
                    graph.add_supertype(&declaration.identity, dependency);
                } else {
                    graph.add_dependency(&declaration.identity, dependency);
                }
            }
        }
        graph
    }

    /// Returns the declarations joined in dependency order, without header.
    #[must_use]
    pub fn into_body(mut self) -> String {
        let order = self.graph().overall_order();
        let mut rendered = Vec::with_capacity(self.declarations.len());

        for identity in order {
            match self.declarations.swap_remove(&identity) {
                Some(declaration) => rendered.push(declaration.rendered),
                None => debug!(%identity, "referenced identity has no declaration"),
            }
        }

        rendered.join(DECLARATION_SEPARATOR)
    }

    /// Returns the full module text: header, separator, body, newline.
    #[must_use]
    pub fn finish(self, header: &str) -> String {
        let body = self.into_body();
        format!("{header}{DECLARATION_SEPARATOR}{body}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document() {
        let assembler = DocumentAssembler::new();
        assert!(assembler.is_empty());
        assert_eq!(
            assembler.finish("from pydantic import BaseModel"),
            "from pydantic import BaseModel\n\n\n\n"
        );
    }

    #[test]
    fn test_supertype_emitted_first() {
        let mut assembler = DocumentAssembler::new();
        assembler.add(
            Declaration::new("Post", "class Post(Node):\n    id: str").with_supertype("Node"),
        );
        assembler.add(Declaration::new("Node", "class Node(BaseModel):\n    id: str"));

        assert_eq!(
            assembler.finish("from pydantic import BaseModel"),
            "from pydantic import BaseModel\n\n\n\
             class Node(BaseModel):\n    id: str\n\n\n\
             class Post(Node):\n    id: str\n"
        );
    }

    #[test]
    fn test_undeclared_dependencies_are_filtered() {
        let mut assembler = DocumentAssembler::new();
        assembler.add(
            Declaration::new("U", "U = Union['Ghost', 'A']")
                .with_dependency("Ghost")
                .with_dependency("A"),
        );
        assembler.add(Declaration::new("A", "class A(BaseModel):\n    pass"));

        assert_eq!(
            assembler.into_body(),
            "class A(BaseModel):\n    pass\n\n\nU = Union['Ghost', 'A']"
        );
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut assembler = DocumentAssembler::new();
        assembler.add(Declaration::new("A", "first"));
        assembler.add(Declaration::new("A", "second"));

        assert_eq!(assembler.len(), 1);
        assert_eq!(assembler.into_body(), "first");
    }

    #[test]
    fn test_cycle_emits_every_declaration_once() {
        let mut assembler = DocumentAssembler::new();
        assembler.add(Declaration::new("A", "a").with_dependency("B"));
        assembler.add(Declaration::new("B", "b").with_dependency("A"));

        assert_eq!(assembler.into_body(), "a\n\n\nb");
    }

    #[test]
    fn test_base_class_precedes_subclass_in_cycle() {
        let mut assembler = DocumentAssembler::new();
        assembler.add(Declaration::new("Post", "post").with_supertype("Node"));
        assembler.add(Declaration::new("Node", "node").with_dependency("Post"));

        assert_eq!(assembler.into_body(), "node\n\n\npost");
    }

    #[test]
    fn test_cycle_keeps_registration_order_not_edge_order() {
        let mut assembler = DocumentAssembler::new();
        assembler.add(Declaration::new("A", "a").with_dependency("C"));
        assembler.add(Declaration::new("B", "b").with_dependency("A"));
        assembler.add(Declaration::new("C", "c").with_dependency("B"));

        assert_eq!(assembler.into_body(), "a\n\n\nb\n\n\nc");
    }
}
