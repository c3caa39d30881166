//! Declaration dependency graph.
//!
//! Nodes are declaration identities in insertion order; an edge `A -> B`
//! means B must be emitted before A. GraphQL schemas are routinely
//! recursive, so ordering never fails. Strongly connected components are
//! emitted dependencies first. Members of one component keep insertion
//! order, except that a supertype edge inside the component is always
//! honoured.

use indexmap::IndexMap;
use tracing::{debug, trace};

#[derive(Debug, Default, Clone)]
struct Edges {
    outgoing: Vec<usize>,
    // Subset of `outgoing` that must hold even inside a cycle.
    strict: Vec<usize>,
    incoming: usize,
}

/// Insertion-ordered dependency graph over declaration identities.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    nodes: IndexMap<String, Edges>,
}

/// Bookkeeping for one strongly connected components pass.
struct Components {
    next_index: usize,
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    order: Vec<usize>,
}

impl Components {
    fn new(len: usize) -> Self {
        Self {
            next_index: 0,
            index: vec![None; len],
            lowlink: vec![0; len],
            on_stack: vec![false; len],
            stack: Vec::with_capacity(len),
            order: Vec::with_capacity(len),
        }
    }

    fn open(&mut self, node: usize) {
        self.index[node] = Some(self.next_index);
        self.lowlink[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    /// Pops the component rooted at `root`, returned in insertion order.
    fn close(&mut self, root: usize) -> Vec<usize> {
        let mut members = Vec::new();
        while let Some(node) = self.stack.pop() {
            self.on_stack[node] = false;
            members.push(node);
            if node == root {
                break;
            }
        }
        members.sort_unstable();
        members
    }
}

impl DependencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node if it is not already present and returns its index.
    pub fn add_node(&mut self, identity: &str) -> usize {
        if let Some(index) = self.nodes.get_index_of(identity) {
            return index;
        }
        self.nodes.insert_full(identity.to_string(), Edges::default()).0
    }

    /// Records that `from` must follow `to`, adding either node if needed.
    /// Repeated edges are ignored.
    pub fn add_dependency(&mut self, from: &str, to: &str) {
        self.link(from, to);
    }

    /// Records that `to` is a base class of `from`. Unlike a plain
    /// dependency, this edge is kept when the two sit in a cycle.
    pub fn add_supertype(&mut self, from: &str, to: &str) {
        let (from_index, to_index) = self.link(from, to);
        let strict = &mut self.nodes[from_index].strict;
        if !strict.contains(&to_index) {
            strict.push(to_index);
        }
    }

    fn link(&mut self, from: &str, to: &str) -> (usize, usize) {
        let from_index = self.add_node(from);
        let to_index = self.add_node(to);

        let outgoing = &mut self.nodes[from_index].outgoing;
        if !outgoing.contains(&to_index) {
            outgoing.push(to_index);
            self.nodes[to_index].incoming += 1;
            trace!(from, to, "dependency edge");
        }
        (from_index, to_index)
    }

    /// Returns true if the node exists.
    #[must_use]
    pub fn has_node(&self, identity: &str) -> bool {
        self.nodes.contains_key(identity)
    }

    /// Returns the direct dependencies of a node, in insertion order.
    #[must_use]
    pub fn dependencies_of(&self, identity: &str) -> Vec<&str> {
        self.nodes
            .get(identity)
            .map(|edges| edges.outgoing.iter().map(|&index| self.name(index)).collect())
            .unwrap_or_default()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consumes the graph and returns every node exactly once.
    ///
    /// Outside cycles each node follows all of its dependencies. Traversal
    /// starts from nodes nothing depends on, then from any node still
    /// unvisited, both in insertion order. Independent nodes therefore keep
    /// insertion order.
    #[must_use]
    pub fn overall_order(self) -> Vec<String> {
        let len = self.nodes.len();
        let mut components = Components::new(len);

        let roots = (0..len).filter(|&index| self.nodes[index].incoming == 0);
        for start in roots.chain(0..len) {
            if components.index[start].is_none() {
                self.strong_connect(start, &mut components);
            }
        }

        components
            .order
            .into_iter()
            .map(|index| self.name(index).to_string())
            .collect()
    }

    /// Iterative Tarjan traversal from `start`. Finished components are
    /// appended to the order as soon as they close, which puts every
    /// component after the components it depends on.
    fn strong_connect(&self, start: usize, components: &mut Components) {
        // (node, next outgoing edge to follow)
        let mut calls = vec![(start, 0)];
        components.open(start);

        while let Some(&(node, position)) = calls.last() {
            if let Some(&child) = self.nodes[node].outgoing.get(position) {
                if let Some(top) = calls.last_mut() {
                    top.1 += 1;
                }
                match components.index[child] {
                    None => {
                        components.open(child);
                        calls.push((child, 0));
                    }
                    Some(child_index) if components.on_stack[child] => {
                        components.lowlink[node] = components.lowlink[node].min(child_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            calls.pop();
            if let Some(&(parent, _)) = calls.last() {
                components.lowlink[parent] =
                    components.lowlink[parent].min(components.lowlink[node]);
            }
            if components.index[node] == Some(components.lowlink[node]) {
                let members = components.close(node);
                self.emit(members, &mut components.order);
            }
        }
    }

    /// Appends one component. Members go in insertion order, but a member
    /// waits until its in-component supertypes are placed.
    fn emit(&self, mut members: Vec<usize>, order: &mut Vec<usize>) {
        if let [node] = members[..] {
            if self.nodes[node].outgoing.contains(&node) {
                trace!(node = %self.name(node), "self-referencing declaration");
            }
            order.push(node);
            return;
        }

        let names: Vec<&str> = members.iter().map(|&index| self.name(index)).collect();
        debug!(?names, "dependency cycle, keeping insertion order");

        while !members.is_empty() {
            let ready = members
                .iter()
                .position(|&member| {
                    self.nodes[member]
                        .strict
                        .iter()
                        .all(|base| *base == member || !members.contains(base))
                })
                .unwrap_or(0);
            order.push(members.remove(ready));
        }
    }

    fn name(&self, index: usize) -> &str {
        self.nodes
            .get_index(index)
            .map(|(name, _)| name.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[String], name: &str) -> usize {
        order
            .iter()
            .position(|n| n == name)
            .unwrap_or_else(|| panic!("{name} missing from {order:?}"))
    }

    fn assert_each_once(order: &[String], expected: &[&str]) {
        assert_eq!(order.len(), expected.len(), "order: {order:?}");
        for name in expected {
            assert_eq!(order.iter().filter(|n| n == name).count(), 1, "{name} in {order:?}");
        }
    }

    #[test]
    fn test_independent_nodes_keep_insertion_order() {
        let mut graph = DependencyGraph::new();
        graph.add_node("B");
        graph.add_node("A");
        graph.add_node("C");

        assert_eq!(graph.overall_order(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_dependencies_come_first() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Post", "Node");
        graph.add_dependency("Comment", "Node");
        graph.add_dependency("Comment", "Post");

        let order = graph.overall_order();
        assert_eq!(order, vec!["Node", "Post", "Comment"]);
    }

    #[test]
    fn test_acyclic_edges_are_respected() {
        let mut graph = DependencyGraph::new();
        let edges = [
            ("E", "D"),
            ("D", "B"),
            ("D", "C"),
            ("C", "A"),
            ("B", "A"),
            ("F", "E"),
            ("F", "A"),
        ];
        for (from, to) in edges {
            graph.add_dependency(from, to);
        }

        let order = graph.overall_order();
        assert_each_once(&order, &["A", "B", "C", "D", "E", "F"]);
        for (from, to) in edges {
            assert!(position(&order, to) < position(&order, from), "{to} before {from}");
        }
    }

    #[test]
    fn test_duplicate_edges_are_ignored() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A", "B");
        graph.add_dependency("A", "B");

        assert_eq!(graph.dependencies_of("A"), vec!["B"]);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.overall_order(), vec!["B", "A"]);
    }

    #[test]
    fn test_two_cycle() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A", "B");
        graph.add_dependency("B", "A");

        assert_eq!(graph.overall_order(), vec!["A", "B"]);
    }

    #[test]
    fn test_three_cycle_with_tail() {
        let mut graph = DependencyGraph::new();
        graph.add_node("Root");
        graph.add_dependency("A", "B");
        graph.add_dependency("B", "C");
        graph.add_dependency("C", "A");
        graph.add_dependency("Root", "A");

        let order = graph.overall_order();
        assert_each_once(&order, &["Root", "A", "B", "C"]);
        assert_eq!(order, vec!["A", "B", "C", "Root"]);
    }

    #[test]
    fn test_pure_cycle_is_still_emitted() {
        let mut graph = DependencyGraph::new();
        graph.add_node("Loner");
        graph.add_dependency("X", "Y");
        graph.add_dependency("Y", "Z");
        graph.add_dependency("Z", "X");

        let order = graph.overall_order();
        assert_eq!(order, vec!["Loner", "X", "Y", "Z"]);
    }

    #[test]
    fn test_cycle_follows_its_dependencies() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A", "B");
        graph.add_dependency("B", "A");
        graph.add_dependency("B", "Base");

        assert_eq!(graph.overall_order(), vec!["Base", "A", "B"]);
    }

    #[test]
    fn test_supertype_inside_cycle_comes_first() {
        let mut graph = DependencyGraph::new();
        graph.add_node("Post");
        graph.add_node("Node");
        graph.add_supertype("Post", "Node");
        graph.add_dependency("Node", "Post");

        assert_eq!(graph.dependencies_of("Post"), vec!["Node"]);
        assert_eq!(graph.overall_order(), vec!["Node", "Post"]);
    }

    #[test]
    fn test_supertype_chain_inside_cycle() {
        let mut graph = DependencyGraph::new();
        graph.add_node("C");
        graph.add_node("B");
        graph.add_node("A");
        graph.add_supertype("C", "B");
        graph.add_supertype("B", "A");
        graph.add_dependency("A", "C");

        assert_eq!(graph.overall_order(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("Tree", "Tree");
        graph.add_node("Leaf");

        let order = graph.overall_order();
        assert_eq!(order, vec!["Leaf", "Tree"]);
    }

    #[test]
    fn test_has_node() {
        let mut graph = DependencyGraph::new();
        assert!(graph.is_empty());
        graph.add_dependency("A", "B");
        assert!(graph.has_node("A"));
        assert!(graph.has_node("B"));
        assert!(!graph.has_node("C"));
        assert!(graph.dependencies_of("C").is_empty());
    }
}
