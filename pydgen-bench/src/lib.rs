//! # pydgen Bench
//!
//! Synthetic schemas for pydgen performance testing.

use std::fmt::Write;

/// Builds a schema with `size` groups of declarations.
///
/// Each group has an interface, an implementing object whose fields point
/// at the next group (so the whole schema is one long reference chain that
/// closes into a cycle), an input object, an enum and a union.
#[must_use]
pub fn synthetic_schema(size: usize) -> String {
    let mut sdl = String::from("scalar DateTime\nscalar JSON\n\n");

    for i in 0..size {
        let next = (i + 1) % size.max(1);
        // Writing to a String cannot fail.
        let _ = write!(
            sdl,
            r#""""Entity number {i}."""
interface Node{i} {{
  id: ID!
  parent: Node{next}
}}

type Item{i} implements Node{i} {{
  id: ID!
  parent: Node{next}
  name: String!
  tags: [String!]!
  createdAt: DateTime
  payload: JSON
  from: Item{next}
  status: Status{i}
}}

input ItemFilter{i} {{
  name: String
  status: Status{i} = ACTIVE
  and: [ItemFilter{next}!]
}}

enum Status{i} {{
  ACTIVE
  ARCHIVED
  DELETED
}}

union Result{i} = Item{i} | Item{next}

"#
        );
    }

    sdl
}

/// Builds a schema whose interfaces form a single cycle of `size` nodes.
#[must_use]
pub fn cyclic_interfaces(size: usize) -> String {
    let mut sdl = String::new();
    for i in 0..size {
        let next = (i + 1) % size.max(1);
        let _ = writeln!(sdl, "interface Ring{i} {{ next: Ring{next}! }}");
    }
    sdl
}
