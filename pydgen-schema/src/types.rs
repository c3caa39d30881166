//! Schema AST definitions.
//!
//! This module contains the data structures representing a GraphQL
//! type-system document: object types, interfaces, input objects, enums,
//! unions, scalars, and the definitions the code generator ignores.

/// A parsed type-system document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Top-level definitions in source order.
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Creates a document from its definitions.
    #[must_use]
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Iterates over the custom scalars declared in the document.
    pub fn scalars(&self) -> impl Iterator<Item = &ScalarDef> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Scalar(scalar) => Some(scalar),
            _ => None,
        })
    }

    /// Looks up a named definition.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions
            .iter()
            .find(|def| !def.is_extension() && def.name() == Some(name))
    }

    /// Returns true if the document has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Top-level definition variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// `schema { query: Query }` definition.
    Schema(SchemaDef),
    /// `scalar` definition.
    Scalar(ScalarDef),
    /// `type` definition.
    Object(ObjectDef),
    /// `interface` definition.
    Interface(InterfaceDef),
    /// `union` definition.
    Union(UnionDef),
    /// `enum` definition.
    Enum(EnumDef),
    /// `input` definition.
    InputObject(InputObjectDef),
    /// `directive @name on ...` definition.
    Directive(DirectiveDef),
    /// `extend ...` wrapping the extended definition.
    Extension(Box<Definition>),
}

impl Definition {
    /// Returns the declared name, if the definition has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Schema(_) => None,
            Self::Scalar(s) => Some(&s.name),
            Self::Object(o) => Some(&o.name),
            Self::Interface(i) => Some(&i.name),
            Self::Union(u) => Some(&u.name),
            Self::Enum(e) => Some(&e.name),
            Self::InputObject(i) => Some(&i.name),
            Self::Directive(d) => Some(&d.name),
            Self::Extension(inner) => inner.name(),
        }
    }

    /// Returns the SDL keyword introducing this definition.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Schema(_) => "schema",
            Self::Scalar(_) => "scalar",
            Self::Object(_) => "type",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input",
            Self::Directive(_) => "directive",
            Self::Extension(_) => "extend",
        }
    }

    /// Returns true if this is an `extend` definition.
    #[must_use]
    pub const fn is_extension(&self) -> bool {
        matches!(self, Self::Extension(_))
    }
}

/// Type expression: a named type wrapped in any number of list and
/// non-null layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Reference to a named type.
    Named(String),
    /// `[T]`
    List(Box<Type>),
    /// `T!`
    NonNull(Box<Type>),
}

impl Type {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a type in a list.
    #[must_use]
    pub fn list(inner: Type) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a type in non-null.
    #[must_use]
    pub fn non_null(inner: Type) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }
}

/// Constant or variable value (default values and directive arguments).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `$name`
    Variable(String),
    /// Integer literal, kept as written.
    Int(String),
    /// Float literal, kept as written.
    Float(String),
    /// String literal (escapes resolved).
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// Enum value.
    Enum(String),
    /// `[v1, v2]`
    List(Vec<Value>),
    /// `{ key: value }`
    Object(Vec<(String, Value)>),
}

/// Directive application, e.g. `@deprecated(reason: "gone")`.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Directive name without the `@`.
    pub name: String,
    /// Arguments in source order.
    pub arguments: Vec<(String, Value)>,
}

impl Directive {
    /// Looks up an argument by name.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// `schema` definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDef {
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Root operation types, e.g. `("query", "Query")`.
    pub operations: Vec<(String, String)>,
}

/// `scalar` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarDef {
    /// Scalar name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
}

/// Field of an object or interface type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Arguments.
    pub arguments: Vec<InputValueDef>,
    /// Field type.
    pub ty: Type,
    /// Directives.
    pub directives: Vec<Directive>,
}

impl FieldDef {
    /// Creates a field with no arguments, description or directives.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            ty,
            directives: Vec::new(),
        }
    }
}

/// Argument or input object field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDef {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Value type.
    pub ty: Type,
    /// Default value.
    pub default_value: Option<Value>,
    /// Directives.
    pub directives: Vec<Directive>,
}

impl InputValueDef {
    /// Creates an input value with no default, description or directives.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
            directives: Vec::new(),
        }
    }
}

/// `type` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Implemented interfaces in declaration order.
    pub interfaces: Vec<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Fields.
    pub fields: Vec<FieldDef>,
}

impl ObjectDef {
    /// Creates an object type with no interfaces.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interfaces: Vec::new(),
            directives: Vec::new(),
            fields,
        }
    }

    /// Sets the implemented interfaces.
    #[must_use]
    pub fn implements<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }
}

/// `interface` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDef {
    /// Interface name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Interfaces this interface implements.
    pub interfaces: Vec<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Fields.
    pub fields: Vec<FieldDef>,
}

impl InterfaceDef {
    /// Creates an interface.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interfaces: Vec::new(),
            directives: Vec::new(),
            fields,
        }
    }
}

/// `union` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDef {
    /// Union name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Member types in declaration order.
    pub members: Vec<String>,
}

impl UnionDef {
    /// Creates a union.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            directives: Vec::new(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// `enum` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Values.
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    /// Creates an enum from bare value names.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            directives: Vec::new(),
            values: values
                .into_iter()
                .map(|value| EnumValue {
                    name: value.into(),
                    description: None,
                    directives: Vec::new(),
                })
                .collect(),
        }
    }
}

/// Enum value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
}

/// `input` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDef {
    /// Input object name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Fields.
    pub fields: Vec<InputValueDef>,
}

impl InputObjectDef {
    /// Creates an input object.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<InputValueDef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            directives: Vec::new(),
            fields,
        }
    }
}

/// `directive` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDef {
    /// Directive name without the `@`.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Arguments.
    pub arguments: Vec<InputValueDef>,
    /// Whether the directive is `repeatable`.
    pub repeatable: bool,
    /// Allowed locations, e.g. `FIELD_DEFINITION`.
    pub locations: Vec<String>,
}
