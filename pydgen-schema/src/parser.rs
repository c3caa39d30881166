//! GraphQL SDL parser.
//!
//! This module turns GraphQL type-system documents into the typed
//! [`Document`] consumed by the code generator.

use crate::error::{ParseError, Position};
use crate::lexer::{Spanned, Token, tokenize};
use crate::types::{
    Definition, Directive, DirectiveDef, Document, EnumDef, EnumValue, FieldDef, InputObjectDef,
    InputValueDef, InterfaceDef, ObjectDef, ScalarDef, SchemaDef, Type, UnionDef, Value,
};

/// Parses a GraphQL SDL document from a string.
///
/// # Arguments
/// * `source` - SDL document content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the text is not a valid type-system document.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
        depth: 0,
    };

    let mut definitions = Vec::new();
    while !parser.is_at_end() {
        definitions.push(parser.parse_definition()?);
    }

    tracing::debug!("Parsed {} definitions", definitions.len());
    Ok(Document::new(definitions))
}

/// Deepest list type or literal value accepted before parsing stops.
pub const MAX_NESTING: usize = 128;

/// Recursive-descent parser over a token buffer.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn check(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn check_name(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|t| t.is_name(keyword))
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|s| s.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn match_name(&mut self, keyword: &str) -> bool {
        if self.check_name(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn position(&self) -> Position {
        let offset = self
            .tokens
            .get(self.pos)
            .map_or(self.source.len(), |s| s.span.start);
        Position::from_offset(self.source, offset)
    }

    fn error(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(spanned) => ParseError::unexpected(
                expected,
                &self.source[spanned.span.clone()],
                self.position(),
            ),
            None => ParseError::eof(expected),
        }
    }

    /// Called after an opening bracket or brace that starts a nested type or
    /// value. The position reported is that of the token after it.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                position: self.position(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn consume(&mut self, token: &Token, expected: &str) -> Result<(), ParseError> {
        if self.match_token(token) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        if self.match_name(keyword) {
            Ok(())
        } else {
            Err(self.error(&format!("'{keyword}'")))
        }
    }

    fn parse_name(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(Token::Name(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.error("a name")),
        }
    }

    fn parse_description(&mut self) -> Option<String> {
        match self.peek() {
            Some(Token::String(value) | Token::BlockString(value)) => {
                let value = value.clone();
                self.pos += 1;
                Some(value)
            }
            _ => None,
        }
    }

    fn parse_definition(&mut self) -> Result<Definition, ParseError> {
        let description = self.parse_description();

        let keyword = match self.peek() {
            Some(Token::Name(name)) => name.clone(),
            Some(Token::BraceOpen) => {
                return Err(ParseError::UnsupportedDefinition {
                    keyword: "{".to_string(),
                    position: self.position(),
                });
            }
            _ => return Err(self.error("a definition")),
        };

        match keyword.as_str() {
            "extend" if description.is_none() => {
                self.pos += 1;
                let extended = self.parse_type_system_definition(None)?;
                Ok(Definition::Extension(Box::new(extended)))
            }
            "query" | "mutation" | "subscription" | "fragment" => {
                Err(ParseError::UnsupportedDefinition {
                    keyword,
                    position: self.position(),
                })
            }
            _ => self.parse_type_system_definition(description),
        }
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<Definition, ParseError> {
        let keyword = match self.peek() {
            Some(Token::Name(name)) => name.clone(),
            _ => return Err(self.error("a type-system definition")),
        };

        match keyword.as_str() {
            "schema" => self.parse_schema_def(description).map(Definition::Schema),
            "scalar" => self.parse_scalar_def(description).map(Definition::Scalar),
            "type" => self.parse_object_def(description).map(Definition::Object),
            "interface" => self
                .parse_interface_def(description)
                .map(Definition::Interface),
            "union" => self.parse_union_def(description).map(Definition::Union),
            "enum" => self.parse_enum_def(description).map(Definition::Enum),
            "input" => self
                .parse_input_object_def(description)
                .map(Definition::InputObject),
            "directive" => self
                .parse_directive_def(description)
                .map(Definition::Directive),
            _ => Err(self.error("a type-system definition")),
        }
    }

    /// Parses `schema @dir { query: Query mutation: Mutation }`.
    fn parse_schema_def(&mut self, description: Option<String>) -> Result<SchemaDef, ParseError> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;

        let mut operations = Vec::new();
        if self.match_token(&Token::BraceOpen) {
            while !self.match_token(&Token::BraceClose) {
                let operation = self.parse_name()?;
                self.consume(&Token::Colon, "':'")?;
                let type_name = self.parse_name()?;
                operations.push((operation, type_name));
            }
        }

        Ok(SchemaDef {
            description,
            directives,
            operations,
        })
    }

    fn parse_scalar_def(&mut self, description: Option<String>) -> Result<ScalarDef, ParseError> {
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        Ok(ScalarDef {
            name,
            description,
            directives,
        })
    }

    fn parse_object_def(&mut self, description: Option<String>) -> Result<ObjectDef, ParseError> {
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_fields()?;

        Ok(ObjectDef {
            name,
            description,
            interfaces,
            directives,
            fields,
        })
    }

    fn parse_interface_def(
        &mut self,
        description: Option<String>,
    ) -> Result<InterfaceDef, ParseError> {
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_fields()?;

        Ok(InterfaceDef {
            name,
            description,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses `union Name @dir = | A | B`.
    fn parse_union_def(&mut self, description: Option<String>) -> Result<UnionDef, ParseError> {
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let mut members = Vec::new();
        if self.match_token(&Token::Equals) {
            self.match_token(&Token::Pipe);
            members.push(self.parse_name()?);
            while self.match_token(&Token::Pipe) {
                members.push(self.parse_name()?);
            }
        }

        Ok(UnionDef {
            name,
            description,
            directives,
            members,
        })
    }

    fn parse_enum_def(&mut self, description: Option<String>) -> Result<EnumDef, ParseError> {
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let mut values = Vec::new();
        if self.match_token(&Token::BraceOpen) {
            while !self.match_token(&Token::BraceClose) {
                let description = self.parse_description();
                let name = self.parse_name()?;
                let directives = self.parse_directives()?;
                values.push(EnumValue {
                    name,
                    description,
                    directives,
                });
            }
        }

        Ok(EnumDef {
            name,
            description,
            directives,
            values,
        })
    }

    fn parse_input_object_def(
        &mut self,
        description: Option<String>,
    ) -> Result<InputObjectDef, ParseError> {
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;

        let mut fields = Vec::new();
        if self.match_token(&Token::BraceOpen) {
            while !self.match_token(&Token::BraceClose) {
                fields.push(self.parse_input_value()?);
            }
        }

        Ok(InputObjectDef {
            name,
            description,
            directives,
            fields,
        })
    }

    /// Parses `directive @name(args) repeatable on A | B`.
    fn parse_directive_def(
        &mut self,
        description: Option<String>,
    ) -> Result<DirectiveDef, ParseError> {
        self.expect_keyword("directive")?;
        self.consume(&Token::At, "'@'")?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable = self.match_name("repeatable");
        self.expect_keyword("on")?;

        self.match_token(&Token::Pipe);
        let mut locations = vec![self.parse_name()?];
        while self.match_token(&Token::Pipe) {
            locations.push(self.parse_name()?);
        }

        Ok(DirectiveDef {
            name,
            description,
            arguments,
            repeatable,
            locations,
        })
    }

    /// Parses `implements & A & B`.
    fn parse_implements(&mut self) -> Result<Vec<String>, ParseError> {
        let mut interfaces = Vec::new();
        if self.match_name("implements") {
            self.match_token(&Token::Amp);
            interfaces.push(self.parse_name()?);
            while self.match_token(&Token::Amp) {
                interfaces.push(self.parse_name()?);
            }
        }
        Ok(interfaces)
    }

    fn parse_fields(&mut self) -> Result<Vec<FieldDef>, ParseError> {
        let mut fields = Vec::new();
        if self.match_token(&Token::BraceOpen) {
            while !self.match_token(&Token::BraceClose) {
                fields.push(self.parse_field()?);
            }
        }
        Ok(fields)
    }

    fn parse_field(&mut self) -> Result<FieldDef, ParseError> {
        let description = self.parse_description();
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.consume(&Token::Colon, "':'")?;
        let ty = self.parse_type()?;
        let directives = self.parse_directives()?;

        Ok(FieldDef {
            name,
            description,
            arguments,
            ty,
            directives,
        })
    }

    fn parse_argument_defs(&mut self) -> Result<Vec<InputValueDef>, ParseError> {
        let mut arguments = Vec::new();
        if self.match_token(&Token::ParenOpen) {
            while !self.match_token(&Token::ParenClose) {
                arguments.push(self.parse_input_value()?);
            }
        }
        Ok(arguments)
    }

    fn parse_input_value(&mut self) -> Result<InputValueDef, ParseError> {
        let description = self.parse_description();
        let name = self.parse_name()?;
        self.consume(&Token::Colon, "':'")?;
        let ty = self.parse_type()?;
        let default_value = if self.match_token(&Token::Equals) {
            Some(self.parse_value()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;

        Ok(InputValueDef {
            name,
            description,
            ty,
            default_value,
            directives,
        })
    }

    /// Parses `Name`, `[Type]`, and the `!` suffix on either.
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let ty = if self.match_token(&Token::BracketOpen) {
            self.enter()?;
            let inner = self.parse_type()?;
            self.consume(&Token::BracketClose, "']'")?;
            self.leave();
            Type::list(inner)
        } else {
            Type::Named(self.parse_name()?)
        };

        if self.match_token(&Token::Bang) {
            Ok(Type::non_null(ty))
        } else {
            Ok(ty)
        }
    }

    fn parse_directives(&mut self) -> Result<Vec<Directive>, ParseError> {
        let mut directives = Vec::new();
        while self.match_token(&Token::At) {
            let name = self.parse_name()?;
            let arguments = self.parse_arguments()?;
            directives.push(Directive { name, arguments });
        }
        Ok(directives)
    }

    fn parse_arguments(&mut self) -> Result<Vec<(String, Value)>, ParseError> {
        let mut arguments = Vec::new();
        if self.match_token(&Token::ParenOpen) {
            while !self.match_token(&Token::ParenClose) {
                let name = self.parse_name()?;
                self.consume(&Token::Colon, "':'")?;
                arguments.push((name, self.parse_value()?));
            }
        }
        Ok(arguments)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        if self.match_token(&Token::Dollar) {
            return self.parse_name().map(Value::Variable);
        }

        if self.match_token(&Token::BracketOpen) {
            self.enter()?;
            let mut items = Vec::new();
            while !self.match_token(&Token::BracketClose) {
                items.push(self.parse_value()?);
            }
            self.leave();
            return Ok(Value::List(items));
        }

        if self.match_token(&Token::BraceOpen) {
            self.enter()?;
            let mut entries = Vec::new();
            while !self.match_token(&Token::BraceClose) {
                let key = self.parse_name()?;
                self.consume(&Token::Colon, "':'")?;
                entries.push((key, self.parse_value()?));
            }
            self.leave();
            return Ok(Value::Object(entries));
        }

        let value = match self.peek() {
            Some(Token::Int(raw)) => Value::Int(raw.clone()),
            Some(Token::Float(raw)) => Value::Float(raw.clone()),
            Some(Token::String(s) | Token::BlockString(s)) => Value::String(s.clone()),
            Some(Token::Name(name)) => match name.as_str() {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                "null" => Value::Null,
                _ => Value::Enum(name.clone()),
            },
            _ => return Err(self.error("a value")),
        };
        self.advance();
        Ok(value)
    }
}
