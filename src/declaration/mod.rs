//! Extraction of class, interface and trait declarations from PHP source.

use std::fmt;

use crate::lexer::{Token, TokenKind, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Trait,
}

impl DeclarationKind {
    const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Class => Some(Self::Class),
            TokenKind::Interface => Some(Self::Interface),
            TokenKind::Trait => Some(Self::Trait),
            _ => None,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Trait => "trait",
        };
        f.write_str(s)
    }
}

/// A type declaration found in one file, with the namespace active at its site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub namespace: String,
    pub name: String,
    /// Byte offset of the declaring keyword.
    pub offset: usize,
}

impl Declaration {
    /// `Namespace\Name`, or the bare name in the global namespace.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}\\{}", self.namespace, self.name)
        }
    }

    #[must_use]
    pub fn record(&self, location: &str) -> DeclarationRecord {
        DeclarationRecord {
            qualified_name: self.qualified_name(),
            source_location: location.to_string(),
        }
    }
}

/// A qualified name bound to the location that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationRecord {
    pub qualified_name: String,
    pub source_location: String,
}

impl DeclarationRecord {
    #[must_use]
    pub fn new(qualified_name: impl Into<String>, source_location: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            source_location: source_location.into(),
        }
    }
}

/// Scan PHP source and return its declarations in file order.
///
/// Only the `keyword whitespace identifier` shape is recognized, so anonymous
/// classes and `Foo::class` never produce a declaration.
#[must_use]
pub fn scan_declarations(source: &str) -> Vec<Declaration> {
    let tokens = tokenize(source);
    let mut namespace = String::new();
    let mut declarations = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let rest = &tokens[index + 1..];
        if token.kind == TokenKind::Namespace {
            if let Some(declared) = namespace_name(rest) {
                namespace = declared;
            }
        } else if let Some(kind) = DeclarationKind::from_token(token.kind)
            && let Some(name) = declared_name(rest)
        {
            declarations.push(Declaration {
                kind,
                namespace: namespace.clone(),
                name: name.to_string(),
                offset: token.offset,
            });
        }
    }

    declarations
}

/// Name following a `namespace` keyword, up to `;` or `{`.
///
/// Returns `None` for the namespace-relative form `namespace\foo()`.
fn namespace_name(rest: &[Token<'_>]) -> Option<String> {
    if rest
        .first()
        .is_some_and(|t| t.kind == TokenKind::NsSeparator)
    {
        return None;
    }

    let mut name = String::new();
    for token in rest {
        match token.kind {
            TokenKind::Semicolon | TokenKind::OpenBrace => break,
            TokenKind::Name | TokenKind::NsSeparator => name.push_str(token.text),
            _ => {}
        }
    }
    Some(name.trim_matches('\\').to_string())
}

fn declared_name<'a>(rest: &[Token<'a>]) -> Option<&'a str> {
    match rest {
        [space, ident, ..]
            if space.kind == TokenKind::Whitespace && ident.kind == TokenKind::Name =>
        {
            Some(ident.text)
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
