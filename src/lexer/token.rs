/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Raw text outside of `<?php ... ?>`.
    InlineHtml,
    OpenTag,
    CloseTag,
    Whitespace,
    Comment,
    DocComment,
    /// `$name`
    Variable,
    /// An identifier that is not a reserved word in its position.
    Name,
    /// `\`
    NsSeparator,
    Namespace,
    Class,
    Interface,
    Trait,
    /// Any other reserved word (`extends`, `new`, `function`, ...).
    Keyword,
    StringLiteral,
    Number,
    Semicolon,
    OpenBrace,
    CloseBrace,
    /// `->` or `?->`
    ObjectOperator,
    /// `::`
    DoubleColon,
    /// `#[`
    Attribute,
    Other,
}

impl TokenKind {
    /// Whitespace and comments, which never change the meaning of the code around them.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment | Self::DocComment)
    }

    /// `class`, `interface` or `trait`.
    #[must_use]
    pub const fn is_declaration_keyword(self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::Trait)
    }
}

/// A slice of source text tagged with its kind and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, offset: usize) -> Self {
        Self { kind, text, offset }
    }
}
