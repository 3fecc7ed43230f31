//! Minimal PHP tokenizer.
//!
//! Produces a flat token stream that is precise enough to tell declarations
//! apart from comments, strings and member access. It never fails: malformed
//! input degrades into `Other` tokens, and unterminated comments or strings
//! run to the end of the file.

mod token;

pub use token::{Token, TokenKind};

/// Reserved words other than the ones with a dedicated [`TokenKind`].
const KEYWORDS: &[&str] = &[
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "isset",
    "list",
    "match",
    "new",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "throw",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
];

/// Split PHP source into tokens.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    in_php: bool,
    tokens: Vec<Token<'a>>,
    /// Kind of the last token that was not whitespace or a comment.
    last_significant: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    const fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            in_php: false,
            tokens: Vec::new(),
            last_significant: None,
        }
    }

    fn run(mut self) -> Vec<Token<'a>> {
        while self.pos < self.bytes.len() {
            if self.in_php {
                self.lex_php();
            } else {
                self.lex_inline_html();
            }
        }
        self.tokens
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        if start == self.pos {
            return;
        }
        self.tokens
            .push(Token::new(kind, &self.src[start..self.pos], start));
        if !kind.is_trivia() {
            self.last_significant = Some(kind);
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    fn lex_inline_html(&mut self) {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            if let Some(len) = open_tag_len(self.rest()) {
                self.push(TokenKind::InlineHtml, start);
                let tag_start = self.pos;
                self.pos += len;
                self.push(TokenKind::OpenTag, tag_start);
                self.in_php = true;
                return;
            }
            self.pos += 1;
        }
        self.push(TokenKind::InlineHtml, start);
    }

    fn lex_php(&mut self) {
        let start = self.pos;
        let c = self.bytes[self.pos];
        match c {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => {
                while self.peek(0).is_some_and(is_whitespace) {
                    self.pos += 1;
                }
                self.push(TokenKind::Whitespace, start);
            }
            b'?' if self.peek(1) == Some(b'>') => {
                self.pos += 2;
                self.skip_newline();
                self.push(TokenKind::CloseTag, start);
                self.in_php = false;
            }
            b'?' if self.rest().starts_with(b"?->") => {
                self.pos += 3;
                self.push(TokenKind::ObjectOperator, start);
            }
            b'#' if self.peek(1) == Some(b'[') => {
                self.pos += 2;
                self.push(TokenKind::Attribute, start);
            }
            b'#' => self.lex_line_comment(start),
            b'/' if self.peek(1) == Some(b'/') => self.lex_line_comment(start),
            b'/' if self.peek(1) == Some(b'*') => self.lex_block_comment(start),
            b'$' if self.peek(1).is_some_and(is_ident_start) => {
                self.pos += 1;
                self.skip_ident();
                self.push(TokenKind::Variable, start);
            }
            b'\'' | b'"' | b'`' => {
                self.skip_quoted(c);
                self.push(TokenKind::StringLiteral, start);
            }
            b'<' if self.rest().starts_with(b"<<<") => self.lex_heredoc(start),
            b'0'..=b'9' => {
                while self
                    .peek(0)
                    .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
                {
                    self.pos += 1;
                }
                self.push(TokenKind::Number, start);
            }
            b'\\' => self.single(TokenKind::NsSeparator),
            b';' => self.single(TokenKind::Semicolon),
            b'{' => self.single(TokenKind::OpenBrace),
            b'}' => self.single(TokenKind::CloseBrace),
            b'-' if self.peek(1) == Some(b'>') => {
                self.pos += 2;
                self.push(TokenKind::ObjectOperator, start);
            }
            b':' if self.peek(1) == Some(b':') => {
                self.pos += 2;
                self.push(TokenKind::DoubleColon, start);
            }
            _ if is_ident_start(c) => self.lex_word(start),
            _ => self.single(TokenKind::Other),
        }
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.pos;
        self.pos += 1;
        self.push(kind, start);
    }

    fn skip_newline(&mut self) {
        if self.rest().starts_with(b"\r\n") {
            self.pos += 2;
        } else if self.peek(0) == Some(b'\n') {
            self.pos += 1;
        }
    }

    fn skip_ident(&mut self) {
        while self.peek(0).is_some_and(is_ident_continue) {
            self.pos += 1;
        }
    }

    /// `//` and `#` comments stop at the end of the line or right before `?>`.
    fn lex_line_comment(&mut self, start: usize) {
        while let Some(b) = self.peek(0) {
            if b == b'\n' {
                self.pos += 1;
                break;
            }
            if b == b'?' && self.peek(1) == Some(b'>') {
                break;
            }
            self.pos += 1;
        }
        self.push(TokenKind::Comment, start);
    }

    fn lex_block_comment(&mut self, start: usize) {
        let is_doc = self.rest().starts_with(b"/**") && self.peek(3).is_some_and(is_whitespace);
        self.pos += 2;
        match find(self.rest(), b"*/") {
            Some(end) => self.pos += end + 2,
            None => self.pos = self.bytes.len(),
        }
        let kind = if is_doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        };
        self.push(kind, start);
    }

    fn skip_quoted(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            self.pos += 1;
            if b == b'\\' {
                if self.pos < self.bytes.len() {
                    self.pos += 1;
                }
            } else if b == quote {
                return;
            }
        }
    }

    /// Heredoc (`<<<EOT`) and nowdoc (`<<<'EOT'`) literals.
    fn lex_heredoc(&mut self, start: usize) {
        let Some((label, header_len)) = heredoc_header(&self.rest()[3..]) else {
            self.single(TokenKind::Other);
            return;
        };
        self.pos += 3 + header_len;

        loop {
            let line_start = self.pos;
            let line_end = find(self.rest(), b"\n").map_or(self.bytes.len(), |i| self.pos + i);
            let line = &self.bytes[line_start..line_end];
            let indent = line.iter().take_while(|b| **b == b' ' || **b == b'\t').count();
            let body = &line[indent..];
            if body.starts_with(label)
                && !body.get(label.len()).copied().is_some_and(is_ident_continue)
            {
                self.pos = line_start + indent + label.len();
                break;
            }
            if line_end >= self.bytes.len() {
                self.pos = self.bytes.len();
                break;
            }
            self.pos = line_end + 1;
        }
        self.push(TokenKind::StringLiteral, start);
    }

    fn lex_word(&mut self, start: usize) {
        let after_separator = self
            .tokens
            .last()
            .is_some_and(|t| t.kind == TokenKind::NsSeparator);
        let member_access = matches!(
            self.last_significant,
            Some(TokenKind::ObjectOperator | TokenKind::DoubleColon)
        );
        self.skip_ident();

        let kind = if after_separator || member_access {
            TokenKind::Name
        } else {
            classify_word(&self.src[start..self.pos])
        };
        self.push(kind, start);
    }
}

fn classify_word(word: &str) -> TokenKind {
    let lower = word.to_ascii_lowercase();
    match lower.as_str() {
        "namespace" => TokenKind::Namespace,
        "class" => TokenKind::Class,
        "interface" => TokenKind::Interface,
        "trait" => TokenKind::Trait,
        w if KEYWORDS.contains(&w) => TokenKind::Keyword,
        _ => TokenKind::Name,
    }
}

/// Length of the open tag at the start of `rest`, including the single
/// whitespace character that belongs to `<?php`.
fn open_tag_len(rest: &[u8]) -> Option<usize> {
    if !rest.starts_with(b"<?") {
        return None;
    }
    if rest.starts_with(b"<?=") {
        return Some(3);
    }
    if rest.len() >= 5 && rest[2..5].eq_ignore_ascii_case(b"php") {
        return match rest.get(5) {
            None => Some(5),
            Some(b'\r') if rest.get(6) == Some(&b'\n') => Some(7),
            Some(b) if is_whitespace(*b) => Some(6),
            Some(_) => None,
        };
    }
    match rest.get(2) {
        Some(b) if is_whitespace(*b) => Some(2),
        None => Some(2),
        Some(_) => None,
    }
}

/// Parses `  "LABEL"\n` after `<<<`, returning the label and the header length
/// including the newline.
fn heredoc_header(rest: &[u8]) -> Option<(&[u8], usize)> {
    let mut i = rest.iter().take_while(|b| **b == b' ' || **b == b'\t').count();
    let quote = match rest.get(i) {
        Some(q @ (b'"' | b'\'')) => {
            i += 1;
            Some(*q)
        }
        _ => None,
    };
    let label_start = i;
    if !rest.get(i).copied().is_some_and(is_ident_start) {
        return None;
    }
    while rest.get(i).copied().is_some_and(is_ident_continue) {
        i += 1;
    }
    let label = &rest[label_start..i];
    if let Some(q) = quote {
        if rest.get(i) != Some(&q) {
            return None;
        }
        i += 1;
    }
    if rest.get(i) == Some(&b'\r') {
        i += 1;
    }
    if rest.get(i) != Some(&b'\n') {
        return None;
    }
    Some((label, i + 1))
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

const fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
