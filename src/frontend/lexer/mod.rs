//! The KPL scanner.
//!
//! Produces one token at a time from a source string, tracking 1-based
//! line/column positions. Identifiers are at most 15 characters; keywords
//! are uppercase and matched exactly. Comments are `(* ... *)` and do not
//! nest.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::frontend::diagnostics::{CompileError, ErrorKind, Pos};

/// Longest identifier the language accepts.
pub const MAX_IDENT_LEN: usize = 15;

/// A streaming scanner over a source string.
pub struct Lexer {
    chars: Vec<char>,
    offset: usize,
    line: u32,
    col: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            offset: 0,
            line: 1,
            col: 1,
        }
    }

    fn pos(&self) -> Pos {
        Pos::new(self.line, self.col)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    fn peek2(&self) -> Option<char> {
        self.chars.get(self.offset + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Skip whitespace and comments. Errors on a comment left open at end
    /// of input.
    fn skip_trivia(&mut self) -> Result<(), CompileError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('(') if self.peek2() == Some('*') => {
                    self.bump();
                    self.bump();
                    self.skip_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), CompileError> {
        loop {
            match self.bump() {
                Some('*') if self.peek() == Some(')') => {
                    self.bump();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(CompileError::new(ErrorKind::UnterminatedComment, self.pos()));
                }
            }
        }
    }

    /// Scan the next token. After the end of input this keeps returning
    /// `Eof` tokens, which is what lets the parser hold a two-token window.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_trivia()?;
        let start = self.pos();
        let Some(c) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, start));
        };

        if c.is_ascii_alphabetic() {
            return self.scan_word(start);
        }
        if c.is_ascii_digit() {
            return self.scan_number(start);
        }
        if c == '\'' {
            return self.scan_char(start);
        }
        self.scan_symbol(start)
    }

    fn scan_word(&mut self, start: Pos) -> Result<Token, CompileError> {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            word.push(c);
            self.bump();
        }
        if word.len() > MAX_IDENT_LEN {
            return Err(CompileError::new(ErrorKind::IdentTooLong, start));
        }
        let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Ident(word));
        Ok(Token::new(kind, start))
    }

    fn scan_number(&mut self, start: Pos) -> Result<Token, CompileError> {
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.bump();
        }
        let value: i64 = digits
            .parse()
            .map_err(|_| CompileError::new(ErrorKind::InvalidConstant, start))?;
        Ok(Token::new(TokenKind::Number(value), start))
    }

    fn scan_char(&mut self, start: Pos) -> Result<Token, CompileError> {
        self.bump(); // opening quote
        let c = match self.peek() {
            Some(c) if c != '\n' => c,
            _ => return Err(CompileError::new(ErrorKind::InvalidCharConstant, start)),
        };
        self.bump();
        match self.peek() {
            Some('\'') => {
                self.bump();
                Ok(Token::new(TokenKind::CharLit(c), start))
            }
            _ => Err(CompileError::new(ErrorKind::InvalidCharConstant, start)),
        }
    }

    fn scan_symbol(&mut self, start: Pos) -> Result<Token, CompileError> {
        use TokenKind::*;
        let c = self
            .bump()
            .expect("INVARIANT: scan_symbol is only called with a character available");
        let kind = match c {
            ';' => Semicolon,
            '.' => Period,
            ',' => Comma,
            '+' => Plus,
            '-' => Minus,
            '*' => Star,
            '/' => Slash,
            '(' => LParen,
            ')' => RParen,
            '[' => LBracket,
            ']' => RBracket,
            '=' => Eq,
            ':' => {
                if self.peek() == Some('=') {
                    self.bump();
                    Assign
                } else {
                    Colon
                }
            }
            '<' => match self.peek() {
                Some('=') => {
                    self.bump();
                    Le
                }
                Some('>') => {
                    self.bump();
                    Neq
                }
                _ => Lt,
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.bump();
                    Ge
                } else {
                    Gt
                }
            }
            _ => return Err(CompileError::new(ErrorKind::InvalidSymbol, start)),
        };
        Ok(Token::new(kind, start))
    }
}

/// Scan an entire source string into a token list, ending with `Eof`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut lexer = Lexer::new(source);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        out.push(token);
        if done {
            return Ok(out);
        }
    }
}
