//! Tokens produced by the lexer.
//!
//! These are tokens in the compiler sense.  Only `TokenKind::Keyword` corresponds to
//! a token byte in the Applesoft sense.

use std::fmt;
use super::keywords::Keyword;

#[derive(Debug,Clone,PartialEq)]
pub enum TokenKind {
    EndOfLine,
    Number(f64),
    Keyword(Keyword),
    /// variable name as written, may end with `$` or `%`, and with `(` if it is an array reference
    Identifier(String),
    StringLiteral(String),
    /// tool directive, always starts with `$`
    Directive(String),
    /// raw text following REM
    Comment(String),
    /// punctuation without a keyword mapping
    Syntax(char)
}

/// A lexical unit along with the 1-based source line where it began
#[derive(Debug,Clone,PartialEq)]
pub struct Token {
    pub line: usize,
    pub kind: TokenKind
}

impl Token {
    pub fn new(line: usize,kind: TokenKind) -> Self {
        Self { line, kind }
    }
    pub fn eol(line: usize) -> Self {
        Self::new(line,TokenKind::EndOfLine)
    }
    pub fn number(line: usize,val: f64) -> Self {
        Self::new(line,TokenKind::Number(val))
    }
    pub fn keyword(line: usize,kw: Keyword) -> Self {
        Self::new(line,TokenKind::Keyword(kw))
    }
    pub fn ident(line: usize,name: &str) -> Self {
        Self::new(line,TokenKind::Identifier(name.to_string()))
    }
    pub fn string(line: usize,s: &str) -> Self {
        Self::new(line,TokenKind::StringLiteral(s.to_string()))
    }
    pub fn directive(line: usize,name: &str) -> Self {
        Self::new(line,TokenKind::Directive(name.to_string()))
    }
    pub fn comment(line: usize,txt: &str) -> Self {
        Self::new(line,TokenKind::Comment(txt.to_string()))
    }
    pub fn syntax(line: usize,c: char) -> Self {
        Self::new(line,TokenKind::Syntax(c))
    }
    pub fn is_eol(&self) -> bool {
        self.kind == TokenKind::EndOfLine
    }
}

/// Decimal text for a number the way it would be typed in a listing
pub fn number_text(val: f64) -> String {
    if val.fract()==0.0 && val.abs() < 1e15 {
        return format!("{}",val as i64);
    }
    format!("{}",val)
}

impl fmt::Display for TokenKind {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfLine => write!(f,"EOL"),
            Self::Number(n) => write!(f,"NUMBER {}",number_text(*n)),
            Self::Keyword(k) => write!(f,"KEYWORD {}",k),
            Self::Identifier(s) => write!(f,"IDENT {}",s),
            Self::StringLiteral(s) => write!(f,"STRING \"{}\"",s),
            Self::Directive(s) => write!(f,"DIRECTIVE {}",s),
            Self::Comment(s) => write!(f,"COMMENT {}",s),
            Self::Syntax(c) => write!(f,"SYNTAX {}",c)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{}: {}",self.line,self.kind)
    }
}
