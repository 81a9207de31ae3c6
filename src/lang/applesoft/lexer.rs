//! # Applesoft lexer
//!
//! Turns a character stream into a sequence of `Token`.
//! This works in two layers.  A raw scanner splits characters into numbers, words, quoted
//! strings, line ends, and single characters.  The `Lexer` then applies the dialect rules:
//! * words are looked up in the keyword table, multi-part keywords such as `PR#` consume their
//!   remaining parts, and `?` becomes `PRINT`
//! * `REM` bypasses the scanner and takes the rest of the physical line as a comment
//! * a word that is not a keyword is a directive if it starts with `$`, otherwise an identifier,
//!   and an identifier immediately followed by `(` absorbs it to mark an array reference
//! * a backslash followed by a line end joins two physical lines
//!
//! The scanner has a single slot for pushing back one raw token, which is all the lookahead
//! the dialect needs.

use std::io::BufRead;
use log::trace;
use crate::lang::Error;
use super::keywords::{self,CharClass,Keyword};
use super::token::{self,Token};

/// Unit produced by the raw scanner
#[derive(Debug,Clone,PartialEq)]
enum Raw {
    Eol,
    Number(f64),
    Word(String),
    Quoted(String),
    Char(char)
}

impl Raw {
    /// does this raw token spell the given keyword part
    fn spells(&self,part: &str) -> bool {
        match self {
            Raw::Char(c) => part.chars().eq(std::iter::once(*c)),
            Raw::Word(w) => w.eq_ignore_ascii_case(part),
            _ => false
        }
    }
    fn describe(&self) -> String {
        match self {
            Raw::Eol => "end of line".to_string(),
            Raw::Number(n) => format!("number {}",token::number_text(*n)),
            Raw::Word(w) => format!("word `{}`",w),
            Raw::Quoted(s) => format!("string \"{}\"",s),
            Raw::Char(c) => format!("character `{}`",c.escape_debug())
        }
    }
}

/// Line buffered character source.
/// Words, numbers, and strings never span lines, so the scanner can look ahead
/// anywhere within the buffered line.
struct Source<R: BufRead> {
    reader: R,
    buf: Vec<char>,
    pos: usize,
    line: usize,
    eof: bool
}

impl<R: BufRead> Source<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: 0,
            line: 1,
            eof: false
        }
    }
    /// make sure there is something to read, returns false at end of input
    fn fill(&mut self) -> Result<bool,Error> {
        while self.pos >= self.buf.len() {
            if self.eof {
                return Ok(false);
            }
            let mut s = String::new();
            if self.reader.read_line(&mut s)? == 0 {
                self.eof = true;
                return Ok(false);
            }
            self.buf = s.chars().collect();
            self.pos = 0;
        }
        Ok(true)
    }
    fn peek(&mut self) -> Result<Option<char>,Error> {
        match self.fill()? {
            true => Ok(Some(self.buf[self.pos])),
            false => Ok(None)
        }
    }
    /// look ahead within the buffered line only
    fn peek_in_line(&self,offset: usize) -> Option<char> {
        self.buf.get(self.pos + offset).copied()
    }
    fn bump(&mut self) -> Result<Option<char>,Error> {
        let ans = self.peek()?;
        if let Some(c) = ans {
            self.pos += 1;
            if c=='\n' {
                self.line += 1;
            }
        }
        Ok(ans)
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
enum State {
    Normal,
    /// the newline ending a comment was consumed directly, the EOL for that line is still owed
    PendingEol(usize)
}

/// Pull based lexer over a buffered reader.
/// Use `next_token` directly, or iterate to get `Result<Token,Error>` items.
pub struct Lexer<R: BufRead> {
    src: Source<R>,
    pushed: Option<(usize,Raw)>,
    state: State,
    more: bool
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            src: Source::new(reader),
            pushed: None,
            state: State::Normal,
            more: true
        }
    }
    /// false once the end of input has been reached, or after an error while iterating
    pub fn has_more(&self) -> bool {
        self.more
    }
    /// Get the next token, or `None` if the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>,Error> {
        if let State::PendingEol(line) = self.state {
            self.state = State::Normal;
            return Ok(Some(Token::eol(line)));
        }
        loop {
            let (line,raw) = match self.next_raw()? {
                Some(x) => x,
                None => {
                    self.more = false;
                    return Ok(None);
                }
            };
            trace!("raw {:?} on line {}",raw,line);
            match raw {
                Raw::Eol => return Ok(Some(Token::eol(line))),
                Raw::Number(n) => return Ok(Some(Token::number(line,n))),
                Raw::Quoted(s) => return Ok(Some(Token::string(line,&s))),
                Raw::Word(w) => return self.word(line,w).map(Some),
                Raw::Char(c) => match keywords::classify(c) {
                    CharClass::Escape => {
                        // only an immediately following line end may be escaped
                        match self.next_raw()? {
                            Some((_,Raw::Eol)) => continue,
                            Some((l,other)) => return Err(Error::UnexpectedRawToken { line: l, found: other.describe() }),
                            None => return Err(Error::UnexpectedRawToken { line, found: "end of input after `\\`".to_string() })
                        }
                    },
                    CharClass::Punctuation => {
                        let tok = match keywords::lookup(&c.to_string()) {
                            Some(kw) => Token::keyword(line,kw),
                            None => Token::syntax(line,c)
                        };
                        return Ok(Some(tok));
                    },
                    _ => return Err(Error::UnexpectedRawToken { line, found: Raw::Char(c).describe() })
                }
            }
        }
    }
    fn word(&mut self,line: usize,w: String) -> Result<Token,Error> {
        match keywords::lookup(&w) {
            Some(Keyword::Rem) => {
                let txt = self.read_comment()?;
                Ok(Token::comment(line,&txt))
            },
            Some(kw) => {
                for &part in &kw.parts()[1..] {
                    match self.next_raw()? {
                        Some((_,raw)) if raw.spells(part) => {},
                        _ => return Err(Error::ExpectedKeywordPart { line, keyword: kw, part })
                    }
                }
                match kw {
                    Keyword::QuestionMark => Ok(Token::keyword(line,Keyword::Print)),
                    _ => Ok(Token::keyword(line,kw))
                }
            },
            None if w.starts_with('$') => Ok(Token::directive(line,&w)),
            None => {
                let mut name = w;
                match self.next_raw()? {
                    Some((_,Raw::Char('('))) => name.push('('),
                    Some(other) => self.pushed = Some(other),
                    None => {}
                }
                Ok(Token::ident(line,&name))
            }
        }
    }
    /// Read the rest of the physical line without scanning.
    fn read_comment(&mut self) -> Result<String,Error> {
        let line = self.src.line;
        let mut txt = String::new();
        if self.src.peek()? == Some(' ') {
            self.src.bump()?;
        }
        loop {
            match self.src.bump()? {
                None => break,
                Some('\n') => {
                    self.state = State::PendingEol(line);
                    break;
                },
                Some(c) => txt.push(c)
            }
        }
        if txt.ends_with('\r') {
            txt.pop();
        }
        Ok(txt)
    }
    /// Raw scanner, honors the pushback slot.
    fn next_raw(&mut self) -> Result<Option<(usize,Raw)>,Error> {
        if let Some(raw) = self.pushed.take() {
            return Ok(Some(raw));
        }
        loop {
            let c = match self.src.peek()? {
                Some(c) => c,
                None => return Ok(None)
            };
            let line = self.src.line;
            match keywords::classify(c) {
                CharClass::Whitespace => {
                    self.src.bump()?;
                },
                CharClass::EndOfLine => {
                    self.src.bump()?;
                    if c=='\r' {
                        match self.src.peek_in_line(0) {
                            Some('\n') => {
                                self.src.bump()?;
                            },
                            _ => self.src.line += 1
                        }
                    }
                    return Ok(Some((line,Raw::Eol)));
                },
                CharClass::Quote => {
                    self.src.bump()?;
                    let mut s = String::new();
                    // an unterminated string ends with the line
                    while let Some(c) = self.src.peek_in_line(0) {
                        if c=='\n' || c=='\r' {
                            break;
                        }
                        self.src.bump()?;
                        if c=='"' {
                            break;
                        }
                        s.push(c);
                    }
                    return Ok(Some((line,Raw::Quoted(s))));
                },
                CharClass::Numeric => return Ok(Some((line,self.scan_number()?))),
                CharClass::Word => return Ok(Some((line,self.scan_word()?))),
                _ => {
                    self.src.bump()?;
                    return Ok(Some((line,Raw::Char(c))));
                }
            }
        }
    }
    fn scan_number(&mut self) -> Result<Raw,Error> {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(c) = self.src.peek_in_line(0) {
            match c {
                '0'..='9' => s.push(c),
                '.' if !decimal => {
                    decimal = true;
                    s.push(c);
                },
                _ => break
            }
            self.src.bump()?;
        }
        // a lone decimal point reads as zero
        Ok(Raw::Number(s.parse::<f64>().unwrap_or(0.0)))
    }
    fn scan_word(&mut self) -> Result<Raw,Error> {
        if self.src.peek_in_line(0) == Some('?') {
            self.src.bump()?;
            return Ok(Raw::Word("?".to_string()));
        }
        let mut chars: Vec<char> = Vec::new();
        while let Some(c) = self.src.peek_in_line(chars.len()) {
            if chars.len() > 0 && !keywords::continues_word(c) {
                break;
            }
            chars.push(c);
        }
        let mut take = chars.len();
        // a keyword running into digits is split there (`GOTO100`), unless the whole word is a keyword (`HGR2`)
        let word: String = chars.iter().collect();
        if keywords::lookup(&word).is_none() {
            if let Some(i) = chars.iter().position(|c| c.is_ascii_digit()) {
                let head: String = chars[..i].iter().collect();
                if i > 0 && keywords::lookup(&head).is_some() {
                    take = i;
                }
            }
        }
        for _i in 0..take {
            self.src.bump()?;
        }
        Ok(Raw::Word(chars[..take].iter().collect()))
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token,Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.more {
            return None;
        }
        match self.next_token() {
            Ok(Some(tok)) => Some(Ok(tok)),
            Ok(None) => None,
            Err(e) => {
                self.more = false;
                Some(Err(e))
            }
        }
    }
}

/// Lex everything from a reader.  Any error discards the tokens produced so far.
pub fn tokenize<R: BufRead>(reader: R) -> Result<Vec<Token>,Error> {
    Lexer::new(reader).collect()
}

/// Lex a program held in a string.
pub fn tokenize_str(program: &str) -> Result<Vec<Token>,Error> {
    tokenize(program.as_bytes())
}
