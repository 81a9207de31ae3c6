//! # Applesoft keyword table
//!
//! Maps the canonical spellings of Applesoft keywords to a `Keyword` identity and its token byte.
//! Some keywords are spelled in two parts, e.g. `PR` followed by `#`.  The lexer finds the first
//! part by lookup and is responsible for consuming the second part.
//!
//! Also provides the character classifier that drives the raw scanner.

use std::fmt;

/// Identity of an Applesoft keyword, including operators that tokenize to a single byte.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Keyword {
    End,For,Next,Data,Input,Del,Dim,Read,Gr,Text,PrNumber,InNumber,Call,Plot,Hlin,Vlin,
    Hgr2,Hgr,Hcolor,Hplot,Draw,Xdraw,Htab,Home,Rot,Scale,Shload,Trace,NoTrace,Normal,Inverse,Flash,
    Color,Pop,Vtab,Himem,Lomem,OnErr,Resume,Recall,Store,Speed,Let,Goto,Run,If,
    Restore,Ampersand,Gosub,Return,Rem,Stop,On,Wait,Load,Save,Def,Poke,Print,Cont,List,Clear,
    Get,New,Tab,To,Fn,Spc,Then,At,Not,Step,Plus,Minus,Times,Divide,Power,And,
    Or,Greater,Equal,Less,Sgn,Int,Abs,Usr,Fre,Scrn,Pdl,Pos,Sqr,Rnd,Log,Exp,
    Cos,Sin,Tan,Atn,Peek,Len,Str,Val,Asc,Chr,Left,Right,Mid,
    /// `?` as an alternate spelling of `PRINT`, never emitted by the lexer
    QuestionMark
}

struct Entry {
    keyword: Keyword,
    parts: &'static [&'static str],
    code: u8
}

const fn kw(keyword: Keyword,parts: &'static [&'static str],code: u8) -> Entry {
    Entry { keyword, parts, code }
}

const KEYWORDS: [Entry;107] = [
    kw(Keyword::End,&["END"],0x80),
    kw(Keyword::For,&["FOR"],0x81),
    kw(Keyword::Next,&["NEXT"],0x82),
    kw(Keyword::Data,&["DATA"],0x83),
    kw(Keyword::Input,&["INPUT"],0x84),
    kw(Keyword::Del,&["DEL"],0x85),
    kw(Keyword::Dim,&["DIM"],0x86),
    kw(Keyword::Read,&["READ"],0x87),
    kw(Keyword::Gr,&["GR"],0x88),
    kw(Keyword::Text,&["TEXT"],0x89),
    kw(Keyword::PrNumber,&["PR","#"],0x8a),
    kw(Keyword::InNumber,&["IN","#"],0x8b),
    kw(Keyword::Call,&["CALL"],0x8c),
    kw(Keyword::Plot,&["PLOT"],0x8d),
    kw(Keyword::Hlin,&["HLIN"],0x8e),
    kw(Keyword::Vlin,&["VLIN"],0x8f),
    kw(Keyword::Hgr2,&["HGR2"],0x90),
    kw(Keyword::Hgr,&["HGR"],0x91),
    kw(Keyword::Hcolor,&["HCOLOR","="],0x92),
    kw(Keyword::Hplot,&["HPLOT"],0x93),
    kw(Keyword::Draw,&["DRAW"],0x94),
    kw(Keyword::Xdraw,&["XDRAW"],0x95),
    kw(Keyword::Htab,&["HTAB"],0x96),
    kw(Keyword::Home,&["HOME"],0x97),
    kw(Keyword::Rot,&["ROT","="],0x98),
    kw(Keyword::Scale,&["SCALE","="],0x99),
    kw(Keyword::Shload,&["SHLOAD"],0x9a),
    kw(Keyword::Trace,&["TRACE"],0x9b),
    kw(Keyword::NoTrace,&["NOTRACE"],0x9c),
    kw(Keyword::Normal,&["NORMAL"],0x9d),
    kw(Keyword::Inverse,&["INVERSE"],0x9e),
    kw(Keyword::Flash,&["FLASH"],0x9f),
    kw(Keyword::Color,&["COLOR","="],0xa0),
    kw(Keyword::Pop,&["POP"],0xa1),
    kw(Keyword::Vtab,&["VTAB"],0xa2),
    kw(Keyword::Himem,&["HIMEM",":"],0xa3),
    kw(Keyword::Lomem,&["LOMEM",":"],0xa4),
    kw(Keyword::OnErr,&["ONERR"],0xa5),
    kw(Keyword::Resume,&["RESUME"],0xa6),
    kw(Keyword::Recall,&["RECALL"],0xa7),
    kw(Keyword::Store,&["STORE"],0xa8),
    kw(Keyword::Speed,&["SPEED","="],0xa9),
    kw(Keyword::Let,&["LET"],0xaa),
    kw(Keyword::Goto,&["GOTO"],0xab),
    kw(Keyword::Run,&["RUN"],0xac),
    kw(Keyword::If,&["IF"],0xad),
    kw(Keyword::Restore,&["RESTORE"],0xae),
    kw(Keyword::Ampersand,&["&"],0xaf),
    kw(Keyword::Gosub,&["GOSUB"],0xb0),
    kw(Keyword::Return,&["RETURN"],0xb1),
    kw(Keyword::Rem,&["REM"],0xb2),
    kw(Keyword::Stop,&["STOP"],0xb3),
    kw(Keyword::On,&["ON"],0xb4),
    kw(Keyword::Wait,&["WAIT"],0xb5),
    kw(Keyword::Load,&["LOAD"],0xb6),
    kw(Keyword::Save,&["SAVE"],0xb7),
    kw(Keyword::Def,&["DEF"],0xb8),
    kw(Keyword::Poke,&["POKE"],0xb9),
    kw(Keyword::Print,&["PRINT"],0xba),
    kw(Keyword::Cont,&["CONT"],0xbb),
    kw(Keyword::List,&["LIST"],0xbc),
    kw(Keyword::Clear,&["CLEAR"],0xbd),
    kw(Keyword::Get,&["GET"],0xbe),
    kw(Keyword::New,&["NEW"],0xbf),
    kw(Keyword::Tab,&["TAB","("],0xc0),
    kw(Keyword::To,&["TO"],0xc1),
    kw(Keyword::Fn,&["FN"],0xc2),
    kw(Keyword::Spc,&["SPC","("],0xc3),
    kw(Keyword::Then,&["THEN"],0xc4),
    kw(Keyword::At,&["AT"],0xc5),
    kw(Keyword::Not,&["NOT"],0xc6),
    kw(Keyword::Step,&["STEP"],0xc7),
    kw(Keyword::Plus,&["+"],0xc8),
    kw(Keyword::Minus,&["-"],0xc9),
    kw(Keyword::Times,&["*"],0xca),
    kw(Keyword::Divide,&["/"],0xcb),
    kw(Keyword::Power,&["^"],0xcc),
    kw(Keyword::And,&["AND"],0xcd),
    kw(Keyword::Or,&["OR"],0xce),
    kw(Keyword::Greater,&[">"],0xcf),
    kw(Keyword::Equal,&["="],0xd0),
    kw(Keyword::Less,&["<"],0xd1),
    kw(Keyword::Sgn,&["SGN"],0xd2),
    kw(Keyword::Int,&["INT"],0xd3),
    kw(Keyword::Abs,&["ABS"],0xd4),
    kw(Keyword::Usr,&["USR"],0xd5),
    kw(Keyword::Fre,&["FRE"],0xd6),
    kw(Keyword::Scrn,&["SCRN","("],0xd7),
    kw(Keyword::Pdl,&["PDL"],0xd8),
    kw(Keyword::Pos,&["POS"],0xd9),
    kw(Keyword::Sqr,&["SQR"],0xda),
    kw(Keyword::Rnd,&["RND"],0xdb),
    kw(Keyword::Log,&["LOG"],0xdc),
    kw(Keyword::Exp,&["EXP"],0xdd),
    kw(Keyword::Cos,&["COS"],0xde),
    kw(Keyword::Sin,&["SIN"],0xdf),
    kw(Keyword::Tan,&["TAN"],0xe0),
    kw(Keyword::Atn,&["ATN"],0xe1),
    kw(Keyword::Peek,&["PEEK"],0xe2),
    kw(Keyword::Len,&["LEN"],0xe3),
    kw(Keyword::Str,&["STR$"],0xe4),
    kw(Keyword::Val,&["VAL"],0xe5),
    kw(Keyword::Asc,&["ASC"],0xe6),
    kw(Keyword::Chr,&["CHR$"],0xe7),
    kw(Keyword::Left,&["LEFT$"],0xe8),
    kw(Keyword::Right,&["RIGHT$"],0xe9),
    kw(Keyword::Mid,&["MID$"],0xea),
];

const QUESTION_MARK: Entry = kw(Keyword::QuestionMark,&["?"],0xba);

fn entry(keyword: Keyword) -> &'static Entry {
    match keyword {
        Keyword::QuestionMark => &QUESTION_MARK,
        // table order follows declaration order
        k => &KEYWORDS[k as usize]
    }
}

impl Keyword {
    /// The spelling parts, e.g. `["PR","#"]`
    pub fn parts(&self) -> &'static [&'static str] {
        entry(*self).parts
    }
    /// The byte this keyword tokenizes to
    pub fn code(&self) -> u8 {
        entry(*self).code
    }
    /// Full canonical spelling, e.g. `PR#`
    pub fn spelling(&self) -> String {
        self.parts().concat()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{}",self.spelling())
    }
}

/// Find the keyword whose first spelling part matches `spelling`, ignoring case.
/// For a multi-part keyword the caller must still confirm the remaining parts.
pub fn lookup(spelling: &str) -> Option<Keyword> {
    let upper = spelling.to_uppercase();
    if upper == QUESTION_MARK.parts[0] {
        return Some(Keyword::QuestionMark);
    }
    KEYWORDS.iter().find(|e| e.parts[0]==upper).map(|e| e.keyword)
}

/// Find the keyword that tokenizes to `code`.
pub fn from_code(code: u8) -> Option<Keyword> {
    KEYWORDS.iter().find(|e| e.code==code).map(|e| e.keyword)
}

/// Lexical class of a character, used by the raw scanner
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum CharClass {
    /// skipped between tokens
    Whitespace,
    /// `\n` or `\r`
    EndOfLine,
    /// `"`
    Quote,
    /// digits and the decimal point start numbers
    Numeric,
    /// starts or continues a word, includes the `$` and `%` sigils
    Word,
    /// operator or punctuation, may map directly to a keyword
    Punctuation,
    /// the `\` line continuation
    Escape,
    /// anything the dialect does not recognize
    Other
}

/// Classify a character for the raw scanner.
/// `$` is classified as a word character so that `A$` and `$DIRECTIVE` scan as words.
pub fn classify(c: char) -> CharClass {
    match c {
        '\n' | '\r' => CharClass::EndOfLine,
        c if c <= ' ' => CharClass::Whitespace,
        '"' => CharClass::Quote,
        '0'..='9' | '.' => CharClass::Numeric,
        '$' | '%' | '?' => CharClass::Word,
        '(' | ')' | ',' | ':' | '#' | ';' | '&' | '=' | '<' | '>' | '*' | '+' | '-' | '/' | '^' => CharClass::Punctuation,
        '\\' => CharClass::Escape,
        c if c.is_alphabetic() => CharClass::Word,
        _ => CharClass::Other
    }
}

/// Can this character continue a word that is already started
pub fn continues_word(c: char) -> bool {
    match classify(c) {
        CharClass::Word => c != '?',
        CharClass::Numeric => c != '.',
        _ => false
    }
}
