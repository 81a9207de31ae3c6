use super::lexer::{self,Lexer};
use super::keywords::Keyword;
use super::token::{Token,TokenKind};
use crate::lang::Error;

fn kinds(code: &str) -> Vec<TokenKind> {
    lexer::tokenize_str(code).expect("lexer failed").into_iter().map(|t| t.kind).collect()
}

fn test_lexer(code: &str,expected: Vec<TokenKind>) {
    assert_eq!(kinds(code),expected);
}

fn kw(k: Keyword) -> TokenKind {
    TokenKind::Keyword(k)
}
fn num(n: f64) -> TokenKind {
    TokenKind::Number(n)
}
fn ident(s: &str) -> TokenKind {
    TokenKind::Identifier(s.to_string())
}
fn string(s: &str) -> TokenKind {
    TokenKind::StringLiteral(s.to_string())
}

mod basic {
    use super::{kw,num,ident,string};
    use super::Keyword;
    use super::TokenKind::*;
    #[test]
    fn print_string() {
        super::test_lexer("PRINT \"HI\"",vec![kw(Keyword::Print),string("HI")]);
    }
    #[test]
    fn numbered_line() {
        super::test_lexer("10 PRINT \"HI\"\n",vec![num(10.0),kw(Keyword::Print),string("HI"),EndOfLine]);
    }
    #[test]
    fn lower_case() {
        super::test_lexer("print a",vec![kw(Keyword::Print),ident("a")]);
    }
    #[test]
    fn operators() {
        super::test_lexer("A=B*2+1",vec![ident("A"),kw(Keyword::Equal),ident("B"),kw(Keyword::Times),num(2.0),kw(Keyword::Plus),num(1.0)]);
    }
    #[test]
    fn punctuation() {
        super::test_lexer("PRINT A;B,C:END",vec![kw(Keyword::Print),ident("A"),Syntax(';'),ident("B"),Syntax(','),ident("C"),Syntax(':'),kw(Keyword::End)]);
    }
    #[test]
    fn numbers() {
        super::test_lexer("1.5 .5 7",vec![num(1.5),num(0.5),num(7.0)]);
    }
    #[test]
    fn exponent_is_not_scanned() {
        super::test_lexer("1E5",vec![num(1.0),ident("E5")]);
    }
    #[test]
    fn unterminated_string() {
        super::test_lexer("PRINT \"HI\n",vec![kw(Keyword::Print),string("HI"),EndOfLine]);
    }
    #[test]
    fn crlf() {
        super::test_lexer("10 HOME\r\n20 END\r\n",vec![num(10.0),kw(Keyword::Home),EndOfLine,num(20.0),kw(Keyword::End),EndOfLine]);
    }
    #[test]
    fn string_functions() {
        super::test_lexer("LEFT$(A$,1)",vec![kw(Keyword::Left),Syntax('('),ident("A$"),Syntax(','),num(1.0),Syntax(')')]);
    }
}

mod keywords {
    use super::{kw,num,ident,string};
    use super::{Keyword,Error};
    use super::TokenKind::*;
    #[test]
    fn multi_part() {
        super::test_lexer("PR#1",vec![kw(Keyword::PrNumber),num(1.0)]);
        super::test_lexer("in # 2",vec![kw(Keyword::InNumber),num(2.0)]);
        super::test_lexer("HCOLOR=3",vec![kw(Keyword::Hcolor),num(3.0)]);
        super::test_lexer("HIMEM: 16384",vec![kw(Keyword::Himem),num(16384.0)]);
    }
    #[test]
    fn multi_part_paren() {
        super::test_lexer("SCRN(1,2)",vec![kw(Keyword::Scrn),num(1.0),Syntax(','),num(2.0),Syntax(')')]);
        super::test_lexer("TAB(5)",vec![kw(Keyword::Tab),num(5.0),Syntax(')')]);
    }
    #[test]
    fn missing_part() {
        match super::lexer::tokenize_str("PR1") {
            Err(Error::ExpectedKeywordPart { line: 1, keyword: Keyword::PrNumber, part: "#" }) => {},
            other => panic!("unexpected result {:?}",other)
        }
        assert!(matches!(super::lexer::tokenize_str("HCOLOR 3"),Err(Error::ExpectedKeywordPart {..})));
    }
    #[test]
    fn alias() {
        assert_eq!(super::kinds("? \"HI\""),super::kinds("PRINT \"HI\""));
        super::test_lexer("?A$",vec![kw(Keyword::Print),ident("A$")]);
    }
    #[test]
    fn keyword_into_digits() {
        super::test_lexer("GOTO100",vec![kw(Keyword::Goto),num(100.0)]);
        super::test_lexer("HGR2",vec![kw(Keyword::Hgr2)]);
        super::test_lexer("A1=5",vec![ident("A1"),kw(Keyword::Equal),num(5.0)]);
    }
    #[test]
    fn directive() {
        super::test_lexer("$TARGET 2049",vec![Directive("$TARGET".to_string()),num(2049.0)]);
        super::test_lexer("$EMBED \"X\"",vec![Directive("$EMBED".to_string()),string("X")]);
    }
}

mod identifiers {
    use super::{kw,num,ident};
    use super::Keyword;
    use super::TokenKind::*;
    #[test]
    fn array() {
        super::test_lexer("A(1)",vec![ident("A("),num(1.0),Syntax(')')]);
        super::test_lexer("N%(I) = 2",vec![ident("N%("),ident("I"),Syntax(')'),kw(Keyword::Equal),num(2.0)]);
    }
    #[test]
    fn scalar_keeps_lookahead() {
        super::test_lexer("A = 1",vec![ident("A"),kw(Keyword::Equal),num(1.0)]);
        super::test_lexer("A\nB",vec![ident("A"),EndOfLine,ident("B")]);
        super::test_lexer("A",vec![ident("A")]);
    }
    #[test]
    fn keyword_after_identifier() {
        super::test_lexer("A REM X\n",vec![ident("A"),Comment("X".to_string()),EndOfLine]);
    }
}

mod comments {
    use super::{kw,num};
    use super::Keyword;
    use super::TokenKind::*;
    #[test]
    fn swallow_colon() {
        super::test_lexer("REM this : is not code\n",vec![Comment("this : is not code".to_string()),EndOfLine]);
    }
    #[test]
    fn synthetic_eol() {
        let tokens = super::lexer::tokenize_str("10 REM HI\n20 END").expect("lexer failed");
        let expected = vec![
            super::Token::number(1,10.0),
            super::Token::comment(1,"HI"),
            super::Token::eol(1),
            super::Token::number(2,20.0),
            super::Token::keyword(2,Keyword::End)
        ];
        assert_eq!(tokens,expected);
    }
    #[test]
    fn at_end_of_input() {
        super::test_lexer("10 REM X",vec![num(10.0),Comment("X".to_string())]);
    }
    #[test]
    fn empty_and_crlf() {
        super::test_lexer("REM\r\nEND",vec![Comment("".to_string()),EndOfLine,kw(Keyword::End)]);
    }
    #[test]
    fn spacing_preserved() {
        super::test_lexer("REM  A  B \n",vec![Comment(" A  B ".to_string()),EndOfLine]);
    }
}

mod continuation {
    use super::{kw,num,string};
    use super::{Keyword,Error};
    #[test]
    fn elide_line_break() {
        super::test_lexer("10 PRINT\\\n20 \"HI\"",vec![num(10.0),kw(Keyword::Print),num(20.0),string("HI")]);
    }
    #[test]
    fn trailing_space() {
        super::test_lexer("PRINT \\  \n\"HI\"",vec![kw(Keyword::Print),string("HI")]);
    }
    #[test]
    fn not_followed_by_eol() {
        assert!(matches!(super::lexer::tokenize_str("PRINT \\ X"),Err(Error::UnexpectedRawToken { line: 1, .. })));
        assert!(matches!(super::lexer::tokenize_str("PRINT \\"),Err(Error::UnexpectedRawToken { .. })));
    }
}

mod streaming {
    use super::{Lexer,Error,Keyword};
    #[test]
    fn line_numbers_ascend() {
        let tokens = super::lexer::tokenize_str("10 HOME\n\n20 REM X\n30 PRINT\\\n A\n").expect("lexer failed");
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines,vec![1,1,1,2,3,3,3,4,4,5,5]);
    }
    #[test]
    fn exhaustion() {
        let mut lexer = Lexer::new("END".as_bytes());
        assert!(lexer.has_more());
        assert_eq!(lexer.next_token().unwrap(),Some(super::Token::keyword(1,Keyword::End)));
        assert_eq!(lexer.next_token().unwrap(),None);
        assert!(!lexer.has_more());
        assert_eq!(lexer.next_token().unwrap(),None);
    }
    #[test]
    fn iterator_stops_on_error() {
        let mut lexer = Lexer::new("A @ B".as_bytes());
        assert!(matches!(lexer.next(),Some(Ok(_))));
        match lexer.next() {
            Some(Err(Error::UnexpectedRawToken { line: 1, found })) => assert!(found.contains("@")),
            other => panic!("unexpected result {:?}",other)
        }
        assert!(lexer.next().is_none());
    }
    #[test]
    fn io_error_is_distinct() {
        let bytes: &[u8] = b"PRINT \xff\n";
        assert!(matches!(super::lexer::tokenize(bytes),Err(Error::Io(_))));
    }
}
