use std::collections::HashSet;
use super::keywords::{self,Keyword,CharClass};

mod table {
    #[test]
    fn codes_are_contiguous() {
        for code in 0x80..=0xea {
            let kw = super::keywords::from_code(code).expect("missing keyword code");
            assert_eq!(kw.code(),code);
        }
        assert_eq!(super::keywords::from_code(0xeb),None);
    }
    #[test]
    fn spellings_are_unique() {
        let mut spellings = super::HashSet::new();
        let mut firsts = super::HashSet::new();
        for code in 0x80..=0xea {
            let kw = super::keywords::from_code(code).unwrap();
            assert!(spellings.insert(kw.spelling()),"duplicate {}",kw);
            if kw.parts().len() > 1 {
                assert!(firsts.insert(kw.parts()[0]));
            }
        }
        assert_eq!(spellings.len(),107);
    }
    #[test]
    fn multi_part() {
        assert_eq!(super::Keyword::PrNumber.parts(),&["PR","#"]);
        assert_eq!(super::Keyword::PrNumber.spelling(),"PR#");
        assert_eq!(super::Keyword::Himem.spelling(),"HIMEM:");
        assert_eq!(super::Keyword::Scrn.code(),0xd7);
    }
    #[test]
    fn question_mark() {
        assert_eq!(super::Keyword::QuestionMark.code(),super::Keyword::Print.code());
        assert_eq!(super::keywords::from_code(0xba),Some(super::Keyword::Print));
    }
}

mod lookup {
    use super::Keyword;
    #[test]
    fn case_normalized() {
        assert_eq!(super::keywords::lookup("print"),Some(Keyword::Print));
        assert_eq!(super::keywords::lookup("Chr$"),Some(Keyword::Chr));
    }
    #[test]
    fn first_part() {
        assert_eq!(super::keywords::lookup("PR"),Some(Keyword::PrNumber));
        assert_eq!(super::keywords::lookup("HCOLOR"),Some(Keyword::Hcolor));
        assert_eq!(super::keywords::lookup("PR#"),None);
    }
    #[test]
    fn symbols() {
        assert_eq!(super::keywords::lookup("="),Some(Keyword::Equal));
        assert_eq!(super::keywords::lookup("&"),Some(Keyword::Ampersand));
        assert_eq!(super::keywords::lookup("?"),Some(Keyword::QuestionMark));
        assert_eq!(super::keywords::lookup(":"),None);
        assert_eq!(super::keywords::lookup("XYZ"),None);
    }
}

mod classify {
    use super::CharClass;
    #[test]
    fn classes() {
        assert_eq!(super::keywords::classify('A'),CharClass::Word);
        assert_eq!(super::keywords::classify('$'),CharClass::Word);
        assert_eq!(super::keywords::classify('7'),CharClass::Numeric);
        assert_eq!(super::keywords::classify('"'),CharClass::Quote);
        assert_eq!(super::keywords::classify('\n'),CharClass::EndOfLine);
        assert_eq!(super::keywords::classify('\t'),CharClass::Whitespace);
        assert_eq!(super::keywords::classify(':'),CharClass::Punctuation);
        assert_eq!(super::keywords::classify('\\'),CharClass::Escape);
        assert_eq!(super::keywords::classify('@'),CharClass::Other);
    }
    #[test]
    fn word_continuation() {
        assert!(super::keywords::continues_word('9'));
        assert!(super::keywords::continues_word('%'));
        assert!(!super::keywords::continues_word('?'));
        assert!(!super::keywords::continues_word('.'));
        assert!(!super::keywords::continues_word('('));
    }
}
