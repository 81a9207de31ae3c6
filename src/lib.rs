//! # `a2bas` main library
//!
//! This library converts Applesoft BASIC source text into a program tree, and from there
//! into the tokenized form the Apple II interpreter keeps in memory.
//!
//! ## Architecture
//!
//! Everything language specific is in `lang::applesoft`:
//! * `lexer` turns a character stream into tokens, handling the dialect's lexical quirks
//! * `parser` groups tokens into a `Program` of lines and statements
//! * `visitor` provides the `Visit` and `VisitMut` traits that passes are built on
//! * `tokenizer`, `renumber`, and `lister` are passes over the program tree
//!
//! The command line interface is in `commands`, with argument definitions in `cli`.

pub mod lang;
pub mod commands;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Display binary to stdout in columns of hex, +ascii, and -ascii
pub fn display_block(start_addr: u16,block: &[u8]) {
    let mut slice_start = 0;
    loop {
        let row_label = start_addr as usize + slice_start;
        let mut slice_end = slice_start + 16;
        if slice_end > block.len() {
            slice_end = block.len();
        }
        let slice = block[slice_start..slice_end].to_vec();
        let txt: Vec<u8> = slice.iter().map(|c| match *c {
            x if x<32 => '.' as u8,
            x if x<127 => x,
            _ => '.' as u8
        }).collect();
        let neg_txt: Vec<u8> = slice.iter().map(|c| match *c {
            x if x>=160 && x<255 => x - 128,
            _ => 46
        }).collect();
        print!("{:04X} : ",row_label);
        for byte in slice {
            print!("{:02X} ",byte);
        }
        for _blank in slice_end..slice_start+16 {
            print!("   ");
        }
        print!("|+| {} ",String::from_utf8_lossy(&txt));
        for _blank in slice_end..slice_start+16 {
            print!(" ");
        }
        println!("|-| {}",String::from_utf8_lossy(&neg_txt));
        slice_start += 16;
        if slice_end==block.len() {
            break;
        }
    }
}

/// Parse an integer that may be written as decimal `2049`, or hex `0x801` or `$801`
pub fn parse_int(s: &str) -> Result<usize,std::num::ParseIntError> {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).or_else(|| t.strip_prefix('$')) {
        return usize::from_str_radix(hex,16);
    }
    usize::from_str_radix(t,10)
}

#[test]
fn test_parse_int() {
    assert_eq!(parse_int("2049"),Ok(2049));
    assert_eq!(parse_int("0x801"),Ok(2049));
    assert_eq!(parse_int("$801"),Ok(2049));
    assert!(parse_int("$80G").is_err());
    assert!(parse_int("").is_err());
}
