//! ## Language Transformations
//!
//! Each subcommand reads Applesoft source from stdin and writes to stdout.

use std::io::{Read,Write};
use colored::Colorize;
use log::{error,info};
use super::CommandError;
use crate::lang::applesoft::lexer::Lexer;
use crate::lang::applesoft::{parser,settings};
use crate::lang::applesoft::tokenizer::Tokenizer;
use crate::lang::applesoft::renumber::Renumberer;
use crate::lang::applesoft::lister::Lister;
use crate::{STDRESULT,DYNERR};

fn read_program(name: &str) -> Result<String,DYNERR> {
    if atty::is(atty::Stream::Stdin) {
        error!("line entry is not supported for `{}`, please pipe something in",name);
        return Err(Box::new(CommandError::InvalidCommand));
    }
    let mut program = String::new();
    match std::io::stdin().read_to_string(&mut program) {
        Ok(_) => {},
        Err(e) => {
            error!("the file to {} could not be interpreted as a string",name);
            return Err(Box::new(e));
        }
    }
    if program.len()==0 {
        error!("{} did not receive any data from previous node",name);
        return Err(Box::new(CommandError::InvalidCommand));
    }
    Ok(program)
}

fn get_settings(cmd: &clap::ArgMatches) -> Result<settings::Settings,DYNERR> {
    match cmd.get_one::<String>("config") {
        Some(json) => match settings::parse(json) {
            Ok(s) => Ok(s),
            Err(e) => {
                error!("could not parse settings: {}",e);
                Err(e)
            }
        },
        None => Ok(settings::Settings::new())
    }
}

/// get an optional numerical argument, falling back to `default`
fn get_num(cmd: &clap::ArgMatches,key: &str,default: usize) -> Result<usize,DYNERR> {
    match cmd.get_one::<String>(key) {
        Some(s) => match crate::parse_int(s) {
            Ok(n) => Ok(n),
            Err(e) => {
                error!("{} is not a valid number for `{}`",s,key);
                Err(Box::new(e))
            }
        },
        None => Ok(default)
    }
}

pub fn lex(_cmd: &clap::ArgMatches) -> STDRESULT {
    if atty::is(atty::Stream::Stdin) {
        error!("line entry is not supported for `lex`, please pipe something in");
        return Err(Box::new(CommandError::InvalidCommand));
    }
    let mut count = 0;
    for maybe_tok in Lexer::new(std::io::stdin().lock()) {
        match maybe_tok {
            Ok(tok) => {
                println!("{}",tok);
                count += 1;
            },
            Err(e) => {
                eprintln!("\u{2717} {}","Lexical error".red());
                error!("{}",e);
                return Err(Box::new(e));
            }
        }
    }
    eprintln!("\u{2713} {} {}",count.to_string().green(),"tokens".green());
    Ok(())
}

pub fn tokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let settings = get_settings(cmd)?;
    let addr = get_num(cmd,"addr",settings.tokenizer.address as usize)?;
    let addr = match u16::try_from(addr) {
        Ok(a) => a,
        Err(_) => {
            error!("address {} is out of range",addr);
            return Err(Box::new(CommandError::OutOfRange));
        }
    };
    let program = read_program("tokenize")?;
    let mut tokenizer = Tokenizer::new();
    let object = match tokenizer.tokenize_str(&program,addr) {
        Ok(obj) => obj,
        Err(e) => {
            error!("{}",e);
            return Err(e);
        }
    };
    info!("tokenized {} bytes at {:04X}",object.len(),addr);
    if atty::is(atty::Stream::Stdout) {
        crate::display_block(addr,&object);
    } else {
        std::io::stdout().write_all(&object)?;
    }
    Ok(())
}

pub fn renumber(cmd: &clap::ArgMatches) -> STDRESULT {
    let settings = get_settings(cmd)?;
    let beg = get_num(cmd,"beg",0)?;
    let end = get_num(cmd,"end",usize::MAX)?;
    let first = get_num(cmd,"first",settings.renumber.first)?;
    let step = get_num(cmd,"step",settings.renumber.step)?;
    if step==0 {
        error!("step must be positive");
        return Err(Box::new(CommandError::OutOfRange));
    }
    let source = read_program("renumber")?;
    let mut program = match parser::parse_str(&source) {
        Ok(p) => p,
        Err(e) => {
            error!("{}",e);
            return Err(Box::new(e));
        }
    };
    Renumberer::new().renumber(&mut program,beg,end,first,step)?;
    let mut lister = Lister::new();
    lister.set_lower_case(settings.lister.lower_case);
    print!("{}",lister.list(&program)?);
    Ok(())
}

pub fn list(cmd: &clap::ArgMatches) -> STDRESULT {
    let settings = get_settings(cmd)?;
    let source = read_program("list")?;
    let program = match parser::parse_str(&source) {
        Ok(p) => p,
        Err(e) => {
            error!("{}",e);
            return Err(Box::new(e));
        }
    };
    let mut lister = Lister::new();
    lister.set_lower_case(settings.lister.lower_case);
    print!("{}",lister.list(&program)?);
    Ok(())
}
