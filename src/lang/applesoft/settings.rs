//! Parse settings string sent by any client.
//!
//! Settings are a JSON object with optional `tokenizer`, `renumber`, and `lister` sections.
//! Missing or unrecognized keys leave the defaults in place.

use serde_json;
use log::warn;
use crate::DYNERR;

#[derive(Clone,Debug,PartialEq)]
pub struct Tokenizer {
    pub address: u16
}
#[derive(Clone,Debug,PartialEq)]
pub struct Renumber {
    pub first: usize,
    pub step: usize
}
#[derive(Clone,Debug,PartialEq)]
pub struct Lister {
    pub lower_case: bool
}
#[derive(Clone,Debug,PartialEq)]
pub struct Settings {
    pub tokenizer: Tokenizer,
    pub renumber: Renumber,
    pub lister: Lister
}

impl Settings {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer {
                address: 2049
            },
            renumber: Renumber {
                first: 10,
                step: 10
            },
            lister: Lister {
                lower_case: false
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

fn update_json_u64(maybe_obj: &serde_json::Value,key: &str,curr: &mut u64) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_u64() {
                Some(x) => *curr = x,
                None => warn!("setting {} should be a non-negative integer",key)
            }
        }
    }
}

fn update_json_bool(maybe_obj: &serde_json::Value,key: &str,curr: &mut bool) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_bool() {
                Some(x) => *curr = x,
                None => warn!("setting {} should be a boolean",key)
            }
        }
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    let root = serde_json::from_str::<serde_json::Value>(json)?;
    if let Some(obj) = root.as_object() {
        for (key,val) in obj {
            match key.as_str() {
                "tokenizer" => {
                    let mut address = ans.tokenizer.address as u64;
                    update_json_u64(val,"address",&mut address);
                    match u16::try_from(address) {
                        Ok(addr) => ans.tokenizer.address = addr,
                        Err(e) => {
                            warn!("address {} is out of range",address);
                            return Err(Box::new(e));
                        }
                    }
                },
                "renumber" => {
                    let mut first = ans.renumber.first as u64;
                    let mut step = ans.renumber.step as u64;
                    update_json_u64(val,"first",&mut first);
                    update_json_u64(val,"step",&mut step);
                    ans.renumber.first = first as usize;
                    ans.renumber.step = step as usize;
                },
                "lister" => {
                    update_json_bool(val,"lowerCase",&mut ans.lister.lower_case);
                },
                _ => warn!("unrecognized settings key {}",key)
            }
        }
    }
    Ok(ans)
}
