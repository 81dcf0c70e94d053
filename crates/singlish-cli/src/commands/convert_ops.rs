use std::io::{self, Read};

use singlish_core::converter::format_text;
use singlish_core::Engine;

/// The text argument, or all of stdin when it is absent.
pub fn input_text(text: Option<String>) -> String {
    match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

pub fn convert_cmd(text: &str) {
    let out = Engine::global().convert(text);
    println!("{}", out.trim_end_matches('\n'));
}

pub fn explain_cmd(text: &str, json: bool) {
    let result = Engine::global().explain(text);
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_text(&result));
    }
}
