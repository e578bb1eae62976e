use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use log::info;
use tokenizer::{
    lexer::{
        lexer::{tokenize, tokenize_strict},
        tokens::token_to_string,
    },
    render_error,
};

const DEMO_INPUT: &str = "aushf32342 9f23 <t> 239042n @*(#&$*( )(*)(&@*(#&{}@#}{:";

fn main() {
    env_logger::init();

    let mut strict = false;
    let mut file_path: Option<String> = None;

    for arg in env::args().skip(1) {
        if arg == "--strict" {
            strict = true;
        } else if file_path.is_none() {
            file_path = Some(arg);
        } else {
            eprintln!("usage: tokenizer [--strict] [FILE]");
            process::exit(2);
        }
    }

    let (source, file_name) = match &file_path {
        Some(path) => {
            let contents = match read_to_string(PathBuf::from(path)) {
                Ok(contents) => contents,
                Err(err) => {
                    eprintln!("Failed to read {}: {}", path, err);
                    process::exit(1);
                }
            };
            let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
            (contents, file_name)
        }
        None => (DEMO_INPUT.to_string(), String::from("shell")),
    };

    let start = Instant::now();

    let tokens = if strict {
        match tokenize_strict(source.clone(), Some(file_name)) {
            Ok(tokens) => tokens,
            Err(error) => {
                eprint!("{}", render_error(&error, &source));
                process::exit(1);
            }
        }
    } else {
        tokenize(source)
    };

    info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    for token in &tokens {
        println!("{}", token_to_string(token));
    }
}
