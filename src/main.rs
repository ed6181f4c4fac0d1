use std::{
    env,
    fs::read_to_string,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use log::info;
use pascal_lexer::{get_line_at_position, Error, ErrorTip, Lexer, VariableTable};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <source file>", args[0]);
        process::exit(2);
    }

    let file = PathBuf::from(&args[1]);
    let source = match read_to_string(&file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file.display(), error);
            process::exit(2);
        }
    };

    let start = Instant::now();
    let symbols = VariableTable::new();
    let mut count = 0;

    for token in Lexer::new(&source, &symbols) {
        match token {
            Ok(token) => {
                println!("{}", token.debug());
                count += 1;
            }
            Err(error) => {
                display_error(&error, &source, &file);
                process::exit(1);
            }
        }
    }

    info!("Emitted {} tokens", count);
    println!("Tokenized in {:?}", start.elapsed());
}

fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: IllegalCharacter
        -> demo.pas
           |
        20 | x := @;
           | -----^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {} ({})", error.get_error_name(), error);
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let Some((line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos - removed_whitespace + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
