use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::process;

use tabshift::Key;

fn main() {
    let args: Vec<String> = env::args().collect();

    // no arguments: interactive session
    if args.len() == 1 {
        interactive();
        return;
    }

    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: tabshift <from-key> <to-key> [input [output]]");
        eprintln!("       tabshift                    (interactive session)");
        eprintln!("Pass '-' as <from-key> to take the key from the frontmatter.");
        process::exit(1);
    }

    let from = if args[1] == "-" {
        None
    } else {
        Some(args[1].as_str())
    };
    let to = &args[2];
    let input_path = args.get(3);
    let output_path = args.get(4);

    // Read input: file when a path is given, stdin otherwise
    let source = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let transposed = match tabshift::transpose_document(&source, from, to) {
        Ok(transposed) => transposed,
        Err(e) => {
            eprintln!("Transposition error: {}", e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &transposed) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote transposed tab to {}", path);
        }
        None => {
            print!("{}", transposed);
        }
    }
}

/// Prompt for the two keys, read the tab until an "end" line, print the
/// transposed tab.
fn interactive() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "What is the tonic note of the original key?  (Ex: for the key \
         of A minor, type 'A')"
    );
    let old = prompt_key(&mut lines);
    println!();
    println!("What is the tonic note of the key to transpose to?");
    let new = prompt_key(&mut lines);

    println!();
    println!("Paste the tab below, then type \"end\" on its own line.");
    let mut tab = String::new();
    for line in &mut lines {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
        };
        if line.trim() == "end" {
            break;
        }
        tab.push_str(&line);
        tab.push('\n');
    }

    println!();
    println!("Here is your transposed tab:");
    println!();
    print!("{}", tabshift::transpose_tab(&tab, &old, &new));
}

/// Loop until the user supplies a valid tonic name.
fn prompt_key(lines: &mut io::Lines<io::StdinLock<'_>>) -> Key {
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let response = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
            None => {
                eprintln!("No key supplied");
                process::exit(1);
            }
        };
        match Key::parse(&response) {
            Ok(key) => return key,
            Err(e) => eprintln!("{}", e),
        }
    }
}
