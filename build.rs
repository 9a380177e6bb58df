//! Build script embedding the game's word lists
//!
//! Reads the newline-separated lists under `data/` and writes `&[&str]` consts
//! into `OUT_DIR` for `wordlists::embedded` to `include!`.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Curated answer pool the solution is drawn from",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Every word accepted as a guess",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for (input, output, const_name, doc) in LISTS {
        let destination = Path::new(&out_dir).join(output);
        if let Err(e) = generate_word_list(input, &destination, const_name, doc) {
            panic!("Failed to generate {const_name} from {input}: {e}");
        }
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)?;

    writeln!(output, "// Generated from {input_path}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(output, "    \"{word}\",")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(
        output,
        "pub const {const_name}_COUNT: usize = {};",
        words.len()
    )?;

    Ok(())
}
