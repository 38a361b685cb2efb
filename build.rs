//! Build script to generate embedded word pools
//!
//! Reads one pool file per theme and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let pools = [
        ("data/animals.txt", "animals.rs", "ANIMALS", "Animal words"),
        ("data/sports.txt", "sports.rs", "SPORTS", "Sport words"),
        (
            "data/languages.txt",
            "languages.rs",
            "LANGUAGES",
            "Programming language words",
        ),
        (
            "data/default.txt",
            "default.rs",
            "DEFAULT_POOL",
            "Default single-pool words (no theme)",
        ),
    ];

    for (input, output, const_name, doc) in pools {
        generate_word_pool(input, &Path::new(&out_dir).join(output), const_name, doc);
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_pool(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word pool").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
