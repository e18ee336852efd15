//! Build script to generate embedded word banks
//!
//! Reads word bank files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Traditional four-character phrases used by the console game
    generate_word_list(
        "data/classic.txt",
        &Path::new(&out_dir).join("classic.rs"),
        "CLASSIC",
        "Classic four-character phrases",
    );

    // Internet slang and campus phrases used by the web game
    generate_word_list(
        "data/casual.txt",
        &Path::new(&out_dir).join("casual.rs"),
        "CASUAL",
        "Casual four-character phrases",
    );

    // Rebuild if word banks change
    println!("cargo:rerun-if-changed=data/classic.txt");
    println!("cargo:rerun-if-changed=data/casual.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    for (index, word) in words.iter().enumerate() {
        let len = word.chars().count();
        assert!(
            len == 4,
            "{input_path}: entry {} '{word}' has {len} characters, expected 4",
            index + 1
        );
    }

    let count = words.len();
    let entries: String = words.iter().map(|word| format!("    {word:?},\n")).collect();

    let source = format!(
        "// Generated from {input_path}\n\n\
         /// {doc_comment} ({count} words)\n\
         pub const {const_name}: &[&str] = &[\n{entries}];\n\n\
         /// Number of words in {const_name}\n\
         pub const {const_name}_COUNT: usize = {count};\n"
    );

    fs::write(output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
