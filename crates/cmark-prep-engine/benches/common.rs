// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> Vec<u8> {
    let base = "# Title\r\n\r\nParagraph with some content.\r\n\r\n- Bullet point\r\n\t- Nested item\r\n- Another item\n\n```rust\nfn example() {\n\tprintln!(\"Hello\");\n}\n```\r\r";
    base.repeat(size).into_bytes()
}

#[allow(dead_code)]
pub fn generate_tab_heavy_line(len: usize) -> Vec<u8> {
    "é\tab\t日本\t".repeat(len).into_bytes()
}

#[allow(dead_code)]
pub fn generate_plain_line(len: usize) -> Vec<u8> {
    "plain text without tabs ".repeat(len).into_bytes()
}
