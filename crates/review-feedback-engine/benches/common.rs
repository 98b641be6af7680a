// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_feedback(size: usize) -> String {
    let base = "## Review\n\nThe function `parse` is **mostly** fine.\n\n* Avoid `unwrap` on input\n- Add **tests** for `parse`\n\n```rust\nfn parse(input: &str) -> Result<u32, Error> {\n    Ok(input.trim().parse()?)\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_list(items: usize) -> String {
    (0..items)
        .map(|i| format!("- item {i} with `code` and **bold**\n"))
        .collect()
}
