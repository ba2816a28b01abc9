fn main() {
    // Writes built.rs into OUT_DIR (git commit hash, package metadata).
    built::write_built_file().expect("Failed to acquire build-time information");
}
