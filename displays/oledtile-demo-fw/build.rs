//! Build script for oledtile-demo-fw
//!
//! memory.x comes from embassy-stm32's `memory-x` feature; this only adds
//! the cortex-m-rt and defmt linker scripts.

fn main() {
    setup_linker();
}

/// Pass linker scripts for the binary
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if std::env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
