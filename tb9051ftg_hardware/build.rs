//! Puts `memory.x` (STM32F407VG layout, kept at the workspace root) where the linker
//! finds it when building the board examples, and reruns when it changes.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    println!("cargo:rustc-link-arg-examples=--nmagic");
    println!("cargo:rustc-link-arg-examples=-Tlink.x");
    println!("cargo:rustc-link-arg-examples=-Tdefmt.x");

    println!("cargo:rerun-if-changed=../memory.x");

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    File::create(out.join("memory.x"))
        .and_then(|mut f| f.write_all(include_bytes!("../memory.x")))
        .expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out.display());
}
