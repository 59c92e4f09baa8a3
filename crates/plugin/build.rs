use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // Generate C header from Rust exports for native hosts
    let output_path = manifest_dir.join("include/openxr_frame_stats.h");

    let config =
        cbindgen::Config::from_file(manifest_dir.join("cbindgen.toml")).unwrap_or_default();

    if let Ok(bindings) = cbindgen::Builder::new()
        .with_crate(&manifest_dir)
        .with_config(config)
        .generate()
    {
        bindings.write_to_file(&output_path);
    }
}
