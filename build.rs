use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();
    let _profile = env::var("PROFILE").unwrap();

    // Copy the demo settings file next to the built binary, if one exists
    let settings_path = Path::new("easel.toml");
    if !settings_path.exists() {
        return;
    }

    let dest_path = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("easel.toml");

    let _ = fs::copy(settings_path, dest_path);
}
