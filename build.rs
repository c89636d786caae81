use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    // OUT_DIR is target/<profile>/build/<pkg>/out; the binary lives three levels up
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir)
        .parent()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .map(|dir| dir.join("config.toml"));

    if let Some(dest_path) = dest_path {
        fs::copy(config_path, dest_path).unwrap();
    }
}
