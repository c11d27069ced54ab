use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("shapes.rs");

    let mut code = String::new();
    code.push_str("/// Embedded chord shape files: (chord name, YAML content)\n");
    code.push_str("pub static SHAPES: &[(&str, &str)] = &[\n");

    let shapes_dir = Path::new("shapes");

    if shapes_dir.exists() {
        let mut entries: Vec<_> = WalkDir::new(shapes_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "yaml"))
            .collect();
        entries.sort_by(|a, b| a.path().cmp(b.path()));

        for entry in entries {
            let path = entry.path();
            // File stem is the chord name; sharps are spelled "sharp" in file names
            let name = path
                .file_stem()
                .unwrap()
                .to_string_lossy()
                .replace("sharp", "#");

            if let Ok(content) = fs::read_to_string(path) {
                code.push_str(&format!("    ({:?}, {:?}),\n", name, content));
            }
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=shapes");
}
