use std::fs;
use std::path::Path;

// Embeds the frontend build into the binary. When no build exists yet a
// placeholder index.html is generated so the backend still compiles and can
// serve the API alone.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    } else if !out_dir.join("dist").exists() {
        fs::create_dir_all(out_dir.join("dist")).unwrap();
        fs::write(
            out_dir.join("dist/index.html"),
            "<!DOCTYPE html><html><body>Frontend build missing. Run trunk build in frontend/ and rebuild.</body></html>\n",
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
