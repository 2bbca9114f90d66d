use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )?;
    } else {
        println!("cargo:warning=frontend/dist not found, embedding an empty site");
    }
    // include_dir! needs the directory even before the frontend is built.
    fs::create_dir_all(&embedded_dir)?;

    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
