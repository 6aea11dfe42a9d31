use std::fs;
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        if out_dir.exists() {
            fs::remove_dir_all(out_dir)?;
        }
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .map_err(|err| io::Error::other(err.to_string()))?;
    } else {
        // `include_dir!` needs the directory even before `trunk build` ran.
        fs::create_dir_all(&embedded_dir)?;
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
