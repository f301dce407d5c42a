//! Splash bitmap header generator
//!
//! Packs the built-in splash raster and writes `splash_bitmap.h` into the
//! output directory (default `include/`, override with the first
//! argument). Run it whenever the splash image changes; the firmware
//! build includes the generated header.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info};

use glimt_gen::splash::{splash_raster, SPLASH_HEIGHT, SPLASH_NAME, SPLASH_WIDTH};
use glimt_gen::{write_header, EmitError, HeaderSpec};

fn generate(out_dir: &Path) -> Result<PathBuf, EmitError> {
    let raster = splash_raster()?;

    let mut packed = vec![0u8; raster.packed_len()];
    raster.pack_into(&mut packed)?;
    info!(
        "packed {}x{} splash into {} bytes",
        raster.width(),
        raster.height(),
        packed.len()
    );

    let spec = HeaderSpec {
        name: SPLASH_NAME,
        width: SPLASH_WIDTH as u8,
        height: SPLASH_HEIGHT as u8,
        packed: &packed,
    };

    let dest = out_dir.join(format!("{SPLASH_NAME}_bitmap.h"));
    write_header(&spec, &dest)?;
    Ok(dest)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("include"));

    match generate(&out_dir) {
        Ok(dest) => {
            info!("generated {}", dest.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
