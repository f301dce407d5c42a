//! C header rendering and atomic file emission
//!
//! The artifact format matches what the firmware expects to include:
//! an include guard named from the image, an `images::<name>` namespace
//! with `width` and `height` constants, and the packed bitmap as one
//! 8-digit binary literal per line.

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use glimt_bitmap::BitmapError;

/// Inputs for one generated header
#[derive(Debug, Clone, Copy)]
pub struct HeaderSpec<'a> {
    /// Image identifier, lower-case; also names the namespace and guard
    pub name: &'a str,
    /// Image width in pixels
    pub width: u8,
    /// Image height in pixels
    pub height: u8,
    /// Packed bitmap bytes, MSB-first raster order
    pub packed: &'a [u8],
}

/// Errors that can occur while emitting a header artifact
#[derive(Debug)]
pub enum EmitError {
    /// Packing the raster failed
    Bitmap(BitmapError),
    /// The artifact could not be written
    Io(std::io::Error),
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::Bitmap(e) => write!(f, "bitmap packing failed: {e}"),
            EmitError::Io(e) => write!(f, "cannot write header artifact: {e}"),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Bitmap(e) => Some(e),
            EmitError::Io(e) => Some(e),
        }
    }
}

impl From<BitmapError> for EmitError {
    fn from(e: BitmapError) -> Self {
        EmitError::Bitmap(e)
    }
}

impl From<std::io::Error> for EmitError {
    fn from(e: std::io::Error) -> Self {
        EmitError::Io(e)
    }
}

/// Render the header text for a packed bitmap
///
/// Output is fully determined by the spec: no timestamps, no environment
/// lookups. Re-running with the same inputs yields a byte-identical
/// artifact.
pub fn render(spec: &HeaderSpec<'_>) -> String {
    let guard = format!("{}_BITMAP_H", spec.name.to_uppercase());

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");
    let _ = writeln!(out);
    let _ = writeln!(out, "#include <avr/pgmspace.h>");
    let _ = writeln!(out);
    let _ = writeln!(out, "namespace images {{");
    let _ = writeln!(out, "    namespace {} {{", spec.name);
    let _ = writeln!(out, "        constexpr uint8_t width{{{}}};", spec.width);
    let _ = writeln!(out);
    let _ = writeln!(out, "        constexpr uint8_t height{{{}}};", spec.height);
    let _ = writeln!(out, "        static const uint8_t PROGMEM bitmap[] = {{");

    for byte in spec.packed {
        let _ = writeln!(out, "            0b{byte:08b},");
    }

    let _ = writeln!(out, "        }};");
    let _ = writeln!(out);
    let _ = writeln!(out, "    }};");
    let _ = writeln!(out);
    let _ = writeln!(out, "}};");
    let _ = writeln!(out);
    let _ = writeln!(out, "#endif // {guard}");

    out
}

/// Render and write the header artifact to `dest`
///
/// Writes to a `.tmp` sibling first and renames over `dest` on success,
/// so readers never observe a half-written header.
///
/// # Errors
/// [`EmitError::Io`] if the temporary file cannot be created, written,
/// flushed, or renamed into place (missing directory, permissions). The
/// temporary file is removed on the failure path.
pub fn write_header(spec: &HeaderSpec<'_>, dest: &Path) -> Result<(), EmitError> {
    let text = render(spec);

    let mut tmp = dest.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    let result = (|| {
        let mut file = fs::File::create(tmp)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?;
        fs::rename(tmp, dest)
    })();

    if result.is_err() {
        // Best effort; the error we report is the write failure
        let _ = fs::remove_file(tmp);
    }

    result.map_err(EmitError::from)
}
