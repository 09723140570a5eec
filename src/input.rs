use std::ffi::OsStr;
use std::{fs, io::Read, path::Path};

/// Reads a whole input file, gunzipping it when `gzip` is set or the file ends in `.gz`.
pub fn read_input(path: &Path, gzip: bool) -> std::io::Result<String> {
    let gzip = gzip || path.extension().and_then(OsStr::to_str) == Some("gz");

    let mut buf = String::new();
    if gzip {
        let mut fd = flate2::read::GzDecoder::new(fs::File::open(path)?);

        fd.read_to_string(&mut buf)?;
    } else {
        let mut fd = fs::File::open(path)?;

        fd.read_to_string(&mut buf)?;
    }

    Ok(buf)
}
