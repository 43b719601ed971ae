use std::fs;
use std::path::Path;

use thiserror::Error;

/// Failures from the CLI's own ROM-loading step - not part of the CPU
/// core (spec.md treats ROM file parsing as an external collaborator),
/// but the binary still needs a typed way to report them before exiting.
#[derive(Error, Debug)]
pub enum RomError {
    #[error("failed to read ROM file: {0}")]
    Io(#[from] std::io::Error),
    #[error("ROM file is empty")]
    Empty,
}

/// Reads the ROM file fully and returns its bytes, truncated to the 32 KiB
/// window starting at `0x8000` the core's `Bus::load_rom` will place them
/// in. No header is parsed; the reset vector must already be populated by
/// the ROM itself.
pub fn load(path: &Path) -> Result<Vec<u8>, RomError> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(RomError::Empty);
    }
    Ok(bytes)
}
