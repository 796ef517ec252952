use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// Read a decklist file into lines
pub fn read_decklist<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let reader = io::BufReader::new(file);
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    log::debug!("Read {} lines from {}", lines.len(), path.as_ref().display());
    Ok(lines)
}

/// Write converted output, creating parent directories if needed
pub fn write_output<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    log::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
