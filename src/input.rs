use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Input reader that handles both file and pipe input
pub struct InputReader {
    reader: Box<dyn Read>,
    is_pipe: bool,
}

impl InputReader {
    /// Create a new InputReader from a path
    /// Use "-" for stdin pipe input
    pub fn new<P: AsRef<Path>>(input_path: P) -> Result<Self> {
        let path = input_path.as_ref();
        let is_pipe = is_pipe(path);

        let reader: Box<dyn Read> = if is_pipe {
            Box::new(io::stdin().lock())
        } else {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        };

        Ok(Self { reader, is_pipe })
    }

    pub fn is_pipe(&self) -> bool {
        self.is_pipe
    }

    /// Read all remaining data
    ///
    /// AT9 containers are parsed whole, so this is the only read path.
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        log::debug!(
            "Read {} bytes from {}",
            data.len(),
            if self.is_pipe { "stdin" } else { "file" }
        );
        Ok(data)
    }
}

pub fn is_pipe(path: &Path) -> bool {
    path.as_os_str() == "-"
}
