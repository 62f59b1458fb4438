use crate::error::Result;
use crate::models::Rejection;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes rejected rows as CSV (`row,latitude,longitude`). Undefined
/// coordinates are left empty.
pub struct RejectionWriter;

impl RejectionWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_to<W: Write>(&self, rejections: &[Rejection], writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for rejection in rejections {
            csv_writer.serialize(rejection)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_file(&self, rejections: &[Rejection], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        self.write_to(rejections, file)
    }
}

impl Default for RejectionWriter {
    fn default() -> Self {
        Self::new()
    }
}
