//! File writers for hits and primaries.

use crate::format::encode_hit;
use crate::Result;
use lasalign_beams::PrimaryEvent;
use lasalign_core::SimHitBatch;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered writer for hit and primary output files.
pub struct DataFileWriter {
    writer: BufWriter<File>,
}

impl DataFileWriter {
    /// Creates a new file writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer })
    }

    /// Writes hits as binary records (see [`crate::format`]).
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_hits_binary(&mut self, hits: &SimHitBatch) -> Result<()> {
        for hit in hits.iter() {
            self.writer.write_all(&encode_hit(&hit))?;
        }
        Ok(())
    }

    /// Writes hits as CSV.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_hits_csv(&mut self, hits: &SimHitBatch, include_header: bool) -> Result<()> {
        if include_header {
            writeln!(self.writer, "x,y,z,region")?;
        }
        for hit in hits.iter() {
            writeln!(self.writer, "{},{},{},{}", hit.x, hit.y, hit.z, hit.region)?;
        }
        Ok(())
    }

    /// Writes generated primaries as CSV, one row per gun shot.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_primaries_csv(&mut self, event: &PrimaryEvent, include_header: bool) -> Result<()> {
        if include_header {
            writeln!(
                self.writer,
                "event,beam,x,y,z,dx,dy,dz,px,py,pz,energy_ev,multiplicity"
            )?;
        }
        for p in &event.photons {
            writeln!(
                self.writer,
                "{},{},{},{},{},{},{},{},{},{},{},{},{}",
                event.event_id,
                p.beam,
                p.position.x,
                p.position.y,
                p.position.z,
                p.direction.x,
                p.direction.y,
                p.direction.z,
                p.polarization.x,
                p.polarization.y,
                p.polarization.z,
                p.energy_ev,
                p.multiplicity
            )?;
        }
        Ok(())
    }

    /// Flushes the writer.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
