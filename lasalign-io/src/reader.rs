//! Memory-mapped file readers.
//!

use crate::format::{decode_hit, RECORD_SIZE};
use crate::{Error, Result};
use lasalign_core::{SimHit, SimHitBatch};
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Records decoded per parallel task.
const DECODE_CHUNK_RECORDS: usize = 16 * 1024;

/// A memory-mapped file reader.
///
/// Uses memmap2 to access file contents without loading the entire
/// file into memory.
pub struct MappedFileReader {
    mmap: Mmap,
    path: PathBuf,
}

impl MappedFileReader {
    /// Opens a file for memory-mapped reading.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or memory-mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        // SAFETY: The file is opened read-only and we assume it is not modified concurrently.
        // This is the standard safety contract for memory mapping.
        #[allow(unsafe_code)]
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self {
            mmap,
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Returns the file contents as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap[..]
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Returns true if the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// Returns the path the file was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reader for binary simulated-hit files.
pub struct SimHitFileReader {
    reader: MappedFileReader,
}

impl SimHitFileReader {
    /// Opens a hit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or memory-mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            reader: MappedFileReader::open(path)?,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn file_size(&self) -> usize {
        self.reader.len()
    }

    /// Returns the number of complete records in the file.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.reader.len() / RECORD_SIZE
    }

    fn check_size(&self) -> Result<()> {
        if self.reader.len() % RECORD_SIZE != 0 {
            return Err(Error::InvalidFormat(format!(
                "file size {} is not a multiple of {RECORD_SIZE} (file: {})",
                self.reader.len(),
                self.reader.path().display()
            )));
        }
        Ok(())
    }

    /// Decodes every hit into a `SimHitBatch`, preserving file order.
    ///
    /// # Errors
    /// Returns an error if the file size is not a whole number of records
    /// or a record carries an unknown region code.
    pub fn read_batch(&self) -> Result<SimHitBatch> {
        self.check_size()?;

        let chunks: Vec<Vec<SimHit>> = self
            .reader
            .as_bytes()
            .par_chunks(RECORD_SIZE * DECODE_CHUNK_RECORDS)
            .map(|bytes| {
                bytes
                    .chunks_exact(RECORD_SIZE)
                    .map(decode_hit)
                    .collect::<lasalign_core::Result<Vec<_>>>()
            })
            .collect::<lasalign_core::Result<Vec<_>>>()
            .map_err(|e| {
                Error::InvalidFormat(format!("{e} (file: {})", self.reader.path().display()))
            })?;

        let mut batch = SimHitBatch::with_capacity(self.hit_count());
        for chunk in chunks {
            batch.extend(chunk);
        }
        Ok(batch)
    }

    /// Iterates over hits sequentially, yielding an error for undecodable records.
    ///
    /// # Errors
    /// Returns an error if the file size is not a whole number of records.
    pub fn iter_hits(&self) -> Result<impl Iterator<Item = lasalign_core::Result<SimHit>> + '_> {
        self.check_size()?;
        Ok(self.reader.as_bytes().chunks_exact(RECORD_SIZE).map(decode_hit))
    }
}
