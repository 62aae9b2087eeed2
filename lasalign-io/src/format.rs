//! Binary simulated-hit record format.
//!
//! Each hit is a 32-byte little-endian record:
//!
//! | offset | size | field                      |
//! |--------|------|----------------------------|
//! | 0      | 8    | x (f64)                    |
//! | 8      | 8    | y (f64)                    |
//! | 16     | 8    | z (f64)                    |
//! | 24     | 1    | region code (0 TIB, 1 TOB, 2 TEC) |
//! | 25     | 7    | reserved, zero             |

use lasalign_core::{DetectorRegion, SimHit};

/// Size of one record in bytes.
pub const RECORD_SIZE: usize = 32;

/// Encodes a hit into a record.
#[must_use]
pub fn encode_hit(hit: &SimHit) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];
    record[0..8].copy_from_slice(&hit.x.to_le_bytes());
    record[8..16].copy_from_slice(&hit.y.to_le_bytes());
    record[16..24].copy_from_slice(&hit.z.to_le_bytes());
    record[24] = hit.region.code();
    record
}

fn read_f64(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    f64::from_le_bytes(buf)
}

/// Decodes one record.
///
/// # Errors
/// Returns an error if the region code is unknown.
///
/// # Panics
/// Panics if `record` is shorter than [`RECORD_SIZE`].
pub fn decode_hit(record: &[u8]) -> lasalign_core::Result<SimHit> {
    let region = DetectorRegion::from_code(record[24])?;
    Ok(SimHit::new(
        read_f64(&record[0..8]),
        read_f64(&record[8..16]),
        read_f64(&record[16..24]),
        region,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_layout() {
        let hit = SimHit::new(1.5, -2.0, 250.0, DetectorRegion::EndcapTec);
        let record = encode_hit(&hit);
        assert_eq!(&record[0..8], &1.5f64.to_le_bytes());
        assert_eq!(record[24], 2);
        assert!(record[25..].iter().all(|&b| b == 0));
        assert_eq!(decode_hit(&record).unwrap(), hit);
    }

    #[test]
    fn test_unknown_region_code() {
        let mut record = encode_hit(&SimHit::new(0.0, 0.0, 0.0, DetectorRegion::BarrelTib));
        record[24] = 9;
        assert!(decode_hit(&record).is_err());
    }
}
