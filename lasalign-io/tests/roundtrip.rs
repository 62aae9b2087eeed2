#![allow(clippy::cast_sign_loss)]
use lasalign_core::{DetectorRegion, SimHit, SimHitBatch};
use lasalign_io::{DataFileWriter, SimHitFileReader};
use tempfile::NamedTempFile;

#[test]
fn test_binary_file_preserves_hits_and_order() {
    // Enough hits to span several parallel decode chunks.
    let hits: SimHitBatch = (0..40_000)
        .map(|i| {
            let v = f64::from(i);
            SimHit::new(v * 0.5, -v, v.sin(), DetectorRegion::ALL[(i % 3) as usize])
        })
        .collect();

    let file = NamedTempFile::new().unwrap();
    let mut writer = DataFileWriter::create(file.path()).unwrap();
    writer.write_hits_binary(&hits).unwrap();
    writer.flush().unwrap();

    let reader = SimHitFileReader::open(file.path()).unwrap();
    assert_eq!(reader.hit_count(), hits.len());
    let decoded = reader.read_batch().unwrap();
    assert_eq!(decoded, hits);
    assert_eq!(
        decoded.count_region(DetectorRegion::EndcapTec),
        hits.count_region(DetectorRegion::EndcapTec)
    );

    let sequential: Vec<SimHit> = reader.iter_hits().unwrap().map(Result::unwrap).collect();
    assert_eq!(sequential.len(), hits.len());
    assert_eq!(sequential[12_345], hits.get(12_345).unwrap());
}
