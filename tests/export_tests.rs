// Integration tests for the export artifact: fixed filename, round-trip
// through MocapFile, and byte-stable repeated exports.

use anyhow::Result;
use face_mocap::{
    ExportConfig, LandmarkFrame, LandmarkPoint, MocapExporter, MocapFile, SessionRecorder,
    EXPORT_FILENAME,
};
use std::fs;
use tempfile::TempDir;

fn frame(point_count: usize) -> LandmarkFrame {
    let points = (0..point_count)
        .map(|i| LandmarkPoint::new(0.1 * i as f32, 0.2, 0.05))
        .collect();
    LandmarkFrame::new(points)
}

fn recorded(frames: usize, points: usize) -> SessionRecorder {
    let mut recorder = SessionRecorder::new();
    recorder.start();
    for _ in 0..frames {
        recorder.append(frame(points));
    }
    recorder.stop();
    recorder
}

#[test]
fn test_export_writes_fixed_filename() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = MocapExporter::new(ExportConfig {
        output_dir: temp_dir.path().to_path_buf(),
    })?;

    let recorder = recorded(2, 4);
    let json = recorder.export_json()?;
    let metadata = exporter.write(&json)?;

    assert_eq!(metadata.file_path, temp_dir.path().join(EXPORT_FILENAME));
    assert_eq!(EXPORT_FILENAME, "mocap_data.json");
    assert!(metadata.file_path.exists());
    assert_eq!(metadata.bytes_written, json.len());

    Ok(())
}

#[test]
fn test_export_round_trip_preserves_frames() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = MocapExporter::new(ExportConfig {
        output_dir: temp_dir.path().to_path_buf(),
    })?;

    let recorder = recorded(3, 5);
    let metadata = exporter.write(&recorder.export_json()?)?;

    let file = MocapFile::open(&metadata.file_path)?;
    assert_eq!(file.frame_count(), 3);
    assert_eq!(file.frames.as_slice(), recorder.buffer().frames());

    Ok(())
}

#[test]
fn test_empty_export_is_valid_empty_array() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = MocapExporter::new(ExportConfig {
        output_dir: temp_dir.path().to_path_buf(),
    })?;

    let recorder = recorded(0, 0);
    let metadata = exporter.write(&recorder.export_json()?)?;

    assert_eq!(fs::read(&metadata.file_path)?, b"[]");

    let file = MocapFile::open(&metadata.file_path)?;
    assert_eq!(file.frame_count(), 0);

    Ok(())
}

#[test]
fn test_repeated_export_is_byte_identical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = MocapExporter::new(ExportConfig {
        output_dir: temp_dir.path().to_path_buf(),
    })?;

    let recorder = recorded(4, 6);

    let first_meta = exporter.write(&recorder.export_json()?)?;
    let first = fs::read(&first_meta.file_path)?;

    let second_meta = exporter.write(&recorder.export_json()?)?;
    let second = fs::read(&second_meta.file_path)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_open_rejects_malformed_artifact() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, b"{\"not\": \"an array\"}")?;

    assert!(MocapFile::open(&path).is_err());

    Ok(())
}
