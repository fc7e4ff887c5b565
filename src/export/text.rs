//! Plain-text camera path format
//!
//! One line per sample, eight space-separated numbers:
//!
//! ```text
//! <delta> <pos.x> <pos.y> <pos.z> <rot.w> <rot.x> <rot.y> <rot.z>
//! ```
//!
//! Every line, including the last, ends with `\n`. There is no header.
//! Numbers use the shortest decimal form that parses back to the same
//! `f64`, so a save/load cycle is lossless.

use super::types::FormatError;
use crate::capture::{Pose, Quaternion, Vec3};
use crate::recorder::Sample;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Number of fields on every line
pub const FIELDS_PER_LINE: usize = 8;

/// Write one line per sample to `out`
pub fn write_samples<W: Write>(samples: &[Sample], out: &mut W) -> io::Result<()> {
    for sample in samples {
        let Pose { position: p, rotation: r } = sample.pose;
        writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            sample.delta, p.x, p.y, p.z, r.w, r.x, r.y, r.z
        )?;
    }
    Ok(())
}

/// Encode samples into a string
pub fn encode(samples: &[Sample]) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_samples(samples, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

/// Write samples to `sink` and close it
///
/// The sink is consumed and dropped before this returns, on success and on
/// failure alike.
pub fn save<W: Write>(samples: &[Sample], sink: W) -> Result<(), FormatError> {
    let mut writer = BufWriter::new(sink);
    write_samples(samples, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write samples to a file, replacing whatever it contained
pub fn save_to_path(samples: &[Sample], path: &Path) -> Result<(), FormatError> {
    let file = File::create(path)?;
    save(samples, file)?;

    tracing::debug!("Saved {} samples to {:?}", samples.len(), path);
    Ok(())
}

/// Parse a single line. `line_no` is only used for error context.
pub fn parse_line(line: &str, line_no: usize) -> Result<Sample, FormatError> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(FormatError::parse(
            line_no,
            line,
            format!("expected {} fields, found {}", FIELDS_PER_LINE, fields.len()),
        ));
    }

    let mut values = [0.0f64; FIELDS_PER_LINE];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field
            .parse()
            .map_err(|_| FormatError::parse(line_no, line, format!("invalid number {:?}", field)))?;
    }

    let [delta, px, py, pz, rw, rx, ry, rz] = values;
    Ok(Sample::new(
        delta,
        Pose::new(Vec3::new(px, py, pz), Quaternion::new(rw, rx, ry, rz)),
    ))
}

/// Read samples from a buffered reader, skipping blank lines
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<Sample>, FormatError> {
    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // Files edited on Windows
        let line = line.strip_suffix('\r').unwrap_or(line.as_str());
        if line.is_empty() {
            continue;
        }
        samples.push(parse_line(line, index + 1)?);
    }
    Ok(samples)
}

/// Decode samples from a string
pub fn decode(text: &str) -> Result<Vec<Sample>, FormatError> {
    read_samples(text.as_bytes())
}

/// Read samples from a file
pub fn load_from_path(path: &Path) -> Result<Vec<Sample>, FormatError> {
    if !path.is_file() {
        return Err(io::Error::new(io::ErrorKind::NotFound, format!("{:?} is not a file", path)).into());
    }

    let samples = read_samples(BufReader::new(File::open(path)?))?;

    tracing::debug!("Loaded {} samples from {:?}", samples.len(), path);
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn two_frames() -> Vec<Sample> {
        vec![
            Sample::new(
                0.0,
                Pose::new(Vec3::new(1.0, 2.0, 3.0), Quaternion::new(1.0, 0.0, 0.0, 0.0)),
            ),
            Sample::new(
                16.0,
                Pose::new(Vec3::new(4.0, 5.0, 6.0), Quaternion::new(0.0, 1.0, 0.0, 0.0)),
            ),
        ]
    }

    /// Sink that accepts `limit` bytes, then fails. Records when it is dropped.
    struct FailingSink {
        written: Vec<u8>,
        limit: usize,
        closed: Arc<AtomicBool>,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for FailingSink {
        fn drop(&mut self) {
            self.closed.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_encode_two_frames() {
        assert_eq!(
            encode(&two_frames()),
            "0 1 2 3 1 0 0 0\n16 4 5 6 0 1 0 0\n"
        );
    }

    #[test]
    fn test_encode_recorder_output() {
        let recorder = crate::recorder::FrameRecorder::new();
        recorder.start().unwrap();
        for sample in two_frames() {
            // Timestamps 1000 and 1016
            recorder.on_frame(sample.pose, 1000.0 + sample.delta);
        }
        recorder.stop().unwrap();

        assert_eq!(
            encode(&recorder.recording()),
            "0 1 2 3 1 0 0 0\n16 4 5 6 0 1 0 0\n"
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_uses_plain_decimals() {
        let sample = Sample::new(
            16.5,
            Pose::new(Vec3::new(-0.25, 1e21, 0.1), Quaternion::new(0.5, -0.5, 0.5, -0.5)),
        );
        assert_eq!(
            encode(&[sample]),
            "16.5 -0.25 1000000000000000000000 0.1 0.5 -0.5 0.5 -0.5\n"
        );
    }

    #[test]
    fn test_decode_inverts_encode() {
        let mut samples = two_frames();
        samples.push(Sample::new(
            -3.75,
            Pose::new(
                Vec3::new(0.1 + 0.2, -1234.5678, 1e-9),
                Quaternion::new(0.9238795325112867, 0.0, 0.3826834323650898, 0.0),
            ),
        ));
        samples.push(Sample::new(
            f64::MAX,
            Pose::new(Vec3::new(f64::MIN_POSITIVE, -0.0, 7.0), Quaternion::IDENTITY),
        ));

        let decoded = decode(&encode(&samples)).unwrap();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn test_decode_skips_blank_lines_and_crlf() {
        let decoded = decode("0 1 2 3 1 0 0 0\r\n\n16 4 5 6 0 1 0 0\n").unwrap();
        assert_eq!(decoded, two_frames());
    }

    #[test]
    fn test_decode_wrong_field_count() {
        let err = decode("0 1 2 3 1 0 0 0\n16 4 5 6 0 1 0\n").unwrap_err();
        match err {
            FormatError::Parse { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "16 4 5 6 0 1 0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_double_space_is_rejected() {
        let err = decode("0  1 2 3 1 0 0 0\n").unwrap_err();
        assert!(matches!(err, FormatError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_decode_invalid_number() {
        let err = decode("0 1 2 three 1 0 0 0\n").unwrap_err();
        match err {
            FormatError::Parse { line, reason, .. } => {
                assert_eq!(line, 1);
                assert!(reason.contains("three"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_save_failure_closes_sink() {
        let closed = Arc::new(AtomicBool::new(false));
        let first_line_len = "0 1 2 3 1 0 0 0\n".len();
        let sink = FailingSink {
            written: Vec::new(),
            limit: first_line_len,
            closed: Arc::clone(&closed),
        };

        let err = save(&two_frames(), sink).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
        assert!(closed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_save_success_closes_sink() {
        let closed = Arc::new(AtomicBool::new(false));
        let sink = FailingSink {
            written: Vec::new(),
            limit: 1024,
            closed: Arc::clone(&closed),
        };

        save(&two_frames(), sink).unwrap();
        assert!(closed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_save_to_path_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camera_path.txt");
        fs::write(&path, "stale contents that are much longer than the new file\n".repeat(10)).unwrap();

        save_to_path(&two_frames(), &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "0 1 2 3 1 0 0 0\n16 4 5 6 0 1 0 0\n"
        );
        assert_eq!(load_from_path(&path).unwrap(), two_frames());
    }

    #[test]
    fn test_save_to_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("camera_path.txt");
        let err = save_to_path(&two_frames(), &path).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}
