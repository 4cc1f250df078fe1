//! Input/Output file handling with [`InputFile`] and [`OutputFile`].
//!
//! These types abstract over reading/writing both plaintext and gzip-compressed
//! input/output.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::io::{self, BufWriter};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use crate::error::VcfFrameError;

/// Check if a file is gzipped by looking for the magic numbers.
///
/// Detection is by content, never by filename extension, so a misnamed
/// file is still handled correctly. Files shorter than the magic number
/// are plain text.
fn is_gzipped_file(file_path: impl Into<PathBuf>) -> io::Result<bool> {
    let mut file = File::open(file_path.into())?;
    let mut buffer = [0; 2];

    match file.read_exact(&mut buffer) {
        Ok(()) => Ok(buffer == [0x1f, 0x8b]),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

/// Represents an input file.
///
/// This struct is used to handle operations on an input file, such as reading from the file.
/// This abstracts how data is read in, allowing for both plaintext and gzip-compressed input
/// to be read through a common interface.
#[derive(Clone, Debug)]
pub struct InputFile {
    pub filepath: PathBuf,
}

impl InputFile {
    /// Constructs a new `InputFile`.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }

    /// Opens the file and returns a buffered reader.
    ///
    /// If the file's contents are gzip-compressed, this method will
    /// automatically handle the decompression. The single file handle is
    /// owned by the returned reader and released when it is dropped,
    /// whether iteration completes, errors, or is abandoned early.
    ///
    /// # Errors
    /// [`VcfFrameError::UnreadableFile`] if the path does not exist, is not
    /// a regular file, or its compressed contents cannot be decoded.
    pub fn reader(&self) -> Result<BufReader<Box<dyn Read>>, VcfFrameError> {
        let unreadable = |reason: String| VcfFrameError::UnreadableFile {
            path: self.filepath.clone(),
            reason,
        };

        let metadata =
            std::fs::metadata(&self.filepath).map_err(|e| unreadable(e.to_string()))?;
        if !metadata.is_file() {
            return Err(unreadable("not a regular file".to_string()));
        }

        let file = File::open(&self.filepath).map_err(|e| unreadable(e.to_string()))?;
        let is_gzipped = is_gzipped_file(&self.filepath)?;
        let stream: Box<dyn Read> = if is_gzipped {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        // pull the first buffer now, so a corrupt compressed stream fails
        // here rather than midway through parsing
        let mut reader = BufReader::new(stream);
        reader
            .fill_buf()
            .map(|_| ())
            .map_err(|e| unreadable(format!("could not decode contents: {}", e)))?;
        Ok(reader)
    }
}

enum OutputDestination {
    File(PathBuf),
    Stdout,
}

/// Represents an output file.
///
/// This struct is used to handle operations on an output file, such as writing to the file.
/// This abstracts writing both plaintext and gzip-compressed files.
pub struct OutputFile {
    destination: OutputDestination,
}

impl OutputFile {
    /// Constructs a new `OutputFile`.
    ///
    /// # Arguments
    ///
    /// * `filepath` - A string slice that holds the path to the file. If the file extension is
    ///   `.gz`, `OutputFile` will automatically write gzip-compressed output.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            destination: OutputDestination::File(filepath.into()),
        }
    }

    /// Constructs a new [`OutputFile`] for standard output.
    pub fn new_stdout() -> Self {
        Self {
            destination: OutputDestination::Stdout,
        }
    }

    /// Opens the file and returns a writer.
    ///
    /// If the file path ends with ".gz", the file is treated as gzip-compressed, and the
    /// function will handle compression automatically.
    pub fn writer(&self) -> io::Result<Box<dyn Write>> {
        let writer: Box<dyn Write> = match &self.destination {
            OutputDestination::File(path) => {
                let is_gzip = path.extension().is_some_and(|ext| ext == "gz");
                if is_gzip {
                    Box::new(BufWriter::new(GzEncoder::new(
                        File::create(path)?,
                        Compression::default(),
                    )))
                } else {
                    Box::new(BufWriter::new(File::create(path)?))
                }
            }
            OutputDestination::Stdout => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_gzipped_file, InputFile};
    use crate::error::VcfFrameError;
    use crate::test_utilities::{gzip_copy, temp_vcf_file};
    use std::io::BufRead;

    #[test]
    fn test_gzip_detection_by_content() {
        let plain = temp_vcf_file("##fileformat=VCFv4.2\n");
        assert!(!is_gzipped_file(plain.path()).unwrap());

        // the compressed copy keeps no telling extension; only the
        // magic bytes give it away
        let gzipped = gzip_copy(plain.path());
        assert!(is_gzipped_file(gzipped.path()).unwrap());
    }

    #[test]
    fn test_short_file_is_plain_text() {
        let short = temp_vcf_file("#");
        assert!(!is_gzipped_file(short.path()).unwrap());
    }

    #[test]
    fn test_transparent_reading() {
        let contents = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";
        let plain = temp_vcf_file(contents);
        let gzipped = gzip_copy(plain.path());

        for file in [plain.path(), gzipped.path()] {
            let reader = InputFile::new(file).reader().unwrap();
            let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
            assert_eq!(lines.len(), 2);
            assert_eq!(lines[0], "##fileformat=VCFv4.2");
        }
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let result = InputFile::new("does_not_exist.vcf").reader();
        assert!(matches!(
            result,
            Err(VcfFrameError::UnreadableFile { .. })
        ));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result = InputFile::new(dir.path()).reader();
        assert!(matches!(
            result,
            Err(VcfFrameError::UnreadableFile { .. })
        ));
    }
}
