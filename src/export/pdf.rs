//! Single-page PDF export of a captured frame
//!
//! The frame is JPEG-encoded and embedded as a `/DCTDecode` image XObject
//! stretched over the whole page, so no PDF library is needed: the document
//! is five objects and a cross-reference table.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use crate::error::ExportError;
use crate::gfx::rendering::CapturedFrame;

/// A4 width in points.
pub const A4_WIDTH_PT: f32 = 595.28;

const JPEG_QUALITY: u8 = 92;

/// Builds `<prefix>-<selected>.pdf`.
///
/// Characters outside `[A-Za-z0-9_-]` in the selection are replaced by `-`
/// so a stray identifier can never name a path outside the output folder.
pub fn file_name(prefix: &str, selected: &str) -> String {
    let mut stem: String = selected
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    if stem.is_empty() {
        stem.push_str("default");
    }
    format!("{}-{}.pdf", prefix, stem)
}

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// A4-wide page whose height keeps the `width x height` pixel aspect.
    pub fn fit_width(width: u32, height: u32) -> Self {
        let aspect = height as f32 / width.max(1) as f32;
        Self {
            width: A4_WIDTH_PT,
            height: A4_WIDTH_PT * aspect,
        }
    }
}

/// JPEG-encodes an RGBA frame, dropping alpha.
pub fn encode_jpeg(frame: &CapturedFrame) -> Result<Vec<u8>, ExportError> {
    if frame.is_empty() || !frame.is_well_formed() {
        return Err(ExportError::FrameSize {
            width: frame.width,
            height: frame.height,
            len: frame.pixels.len(),
        });
    }

    let rgb: Vec<u8> = frame
        .pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode(&rgb, frame.width, frame.height, ExtendedColorType::Rgb8)?;
    Ok(jpeg)
}

/// Assembles a PDF 1.4 document showing one JPEG image across one page.
pub fn build_image_pdf(jpeg: &[u8], width: u32, height: u32, page: PageSize) -> Vec<u8> {
    let mut doc: Vec<u8> = Vec::with_capacity(jpeg.len() + 1024);
    let mut offsets = Vec::with_capacity(5);

    doc.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let content = format!("q\n{:.2} 0 0 {:.2} 0 0 cm\n/Im0 Do\nQ\n", page.width, page.height);

    let objects: [Vec<u8>; 3] = [
        b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>",
            page.width, page.height
        )
        .into_bytes(),
    ];
    for (i, body) in objects.iter().enumerate() {
        offsets.push(doc.len());
        doc.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
        doc.extend_from_slice(body);
        doc.extend_from_slice(b"\nendobj\n");
    }

    offsets.push(doc.len());
    doc.extend_from_slice(
        format!(
            "4 0 obj\n<< /Type /XObject /Subtype /Image /Width {} /Height {} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
            width,
            height,
            jpeg.len()
        )
        .as_bytes(),
    );
    doc.extend_from_slice(jpeg);
    doc.extend_from_slice(b"\nendstream\nendobj\n");

    offsets.push(doc.len());
    doc.extend_from_slice(format!("5 0 obj\n<< /Length {} >>\nstream\n", content.len()).as_bytes());
    doc.extend_from_slice(content.as_bytes());
    doc.extend_from_slice(b"endstream\nendobj\n");

    let xref_offset = doc.len();
    doc.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
    // each entry is exactly 20 bytes
    doc.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        doc.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    doc.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    doc
}

/// Encodes `frame` and writes it to `path` as a one-page PDF.
pub fn write_image_pdf(path: &Path, frame: &CapturedFrame) -> Result<(), ExportError> {
    let jpeg = encode_jpeg(frame)?;
    let doc = build_image_pdf(&jpeg, frame.width, frame.height, PageSize::fit_width(frame.width, frame.height));

    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(&doc).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(())
}

/// Writes exported documents into one folder.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Writes `frame` on the calling thread.
    pub fn export(&self, file_name: &str, frame: &CapturedFrame) -> Result<PathBuf, ExportError> {
        let path = self.path_for(file_name);
        write_image_pdf(&path, frame)?;
        Ok(path)
    }

    /// Encodes and writes `frame` on a worker thread.
    ///
    /// Without a frame nothing happens and `None` is returned.
    pub fn spawn(&self, file_name: &str, frame: Option<CapturedFrame>) -> Option<ExportJob> {
        let Some(frame) = frame.filter(|frame| !frame.is_empty()) else {
            log::debug!("No captured frame, skipping export of {}", file_name);
            return None;
        };

        let path = self.path_for(file_name);
        let worker_path = path.clone();
        let handle = thread::spawn(move || write_image_pdf(&worker_path, &frame).map(|()| worker_path));

        log::debug!("Exporting {}", path.display());
        Some(ExportJob { path, handle })
    }
}

/// An export running on its own thread.
pub struct ExportJob {
    path: PathBuf,
    handle: JoinHandle<Result<PathBuf, ExportError>>,
}

impl ExportJob {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the worker and returns the written path.
    pub fn join(self) -> Result<PathBuf, ExportError> {
        self.handle.join().map_err(|_| ExportError::WorkerPanicked)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32) -> CapturedFrame {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 16) as u8, (y * 16) as u8, 128, 255]);
            }
        }
        CapturedFrame { width, height, pixels }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("tech-animation", "database"), "tech-animation-database.pdf");
        assert_eq!(file_name("tech-animation", " ai-ml "), "tech-animation-ai-ml.pdf");
        assert_eq!(file_name("tech-animation", "../etc"), "tech-animation----etc.pdf");
        assert_eq!(file_name("tech-animation", ""), "tech-animation-default.pdf");
    }

    #[test]
    fn test_page_keeps_aspect() {
        let page = PageSize::fit_width(1200, 800);
        assert_eq!(page.width, A4_WIDTH_PT);
        assert!((page.height - A4_WIDTH_PT * 2.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_document_structure() {
        let jpeg = encode_jpeg(&frame(8, 4)).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let doc = build_image_pdf(&jpeg, 8, 4, PageSize::fit_width(8, 4));
        assert!(doc.starts_with(b"%PDF-1.4\n"));
        assert!(doc.ends_with(b"%%EOF\n"));
        assert!(find(&doc, b"/Filter /DCTDecode").is_some());
        assert!(find(&doc, b"/MediaBox [0 0 595.28 297.64]").is_some());

        // every xref entry points at its object header
        let xref = find(&doc, b"xref\n0 6\n").unwrap();
        let entries = &doc[xref + 9..];
        for n in 1..=5 {
            let entry = &entries[n * 20..n * 20 + 10];
            let offset: usize = std::str::from_utf8(entry).unwrap().parse().unwrap();
            let header = format!("{} 0 obj", n);
            assert!(doc[offset..].starts_with(header.as_bytes()), "object {n}");
        }

        let startxref = find(&doc, b"startxref\n").unwrap();
        let tail = std::str::from_utf8(&doc[startxref + 10..]).unwrap();
        let offset: usize = tail.lines().next().unwrap().parse().unwrap();
        assert_eq!(offset, xref);
    }

    #[test]
    fn test_malformed_frame_is_rejected() {
        let bad = CapturedFrame {
            width: 4,
            height: 4,
            pixels: vec![0; 10],
        };
        assert!(matches!(
            encode_jpeg(&bad),
            Err(ExportError::FrameSize { width: 4, height: 4, len: 10 })
        ));
    }

    #[test]
    fn test_export_writes_one_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path());
        let job = exporter
            .spawn("tech-animation-database.pdf", Some(frame(16, 9)))
            .expect("job");
        let path = job.join().unwrap();

        assert_eq!(path, dir.path().join("tech-animation-database.pdf"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_missing_capture_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path());
        assert!(exporter.spawn("tech-animation-iot.pdf", None).is_none());

        let empty = CapturedFrame {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        assert!(exporter.spawn("tech-animation-iot.pdf", Some(empty)).is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unwritable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path().join("missing"));
        let err = exporter.export("x.pdf", &frame(2, 2)).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
