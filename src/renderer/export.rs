//! Named export files for signatures

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use tracing::debug;

use crate::signature::Signature;

use super::png::render_png;
use super::svg::render_svg;
use super::ExportConfig;

/// An export payload ready to be saved or offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Encode as a `data:` URL
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            BASE64_STANDARD.encode(&self.bytes)
        )
    }

    /// Write into `dir` under the export file name, returning the written path
    pub fn save_in(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// File name for an export of `input`, e.g. `Ada-signature.svg`
///
/// Path separators and control characters are replaced with `_`.
pub fn export_file_name(input: &str, extension: &str) -> String {
    let stem: String = input
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}-signature.{}", stem, extension)
}

/// Export a signature as an SVG file
///
/// `None` when the input is empty or no key resolved.
pub fn export_svg(signature: &Signature, config: &ExportConfig) -> Option<ExportFile> {
    if signature.input().is_empty() {
        return None;
    }
    let svg = render_svg(signature.path(), config)?;
    debug!(bytes = svg.len(), "exported signature svg");

    Some(ExportFile {
        file_name: export_file_name(signature.input(), "svg"),
        mime_type: "image/svg+xml",
        bytes: svg.into_bytes(),
    })
}

/// Export a signature as a PNG file
///
/// `None` when the input is empty, no key resolved, or rasterization failed.
pub fn export_png(signature: &Signature, config: &ExportConfig) -> Option<ExportFile> {
    if signature.input().is_empty() {
        return None;
    }
    let bytes = render_png(signature.path(), config)?;

    Some(ExportFile {
        file_name: export_file_name(signature.input(), "png"),
        mime_type: "image/png",
        bytes,
    })
}

/// Export a signature as PNG on a background thread
///
/// `on_complete` runs on the worker thread with the finished file; it is not
/// called when the export produces nothing. No thread is spawned for an empty
/// signature. Every call works on its own copy of the inputs, so concurrent
/// exports are independent.
pub fn export_png_async<F>(
    signature: &Signature,
    config: &ExportConfig,
    on_complete: F,
) -> Option<JoinHandle<()>>
where
    F: FnOnce(ExportFile) + Send + 'static,
{
    if signature.input().is_empty() || signature.is_empty() {
        return None;
    }

    let signature = signature.clone();
    let config = config.clone();
    Some(thread::spawn(move || {
        if let Some(file) = export_png(&signature, &config) {
            on_complete(file);
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::ANSI;
    use crate::renderer::GridConfig;
    use std::sync::mpsc;

    fn sig(input: &str) -> Signature {
        Signature::compute(input, &ANSI, &GridConfig::default())
    }

    #[test]
    fn test_file_names() {
        assert_eq!(export_file_name("Ada", "svg"), "Ada-signature.svg");
        assert_eq!(export_file_name("a/b\nc", "png"), "a_b_c-signature.png");
        assert_eq!(export_file_name("[Numpad9]", "svg"), "[Numpad9]-signature.svg");
    }

    #[test]
    fn test_empty_input_exports_nothing() {
        let config = ExportConfig::default();
        assert!(export_svg(&sig(""), &config).is_none());
        assert!(export_png(&sig(""), &config).is_none());
    }

    #[test]
    fn test_unresolvable_input_exports_nothing() {
        let config = ExportConfig::default();
        assert!(export_svg(&sig("!!!"), &config).is_none());
        assert!(export_png(&sig("!!!"), &config).is_none());
    }

    #[test]
    fn test_export_svg() {
        let file = export_svg(&sig("AS"), &ExportConfig::default()).unwrap();
        assert_eq!(file.file_name, "AS-signature.svg");
        assert_eq!(file.mime_type, "image/svg+xml");
        let text = String::from_utf8(file.bytes).unwrap();
        assert!(text.contains(r#"d="M 108 181 L 156 181""#));
    }

    #[test]
    fn test_export_png() {
        let file = export_png(&sig("AS"), &ExportConfig::default()).unwrap();
        assert_eq!(file.file_name, "AS-signature.png");
        assert_eq!(file.mime_type, "image/png");
        assert!(file.bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_data_url() {
        let file = ExportFile {
            file_name: "x-signature.svg".to_string(),
            mime_type: "image/svg+xml",
            bytes: b"<svg/>".to_vec(),
        };
        assert_eq!(file.to_data_url(), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_save_in_writes_export_file_name() {
        let dir = std::env::temp_dir().join(format!("keysig-save-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let file = export_svg(&sig("Ada"), &ExportConfig::default()).unwrap();
        let path = file.save_in(&dir).unwrap();
        assert_eq!(path, dir.join("Ada-signature.svg"));
        assert_eq!(fs::read(&path).unwrap(), file.bytes);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_async_export_invokes_callback() {
        let (tx, rx) = mpsc::channel();
        let handle = export_png_async(&sig("AS"), &ExportConfig::default(), move |file| {
            tx.send(file).unwrap();
        })
        .expect("should spawn");
        handle.join().unwrap();

        let file = rx.recv().unwrap();
        assert_eq!(file.file_name, "AS-signature.png");
    }

    #[test]
    fn test_async_exports_are_independent() {
        let (tx, rx) = mpsc::channel();
        let config = ExportConfig::default();
        let handles: Vec<_> = ["AS", "QWERTY"]
            .iter()
            .filter_map(|input| {
                let tx = tx.clone();
                export_png_async(&sig(input), &config, move |file| {
                    tx.send(file.file_name).unwrap();
                })
            })
            .collect();
        drop(tx);
        for handle in handles {
            handle.join().unwrap();
        }

        let mut names: Vec<_> = rx.iter().collect();
        names.sort();
        assert_eq!(names, vec!["AS-signature.png", "QWERTY-signature.png"]);
    }

    #[test]
    fn test_async_export_of_empty_signature_is_noop() {
        let handle = export_png_async(&sig(""), &ExportConfig::default(), |_| {
            panic!("callback must not run");
        });
        assert!(handle.is_none());
    }
}
