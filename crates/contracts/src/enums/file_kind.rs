use serde::{Deserialize, Serialize};

/// Renderer families for generated and uploaded files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    Audio,
    Pdf,
    Presentation,
    Html,
    Other,
}

const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "wav", "m4a", "ogg"];
const PRESENTATION_EXTENSIONS: [&str; 2] = ["ppt", "pptx"];

impl FileKind {
    pub fn code(&self) -> &'static str {
        match self {
            FileKind::Audio => "audio",
            FileKind::Pdf => "pdf",
            FileKind::Presentation => "presentation",
            FileKind::Html => "html",
            FileKind::Other => "other",
        }
    }

    /// Classify a lower- or mixed-case extension without the leading dot.
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Audio
        } else if PRESENTATION_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Presentation
        } else if ext == "pdf" {
            FileKind::Pdf
        } else if ext == "html" {
            FileKind::Html
        } else {
            FileKind::Other
        }
    }

    /// Infer the kind from a `Content-Type` header value.
    pub fn from_content_type(content_type: &str) -> Self {
        let ctype = content_type.to_ascii_lowercase();
        if ctype.contains("pdf") {
            FileKind::Pdf
        } else if ctype.starts_with("audio/") {
            FileKind::Audio
        } else if ctype.contains("html") {
            FileKind::Html
        } else if ctype.contains("presentation")
            || ctype.contains("powerpoint")
            || ctype.contains("officedocument")
        {
            FileKind::Presentation
        } else {
            FileKind::Other
        }
    }

    /// Classify a URL or bare filename by its extension.
    pub fn from_url(url: &str) -> Self {
        extension_of(url)
            .map(|ext| Self::from_extension(&ext))
            .unwrap_or(FileKind::Other)
    }
}

/// Lowercased extension of the last path segment, ignoring any query string.
///
/// Returns `None` when the segment has no dot or the extension is not
/// purely ASCII alphanumeric (`/a/b.tar-gz`, `/outputs/file`).
pub fn extension_of(url: &str) -> Option<String> {
    let path = url.split('?').next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
