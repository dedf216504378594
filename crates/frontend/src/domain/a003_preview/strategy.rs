//! Renderer selection for file previews.
//!
//! Everything here is pure: URLs come in already resolved against the API
//! base, and the view decides when to probe or follow redirects.

use crate::shared::api_utils::{encode_uri_component, join_url};
use contracts::enums::file_kind::{extension_of, FileKind};

pub const PREVIEW_ENDPOINT: &str = "/preview/";
pub const DEFAULT_DOWNLOAD_NAME: &str = "download";

/// Preview/download pair attached to a bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileActionGroup {
    /// Server-relative (or absolute) reference rendered by Preview/Play.
    pub preview: String,
    /// Reference behind the Download link; equals `preview` when none was given.
    pub download: String,
    pub kind: FileKind,
}

impl FileActionGroup {
    pub fn new(preview: impl Into<String>, download: Option<String>) -> Self {
        let preview = preview.into();
        let kind = FileKind::from_url(&preview);
        let download = download
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| preview.clone());
        Self {
            preview,
            download,
            kind,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.kind {
            FileKind::Audio => "Play",
            _ => "Preview",
        }
    }
}

/// Content of the preview modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewBody {
    Loading,
    Audio { src: String },
    /// `<embed type="application/pdf">`
    Embed { src: String },
    Frame { src: String },
    Unavailable { ext: Option<String> },
    Failed { error: String },
}

impl PreviewBody {
    pub fn unavailable_text(ext: Option<&str>) -> String {
        let label = match ext {
            Some(ext) if !ext.is_empty() => format!(".{}", ext),
            _ => "(unknown type)".to_string(),
        };
        format!(
            "Preview not available for {}. You can download the file below.",
            label
        )
    }
}

/// Filename for the `download` attribute: last path segment of `url`,
/// query stripped, percent-decoded.
pub fn download_name(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or_default();
    let segment = segment.split('?').next().unwrap_or_default();
    match urlencoding::decode(segment) {
        Ok(name) if !name.is_empty() => name.into_owned(),
        _ => DEFAULT_DOWNLOAD_NAME.to_string(),
    }
}

/// Server-side conversion endpoint for a presentation reference.
pub fn presentation_endpoint(reference: &str) -> String {
    let path = reference.split('?').next().unwrap_or(reference);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let name = urlencoding::decode(segment)
        .map(|n| n.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    format!("{}{}", PREVIEW_ENDPOINT, encode_uri_component(&name))
}

/// Default download reference for a presentation previewed without one.
pub fn presentation_download_fallback(reference: &str, outputs_path: &str) -> String {
    let path = reference.split('?').next().unwrap_or(reference);
    let segment = path.rsplit('/').next().unwrap_or(path);
    format!("{}{}", outputs_path, segment)
}

/// A missing extension means the modal asks the server what the file is.
pub fn needs_probe(reference: &str) -> bool {
    extension_of(reference).is_none()
}

/// Modal body for a known kind.
///
/// `base` is the API base used to resolve `reference` and the presentation
/// endpoint; `ext` only feeds the "not available" message.
pub fn body_for_kind(kind: FileKind, reference: &str, base: &str, ext: Option<String>) -> PreviewBody {
    let src = join_url(base, reference);
    match kind {
        FileKind::Audio => PreviewBody::Audio { src },
        FileKind::Presentation => PreviewBody::Frame {
            src: join_url(base, &presentation_endpoint(reference)),
        },
        FileKind::Pdf => PreviewBody::Embed { src },
        FileKind::Html => PreviewBody::Frame { src },
        FileKind::Other => PreviewBody::Unavailable { ext },
    }
}

/// Body for a converted presentation once redirects are resolved.
pub fn body_for_resolved(final_url: &str) -> PreviewBody {
    let path = final_url.split('?').next().unwrap_or(final_url);
    if path.to_ascii_lowercase().ends_with(".pdf") {
        PreviewBody::Embed {
            src: final_url.to_string(),
        }
    } else {
        PreviewBody::Frame {
            src: final_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_group_defaults_download_to_preview() {
        let group = FileActionGroup::new("/static/outputs/talk.mp3", None);
        assert_eq!(group.download, "/static/outputs/talk.mp3");
        assert_eq!(group.kind, FileKind::Audio);
        assert_eq!(group.button_label(), "Play");

        let group = FileActionGroup::new(
            "/static/outputs/deck.pdf",
            Some("/static/outputs/deck.pptx".to_string()),
        );
        assert_eq!(group.download, "/static/outputs/deck.pptx");
        assert_eq!(group.button_label(), "Preview");
    }

    #[test]
    fn test_download_name() {
        assert_eq!(
            download_name("https://h/static/outputs/My%20Deck.pptx?x=1"),
            "My Deck.pptx"
        );
        assert_eq!(download_name("https://h/static/outputs/"), "download");
        assert_eq!(download_name(""), "download");
        assert_eq!(download_name("report.pdf"), "report.pdf");
    }

    #[test]
    fn test_presentation_endpoint() {
        assert_eq!(presentation_endpoint("/static/outputs/deck.pptx"), "/preview/deck.pptx");
        assert_eq!(
            presentation_endpoint("/static/outputs/Q3%20plan.pptx?v=2"),
            "/preview/Q3%20plan.pptx"
        );
        assert_eq!(
            presentation_endpoint("/static/outputs/deck(1).pptx"),
            "/preview/deck(1).pptx"
        );
        assert_eq!(
            presentation_download_fallback("/static/outputs/deck.pptx", "/static/outputs/"),
            "/static/outputs/deck.pptx"
        );
    }

    #[test]
    fn test_body_for_kind() {
        let base = "https://h";
        assert_eq!(
            body_for_kind(FileKind::Pdf, "/static/outputs/a.pdf", base, Some("pdf".into())),
            PreviewBody::Embed {
                src: "https://h/static/outputs/a.pdf".into()
            }
        );
        assert_eq!(
            body_for_kind(FileKind::Presentation, "/static/outputs/a.pptx", base, None),
            PreviewBody::Frame {
                src: "https://h/preview/a.pptx".into()
            }
        );
        assert_eq!(
            body_for_kind(FileKind::Html, "/static/outputs/a.html", base, None),
            PreviewBody::Frame {
                src: "https://h/static/outputs/a.html".into()
            }
        );
        assert_eq!(
            body_for_kind(FileKind::Audio, "/static/outputs/a.wav", base, None),
            PreviewBody::Audio {
                src: "https://h/static/outputs/a.wav".into()
            }
        );
        assert_eq!(
            body_for_kind(FileKind::Other, "/static/outputs/a.docx", base, Some("docx".into())),
            PreviewBody::Unavailable {
                ext: Some("docx".into())
            }
        );
    }

    #[test]
    fn test_probe_only_without_extension() {
        assert!(needs_probe("/static/outputs/generated"));
        assert!(!needs_probe("/static/outputs/generated.docx"));
    }

    #[test]
    fn test_body_for_resolved() {
        assert_eq!(
            body_for_resolved("https://h/static/outputs/deck.PDF"),
            PreviewBody::Embed {
                src: "https://h/static/outputs/deck.PDF".into()
            }
        );
        assert_eq!(
            body_for_resolved("https://h/static/outputs/deck.html"),
            PreviewBody::Frame {
                src: "https://h/static/outputs/deck.html".into()
            }
        );
    }

    #[test]
    fn test_unavailable_text() {
        assert_eq!(
            PreviewBody::unavailable_text(Some("docx")),
            "Preview not available for .docx. You can download the file below."
        );
        assert_eq!(
            PreviewBody::unavailable_text(None),
            "Preview not available for (unknown type). You can download the file below."
        );
    }
}
