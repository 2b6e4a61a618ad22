//! The template-preview content pipeline.
//!
//! Turns a template's declared file set into markup safe to hand to an
//! isolated preview host at a different origin/path: each fetched document
//! gets a `<base href>` pointing back at its source directory (so relative
//! asset references keep resolving) and a small script that fixes
//! same-document anchor navigation inside a nested browsing context.
//!
//! Fetching is injected as an async closure, so the whole pipeline runs and
//! tests on the native target; `nexus-web` passes a `gloo-net` backed
//! fetcher.

use futures::future;
use std::future::Future;
use thiserror::Error;

use crate::catalog::TemplateContent;

/// Virtual path of the document the preview host actually displays.
pub const VIRTUAL_INDEX: &str = "/index.html";

/// A file retrieval failure. The message always names the offending path.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("failed to fetch {path}: {status}")]
    Http {
        /// Source path that was requested.
        path: String,
        /// Status line reported by the server, e.g. `404 Not Found`.
        status: String,
    },
    /// The request never produced a response.
    #[error("failed to fetch {path}: {reason}")]
    Network {
        /// Source path that was requested.
        path: String,
        /// Transport-level failure description.
        reason: String,
    },
}

/// Output of one resolution pass: virtual path -> final markup, in declared
/// order, plus a human-readable error when the batch failed.
///
/// A resolution is replaced wholesale on every selection change, never
/// mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPreview {
    /// Virtual path -> renderable markup.
    pub files: Vec<(String, String)>,
    /// Set when any file in the batch failed; `files` then holds a single
    /// synthesized error document.
    pub error: Option<String>,
}

impl ResolvedPreview {
    fn placeholder() -> Self {
        Self {
            files: vec![(VIRTUAL_INDEX.to_string(), placeholder_document())],
            error: None,
        }
    }

    fn failed(err: &FetchError) -> Self {
        Self {
            files: vec![(VIRTUAL_INDEX.to_string(), error_document(&err.to_string()))],
            error: Some("Failed to load template files.".to_string()),
        }
    }

    /// Markup for the document the host should display: the virtual index
    /// entry, or the first entry when no index was declared.
    pub fn index_markup(&self) -> Option<&str> {
        self.files
            .iter()
            .find(|(virtual_path, _)| virtual_path == VIRTUAL_INDEX)
            .or_else(|| self.files.first())
            .map(|(_, markup)| markup.as_str())
    }
}

/// Ticket identifying one resolution pass, issued by [`ResolutionSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionTicket(u64);

/// Latest-wins commit guard for concurrent resolutions.
///
/// A selection change can start a new fetch batch while an older one is
/// still in flight, and the batches may finish in either order. Each batch
/// begins with a ticket; only the ticket begun last may commit its result.
/// The readiness gate's epoch handles the same race for timers - this type
/// covers the fetch side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionSequence {
    latest: u64,
}

impl ResolutionSequence {
    /// A sequence with no resolution begun yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new resolution, superseding every earlier ticket.
    pub fn begin(&mut self) -> ResolutionTicket {
        self.latest += 1;
        ResolutionTicket(self.latest)
    }

    /// Whether the ticket still belongs to the newest resolution.
    pub fn is_current(&self, ticket: ResolutionTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Resolve a template's content into displayable markup.
///
/// `Files` entries are fetched jointly and patched; the batch is
/// all-or-nothing - one failing file invalidates the happy-path output, and
/// a single error document is synthesized in its place so the UI still has
/// something to render. `Inline` content and the no-content case skip the
/// network entirely.
pub async fn resolve_preview<F, Fut>(content: Option<&TemplateContent>, fetch: F) -> ResolvedPreview
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String, FetchError>>,
{
    let entries = match content {
        None => return ResolvedPreview::placeholder(),
        Some(TemplateContent::Inline(html)) => {
            return ResolvedPreview {
                files: vec![(VIRTUAL_INDEX.to_string(), html.clone())],
                error: None,
            };
        }
        Some(TemplateContent::Files(entries)) => entries,
    };
    if entries.is_empty() {
        return ResolvedPreview::placeholder();
    }

    let batch = entries.iter().map(|(virtual_path, source_path)| {
        let request = fetch(source_path.clone());
        async move {
            let body = request.await?;
            Ok::<_, FetchError>((virtual_path.clone(), patch_document(&body, source_path)))
        }
    });

    let mut files = Vec::with_capacity(entries.len());
    for result in future::join_all(batch).await {
        match result {
            Ok(entry) => files.push(entry),
            Err(err) => return ResolvedPreview::failed(&err),
        }
    }
    ResolvedPreview { files, error: None }
}

/// Base directory of a source path: every segment but the last, joined,
/// with a trailing separator. `/templates/foo/index.html` -> `/templates/foo/`.
pub fn base_dir_of(source_path: &str) -> String {
    let mut parts: Vec<&str> = source_path.split('/').collect();
    parts.pop();
    let mut base = parts.join("/");
    base.push('/');
    base
}

/// Apply both patch steps to a retrieved document, in order.
pub fn patch_document(html: &str, source_path: &str) -> String {
    let with_base = inject_base_tag(html, &base_dir_of(source_path));
    inject_anchor_fix(&with_base)
}

/// Inject `<base href>` as the first child of `<head>`, synthesizing a
/// minimal head when the document has none.
pub fn inject_base_tag(html: &str, base_href: &str) -> String {
    let tag = format!("<base href=\"{base_href}\">");
    match html.find("<head>") {
        Some(pos) => {
            let insert_at = pos + "<head>".len();
            let mut patched = String::with_capacity(html.len() + tag.len());
            patched.push_str(&html[..insert_at]);
            patched.push_str(&tag);
            patched.push_str(&html[insert_at..]);
            patched
        }
        None => format!("<head>{tag}</head>{html}"),
    }
}

/// Anchor fix-up injected into every fetched document. Only active inside a
/// nested browsing context: intercepts clicks on same-document anchors and
/// smooth-scrolls to the target, logging lookup failures instead of
/// propagating them.
const ANCHOR_FIX_SCRIPT: &str = r##"<script>
document.addEventListener('DOMContentLoaded', () => {
  if (window.self !== window.top) {
    document.querySelectorAll('a[href^="#"]').forEach(anchor => {
      anchor.addEventListener('click', function (e) {
        e.preventDefault();
        const href = this.getAttribute('href');
        if (href && href.length > 1) {
          try {
            const targetElement = document.querySelector(href);
            if (targetElement) {
              targetElement.scrollIntoView({ behavior: 'smooth', block: 'start' });
            }
          } catch (err) {
            console.error('Failed to scroll to anchor:', href, err);
          }
        }
      });
    });
  }
});
</script>"##;

/// Inject the anchor fix-up script just before `</body>`, or append it when
/// the document has no closing body tag.
pub fn inject_anchor_fix(html: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => {
            let mut patched = String::with_capacity(html.len() + ANCHOR_FIX_SCRIPT.len());
            patched.push_str(&html[..pos]);
            patched.push_str(ANCHOR_FIX_SCRIPT);
            patched.push_str(&html[pos..]);
            patched
        }
        None => {
            let mut patched = html.to_string();
            patched.push_str(ANCHOR_FIX_SCRIPT);
            patched
        }
    }
}

/// Static document shown when a selection has no content at all.
pub fn placeholder_document() -> String {
    "<html><body style=\"background-color: #0D1117; display: flex; align-items: center; \
     justify-content: center; color: #9ca3af; font-family: sans-serif;\">\
     <h1>Select a template or start creating!</h1></body></html>"
        .to_string()
}

/// In-place error panel substituted for the preview when a batch fails.
pub fn error_document(message: &str) -> String {
    format!(
        "<html lang=\"en\"><body style=\"background-color: #0D1117; color: #f87171; \
         text-align: center; padding: 2rem; font-family: sans-serif;\">\
         <h2>Error Loading Preview</h2><p>{}</p></body></html>",
        escape_html(message)
    )
}

/// Minimal HTML text escaping for values interpolated into synthesized
/// documents.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn base_dir_strips_final_segment() {
        assert_eq!(base_dir_of("/templates/foo/index.html"), "/templates/foo/");
        assert_eq!(base_dir_of("/index.html"), "/");
        assert_eq!(base_dir_of("index.html"), "/");
    }

    #[test]
    fn base_tag_lands_first_in_head() {
        let patched = inject_base_tag("<html><head><title>t</title></head></html>", "/a/b/");
        assert_eq!(
            patched,
            "<html><head><base href=\"/a/b/\"><title>t</title></head></html>"
        );
    }

    #[test]
    fn missing_head_is_synthesized() {
        let patched = inject_base_tag("<body>hi</body>", "/a/");
        assert_eq!(patched, "<head><base href=\"/a/\"></head><body>hi</body>");
    }

    #[test]
    fn anchor_fix_lands_before_closing_body() {
        let patched = inject_anchor_fix("<body><p>x</p></body>");
        assert!(patched.ends_with("</body>"));
        let script_at = patched.find("<script>").unwrap();
        assert!(script_at > patched.find("<p>x</p>").unwrap());
    }

    #[test]
    fn anchor_fix_appends_without_closing_body() {
        let patched = inject_anchor_fix("<p>x</p>");
        assert!(patched.starts_with("<p>x</p><script>"));
        assert!(patched.ends_with("</script>"));
    }

    #[test]
    fn no_content_resolves_to_placeholder_without_fetching() {
        let calls = Cell::new(0u32);
        let resolved = block_on(resolve_preview(None, |_path| {
            calls.set(calls.get() + 1);
            async { Ok::<String, FetchError>(String::new()) }
        }));
        assert_eq!(calls.get(), 0);
        assert_eq!(resolved.files.len(), 1);
        assert_eq!(resolved.error, None);
        assert!(resolved.files[0].1.contains("Select a template"));
    }

    #[test]
    fn empty_file_map_resolves_to_placeholder() {
        let content = TemplateContent::Files(vec![]);
        let resolved = block_on(resolve_preview(Some(&content), |_path| async {
            Ok::<String, FetchError>(String::new())
        }));
        assert_eq!(resolved.files.len(), 1);
        assert!(resolved.files[0].1.contains("Select a template"));
    }

    async fn refuse_fetch(_path: String) -> Result<String, FetchError> {
        panic!("this resolution must not fetch")
    }

    #[test]
    fn inline_content_passes_through_unpatched() {
        let content = TemplateContent::Inline("<html><body>draft</body></html>".into());
        let resolved = block_on(resolve_preview(Some(&content), refuse_fetch));
        assert_eq!(
            resolved.files,
            vec![(VIRTUAL_INDEX.to_string(), "<html><body>draft</body></html>".to_string())]
        );
    }

    #[test]
    fn successful_batch_patches_every_file_in_order() {
        let content = TemplateContent::Files(vec![
            ("/index.html".into(), "/templates/foo/index.html".into()),
            ("/about.html".into(), "/templates/foo/about.html".into()),
        ]);
        let resolved = block_on(resolve_preview(Some(&content), |path| async move {
            Ok::<String, FetchError>(format!("<html><head></head><body>{path}</body></html>"))
        }));
        assert_eq!(resolved.error, None);
        assert_eq!(resolved.files.len(), 2);
        assert_eq!(resolved.files[0].0, "/index.html");
        assert_eq!(resolved.files[1].0, "/about.html");
        for (_, markup) in &resolved.files {
            assert!(markup.contains("<base href=\"/templates/foo/\">"));
            assert!(markup.contains("scrollIntoView"));
        }
    }

    #[test]
    fn one_missing_file_fails_the_whole_batch() {
        let content = TemplateContent::Files(vec![
            ("/index.html".into(), "/templates/foo/index.html".into()),
            ("/style.css".into(), "/templates/foo/style.css".into()),
        ]);
        let resolved = block_on(resolve_preview(Some(&content), |path| async move {
            if path.ends_with(".css") {
                Err(FetchError::Http {
                    path,
                    status: "404 Not Found".into(),
                })
            } else {
                Ok("<html><head></head><body></body></html>".to_string())
            }
        }));
        assert_eq!(resolved.files.len(), 1);
        assert!(resolved.files[0].1.contains("/templates/foo/style.css"));
        assert!(resolved.files[0].1.contains("404 Not Found"));
        let error = resolved.error.expect("batch failure must surface an error");
        assert!(!error.is_empty());
    }

    #[test]
    fn index_markup_prefers_the_virtual_index() {
        let preview = ResolvedPreview {
            files: vec![
                ("/about.html".into(), "about".into()),
                ("/index.html".into(), "index".into()),
            ],
            error: None,
        };
        assert_eq!(preview.index_markup(), Some("index"));

        let no_index = ResolvedPreview {
            files: vec![("/about.html".into(), "about".into())],
            error: None,
        };
        assert_eq!(no_index.index_markup(), Some("about"));
    }

    #[test]
    fn beginning_a_resolution_supersedes_earlier_tickets() {
        let mut sequence = ResolutionSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));
        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn superseded_batch_is_never_committed() {
        let mut sequence = ResolutionSequence::new();
        let mut committed: Option<ResolvedPreview> = None;

        let first_content = TemplateContent::Inline("<html><body>first</body></html>".into());
        let first = sequence.begin();
        let second_content = TemplateContent::Inline("<html><body>second</body></html>".into());
        let second = sequence.begin();

        // The newer batch lands first and commits.
        let result = block_on(resolve_preview(Some(&second_content), refuse_fetch));
        if sequence.is_current(second) {
            committed = Some(result);
        }
        // The superseded batch finishes late; its result must be dropped.
        let result = block_on(resolve_preview(Some(&first_content), refuse_fetch));
        if sequence.is_current(first) {
            committed = Some(result);
        }

        let committed = committed.expect("the newest resolution must commit");
        assert!(committed.index_markup().unwrap_or("").contains("second"));
    }

    #[test]
    fn error_document_escapes_the_message() {
        let doc = error_document("bad <tag> & stuff");
        assert!(doc.contains("bad &lt;tag&gt; &amp; stuff"));
    }
}
