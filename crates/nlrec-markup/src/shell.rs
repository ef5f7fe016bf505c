//! The outer HTML document shared by every page.

use nlrec_core::types::PageMeta;

use crate::escape::escape;

/// Wrap a rendered body in the full document: head metadata, the emoji
/// favicon, and the page's style block injected exactly once.
pub fn page_shell(meta: &PageMeta, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>">
<style>{style}</style>
</head>
<body>
<div class="page">
{body}
</div>
</body>
</html>"#,
        title = escape(meta.title),
        icon = meta.icon,
    )
}
