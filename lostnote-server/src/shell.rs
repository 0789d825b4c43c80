//! HTML document shell shared by every page

use crate::nav::render_nav;
use lostnote_core::encoder::STYLESHEET;
use lostnote_core::reader::{NEXT_ZONE_START, PREVIOUS_ZONE_END};

/// Styles for the chrome around rendered pages
const SHELL_STYLES: &str = r#"body{margin:0;background:#e9eae6;font-family:Kalam,cursive,sans-serif}
body.ln-locked{overflow:hidden}
.ln-reader{min-height:100vh;position:relative}
.ln-surface{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem;cursor:pointer;box-sizing:border-box}
.ln-page{max-width:64rem;width:100%}
.ln-arrow{position:fixed;top:50%;transform:translateY(-50%);z-index:20;padding:.75rem 1rem;background:rgba(255,255,255,.8);border-radius:9999px;box-shadow:0 4px 12px rgba(0,0,0,.15);color:#1f2937;text-decoration:none;font-size:1.75rem}
.ln-prev{left:1rem}.ln-next{right:1rem}
.ln-indicator{position:fixed;bottom:1rem;left:50%;transform:translateX(-50%);z-index:20;background:rgba(255,255,255,.8);padding:.5rem 1rem;border-radius:9999px;color:#374151}
.ln-about-button{position:absolute;top:1rem;right:1rem;z-index:30;padding:.5rem 1rem;color:#374151;text-decoration:none}
.ln-backdrop{position:fixed;inset:0;background:rgba(0,0,0,.5);z-index:40}
.ln-dialog{position:fixed;inset:0;z-index:50;display:flex;align-items:center;justify-content:center;padding:1rem}
.ln-dialog-body{background:#fdfbf7;border-radius:.5rem;max-width:42rem;width:100%;max-height:90vh;overflow-y:auto;padding:2rem;position:relative}
.ln-dialog-close{position:absolute;top:1rem;right:1rem;color:#4b5563;text-decoration:none;font-size:1.5rem}
.ln-nav{position:fixed;top:1rem;left:1rem;z-index:50}
.ln-nav summary{list-style:none;cursor:pointer;padding:.75rem;background:rgba(255,255,255,.9);border-radius:.5rem}
.ln-nav-panel{position:fixed;top:0;left:0;height:100%;width:16rem;background:#e9eae6;padding:1.5rem;box-sizing:border-box}
.ln-nav-item{display:block;padding:.75rem 1rem;border-radius:.5rem;color:#374151;text-decoration:none;font-size:1.25rem}
.ln-nav-active{background:#e5e7eb;color:#111827;font-weight:600}
.ln-sheet{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:1rem;gap:1.5rem}
.ln-sheet-nav{display:flex;gap:1rem;align-items:center}
.ln-sheet-nav .ln-arrow,.ln-sheet-nav .ln-indicator{position:static;transform:none}
.ln-about{min-height:100vh;background:#fdfbf7;display:flex;align-items:center;justify-content:center;padding:1rem}
.ln-about-card{max-width:48rem;width:100%;background:#fff;border-radius:.5rem;padding:2rem}
.ln-signature{text-align:right;font-weight:600;margin-top:2rem}
"#;

/// Keyboard and click-zone navigation for the reader page
///
/// Navigation follows the arrow links the server rendered, so the server
/// stays the only owner of the page index.
pub fn reader_script() -> String {
    format!(
        r#"(function () {{
  var prev = document.getElementById("ln-prev");
  var next = document.getElementById("ln-next");
  var close = document.getElementById("ln-about-close");
  function go(link) {{ if (link) {{ window.location.href = link.href; }} }}
  window.addEventListener("keydown", function (e) {{
    if (e.key === "ArrowLeft") {{ go(prev); }}
    else if (e.key === "ArrowRight") {{ go(next); }}
    else if (e.key === "Escape") {{ go(close); }}
  }});
  var surface = document.getElementById("ln-surface");
  if (surface) {{
    surface.addEventListener("click", function (e) {{
      var rect = surface.getBoundingClientRect();
      if (!(rect.width > 0)) {{ return; }}
      var ratio = (e.clientX - rect.left) / rect.width;
      if (ratio > {next_start}) {{ go(next); }}
      else if (ratio < {prev_end}) {{ go(prev); }}
    }});
  }}
}})();
"#,
        next_start = NEXT_ZONE_START,
        prev_end = PREVIOUS_ZONE_END,
    )
}

/// A complete HTML document
pub struct Document<'a> {
    /// Tags from the metadata provider
    pub head: String,

    /// Request path, used for the active navigation item
    pub path: &'a str,

    pub body: String,

    /// Inline script appended to the body
    pub script: Option<String>,

    /// Lock page scroll while an overlay is open
    pub scroll_locked: bool,
}

impl Document<'_> {
    pub fn render(&self) -> String {
        let body_class = if self.scroll_locked {
            " class=\"ln-locked\""
        } else {
            ""
        };
        let script = self
            .script
            .as_deref()
            .map(|s| format!("<script>\n{s}</script>\n"))
            .unwrap_or_default();
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\"/>\n{head}\
             <link rel=\"manifest\" href=\"/manifest.webmanifest\"/>\n\
             <meta name=\"theme-color\" content=\"#e9eae6\"/>\n\
             <style>\n{STYLESHEET}{SHELL_STYLES}</style>\n</head>\n<body{body_class}>\n{nav}{body}{script}</body>\n</html>\n",
            head = self.head,
            nav = render_nav(self.path),
            body = self.body,
        )
    }
}
