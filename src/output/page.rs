//! Full-document assembly
//!
//! The emitted page is fully self-contained: structure, styling, and
//! behavior are all inline, so the only external fetches a browser makes
//! are for the content files themselves. Assembly is a pure function of
//! the serialized tree plus the rendering configuration.

use super::config::Layout;
use super::html::{HtmlRenderer, escape};

const RESET_CSS: &str = "\
body, html {
    margin: 0;
    padding: 0;
    height: 100%;
    font-family: Arial, sans-serif;
    overflow: hidden;
}
";

const TREE_CSS: &str = "\
.directory-tree {
    padding: 16px;
}

.folder {
    list-style-type: none;
    font-weight: bold;
    margin: 10px 0;
}

.file {
    list-style-type: none;
    margin: 5px 0 5px 20px;
    color: #666;
}

ul {
    padding-left: 20px;
    margin: 0;
}

a {
    text-decoration: none;
    color: #0366d6;
}

a:hover {
    text-decoration: underline;
}

.folder-name {
    cursor: pointer;
    color: #333;
    display: block;
    padding: 5px 0;
}

.folder-name:hover {
    color: #0366d6;
}

.file-icon {
    margin-right: 5px;
}

.error {
    color: red;
    font-style: italic;
}
";

const SIDEBAR_CSS: &str = "\
.banner {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 60px;
    background-color: #24292e;
    color: white;
    display: flex;
    align-items: center;
    padding: 0 16px;
    z-index: 1000;
}

.menu-button {
    background: none;
    border: none;
    color: white;
    font-size: 24px;
    cursor: pointer;
    padding: 8px;
    margin-right: 16px;
}

.banner-title {
    font-size: 1.2em;
    margin: 0;
}

.sidebar {
    position: fixed;
    top: 60px;
    left: -300px;
    width: 300px;
    height: calc(100% - 60px);
    background-color: #f5f5f5;
    overflow-y: auto;
    transition: left 0.3s ease;
    z-index: 900;
    box-shadow: 2px 0 5px rgba(0,0,0,0.1);
}

.sidebar.open {
    left: 0;
}

.overlay {
    position: fixed;
    top: 60px;
    left: 0;
    right: 0;
    bottom: 0;
    background-color: rgba(0,0,0,0.5);
    display: none;
    z-index: 800;
}

.overlay.open {
    display: block;
}

.main-content {
    position: fixed;
    top: 60px;
    left: 0;
    right: 0;
    bottom: 0;
    background-color: white;
}

iframe {
    width: 100%;
    height: 100%;
    border: none;
}

@media (min-width: 1024px) {
    .menu-button {
        display: none;
    }

    .sidebar {
        left: 0;
        width: 300px;
        box-shadow: none;
        border-right: 1px solid #ddd;
    }

    .main-content {
        left: 300px;
    }

    .overlay {
        display: none !important;
    }
}
";

const SPLIT_CSS: &str = "\
.layout {
    display: flex;
    height: 100%;
}

.nav-panel {
    width: 300px;
    overflow-y: auto;
    background-color: #f5f5f5;
    border-right: 1px solid #ddd;
}

.main-content {
    flex: 1;
    background-color: white;
}

iframe {
    width: 100%;
    height: 100%;
    border: none;
}
";

const FLAT_CSS: &str = "\
body {
    max-width: 720px;
    margin: 0 auto;
    padding: 24px;
    font-family: Arial, sans-serif;
}
";

const COLLAPSE_JS: &str = "\
    document.querySelectorAll('.folder-name').forEach(function (folder) {
        var list = folder.nextElementSibling;
        if (list && list.tagName === 'UL') {
            list.style.display = 'none';
        }
        folder.addEventListener('click', function () {
            var next = this.nextElementSibling;
            if (next && next.tagName === 'UL') {
                next.style.display = next.style.display === 'none' ? 'block' : 'none';
            }
        });
    });
";

const VIEWER_JS: &str = "\
    var iframe = document.getElementById('content-iframe');
    document.querySelectorAll('.file a[data-path]').forEach(function (link) {
        link.addEventListener('click', function (event) {
            event.preventDefault();
            iframe.src = this.getAttribute('data-path');
        });
    });
";

const SIDEBAR_JS: &str = "\
    var menuButton = document.getElementById('menuButton');
    var sidebar = document.getElementById('sidebar');
    var overlay = document.getElementById('overlay');
    var isMobile = window.innerWidth < 1024;

    function toggleSidebar() {
        sidebar.classList.toggle('open');
        overlay.classList.toggle('open');
    }

    menuButton.addEventListener('click', toggleSidebar);
    overlay.addEventListener('click', toggleSidebar);

    window.addEventListener('resize', function () {
        var wasMobile = isMobile;
        isMobile = window.innerWidth < 1024;
        if (wasMobile !== isMobile) {
            sidebar.classList.remove('open');
            overlay.classList.remove('open');
        }
    });

    document.querySelectorAll('.file a').forEach(function (link) {
        link.addEventListener('click', function () {
            if (isMobile) {
                toggleSidebar();
            }
        });
    });
";

impl HtmlRenderer {
    /// Wrap serialized tree markup into the complete document.
    ///
    /// Pure function of the markup and the renderer's configuration: the
    /// same inputs always produce a byte-identical document.
    pub fn render_page(&self, tree_markup: &str) -> String {
        let config = self.config();
        let title = escape(&config.title);

        let mut page = String::with_capacity(tree_markup.len() + 8 * 1024);
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        page.push_str("    <meta charset=\"UTF-8\">\n");
        page.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        page.push_str("    <title>");
        page.push_str(&title);
        page.push_str("</title>\n");

        page.push_str("    <style>\n");
        match config.layout {
            Layout::Sidebar => {
                page.push_str(RESET_CSS);
                page.push_str(TREE_CSS);
                page.push_str(SIDEBAR_CSS);
            }
            Layout::Split => {
                page.push_str(RESET_CSS);
                page.push_str(TREE_CSS);
                page.push_str(SPLIT_CSS);
            }
            Layout::Flat => {
                page.push_str(FLAT_CSS);
                page.push_str(TREE_CSS);
            }
        }
        page.push_str("    </style>\n");

        page.push_str("    <script>\n");
        page.push_str("document.addEventListener('DOMContentLoaded', function () {\n");
        page.push_str(COLLAPSE_JS);
        if config.layout.has_viewer() {
            page.push_str(VIEWER_JS);
        }
        if config.layout == Layout::Sidebar {
            page.push_str(SIDEBAR_JS);
        }
        page.push_str("});\n");
        page.push_str("    </script>\n");

        page.push_str("</head>\n<body>\n");
        match config.layout {
            Layout::Sidebar => {
                page.push_str("    <div class=\"banner\">\n");
                page.push_str(
                    "        <button id=\"menuButton\" class=\"menu-button\">☰</button>\n",
                );
                page.push_str("        <h1 class=\"banner-title\">");
                page.push_str(&title);
                page.push_str("</h1>\n    </div>\n");
                page.push_str("    <div id=\"sidebar\" class=\"sidebar\">\n");
                page.push_str("        <div class=\"directory-tree\">\n");
                page.push_str(tree_markup);
                page.push_str("        </div>\n    </div>\n");
                page.push_str("    <div id=\"overlay\" class=\"overlay\"></div>\n");
                page.push_str("    <div class=\"main-content\">\n");
                page.push_str(
                    "        <iframe id=\"content-iframe\" name=\"content-iframe\" src=\"about:blank\"></iframe>\n",
                );
                page.push_str("    </div>\n");
            }
            Layout::Split => {
                page.push_str("    <div class=\"layout\">\n");
                page.push_str("        <div class=\"nav-panel directory-tree\">\n");
                page.push_str(tree_markup);
                page.push_str("        </div>\n");
                page.push_str("        <div class=\"main-content\">\n");
                page.push_str(
                    "            <iframe id=\"content-iframe\" name=\"content-iframe\" src=\"about:blank\"></iframe>\n",
                );
                page.push_str("        </div>\n    </div>\n");
            }
            Layout::Flat => {
                page.push_str("    <h1>");
                page.push_str(&title);
                page.push_str("</h1>\n");
                page.push_str("    <div class=\"directory-tree\">\n");
                page.push_str(tree_markup);
                page.push_str("    </div>\n");
            }
        }
        page.push_str("</body>\n</html>\n");
        page
    }
}
