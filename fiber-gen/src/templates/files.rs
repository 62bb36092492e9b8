//! Template file contents
//!
//! Everything here is compiled into the binary. The sources live in the
//! crate's `templates/` directory.

/// Landing page with the htmx user form
pub const INDEX_HTML: &str = include_str!("../../templates/html/index.html");

/// Base stylesheet
pub const STYLE_CSS: &str = include_str!("../../templates/css/style.css");

/// Page script hooking into htmx events
pub const INDEX_JS: &str = include_str!("../../templates/js/index.js");

/// Slot for the htmx library, loads it from the CDN until vendored
pub const HTMX_MIN_JS: &str = include_str!("../../templates/lib/htmx.min.js");

/// Route registration for the users resource
pub const USER_ROUTES_GO: &str = include_str!("../../templates/go/userRoutes.go");

/// Handler answering the user form
pub const USER_HANDLER_GO: &str = include_str!("../../templates/go/userHandler.go");

/// Fiber entry point
pub const APP_GO: &str = include_str!("../../templates/go/app.go");

/// Build and run targets
pub const MAKEFILE: &str = include_str!("../../templates/Makefile");

/// Identifier → content for every bundled template
pub const EMBEDDED: &[(&str, &str)] = &[
    ("html/index.html", INDEX_HTML),
    ("css/style.css", STYLE_CSS),
    ("js/index.js", INDEX_JS),
    ("lib/htmx.min.js", HTMX_MIN_JS),
    ("go/userRoutes.go", USER_ROUTES_GO),
    ("go/userHandler.go", USER_HANDLER_GO),
    ("go/app.go", APP_GO),
    ("Makefile", MAKEFILE),
];
