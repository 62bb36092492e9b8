//! Fixed layout of a generated project

/// A file produced from a bundled template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFile {
    /// Output path, relative to the project root
    pub destination: &'static str,
    /// Template identifier in the store
    pub template: &'static str,
}

/// Directories created under the project root, parents included
pub const PROJECT_DIRECTORIES: &[&str] = &[
    "views",
    "public/css",
    "public/js",
    "public/lib",
    "routes",
    "controllers",
];

/// Every file written into a new project
pub const PROJECT_FILES: &[ProjectFile] = &[
    ProjectFile {
        destination: "views/index.html",
        template: "html/index.html",
    },
    ProjectFile {
        destination: "public/css/style.css",
        template: "css/style.css",
    },
    ProjectFile {
        destination: "public/js/app.js",
        template: "js/index.js",
    },
    ProjectFile {
        destination: "public/lib/htmx.min.js",
        template: "lib/htmx.min.js",
    },
    ProjectFile {
        destination: "routes/userRoutes.go",
        template: "go/userRoutes.go",
    },
    ProjectFile {
        destination: "controllers/CreateUserHandler.go",
        template: "go/userHandler.go",
    },
    ProjectFile {
        destination: "app.go",
        template: "go/app.go",
    },
    ProjectFile {
        destination: "Makefile",
        template: "Makefile",
    },
];
