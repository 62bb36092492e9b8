//! Writes the project layout to disk
//!
//! Every template is resolved and substituted in memory before anything
//! touches the filesystem, so a packaging defect fails the run without
//! writing a single file. After that, directories are created and files are
//! written in table order. Nothing is rolled back on failure.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::generator::Stage;
use super::layout::ProjectFile;
use crate::error::GenerateError;
use crate::templates::{substitute, TemplateStore, PLACEHOLDER};

/// File content ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Absolute or root-relative output path
    pub path: PathBuf,
    /// Content with the placeholder substituted
    pub content: String,
}

/// What a materialization run put on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Materialized {
    /// Directories ensured, in creation order
    pub directories: Vec<PathBuf>,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Renders templates for one project and writes them out
pub struct Materializer<'a> {
    store: &'a TemplateStore,
    project_name: &'a str,
}

impl<'a> Materializer<'a> {
    /// Create a materializer for `project_name` backed by `store`
    #[must_use]
    pub const fn new(store: &'a TemplateStore, project_name: &'a str) -> Self {
        Self {
            store,
            project_name,
        }
    }

    /// Resolve and substitute every entry of `mapping`
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TemplateNotFound`] for the first template
    /// missing from the store.
    pub fn render(
        &self,
        project_root: &Path,
        mapping: &[ProjectFile],
    ) -> Result<Vec<RenderedFile>, GenerateError> {
        mapping
            .iter()
            .map(|file| {
                let template = self.store.resolve(file.template)?;
                Ok(RenderedFile {
                    path: project_root.join(file.destination),
                    content: substitute(template, PLACEHOLDER, self.project_name),
                })
            })
            .collect()
    }

    /// Create each directory under `project_root`, parents included
    ///
    /// Directories that already exist are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::DirectoryCreationFailed`] for the first
    /// directory that cannot be created.
    pub fn create_directories(
        project_root: &Path,
        directories: &[&str],
    ) -> Result<Vec<PathBuf>, GenerateError> {
        directories
            .iter()
            .map(|dir| {
                let path = project_root.join(dir);
                fs::create_dir_all(&path).map_err(|source| {
                    GenerateError::DirectoryCreationFailed {
                        path: path.clone(),
                        source,
                    }
                })?;
                debug!(path = %path.display(), "directory ready");
                Ok(path)
            })
            .collect()
    }

    /// Write rendered files, replacing any existing content
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::FileWriteFailed`] for the first file that
    /// cannot be written. Earlier files stay on disk.
    pub fn write_files(files: &[RenderedFile]) -> Result<Vec<PathBuf>, GenerateError> {
        files
            .iter()
            .map(|file| {
                fs::write(&file.path, &file.content).map_err(|source| {
                    GenerateError::FileWriteFailed {
                        path: file.path.clone(),
                        source,
                    }
                })?;
                debug!(path = %file.path.display(), bytes = file.content.len(), "file written");
                Ok(file.path.clone())
            })
            .collect()
    }

    /// Render the mapping, create the directories and write every file
    ///
    /// `on_stage` is told once the directories exist and again once every
    /// file is written.
    ///
    /// # Errors
    ///
    /// Fails fast with the first error from [`Self::render`],
    /// [`Self::create_directories`] or [`Self::write_files`].
    pub fn materialize(
        &self,
        project_root: &Path,
        directories: &[&str],
        mapping: &[ProjectFile],
        mut on_stage: impl FnMut(Stage),
    ) -> Result<Materialized, GenerateError> {
        let rendered = self.render(project_root, mapping)?;

        let directories = Self::create_directories(project_root, directories)?;
        info!(count = directories.len(), "directories created");
        on_stage(Stage::DirectoriesCreated);

        let files = Self::write_files(&rendered)?;
        info!(count = files.len(), "files written");
        on_stage(Stage::FilesWritten);

        Ok(Materialized { directories, files })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::layout::{PROJECT_DIRECTORIES, PROJECT_FILES};
    use tempfile::TempDir;

    fn store() -> TemplateStore {
        [
            ("page", "<h1>{AppName}</h1>"),
            ("plain", "no placeholder"),
        ]
        .into_iter()
        .collect()
    }

    const MAPPING: &[ProjectFile] = &[
        ProjectFile {
            destination: "views/index.html",
            template: "page",
        },
        ProjectFile {
            destination: "README",
            template: "plain",
        },
    ];

    #[test]
    fn test_render_substitutes_project_name() {
        let store = store();
        let materializer = Materializer::new(&store, "demo");
        let rendered = materializer.render(Path::new("demo"), MAPPING).unwrap();

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].path, Path::new("demo/views/index.html"));
        assert_eq!(rendered[0].content, "<h1>demo</h1>");
        assert_eq!(rendered[1].content, "no placeholder");
    }

    #[test]
    fn test_render_fails_on_missing_template() {
        let store = store();
        let materializer = Materializer::new(&store, "demo");
        let mapping = [ProjectFile {
            destination: "x",
            template: "absent",
        }];

        let err = materializer.render(Path::new("demo"), &mapping).unwrap_err();
        assert!(matches!(err, GenerateError::TemplateNotFound { ref id } if id == "absent"));
    }

    #[test]
    fn test_materialize_writes_mapping() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("demo");
        let store = store();

        let mut stages = Vec::new();

        let result = Materializer::new(&store, "demo")
            .materialize(&root, &["views"], MAPPING, |stage| stages.push(stage))
            .unwrap();

        assert_eq!(stages, [Stage::DirectoriesCreated, Stage::FilesWritten]);
        assert_eq!(result.directories, vec![root.join("views")]);
        assert_eq!(result.files.len(), 2);
        assert_eq!(
            fs::read_to_string(root.join("views/index.html")).unwrap(),
            "<h1>demo</h1>"
        );
        assert_eq!(fs::read_to_string(root.join("README")).unwrap(), "no placeholder");
    }

    #[test]
    fn test_materialize_stops_after_failed_write() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("demo");
        fs::create_dir_all(root.join("README")).unwrap();
        let store = store();
        let mut stages = Vec::new();

        let err = Materializer::new(&store, "demo")
            .materialize(&root, &["views"], MAPPING, |stage| stages.push(stage))
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateError::FileWriteFailed { ref path, .. } if *path == root.join("README")
        ));
        assert_eq!(stages, [Stage::DirectoriesCreated]);
        assert!(root.join("views/index.html").is_file());
    }

    #[test]
    fn test_existing_directories_are_fine() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("demo");
        fs::create_dir_all(root.join("public/css")).unwrap();

        let created = Materializer::create_directories(&root, PROJECT_DIRECTORIES).unwrap();
        assert_eq!(created.len(), PROJECT_DIRECTORIES.len());
        assert!(created.iter().all(|dir| dir.is_dir()));
    }

    #[test]
    fn test_directory_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("demo");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("views"), "not a directory").unwrap();

        let err = Materializer::create_directories(&root, &["views"]).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::DirectoryCreationFailed { ref path, .. } if *path == root.join("views")
        ));
    }

    #[test]
    fn test_write_failure_keeps_earlier_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("demo");
        fs::create_dir_all(&root).unwrap();

        let files = vec![
            RenderedFile {
                path: root.join("first"),
                content: "1".to_string(),
            },
            RenderedFile {
                path: root.join("missing/second"),
                content: "2".to_string(),
            },
        ];

        let err = Materializer::write_files(&files).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::FileWriteFailed { ref path, .. }
                if *path == root.join("missing/second")
        ));
        assert_eq!(fs::read_to_string(root.join("first")).unwrap(), "1");
    }

    #[test]
    fn test_full_layout_renders_without_placeholders() {
        let store = TemplateStore::embedded();
        let rendered = Materializer::new(&store, "demo")
            .render(Path::new("demo"), PROJECT_FILES)
            .unwrap();

        assert_eq!(rendered.len(), PROJECT_FILES.len());
        for file in rendered {
            assert!(!file.content.is_empty(), "empty file: {}", file.path.display());
            assert!(
                !file.content.contains(PLACEHOLDER),
                "unsubstituted: {}",
                file.path.display()
            );
        }
    }
}
