use std::path::Path;

/// The repository's working tree
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a path relative to the working tree root exists
    pub fn exists(&self, relative_path: &Path) -> bool {
        self.path.join(relative_path).exists()
    }
}
