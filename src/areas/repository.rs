use crate::areas::config::Config;
use crate::areas::console::Console;
use crate::areas::git::{CommandRunner, Git, SystemRunner};
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    config: Config,
    refs: Refs,
    workspace: Workspace,
    console: RefCell<Box<dyn Console>>,
}

impl Repository {
    pub fn new(
        path: Box<Path>,
        config: Config,
        runner: Box<dyn CommandRunner>,
        console: Box<dyn Console>,
    ) -> Self {
        let refs = Refs::new(Git::new(runner, path.clone()), config.remote.clone());
        let workspace = Workspace::new(path.clone());

        Repository {
            path,
            config,
            refs,
            workspace,
            console: RefCell::new(console),
        }
    }

    /// Open the repository at `path` with the system git and its `.gitnuke.yml`
    pub fn open(path: &str, console: Box<dyn Console>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let config = Config::load(&path)?;

        tracing::debug!(path = %path.display(), ?config, "opened repository");

        Ok(Repository::new(
            path.into_boxed_path(),
            config,
            Box::new(SystemRunner),
            console,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn console(&'_ self) -> RefMut<'_, Box<dyn Console>> {
        self.console.borrow_mut()
    }
}
