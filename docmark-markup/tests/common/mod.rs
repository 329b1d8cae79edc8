//! Shared fixtures: throwaway documentation repositories on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct DocsRepo {
    dir: TempDir,
}

impl DocsRepo {
    /// A repository with a docs tree and a samples tree next to it.
    pub fn new() -> Self {
        let repo = Self {
            dir: tempfile::tempdir().expect("temp dir"),
        };
        repo.write("docs/index.md", "# Index\n");
        repo.write("docs/howto/setup.md", "# Setup\n\nIntro.\n");
        repo.write("samples/python/app.py", "print('hi')\n");
        repo.write("samples/python/App_test.py", "assert True\n");
        repo.write("samples/dotnet/Program.cs", "class Program {}\n");
        repo.write("samples/scripts/deploy", "#!/bin/sh\n");
        repo
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("mkdir");
        fs::write(path, content).expect("write fixture");
    }
}
