use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    process::Command,
};

/// Declarative description of one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Short name used in logs and failure messages.
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; always explicit so no step depends on the process cwd.
    pub cwd: PathBuf,
    /// Environment overrides applied on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(label: impl Into<String>, program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            env: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append a filesystem path argument.
    #[must_use]
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Shell-style rendering, e.g. `RUSTFLAGS=--cfg=x cargo build --release`.
    pub fn display(&self) -> String {
        let env = self.env.iter().map(|(k, v)| {
            let value: Cow<'_, str> = shell_words::quote(v);
            format!("{k}={value}")
        });
        let cmd = shell_words::join(std::iter::once(&self.program).chain(&self.args));
        env.chain(std::iter::once(cmd))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build the `std::process::Command` for this spec. Stdio is inherited.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.cwd);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}
