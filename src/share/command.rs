use std::{
    io::{ErrorKind, Write},
    process::{Command, Stdio},
};

use super::{ShareCapability, ShareError, ShareOutcome, SharePayload};

/// Hands the payload text to an external program on stdin (clipboard tools and the like).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `"xclip -selection clipboard"` style command line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ShareCapability for CommandShare {
    fn name(&self) -> &str {
        &self.program
    }

    fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ShareError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(payload.text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;

        // A target that exits without reading closes the pipe; its exit status decides.
        if let Err(e) = written
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }

        if status.success() {
            Ok(ShareOutcome::Shared)
        } else {
            Ok(ShareOutcome::Cancelled)
        }
    }
}
