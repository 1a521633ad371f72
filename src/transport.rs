//! External parser transport
//!
//! Line-based client for the external parser process. Each message, request
//! or response, is the base64 encoding of the raw ASCII payload followed by
//! a CRLF terminator. A session opens by sending `START_OF_TRANSMISSION`
//! and requiring the identical echo, and closes the same way with
//! `END_OF_TRANSMISSION`. A response that fails to decode forces a restart
//! of the external process; after a configurable number of messages the
//! client restarts it proactively to bound resource growth on the far side.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Session-open marker, echoed back by a healthy process
pub const START_OF_TRANSMISSION: &str = "START_OF_TRANSMISSION";

/// Session-close marker, echoed back on clean shutdown
pub const END_OF_TRANSMISSION: &str = "END_OF_TRANSMISSION";

/// Options for an extraction session.
///
/// The six boolean flags are opaque to this client: they are forwarded
/// unmodified to the external process at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorOptions {
    /// Whether function call types should be retained
    pub keep_function_call_types: bool,
    /// Whether literals (primitives) should be retained
    pub keep_literals: bool,
    /// Whether all branches should be kept
    pub keep_branches: bool,
    /// Whether the output should be a tree or a sequence
    pub output_tree: bool,
    /// Whether the output should be flattened
    pub flatten_output: bool,
    /// Whether statements should carry ids
    pub add_unique_ids: bool,
    /// Proactively restart the external process after this many messages
    pub restart_threshold: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        ExtractorOptions {
            keep_function_call_types: false,
            keep_literals: false,
            keep_branches: true,
            output_tree: false,
            flatten_output: true,
            add_unique_ids: false,
            restart_threshold: 10_000,
        }
    }
}

impl ExtractorOptions {
    /// The six flags in the argv order the external process expects
    fn flag_args(&self) -> Vec<String> {
        [
            self.keep_function_call_types,
            self.keep_literals,
            self.keep_branches,
            self.output_tree,
            self.flatten_output,
            self.add_unique_ids,
        ]
        .iter()
        .map(|&flag| if flag { "true" } else { "false" }.to_string())
        .collect()
    }
}

/// Client for one external parser session
pub struct ParserClient {
    program: String,
    args: Vec<String>,
    restart_threshold: usize,
    child: Child,
    /// None once the session has been closed and stdin dropped
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    messages: usize,
    restarting: bool,
}

impl ParserClient {
    /// Spawn the parser jar: `java -cp <jar> sequenceextractor.PythonBinder
    /// <flags…>`, then open the session.
    pub fn for_jar(jar: &Path, options: &ExtractorOptions) -> Result<Self> {
        let mut args = vec![
            "-cp".to_string(),
            jar.display().to_string(),
            "sequenceextractor.PythonBinder".to_string(),
        ];
        args.extend(options.flag_args());
        Self::with_command("java", args, options.restart_threshold)
    }

    /// Spawn an arbitrary program speaking the same line protocol and open
    /// the session.
    pub fn with_command(
        program: impl Into<String>,
        args: Vec<String>,
        restart_threshold: usize,
    ) -> Result<Self> {
        let program = program.into();
        let (child, stdin, stdout) = spawn_process(&program, &args)?;
        let mut client = ParserClient {
            program,
            args,
            restart_threshold,
            child,
            stdin: Some(stdin),
            stdout,
            messages: 0,
            restarting: false,
        };
        client.handshake()?;
        Ok(client)
    }

    /// Request the structural literal for one code snippet
    pub fn extract(&mut self, snippet: &str) -> Result<String> {
        self.messages += 1;
        if self.messages >= self.restart_threshold {
            log::info!(
                "message threshold {} reached, restarting external parser",
                self.restart_threshold
            );
            self.restart()?;
        }
        self.send(snippet)
    }

    /// Gracefully restart the external process: close the session, respawn,
    /// re-handshake.
    pub fn restart(&mut self) -> Result<()> {
        let reply = self.send(END_OF_TRANSMISSION)?;
        if reply != END_OF_TRANSMISSION {
            return Err(Error::Handshake {
                expected: END_OF_TRANSMISSION.to_string(),
                got: reply,
            });
        }
        self.respawn()
    }

    /// Kill the external process outright and respawn it
    pub fn force_restart(&mut self) -> Result<()> {
        log::warn!("force-restarting external parser process");
        let _ = self.child.kill();
        self.respawn()
    }

    /// Close the session and reap the external process
    pub fn close(mut self) -> Result<()> {
        let reply = self.send(END_OF_TRANSMISSION)?;
        if reply != END_OF_TRANSMISSION {
            return Err(Error::Handshake {
                expected: END_OF_TRANSMISSION.to_string(),
                got: reply,
            });
        }
        // dropping stdin lets the process see EOF and exit
        self.stdin = None;
        let _ = self.child.wait();
        Ok(())
    }

    fn handshake(&mut self) -> Result<()> {
        let reply = self.send(START_OF_TRANSMISSION)?;
        if reply != START_OF_TRANSMISSION {
            return Err(Error::Handshake {
                expected: START_OF_TRANSMISSION.to_string(),
                got: reply,
            });
        }
        Ok(())
    }

    fn respawn(&mut self) -> Result<()> {
        self.stdin = None;
        let _ = self.child.wait();
        let (child, stdin, stdout) = spawn_process(&self.program, &self.args)?;
        self.child = child;
        self.stdin = Some(stdin);
        self.stdout = stdout;
        self.messages = 0;
        self.handshake()
    }

    /// Send one framed message and decode the framed response
    fn send(&mut self, message: &str) -> Result<String> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| Error::internal("session already closed"))?;
        let encoded = BASE64.encode(message.as_bytes());
        stdin.write_all(encoded.as_bytes())?;
        stdin.write_all(b"\r\n")?;
        stdin.flush()?;

        let mut line = String::new();
        self.stdout.read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let decoded = BASE64
            .decode(trimmed.as_bytes())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok());
        match decoded {
            Some(text) => Ok(text),
            None => {
                let message = format!("response failed to base64-decode: {:?}", trimmed);
                if self.restarting {
                    return Err(Error::Transport { message });
                }
                self.restarting = true;
                let restarted = self.force_restart();
                self.restarting = false;
                restarted?;
                Err(Error::Transport { message })
            }
        }
    }
}

impl Drop for ParserClient {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn spawn_process(
    program: &str,
    args: &[String],
) -> Result<(Child, ChildStdin, BufReader<ChildStdout>)> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::Io(format!("failed to spawn {}: {}", program, e)))?;
    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::internal("child stdin was not captured"))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::internal("child stdout was not captured"))?;
    Ok((child, stdin, BufReader::new(stdout)))
}
