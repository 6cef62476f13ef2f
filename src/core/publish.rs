//! Image publishing against an authenticated registry

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::core::registry::RegistryToken;
use crate::core::secret::SecretString;
use crate::core::service::{ServiceError, ServiceResult};

/// Seam to the local container tooling.
#[async_trait]
pub trait ImageTransport: Send + Sync {
    /// Authenticate against `host`.
    async fn login(&self, host: &str, username: &str, password: &SecretString)
        -> ServiceResult<()>;

    /// Push `source` as `target`, returning the reference the tooling reports.
    async fn push(&self, source: &str, target: &str) -> ServiceResult<String>;
}

/// `ImageTransport` backed by the system `docker` binary.
pub struct DockerCli {
    program: String,
    timeout: Duration,
}

impl DockerCli {
    pub fn new() -> Self {
        Self {
            program: "docker".to_string(),
            timeout: Duration::from_secs(600),
        }
    }

    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Run the tool with the given arguments, optionally feeding stdin.
    ///
    /// Secret material only ever travels through stdin; the argument list
    /// stays safe to echo into error messages.
    async fn run(&self, args: &[&str], stdin: Option<&[u8]>) -> ServiceResult<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ServiceError::Publish(format!(
                    "container tooling '{}' is not installed",
                    self.program
                ))
            } else {
                ServiceError::Publish(format!("failed to spawn '{}': {}", self.program, e))
            }
        })?;

        if let Some(bytes) = stdin {
            let mut handle = child.stdin.take().ok_or_else(|| {
                ServiceError::Publish("failed to open stdin for container tooling".to_string())
            })?;
            handle.write_all(bytes).await.map_err(|e| {
                ServiceError::Publish(format!("failed to write to container tooling: {}", e))
            })?;
            // Close the pipe so the tool stops waiting for input.
            drop(handle);
        }

        let args_str = args.join(" ");
        let output = timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                ServiceError::Publish(format!(
                    "'{} {}' timed out after {} seconds",
                    self.program,
                    args_str,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                ServiceError::Publish(format!("failed to run '{} {}': {}", self.program, args_str, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ServiceError::Publish(format!(
                "'{} {}' failed: {}",
                self.program,
                args_str,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageTransport for DockerCli {
    async fn login(
        &self,
        host: &str,
        username: &str,
        password: &SecretString,
    ) -> ServiceResult<()> {
        debug!("authenticating against registry '{}'", host);
        self.run(
            &["login", "--username", username, "--password-stdin", host],
            Some(password.expose().as_bytes()),
        )
        .await?;
        Ok(())
    }

    async fn push(&self, source: &str, target: &str) -> ServiceResult<String> {
        self.run(&["tag", source, target], None).await?;
        self.run(&["push", target], None).await?;
        Ok(target.to_string())
    }
}

/// Push `source` to `token.endpoint/name:tag` for each tag, in order.
///
/// The first failing tag aborts the run; earlier tags stay pushed and later
/// tags are never attempted.
pub async fn publish_image(
    transport: &dyn ImageTransport,
    token: &RegistryToken,
    source: &str,
    name: &str,
    tags: &[String],
) -> ServiceResult<Vec<String>> {
    if tags.is_empty() {
        return Err(ServiceError::Configuration("no tags to publish".to_string()));
    }

    transport
        .login(&token.endpoint, &token.username, &token.password)
        .await?;

    let mut references = Vec::with_capacity(tags.len());
    for tag in tags {
        let target = format!("{}/{}:{}", token.endpoint, name, tag);
        info!("pushing {}", target);
        let pushed = transport.push(source, &target).await?;
        references.push(canonical_reference(&pushed).to_string());
    }

    Ok(references)
}

/// Canonical form of a pushed reference: `registry/name:tag` with any digest
/// suffix removed.
pub fn canonical_reference(reference: &str) -> &str {
    match reference.split_once('@') {
        Some((name, _digest)) => name,
        None => reference,
    }
}
