//! docker run to docker-compose conversion
//!
//! Tokenizes a `docker run` command line (quotes and escaped newlines
//! honored), maps the common flags onto a compose service definition and
//! emits a version 3.8 document. Flags compose has no use for (`-d`,
//! `--rm`) are accepted and dropped; unknown flags are skipped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// One service entry in the generated compose file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComposeService {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub volumes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub environment: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub networks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

/// Top-level compose document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeFile {
    pub version: String,
    pub services: BTreeMap<String, ComposeService>,
}

/// Convert a `docker run` command line into a compose document
pub fn from_docker_run(command: &str) -> Result<ComposeFile> {
    let tokens = tokenize(command);
    if tokens.len() < 3 || tokens[0] != "docker" || tokens[1] != "run" {
        return Err(GenError::invalid_input(
            "expected a command starting with 'docker run'",
        ));
    }

    let mut service = ComposeService::default();
    let mut service_name = "app".to_string();
    let mut image: Option<String> = None;
    let mut command_args: Vec<String> = Vec::new();

    let mut i = 2;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token.starts_with('-') && image.is_none() {
            match token {
                "-p" | "--publish" | "-v" | "--volume" | "-e" | "--env" | "--name"
                | "--restart" | "--network" | "--net" | "--hostname" | "-h" | "--user" | "-u"
                | "--workdir" | "-w" | "--entrypoint" => {
                    i += 1;
                    let Some(value) = tokens.get(i) else {
                        break;
                    };
                    match token {
                        "-p" | "--publish" => service.ports.push(value.clone()),
                        "-v" | "--volume" => service.volumes.push(value.clone()),
                        "-e" | "--env" => service.environment.push(value.clone()),
                        "--name" => {
                            service_name = value.clone();
                            service.container_name = Some(value.clone());
                        }
                        "--restart" => service.restart = Some(value.clone()),
                        "--network" | "--net" => service.networks.push(value.clone()),
                        "--hostname" | "-h" => service.hostname = Some(value.clone()),
                        "--user" | "-u" => service.user = Some(value.clone()),
                        "--workdir" | "-w" => service.working_dir = Some(value.clone()),
                        "--entrypoint" => service.entrypoint = Some(value.clone()),
                        _ => {}
                    }
                }
                "-i" => service.stdin_open = Some(true),
                "-t" => service.tty = Some(true),
                "-it" | "-ti" => {
                    service.stdin_open = Some(true);
                    service.tty = Some(true);
                }
                "--privileged" => service.privileged = Some(true),
                // Meaningless under compose, or unknown: skip the flag only
                _ => {}
            }
        } else if image.is_none() {
            image = Some(token.to_string());
        } else {
            command_args.push(token.to_string());
        }
        i += 1;
    }

    let Some(image) = image else {
        return Err(GenError::invalid_input("could not identify image name"));
    };
    service.image = image;
    if !command_args.is_empty() {
        service.command = Some(command_args);
    }

    let mut services = BTreeMap::new();
    services.insert(service_name, service);
    Ok(ComposeFile {
        version: "3.8".to_string(),
        services,
    })
}

/// Convert a `docker run` command line straight to YAML text
pub fn to_yaml(command: &str) -> Result<String> {
    let compose = from_docker_run(command)?;
    Ok(serde_yaml::to_string(&compose)?)
}

/// Split a command line into tokens, honoring quotes and line escapes
fn tokenize(command: &str) -> Vec<String> {
    let cleaned = command.replace("\\\n", " ").replace('\\', "");
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in cleaned.chars() {
        match quote {
            Some(q) if ch == q => {
                // Closing quote ends the token even if it is empty
                tokens.push(std::mem::take(&mut current));
                quote = None;
            }
            Some(_) => current.push(ch),
            None => match ch {
                '"' | '\'' => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                    quote = Some(ch);
                }
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                c => current.push(c),
            },
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
