//! # SSH 文件客户端
//!
//! 源目录可以位于远程主机上，通过外部 `ssh` / `scp` 命令访问；
//! 目标端始终是本地目录，委托给 `LocalClient`。
//! 认证和连接配置完全交给 ssh 自身（`~/.ssh/config`、agent 等）。
//!
//! ## 依赖关系
//! - 实现 `client::FileClient`
//! - 使用 `client/local.rs`
//! - 通过 `std::process::Command` 调用 ssh/scp

use super::{FileClient, LocalClient, RemoteHost};
use crate::error::{Result, VaspCpError};
use crate::models::FilePattern;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// ssh/scp 调用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshConfig {
    /// ssh 可执行文件
    pub ssh: String,
    /// scp 可执行文件
    pub scp: String,
    /// 端口（None 表示使用 ssh 默认/配置值）
    pub port: Option<u16>,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            ssh: "ssh".to_string(),
            scp: "scp".to_string(),
            port: None,
        }
    }
}

/// 远程源 + 本地目标的文件客户端
#[derive(Debug, Clone)]
pub struct SshClient {
    local: LocalClient,
    config: SshConfig,
}

impl SshClient {
    pub fn new(dest: impl Into<PathBuf>, config: SshConfig) -> Self {
        Self {
            local: LocalClient::new(dest),
            config,
        }
    }

    /// 构造远程列目录的 ssh 参数
    fn list_args(&self, dir: &Path, host: &RemoteHost) -> Vec<String> {
        let mut args = vec!["-o".to_string(), "BatchMode=yes".to_string()];
        if let Some(port) = self.config.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        args.push(host.target());
        args.push(format!(
            "find -L {}/ -mindepth 1 -maxdepth 1 -type f",
            shell_quote(&dir.to_string_lossy())
        ));
        args
    }

    /// 构造远程复制的 scp 参数
    fn fetch_args(&self, dir: &Path, name: &str, host: &RemoteHost, dst: &Path) -> Vec<String> {
        let mut args = vec![
            "-q".to_string(),
            "-o".to_string(),
            "BatchMode=yes".to_string(),
        ];
        if let Some(port) = self.config.port {
            args.push("-P".to_string());
            args.push(port.to_string());
        }
        // 旧版 scp 协议经远程 shell 展开路径，需要转义
        args.push(format!(
            "{}:{}",
            host.target(),
            shell_quote(&dir.join(name).to_string_lossy())
        ));
        args.push(dst.to_string_lossy().to_string());
        args
    }
}

impl FileClient for SshClient {
    fn list(
        &self,
        dir: &Path,
        pattern: &FilePattern,
        host: Option<&RemoteHost>,
    ) -> Result<Vec<String>> {
        let host = match host {
            Some(h) => h,
            None => return self.local.list(dir, pattern, None),
        };

        let output = run(&self.config.ssh, &self.list_args(dir, host))?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_listing(&stdout, pattern))
    }

    fn fetch(&self, dir: &Path, name: &str, host: Option<&RemoteHost>) -> Result<()> {
        let host = match host {
            Some(h) => h,
            None => return self.local.fetch(dir, name, None),
        };

        self.local.ensure_dest()?;
        let dst = self.local.dest().join(name);
        run(&self.config.scp, &self.fetch_args(dir, name, host, &dst))?;
        Ok(())
    }

    fn list_dest(&self, pattern: &FilePattern) -> Result<Vec<String>> {
        self.local.list_dest(pattern)
    }

    fn gunzip(&self, name: &str) -> Result<String> {
        self.local.gunzip(name)
    }

    fn rename(&self, from: &str, to: &str) -> Result<()> {
        self.local.rename(from, to)
    }
}

/// 运行外部命令，非零退出码视为失败
fn run(program: &str, args: &[String]) -> Result<Output> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|_| VaspCpError::CommandNotFound {
            command: program.to_string(),
        })?;

    if output.status.success() {
        Ok(output)
    } else {
        Err(VaspCpError::CommandFailed {
            command: format!("{} {}", program, args.join(" ")),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// 解析 `find` 输出的路径列表，只保留匹配的文件名
fn parse_listing(stdout: &str, pattern: &FilePattern) -> Vec<String> {
    let mut names: Vec<String> = stdout
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .filter_map(|l| l.rsplit('/').next())
        .filter(|name| !name.is_empty() && pattern.matches(name))
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// POSIX shell 单引号转义
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> RemoteHost {
        "alice@cluster".parse().unwrap()
    }

    #[test]
    fn test_parse_listing() {
        let stdout = "/scratch/run/vasprun.xml.relax2.gz\n/scratch/run/INCAR.relax1\n/scratch/run/KPOINTS\n\n";
        let pattern = FilePattern::new("*.relax*").unwrap();
        assert_eq!(
            parse_listing(stdout, &pattern),
            vec!["INCAR.relax1", "vasprun.xml.relax2.gz"]
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/scratch/run 1"), "'/scratch/run 1'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_list_args_with_port() {
        let client = SshClient::new(
            "/tmp/dest",
            SshConfig {
                port: Some(2222),
                ..SshConfig::default()
            },
        );
        let args = client.list_args(Path::new("/scratch/run"), &host());
        assert_eq!(
            args,
            vec![
                "-o",
                "BatchMode=yes",
                "-p",
                "2222",
                "alice@cluster",
                "find -L '/scratch/run'/ -mindepth 1 -maxdepth 1 -type f",
            ]
        );
    }

    #[test]
    fn test_fetch_args() {
        let client = SshClient::new("/tmp/dest", SshConfig::default());
        let args = client.fetch_args(
            Path::new("/scratch/run"),
            "OUTCAR.gz",
            &host(),
            Path::new("/tmp/dest/OUTCAR.gz"),
        );
        assert_eq!(
            args,
            vec![
                "-q",
                "-o",
                "BatchMode=yes",
                "alice@cluster:'/scratch/run/OUTCAR.gz'",
                "/tmp/dest/OUTCAR.gz",
            ]
        );
    }

    #[test]
    fn test_fetch_args_quote_spaces() {
        let client = SshClient::new("/tmp/dest", SshConfig::default());
        let args = client.fetch_args(
            Path::new("/scratch/my run"),
            "CONTCAR.relax2",
            &host(),
            Path::new("/tmp/dest/CONTCAR.relax2"),
        );
        assert_eq!(args[3], "alice@cluster:'/scratch/my run/CONTCAR.relax2'");
        assert_eq!(args[4], "/tmp/dest/CONTCAR.relax2");
    }

    #[test]
    fn test_missing_program() {
        let client = SshClient::new(
            "/tmp/dest",
            SshConfig {
                ssh: "vaspcp-no-such-ssh-binary".to_string(),
                ..SshConfig::default()
            },
        );
        let pattern = FilePattern::new("*").unwrap();
        let err = client
            .list(Path::new("/scratch"), &pattern, Some(&host()))
            .unwrap_err();
        assert!(matches!(err, VaspCpError::CommandNotFound { .. }));
    }
}
