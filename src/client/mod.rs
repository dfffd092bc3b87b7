//! # 文件客户端模块
//!
//! 抽象本地/远程文件系统上的列目录、复制、解压、重命名操作。
//! 上层逻辑只依赖 `FileClient` trait，测试时可替换为内存实现。
//!
//! ## 约定
//! - 源端：`list` / `fetch` 接收源目录和可选远程主机
//! - 目标端：`list_dest` / `gunzip` / `rename` 只接收裸文件名，
//!   相对于客户端自身的目标目录
//!
//! ## 依赖关系
//! - 被 `files.rs`, `vasp/` 和 `commands/` 使用
//! - 子模块: local, ssh

pub mod local;
pub mod ssh;

pub use local::LocalClient;
pub use ssh::{SshClient, SshConfig};

use crate::error::{Result, VaspCpError};
use crate::models::FilePattern;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 文件客户端
pub trait FileClient {
    /// 列出源目录中匹配模式的普通文件名（已排序）
    fn list(&self, dir: &Path, pattern: &FilePattern, host: Option<&RemoteHost>)
        -> Result<Vec<String>>;

    /// 将源目录中的 `name` 复制到目标目录，覆盖同名文件
    fn fetch(&self, dir: &Path, name: &str, host: Option<&RemoteHost>) -> Result<()>;

    /// 列出目标目录中匹配模式的文件名（已排序）
    fn list_dest(&self, pattern: &FilePattern) -> Result<Vec<String>>;

    /// 原地解压目标目录中的 `.gz` 文件，返回解压后的文件名
    fn gunzip(&self, name: &str) -> Result<String>;

    /// 在目标目录中重命名，覆盖已存在的 `to`
    fn rename(&self, from: &str, to: &str) -> Result<()>;
}

/// 远程主机，`user@host` 或 `host`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteHost {
    pub user: Option<String>,
    pub host: String,
}

impl RemoteHost {
    /// ssh/scp 使用的目标字符串
    pub fn target(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }
}

impl FromStr for RemoteHost {
    type Err = VaspCpError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || VaspCpError::InvalidHost(s.to_string());

        match s.split_once('@') {
            Some((user, host)) => {
                if user.is_empty()
                    || host.is_empty()
                    || host.contains('@')
                    || s.contains(char::is_whitespace)
                {
                    return Err(invalid());
                }
                Ok(Self {
                    user: Some(user.to_string()),
                    host: host.to_string(),
                })
            }
            None => {
                if s.is_empty() || s.contains(char::is_whitespace) {
                    return Err(invalid());
                }
                Ok(Self {
                    user: current_user(),
                    host: s.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for RemoteHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target())
    }
}

/// 从环境变量推断当前用户名
fn current_user() -> Option<String> {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|v| !v.trim().is_empty())
}

/// 根据是否有远程主机选择客户端
pub fn auto_client(
    dest: impl Into<PathBuf>,
    host: Option<&RemoteHost>,
    config: SshConfig,
) -> Box<dyn FileClient> {
    match host {
        Some(_) => Box::new(SshClient::new(dest, config)),
        None => Box::new(LocalClient::new(dest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_at_host() {
        let h: RemoteHost = "alice@cluster.example.org".parse().unwrap();
        assert_eq!(h.user.as_deref(), Some("alice"));
        assert_eq!(h.host, "cluster.example.org");
        assert_eq!(h.target(), "alice@cluster.example.org");
    }

    #[test]
    fn test_parse_bare_host() {
        let h: RemoteHost = "cluster".parse().unwrap();
        assert_eq!(h.host, "cluster");
        assert_eq!(h.user, current_user());
    }

    #[test]
    fn test_parse_invalid_hosts() {
        for bad in ["", "@host", "user@", "a@b@c", "two words", "alice@two words", "al ice@host"] {
            let err = bad.parse::<RemoteHost>().unwrap_err();
            assert!(matches!(err, VaspCpError::InvalidHost(_)), "{}", bad);
        }
    }
}
