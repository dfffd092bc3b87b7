//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `copy`: 复制并整理 VASP 输出
//! - `relax-ext`: 查看目录中编号最大的弛豫后缀
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: copy, relax

pub mod copy;
pub mod relax;

use crate::client::SshConfig;
use clap::{Args, Parser, Subcommand};

/// vaspcp - VASP 输出整理工具
#[derive(Parser)]
#[command(name = "vaspcp")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Copy VASP outputs of the final relaxation stage into a clean directory", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Copy, decompress and un-suffix the outputs of a VASP calculation
    Copy(copy::CopyArgs),

    /// Print the largest `.relax<N>` extension found in a directory
    RelaxExt(relax::RelaxArgs),
}

/// 远程访问参数（copy 与 relax-ext 共用）
#[derive(Args, Debug, Clone)]
pub struct RemoteArgs {
    /// Remote host holding the source directory ("user@host" or "host")
    #[arg(long, env = "VASPCP_HOST")]
    pub host: Option<String>,

    /// ssh executable used to list remote directories
    #[arg(long, env = "VASPCP_SSH", default_value = "ssh")]
    pub ssh: String,

    /// scp executable used to fetch remote files
    #[arg(long, env = "VASPCP_SCP", default_value = "scp")]
    pub scp: String,

    /// ssh port (defaults to the ssh configuration)
    #[arg(long, env = "VASPCP_SSH_PORT")]
    pub port: Option<u16>,
}

impl RemoteArgs {
    /// 转换为 ssh 客户端配置
    pub fn ssh_config(&self) -> SshConfig {
        SshConfig {
            ssh: self.ssh.clone(),
            scp: self.scp.clone(),
            port: self.port,
        }
    }
}
