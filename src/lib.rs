//! # vaspcp - VASP 输出整理
//!
//! 多步弛豫的 VASP 作业会留下 `vasprun.xml.relax1.gz`, `vasprun.xml.relax2.gz` 这样的文件。
//! 本库只取编号最大的一步，把它复制到目标目录、解压并去掉后缀，
//! 使下一步计算看到的是一个普通的、无后缀的计算目录。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   └── commands/   (命令执行逻辑)
//!         └── vasp/      (弛豫后缀解析、输出复制)
//!               ├── files.rs  (按模式批量复制/解压/重命名)
//!               ├── client/   (本地 / ssh 文件客户端)
//!               └── models/   (文件模式、弛豫后缀、复制结果)
//! utils/    (美化输出、进度提示)
//! error.rs  (错误处理)
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod files;
pub mod models;
pub mod utils;
pub mod vasp;

pub use client::{auto_client, FileClient, LocalClient, RemoteHost, SshClient, SshConfig};
pub use error::{Result, VaspCpError};
pub use models::{CopyReport, FilePattern, RelaxExtension};
pub use vasp::{copy_vasp_outputs, copy_vasp_outputs_to, get_largest_relax_extension, CopyOptions};
