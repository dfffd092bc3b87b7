//! # copy 子命令 CLI 定义
//!
//! 复制 VASP 输出（最后一步弛豫），解压并去掉 `.relax<N>` 后缀
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/copy.rs`

use super::RemoteArgs;
use clap::Args;
use std::path::PathBuf;

/// copy 子命令参数
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Directory of the finished VASP calculation
    pub src_dir: PathBuf,

    /// Destination directory (created if missing)
    #[arg(short, long, default_value = ".")]
    pub dest: PathBuf,

    /// Additional files to copy, e.g. WAVECAR or CHGCAR (repeatable, comma separated)
    #[arg(short, long = "additional", value_delimiter = ',')]
    pub additional: Vec<String>,

    /// Keep CONTCAR instead of renaming it to POSCAR
    #[arg(long, default_value_t = false)]
    pub keep_contcar: bool,

    #[command(flatten)]
    pub remote: RemoteArgs,
}
