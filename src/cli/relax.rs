//! # relax-ext 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/relax.rs`

use super::RemoteArgs;
use clap::Args;
use std::path::PathBuf;

/// relax-ext 子命令参数
#[derive(Args, Debug)]
pub struct RelaxArgs {
    /// Directory to inspect
    pub dir: PathBuf,

    #[command(flatten)]
    pub remote: RemoteArgs,
}
