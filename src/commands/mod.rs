//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `vasp/`, `client/`, `utils/`
//! - 子模块: copy, relax

pub mod copy;
pub mod relax;

use crate::cli::Commands;
use crate::client::RemoteHost;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Copy(args) => copy::execute(args),
        Commands::RelaxExt(args) => relax::execute(args),
    }
}

/// 解析可选的 `--host` 参数
fn parse_host(host: Option<&str>) -> Result<Option<RemoteHost>> {
    host.map(str::parse::<RemoteHost>).transpose()
}
