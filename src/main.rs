//! # vaspcp 命令行入口
//!
//! ## 子命令
//! - `copy`      - 复制并整理 VASP 输出
//! - `relax-ext` - 查看编号最大的弛豫后缀

use clap::Parser;
use vaspcp::cli::Cli;
use vaspcp::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
