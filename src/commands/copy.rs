//! # copy 命令实现
//!
//! 把一个 VASP 计算目录的最终输出整理到目标目录。
//!
//! ## 功能
//! - 本地或远程（ssh/scp）源目录
//! - 复制后打印目标目录中的文件汇总表
//!
//! ## 依赖关系
//! - 使用 `cli/copy.rs` 定义的参数
//! - 使用 `vasp/outputs.rs`, `client/`
//! - 使用 `utils/output.rs`

use super::parse_host;
use crate::cli::copy::CopyArgs;
use crate::client;
use crate::error::Result;
use crate::models::CopyReport;
use crate::utils::output;
use crate::vasp::{copy_vasp_outputs, CopyOptions};

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表的一行
#[derive(Debug, Clone, Tabled)]
struct FileRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// 执行 copy 命令
pub fn execute(args: CopyArgs) -> Result<()> {
    output::print_header("Copying VASP Outputs");

    let src_host = parse_host(args.remote.host.as_deref())?;
    let options = CopyOptions {
        src_host,
        additional_vasp_files: args.additional,
        contcar_to_poscar: !args.keep_contcar,
    };

    if let Some(host) = &options.src_host {
        output::print_info(&format!("Source host: {}", host));
    }

    let client = client::auto_client(
        &args.dest,
        options.src_host.as_ref(),
        args.remote.ssh_config(),
    );
    let report = copy_vasp_outputs(&args.src_dir, &options, client.as_ref())?;

    match report.relax_ext.number() {
        Some(n) => output::print_info(&format!(
            "Used relaxation stage {} ('{}' suffix removed)",
            n, report.relax_ext
        )),
        None => output::print_info("No relaxation suffix found"),
    }

    let rows = summary_rows(&report, &args.dest);
    if !rows.is_empty() {
        println!("\n{}\n", Table::new(&rows));
    }

    output::print_success(&format!(
        "{} files ready in '{}'",
        rows.len(),
        args.dest.display()
    ));

    Ok(())
}

/// 为每个复制的文件生成汇总行
fn summary_rows(report: &CopyReport, dest: &Path) -> Vec<FileRow> {
    report
        .copied
        .iter()
        .map(|source| {
            let file = report.final_name(source);
            let size = fs::metadata(dest.join(&file))
                .map(|m| format_size(m.len()))
                .unwrap_or_else(|_| "-".to_string());
            FileRow {
                source: source.clone(),
                file,
                size,
            }
        })
        .collect()
}

/// 人类可读的文件大小
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
