//! # VASP 输出复制
//!
//! 将一个 VASP 计算目录的输出复制到目标目录，整理成下一步计算可直接使用的形式。
//!
//! ## 流程
//! 1. 解析编号最大的弛豫后缀
//! 2. 复制必需文件 (INCAR, OUTCAR, CONTCAR, vasprun.xml + 额外文件)，缺失即失败
//! 3. 复制可选文件 (POTCAR, POTCAR.spec, KPOINTS)，缺失跳过
//! 4. 检查至少有一个 POTCAR*（KPOINTS 可以缺失，可能用了 KSPACING）
//! 5. 解压 `.gz`
//! 6. 去掉弛豫后缀
//! 7. 可选：CONTCAR -> POSCAR（原 POSCAR 不会被复制）
//!
//! 出错时不回滚已复制的文件。
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs` 使用
//! - 使用 `files.rs`, `vasp/relax.rs`, `client/`, `utils/output.rs`

use super::relax::get_largest_relax_extension;
use crate::client::{self, FileClient, RemoteHost, SshConfig};
use crate::error::{Result, VaspCpError};
use crate::files::{copy_files, gunzip_files, rename_files};
use crate::models::{CopyReport, FilePattern, RelaxExtension};
use crate::utils::output;

use std::path::Path;

/// 必需文件
pub const REQUIRED_FILES: [&str; 4] = ["INCAR", "OUTCAR", "CONTCAR", "vasprun.xml"];

/// 可选文件
pub const OPTIONAL_FILES: [&str; 3] = ["POTCAR", "POTCAR.spec", "KPOINTS"];

/// 复制选项
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// 源目录所在的远程主机，None 表示本地
    pub src_host: Option<RemoteHost>,

    /// 额外复制的文件，例如 CHGCAR, WAVECAR（缺失视为错误）
    pub additional_vasp_files: Vec<String>,

    /// 将 CONTCAR 改名为 POSCAR
    pub contcar_to_poscar: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            src_host: None,
            additional_vasp_files: Vec::new(),
            contcar_to_poscar: true,
        }
    }
}

/// 复制 VASP 输出到客户端的目标目录
pub fn copy_vasp_outputs(
    src_dir: &Path,
    options: &CopyOptions,
    client: &dyn FileClient,
) -> Result<CopyReport> {
    output::print_info(&format!("Copying VASP outputs from {}", src_dir.display()));

    let host = options.src_host.as_ref();
    let relax_ext = get_largest_relax_extension(src_dir, host, client)?;
    let mut report = CopyReport::new(relax_ext);

    let mut required_names: Vec<&str> = REQUIRED_FILES.to_vec();
    required_names.extend(options.additional_vasp_files.iter().map(String::as_str));
    let required = suffixed_patterns(&required_names, relax_ext)?;
    report.copied = copy_files(client, src_dir, host, &required, false)?;

    let optional = suffixed_patterns(&OPTIONAL_FILES, relax_ext)?;
    report
        .copied
        .extend(copy_files(client, src_dir, host, &optional, true)?);

    if client.list_dest(&FilePattern::new("POTCAR*")?)?.is_empty() {
        return Err(VaspCpError::MissingPotcar {
            dir: src_dir.display().to_string(),
        });
    }

    let all: Vec<FilePattern> = required.iter().chain(optional.iter()).cloned().collect();
    report.decompressed = gunzip_files(client, &all, true)?;

    if !relax_ext.is_empty() {
        let suffix = relax_ext.to_string();
        let mapping: Vec<(String, String)> = all
            .iter()
            .map(|p| {
                let from = p.stem().to_string();
                let to = from.strip_suffix(&suffix).unwrap_or(&from).to_string();
                (from, to)
            })
            .collect();
        report.renamed = rename_files(client, &mapping, true)?;
    }

    if options.contcar_to_poscar {
        client.rename("CONTCAR", "POSCAR")?;
        report.poscar_from_contcar = true;
    }

    output::print_done("Finished copying VASP outputs");
    Ok(report)
}

/// 自动选择客户端（本地或 ssh）并复制到 `dest_dir`
pub fn copy_vasp_outputs_to(
    src_dir: &Path,
    dest_dir: &Path,
    options: &CopyOptions,
) -> Result<CopyReport> {
    let client = client::auto_client(dest_dir, options.src_host.as_ref(), SshConfig::default());
    copy_vasp_outputs(src_dir, options, client.as_ref())
}

/// 每个文件名加上弛豫后缀和尾部通配符（容忍 gzip）
fn suffixed_patterns(names: &[&str], relax_ext: RelaxExtension) -> Result<Vec<FilePattern>> {
    let ext = relax_ext.to_string();
    names
        .iter()
        .map(|name| FilePattern::compressible(name, &ext))
        .collect()
}
