//! # 弛豫后缀解析
//!
//! 找出目录中编号最大的 `.relax<N>` 后缀。
//!
//! ## 依赖关系
//! - 被 `vasp/outputs.rs`, `commands/relax.rs` 使用
//! - 使用 `client/`, `models/relax.rs`

use crate::client::{FileClient, RemoteHost};
use crate::error::{Result, VaspCpError};
use crate::models::{FilePattern, RelaxExtension};

use std::path::Path;

/// 获取目录中编号最大的弛豫后缀
///
/// 例如目录中有 `vasprun.xml.relax1.gz` 和 `vasprun.xml.relax2.gz` 时返回 `.relax2`；
/// 没有 `*.relax*` 文件时返回空后缀。匹配 `*.relax*` 但 `.relax` 后没有数字的文件
/// （如 `notes.relaxed`）视为错误。
pub fn get_largest_relax_extension(
    directory: &Path,
    host: Option<&RemoteHost>,
    client: &dyn FileClient,
) -> Result<RelaxExtension> {
    let pattern = FilePattern::new("*.relax*")?;
    let relax_files = client.list(directory, &pattern, host)?;

    let mut largest = RelaxExtension::none();
    for file in &relax_files {
        let n = RelaxExtension::parse_stage(file)
            .ok_or_else(|| VaspCpError::RelaxParse { file: file.clone() })?;
        largest = largest.max(RelaxExtension::stage(n));
    }

    Ok(largest)
}
