//! # 通用文件操作
//!
//! 基于 `FileClient` 的批量复制、解压、重命名，按模式列表工作。
//!
//! ## 缺失文件策略
//! - `allow_missing = false`：任一模式没有匹配即返回错误
//! - `allow_missing = true`：打印跳过信息后继续
//!
//! ## 依赖关系
//! - 被 `vasp/outputs.rs` 使用
//! - 使用 `client/`, `models/pattern.rs`, `utils/output.rs`

use crate::client::{FileClient, RemoteHost};
use crate::error::{Result, VaspCpError};
use crate::models::FilePattern;
use crate::utils::output;

use std::path::Path;

/// 从源目录复制所有匹配任一模式的文件到目标目录
///
/// 返回实际复制的文件名（去重，按首次匹配顺序）。
pub fn copy_files(
    client: &dyn FileClient,
    src_dir: &Path,
    host: Option<&RemoteHost>,
    include: &[FilePattern],
    allow_missing: bool,
) -> Result<Vec<String>> {
    let mut copied: Vec<String> = Vec::new();

    for pattern in include {
        let matches = client.list(src_dir, pattern, host)?;
        if matches.is_empty() {
            if allow_missing {
                output::print_skip(&format!("No file matching '{}'", pattern));
                continue;
            }
            return Err(VaspCpError::NoFilesFound {
                pattern: src_dir.join(pattern.as_str()).display().to_string(),
            });
        }

        for name in matches {
            if copied.contains(&name) {
                continue;
            }
            client.fetch(src_dir, &name, host)?;
            copied.push(name);
        }
    }

    Ok(copied)
}

/// 解压目标目录中所有匹配任一模式的 `.gz` 文件
///
/// 返回解压后的文件名。
pub fn gunzip_files(
    client: &dyn FileClient,
    include: &[FilePattern],
    allow_missing: bool,
) -> Result<Vec<String>> {
    let mut decompressed = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for pattern in include {
        let archives: Vec<String> = client
            .list_dest(pattern)?
            .into_iter()
            .filter(|name| name.ends_with(".gz"))
            .collect();

        if archives.is_empty() {
            if allow_missing {
                continue;
            }
            return Err(VaspCpError::NoFilesFound {
                pattern: format!("{}.gz", pattern.stem()),
            });
        }

        for name in archives {
            if seen.contains(&name) {
                continue;
            }
            decompressed.push(client.gunzip(&name)?);
            seen.push(name);
        }
    }

    Ok(decompressed)
}

/// 按映射重命名目标目录中的文件
///
/// 返回实际完成的 (原名, 新名)。
pub fn rename_files(
    client: &dyn FileClient,
    mapping: &[(String, String)],
    allow_missing: bool,
) -> Result<Vec<(String, String)>> {
    let mut renamed = Vec::new();

    for (from, to) in mapping {
        match client.rename(from, to) {
            Ok(()) => renamed.push((from.clone(), to.clone())),
            Err(VaspCpError::FileNotFound { .. }) if allow_missing => {
                output::print_skip(&format!("Nothing to rename: '{}'", from));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LocalClient;
    use std::fs;
    use tempfile::tempdir;

    fn patterns(names: &[&str]) -> Vec<FilePattern> {
        names
            .iter()
            .map(|n| FilePattern::compressible(n, "").unwrap())
            .collect()
    }

    #[test]
    fn test_copy_strict_missing_fails() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("INCAR"), "").unwrap();

        let client = LocalClient::new(dest.path());
        let err = copy_files(
            &client,
            src.path(),
            None,
            &patterns(&["INCAR", "OUTCAR"]),
            false,
        )
        .unwrap_err();
        match err {
            VaspCpError::NoFilesFound { pattern } => assert!(pattern.ends_with("OUTCAR*")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_copy_lenient_skips_missing() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("POTCAR"), "PAW_PBE").unwrap();
        fs::write(src.path().join("POTCAR.spec"), "spec").unwrap();

        let client = LocalClient::new(dest.path());
        let copied = copy_files(
            &client,
            src.path(),
            None,
            &patterns(&["POTCAR", "POTCAR.spec", "KPOINTS"]),
            true,
        )
        .unwrap();
        assert_eq!(copied, vec!["POTCAR", "POTCAR.spec"]);
        assert!(dest.path().join("POTCAR.spec").exists());
    }

    #[test]
    fn test_rename_lenient_and_strict() {
        let dest = tempdir().unwrap();
        fs::write(dest.path().join("INCAR.relax2"), "").unwrap();
        let client = LocalClient::new(dest.path());

        let mapping = vec![
            ("INCAR.relax2".to_string(), "INCAR".to_string()),
            ("KPOINTS.relax2".to_string(), "KPOINTS".to_string()),
        ];
        let renamed = rename_files(&client, &mapping, true).unwrap();
        assert_eq!(renamed.len(), 1);
        assert!(dest.path().join("INCAR").exists());

        let err = rename_files(&client, &mapping[1..], false).unwrap_err();
        assert!(matches!(err, VaspCpError::FileNotFound { .. }));
    }

    #[test]
    fn test_gunzip_strict_without_archives() {
        let dest = tempdir().unwrap();
        fs::write(dest.path().join("OUTCAR"), "").unwrap();
        let client = LocalClient::new(dest.path());

        assert!(gunzip_files(&client, &patterns(&["OUTCAR"]), true)
            .unwrap()
            .is_empty());
        let err = gunzip_files(&client, &patterns(&["OUTCAR"]), false).unwrap_err();
        assert!(matches!(err, VaspCpError::NoFilesFound { .. }));
    }
}
