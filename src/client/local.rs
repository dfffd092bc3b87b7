//! # 本地文件客户端
//!
//! 源目录和目标目录都在本地文件系统上。
//!
//! ## 依赖关系
//! - 实现 `client::FileClient`
//! - 被 `client/ssh.rs` 复用（目标端操作）
//! - 使用 `walkdir` 列目录，`flate2` 解压

use super::{FileClient, RemoteHost};
use crate::error::{Result, VaspCpError};
use crate::models::FilePattern;

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 本地文件客户端
#[derive(Debug, Clone)]
pub struct LocalClient {
    /// 目标目录
    dest: PathBuf,
}

impl LocalClient {
    /// 创建新的本地客户端，`dest` 为目标目录
    pub fn new(dest: impl Into<PathBuf>) -> Self {
        Self { dest: dest.into() }
    }

    /// 目标目录
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// 确保目标目录存在
    pub(crate) fn ensure_dest(&self) -> Result<()> {
        fs::create_dir_all(&self.dest).map_err(|e| VaspCpError::FileWriteError {
            path: self.dest.display().to_string(),
            source: e,
        })
    }

    /// 列出目录第一层中匹配模式的普通文件（跟随符号链接）
    fn list_dir(dir: &Path, pattern: &FilePattern) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Err(VaspCpError::DirectoryNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut names: Vec<String> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter(|name| pattern.matches(name))
            .collect();

        names.sort();
        Ok(names)
    }
}

impl FileClient for LocalClient {
    fn list(
        &self,
        dir: &Path,
        pattern: &FilePattern,
        host: Option<&RemoteHost>,
    ) -> Result<Vec<String>> {
        if let Some(h) = host {
            return Err(VaspCpError::RemoteUnsupported { host: h.target() });
        }
        Self::list_dir(dir, pattern)
    }

    fn fetch(&self, dir: &Path, name: &str, host: Option<&RemoteHost>) -> Result<()> {
        if let Some(h) = host {
            return Err(VaspCpError::RemoteUnsupported { host: h.target() });
        }

        let src = dir.join(name);
        if !src.is_file() {
            return Err(VaspCpError::FileNotFound {
                path: src.display().to_string(),
            });
        }

        self.ensure_dest()?;
        let dst = self.dest.join(name);
        // 目标与源是同一文件时 fs::copy 会把源文件截断为空
        if is_same_file(&src, &dst) {
            return Err(VaspCpError::SameFile {
                path: src.display().to_string(),
            });
        }
        fs::copy(&src, &dst).map_err(|e| VaspCpError::FileWriteError {
            path: dst.display().to_string(),
            source: e,
        })?;
        Ok(())
    }

    fn list_dest(&self, pattern: &FilePattern) -> Result<Vec<String>> {
        if !self.dest.is_dir() {
            return Ok(Vec::new());
        }
        Self::list_dir(&self.dest, pattern)
    }

    fn gunzip(&self, name: &str) -> Result<String> {
        let src = self.dest.join(name);
        let target_name = match name.strip_suffix(".gz") {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => {
                return Err(VaspCpError::DecompressError {
                    path: src.display().to_string(),
                    source: io::Error::new(io::ErrorKind::InvalidInput, "not a .gz file"),
                })
            }
        };

        let file = File::open(&src).map_err(|e| VaspCpError::FileReadError {
            path: src.display().to_string(),
            source: e,
        })?;

        // 先写入临时文件，成功后再替换目标，避免留下半截文件
        let target = self.dest.join(&target_name);
        let partial = self.dest.join(format!("{}.part", target_name));
        let decompress = || -> io::Result<()> {
            let mut decoder = GzDecoder::new(BufReader::new(file));
            let mut writer = BufWriter::new(File::create(&partial)?);
            io::copy(&mut decoder, &mut writer)?;
            writer.flush()
        };
        if let Err(e) = decompress() {
            let _ = fs::remove_file(&partial);
            return Err(VaspCpError::DecompressError {
                path: src.display().to_string(),
                source: e,
            });
        }

        replace_file(&partial, &target)?;
        fs::remove_file(&src).map_err(|e| VaspCpError::FileWriteError {
            path: src.display().to_string(),
            source: e,
        })?;

        Ok(target_name)
    }

    fn rename(&self, from: &str, to: &str) -> Result<()> {
        let src = self.dest.join(from);
        if !src.is_file() {
            return Err(VaspCpError::FileNotFound {
                path: src.display().to_string(),
            });
        }
        if from == to {
            return Ok(());
        }
        replace_file(&src, &self.dest.join(to))
    }
}

/// 两个路径是否指向同一个已存在的文件
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// 将 `src` 改名为 `dst`，`dst` 已存在时先删除（Windows 上 rename 不覆盖）
fn replace_file(src: &Path, dst: &Path) -> Result<()> {
    if dst.is_file() {
        fs::remove_file(dst).map_err(|e| VaspCpError::FileWriteError {
            path: dst.display().to_string(),
            source: e,
        })?;
    }
    fs::rename(src, dst).map_err(|e| VaspCpError::FileWriteError {
        path: dst.display().to_string(),
        source: e,
    })
}
