//! # 文件名匹配模式
//!
//! 对 `glob::Pattern` 的薄封装，只针对裸文件名（不含目录）进行匹配。
//!
//! ## 功能
//! - 通配符校验（构造时失败而非匹配时失败）
//! - 可压缩文件模式：`<base><ext>*`，容忍 `.gz` 后缀
//! - 记录模式对应的字面文件名（stem），供重命名使用
//!
//! ## 依赖关系
//! - 被 `client/`, `files.rs`, `vasp/` 使用
//! - 使用 `glob` crate

use crate::error::{Result, VaspCpError};
use glob::{MatchOptions, Pattern};
use std::fmt;

/// 大小写敏感，`*` 不跨越路径分隔符
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 文件名匹配模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    pattern: Pattern,
    stem: String,
}

impl FilePattern {
    /// 从任意 glob 字符串创建模式
    pub fn new(raw: &str) -> Result<Self> {
        let pattern = Pattern::new(raw).map_err(|e| VaspCpError::InvalidPattern {
            pattern: raw.to_string(),
            reason: e.to_string(),
        })?;
        let stem = raw.strip_suffix('*').unwrap_or(raw).to_string();
        Ok(Self { pattern, stem })
    }

    /// 创建容忍压缩后缀的模式，例如 `("INCAR", ".relax2")` -> `INCAR.relax2*`
    ///
    /// `base` 和 `ext` 按字面处理，其中的通配符会被转义。
    pub fn compressible(base: &str, ext: &str) -> Result<Self> {
        let stem = format!("{}{}", base, ext);
        let raw = format!("{}*", Pattern::escape(&stem));
        let pattern = Pattern::new(&raw).map_err(|e| VaspCpError::InvalidPattern {
            pattern: raw.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern, stem })
    }

    /// 检查文件名是否匹配
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches_with(file_name, MATCH_OPTIONS)
    }

    /// 去掉尾部通配符后的字面文件名
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// 原始 glob 字符串
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressible_matches_plain_and_gz() {
        let p = FilePattern::compressible("vasprun.xml", ".relax2").unwrap();
        assert_eq!(p.as_str(), "vasprun.xml.relax2*");
        assert_eq!(p.stem(), "vasprun.xml.relax2");
        assert!(p.matches("vasprun.xml.relax2"));
        assert!(p.matches("vasprun.xml.relax2.gz"));
        assert!(!p.matches("vasprun.xml.relax1.gz"));
        assert!(!p.matches("vasprun.xml"));
    }

    #[test]
    fn test_compressible_without_extension() {
        let p = FilePattern::compressible("POTCAR", "").unwrap();
        assert!(p.matches("POTCAR"));
        assert!(p.matches("POTCAR.gz"));
        assert!(p.matches("POTCAR.spec"));
        assert!(!p.matches("KPOINTS"));
        assert_eq!(p.stem(), "POTCAR");
    }

    #[test]
    fn test_compressible_escapes_metacharacters() {
        let p = FilePattern::compressible("odd[1]", "").unwrap();
        assert!(p.matches("odd[1].gz"));
        assert!(!p.matches("odd1.gz"));
        assert_eq!(p.stem(), "odd[1]");
    }

    #[test]
    fn test_new_pattern() {
        let p = FilePattern::new("*.relax*").unwrap();
        assert!(p.matches("INCAR.relax1"));
        assert!(p.matches("vasprun.xml.relax10.gz"));
        assert!(!p.matches("INCAR"));
        assert!(!p.matches("sub/INCAR.relax1"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = FilePattern::new("INCAR[").unwrap_err();
        assert!(matches!(err, VaspCpError::InvalidPattern { .. }));
    }
}
