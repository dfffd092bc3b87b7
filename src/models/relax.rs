//! # 弛豫阶段后缀
//!
//! 多步弛豫的 VASP 作业会把每一步的输出加上 `.relax<N>` 后缀，
//! 例如 `vasprun.xml.relax1.gz`, `vasprun.xml.relax2.gz`。
//!
//! ## 依赖关系
//! - 被 `vasp/relax.rs`, `vasp/outputs.rs` 使用
//! - 使用 `regex` 提取阶段编号

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// 弛豫后缀：无后缀或 `.relax<N>`
///
/// 按编号数值排序，无后缀最小。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelaxExtension(Option<u64>);

impl RelaxExtension {
    /// 无弛豫后缀（目录已是规范形式）
    pub fn none() -> Self {
        Self(None)
    }

    /// 第 `n` 步弛豫
    pub fn stage(n: u64) -> Self {
        Self(Some(n))
    }

    /// 阶段编号
    pub fn number(&self) -> Option<u64> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// 从文件名中提取 `.relax` 后面的编号
    ///
    /// 没有数字或数字溢出时返回 `None`。
    pub fn parse_stage(file_name: &str) -> Option<u64> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"\.relax(\d+)").expect("valid relax regex"));
        re.captures(file_name)?.get(1)?.as_str().parse().ok()
    }
}

impl fmt::Display for RelaxExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, ".relax{}", n),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RelaxExtension::none().to_string(), "");
        assert_eq!(RelaxExtension::stage(2).to_string(), ".relax2");
        assert_eq!(RelaxExtension::stage(12).to_string(), ".relax12");
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(RelaxExtension::stage(10) > RelaxExtension::stage(2));
        assert!(RelaxExtension::stage(1) > RelaxExtension::none());
    }

    #[test]
    fn test_parse_stage() {
        assert_eq!(RelaxExtension::parse_stage("vasprun.xml.relax2.gz"), Some(2));
        assert_eq!(RelaxExtension::parse_stage("INCAR.relax10"), Some(10));
        assert_eq!(RelaxExtension::parse_stage("notes.relaxed"), None);
        assert_eq!(RelaxExtension::parse_stage("INCAR.relax"), None);
        assert_eq!(
            RelaxExtension::parse_stage("OUTCAR.relax99999999999999999999999"),
            None
        );
    }
}
