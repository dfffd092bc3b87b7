//! # 复制结果汇总
//!
//! 记录一次 `copy_vasp_outputs` 调用在目标目录上做了什么。
//!
//! ## 依赖关系
//! - 由 `vasp/outputs.rs` 生成
//! - 被 `commands/copy.rs` 用于打印汇总

use super::RelaxExtension;

/// 复制结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// 解析出的弛豫后缀
    pub relax_ext: RelaxExtension,

    /// 从源目录复制来的文件名（复制时的原名）
    pub copied: Vec<String>,

    /// 解压后得到的文件名
    pub decompressed: Vec<String>,

    /// 去后缀重命名 (原名, 新名)
    pub renamed: Vec<(String, String)>,

    /// CONTCAR 是否已改名为 POSCAR
    pub poscar_from_contcar: bool,
}

impl CopyReport {
    pub fn new(relax_ext: RelaxExtension) -> Self {
        Self {
            relax_ext,
            ..Self::default()
        }
    }

    /// 复制的文件数
    pub fn num_copied(&self) -> usize {
        self.copied.len()
    }

    /// 源文件在目标目录中的最终文件名（依次经过解压、去后缀、CONTCAR -> POSCAR）
    pub fn final_name(&self, copied: &str) -> String {
        let mut name = match copied.strip_suffix(".gz") {
            Some(stem) if self.decompressed.iter().any(|d| d == stem) => stem.to_string(),
            _ => copied.to_string(),
        };
        if let Some((_, to)) = self.renamed.iter().find(|(from, _)| *from == name) {
            name = to.clone();
        }
        if self.poscar_from_contcar && name == "CONTCAR" {
            name = "POSCAR".to_string();
        }
        name
    }
}
