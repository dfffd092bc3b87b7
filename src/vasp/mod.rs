//! # VASP 输出整理模块
//!
//! 解析弛豫后缀并复制、解压、重命名 VASP 输出文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `client/`, `files.rs`, `models/`
//! - 子模块: relax, outputs

pub mod outputs;
pub mod relax;

pub use outputs::{
    copy_vasp_outputs, copy_vasp_outputs_to, CopyOptions, OPTIONAL_FILES, REQUIRED_FILES,
};
pub use relax::get_largest_relax_extension;
