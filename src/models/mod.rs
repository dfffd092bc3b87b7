//! # 数据模型模块
//!
//! 定义文件名模式、弛豫后缀和复制结果等数据模型。
//!
//! ## 依赖关系
//! - 被 `client/`, `files.rs`, `vasp/` 和 `commands/` 使用
//! - 子模块: pattern, relax, report

pub mod pattern;
pub mod relax;
pub mod report;

pub use pattern::FilePattern;
pub use relax::RelaxExtension;
pub use report::CopyReport;
