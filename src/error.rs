//! # 统一错误处理模块
//!
//! 定义 vaspcp 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// vaspcp 统一错误类型
#[derive(Error, Debug)]
pub enum VaspCpError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to decompress file: {path}")]
    DecompressError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot parse relaxation number from file name: {file}")]
    RelaxParse { file: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    // ─────────────────────────────────────────────────────────────
    // 复制错误
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("Could not find POTCAR file to copy from: {dir}")]
    MissingPotcar { dir: String },

    #[error("Source and destination are the same file: {path}")]
    SameFile { path: String },

    // ─────────────────────────────────────────────────────────────
    // 远程传输错误
    // ─────────────────────────────────────────────────────────────
    #[error("Remote host '{host}' given but this file client only supports the local filesystem")]
    RemoteUnsupported { host: String },

    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, VaspCpError>;
