//! 文件存储实现
//!
//! 所有写入都是整文件替换：先写入同目录下的临时文件，再 rename 覆盖目标。

mod atomic;
mod json_config;
mod line_file;

pub use atomic::write_atomic;
pub use json_config::JsonConfigRepository;
pub use line_file::LineFileRepository;
