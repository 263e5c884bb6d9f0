use thiserror::Error;

/// Writer specialized Result type.
/// 写入器专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the write paths. None of them leave partial state:
/// a rejected call mutates neither the pending bits nor the buffer.
/// 写入路径抛出的错误。被拒绝的调用不会留下任何部分状态。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
  /// Bit input contained something other than 0/1.
  /// 位输入包含 0/1 以外的内容。
  #[error("invalid bit value: {0}")]
  Format(String),
  /// Requested bit length outside 0..=32.
  /// 请求的位长超出 0..=32。
  #[error("bit length {0} out of range 0..=32")]
  BitLen(usize),
  /// Aligned value larger than the whole flush buffer; it can never fit
  /// in one buffer generation.
  /// 对齐写入的值超过整个刷新缓冲区，永远无法装入。
  #[error("{need} bytes exceeds buffer capacity {cap}")]
  Capacity { need: usize, cap: usize },
}
