//! Byte-aligned writes: one shared guard, per-kind codec delegation.
//! 字节对齐写入：共享守卫协议，按类型委托编解码。

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use encoding_rs::{Encoding, UTF_8};

use super::BitWriter;
use crate::{Result, error::Error, sink::Sink};

/// Fixed-width aligned write: guard + one `ByteOrder` call.
macro_rules! put_fixed {
  ($name:ident, $ty:ty, $len:expr, $endian:ty, $write:ident) => {
    pub fn $name(&mut self, v: $ty) -> Result<()> {
      self.write_aligned($len, |buf, at| {
        <$endian>::$write(&mut buf[at..at + $len], v);
        at + $len
      })
    }
  };
}

impl<S: Sink> BitWriter<S> {
  /// Shared protocol for every aligned write: reject values that can never
  /// fit, align the pending bits, flush when the value would not fit in the
  /// remaining room, then let the codec write at the cursor. `put` returns
  /// the new write head.
  /// 所有对齐写入的共享协议：容量检查、隐式对齐、按需刷新、编解码写入。
  fn write_aligned<F>(&mut self, byte_len: usize, put: F) -> Result<()>
  where
    F: FnOnce(&mut [u8], usize) -> usize,
  {
    let cap = self.buf.len();
    if byte_len > cap {
      return Err(Error::Capacity { need: byte_len, cap });
    }
    self.byte_align();
    if self.cursor + byte_len >= cap {
      self.flush();
    }
    let at = put(&mut self.buf, self.cursor);
    self.total_bits += (at - self.cursor) * 8;
    self.cursor = at;
    Ok(())
  }

  pub fn put_u8(&mut self, v: u8) -> Result<()> {
    self.write_aligned(1, |buf, at| {
      buf[at] = v;
      at + 1
    })
  }

  pub fn put_i8(&mut self, v: i8) -> Result<()> {
    self.put_u8(v as u8)
  }

  put_fixed!(put_u16_be, u16, 2, BigEndian, write_u16);
  put_fixed!(put_u16_le, u16, 2, LittleEndian, write_u16);
  put_fixed!(put_i16_be, i16, 2, BigEndian, write_i16);
  put_fixed!(put_i16_le, i16, 2, LittleEndian, write_i16);
  put_fixed!(put_u32_be, u32, 4, BigEndian, write_u32);
  put_fixed!(put_u32_le, u32, 4, LittleEndian, write_u32);
  put_fixed!(put_i32_be, i32, 4, BigEndian, write_i32);
  put_fixed!(put_i32_le, i32, 4, LittleEndian, write_i32);
  put_fixed!(put_f32_be, f32, 4, BigEndian, write_f32);
  put_fixed!(put_f32_le, f32, 4, LittleEndian, write_f32);
  put_fixed!(put_f64_be, f64, 8, BigEndian, write_f64);
  put_fixed!(put_f64_le, f64, 8, LittleEndian, write_f64);

  /// Unsigned integer in exactly `len` bytes, big endian. Width and value
  /// range follow the codec contract: 1..=8 bytes, value must fit in `len`
  /// bytes.
  /// 以恰好 len 字节写入无符号整数，大端序。
  pub fn put_uint_be(&mut self, v: u64, len: usize) -> Result<()> {
    self.write_aligned(len, |buf, at| {
      BigEndian::write_uint(&mut buf[at..at + len], v, len);
      at + len
    })
  }

  pub fn put_uint_le(&mut self, v: u64, len: usize) -> Result<()> {
    self.write_aligned(len, |buf, at| {
      LittleEndian::write_uint(&mut buf[at..at + len], v, len);
      at + len
    })
  }

  /// Signed integer in exactly `len` bytes, big endian, two's complement.
  /// 以恰好 len 字节写入有符号整数，大端序补码。
  pub fn put_int_be(&mut self, v: i64, len: usize) -> Result<()> {
    self.write_aligned(len, |buf, at| {
      BigEndian::write_int(&mut buf[at..at + len], v, len);
      at + len
    })
  }

  pub fn put_int_le(&mut self, v: i64, len: usize) -> Result<()> {
    self.write_aligned(len, |buf, at| {
      LittleEndian::write_int(&mut buf[at..at + len], v, len);
      at + len
    })
  }

  /// Encode `s` with `enc` and append the encoded bytes aligned. The whole
  /// encoded form must fit in one buffer generation.
  /// 以指定编码写入字符串；编码结果必须能装入单个缓冲区。
  pub fn put_str(&mut self, s: &str, enc: &'static Encoding) -> Result<()> {
    let (bytes, _, _) = enc.encode(s);
    self.put_bytes(&bytes)
  }

  /// UTF-8 shorthand for `put_str`.
  pub fn put_utf8(&mut self, s: &str) -> Result<()> {
    self.put_str(s, UTF_8)
  }

  /// Append raw bytes aligned.
  /// 对齐追加原始字节。
  pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
    self.write_aligned(bytes.len(), |buf, at| {
      buf[at..at + bytes.len()].copy_from_slice(bytes);
      at + bytes.len()
    })
  }
}
