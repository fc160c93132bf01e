// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Per-type constants and byte conversions, and the narrower `DeltaEncodable`
//! trait that restricts `DeltaBitPackEncoder`/`Decoder` to the two integer
//! types the wire format actually defines them for.
//!
//! The restriction is expressed as a trait bound rather than a runtime
//! check: `DeltaBitPackEncoder<T>` simply isn't generic over `FloatType`, so
//! misuse is a compile error rather than a runtime panic.

use byteorder::{ByteOrder, LittleEndian};

use crate::basic::PhysicalType;

/// A primitive value type usable in a column value store.
pub trait DataType: 'static {
  /// The Rust value type this column stores (`i32`, `i64`, `f32`, `f64`).
  type T: Copy + Default + PartialEq + PartialOrd + std::fmt::Debug + Send + Sync;

  /// The on-wire physical type tag for this Rust type.
  const PHYSICAL_TYPE: PhysicalType;

  /// Serialized size in bytes of one value (4 or 8).
  const BYTE_WIDTH: usize;

  /// Sentinel installed as `min` on reset, so the first real value always
  /// becomes the max.
  fn min_sentinel() -> Self::T;

  /// Sentinel installed as `max` on reset, so the first real value always
  /// becomes the min.
  fn max_sentinel() -> Self::T;

  /// Appends the little-endian wire representation of `v` to `buf`.
  fn write_le(buf: &mut Vec<u8>, v: Self::T);

  /// Reads one little-endian wire value from the front of `bytes`.
  /// `bytes` must contain at least `BYTE_WIDTH` bytes.
  fn read_le(bytes: &[u8]) -> Self::T;
}

/// 32-bit signed integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int32Type;

/// 64-bit signed integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int64Type;

/// IEEE-754 single precision column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatType;

/// IEEE-754 double precision column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleType;

impl DataType for Int32Type {
  type T = i32;
  const PHYSICAL_TYPE: PhysicalType = PhysicalType::INT32;
  const BYTE_WIDTH: usize = 4;

  #[inline]
  fn min_sentinel() -> i32 {
    i32::MAX
  }

  #[inline]
  fn max_sentinel() -> i32 {
    i32::MIN
  }

  #[inline]
  fn write_le(buf: &mut Vec<u8>, v: i32) {
    let mut tmp = [0u8; 4];
    LittleEndian::write_i32(&mut tmp, v);
    buf.extend_from_slice(&tmp);
  }

  #[inline]
  fn read_le(bytes: &[u8]) -> i32 {
    LittleEndian::read_i32(bytes)
  }
}

impl DataType for Int64Type {
  type T = i64;
  const PHYSICAL_TYPE: PhysicalType = PhysicalType::INT64;
  const BYTE_WIDTH: usize = 8;

  #[inline]
  fn min_sentinel() -> i64 {
    i64::MAX
  }

  #[inline]
  fn max_sentinel() -> i64 {
    i64::MIN
  }

  #[inline]
  fn write_le(buf: &mut Vec<u8>, v: i64) {
    let mut tmp = [0u8; 8];
    LittleEndian::write_i64(&mut tmp, v);
    buf.extend_from_slice(&tmp);
  }

  #[inline]
  fn read_le(bytes: &[u8]) -> i64 {
    LittleEndian::read_i64(bytes)
  }
}

impl DataType for FloatType {
  type T = f32;
  const PHYSICAL_TYPE: PhysicalType = PhysicalType::FLOAT;
  const BYTE_WIDTH: usize = 4;

  #[inline]
  fn min_sentinel() -> f32 {
    f32::MAX
  }

  #[inline]
  fn max_sentinel() -> f32 {
    -f32::MAX
  }

  #[inline]
  fn write_le(buf: &mut Vec<u8>, v: f32) {
    let mut tmp = [0u8; 4];
    LittleEndian::write_f32(&mut tmp, v);
    buf.extend_from_slice(&tmp);
  }

  #[inline]
  fn read_le(bytes: &[u8]) -> f32 {
    LittleEndian::read_f32(bytes)
  }
}

impl DataType for DoubleType {
  type T = f64;
  const PHYSICAL_TYPE: PhysicalType = PhysicalType::DOUBLE;
  const BYTE_WIDTH: usize = 8;

  #[inline]
  fn min_sentinel() -> f64 {
    f64::MAX
  }

  #[inline]
  fn max_sentinel() -> f64 {
    -f64::MAX
  }

  #[inline]
  fn write_le(buf: &mut Vec<u8>, v: f64) {
    let mut tmp = [0u8; 8];
    LittleEndian::write_f64(&mut tmp, v);
    buf.extend_from_slice(&tmp);
  }

  #[inline]
  fn read_le(bytes: &[u8]) -> f64 {
    LittleEndian::read_f64(bytes)
  }
}

/// Types that `DeltaBitPackEncoder`/`DeltaBitPackDecoder` support: the two
/// integer widths the wire format defines deltas over (32 and 64 bit
/// signed).
pub trait DeltaEncodable: DataType {
  /// The word width in bits used for wrapping delta arithmetic and for
  /// bit-width computation.
  const WORD_WIDTH: u32;

  fn to_i64(v: Self::T) -> i64;
  fn from_i64(v: i64) -> Self::T;

  /// `left - right`, wrapping in a two's-complement `WORD_WIDTH`-bit word.
  fn wrapping_sub(left: i64, right: i64) -> i64;

  /// `left + right`, wrapping in a two's-complement `WORD_WIDTH`-bit word.
  fn wrapping_add(left: i64, right: i64) -> i64;

  /// `left - right` reinterpreted as unsigned `WORD_WIDTH`-bit, used for
  /// bit-width computation so the result is never treated as negative.
  fn wrapping_sub_unsigned(left: i64, right: i64) -> u64;
}

impl DeltaEncodable for Int32Type {
  const WORD_WIDTH: u32 = 32;

  #[inline]
  fn to_i64(v: i32) -> i64 {
    v as i64
  }

  #[inline]
  fn from_i64(v: i64) -> i32 {
    v as i32
  }

  #[inline]
  fn wrapping_sub(left: i64, right: i64) -> i64 {
    (left as i32).wrapping_sub(right as i32) as i64
  }

  #[inline]
  fn wrapping_add(left: i64, right: i64) -> i64 {
    (left as i32).wrapping_add(right as i32) as i64
  }

  #[inline]
  fn wrapping_sub_unsigned(left: i64, right: i64) -> u64 {
    (left as i32).wrapping_sub(right as i32) as u32 as u64
  }
}

impl DeltaEncodable for Int64Type {
  const WORD_WIDTH: u32 = 64;

  #[inline]
  fn to_i64(v: i64) -> i64 {
    v
  }

  #[inline]
  fn from_i64(v: i64) -> i64 {
    v
  }

  #[inline]
  fn wrapping_sub(left: i64, right: i64) -> i64 {
    left.wrapping_sub(right)
  }

  #[inline]
  fn wrapping_add(left: i64, right: i64) -> i64 {
    left.wrapping_add(right)
  }

  #[inline]
  fn wrapping_sub_unsigned(left: i64, right: i64) -> u64 {
    left.wrapping_sub(right) as u64
  }
}
