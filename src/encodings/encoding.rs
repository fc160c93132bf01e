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

//! Encoders: the Plain pass-through codec and the delta-bit-packing stream
//! encoder.
//!
//! Dictionary encoding is out of scope for this crate, and the delta
//! encoder's per-type conversion is expressed as the `DeltaEncodable` trait
//! bound (see `data_type.rs`) rather than runtime dispatch, so `get_encoder`
//! only needs to dispatch Plain generically; a `DeltaBitPackEncoder` is
//! constructed directly by callers who have a `T: DeltaEncodable` in hand.

use std::marker::PhantomData;

use crate::basic::Encoding;
use crate::data_type::{DataType, DeltaEncodable};
use crate::errors::Result;
use crate::util::bit_util::{num_required_bits, pack8, write_uleb128, write_zigzag_vlq};
use crate::util::memory::{ByteBuffer, ByteBufferPtr};

/// Default block size used when a caller doesn't otherwise specify one.
/// Must be a positive multiple of 128.
pub const DEFAULT_BLOCK_SIZE: usize = 128;
/// Default mini-block count per block.
pub const DEFAULT_NUM_MINI_BLOCKS: usize = 4;

/// A stream encoder for one column chunk / page of values of type `T`.
pub trait Encoder<T: DataType> {
  /// Buffers `values` for encoding.
  fn put(&mut self, values: &[T::T]) -> Result<()>;

  /// The encoding this encoder implements.
  fn encoding(&self) -> Encoding;

  /// Flushes any buffered state and returns the encoded byte sequence,
  /// resetting the encoder so it may be reused for the next page.
  fn flush_buffer(&mut self) -> Result<ByteBufferPtr>;
}

/// Dispatches to an encoder for `encoding`. Only `PLAIN` is constructible
/// generically; every other variant -- including `DELTA_BINARY_PACKED`,
/// which requires `T: DeltaEncodable` -- reports `NYI`. Construct a
/// [`DeltaBitPackEncoder`] directly for `Int32Type`/`Int64Type` columns.
pub fn get_encoder<T: DataType>(encoding: Encoding) -> Result<Box<dyn Encoder<T>>> {
  match encoding {
    Encoding::PLAIN => Ok(Box::new(PlainEncoder::<T>::new())),
    e => Err(nyi_err!("Encoder not supported by generic dispatch for encoding {}", e)),
  }
}

/// Little-endian fixed-width pass-through encoder.
pub struct PlainEncoder<T: DataType> {
  buffer: ByteBuffer,
  _phantom: PhantomData<T>,
}

impl<T: DataType> PlainEncoder<T> {
  pub fn new() -> Self {
    PlainEncoder { buffer: ByteBuffer::new(), _phantom: PhantomData }
  }
}

impl<T: DataType> Default for PlainEncoder<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: DataType> Encoder<T> for PlainEncoder<T> {
  fn put(&mut self, values: &[T::T]) -> Result<()> {
    let mut tmp = Vec::with_capacity(values.len() * T::BYTE_WIDTH);
    for &v in values {
      T::write_le(&mut tmp, v);
    }
    self.buffer.extend_from_slice(&tmp);
    Ok(())
  }

  fn encoding(&self) -> Encoding {
    Encoding::PLAIN
  }

  fn flush_buffer(&mut self) -> Result<ByteBufferPtr> {
    Ok(self.buffer.consume())
  }
}

/// Delta-bit-packing stream encoder. Generic over `Int32Type`/`Int64Type`
/// only -- the two widths the wire format defines deltas over.
pub struct DeltaBitPackEncoder<T: DeltaEncodable> {
  block_size: usize,
  mini_block_count: usize,
  mini_block_value_count: usize,
  total_values: usize,
  first_value: Option<i64>,
  previous_value: i64,
  deltas: Vec<i64>,
  staging: ByteBuffer,
  _phantom: PhantomData<T>,
}

impl<T: DeltaEncodable> DeltaBitPackEncoder<T> {
  /// Constructs an encoder with the default block parameters.
  pub fn new() -> Result<Self> {
    Self::with_block_params(DEFAULT_BLOCK_SIZE, DEFAULT_NUM_MINI_BLOCKS)
  }

  /// Constructs an encoder with caller-supplied block parameters. Validates
  /// that `block_size` is a positive multiple of 128, that `mini_block_count`
  /// divides it, and that the resulting mini-block value count is a positive
  /// multiple of 8.
  pub fn with_block_params(block_size: usize, mini_block_count: usize) -> Result<Self> {
    if block_size == 0 || block_size % 128 != 0 {
      return Err(config_err!("block_size must be a positive multiple of 128, got {}", block_size));
    }
    if mini_block_count == 0 || block_size % mini_block_count != 0 {
      return Err(config_err!(
        "mini_block_count must be positive and divide block_size ({} does not divide {})",
        mini_block_count,
        block_size
      ));
    }
    let mini_block_value_count = block_size / mini_block_count;
    if mini_block_value_count == 0 || mini_block_value_count % 8 != 0 {
      return Err(config_err!(
        "mini_block_value_count ({}) must be a positive multiple of 8",
        mini_block_value_count
      ));
    }

    Ok(DeltaBitPackEncoder {
      block_size,
      mini_block_count,
      mini_block_value_count,
      total_values: 0,
      first_value: None,
      previous_value: 0,
      deltas: Vec::with_capacity(block_size),
      staging: ByteBuffer::new(),
      _phantom: PhantomData,
    })
  }

  /// Writes the current block's min_delta, bit-width list, and packed
  /// mini-blocks to the staging buffer, then clears the pending deltas.
  /// A no-op if no deltas are pending.
  fn flush_block(&mut self) {
    if self.deltas.is_empty() {
      return;
    }

    let min_delta = *self.deltas.iter().min().expect("checked non-empty above");

    let mut block = Vec::new();
    write_zigzag_vlq(&mut block, min_delta);

    let n = self.deltas.len();
    let mut bit_widths = Vec::with_capacity(self.mini_block_count);
    let mut packed = Vec::new();

    for mb in 0..self.mini_block_count {
      let start = mb * self.mini_block_value_count;
      let end = (start + self.mini_block_value_count).min(n);

      let mut shifted = Vec::with_capacity(self.mini_block_value_count);
      let mut max_shifted = 0u64;
      for &d in &self.deltas[start.min(n)..end] {
        let s = T::wrapping_sub_unsigned(d, min_delta);
        if s > max_shifted {
          max_shifted = s;
        }
        shifted.push(s);
      }
      shifted.resize(self.mini_block_value_count, 0);

      let bw = num_required_bits(max_shifted);
      bit_widths.push(bw as u8);

      if bw > 0 {
        for chunk in shifted.chunks(8) {
          let mut group = [0u64; 8];
          group[..chunk.len()].copy_from_slice(chunk);
          packed.extend_from_slice(&pack8(&group, bw));
        }
      }
    }

    block.extend_from_slice(&bit_widths);
    block.extend_from_slice(&packed);
    self.staging.extend_from_slice(&block);
    self.deltas.clear();
  }
}

impl<T: DeltaEncodable> Encoder<T> for DeltaBitPackEncoder<T> {
  fn put(&mut self, values: &[T::T]) -> Result<()> {
    for &v in values {
      let v = T::to_i64(v);
      if self.first_value.is_none() {
        self.first_value = Some(v);
        self.previous_value = v;
        self.total_values += 1;
        continue;
      }

      let delta = T::wrapping_sub(v, self.previous_value);
      self.previous_value = v;
      self.deltas.push(delta);
      self.total_values += 1;

      if self.deltas.len() == self.block_size {
        self.flush_block();
      }
    }
    Ok(())
  }

  fn encoding(&self) -> Encoding {
    Encoding::DELTA_BINARY_PACKED
  }

  fn flush_buffer(&mut self) -> Result<ByteBufferPtr> {
    self.flush_block();

    let mut header = Vec::new();
    write_uleb128(&mut header, self.block_size as u64);
    write_uleb128(&mut header, self.mini_block_count as u64);
    write_uleb128(&mut header, self.total_values as u64);
    write_zigzag_vlq(&mut header, self.first_value.unwrap_or(0));
    header.extend_from_slice(self.staging.as_slice());

    self.total_values = 0;
    self.first_value = None;
    self.previous_value = 0;
    self.deltas.clear();
    self.staging.clear();

    Ok(ByteBufferPtr::new(header))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data_type::{Int32Type, Int64Type};
  use crate::util::test_common::{RandGen, RandGenImpl};

  #[test]
  fn test_get_encoder_plain() {
    let mut enc = get_encoder::<Int32Type>(Encoding::PLAIN).unwrap();
    enc.put(&[1, 2, 3]).unwrap();
    let buf = enc.flush_buffer().unwrap();
    assert_eq!(buf.as_slice(), &[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
  }

  #[test]
  fn test_get_encoder_delta_is_nyi() {
    let result = get_encoder::<Int32Type>(Encoding::DELTA_BINARY_PACKED);
    assert!(result.is_err());
  }

  #[test]
  fn test_invalid_block_size() {
    assert!(DeltaBitPackEncoder::<Int32Type>::with_block_params(100, 4).is_err());
  }

  #[test]
  fn test_invalid_mini_block_count_does_not_divide() {
    assert!(DeltaBitPackEncoder::<Int32Type>::with_block_params(128, 5).is_err());
  }

  #[test]
  fn test_invalid_mini_block_value_count_not_multiple_of_8() {
    // mini_block_value_count = 128 / 32 = 4, not a multiple of 8.
    assert!(DeltaBitPackEncoder::<Int32Type>::with_block_params(128, 32).is_err());
  }

  #[test]
  fn test_constant_stream_scenario() {
    let mut enc = DeltaBitPackEncoder::<Int32Type>::with_block_params(128, 4).unwrap();
    enc.put(&[42, 42, 42, 42]).unwrap();
    let buf = enc.flush_buffer().unwrap();

    let mut expected = Vec::new();
    write_uleb128(&mut expected, 128);
    write_uleb128(&mut expected, 4);
    write_uleb128(&mut expected, 4);
    write_zigzag_vlq(&mut expected, 42);
    write_zigzag_vlq(&mut expected, 0); // min_delta
    expected.extend_from_slice(&[0, 0, 0, 0]); // four zero bit widths
    assert_eq!(buf.as_slice(), expected.as_slice());
  }

  #[test]
  fn test_arithmetic_stream_scenario() {
    let mut enc = DeltaBitPackEncoder::<Int32Type>::with_block_params(128, 4).unwrap();
    enc.put(&[10, 13, 16, 19]).unwrap();
    let buf = enc.flush_buffer().unwrap();

    let mut expected = Vec::new();
    write_uleb128(&mut expected, 128);
    write_uleb128(&mut expected, 4);
    write_uleb128(&mut expected, 4);
    write_zigzag_vlq(&mut expected, 10);
    write_zigzag_vlq(&mut expected, 3); // min_delta
    expected.extend_from_slice(&[0, 0, 0, 0]);
    assert_eq!(buf.as_slice(), expected.as_slice());
  }

  #[test]
  fn test_empty_stream_flush() {
    let mut enc = DeltaBitPackEncoder::<Int32Type>::with_block_params(128, 4).unwrap();
    let buf = enc.flush_buffer().unwrap();
    let mut expected = Vec::new();
    write_uleb128(&mut expected, 128);
    write_uleb128(&mut expected, 4);
    write_uleb128(&mut expected, 0);
    write_zigzag_vlq(&mut expected, 0);
    assert_eq!(buf.as_slice(), expected.as_slice());
  }

  #[test]
  fn test_encoder_reusable_after_flush() {
    let mut enc = DeltaBitPackEncoder::<Int32Type>::with_block_params(128, 4).unwrap();
    enc.put(&[1, 2, 3]).unwrap();
    let _ = enc.flush_buffer().unwrap();
    enc.put(&[100]).unwrap();
    let buf = enc.flush_buffer().unwrap();
    let mut expected = Vec::new();
    write_uleb128(&mut expected, 128);
    write_uleb128(&mut expected, 4);
    write_uleb128(&mut expected, 1);
    write_zigzag_vlq(&mut expected, 100);
    assert_eq!(buf.as_slice(), expected.as_slice());
  }

  #[test]
  fn test_random_values_encode_without_error_i32() {
    let values = <RandGenImpl as RandGen<Int32Type>>::gen_vec(1000);
    let mut enc = DeltaBitPackEncoder::<Int32Type>::new().unwrap();
    enc.put(&values).unwrap();
    let buf = enc.flush_buffer().unwrap();
    assert!(!buf.is_empty());
  }

  #[test]
  fn test_random_values_encode_without_error_i64() {
    let values = <RandGenImpl as RandGen<Int64Type>>::gen_vec(1000);
    let mut enc = DeltaBitPackEncoder::<Int64Type>::new().unwrap();
    enc.put(&values).unwrap();
    let buf = enc.flush_buffer().unwrap();
    assert!(!buf.is_empty());
  }
}
