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

//! Decoders mirroring `encoding.rs`: Plain pass-through and the
//! delta-bit-packing stream decoder.

use std::marker::PhantomData;

use crate::basic::Encoding;
use crate::data_type::{DataType, DeltaEncodable};
use crate::errors::Result;
use crate::util::bit_util::{read_uleb128, read_zigzag_vlq, unpack8};
use crate::util::memory::ByteBufferPtr;

/// A stream decoder for one column chunk / page of values of type `T`.
pub trait Decoder<T: DataType> {
  /// Supplies the encoded bytes for a page holding `num_values` values.
  fn set_data(&mut self, data: ByteBufferPtr, num_values: usize) -> Result<()>;

  /// Decodes up to `buffer.len()` values into `buffer`, returning the
  /// number actually written (less than `buffer.len()` once the page is
  /// exhausted).
  fn get(&mut self, buffer: &mut [T::T]) -> Result<usize>;

  /// Number of values not yet returned by `get`.
  fn values_left(&self) -> usize;

  /// The encoding this decoder implements.
  fn encoding(&self) -> Encoding;
}

/// Dispatches to a decoder for `encoding`. Only `PLAIN` is constructible
/// generically, mirroring `encoding::get_encoder`.
pub fn get_decoder<T: DataType>(encoding: Encoding) -> Result<Box<dyn Decoder<T>>> {
  match encoding {
    Encoding::PLAIN => Ok(Box::new(PlainDecoder::<T>::new())),
    e => Err(nyi_err!("Decoder not supported by generic dispatch for encoding {}", e)),
  }
}

/// Little-endian fixed-width pass-through decoder.
pub struct PlainDecoder<T: DataType> {
  data: Option<ByteBufferPtr>,
  start: usize,
  num_values: usize,
  values_read: usize,
  _phantom: PhantomData<T>,
}

impl<T: DataType> PlainDecoder<T> {
  pub fn new() -> Self {
    PlainDecoder { data: None, start: 0, num_values: 0, values_read: 0, _phantom: PhantomData }
  }
}

impl<T: DataType> Default for PlainDecoder<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: DataType> Decoder<T> for PlainDecoder<T> {
  fn set_data(&mut self, data: ByteBufferPtr, num_values: usize) -> Result<()> {
    self.data = Some(data);
    self.start = 0;
    self.num_values = num_values;
    self.values_read = 0;
    Ok(())
  }

  fn get(&mut self, buffer: &mut [T::T]) -> Result<usize> {
    let data = self.data.as_ref().expect("set_data must be called before get()");
    let remaining = self.num_values - self.values_read;
    let n = buffer.len().min(remaining);

    for (i, slot) in buffer.iter_mut().take(n).enumerate() {
      let off = self.start + i * T::BYTE_WIDTH;
      if off + T::BYTE_WIDTH > data.len() {
        return Err(eof_err!("Truncated plain-encoded data: expected {} more bytes", T::BYTE_WIDTH));
      }
      *slot = T::read_le(&data[off..off + T::BYTE_WIDTH]);
    }

    self.start += n * T::BYTE_WIDTH;
    self.values_read += n;
    Ok(n)
  }

  fn values_left(&self) -> usize {
    self.num_values - self.values_read
  }

  fn encoding(&self) -> Encoding {
    Encoding::PLAIN
  }
}

/// Delta-bit-packing stream decoder, mirroring
/// [`super::encoding::DeltaBitPackEncoder`]. Decodes one full block of
/// absolute values at a time into `current_block`.
pub struct DeltaBitPackDecoder<T: DeltaEncodable> {
  data: Option<ByteBufferPtr>,
  pos: usize,
  initialized: bool,
  block_size: usize,
  mini_block_count: usize,
  mini_block_value_count: usize,
  values_count: usize,
  values_read: usize,
  first_value: i64,
  accumulator: i64,
  current_block: Vec<i64>,
  block_pos: usize,
  _phantom: PhantomData<T>,
}

impl<T: DeltaEncodable> DeltaBitPackDecoder<T> {
  pub fn new() -> Self {
    DeltaBitPackDecoder {
      data: None,
      pos: 0,
      initialized: false,
      block_size: 0,
      mini_block_count: 0,
      mini_block_value_count: 0,
      values_count: 0,
      values_read: 0,
      first_value: 0,
      accumulator: 0,
      current_block: Vec::new(),
      block_pos: 0,
      _phantom: PhantomData,
    }
  }

  fn load_next_block(&mut self) -> Result<()> {
    let data = self.data.as_ref().expect("set_data must be called before get()").clone();
    let bytes = data.as_slice();

    if self.pos >= bytes.len() {
      return Err(eof_err!("Truncated delta stream: expected another block"));
    }

    let (min_delta, n) = read_zigzag_vlq(&bytes[self.pos..])?;
    self.pos += n;

    if self.pos + self.mini_block_count > bytes.len() {
      return Err(eof_err!("Truncated delta stream: missing bit-width list"));
    }
    let bit_widths = bytes[self.pos..self.pos + self.mini_block_count].to_vec();
    self.pos += self.mini_block_count;

    let mut block_values = Vec::with_capacity(self.block_size);
    for &bw_byte in &bit_widths {
      let bw = bw_byte as usize;

      if bw == 0 {
        for _ in 0..self.mini_block_value_count {
          self.accumulator = T::wrapping_add(self.accumulator, min_delta);
          block_values.push(self.accumulator);
        }
        continue;
      }

      let nbytes = bw * self.mini_block_value_count / 8;
      if self.pos + nbytes > bytes.len() {
        return Err(eof_err!("Truncated delta stream: missing mini-block payload"));
      }
      let mb_bytes = &bytes[self.pos..self.pos + nbytes];
      self.pos += nbytes;

      for group_start in (0..self.mini_block_value_count).step_by(8) {
        let byte_off = group_start * bw / 8;
        let group: [u64; 8] = unpack8(&mb_bytes[byte_off..], bw);
        for &shifted in group.iter() {
          self.accumulator = T::wrapping_add(T::wrapping_add(self.accumulator, min_delta), shifted as i64);
          block_values.push(self.accumulator);
        }
      }
    }

    self.current_block = block_values;
    self.block_pos = 0;
    Ok(())
  }
}

impl<T: DeltaEncodable> Default for DeltaBitPackDecoder<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: DeltaEncodable> Decoder<T> for DeltaBitPackDecoder<T> {
  fn set_data(&mut self, data: ByteBufferPtr, num_values: usize) -> Result<()> {
    let (block_size, first_header_fields) = {
      let bytes = data.as_slice();
      let mut pos = 0;
      let (block_size, n) = read_uleb128(&bytes[pos..])?;
      pos += n;
      let (mini_block_count, n) = read_uleb128(&bytes[pos..])?;
      pos += n;
      let (values_count, n) = read_uleb128(&bytes[pos..])?;
      pos += n;
      let (first_value, n) = read_zigzag_vlq(&bytes[pos..])?;
      pos += n;
      (block_size as usize, (mini_block_count as usize, values_count as usize, first_value, pos))
    };
    let (mini_block_count, values_count, first_value, header_len) = first_header_fields;

    if mini_block_count == 0 || block_size % mini_block_count != 0 {
      return Err(general_err!(
        "corrupt delta header: mini_block_count {} does not divide block_size {}",
        mini_block_count,
        block_size
      ));
    }
    let mini_block_value_count = block_size / mini_block_count;
    if mini_block_value_count == 0 || mini_block_value_count % 8 != 0 {
      return Err(general_err!(
        "corrupt delta header: mini_block_value_count {} is not a multiple of 8",
        mini_block_value_count
      ));
    }

    // The header already carries the authoritative value count; `num_values`
    // is accepted only for `Decoder` trait uniformity with `PlainDecoder`,
    // which has no other way to know a page's length.
    let _ = num_values;

    self.data = Some(data);
    self.pos = header_len;
    self.initialized = true;
    self.block_size = block_size;
    self.mini_block_count = mini_block_count;
    self.mini_block_value_count = mini_block_value_count;
    self.values_count = values_count;
    self.values_read = 0;
    self.first_value = first_value;
    self.accumulator = first_value;
    self.current_block = Vec::new();
    self.block_pos = 0;
    Ok(())
  }

  fn get(&mut self, buffer: &mut [T::T]) -> Result<usize> {
    assert!(self.initialized, "set_data must be called before get()");

    let mut n = 0;
    while n < buffer.len() && self.values_read < self.values_count {
      let value = if self.values_read == 0 {
        self.first_value
      } else {
        if self.block_pos >= self.current_block.len() {
          self.load_next_block()?;
        }
        let v = self.current_block[self.block_pos];
        self.block_pos += 1;
        v
      };

      buffer[n] = T::from_i64(value);
      self.values_read += 1;
      n += 1;
    }
    Ok(n)
  }

  fn values_left(&self) -> usize {
    self.values_count - self.values_read
  }

  fn encoding(&self) -> Encoding {
    Encoding::DELTA_BINARY_PACKED
  }
}
