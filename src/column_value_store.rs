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

//! `ColumnValueStore`: buffers one column's values, tracks running min/max,
//! and exposes a uniform interface to the Plain and delta-bit-packed codecs.

use std::marker::PhantomData;

use crate::basic::Repetition;
use crate::data_type::DataType;

/// Column parameters supplied by the containing writer/reader. The store
/// borrows these rather than owning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnParameters {
  pub column_index: usize,
}

/// A typed, per-column value buffer with running min/max statistics.
///
/// `'a` is the lifetime of the borrowed [`ColumnParameters`]; the store
/// never outlives the writer that owns them.
pub struct ColumnValueStore<'a, T: DataType> {
  repetition: Repetition,
  min: T::T,
  max: T::T,
  size: usize,
  params: &'a ColumnParameters,
  buffer: Vec<T::T>,
  _phantom: PhantomData<T>,
}

impl<'a, T: DataType> ColumnValueStore<'a, T> {
  /// Creates a store in the "no value seen" state for `REQUIRED` columns.
  /// Call [`reset`](Self::reset) to pick a different repetition before use.
  pub fn new(params: &'a ColumnParameters) -> Self {
    let mut store = ColumnValueStore {
      repetition: Repetition::REQUIRED,
      min: T::max_sentinel(),
      max: T::min_sentinel(),
      size: 0,
      params,
      buffer: Vec::new(),
      _phantom: PhantomData,
    };
    store.reset(Repetition::REQUIRED);
    store
  }

  /// Restores sentinel extrema and clears the buffer, e.g. between row
  /// groups.
  pub fn reset(&mut self, repetition: Repetition) {
    self.repetition = repetition;
    self.min = T::max_sentinel();
    self.max = T::min_sentinel();
    self.size = 0;
    self.buffer.clear();
  }

  /// Appends a single value, updating min/max and size.
  pub fn add(&mut self, value: T::T) {
    self.update_min_max(value);
    self.buffer.push(value);
    self.size += self.size_of(value);
  }

  /// Appends a sequence of values. Only legal when `repetition ==
  /// REPEATED`; otherwise `INVALID_USE`.
  pub fn add_batch(&mut self, values: &[T::T]) -> crate::errors::Result<()> {
    if self.repetition != Repetition::REPEATED {
      return Err(invalid_use_err!(
        "cannot add a value sequence to a non-REPEATED column (column_index={})",
        self.params.column_index
      ));
    }
    for &v in values {
      self.add(v);
    }
    Ok(())
  }

  #[inline]
  fn update_min_max(&mut self, value: T::T) {
    // `<`/`>` on `PartialOrd` already return `false` against NaN, so this
    // naturally ignores NaN with no special-casing.
    if value < self.min {
      self.min = value;
    }
    if value > self.max {
      self.max = value;
    }
  }

  /// Little-endian bytes of the running minimum, or empty if no value has
  /// been observed yet (`max == min_sentinel()`).
  pub fn min_bytes(&self) -> Vec<u8> {
    if self.max == T::min_sentinel() {
      return Vec::new();
    }
    let mut buf = Vec::with_capacity(T::BYTE_WIDTH);
    T::write_le(&mut buf, self.min);
    buf
  }

  /// Little-endian bytes of the running maximum, or empty if no value has
  /// been observed yet (`min == max_sentinel()`).
  pub fn max_bytes(&self) -> Vec<u8> {
    if self.min == T::max_sentinel() {
      return Vec::new();
    }
    let mut buf = Vec::with_capacity(T::BYTE_WIDTH);
    T::write_le(&mut buf, self.max);
    buf
  }

  pub fn wire_type(&self) -> crate::basic::PhysicalType {
    T::PHYSICAL_TYPE
  }

  pub fn repetition_type(&self) -> Repetition {
    self.repetition
  }

  pub fn params(&self) -> &ColumnParameters {
    self.params
  }

  /// Serialized size in bytes of one value of this store's type.
  pub fn size_of(&self, _v: T::T) -> usize {
    T::BYTE_WIDTH
  }

  /// Sum of the serialized size in bytes of all buffered values.
  pub fn size(&self) -> usize {
    self.size
  }

  /// The values buffered since the last `reset`, in insertion order.
  pub fn values(&self) -> &[T::T] {
    &self.buffer
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data_type::Int32Type;

  fn params() -> ColumnParameters {
    ColumnParameters { column_index: 0 }
  }

  #[test]
  fn test_fresh_store_is_empty() {
    let p = params();
    let store: ColumnValueStore<Int32Type> = ColumnValueStore::new(&p);
    assert!(store.min_bytes().is_empty());
    assert!(store.max_bytes().is_empty());
    assert_eq!(store.size(), 0);
  }

  #[test]
  fn test_single_value_min_max() {
    let p = params();
    let mut store: ColumnValueStore<Int32Type> = ColumnValueStore::new(&p);
    store.add(7);
    assert_eq!(store.min_bytes(), 7i32.to_le_bytes());
    assert_eq!(store.max_bytes(), 7i32.to_le_bytes());
  }

  #[test]
  fn test_store_min_max_scenario() {
    let p = params();
    let mut store: ColumnValueStore<Int32Type> = ColumnValueStore::new(&p);
    store.reset(Repetition::REQUIRED);
    store.add(-7);
    store.add(11);
    store.add(3);
    assert_eq!(store.min_bytes(), (-7i32).to_le_bytes());
    assert_eq!(store.max_bytes(), 11i32.to_le_bytes());
    assert_eq!(store.size(), 12);
  }

  #[test]
  fn test_add_batch_requires_repeated() {
    let p = params();
    let mut store: ColumnValueStore<Int32Type> = ColumnValueStore::new(&p);
    store.reset(Repetition::REQUIRED);
    assert!(store.add_batch(&[1, 2, 3]).is_err());

    store.reset(Repetition::REPEATED);
    assert!(store.add_batch(&[1, 2, 3]).is_ok());
    assert_eq!(store.size(), 12);
  }

  #[test]
  fn test_reset_restores_sentinels() {
    let p = params();
    let mut store: ColumnValueStore<Int32Type> = ColumnValueStore::new(&p);
    store.add(5);
    store.reset(Repetition::REQUIRED);
    assert!(store.min_bytes().is_empty());
    assert!(store.max_bytes().is_empty());
  }

  #[test]
  fn test_nan_ignored_in_float_min_max() {
    use crate::data_type::FloatType;
    let p = params();
    let mut store: ColumnValueStore<FloatType> = ColumnValueStore::new(&p);
    store.add(1.0);
    store.add(f32::NAN);
    store.add(-1.0);
    assert_eq!(store.min_bytes(), (-1.0f32).to_le_bytes());
    assert_eq!(store.max_bytes(), (1.0f32).to_le_bytes());
  }
}
