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

//! Columnar numeric codec core: bit-packing, delta-bit-packing, and a typed
//! per-column value store for a Parquet-like columnar file format.
//!
//! This crate covers only the bit-level codec machinery and the value store
//! that feeds it -- not schema parsing, footer/metadata encoding, row
//! assembly, or I/O transport, all of which belong to a surrounding file
//! reader/writer that hands this crate typed value slices and byte
//! readers/writers.

#[macro_use]
pub mod errors;

pub mod basic;
pub mod column_value_store;
pub mod data_type;
pub mod encodings;
pub mod util;

pub use crate::basic::{Encoding, PhysicalType, Repetition};
pub use crate::column_value_store::{ColumnParameters, ColumnValueStore};
pub use crate::data_type::{DataType, DeltaEncodable, DoubleType, FloatType, Int32Type, Int64Type};
pub use crate::encodings::decoding::{get_decoder, Decoder, DeltaBitPackDecoder, PlainDecoder};
pub use crate::encodings::encoding::{get_encoder, Encoder, DeltaBitPackEncoder, PlainEncoder};
pub use crate::errors::{ParquetError, Result};

#[cfg(test)]
mod integration_tests {
  use super::*;

  #[test]
  fn test_end_to_end_delta_round_trip() {
    let values: Vec<i32> = (0..500).map(|i| i * 3 - 17).collect();

    let mut encoder = DeltaBitPackEncoder::<Int32Type>::new().unwrap();
    encoder.put(&values).unwrap();
    let encoded = encoder.flush_buffer().unwrap();

    let mut decoder = DeltaBitPackDecoder::<Int32Type>::new();
    decoder.set_data(encoded, values.len()).unwrap();
    let mut decoded = vec![0i32; values.len()];
    decoder.get(&mut decoded).unwrap();

    assert_eq!(decoded, values);
  }

  #[test]
  fn test_end_to_end_plain_round_trip() {
    let values = vec![1.5f64, -2.25, 0.0, f64::MAX, f64::MIN];

    let mut encoder = get_encoder::<DoubleType>(Encoding::PLAIN).unwrap();
    encoder.put(&values).unwrap();
    let encoded = encoder.flush_buffer().unwrap();

    let mut decoder = get_decoder::<DoubleType>(Encoding::PLAIN).unwrap();
    decoder.set_data(encoded, values.len()).unwrap();
    let mut decoded = vec![0.0f64; values.len()];
    decoder.get(&mut decoded).unwrap();

    assert_eq!(decoded, values);
  }

  #[test]
  fn test_value_store_feeds_delta_encoder() {
    let params = ColumnParameters { column_index: 0 };
    let mut store: ColumnValueStore<Int64Type> = ColumnValueStore::new(&params);
    store.add(100);
    store.add(105);
    store.add(97);

    let mut encoder = DeltaBitPackEncoder::<Int64Type>::new().unwrap();
    encoder.put(store.values()).unwrap();
    let encoded = encoder.flush_buffer().unwrap();

    let mut decoder = DeltaBitPackDecoder::<Int64Type>::new();
    decoder.set_data(encoded, store.values().len()).unwrap();
    let mut decoded = vec![0i64; store.values().len()];
    decoder.get(&mut decoded).unwrap();

    assert_eq!(decoded, store.values());
    assert_eq!(store.min_bytes(), 97i64.to_le_bytes());
    assert_eq!(store.max_bytes(), 105i64.to_le_bytes());
  }
}
