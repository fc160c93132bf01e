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

//! Basic enums shared across the codec core: physical wire types, repetition
//! of a column, and the small set of encodings this crate implements.

use std::fmt;

/// Physical on-disk type of a primitive column. Narrowed to the numeric
/// types the value store and delta codec support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalType {
  INT32,
  INT64,
  FLOAT,
  DOUBLE,
}

impl fmt::Display for PhysicalType {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}", self)
  }
}

/// Repetition of a column, mirrored from the Parquet/Thrift
/// `FieldRepetitionType`. Only `REPEATED` columns may accept a batch `put`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
  REQUIRED,
  OPTIONAL,
  REPEATED,
}

/// Encodings recognised by `get_encoder`/`get_decoder`. Only `PLAIN` and
/// `DELTA_BINARY_PACKED` are implemented by this crate; the others are kept
/// as named variants so dispatch against an unimplemented encoding reports
/// `NYI` the same way it would for a full Parquet `Encoding` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
  PLAIN,
  DELTA_BINARY_PACKED,
  RLE_DICTIONARY,
  PLAIN_DICTIONARY,
  DELTA_LENGTH_BYTE_ARRAY,
  DELTA_BYTE_ARRAY,
}

impl fmt::Display for Encoding {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}", self)
  }
}
