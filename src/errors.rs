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

use std::io;

use quick_error::quick_error;

quick_error! {
  /// Errors produced by the codec core.
  ///
  /// Every malformed-input path returns a variant here instead of panicking;
  /// panics are reserved for programmer-error states, e.g. reading from a
  /// decoder before `set_data()` was called.
  #[derive(Debug)]
  pub enum ParquetError {
    General(description: String) {
      display("Parquet error: {}", description)
    }
    ConfigInvalid(description: String) {
      display("Invalid codec configuration: {}", description)
    }
    Io(err: io::Error) {
      from()
      display("IO error: {}", err)
      cause(err)
    }
    Truncated(description: String) {
      display("Truncated input: {}", description)
    }
    Overflow(description: String) {
      display("Varint overflow: {}", description)
    }
    InvalidUse(description: String) {
      display("Invalid use: {}", description)
    }
    NYI(description: String) {
      display("Not yet implemented: {}", description)
    }
  }
}

pub type Result<T> = ::std::result::Result<T, ParquetError>;

macro_rules! general_err {
  ($fmt:expr) => ($crate::errors::ParquetError::General($fmt.to_owned()));
  ($fmt:expr, $($args:expr),*) => ($crate::errors::ParquetError::General(format!($fmt, $($args),*)));
}

macro_rules! config_err {
  ($fmt:expr) => ($crate::errors::ParquetError::ConfigInvalid($fmt.to_owned()));
  ($fmt:expr, $($args:expr),*) => ($crate::errors::ParquetError::ConfigInvalid(format!($fmt, $($args),*)));
}

macro_rules! eof_err {
  ($fmt:expr) => ($crate::errors::ParquetError::Truncated($fmt.to_owned()));
  ($fmt:expr, $($args:expr),*) => ($crate::errors::ParquetError::Truncated(format!($fmt, $($args),*)));
}

macro_rules! overflow_err {
  ($fmt:expr) => ($crate::errors::ParquetError::Overflow($fmt.to_owned()));
  ($fmt:expr, $($args:expr),*) => ($crate::errors::ParquetError::Overflow(format!($fmt, $($args),*)));
}

macro_rules! invalid_use_err {
  ($fmt:expr) => ($crate::errors::ParquetError::InvalidUse($fmt.to_owned()));
  ($fmt:expr, $($args:expr),*) => ($crate::errors::ParquetError::InvalidUse(format!($fmt, $($args),*)));
}

macro_rules! nyi_err {
  ($fmt:expr) => ($crate::errors::ParquetError::NYI($fmt.to_owned()));
  ($fmt:expr, $($args:expr),*) => ($crate::errors::ParquetError::NYI(format!($fmt, $($args),*)));
}
