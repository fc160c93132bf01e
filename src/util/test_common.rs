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

//! Random value generation shared by the encoding/decoding test modules,
//! covering the four numeric `DataType`s this crate implements.

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::data_type::{DataType, DoubleType, FloatType, Int32Type, Int64Type};

/// Generates `n` random values of `T::T`.
pub trait RandGen<T: DataType> {
  fn gen(rng: &mut impl Rng) -> T::T;

  fn gen_vec(n: usize) -> Vec<T::T> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| Self::gen(&mut rng)).collect()
  }
}

pub struct RandGenImpl;

impl RandGen<Int32Type> for RandGenImpl {
  fn gen(rng: &mut impl Rng) -> i32 {
    rng.gen()
  }
}

impl RandGen<Int64Type> for RandGenImpl {
  fn gen(rng: &mut impl Rng) -> i64 {
    rng.gen()
  }
}

impl RandGen<FloatType> for RandGenImpl {
  fn gen(rng: &mut impl Rng) -> f32 {
    rng.gen()
  }
}

impl RandGen<DoubleType> for RandGenImpl {
  fn gen(rng: &mut impl Rng) -> f64 {
    rng.gen()
  }
}

/// `n` random values uniformly drawn from `[min, max)`.
pub fn random_numbers_range<T: SampleUniform + PartialOrd + Copy>(n: usize, min: T, max: T) -> Vec<T> {
  let mut rng = rand::thread_rng();
  (0..n).map(|_| rng.gen_range(min..max)).collect()
}

/// `n` random bytes, useful for corrupting/truncating buffers in error-path tests.
pub fn random_bytes(n: usize) -> Vec<u8> {
  let mut rng = rand::thread_rng();
  (0..n).map(|_| rng.gen()).collect()
}
