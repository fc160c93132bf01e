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

//! A small immutable, reference-counted byte buffer, used as the return type
//! of `Encoder::flush_buffer` and the input type of `Decoder::set_data` so
//! pages can be shared without copying.

use std::ops::Deref;
use std::rc::Rc;

/// An immutable, cheaply-cloneable view over a byte range. Cloning copies a
/// reference count, not the underlying bytes.
#[derive(Debug, Clone)]
pub struct ByteBufferPtr {
  data: Rc<Vec<u8>>,
  start: usize,
  len: usize,
}

impl ByteBufferPtr {
  /// Wraps the whole of `data` as a `ByteBufferPtr`.
  pub fn new(data: Vec<u8>) -> Self {
    let len = data.len();
    ByteBufferPtr { data: Rc::new(data), start: 0, len }
  }

  /// Number of bytes in this view.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns a sub-view `[start, start + len)` of this buffer, sharing the
  /// same backing allocation.
  pub fn range(&self, start: usize, len: usize) -> Self {
    assert!(start + len <= self.len, "range out of bounds");
    ByteBufferPtr { data: self.data.clone(), start: self.start + start, len }
  }

  /// Returns a sub-view starting at `start` and running to the end.
  pub fn start_from(&self, start: usize) -> Self {
    self.range(start, self.len - start)
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.data[self.start..self.start + self.len]
  }
}

impl Deref for ByteBufferPtr {
  type Target = [u8];

  fn deref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl AsRef<[u8]> for ByteBufferPtr {
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl From<Vec<u8>> for ByteBufferPtr {
  fn from(data: Vec<u8>) -> Self {
    ByteBufferPtr::new(data)
  }
}

/// A growable byte buffer used while building up an encoded page. Call
/// `consume()` to freeze it into a shareable [`ByteBufferPtr`].
#[derive(Debug, Default)]
pub struct ByteBuffer {
  buf: Vec<u8>,
}

impl ByteBuffer {
  pub fn new() -> Self {
    ByteBuffer { buf: Vec::new() }
  }

  pub fn len(&self) -> usize {
    self.buf.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buf.is_empty()
  }

  pub fn extend_from_slice(&mut self, data: &[u8]) {
    self.buf.extend_from_slice(data);
  }

  pub fn clear(&mut self) {
    self.buf.clear();
  }

  /// Freezes the current contents into a [`ByteBufferPtr`], leaving this
  /// buffer empty and ready to accumulate the next page.
  pub fn consume(&mut self) -> ByteBufferPtr {
    ByteBufferPtr::new(std::mem::take(&mut self.buf))
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.buf
  }
}
