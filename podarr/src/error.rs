// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::result;
use amplify_derive::Display;

pub type Result<T = ()> = result::Result<T, Error>;

/// An array operation error, pairing the failed [operation](OperationKind) with
/// the [reason](ErrorKind) it failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{op} failed; {kind}")]
pub struct Error {
	op: OperationKind,
	kind: ErrorKind,
}

#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq)]
pub enum OperationKind {
	#[default]
	#[display("unknown operation")]
	Unknown,
	#[display("construct array")]
	Construct,
	#[display("set capacity")]
	SetCapacity,
	#[display("reserve capacity")]
	Reserve,
	#[display("get element")]
	Get,
	#[display("set element")]
	Set,
	#[display("insert element")]
	Insert,
	#[display("append element")]
	Append,
	#[display("remove element")]
	Remove,
	#[display("clear array")]
	Clear,
	#[display("borrow view")]
	View,
	#[display("copy view")]
	CopyView,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
	#[error("invalid argument: {0}")]
	InvalidArgument(&'static str),
	#[error("index {index} out of range for length {len}")]
	IndexOutOfRange {
		index: usize,
		len: usize
	},
	#[error("capacity of {capacity} exceeded on a fixed-size array")]
	CapacityExceeded {
		capacity: usize
	},
	#[error("array is read-only")]
	ReadOnly,
	#[error("destination length {actual} does not match source length {expected}")]
	SizeMismatch {
		expected: usize,
		actual: usize
	},
}

impl Error {
	pub(crate) const fn new(op: OperationKind, kind: ErrorKind) -> Self {
		Self { op, kind }
	}

	pub(crate) const fn invalid_argument(op: OperationKind, message: &'static str) -> Self {
		Self::new(op, ErrorKind::InvalidArgument(message))
	}

	pub(crate) const fn index_out_of_range(op: OperationKind, index: usize, len: usize) -> Self {
		Self::new(op, ErrorKind::IndexOutOfRange { index, len })
	}

	pub(crate) const fn capacity_exceeded(op: OperationKind, capacity: usize) -> Self {
		Self::new(op, ErrorKind::CapacityExceeded { capacity })
	}

	pub(crate) const fn read_only(op: OperationKind) -> Self {
		Self::new(op, ErrorKind::ReadOnly)
	}

	pub(crate) const fn size_mismatch(op: OperationKind, expected: usize, actual: usize) -> Self {
		Self::new(op, ErrorKind::SizeMismatch { expected, actual })
	}

	/// Returns the operation kind.
	pub fn operation(&self) -> OperationKind { self.op }

	/// Sets the operation kind.
	pub fn with_operation(mut self, op: OperationKind) -> Self {
		self.op = op;
		self
	}

	/// Returns the error kind.
	pub fn kind(&self) -> ErrorKind { self.kind }

	pub fn is_invalid_argument(&self) -> bool {
		matches!(self.kind, ErrorKind::InvalidArgument(_))
	}

	pub fn is_index_out_of_range(&self) -> bool {
		matches!(self.kind, ErrorKind::IndexOutOfRange { .. })
	}

	pub fn is_capacity_exceeded(&self) -> bool {
		matches!(self.kind, ErrorKind::CapacityExceeded { .. })
	}

	pub fn is_read_only(&self) -> bool {
		matches!(self.kind, ErrorKind::ReadOnly)
	}

	pub fn is_size_mismatch(&self) -> bool {
		matches!(self.kind, ErrorKind::SizeMismatch { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		let error = Error::index_out_of_range(OperationKind::Get, 3, 3);
		assert_eq!(error.to_string(), "get element failed; index 3 out of range for length 3");

		let error = Error::capacity_exceeded(OperationKind::Append, 2);
		assert_eq!(error.to_string(), "append element failed; capacity of 2 exceeded on a fixed-size array");
	}

	#[test]
	fn with_operation() {
		let error = Error::read_only(OperationKind::Insert).with_operation(OperationKind::Append);
		assert_eq!(error.operation(), OperationKind::Append);
		assert!(error.is_read_only());
	}
}
