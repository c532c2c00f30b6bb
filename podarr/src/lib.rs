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

//! ## How it works
//!
//! [`Arr`] is a growable array of plain-old-data [elements](Element), stored in a
//! single boxed block of memory. Its *length*, the number of valid elements, is
//! tracked apart from its *capacity*, the size of the block. Slots past the length
//! are kept zeroed.
//!
//! ### Growth
//!
//! When an element is added to a full array, the block is reallocated and the
//! valid elements copied over. The first allocation holds five elements by
//! default; after that the capacity doubles, clamped to a ceiling of `0x7FFFFFF`
//! elements. Arrays never shrink on their own, only when the capacity is set
//! explicitly. Arrays can also be created *fixed*, rejecting elements past their
//! capacity instead of growing. See [`ArrOptions`] for tuning.
//!
//! ### Views
//!
//! The valid elements can be borrowed as a plain slice, directly from the block.
//! Any operation that could reallocate the block needs a mutable borrow of the
//! array, so the compiler rejects it while a view is alive. Other sequences are
//! viewed through [`AsView`], copying only when their storage isn't contiguous.
//! The [`view`] module also exposes raw element addresses, for passing storage to
//! APIs that take pointers.
//!
//! ### Errors
//!
//! Every fallible operation returns an [`Error`] naming the operation and the
//! reason it failed. Failed operations leave the array unchanged.

mod arr;
mod element;
pub mod error;
mod options;
pub mod view;

pub use arr::Arr;
pub use element::Element;
pub use error::{Error, ErrorKind, OperationKind, Result};
pub use options::*;
pub use view::AsView;
