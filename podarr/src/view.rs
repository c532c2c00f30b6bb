// SPDX-License-Identifier: Apache-2.0

//! Contiguous views over arrays and other element sequences.
//!
//! Views over an [`Arr`] borrow its storage directly, covering exactly its valid
//! elements. Because the view holds a borrow, the array can't be reallocated,
//! cleared, or dropped while the view is alive.
//!
//! Sequences that don't expose contiguous storage, like a [`LinkedList`] or a
//! wrapped-around [`VecDeque`], are copied into a fresh block instead. This costs
//! an allocation and a copy proportional to the sequence length; to avoid the
//! allocation, copy into a caller-owned region with [`copy_view_into`].

use std::borrow::Cow;
use std::collections::{LinkedList, VecDeque};
use bytemuck::allocation::zeroed_slice_box;
use crate::{Arr, Element};
use crate::error::{Error, Result};
use crate::error::OperationKind::{CopyView, View};

/// A sequence which can be viewed as a contiguous slice of elements, borrowed if
/// its storage is contiguous, copied otherwise.
pub trait AsView<T: Element> {
	/// Returns a contiguous view of the sequence.
	fn as_view(&self) -> Cow<'_, [T]>;

	/// Returns `true` if [`as_view`](Self::as_view) borrows without copying.
	fn is_contiguous(&self) -> bool { true }
}

impl<T: Element> AsView<T> for Arr<T> {
	fn as_view(&self) -> Cow<'_, [T]> { Cow::Borrowed(self.as_slice()) }
}

impl<T: Element> AsView<T> for [T] {
	fn as_view(&self) -> Cow<'_, [T]> { Cow::Borrowed(self) }
}

impl<T: Element, const N: usize> AsView<T> for [T; N] {
	fn as_view(&self) -> Cow<'_, [T]> { Cow::Borrowed(self) }
}

impl<T: Element> AsView<T> for Vec<T> {
	fn as_view(&self) -> Cow<'_, [T]> { Cow::Borrowed(self) }
}

impl<T: Element> AsView<T> for Box<[T]> {
	fn as_view(&self) -> Cow<'_, [T]> { Cow::Borrowed(self) }
}

impl<T: Element> AsView<T> for VecDeque<T> {
	fn as_view(&self) -> Cow<'_, [T]> {
		match self.as_slices() {
			(front, []) => Cow::Borrowed(front),
			_ => Cow::Owned(copy_view(self.iter().copied()).into_vec())
		}
	}

	fn is_contiguous(&self) -> bool {
		self.as_slices().1.is_empty()
	}
}

impl<T: Element> AsView<T> for LinkedList<T> {
	fn as_view(&self) -> Cow<'_, [T]> {
		Cow::Owned(copy_view(self.iter().copied()).into_vec())
	}

	fn is_contiguous(&self) -> bool { false }
}

/// Borrows the valid elements of `arr` without copying.
#[inline]
pub fn view<T: Element>(arr: &Arr<T>) -> &[T] { arr.as_slice() }

/// Mutably borrows the valid elements of `arr` without copying, or returns `None`
/// if the array is read-only.
#[inline]
pub fn view_mut<T: Element>(arr: &mut Arr<T>) -> Option<&mut [T]> { arr.as_mut_slice() }

/// Borrows the valid elements of an optional array, failing with
/// [`InvalidArgument`] if it's absent.
///
/// [`InvalidArgument`]: crate::ErrorKind::InvalidArgument
pub fn try_view<T: Element>(arr: Option<&Arr<T>>) -> Result<&[T]> {
	arr.map(Arr::as_slice).ok_or(Error::invalid_argument(View, "array is absent"))
}

/// Copies all elements of a sequence with known length into a freshly allocated
/// block. Empty sequences allocate nothing.
pub fn copy_view<T, I>(source: I) -> Box<[T]>
where
	T: Element,
	I: IntoIterator<Item = T>,
	I::IntoIter: ExactSizeIterator
{
	let source = source.into_iter();
	let len = source.len();
	if len == 0 {
		return Box::default()
	}

	let mut block: Box<[T]> = zeroed_slice_box(len);
	let count = copy_into(source, &mut block);
	if count < len {
		// The iterator reported more elements than it yielded.
		block[..count].into()
	} else {
		block
	}
}

/// Copies all elements of a sequence with known length into `target`, avoiding
/// the allocation of [`copy_view`]. Fails with [`SizeMismatch`] without writing
/// anything if the lengths differ.
///
/// [`SizeMismatch`]: crate::ErrorKind::SizeMismatch
pub fn copy_view_into<T, I>(source: I, target: &mut [T]) -> Result
where
	T: Element,
	I: IntoIterator<Item = T>,
	I::IntoIter: ExactSizeIterator
{
	let source = source.into_iter();
	let len = source.len();
	if len != target.len() {
		return Err(Error::size_mismatch(CopyView, len, target.len()))
	}

	copy_into(source, target);
	Ok(())
}

fn copy_into<T: Element>(source: impl Iterator<Item = T>, target: &mut [T]) -> usize {
	let mut count = 0;
	for (slot, value) in target.iter_mut().zip(source) {
		*slot = value;
		count += 1;
	}
	count
}

/// Returns the address of the element at `index` in the storage of `arr`.
///
/// No bounds check is done: computing the address is always safe, but
/// dereferencing it is undefined behavior unless `index` is less than the array
/// capacity. Slots at or past the length hold zeroed elements. The address is
/// invalidated when the array is reallocated or dropped.
#[inline]
pub fn address_of<T: Element>(arr: &Arr<T>, index: usize) -> *const T {
	arr.as_ptr().wrapping_add(index)
}

/// Returns the mutable address of the element at `index` in the storage of `arr`,
/// or `None` if the array is read-only. See [`address_of`] for the safety contract.
#[inline]
pub fn address_of_mut<T: Element>(arr: &mut Arr<T>, index: usize) -> Option<*mut T> {
	arr.as_mut_ptr().map(|ptr| ptr.wrapping_add(index))
}

/// Returns the address of the element at `index` in `slice`, without a bounds
/// check. Dereferencing it is undefined behavior unless `index` is in bounds.
#[inline]
pub fn address_of_slice<T: Element>(slice: &[T], index: usize) -> *const T {
	slice.as_ptr().wrapping_add(index)
}

/// Returns the mutable address of the element at `index` in `slice`, without a
/// bounds check.
#[inline]
pub fn address_of_slice_mut<T: Element>(slice: &mut [T], index: usize) -> *mut T {
	slice.as_mut_ptr().wrapping_add(index)
}

#[cfg(test)]
mod tests {
	use std::borrow::Cow;
	use std::collections::{LinkedList, VecDeque};
	use pretty_assertions::assert_eq;
	use crate::{Arr, ErrorKind};
	use super::*;

	#[test]
	fn view_tracks_in_place_writes() {
		let mut arr = Arr::from_slice(&[1u32, 2, 3]);
		arr.set(1, 5).unwrap();
		let view = view(&arr);
		assert_eq!(view, [1, 5, 3]);
		assert_eq!(view.as_ptr(), arr.as_ptr());
	}

	#[test]
	fn view_mut_writes_through() {
		let mut arr = Arr::<u8>::with_capacity(4);
		arr.extend_from_slice(&[1, 2]).unwrap();
		view_mut(&mut arr).unwrap()[0] = 9;
		assert_eq!(arr.as_slice(), [9, 2]);
	}

	#[test]
	fn absent_array() {
		let error = try_view::<u8>(None).unwrap_err();
		assert!(error.is_invalid_argument());
		assert_eq!(error.operation(), View);
	}

	#[test]
	fn borrowed_sources() {
		let arr = Arr::from([1u16, 2]);
		assert!(matches!(arr.as_view(), Cow::Borrowed([1, 2])));
		assert!(matches!(vec![3u16].as_view(), Cow::Borrowed([3])));
	}

	#[test]
	fn wrapped_deque_is_copied() {
		let mut deque = VecDeque::with_capacity(4);
		deque.extend([1u8, 2, 3, 4]);
		deque.pop_front();
		deque.push_back(5);
		let view = deque.as_view();
		assert_eq!(&*view, [2, 3, 4, 5]);
		assert_eq!(matches!(view, Cow::Owned(_)), !deque.is_contiguous());
	}

	#[test]
	fn linked_list_is_copied() {
		let list: LinkedList<i64> = [4, 5, 6].into_iter().collect();
		let view = list.as_view();
		assert!(matches!(view, Cow::Owned(_)));
		assert_eq!(&*view, [4, 5, 6]);
	}

	#[test]
	fn copy_into_target() {
		let list: LinkedList<u32> = [1, 2, 3].into_iter().collect();
		let mut target = [0; 3];
		copy_view_into(list.iter().copied(), &mut target).unwrap();
		assert_eq!(target, [1, 2, 3]);

		let mut target = [0; 2];
		let error = copy_view_into(list.iter().copied(), &mut target).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::SizeMismatch { expected: 3, actual: 2 });
		assert_eq!(target, [0, 0]);
	}

	#[test]
	fn copy_empty() {
		assert!(copy_view(Vec::<u8>::new()).is_empty());
	}

	#[test]
	fn addresses() {
		let mut arr = Arr::from([1u64, 2, 3]);
		assert_eq!(unsafe { *address_of(&arr, 2) }, 3);
		unsafe { *address_of_mut(&mut arr, 0).unwrap() = 7 }
		assert_eq!(arr.get(0), Ok(7));

		arr.set_read_only(true);
		assert!(address_of_mut(&mut arr, 0).is_none());

		let values = [10u8, 20];
		assert_eq!(address_of_slice(&values, 1), &values[1] as *const u8);
		// Out-of-bounds addresses can be computed, just not dereferenced.
		let _ = address_of_slice(&values, 100);
	}
}
