// SPDX-License-Identifier: Apache-2.0

/// A fixed-layout array element: plain old data with no padding, no embedded
/// references, and a valid all-zeros bit pattern. Cleared and unused slots hold
/// zeroed elements, and elements are moved around with plain memory copies.
///
/// Implemented for every [`Pod`](bytemuck::Pod) type, including primitive
/// integers, floats, and arrays of them. Custom structs can opt in by deriving
/// `Pod` and `Zeroable` through bytemuck.
pub trait Element: bytemuck::Pod + Unpin { }

impl<T: bytemuck::Pod + Unpin> Element for T { }
