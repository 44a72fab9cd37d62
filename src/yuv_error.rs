/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YuvError {
    DestinationSizeMismatch(MismatchedSize),
    LumaPlaneSizeMismatch(MismatchedSize),
    ChromaPlaneSizeMismatch(MismatchedSize),
    /// Stride is shorter than a single row of the plane
    StrideTooSmall(MismatchedSize),
    /// Destination frame and source frame disagree on `width * height`
    ImageDimensionsMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
    UnsupportedOutputFormat(u32),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::LumaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::StrideTooSmall(size) => f.write_fmt(format_args!(
                "Stride must be at least {} elements, but it was {}",
                size.expected, size.received
            )),
            YuvError::ImageDimensionsMismatch(size) => f.write_fmt(format_args!(
                "Image dimensions mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::UnsupportedOutputFormat(code) => f.write_fmt(format_args!(
                "Output format {} is not supported by display conversion",
                code
            )),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_base_size(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

/// Minimum amount of elements that holds `rows` rows of `row_len` elements each.
///
/// The final row is not required to carry stride padding, this is what makes
/// sub-slicing a frame into row bands possible.
#[inline]
pub(crate) fn plane_extent(stride: usize, row_len: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    stride * (rows - 1) + row_len
}

#[inline]
fn check_strided_plane(
    len: usize,
    stride: u32,
    row_len: usize,
    rows: usize,
) -> Result<Option<MismatchedSize>, YuvError> {
    if (stride as usize) < row_len {
        return Err(YuvError::StrideTooSmall(MismatchedSize {
            expected: row_len,
            received: stride as usize,
        }));
    }
    check_overflow_v2(stride as usize, rows)?;
    let expected = plane_extent(stride as usize, row_len, rows);
    if len < expected {
        return Ok(Some(MismatchedSize {
            expected,
            received: len,
        }));
    }
    Ok(None)
}

#[inline]
pub(crate) fn check_y8_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_base_size(width, height)?;
    match check_strided_plane(data.len(), stride, width as usize, height as usize)? {
        Some(size) => Err(YuvError::LumaPlaneSizeMismatch(size)),
        None => Ok(()),
    }
}

/// Checks one plane of planar 4:2:0 chroma for an image of `image_width` x `image_height`
#[inline]
pub(crate) fn check_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), YuvError> {
    check_base_size(image_width, image_height)?;
    let chroma_width = image_width.div_ceil(2) as usize;
    let chroma_height = image_height.div_ceil(2) as usize;
    match check_strided_plane(data.len(), stride, chroma_width, chroma_height)? {
        Some(size) => Err(YuvError::ChromaPlaneSizeMismatch(size)),
        None => Ok(()),
    }
}

/// Checks interleaved 4:2:0 chroma for an image of `image_width` x `image_height`
#[inline]
pub(crate) fn check_interleaved_chroma_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), YuvError> {
    check_base_size(image_width, image_height)?;
    let chroma_width = image_width.div_ceil(2) as usize * 2;
    let chroma_height = image_height.div_ceil(2) as usize;
    match check_strided_plane(data.len(), stride, chroma_width, chroma_height)? {
        Some(size) => Err(YuvError::ChromaPlaneSizeMismatch(size)),
        None => Ok(()),
    }
}

/// Checks a destination plane of packed pixels, one element per pixel
#[inline]
pub(crate) fn check_packed_destination<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_base_size(width, height)?;
    match check_strided_plane(data.len(), stride, width as usize, height as usize)? {
        Some(size) => Err(YuvError::DestinationSizeMismatch(size)),
        None => Ok(()),
    }
}

/// Reports a plane size failure of an output plane as a destination failure
#[inline]
pub(crate) fn to_destination_error(e: YuvError) -> YuvError {
    match e {
        YuvError::LumaPlaneSizeMismatch(size) | YuvError::ChromaPlaneSizeMismatch(size) => {
            YuvError::DestinationSizeMismatch(size)
        }
        e => e,
    }
}

#[inline]
pub(crate) fn check_same_dimensions(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), YuvError> {
    if src_width != dst_width || src_height != dst_height {
        return Err(YuvError::ImageDimensionsMismatch(MismatchedSize {
            expected: src_width as usize * src_height as usize,
            received: dst_width as usize * dst_height as usize,
        }));
    }
    Ok(())
}
