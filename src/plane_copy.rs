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
use crate::yuv_error::{check_base_size, plane_extent, MismatchedSize};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use std::fmt::Debug;

#[inline]
fn check_copy_plane<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
    to_error: fn(MismatchedSize) -> YuvError,
) -> Result<(), YuvError> {
    if stride < width {
        return Err(YuvError::StrideTooSmall(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    (stride as usize)
        .checked_mul(height as usize)
        .ok_or(YuvError::PointerOverflow)?;
    let expected = plane_extent(stride as usize, width as usize, height as usize);
    if data.len() < expected {
        return Err(to_error(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Copies `height` rows of `width` elements between two strided planes.
///
/// Each plane keeps its own stride, so this also serves for copying a sub-rectangle
/// when both slices are taken at the rectangle origin.
///
/// # Arguments
///
/// * `src`: Source plane
/// * `src_stride`: Source stride, elements per row
/// * `dst`: Destination plane
/// * `dst_stride`: Destination stride, elements per row
/// * `width`: Row length in elements
/// * `height`: Rows count
///
/// returns: Result<(), YuvError>
///
pub fn copy_plane<V: Copy + Debug + Send + Sync>(
    src: &[V],
    src_stride: u32,
    dst: &mut [V],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_base_size(width, height)?;
    check_copy_plane(src, src_stride, width, height, YuvError::LumaPlaneSizeMismatch)?;
    check_copy_plane(dst, dst_stride, width, height, YuvError::DestinationSizeMismatch)?;

    let width = width as usize;
    let src = &src[..plane_extent(src_stride as usize, width, height as usize)];
    let dst = &mut dst[..plane_extent(dst_stride as usize, width, height as usize)];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_mut(dst_stride as usize)
            .zip(src.par_chunks(src_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_mut(dst_stride as usize)
            .zip(src.chunks(src_stride as usize));
    }
    iter.for_each(|(dst, src)| {
        dst[..width].copy_from_slice(&src[..width]);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_copy_plane_identity_with_distinct_strides() {
        let width = 37u32;
        let height = 19u32;
        let src_stride = 41u32;
        let dst_stride = 64u32;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..src_stride * height).map(|_| rng.random()).collect();
        let mut dst = vec![0u8; (dst_stride * height) as usize];

        copy_plane(&src, src_stride, &mut dst, dst_stride, width, height).unwrap();

        let mut back = vec![0u8; (src_stride * height) as usize];
        copy_plane(&dst, dst_stride, &mut back, src_stride, width, height).unwrap();

        for y in 0..height as usize {
            for x in 0..width as usize {
                assert_eq!(dst[y * dst_stride as usize + x], src[y * src_stride as usize + x]);
                assert_eq!(back[y * src_stride as usize + x], src[y * src_stride as usize + x]);
            }
            for x in width as usize..dst_stride as usize {
                assert_eq!(dst[y * dst_stride as usize + x], 0, "padding must stay untouched");
            }
        }
    }

    #[test]
    fn test_copy_plane_u32_elements() {
        let src: Vec<u32> = (0..12).collect();
        let mut dst = vec![0u32; 8];
        copy_plane(&src, 6, &mut dst, 4, 4, 2).unwrap();
        assert_eq!(dst, vec![0, 1, 2, 3, 6, 7, 8, 9]);
    }

    #[test]
    fn test_copy_plane_undersized_destination() {
        let src = vec![1u8; 16];
        let mut dst = vec![0u8; 15];
        assert_eq!(
            copy_plane(&src, 4, &mut dst, 4, 4, 4),
            Err(YuvError::DestinationSizeMismatch(MismatchedSize {
                expected: 16,
                received: 15
            }))
        );
        assert!(dst.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_copy_plane_unpadded_last_row() {
        let src = vec![7u8; 10 * 2 + 6];
        let mut dst = vec![0u8; 6 * 3];
        copy_plane(&src, 10, &mut dst, 6, 6, 3).unwrap();
        assert!(dst.iter().all(|&x| x == 7));
    }
}
