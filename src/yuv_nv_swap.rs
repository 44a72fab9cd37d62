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
use crate::images::{YuvBiPlanarImage, YuvBiPlanarImageMut};
use crate::plane_copy::copy_plane;
use crate::yuv_error::{
    check_interleaved_chroma_channel, check_same_dimensions, plane_extent, to_destination_error,
};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Swaps chroma byte order of an interleaved 4:2:0 chroma plane, NV12 <-> NV21.
///
/// Every pair `(a, b)` of each chroma row becomes `(b, a)`, nothing else is changed.
///
/// # Arguments
///
/// * `src`: Source interleaved chroma plane
/// * `src_stride`: Source stride
/// * `dst`: Destination interleaved chroma plane
/// * `dst_stride`: Destination stride
/// * `width`: Luma width of the image
/// * `height`: Luma height of the image
///
/// returns: Result<(), YuvError>
///
pub fn swap_uv(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_interleaved_chroma_channel(src, src_stride, width, height)?;
    check_interleaved_chroma_channel(dst, dst_stride, width, height)
        .map_err(to_destination_error)?;

    let row_len = width.div_ceil(2) as usize * 2;
    let chroma_height = height.div_ceil(2) as usize;

    let src = &src[..plane_extent(src_stride as usize, row_len, chroma_height)];
    let dst = &mut dst[..plane_extent(dst_stride as usize, row_len, chroma_height)];

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
        for (dst, src) in dst[..row_len]
            .chunks_exact_mut(2)
            .zip(src[..row_len].chunks_exact(2))
        {
            dst[0] = src[1];
            dst[1] = src[0];
        }
    });

    Ok(())
}

fn yuv_nv_to_nv_impl<const SWAP_UV: bool>(
    image: &YuvBiPlanarImage<u8>,
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    skip_luma: bool,
) -> Result<(), YuvError> {
    image.check_constraints()?;
    check_same_dimensions(
        image.width,
        image.height,
        bi_planar_image.width,
        bi_planar_image.height,
    )?;
    let destination_check = if skip_luma {
        bi_planar_image.check_chroma_constraints()
    } else {
        bi_planar_image.check_constraints()
    };
    destination_check.map_err(to_destination_error)?;

    if !skip_luma {
        copy_plane(
            image.y_plane,
            image.y_stride,
            bi_planar_image.y_plane.borrow_mut(),
            bi_planar_image.y_stride,
            image.width,
            image.height,
        )?;
    }

    let uv_stride = bi_planar_image.uv_stride;
    if SWAP_UV {
        swap_uv(
            image.uv_plane,
            image.uv_stride,
            bi_planar_image.uv_plane.borrow_mut(),
            uv_stride,
            image.width,
            image.height,
        )
    } else {
        copy_plane(
            image.uv_plane,
            image.uv_stride,
            bi_planar_image.uv_plane.borrow_mut(),
            uv_stride,
            image.width.div_ceil(2) * 2,
            image.height.div_ceil(2),
        )
    }
}

/// Copies Bi-Planar 4:2:0 image keeping chroma byte order.
///
/// Partial frames are copied by passing images that describe only the required rows.
///
/// # Arguments
///
/// * `image`: Source Bi-Planar image
/// * `bi_planar_image`: Destination Bi-Planar image, must have the same size as the source
///
/// returns: Result<(), YuvError>
///
pub fn yuv_nv_to_nv(
    image: &YuvBiPlanarImage<u8>,
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
) -> Result<(), YuvError> {
    yuv_nv_to_nv_impl::<false>(image, bi_planar_image, false)
}

/// Copies Bi-Planar 4:2:0 image swapping chroma byte order, NV12 -> NV21 or NV21 -> NV12.
///
/// # Arguments
///
/// * `image`: Source Bi-Planar image
/// * `bi_planar_image`: Destination Bi-Planar image, must have the same size as the source
///
/// returns: Result<(), YuvError>
///
pub fn yuv_nv_to_nv_swap_uv(
    image: &YuvBiPlanarImage<u8>,
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
) -> Result<(), YuvError> {
    yuv_nv_to_nv_impl::<true>(image, bi_planar_image, false)
}

/// Copies chroma, reordering it when `swap` is set, and luma unless `skip_luma` is set
pub(crate) fn yuv_nv_reorder(
    image: &YuvBiPlanarImage<u8>,
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    swap: bool,
    skip_luma: bool,
) -> Result<(), YuvError> {
    if swap {
        yuv_nv_to_nv_impl::<true>(image, bi_planar_image, skip_luma)
    } else {
        yuv_nv_to_nv_impl::<false>(image, bi_planar_image, skip_luma)
    }
}
