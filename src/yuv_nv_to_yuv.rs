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
use crate::images::{YuvBiPlanarImage, YuvBiPlanarImageMut, YuvPlanarImage, YuvPlanarImageMut};
use crate::plane_copy::copy_plane;
use crate::yuv_error::{
    check_chroma_channel, check_interleaved_chroma_channel, check_same_dimensions, plane_extent,
    to_destination_error,
};
use crate::yuv_support::YuvNVOrder;
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Splits interleaved 4:2:0 chroma into two separate chroma planes.
///
/// Output row `i`, column `j` receives the U and V samples found in the pair at
/// interleaved columns `2 * j` and `2 * j + 1` of chroma row `i`, in the position given by `order`.
/// Odd sizes are rounded up, chroma covers `ceil(width / 2)` x `ceil(height / 2)` samples.
///
/// # Arguments
///
/// * `uv_plane`: Interleaved chroma plane
/// * `uv_stride`: Interleaved chroma stride
/// * `u_plane`: Destination U plane
/// * `u_stride`: Destination U stride
/// * `v_plane`: Destination V plane
/// * `v_stride`: Destination V stride
/// * `width`: Luma width of the image
/// * `height`: Luma height of the image
/// * `order`: Byte order of `uv_plane`
///
/// returns: Result<(), YuvError>
///
#[allow(clippy::too_many_arguments)]
pub fn deinterleave_uv(
    uv_plane: &[u8],
    uv_stride: u32,
    u_plane: &mut [u8],
    u_stride: u32,
    v_plane: &mut [u8],
    v_stride: u32,
    width: u32,
    height: u32,
    order: YuvNVOrder,
) -> Result<(), YuvError> {
    check_interleaved_chroma_channel(uv_plane, uv_stride, width, height)?;
    check_chroma_channel(u_plane, u_stride, width, height).map_err(to_destination_error)?;
    check_chroma_channel(v_plane, v_stride, width, height).map_err(to_destination_error)?;

    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;

    let uv_plane = &uv_plane[..plane_extent(uv_stride as usize, chroma_width * 2, chroma_height)];
    let u_plane = &mut u_plane[..plane_extent(u_stride as usize, chroma_width, chroma_height)];
    let v_plane = &mut v_plane[..plane_extent(v_stride as usize, chroma_width, chroma_height)];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = u_plane
            .par_chunks_mut(u_stride as usize)
            .zip(v_plane.par_chunks_mut(v_stride as usize))
            .zip(uv_plane.par_chunks(uv_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = u_plane
            .chunks_mut(u_stride as usize)
            .zip(v_plane.chunks_mut(v_stride as usize))
            .zip(uv_plane.chunks(uv_stride as usize));
    }
    iter.for_each(|((u_dst, v_dst), uv_src)| {
        for ((u_dst, v_dst), uv_src) in u_dst[..chroma_width]
            .iter_mut()
            .zip(v_dst[..chroma_width].iter_mut())
            .zip(uv_src.chunks_exact(2))
        {
            *u_dst = uv_src[order.get_u_position()];
            *v_dst = uv_src[order.get_v_position()];
        }
    });

    Ok(())
}

/// Merges two 4:2:0 chroma planes into one interleaved chroma plane, inverse of [deinterleave_uv].
///
/// # Arguments
///
/// * `u_plane`: U plane
/// * `u_stride`: U stride
/// * `v_plane`: V plane
/// * `v_stride`: V stride
/// * `uv_plane`: Destination interleaved chroma plane
/// * `uv_stride`: Destination interleaved chroma stride
/// * `width`: Luma width of the image
/// * `height`: Luma height of the image
/// * `order`: Byte order to produce in `uv_plane`
///
/// returns: Result<(), YuvError>
///
#[allow(clippy::too_many_arguments)]
pub fn interleave_uv(
    u_plane: &[u8],
    u_stride: u32,
    v_plane: &[u8],
    v_stride: u32,
    uv_plane: &mut [u8],
    uv_stride: u32,
    width: u32,
    height: u32,
    order: YuvNVOrder,
) -> Result<(), YuvError> {
    check_chroma_channel(u_plane, u_stride, width, height)?;
    check_chroma_channel(v_plane, v_stride, width, height)?;
    check_interleaved_chroma_channel(uv_plane, uv_stride, width, height)
        .map_err(to_destination_error)?;

    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;

    let u_plane = &u_plane[..plane_extent(u_stride as usize, chroma_width, chroma_height)];
    let v_plane = &v_plane[..plane_extent(v_stride as usize, chroma_width, chroma_height)];
    let uv_plane =
        &mut uv_plane[..plane_extent(uv_stride as usize, chroma_width * 2, chroma_height)];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = uv_plane
            .par_chunks_mut(uv_stride as usize)
            .zip(u_plane.par_chunks(u_stride as usize))
            .zip(v_plane.par_chunks(v_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = uv_plane
            .chunks_mut(uv_stride as usize)
            .zip(u_plane.chunks(u_stride as usize))
            .zip(v_plane.chunks(v_stride as usize));
    }
    iter.for_each(|((uv_dst, u_src), v_src)| {
        for ((uv_dst, &u_src), &v_src) in uv_dst[..chroma_width * 2]
            .chunks_exact_mut(2)
            .zip(u_src[..chroma_width].iter())
            .zip(v_src[..chroma_width].iter())
        {
            uv_dst[order.get_u_position()] = u_src;
            uv_dst[order.get_v_position()] = v_src;
        }
    });

    Ok(())
}

/// Converts Bi-Planar 4:2:0 (NV12/NV21) into Planar 4:2:0 (I420).
///
/// Luma is copied row by row unless `skip_luma` is set, which is the case when the
/// destination luma plane is the very same memory as the source one. In that case
/// the destination luma plane is neither validated nor touched and may be empty.
///
/// # Arguments
///
/// * `image`: Source Bi-Planar image
/// * `order`: Chroma byte order of the source
/// * `planar_image`: Destination Planar image, must have the same size as the source
/// * `skip_luma`: Do not copy luma
///
/// returns: Result<(), YuvError>
///
pub fn yuv_nv_to_planar(
    image: &YuvBiPlanarImage<u8>,
    order: YuvNVOrder,
    planar_image: &mut YuvPlanarImageMut<u8>,
    skip_luma: bool,
) -> Result<(), YuvError> {
    image.check_constraints()?;
    check_same_dimensions(
        image.width,
        image.height,
        planar_image.width,
        planar_image.height,
    )?;
    let destination_check = if skip_luma {
        planar_image.check_chroma_constraints()
    } else {
        planar_image.check_constraints()
    };
    destination_check.map_err(to_destination_error)?;

    if !skip_luma {
        copy_plane(
            image.y_plane,
            image.y_stride,
            planar_image.y_plane.borrow_mut(),
            planar_image.y_stride,
            image.width,
            image.height,
        )?;
    }

    let u_stride = planar_image.u_stride;
    let v_stride = planar_image.v_stride;
    deinterleave_uv(
        image.uv_plane,
        image.uv_stride,
        planar_image.u_plane.borrow_mut(),
        u_stride,
        planar_image.v_plane.borrow_mut(),
        v_stride,
        image.width,
        image.height,
        order,
    )
}

/// Converts Planar 4:2:0 (I420) into Bi-Planar 4:2:0 with the requested chroma `order`.
///
/// # Arguments
///
/// * `planar_image`: Source Planar image
/// * `bi_planar_image`: Destination Bi-Planar image, must have the same size as the source
/// * `order`: Chroma byte order to produce
///
/// returns: Result<(), YuvError>
///
pub fn yuv_planar_to_nv(
    planar_image: &YuvPlanarImage<u8>,
    bi_planar_image: &mut YuvBiPlanarImageMut<u8>,
    order: YuvNVOrder,
) -> Result<(), YuvError> {
    planar_image.check_constraints()?;
    check_same_dimensions(
        planar_image.width,
        planar_image.height,
        bi_planar_image.width,
        bi_planar_image.height,
    )?;
    bi_planar_image
        .check_constraints()
        .map_err(to_destination_error)?;

    copy_plane(
        planar_image.y_plane,
        planar_image.y_stride,
        bi_planar_image.y_plane.borrow_mut(),
        bi_planar_image.y_stride,
        planar_image.width,
        planar_image.height,
    )?;

    let uv_stride = bi_planar_image.uv_stride;
    interleave_uv(
        planar_image.u_plane,
        planar_image.u_stride,
        planar_image.v_plane,
        planar_image.v_stride,
        bi_planar_image.uv_plane.borrow_mut(),
        uv_stride,
        planar_image.width,
        planar_image.height,
        order,
    )
}
