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
use crate::images::{PackedImageMut, YuvBiPlanarImage};
use crate::numerics::clip_u8;
use crate::yuv_error::{check_same_dimensions, plane_extent, to_destination_error};
use crate::yuv_support::{RgbPacking, YuvNVOrder};
use crate::YuvError;
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use std::fmt::Debug;

/// Fractional bits of the chroma coefficients, deltas are taken `>> COEFF_PRECISION`
pub const COEFF_PRECISION: i32 = 13;
/// Cr contribution to R, 1.596 in Q13
pub const CR_R_COEFF: i32 = 13073;
/// Cb contribution to G, -0.391 in Q13
pub const CB_G_COEFF: i32 = -3207;
/// Cr contribution to G, -0.813 in Q13
pub const CR_G_COEFF: i32 = -6664;
/// Cb contribution to B, 2.018 in Q13
pub const CB_B_COEFF: i32 = 16530;

/// Per channel offsets produced by one Cb/Cr pair, added to every luma sample of its 2x2 block.
///
/// Luma is taken as is, without range expansion, and the shifts are arithmetic,
/// so negative deltas round towards negative infinity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChromaDelta {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl ChromaDelta {
    #[inline(always)]
    pub const fn new(cb: u8, cr: u8) -> ChromaDelta {
        let cb = cb as i32 - 128;
        let cr = cr as i32 - 128;
        ChromaDelta {
            r: (cr * CR_R_COEFF) >> COEFF_PRECISION,
            g: (cb * CB_G_COEFF + cr * CR_G_COEFF) >> COEFF_PRECISION,
            b: (cb * CB_B_COEFF) >> COEFF_PRECISION,
        }
    }

    /// Returns clipped `[r, g, b]` for a luma sample
    #[inline(always)]
    pub fn apply(&self, y: u8) -> [u8; 3] {
        let y = y as i32;
        [clip_u8(y + self.r), clip_u8(y + self.g), clip_u8(y + self.b)]
    }
}

/// Packs into RGB565, low bits of every channel are truncated
#[inline]
pub const fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    RgbPacking::Rgb565.pack(r, g, b) as u16
}

/// Packs into `0x00RRGGBB`, the top byte is always zero
#[inline]
pub const fn pack_rgb8888(r: u8, g: u8, b: u8) -> u32 {
    RgbPacking::Rgb8888.pack(r, g, b)
}

fn yuv_nv_to_packed_rgb_impl<V, const PACKING: u8>(
    image: &YuvBiPlanarImage<u8>,
    order: YuvNVOrder,
    rgb_image: &mut PackedImageMut<V>,
) -> Result<(), YuvError>
where
    V: Copy + Debug + Send + Sync + 'static,
    u32: AsPrimitive<V>,
{
    let packing: RgbPacking = PACKING.into();

    image.check_constraints()?;
    check_same_dimensions(image.width, image.height, rgb_image.width, rgb_image.height)?;
    rgb_image.check_constraints().map_err(to_destination_error)?;

    let width = image.width as usize;
    let height = image.height as usize;
    let chroma_row_len = image.width.div_ceil(2) as usize * 2;
    let y_stride = image.y_stride as usize;
    let uv_stride = image.uv_stride as usize;
    let dst_stride = rgb_image.stride as usize;

    let y_plane = &image.y_plane[..plane_extent(y_stride, width, height)];
    let uv_plane =
        &image.uv_plane[..plane_extent(uv_stride, chroma_row_len, height.div_ceil(2))];
    let rgb = &mut rgb_image.plane.borrow_mut()[..plane_extent(dst_stride, width, height)];

    let process_double_row =
        |y_src0: &[u8], y_src1: &[u8], uv_src: &[u8], rgb0: &mut [V], rgb1: &mut [V]| {
            for ((((rgb0, rgb1), y_src0), y_src1), uv_src) in rgb0
                .chunks_mut(2)
                .zip(rgb1.chunks_mut(2))
                .zip(y_src0.chunks(2))
                .zip(y_src1.chunks(2))
                .zip(uv_src.chunks_exact(2))
            {
                let delta = ChromaDelta::new(
                    uv_src[order.get_u_position()],
                    uv_src[order.get_v_position()],
                );
                for (dst, &y) in rgb0.iter_mut().zip(y_src0.iter()) {
                    let [r, g, b] = delta.apply(y);
                    *dst = packing.pack(r, g, b).as_();
                }
                for (dst, &y) in rgb1.iter_mut().zip(y_src1.iter()) {
                    let [r, g, b] = delta.apply(y);
                    *dst = packing.pack(r, g, b).as_();
                }
            }
        };

    // Trailing row of an image with odd height has no pair below it
    let process_single_row = |y_src: &[u8], uv_src: &[u8], rgb: &mut [V]| {
        for ((rgb, y_src), uv_src) in rgb
            .chunks_mut(2)
            .zip(y_src.chunks(2))
            .zip(uv_src.chunks_exact(2))
        {
            let delta = ChromaDelta::new(
                uv_src[order.get_u_position()],
                uv_src[order.get_v_position()],
            );
            for (dst, &y) in rgb.iter_mut().zip(y_src.iter()) {
                let [r, g, b] = delta.apply(y);
                *dst = packing.pack(r, g, b).as_();
            }
        }
    };

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = y_plane
            .par_chunks(y_stride * 2)
            .zip(uv_plane.par_chunks(uv_stride))
            .zip(rgb.par_chunks_mut(dst_stride * 2));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = y_plane
            .chunks(y_stride * 2)
            .zip(uv_plane.chunks(uv_stride))
            .zip(rgb.chunks_mut(dst_stride * 2));
    }
    iter.for_each(|((y_src, uv_src), rgb)| {
        let uv_src = &uv_src[..chroma_row_len];
        if y_src.len() > y_stride {
            let (y_src0, y_src1) = y_src.split_at(y_stride);
            let (rgb0, rgb1) = rgb.split_at_mut(dst_stride);
            process_double_row(
                &y_src0[..width],
                &y_src1[..width],
                uv_src,
                &mut rgb0[..width],
                &mut rgb1[..width],
            );
        } else {
            process_single_row(&y_src[..width], uv_src, &mut rgb[..width]);
        }
    });

    Ok(())
}

/// Converts Bi-Planar 4:2:0 YUV into packed RGB565.
///
/// Each Cb/Cr pair is turned into per channel deltas with Q13 fixed point BT.601 factors
/// and shared by the 2x2 luma block it covers. Channels are clipped to `[0, 255]` and
/// then truncated to 5/6/5 bits, R in the top bits.
///
/// # Arguments
///
/// * `image`: Source Bi-Planar image
/// * `order`: Chroma byte order of the source
/// * `rgb_image`: Destination image, one `u16` per pixel, same size as the source
///
/// returns: Result<(), YuvError>
///
pub fn yuv_nv_to_rgb565(
    image: &YuvBiPlanarImage<u8>,
    order: YuvNVOrder,
    rgb_image: &mut PackedImageMut<u16>,
) -> Result<(), YuvError> {
    yuv_nv_to_packed_rgb_impl::<u16, { RgbPacking::Rgb565 as u8 }>(image, order, rgb_image)
}

/// Converts Bi-Planar 4:2:0 YUV into packed `0x00RRGGBB` words.
///
/// Same transform as [yuv_nv_to_rgb565], channels are stored with full 8 bit precision
/// and no alpha is written.
///
/// # Arguments
///
/// * `image`: Source Bi-Planar image
/// * `order`: Chroma byte order of the source
/// * `rgb_image`: Destination image, one `u32` per pixel, same size as the source
///
/// returns: Result<(), YuvError>
///
pub fn yuv_nv_to_rgb8888(
    image: &YuvBiPlanarImage<u8>,
    order: YuvNVOrder,
    rgb_image: &mut PackedImageMut<u32>,
) -> Result<(), YuvError> {
    yuv_nv_to_packed_rgb_impl::<u32, { RgbPacking::Rgb8888 as u8 }>(image, order, rgb_image)
}
