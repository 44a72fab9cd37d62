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
use crate::yuv_error::{
    check_chroma_channel, check_interleaved_chroma_channel, check_packed_destination,
    check_y8_channel, plane_extent,
};
use crate::yuv_support::{YuvDisplayFormat, YuvNVOrder};
use crate::YuvError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Rows `start..start + rows` of a strided plane, without padding after the last row
#[inline]
pub(crate) fn plane_band<V>(plane: &[V], stride: u32, row_len: usize, start: u32, rows: u32) -> &[V] {
    let from = (start as usize * stride as usize).min(plane.len());
    let to = (from + plane_extent(stride as usize, row_len, rows as usize)).min(plane.len());
    &plane[from..to]
}

#[inline]
pub(crate) fn plane_band_mut<V>(
    plane: &mut [V],
    stride: u32,
    row_len: usize,
    start: u32,
    rows: u32,
) -> &mut [V] {
    let from = (start as usize * stride as usize).min(plane.len());
    let to = (from + plane_extent(stride as usize, row_len, rows as usize)).min(plane.len());
    &mut plane[from..to]
}

#[derive(Debug, Clone)]
/// Non-mutable representation of Bi-Planar 4:2:0 YUV image
pub struct YuvBiPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub uv_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub uv_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a, T> YuvBiPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_interleaved_chroma_channel(self.uv_plane, self.uv_stride, self.width, self.height)?;
        Ok(())
    }

    /// Borrows luma rows `start_row..start_row + rows` together with the chroma rows covering them.
    ///
    /// `start_row` must be even.
    pub(crate) fn rows(&self, start_row: u32, rows: u32) -> YuvBiPlanarImage<'a, T> {
        let chroma_width = self.width.div_ceil(2) as usize * 2;
        YuvBiPlanarImage {
            y_plane: plane_band(
                self.y_plane,
                self.y_stride,
                self.width as usize,
                start_row,
                rows,
            ),
            y_stride: self.y_stride,
            uv_plane: plane_band(
                self.uv_plane,
                self.uv_stride,
                chroma_width,
                start_row / 2,
                rows.div_ceil(2),
            ),
            uv_stride: self.uv_stride,
            width: self.width,
            height: rows,
        }
    }
}

#[derive(Debug)]
/// Mutable representation of Bi-Planar 4:2:0 YUV image
pub struct YuvBiPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub uv_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub uv_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvBiPlanarImageMut<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_y8_channel(
            self.y_plane.borrow(),
            self.y_stride,
            self.width,
            self.height,
        )?;
        self.check_chroma_constraints()
    }

    pub fn check_chroma_constraints(&self) -> Result<(), YuvError> {
        check_interleaved_chroma_channel(
            self.uv_plane.borrow(),
            self.uv_stride,
            self.width,
            self.height,
        )
    }

    /// Band of rows borrowed from this image. An empty luma band is produced when `skip_luma` is set.
    pub(crate) fn rows_mut(
        &mut self,
        start_row: u32,
        rows: u32,
        skip_luma: bool,
    ) -> YuvBiPlanarImageMut<'_, T> {
        let chroma_width = self.width.div_ceil(2) as usize * 2;
        let luma_rows = if skip_luma { 0 } else { rows };
        YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(plane_band_mut(
                self.y_plane.borrow_mut(),
                self.y_stride,
                self.width as usize,
                start_row,
                luma_rows,
            )),
            y_stride: self.y_stride,
            uv_plane: BufferStoreMut::Borrowed(plane_band_mut(
                self.uv_plane.borrow_mut(),
                self.uv_stride,
                chroma_width,
                start_row / 2,
                rows.div_ceil(2),
            )),
            uv_stride: self.uv_stride,
            width: self.width,
            height: rows,
        }
    }
}

impl<'a, T> YuvBiPlanarImageMut<'a, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates mutable target Bi-Planar 4:2:0 image
    pub fn alloc(width: u32, height: u32) -> Self {
        let chroma_width = width.div_ceil(2) as usize * 2;
        let chroma_height = height.div_ceil(2) as usize;
        let y_target = vec![T::default(); width as usize * height as usize];
        let chroma_target = vec![T::default(); chroma_width * chroma_height];
        YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Owned(y_target),
            y_stride: width,
            uv_plane: BufferStoreMut::Owned(chroma_target),
            uv_stride: chroma_width as u32,
            width,
            height,
        }
    }

    pub fn to_fixed(&'a self) -> YuvBiPlanarImage<'a, T> {
        YuvBiPlanarImage {
            y_plane: self.y_plane.borrow(),
            y_stride: self.y_stride,
            uv_plane: self.uv_plane.borrow(),
            uv_stride: self.uv_stride,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone)]
/// Non-mutable representation of Planar 4:2:0 YUV image
pub struct YuvPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma_channel(self.u_plane, self.u_stride, self.width, self.height)?;
        check_chroma_channel(self.v_plane, self.v_stride, self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug)]
/// Mutable representation of Planar 4:2:0 YUV image
pub struct YuvPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPlanarImageMut<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_y8_channel(
            self.y_plane.borrow(),
            self.y_stride,
            self.width,
            self.height,
        )?;
        self.check_chroma_constraints()
    }

    pub fn check_chroma_constraints(&self) -> Result<(), YuvError> {
        check_chroma_channel(self.u_plane.borrow(), self.u_stride, self.width, self.height)?;
        check_chroma_channel(self.v_plane.borrow(), self.v_stride, self.width, self.height)?;
        Ok(())
    }

    pub(crate) fn rows_mut(
        &mut self,
        start_row: u32,
        rows: u32,
        skip_luma: bool,
    ) -> YuvPlanarImageMut<'_, T> {
        let chroma_width = self.width.div_ceil(2) as usize;
        let chroma_start = start_row / 2;
        let chroma_rows = rows.div_ceil(2);
        let luma_rows = if skip_luma { 0 } else { rows };
        YuvPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(plane_band_mut(
                self.y_plane.borrow_mut(),
                self.y_stride,
                self.width as usize,
                start_row,
                luma_rows,
            )),
            y_stride: self.y_stride,
            u_plane: BufferStoreMut::Borrowed(plane_band_mut(
                self.u_plane.borrow_mut(),
                self.u_stride,
                chroma_width,
                chroma_start,
                chroma_rows,
            )),
            u_stride: self.u_stride,
            v_plane: BufferStoreMut::Borrowed(plane_band_mut(
                self.v_plane.borrow_mut(),
                self.v_stride,
                chroma_width,
                chroma_start,
                chroma_rows,
            )),
            v_stride: self.v_stride,
            width: self.width,
            height: rows,
        }
    }
}

impl<'a, T> YuvPlanarImageMut<'a, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates mutable target Planar 4:2:0 image
    pub fn alloc(width: u32, height: u32) -> Self {
        let chroma_width = width.div_ceil(2) as usize;
        let chroma_height = height.div_ceil(2) as usize;
        let y_target = vec![T::default(); width as usize * height as usize];
        let u_target = vec![T::default(); chroma_width * chroma_height];
        let v_target = vec![T::default(); chroma_width * chroma_height];
        Self {
            y_plane: BufferStoreMut::Owned(y_target),
            y_stride: width,
            u_plane: BufferStoreMut::Owned(u_target),
            u_stride: chroma_width as u32,
            v_plane: BufferStoreMut::Owned(v_target),
            v_stride: chroma_width as u32,
            width,
            height,
        }
    }

    pub fn to_fixed(&'a self) -> YuvPlanarImage<'a, T> {
        YuvPlanarImage {
            y_plane: self.y_plane.borrow(),
            y_stride: self.y_stride,
            u_plane: self.u_plane.borrow(),
            u_stride: self.u_stride,
            v_plane: self.v_plane.borrow(),
            v_stride: self.v_stride,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug)]
/// Single plane of packed RGB pixels, one element of `V` per pixel
pub struct PackedImageMut<'a, V>
where
    V: Copy + Debug,
{
    pub plane: BufferStoreMut<'a, V>,
    /// Stride here always means Elements per row.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<V> PackedImageMut<'_, V>
where
    V: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_packed_destination(self.plane.borrow(), self.stride, self.width, self.height)
    }

    pub(crate) fn rows_mut(&mut self, start_row: u32, rows: u32) -> PackedImageMut<'_, V> {
        PackedImageMut {
            plane: BufferStoreMut::Borrowed(plane_band_mut(
                self.plane.borrow_mut(),
                self.stride,
                self.width as usize,
                start_row,
                rows,
            )),
            stride: self.stride,
            width: self.width,
            height: rows,
        }
    }
}

impl<V> PackedImageMut<'_, V>
where
    V: Default + Clone + Copy + Debug,
{
    /// Allocates tightly packed mutable target image
    pub fn alloc(width: u32, height: u32) -> Self {
        Self {
            plane: BufferStoreMut::Owned(vec![V::default(); width as usize * height as usize]),
            stride: width,
            width,
            height,
        }
    }
}

#[derive(Debug)]
/// Destination frame handed over by the display side.
///
/// Each variant carries exactly the planes its pixel layout needs.
pub enum DisplayFrameMut<'a> {
    Planar420(YuvPlanarImageMut<'a, u8>),
    SemiPlanar {
        image: YuvBiPlanarImageMut<'a, u8>,
        order: YuvNVOrder,
    },
    Rgb565(PackedImageMut<'a, u16>),
    Rgb8888(PackedImageMut<'a, u32>),
}

impl DisplayFrameMut<'_> {
    /// Allocates an owned frame laid out as `format`
    pub fn alloc(format: YuvDisplayFormat, width: u32, height: u32) -> Self {
        match format {
            YuvDisplayFormat::Planar420 => {
                DisplayFrameMut::Planar420(YuvPlanarImageMut::alloc(width, height))
            }
            YuvDisplayFormat::SemiPlanarUV => DisplayFrameMut::SemiPlanar {
                image: YuvBiPlanarImageMut::alloc(width, height),
                order: YuvNVOrder::UV,
            },
            YuvDisplayFormat::SemiPlanarVU => DisplayFrameMut::SemiPlanar {
                image: YuvBiPlanarImageMut::alloc(width, height),
                order: YuvNVOrder::VU,
            },
            YuvDisplayFormat::Rgb565 => DisplayFrameMut::Rgb565(PackedImageMut::alloc(width, height)),
            YuvDisplayFormat::Rgb8888 => {
                DisplayFrameMut::Rgb8888(PackedImageMut::alloc(width, height))
            }
        }
    }

    pub fn format(&self) -> YuvDisplayFormat {
        match self {
            DisplayFrameMut::Planar420(_) => YuvDisplayFormat::Planar420,
            DisplayFrameMut::SemiPlanar { order, .. } => YuvDisplayFormat::semi_planar(*order),
            DisplayFrameMut::Rgb565(_) => YuvDisplayFormat::Rgb565,
            DisplayFrameMut::Rgb8888(_) => YuvDisplayFormat::Rgb8888,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            DisplayFrameMut::Planar420(image) => image.width,
            DisplayFrameMut::SemiPlanar { image, .. } => image.width,
            DisplayFrameMut::Rgb565(image) => image.width,
            DisplayFrameMut::Rgb8888(image) => image.width,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            DisplayFrameMut::Planar420(image) => image.height,
            DisplayFrameMut::SemiPlanar { image, .. } => image.height,
            DisplayFrameMut::Rgb565(image) => image.height,
            DisplayFrameMut::Rgb8888(image) => image.height,
        }
    }

    /// Stride of the first plane: luma for YUV layouts, the pixel plane for RGB
    pub fn stride(&self) -> u32 {
        match self {
            DisplayFrameMut::Planar420(image) => image.y_stride,
            DisplayFrameMut::SemiPlanar { image, .. } => image.y_stride,
            DisplayFrameMut::Rgb565(image) => image.stride,
            DisplayFrameMut::Rgb8888(image) => image.stride,
        }
    }

    /// Validates every plane, except luma of YUV layouts when it is shared with the source
    pub fn check_constraints(&self, shared_luma: bool) -> Result<(), YuvError> {
        match self {
            DisplayFrameMut::Planar420(image) => {
                if shared_luma {
                    image.check_chroma_constraints()
                } else {
                    image.check_constraints()
                }
            }
            DisplayFrameMut::SemiPlanar { image, .. } => {
                if shared_luma {
                    image.check_chroma_constraints()
                } else {
                    image.check_constraints()
                }
            }
            DisplayFrameMut::Rgb565(image) => image.check_constraints(),
            DisplayFrameMut::Rgb8888(image) => image.check_constraints(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bi_planar_rows_band() {
        let width = 6u32;
        let height = 8u32;
        let y_stride = 8u32;
        let uv_stride = 10u32;
        let y_plane: Vec<u8> = (0..y_stride * height).map(|x| x as u8).collect();
        let uv_plane: Vec<u8> = (0..uv_stride * height / 2).map(|x| x as u8).collect();
        let image = YuvBiPlanarImage {
            y_plane: &y_plane,
            y_stride,
            uv_plane: &uv_plane,
            uv_stride,
            width,
            height,
        };
        let band = image.rows(2, 4);
        assert_eq!(band.height, 4);
        assert_eq!(band.y_plane[0], 16);
        assert_eq!(band.y_plane.len(), 8 * 3 + 6);
        assert_eq!(band.uv_plane[0], 10);
        assert_eq!(band.uv_plane.len(), 10 + 6);
        assert!(band.check_constraints().is_ok());
    }

    #[test]
    fn test_frame_alloc_matches_format() {
        let formats = [
            YuvDisplayFormat::Planar420,
            YuvDisplayFormat::SemiPlanarUV,
            YuvDisplayFormat::SemiPlanarVU,
            YuvDisplayFormat::Rgb565,
            YuvDisplayFormat::Rgb8888,
        ];
        for format in formats {
            let frame = DisplayFrameMut::alloc(format, 7, 5);
            assert_eq!(frame.format(), format);
            assert_eq!(frame.width(), 7);
            assert_eq!(frame.height(), 5);
            assert!(frame.check_constraints(false).is_ok());
        }
    }

    #[test]
    fn test_shared_luma_skips_luma_validation() {
        let mut u_plane = vec![0u8; 4 * 2];
        let mut v_plane = vec![0u8; 4 * 2];
        let frame = DisplayFrameMut::Planar420(YuvPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(&mut []),
            y_stride: 8,
            u_plane: BufferStoreMut::Borrowed(&mut u_plane),
            u_stride: 4,
            v_plane: BufferStoreMut::Borrowed(&mut v_plane),
            v_stride: 4,
            width: 8,
            height: 4,
        });
        assert!(frame.check_constraints(true).is_ok());
        assert!(frame.check_constraints(false).is_err());
    }
}
