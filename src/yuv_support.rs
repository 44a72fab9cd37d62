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
use crate::YuvError;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Byte order of the two chroma components inside an interleaved chroma row.
///
/// `UV` is NV12 order (Cb first), `VU` is NV21 order (Cr first).
pub enum YuvNVOrder {
    #[default]
    UV = 0,
    VU = 1,
}

impl YuvNVOrder {
    #[inline]
    pub const fn get_u_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 0,
            YuvNVOrder::VU => 1,
        }
    }

    #[inline]
    pub const fn get_v_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 1,
            YuvNVOrder::VU => 0,
        }
    }

    #[inline]
    pub const fn swapped(&self) -> YuvNVOrder {
        match self {
            YuvNVOrder::UV => YuvNVOrder::VU,
            YuvNVOrder::VU => YuvNVOrder::UV,
        }
    }
}

impl From<u8> for YuvNVOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvNVOrder::UV,
            1 => YuvNVOrder::VU,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Pixel layout requested by the display side
pub enum YuvDisplayFormat {
    /// Three planes, chroma subsampled 2:1 in both directions (I420)
    Planar420 = 0,
    /// Luma plane and interleaved Cb/Cr plane (NV12)
    SemiPlanarUV = 1,
    /// Luma plane and interleaved Cr/Cb plane (NV21)
    SemiPlanarVU = 2,
    /// One 16-bit word per pixel, `RRRRRGGG GGGBBBBB`
    Rgb565 = 3,
    /// One 32-bit word per pixel, `00000000 RRRRRRRR GGGGGGGG BBBBBBBB`
    Rgb8888 = 4,
}

impl YuvDisplayFormat {
    /// Chroma byte order for semi-planar formats, `None` for everything else
    #[inline]
    pub const fn nv_order(&self) -> Option<YuvNVOrder> {
        match self {
            YuvDisplayFormat::SemiPlanarUV => Some(YuvNVOrder::UV),
            YuvDisplayFormat::SemiPlanarVU => Some(YuvNVOrder::VU),
            YuvDisplayFormat::Planar420
            | YuvDisplayFormat::Rgb565
            | YuvDisplayFormat::Rgb8888 => None,
        }
    }

    #[inline]
    pub const fn semi_planar(order: YuvNVOrder) -> YuvDisplayFormat {
        match order {
            YuvNVOrder::UV => YuvDisplayFormat::SemiPlanarUV,
            YuvNVOrder::VU => YuvDisplayFormat::SemiPlanarVU,
        }
    }

    #[inline]
    pub const fn planes_count(&self) -> usize {
        match self {
            YuvDisplayFormat::Planar420 => 3,
            YuvDisplayFormat::SemiPlanarUV | YuvDisplayFormat::SemiPlanarVU => 2,
            YuvDisplayFormat::Rgb565 | YuvDisplayFormat::Rgb8888 => 1,
        }
    }
}

impl TryFrom<u32> for YuvDisplayFormat {
    type Error = YuvError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(YuvDisplayFormat::Planar420),
            1 => Ok(YuvDisplayFormat::SemiPlanarUV),
            2 => Ok(YuvDisplayFormat::SemiPlanarVU),
            3 => Ok(YuvDisplayFormat::Rgb565),
            4 => Ok(YuvDisplayFormat::Rgb8888),
            _ => Err(YuvError::UnsupportedOutputFormat(value)),
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum RgbPacking {
    Rgb565 = 0,
    Rgb8888 = 1,
}

impl From<u8> for RgbPacking {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => RgbPacking::Rgb565,
            1 => RgbPacking::Rgb8888,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl RgbPacking {
    #[inline(always)]
    pub(crate) const fn pack(&self, r: u8, g: u8, b: u8) -> u32 {
        match self {
            RgbPacking::Rgb565 => {
                ((r as u32 >> 3) << 11) | ((g as u32 >> 2) << 5) | (b as u32 >> 3)
            }
            RgbPacking::Rgb8888 => ((r as u32) << 16) | ((g as u32) << 8) | b as u32,
        }
    }
}
