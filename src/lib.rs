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
//! Display side conversion of decoded Bi-Planar 4:2:0 frames.
//!
//! Frames coming out of a decoder as NV12 or NV21 are turned, band by band, into the layout
//! the display asked for: planar 4:2:0, Bi-Planar 4:2:0 in either chroma order,
//! packed RGB565 or packed `0x00RRGGBB`.
//!
//! Entry point is [convert_display_rows], single steps are available as standalone functions.
#![forbid(unsafe_code)]
#![allow(clippy::too_many_arguments)]

mod display_convert;
mod images;
mod numerics;
mod overlay;
mod plane_copy;
mod yuv_error;
mod yuv_nv_swap;
mod yuv_nv_to_packed_rgb;
mod yuv_nv_to_yuv;
mod yuv_support;

pub use display_convert::{
    convert_display_frame, convert_display_rows, ConversionStatus, DisplayOptions, RowWindow,
    SkipReason,
};
pub use images::{
    BufferStoreMut, DisplayFrameMut, PackedImageMut, YuvBiPlanarImage, YuvBiPlanarImageMut,
    YuvPlanarImage, YuvPlanarImageMut,
};
pub use overlay::{FrameOverlay, NoOverlay, OverlayLayout};
pub use plane_copy::copy_plane;
pub use yuv_error::{MismatchedSize, YuvError};
pub use yuv_nv_swap::{swap_uv, yuv_nv_to_nv, yuv_nv_to_nv_swap_uv};
pub use yuv_nv_to_packed_rgb::{
    pack_rgb565, pack_rgb8888, yuv_nv_to_rgb565, yuv_nv_to_rgb8888, ChromaDelta, CB_B_COEFF,
    CB_G_COEFF, COEFF_PRECISION, CR_G_COEFF, CR_R_COEFF,
};
pub use yuv_nv_to_yuv::{deinterleave_uv, interleave_uv, yuv_nv_to_planar, yuv_planar_to_nv};
pub use yuv_support::{YuvDisplayFormat, YuvNVOrder};
