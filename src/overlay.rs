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
use crate::images::DisplayFrameMut;
use crate::yuv_support::YuvDisplayFormat;

/// Geometry handed to the overlay stage once the last band of a frame is converted
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OverlayLayout {
    /// Stride of the first destination plane, elements per row
    pub stride: u32,
    pub display_width: u32,
    pub display_height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub format: YuvDisplayFormat,
}

/// Post-conversion stage that draws into a fully assembled display frame,
/// e.g. a watermark in a corner.
///
/// It runs exactly once per frame, after the band that reaches the frame bottom.
pub trait FrameOverlay {
    fn insert(&mut self, frame: &mut DisplayFrameMut<'_>, layout: &OverlayLayout);
}

/// Leaves the frame untouched
#[derive(Debug, Copy, Clone, Default)]
pub struct NoOverlay;

impl FrameOverlay for NoOverlay {
    #[inline]
    fn insert(&mut self, _: &mut DisplayFrameMut<'_>, _: &OverlayLayout) {}
}

impl<F> FrameOverlay for F
where
    F: FnMut(&mut DisplayFrameMut<'_>, &OverlayLayout),
{
    #[inline]
    fn insert(&mut self, frame: &mut DisplayFrameMut<'_>, layout: &OverlayLayout) {
        (*self)(frame, layout)
    }
}
