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
use crate::images::{DisplayFrameMut, YuvBiPlanarImage};
use crate::overlay::{FrameOverlay, OverlayLayout};
use crate::yuv_error::{check_same_dimensions, to_destination_error};
use crate::yuv_nv_swap::yuv_nv_reorder;
use crate::yuv_nv_to_packed_rgb::{yuv_nv_to_rgb565, yuv_nv_to_rgb8888};
use crate::yuv_nv_to_yuv::yuv_nv_to_planar;
use crate::yuv_support::{YuvDisplayFormat, YuvNVOrder};
use crate::YuvError;
use log::{debug, trace};

/// Horizontal band of luma rows, `start_row` must be even
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct RowWindow {
    pub start_row: u32,
    pub row_count: u32,
}

impl RowWindow {
    pub const fn new(start_row: u32, row_count: u32) -> RowWindow {
        RowWindow {
            start_row,
            row_count,
        }
    }

    /// Whole frame of `height` rows
    pub const fn full(height: u32) -> RowWindow {
        RowWindow {
            start_row: 0,
            row_count: height,
        }
    }

    /// First row past the window
    #[inline]
    pub const fn end_row(&self) -> u32 {
        self.start_row.saturating_add(self.row_count)
    }
}

/// Per call conversion parameters coming from the decoder side
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayOptions {
    /// Decoder reported an error for this picture, nothing is converted
    pub upstream_error: bool,
    /// Destination luma is the same memory as the source luma
    pub shared_luma: bool,
    /// Display size passed through to the overlay stage
    pub display_width: u32,
    pub display_height: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SkipReason {
    UpstreamError,
    /// Row windows must start on an even row, otherwise luma and chroma rows don't line up
    OddStartRow,
    /// Destination shares the source storage and already has the source layout
    SharedNativeLayout,
    /// Window has no rows inside the frame
    EmptyWindow,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConversionStatus {
    Converted { rows: u32, overlay_applied: bool },
    Skipped(SkipReason),
}

impl ConversionStatus {
    #[inline]
    pub const fn is_converted(&self) -> bool {
        matches!(self, ConversionStatus::Converted { .. })
    }
}

/// Converts one band of a decoded Bi-Planar 4:2:0 frame into the layout of `destination`.
///
/// The decoder may call this for successive bands as soon as they are final, so the display
/// side can start consuming a frame before it is fully decoded. Plane offsets of the band are
/// derived from `window`, chroma rows start at `window.start_row / 2`. A window that runs past
/// the frame bottom is clamped to the frame.
///
/// Nothing is written and `Ok(ConversionStatus::Skipped(..))` is returned when
/// - `options.upstream_error` is set,
/// - `window.start_row` is odd,
/// - `options.shared_luma` is set and `destination` is semi-planar in `source_order`,
/// - the window holds no rows of the frame.
///
/// When `options.shared_luma` is set, YUV destinations get only chroma written and their luma
/// plane is not validated, it may be left empty.
///
/// After converting a band whose end reaches the frame height `overlay` is run once on the
/// whole destination frame.
///
/// # Arguments
///
/// * `source`: Decoded frame
/// * `source_order`: Chroma byte order of the decoded frame
/// * `destination`: Display frame, same size as `source`
/// * `options`: see [DisplayOptions]
/// * `window`: Rows to convert
/// * `overlay`: see [FrameOverlay], [crate::NoOverlay] when not required
///
/// returns: Result<ConversionStatus, YuvError>
///
pub fn convert_display_rows<O: FrameOverlay + ?Sized>(
    source: &YuvBiPlanarImage<u8>,
    source_order: YuvNVOrder,
    destination: &mut DisplayFrameMut<'_>,
    options: &DisplayOptions,
    window: RowWindow,
    overlay: &mut O,
) -> Result<ConversionStatus, YuvError> {
    if options.upstream_error {
        debug!("Upstream decode error, display frame is left untouched");
        return Ok(ConversionStatus::Skipped(SkipReason::UpstreamError));
    }

    if window.start_row & 1 != 0 {
        debug!(
            "Requires even start row for format conversion, got {}",
            window.start_row
        );
        return Ok(ConversionStatus::Skipped(SkipReason::OddStartRow));
    }

    let format = destination.format();
    if options.shared_luma && format == YuvDisplayFormat::semi_planar(source_order) {
        debug!(
            "Display buffer is shared and already {:?}, nothing to convert",
            format
        );
        return Ok(ConversionStatus::Skipped(SkipReason::SharedNativeLayout));
    }

    source.check_constraints()?;
    check_same_dimensions(
        source.width,
        source.height,
        destination.width(),
        destination.height(),
    )?;
    destination
        .check_constraints(options.shared_luma)
        .map_err(to_destination_error)?;

    let start_row = window.start_row;
    let rows = window
        .row_count
        .min(source.height.saturating_sub(start_row));
    if rows == 0 {
        debug!(
            "Row window {}..{} is outside of a frame with {} rows",
            start_row,
            window.end_row(),
            source.height
        );
        return Ok(ConversionStatus::Skipped(SkipReason::EmptyWindow));
    }

    trace!(
        "Converting rows {}..{} of {}x{} into {:?}",
        start_row,
        start_row + rows,
        source.width,
        source.height,
        format
    );

    let band = source.rows(start_row, rows);
    let skip_luma = options.shared_luma;

    match destination {
        DisplayFrameMut::Planar420(planar_image) => {
            let mut target = planar_image.rows_mut(start_row, rows, skip_luma);
            yuv_nv_to_planar(&band, source_order, &mut target, skip_luma)?;
        }
        DisplayFrameMut::SemiPlanar { image, order } => {
            let swap = *order != source_order;
            let mut target = image.rows_mut(start_row, rows, skip_luma);
            yuv_nv_reorder(&band, &mut target, swap, skip_luma)?;
        }
        DisplayFrameMut::Rgb565(rgb_image) => {
            let mut target = rgb_image.rows_mut(start_row, rows);
            yuv_nv_to_rgb565(&band, source_order, &mut target)?;
        }
        DisplayFrameMut::Rgb8888(rgb_image) => {
            let mut target = rgb_image.rows_mut(start_row, rows);
            yuv_nv_to_rgb8888(&band, source_order, &mut target)?;
        }
    }

    let overlay_applied = window.end_row() >= source.height;
    if overlay_applied {
        let layout = OverlayLayout {
            stride: destination.stride(),
            display_width: options.display_width,
            display_height: options.display_height,
            frame_width: source.width,
            frame_height: source.height,
            format,
        };
        trace!("Frame complete, running overlay with {:?}", layout);
        overlay.insert(destination, &layout);
    }

    Ok(ConversionStatus::Converted {
        rows,
        overlay_applied,
    })
}

/// Converts the whole decoded frame at once, see [convert_display_rows]
pub fn convert_display_frame<O: FrameOverlay + ?Sized>(
    source: &YuvBiPlanarImage<u8>,
    source_order: YuvNVOrder,
    destination: &mut DisplayFrameMut<'_>,
    options: &DisplayOptions,
    overlay: &mut O,
) -> Result<ConversionStatus, YuvError> {
    convert_display_rows(
        source,
        source_order,
        destination,
        options,
        RowWindow::full(source.height),
        overlay,
    )
}
