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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yuv_display::{
    convert_display_rows, ConversionStatus, DisplayFrameMut, DisplayOptions, NoOverlay,
    RowWindow, YuvBiPlanarImage, YuvDisplayFormat, YuvNVOrder,
};

#[derive(Debug, Arbitrary)]
struct DisplayRowsInput {
    width: u8,
    height: u8,
    format: u8,
    swap_source: bool,
    upstream_error: bool,
    shared_luma: bool,
    start_row: u8,
    row_count: u8,
    y_value: u8,
    u_value: u8,
    v_value: u8,
}

fuzz_target!(|input: DisplayRowsInput| {
    if input.width == 0 || input.height == 0 {
        return;
    }
    let Ok(format) = YuvDisplayFormat::try_from(input.format as u32 % 6) else {
        return;
    };
    let width = input.width as u32;
    let height = input.height as u32;
    let source_order = if input.swap_source {
        YuvNVOrder::VU
    } else {
        YuvNVOrder::UV
    };
    let y_plane = vec![input.y_value; width as usize * height as usize];
    let mut uv_plane = vec![0u8; width.div_ceil(2) as usize * 2 * height.div_ceil(2) as usize];
    for pair in uv_plane.chunks_exact_mut(2) {
        pair[source_order.get_u_position()] = input.u_value;
        pair[source_order.get_v_position()] = input.v_value;
    }
    let source = YuvBiPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        uv_plane: &uv_plane,
        uv_stride: width.div_ceil(2) * 2,
        width,
        height,
    };
    let options = DisplayOptions {
        upstream_error: input.upstream_error,
        shared_luma: input.shared_luma,
        display_width: width,
        display_height: height,
    };
    let mut frame = DisplayFrameMut::alloc(format, width, height);
    let status = convert_display_rows(
        &source,
        source_order,
        &mut frame,
        &options,
        RowWindow::new(input.start_row as u32, input.row_count as u32),
        &mut NoOverlay,
    )
    .unwrap();

    if let ConversionStatus::Converted { rows, .. } = status {
        assert!(rows <= input.row_count as u32);
        assert_eq!(input.start_row % 2, 0);
        assert!(!input.upstream_error);
    }
    if let DisplayFrameMut::Rgb8888(image) = &frame {
        assert!(image.plane.borrow().iter().all(|&x| x >> 24 == 0));
    }
});
