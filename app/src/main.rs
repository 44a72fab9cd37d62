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
use image::RgbImage;
use log::info;
use rand::Rng;
use std::time::Instant;
use yuv_display::{
    convert_display_rows, ConversionStatus, DisplayFrameMut, DisplayOptions, OverlayLayout,
    RowWindow, YuvBiPlanarImage, YuvDisplayFormat, YuvNVOrder,
};

const MARKER_SIZE: usize = 24;

fn synthetic_nv12(width: u32, height: u32) -> (Vec<u8>, Vec<u8>) {
    let mut rng = rand::rng();
    let mut y_plane = vec![0u8; width as usize * height as usize];
    for (y, row) in y_plane.chunks_exact_mut(width as usize).enumerate() {
        for (x, dst) in row.iter_mut().enumerate() {
            let ramp = (x * 220 / width as usize + y * 35 / height as usize) as u8;
            *dst = ramp.saturating_add(rng.random_range(0..4));
        }
    }
    let chroma_width = width.div_ceil(2) as usize;
    let chroma_height = height.div_ceil(2) as usize;
    let mut uv_plane = vec![0u8; chroma_width * 2 * chroma_height];
    for (y, row) in uv_plane.chunks_exact_mut(chroma_width * 2).enumerate() {
        for (x, dst) in row.chunks_exact_mut(2).enumerate() {
            dst[0] = (x * 255 / chroma_width) as u8;
            dst[1] = (y * 255 / chroma_height) as u8;
        }
    }
    (y_plane, uv_plane)
}

fn draw_marker(frame: &mut DisplayFrameMut<'_>, layout: &OverlayLayout) {
    let right = layout.display_width.min(layout.frame_width) as usize;
    let bottom = layout.display_height.min(layout.frame_height) as usize;
    let stride = layout.stride as usize;
    let rows = bottom.saturating_sub(MARKER_SIZE)..bottom;
    let columns = right.saturating_sub(MARKER_SIZE)..right;
    match frame {
        DisplayFrameMut::Rgb565(image) => {
            let plane = image.plane.borrow_mut();
            for y in rows {
                plane[y * stride + columns.start..y * stride + columns.end].fill(0xFFFF);
            }
        }
        DisplayFrameMut::Rgb8888(image) => {
            let plane = image.plane.borrow_mut();
            for y in rows {
                plane[y * stride + columns.start..y * stride + columns.end].fill(0x00FF_FFFF);
            }
        }
        _ => {}
    }
}

fn to_rgb_image(frame: &DisplayFrameMut<'_>) -> Option<RgbImage> {
    let width = frame.width();
    let height = frame.height();
    let stride = frame.stride() as usize;
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    match frame {
        DisplayFrameMut::Rgb565(image) => {
            for row in image.plane.borrow().chunks(stride) {
                for &px in row.iter().take(width as usize) {
                    let r = ((px >> 11) & 0x1F) as u8;
                    let g = ((px >> 5) & 0x3F) as u8;
                    let b = (px & 0x1F) as u8;
                    rgb.extend_from_slice(&[r << 3 | r >> 2, g << 2 | g >> 4, b << 3 | b >> 2]);
                }
            }
        }
        DisplayFrameMut::Rgb8888(image) => {
            for row in image.plane.borrow().chunks(stride) {
                for &px in row.iter().take(width as usize) {
                    rgb.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8]);
                }
            }
        }
        _ => return None,
    }
    RgbImage::from_raw(width, height, rgb)
}

fn main() {
    env_logger::init();

    let width = 1280u32;
    let height = 720u32;
    let band_height = 16u32;
    let (y_plane, uv_plane) = synthetic_nv12(width, height);
    let source = YuvBiPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        uv_plane: &uv_plane,
        uv_stride: width.div_ceil(2) * 2,
        width,
        height,
    };
    let options = DisplayOptions {
        display_width: width,
        display_height: height,
        ..Default::default()
    };

    for format in [
        YuvDisplayFormat::Planar420,
        YuvDisplayFormat::SemiPlanarVU,
        YuvDisplayFormat::Rgb565,
        YuvDisplayFormat::Rgb8888,
    ] {
        let mut frame = DisplayFrameMut::alloc(format, width, height);
        let mut overlay = draw_marker;
        let start_time = Instant::now();
        for start_row in (0..height).step_by(band_height as usize) {
            let status = convert_display_rows(
                &source,
                YuvNVOrder::UV,
                &mut frame,
                &options,
                RowWindow::new(start_row, band_height),
                &mut overlay,
            )
            .unwrap();
            if let ConversionStatus::Skipped(reason) = status {
                info!("Band at {} skipped: {:?}", start_row, reason);
            }
        }
        println!("{:?} time: {:?}", format, start_time.elapsed());

        if let Some(rgb_image) = to_rgb_image(&frame) {
            let file_name = format!("display_{:?}.png", format).to_lowercase();
            rgb_image.save(&file_name).unwrap();
            println!("Saved {}", file_name);
        }
    }
}
