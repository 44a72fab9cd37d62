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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv_display::{
    convert_display_frame, convert_display_rows, yuv_nv_to_rgb565, yuv_nv_to_rgb8888,
    DisplayFrameMut, DisplayOptions, NoOverlay, PackedImageMut, RowWindow, YuvBiPlanarImage,
    YuvDisplayFormat, YuvNVOrder,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let mut rng = rand::rng();
    let y_plane: Vec<u8> = (0..width as usize * height as usize)
        .map(|_| rng.random::<u8>())
        .collect();
    let uv_plane: Vec<u8> = (0..width as usize * height as usize / 2)
        .map(|_| rng.random::<u8>())
        .collect();
    let source = YuvBiPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        uv_plane: &uv_plane,
        uv_stride: width,
        width,
        height,
    };
    let options = DisplayOptions::default();

    let mut rgb565 = PackedImageMut::<u16>::alloc(width, height);
    let mut rgb8888 = PackedImageMut::<u32>::alloc(width, height);

    c.bench_function("yuv_nv12_to_rgb565", |b| {
        b.iter(|| {
            yuv_nv_to_rgb565(&source, YuvNVOrder::UV, &mut rgb565).unwrap();
        })
    });

    c.bench_function("yuv_nv21_to_rgb8888", |b| {
        b.iter(|| {
            yuv_nv_to_rgb8888(&source, YuvNVOrder::VU, &mut rgb8888).unwrap();
        })
    });

    for format in [
        YuvDisplayFormat::Planar420,
        YuvDisplayFormat::SemiPlanarUV,
        YuvDisplayFormat::SemiPlanarVU,
        YuvDisplayFormat::Rgb565,
        YuvDisplayFormat::Rgb8888,
    ] {
        let mut frame = DisplayFrameMut::alloc(format, width, height);
        c.bench_function(&format!("display_frame {:?}", format), |b| {
            b.iter(|| {
                convert_display_frame(
                    &source,
                    YuvNVOrder::UV,
                    &mut frame,
                    &options,
                    &mut NoOverlay,
                )
                .unwrap();
            })
        });
    }

    let mut frame = DisplayFrameMut::alloc(YuvDisplayFormat::Rgb565, width, height);
    c.bench_function("display_rows Rgb565 16 row bands", |b| {
        b.iter(|| {
            for start_row in (0..height).step_by(16) {
                convert_display_rows(
                    &source,
                    YuvNVOrder::UV,
                    &mut frame,
                    &options,
                    RowWindow::new(start_row, 16),
                    &mut NoOverlay,
                )
                .unwrap();
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
