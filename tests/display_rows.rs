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
use rand::Rng;
use yuv_display::{
    convert_display_frame, convert_display_rows, deinterleave_uv, BufferStoreMut,
    ConversionStatus, DisplayFrameMut, DisplayOptions, FrameOverlay, NoOverlay, OverlayLayout,
    PackedImageMut, RowWindow, SkipReason, YuvBiPlanarImage, YuvBiPlanarImageMut,
    YuvDisplayFormat, YuvError, YuvNVOrder, YuvPlanarImageMut,
};

struct SourceFrame {
    y_plane: Vec<u8>,
    uv_plane: Vec<u8>,
    width: u32,
    height: u32,
}

impl SourceFrame {
    fn random(width: u32, height: u32) -> SourceFrame {
        let mut rng = rand::rng();
        let chroma_len = width.div_ceil(2) as usize * 2 * height.div_ceil(2) as usize;
        SourceFrame {
            y_plane: (0..width as usize * height as usize)
                .map(|_| rng.random::<u8>())
                .collect(),
            uv_plane: (0..chroma_len).map(|_| rng.random::<u8>()).collect(),
            width,
            height,
        }
    }

    fn image(&self) -> YuvBiPlanarImage<'_, u8> {
        YuvBiPlanarImage {
            y_plane: &self.y_plane,
            y_stride: self.width,
            uv_plane: &self.uv_plane,
            uv_stride: self.width.div_ceil(2) * 2,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Default)]
struct RecordingOverlay {
    layouts: Vec<OverlayLayout>,
}

impl FrameOverlay for RecordingOverlay {
    fn insert(&mut self, _: &mut DisplayFrameMut<'_>, layout: &OverlayLayout) {
        self.layouts.push(*layout);
    }
}

fn rgb8888_plane<'a>(frame: &'a DisplayFrameMut<'_>) -> &'a [u32] {
    match frame {
        DisplayFrameMut::Rgb8888(image) => image.plane.borrow(),
        _ => unreachable!(),
    }
}

#[test]
fn shared_native_layout_leaves_destination_untouched() {
    let source = SourceFrame::random(8, 8);
    let mut y_plane = vec![0x11u8; 64];
    let mut uv_plane = vec![0x22u8; 32];
    let mut frame = DisplayFrameMut::SemiPlanar {
        image: YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(&mut y_plane),
            y_stride: 8,
            uv_plane: BufferStoreMut::Borrowed(&mut uv_plane),
            uv_stride: 8,
            width: 8,
            height: 8,
        },
        order: YuvNVOrder::UV,
    };
    let options = DisplayOptions {
        shared_luma: true,
        ..Default::default()
    };
    let mut overlay = RecordingOverlay::default();
    let status = convert_display_frame(
        &source.image(),
        YuvNVOrder::UV,
        &mut frame,
        &options,
        &mut overlay,
    )
    .unwrap();
    drop(frame);

    assert_eq!(
        status,
        ConversionStatus::Skipped(SkipReason::SharedNativeLayout)
    );
    assert!(overlay.layouts.is_empty());
    assert!(y_plane.iter().all(|&x| x == 0x11));
    assert!(uv_plane.iter().all(|&x| x == 0x22));
}

#[test]
fn shared_luma_swaps_chroma_only() {
    let source = SourceFrame::random(6, 4);
    let mut uv_plane = vec![0u8; 12];
    let mut frame = DisplayFrameMut::SemiPlanar {
        image: YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Owned(Vec::new()),
            y_stride: 6,
            uv_plane: BufferStoreMut::Borrowed(&mut uv_plane),
            uv_stride: 6,
            width: 6,
            height: 4,
        },
        order: YuvNVOrder::VU,
    };
    let options = DisplayOptions {
        shared_luma: true,
        ..Default::default()
    };
    let status = convert_display_frame(
        &source.image(),
        YuvNVOrder::UV,
        &mut frame,
        &options,
        &mut NoOverlay,
    )
    .unwrap();
    drop(frame);

    assert!(status.is_converted());
    for (dst, src) in uv_plane.chunks_exact(2).zip(source.uv_plane.chunks_exact(2)) {
        assert_eq!(dst, [src[1], src[0]]);
    }
}

#[test]
fn odd_start_row_produces_no_writes() {
    let source = SourceFrame::random(4, 8);
    let mut plane = vec![0xDEAD_BEEFu32; 32];
    let mut frame = DisplayFrameMut::Rgb8888(PackedImageMut {
        plane: BufferStoreMut::Borrowed(&mut plane),
        stride: 4,
        width: 4,
        height: 8,
    });
    let mut overlay = RecordingOverlay::default();
    let status = convert_display_rows(
        &source.image(),
        YuvNVOrder::UV,
        &mut frame,
        &DisplayOptions::default(),
        RowWindow::new(3, 5),
        &mut overlay,
    )
    .unwrap();
    drop(frame);

    assert_eq!(status, ConversionStatus::Skipped(SkipReason::OddStartRow));
    assert!(overlay.layouts.is_empty());
    assert!(plane.iter().all(|&x| x == 0xDEAD_BEEF));
}

#[test]
fn upstream_error_produces_no_writes() {
    let source = SourceFrame::random(4, 4);
    let mut y_plane = vec![7u8; 16];
    let mut u_plane = vec![8u8; 4];
    let mut v_plane = vec![9u8; 4];
    let mut frame = DisplayFrameMut::Planar420(YuvPlanarImageMut {
        y_plane: BufferStoreMut::Borrowed(&mut y_plane),
        y_stride: 4,
        u_plane: BufferStoreMut::Borrowed(&mut u_plane),
        u_stride: 2,
        v_plane: BufferStoreMut::Borrowed(&mut v_plane),
        v_stride: 2,
        width: 4,
        height: 4,
    });
    let options = DisplayOptions {
        upstream_error: true,
        ..Default::default()
    };
    let mut overlay = RecordingOverlay::default();
    let status = convert_display_frame(
        &source.image(),
        YuvNVOrder::VU,
        &mut frame,
        &options,
        &mut overlay,
    )
    .unwrap();
    drop(frame);

    assert_eq!(status, ConversionStatus::Skipped(SkipReason::UpstreamError));
    assert!(overlay.layouts.is_empty());
    assert!(y_plane.iter().all(|&x| x == 7));
    assert!(u_plane.iter().all(|&x| x == 8));
    assert!(v_plane.iter().all(|&x| x == 9));
}

#[test]
fn banded_conversion_matches_whole_frame() {
    let source = SourceFrame::random(16, 12);
    let options = DisplayOptions::default();
    for format in [
        YuvDisplayFormat::Planar420,
        YuvDisplayFormat::SemiPlanarUV,
        YuvDisplayFormat::SemiPlanarVU,
        YuvDisplayFormat::Rgb565,
        YuvDisplayFormat::Rgb8888,
    ] {
        let mut whole = DisplayFrameMut::alloc(format, 16, 12);
        convert_display_frame(
            &source.image(),
            YuvNVOrder::VU,
            &mut whole,
            &options,
            &mut NoOverlay,
        )
        .unwrap();

        let mut banded = DisplayFrameMut::alloc(format, 16, 12);
        for start_row in (0..12).step_by(4) {
            convert_display_rows(
                &source.image(),
                YuvNVOrder::VU,
                &mut banded,
                &options,
                RowWindow::new(start_row, 4),
                &mut NoOverlay,
            )
            .unwrap();
        }

        assert_eq!(
            format!("{:?}", whole),
            format!("{:?}", banded),
            "Bands differ from whole frame for {:?}",
            format
        );
    }
}

#[test]
fn overlay_runs_once_after_final_band() {
    let source = SourceFrame::random(10, 8);
    let mut frame = DisplayFrameMut::alloc(YuvDisplayFormat::Rgb565, 10, 8);
    let options = DisplayOptions {
        display_width: 9,
        display_height: 7,
        ..Default::default()
    };
    let mut overlay = RecordingOverlay::default();
    for start_row in [0, 2, 4, 6] {
        let status = convert_display_rows(
            &source.image(),
            YuvNVOrder::UV,
            &mut frame,
            &options,
            RowWindow::new(start_row, 2),
            &mut overlay,
        )
        .unwrap();
        assert_eq!(
            status,
            ConversionStatus::Converted {
                rows: 2,
                overlay_applied: start_row == 6
            }
        );
        assert_eq!(overlay.layouts.len(), usize::from(start_row == 6));
    }

    assert_eq!(
        overlay.layouts,
        vec![OverlayLayout {
            stride: 10,
            display_width: 9,
            display_height: 7,
            frame_width: 10,
            frame_height: 8,
            format: YuvDisplayFormat::Rgb565,
        }]
    );
}

#[test]
fn overlay_closure_draws_into_frame() {
    let source = SourceFrame::random(4, 4);
    let mut frame = DisplayFrameMut::alloc(YuvDisplayFormat::Rgb8888, 4, 4);
    let mut marker = |frame: &mut DisplayFrameMut<'_>, layout: &OverlayLayout| {
        if let DisplayFrameMut::Rgb8888(image) = frame {
            let last = (layout.frame_height - 1) as usize * layout.stride as usize
                + layout.frame_width as usize
                - 1;
            image.plane.borrow_mut()[last] = 0x00FF_00FF;
        }
    };
    convert_display_frame(
        &source.image(),
        YuvNVOrder::UV,
        &mut frame,
        &DisplayOptions::default(),
        &mut marker,
    )
    .unwrap();

    assert_eq!(rgb8888_plane(&frame)[15], 0x00FF_00FF);
}

#[test]
fn odd_height_final_band_is_converted() {
    let source = SourceFrame::random(6, 5);
    let mut whole = DisplayFrameMut::alloc(YuvDisplayFormat::Rgb8888, 6, 5);
    convert_display_frame(
        &source.image(),
        YuvNVOrder::UV,
        &mut whole,
        &DisplayOptions::default(),
        &mut NoOverlay,
    )
    .unwrap();

    let mut banded = DisplayFrameMut::alloc(YuvDisplayFormat::Rgb8888, 6, 5);
    let mut overlay = RecordingOverlay::default();
    let mut statuses = Vec::new();
    for start_row in [0, 2, 4] {
        statuses.push(
            convert_display_rows(
                &source.image(),
                YuvNVOrder::UV,
                &mut banded,
                &DisplayOptions::default(),
                RowWindow::new(start_row, 2),
                &mut overlay,
            )
            .unwrap(),
        );
    }

    assert_eq!(
        statuses.last(),
        Some(&ConversionStatus::Converted {
            rows: 1,
            overlay_applied: true
        })
    );
    assert_eq!(overlay.layouts.len(), 1);
    assert_eq!(rgb8888_plane(&whole), rgb8888_plane(&banded));
    assert!(rgb8888_plane(&banded).iter().all(|&x| x >> 24 == 0));
}

#[test]
fn shared_luma_planar_writes_chroma_only() {
    let source = SourceFrame::random(8, 6);
    let mut frame = DisplayFrameMut::Planar420(YuvPlanarImageMut {
        y_plane: BufferStoreMut::Owned(Vec::new()),
        y_stride: 8,
        u_plane: BufferStoreMut::Owned(vec![0u8; 12]),
        u_stride: 4,
        v_plane: BufferStoreMut::Owned(vec![0u8; 12]),
        v_stride: 4,
        width: 8,
        height: 6,
    });
    let options = DisplayOptions {
        shared_luma: true,
        ..Default::default()
    };
    convert_display_frame(
        &source.image(),
        YuvNVOrder::UV,
        &mut frame,
        &options,
        &mut NoOverlay,
    )
    .unwrap();

    let mut u_plane = vec![0u8; 12];
    let mut v_plane = vec![0u8; 12];
    deinterleave_uv(
        &source.uv_plane,
        8,
        &mut u_plane,
        4,
        &mut v_plane,
        4,
        8,
        6,
        YuvNVOrder::UV,
    )
    .unwrap();

    match frame {
        DisplayFrameMut::Planar420(image) => {
            assert!(image.y_plane.borrow().is_empty());
            assert_eq!(image.u_plane.borrow(), u_plane.as_slice());
            assert_eq!(image.v_plane.borrow(), v_plane.as_slice());
        }
        _ => unreachable!(),
    }
}

#[test]
fn undersized_destination_is_rejected_before_writing() {
    let source = SourceFrame::random(8, 4);
    let mut plane = vec![0x5555u16; 31];
    let mut frame = DisplayFrameMut::Rgb565(PackedImageMut {
        plane: BufferStoreMut::Borrowed(&mut plane),
        stride: 8,
        width: 8,
        height: 4,
    });
    let result = convert_display_frame(
        &source.image(),
        YuvNVOrder::UV,
        &mut frame,
        &DisplayOptions::default(),
        &mut NoOverlay,
    );
    drop(frame);

    assert!(matches!(result, Err(YuvError::DestinationSizeMismatch(_))));
    assert!(plane.iter().all(|&x| x == 0x5555));
}

#[test]
fn mismatched_frame_size_is_rejected() {
    let source = SourceFrame::random(8, 4);
    let mut frame = DisplayFrameMut::alloc(YuvDisplayFormat::Planar420, 8, 6);
    let result = convert_display_frame(
        &source.image(),
        YuvNVOrder::UV,
        &mut frame,
        &DisplayOptions::default(),
        &mut NoOverlay,
    );
    assert!(matches!(result, Err(YuvError::ImageDimensionsMismatch(_))));
}

#[test]
fn unknown_format_code_is_unsupported() {
    assert_eq!(
        YuvDisplayFormat::try_from(3),
        Ok(YuvDisplayFormat::Rgb565)
    );
    assert_eq!(
        YuvDisplayFormat::try_from(9),
        Err(YuvError::UnsupportedOutputFormat(9))
    );
}
