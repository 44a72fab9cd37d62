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

use libfuzzer_sys::fuzz_target;
use yuv_display::{
    pack_rgb565, yuv_nv_to_rgb565, yuv_nv_to_rgb8888, PackedImageMut, YuvBiPlanarImage,
    YuvNVOrder,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    fuzz_nv_to_rgb(data.0, data.1, data.2, data.3, data.4, data.5 & 15);
});

fn fuzz_nv_to_rgb(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8, padding: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let y_stride = width + padding as u32;
    let uv_stride = width.div_ceil(2) * 2 + padding as u32;

    let y_plane = vec![y_value; y_stride as usize * height as usize];
    let mut uv_plane = vec![0u8; uv_stride as usize * height.div_ceil(2) as usize];
    for row in uv_plane.chunks_exact_mut(uv_stride as usize) {
        for pair in row.chunks_exact_mut(2) {
            pair[0] = u_value;
            pair[1] = v_value;
        }
    }

    let bi_planar_image = YuvBiPlanarImage {
        y_plane: &y_plane,
        y_stride,
        uv_plane: &uv_plane,
        uv_stride,
        width,
        height,
    };

    let mut rgb565 = PackedImageMut::<u16>::alloc(width, height);
    let mut rgb8888 = PackedImageMut::<u32>::alloc(width, height);

    for order in [YuvNVOrder::UV, YuvNVOrder::VU] {
        yuv_nv_to_rgb565(&bi_planar_image, order, &mut rgb565).unwrap();
        yuv_nv_to_rgb8888(&bi_planar_image, order, &mut rgb8888).unwrap();

        for (&px565, &px8888) in rgb565.plane.borrow().iter().zip(rgb8888.plane.borrow()) {
            assert_eq!(px8888 >> 24, 0);
            let expected = pack_rgb565((px8888 >> 16) as u8, (px8888 >> 8) as u8, px8888 as u8);
            assert_eq!(px565, expected);
        }
    }
}
