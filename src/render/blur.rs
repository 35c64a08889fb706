use crate::foundation::error::{BoothError, BoothResult};
use crate::render::raster::RasterBuffer;

/// Gaussian-blur a premultiplied buffer in place.
///
/// `sigma <= 0` leaves the buffer untouched. The kernel radius is `ceil(3 * sigma)`, capped at the
/// larger buffer side since taps beyond it only ever sample the transparent outside.
pub(crate) fn gaussian_blur_in_place(buf: &mut RasterBuffer, sigma: f64) -> BoothResult<()> {
    if !sigma.is_finite() {
        return Err(BoothError::validation("blur sigma must be finite"));
    }
    if sigma <= 0.0 || buf.size().is_empty() {
        return Ok(());
    }
    let max_radius = buf.width().max(buf.height());
    let radius = (sigma * 3.0).ceil().min(f64::from(max_radius)) as u32;
    let kernel = gaussian_kernel_q16(radius, sigma as f32)?;
    if kernel.len() == 1 {
        return Ok(());
    }

    let (width, height) = (buf.width(), buf.height());
    let src = buf.data().to_vec();
    let mut tmp = vec![0u8; src.len()];
    horizontal_blur_q16(&src, &mut tmp, width, height, &kernel);
    vertical_blur_q16(&tmp, buf.data_mut(), width, height, &kernel);
    Ok(())
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> BoothResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BoothError::validation("blur sigma must be finite and > 0"));
    }

    let r = i32::try_from(radius)
        .map_err(|_| BoothError::invalid_dimensions("blur radius exceeds i32"))?;
    let mut weights_f = Vec::<f64>::with_capacity(2 * radius as usize + 1);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    // Push the rounding remainder into the center tap so the kernel sums to exactly 1.0.
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn horizontal_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = x + ki as i32 - radius;
                if sx < 0 || sx >= w {
                    continue;
                }
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_blur_q16(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = y + ki as i32 - radius;
                if sy < 0 || sy >= h {
                    continue;
                }
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
