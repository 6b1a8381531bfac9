//! Build script -- generates the application icon and embeds Windows
//! application manifest and icon resource.

fn main() {
    // Generate icon if it does not already exist.
    let icon_path = "assets/icon.ico";
    if !std::path::Path::new(icon_path).exists() {
        std::fs::create_dir_all("assets").ok();
        match generate_ico(&[48, 32, 16]) {
            Ok(data) => {
                if let Err(e) = std::fs::write(icon_path, &data) {
                    eprintln!("cargo:warning=Failed to write icon: {e}");
                }
            }
            Err(e) => eprintln!("cargo:warning=Failed to generate icon: {e}"),
        }
    }

    // Only embed resources on Windows.
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        let mut res = winresource::WindowsResource::new();
        res.set_manifest(
            r#"
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
  <trustInfo xmlns="urn:schemas-microsoft-com:asm.v3">
    <security>
      <requestedPrivileges>
        <requestedExecutionLevel level="asInvoker" uiAccess="false"/>
      </requestedPrivileges>
    </security>
  </trustInfo>
  <compatibility xmlns="urn:schemas-microsoft-com:compatibility.v1">
    <application>
      <supportedOS Id="{8e0f7a12-bfb3-4fe8-b9a5-48fd50a15a9a}"/>
    </application>
  </compatibility>
  <application xmlns="urn:schemas-microsoft-com:asm.v3">
    <windowsSettings>
      <dpiAware xmlns="http://schemas.microsoft.com/SMI/2005/WindowsSettings">true/pm</dpiAware>
      <dpiAwareness xmlns="http://schemas.microsoft.com/SMI/2016/WindowsSettings">PerMonitorV2</dpiAwareness>
    </windowsSettings>
  </application>
</assembly>
"#,
        );

        if std::path::Path::new(icon_path).exists() {
            res.set_icon(icon_path);
        }

        if let Err(e) = res.compile() {
            eprintln!("cargo:warning=Failed to compile Windows resources: {e}");
        }
    }
}

// ════════════════════════════════════════════════════════════════
// Icon rendering (self-contained — no workspace crate deps)
// ════════════════════════════════════════════════════════════════

/// Produce a multi-resolution ICO file as bytes.
fn generate_ico(sizes: &[u32]) -> Result<Vec<u8>, String> {
    let mut ico: Vec<u8> = Vec::new();

    // ICO header.
    ico.extend_from_slice(&0u16.to_le_bytes()); // reserved
    ico.extend_from_slice(&1u16.to_le_bytes()); // type = ICO
    ico.extend_from_slice(&(sizes.len() as u16).to_le_bytes());

    // Pre-render all images.
    let images: Vec<(u32, Vec<u8>)> = sizes
        .iter()
        .map(|&sz| {
            let rgba = render_icon_rgba(sz);
            let bmp = rgba_to_ico_bmp(&rgba, sz);
            (sz, bmp)
        })
        .collect();

    // Directory entries.
    let header_len = 6 + 16 * sizes.len();
    let mut offset = header_len;
    for (sz, bmp) in &images {
        let w = if *sz >= 256 { 0u8 } else { *sz as u8 };
        let h = w;
        ico.push(w);
        ico.push(h);
        ico.push(0); // colour count
        ico.push(0); // reserved
        ico.extend_from_slice(&1u16.to_le_bytes()); // planes
        ico.extend_from_slice(&32u16.to_le_bytes()); // bpp
        ico.extend_from_slice(&(bmp.len() as u32).to_le_bytes());
        ico.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += bmp.len();
    }

    // Image data.
    for (_, bmp) in &images {
        ico.extend_from_slice(bmp);
    }

    Ok(ico)
}

/// Convert top-to-bottom RGBA pixels into a BMP blob for an ICO entry.
fn rgba_to_ico_bmp(rgba: &[u8], size: u32) -> Vec<u8> {
    let mut bmp: Vec<u8> = Vec::new();

    // BITMAPINFOHEADER (40 bytes).
    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&(size as i32).to_le_bytes());
    bmp.extend_from_slice(&((size as i32) * 2).to_le_bytes()); // doubled for ICO
    bmp.extend_from_slice(&1u16.to_le_bytes()); // planes
    bmp.extend_from_slice(&32u16.to_le_bytes()); // bpp
    bmp.extend_from_slice(&0u32.to_le_bytes()); // compression
    bmp.extend_from_slice(&0u32.to_le_bytes()); // image size
    bmp.extend_from_slice(&0i32.to_le_bytes()); // x ppm
    bmp.extend_from_slice(&0i32.to_le_bytes()); // y ppm
    bmp.extend_from_slice(&0u32.to_le_bytes()); // colours used
    bmp.extend_from_slice(&0u32.to_le_bytes()); // important colours

    // Pixel data — bottom-to-top, BGRA.
    for y in (0..size).rev() {
        for x in 0..size {
            let idx = ((y * size + x) * 4) as usize;
            let r = rgba[idx];
            let g = rgba[idx + 1];
            let b = rgba[idx + 2];
            let a = rgba[idx + 3];
            bmp.push(b);
            bmp.push(g);
            bmp.push(r);
            bmp.push(a);
        }
    }

    // AND mask (1 bpp, bottom-to-top, rows padded to 4-byte boundary).
    let row_bytes = size.div_ceil(32) * 4;
    for y in (0..size).rev() {
        let mut row = vec![0u8; row_bytes as usize];
        for x in 0..size {
            let alpha = rgba[((y * size + x) * 4 + 3) as usize];
            if alpha < 128 {
                let byte_idx = (x / 8) as usize;
                let bit_idx = 7 - (x % 8);
                row[byte_idx] |= 1 << bit_idx;
            }
        }
        bmp.extend_from_slice(&row);
    }

    bmp
}

/// Render the SnapSort icon as top-to-bottom RGBA pixels.
///
/// This is a self-contained copy of the algorithm in
/// `crates/snapsort-gui/src/icon.rs` so the build script
/// has no dependency on workspace crates.
fn render_icon_rgba(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // Folder body occupies the lower three quarters; the tab sits on the
    // upper-left shoulder. Corner radius scales with resolution.
    let body_left = s * 0.08;
    let body_right = s * 0.92;
    let body_top = s * 0.30;
    let body_bottom = s * 0.88;
    let tab_right = s * 0.46;
    let tab_top = s * 0.18;
    let radius = (s * 0.05).max(1.0);

    // Three sorting bars inside the folder, longest on top.
    // (y-centre fraction, right-edge fraction, colour)
    let bars: &[(f32, f32, [u8; 3])] = &[
        (0.46, 0.80, [0x1e, 0x1e, 0x2e]),
        (0.60, 0.66, [0x1e, 0x1e, 0x2e]),
        (0.74, 0.52, [0x1e, 0x1e, 0x2e]),
    ];
    let bar_left = s * 0.20;
    let bar_half_height = s * 0.035;

    let folder_col = [0xf9u8, 0xe2, 0xaf];
    let tab_col = [0xe8u8, 0xce, 0x8f];

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Folder tab (drawn first so the body overlaps its base).
            let tab_aa = ico_rounded_rect_alpha(
                px,
                py,
                body_left,
                tab_top,
                tab_right,
                body_top + radius,
                radius,
            );
            if tab_aa > 0.0 {
                cr = tab_col[0];
                cg = tab_col[1];
                cb = tab_col[2];
                ca = tab_aa;
            }

            // 2. Folder body.
            let body_aa = ico_rounded_rect_alpha(
                px,
                py,
                body_left,
                body_top,
                body_right,
                body_bottom,
                radius,
            );
            if body_aa > 0.0 {
                cr = folder_col[0];
                cg = folder_col[1];
                cb = folder_col[2];
                ca = ca.max(body_aa);

                // Subtle vertical shading, darker toward the bottom edge.
                let shade =
                    1.0 - 0.10 * ((py - body_top) / (body_bottom - body_top)).clamp(0.0, 1.0);
                cr = (cr as f32 * shade) as u8;
                cg = (cg as f32 * shade) as u8;
                cb = (cb as f32 * shade) as u8;

                // 3. Sorting bars, only inside the body.
                for &(cy_frac, right_frac, col) in bars {
                    let bar_cy = s * cy_frac;
                    let bar_right = s * right_frac;
                    let bar_aa = ico_rounded_rect_alpha(
                        px,
                        py,
                        bar_left,
                        bar_cy - bar_half_height,
                        bar_right,
                        bar_cy + bar_half_height,
                        bar_half_height,
                    );
                    if bar_aa > 0.0 {
                        cr = ico_lerp(cr, col[0], bar_aa * 0.85);
                        cg = ico_lerp(cg, col[1], bar_aa * 0.85);
                        cb = ico_lerp(cb, col[2], bar_aa * 0.85);
                    }
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

/// Anti-aliased coverage of a rounded rectangle at point (px, py).
fn ico_rounded_rect_alpha(
    px: f32,
    py: f32,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    radius: f32,
) -> f32 {
    let cx = (px.clamp(left + radius, right - radius) - px).abs();
    let cy = (py.clamp(top + radius, bottom - radius) - py).abs();
    let dist = (cx * cx + cy * cy).sqrt() - radius;
    if dist < -0.5 {
        1.0
    } else if dist > 0.5 {
        0.0
    } else {
        0.5 - dist
    }
}

fn ico_lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
