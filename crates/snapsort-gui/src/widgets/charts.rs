/// Painter-drawn bar widgets shared by the analysis tabs.
use egui::{Color32, Rect, Ui, Vec2};
use snapsort_core::analysis::SizeHistogram;
use snapsort_core::model::size::{format_count, format_size};

/// One labelled horizontal bar: label, value text, and a filled track.
///
/// `fraction` is the filled share in `0..=1`, scaled by the caller against
/// the largest value in the series.
pub fn labelled_bar(ui: &mut Ui, label: &str, value_text: &str, fraction: f32, color: Color32) {
    let color_normal = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();
    let bar_track_bg = ui.visuals().extreme_bg_color;

    ui.horizontal(|ui| {
        // Colour dot.
        let (dot_rect, _) = ui.allocate_exact_size(Vec2::new(10.0, 10.0), egui::Sense::hover());
        ui.painter_at(dot_rect)
            .circle_filled(dot_rect.center(), 4.0, color);

        ui.label(egui::RichText::new(label).color(color_normal).size(12.0));
        ui.label(egui::RichText::new(value_text).color(color_muted).size(11.0));
    });

    // Mini bar.
    let bar_width = ui.available_width() - 16.0;
    let bar_height = 4.0;
    let (bar_rect, _) =
        ui.allocate_exact_size(Vec2::new(bar_width, bar_height), egui::Sense::hover());
    let painter = ui.painter_at(bar_rect);
    painter.rect_filled(bar_rect, 2.0, bar_track_bg);

    let fill_w = bar_width * fraction.clamp(0.0, 1.0);
    if fill_w > 0.5 {
        let fill_rect = Rect::from_min_size(bar_rect.min, Vec2::new(fill_w, bar_height));
        painter.rect_filled(fill_rect, 2.0, color);
    }

    ui.add_space(2.0);
}

/// Vertical histogram of the size distribution.
///
/// Buckets are equal-width; hovering a bar shows its byte range and count.
pub fn size_histogram(ui: &mut Ui, hist: &SizeHistogram, color: Color32) {
    if hist.counts.is_empty() {
        ui.label(
            egui::RichText::new("No files to chart.")
                .color(ui.visuals().weak_text_color())
                .size(12.0),
        );
        return;
    }

    let peak = hist.peak().max(1);
    let bar_track_bg = ui.visuals().extreme_bg_color;

    let chart_height = 140.0;
    let gap = 2.0;
    let width = ui.available_width() - 8.0;
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(width, chart_height),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, bar_track_bg);

    let n = hist.counts.len();
    let bar_w = (width - gap * (n as f32 - 1.0)) / n as f32;

    let hover_pos = response.hover_pos();
    let mut hovered: Option<usize> = None;

    for (i, &count) in hist.counts.iter().enumerate() {
        let x = rect.left() + i as f32 * (bar_w + gap);
        let h = (count as f32 / peak as f32) * (chart_height - 4.0);
        let bar_rect = Rect::from_min_max(
            egui::pos2(x, rect.bottom() - h.max(1.0)),
            egui::pos2(x + bar_w, rect.bottom()),
        );

        let is_hovered = hover_pos.is_some_and(|p| p.x >= x && p.x < x + bar_w + gap);
        if is_hovered {
            hovered = Some(i);
        }

        let bar_color = if is_hovered {
            color.gamma_multiply(1.3)
        } else {
            color
        };
        if count > 0 {
            painter.rect_filled(bar_rect, 1.0, bar_color);
        }
    }

    // Range legend under the chart, with the hovered bucket spelled out.
    let color_muted = ui.visuals().weak_text_color();
    match hovered {
        Some(i) => {
            let (lo, hi) = hist.bucket_range(i);
            let count = hist.counts[i];
            ui.label(
                egui::RichText::new(format!(
                    "{} – {}: {} files",
                    format_size(lo),
                    format_size(hi),
                    format_count(count)
                ))
                .size(11.0)
                .color(ui.visuals().text_color()),
            );
        }
        None => {
            ui.label(
                egui::RichText::new(format!(
                    "0 B – {} across {} buckets",
                    format_size(hist.max_size),
                    hist.counts.len()
                ))
                .size(11.0)
                .color(color_muted),
            );
        }
    }
}
