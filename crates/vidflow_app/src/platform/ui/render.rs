use egui::{Align2, Stroke, TextureHandle, Vec2};
use vidflow_core::{AppViewModel, Dialog, Msg, OutputFormat, Theme, UrlValidity};

use super::super::particles::ParticleField;
use super::constants::*;

/// Renders the whole page from the view model and returns the messages the
/// user's interactions produced this frame.
pub(crate) fn render(
    ctx: &egui::Context,
    view: &AppViewModel,
    url_buffer: &mut String,
    thumbnail: Option<&TextureHandle>,
    particles: &ParticleField,
) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("VidFlow");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = match view.theme {
                    Theme::Dark => "☀ Light",
                    Theme::Light => "🌙 Dark",
                };
                if ui.button(icon).clicked() {
                    msgs.push(Msg::ThemeToggled);
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        // Decoration first so every widget draws over it.
        particles.paint(ui.painter(), egui::Pos2::ZERO);

        egui::ScrollArea::vertical().show(ui, |ui| {
            converter_section(ui, view, url_buffer, thumbnail, &mut msgs);
            ui.add_space(24.0);
            ui.separator();
            faq_section(ui, view, &mut msgs);
        });
    });

    dialogs(ctx, view, &mut msgs);

    msgs
}

fn converter_section(
    ui: &mut egui::Ui,
    view: &AppViewModel,
    url_buffer: &mut String,
    thumbnail: Option<&TextureHandle>,
    msgs: &mut Vec<Msg>,
) {
    ui.heading("Convert a video");
    ui.add_space(8.0);

    let response = ui.add(
        egui::TextEdit::singleline(url_buffer)
            .hint_text("Paste a YouTube URL")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(Msg::InputChanged(url_buffer.clone()));
    }
    // Live validity feedback: a colored underline, neutral while empty.
    let tint = match view.url_validity {
        UrlValidity::Valid => Some(VALID_URL_TINT),
        UrlValidity::Invalid => Some(INVALID_URL_TINT),
        UrlValidity::Neutral => None,
    };
    if let Some(tint) = tint {
        let rect = response.rect;
        ui.painter().line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            Stroke::new(2.0, tint),
        );
    }
    let submit_via_enter =
        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .radio(view.format == OutputFormat::Mp4, "MP4 video")
            .clicked()
        {
            msgs.push(Msg::FormatPicked(OutputFormat::Mp4));
        }
        if ui
            .radio(view.format == OutputFormat::Mp3, "MP3 audio")
            .clicked()
        {
            msgs.push(Msg::FormatPicked(OutputFormat::Mp3));
        }
    });

    if view.quality_selector_visible {
        let selected_label = QUALITY_CHOICES
            .iter()
            .find(|(value, _)| *value == view.quality)
            .map(|(_, label)| *label)
            .unwrap_or(view.quality.as_str());
        egui::ComboBox::from_label("Quality")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for (value, label) in QUALITY_CHOICES {
                    if ui.selectable_label(view.quality == value, label).clicked() {
                        msgs.push(Msg::QualityPicked(value.to_string()));
                    }
                }
            });
    }

    ui.add_space(8.0);
    let convert_clicked = ui
        .add_enabled(view.submit_enabled, egui::Button::new("Convert"))
        .clicked();
    if convert_clicked || (submit_via_enter && view.submit_enabled) {
        msgs.push(Msg::ConvertClicked);
    }

    if let Some(info) = &view.video_info {
        ui.add_space(12.0);
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if let Some(texture) = thumbnail {
                    ui.add(egui::Image::new(texture).max_width(THUMBNAIL_MAX_WIDTH));
                }
                ui.vertical(|ui| {
                    ui.strong(&info.title);
                    ui.label(format!(
                        "Uploader: {} | Duration: {} | Views: {}",
                        info.uploader,
                        info.duration.as_deref().unwrap_or("unknown"),
                        format_with_commas(info.view_count)
                    ));
                });
            });
        });
    }

    if let Some(progress) = &view.progress {
        ui.add_space(12.0);
        ui.add(egui::ProgressBar::new((progress.percent / 100.0) as f32).show_percentage());
        ui.label(&progress.message);
    }
}

fn faq_section(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.heading("FAQ");
    ui.add_space(8.0);
    for (index, (question, answer)) in FAQ_ITEMS.iter().enumerate() {
        let open = view.faq_open == Some(index);
        let marker = if open { "▼" } else { "▶" };
        if ui.button(format!("{marker} {question}")).clicked() {
            msgs.push(Msg::FaqToggled(index));
        }
        if open {
            ui.label(*answer);
        }
        ui.add_space(4.0);
    }
}

fn dialogs(ctx: &egui::Context, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    match &view.dialog {
        Some(Dialog::Error { title, message }) => {
            egui::Window::new(title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        msgs.push(Msg::DialogDismissed);
                    }
                });
        }
        Some(Dialog::Success { .. }) => {
            egui::Window::new("Conversion Complete!")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label("Your video is ready for download");
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Download").clicked() {
                            msgs.push(Msg::DownloadClicked);
                        }
                        if ui.button("Close").clicked() {
                            msgs.push(Msg::DialogDismissed);
                        }
                    });
                });
        }
        None => {}
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
