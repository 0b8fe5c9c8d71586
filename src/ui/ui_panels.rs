use eframe::egui::{
    Button, Color32, CornerRadius, Frame, Grid, Key, Margin, RichText, Spinner, Stroke, TextEdit,
    Ui,
};

use crate::app::SessionState;
use crate::ui::chart::PriceChart;
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::view::AnalysisView;

/// What the user did to the search bar this frame. The app shell maps
/// these onto session events; the panel itself never mutates state.
#[derive(Default)]
pub struct SearchOutcome {
    pub edited: Option<String>,
    pub submitted: bool,
    pub picked: Option<String>,
}

pub struct SearchPanel<'a> {
    state: &'a SessionState,
}

impl<'a> SearchPanel<'a> {
    pub fn new(state: &'a SessionState) -> Self {
        Self { state }
    }

    pub fn render(&self, ui: &mut Ui) -> SearchOutcome {
        let mut outcome = SearchOutcome::default();

        UI_CONFIG.search_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut buffer = self.state.ticker.clone();
                let input = ui.add_sized(
                    [ui.available_width() - 120.0, 28.0],
                    TextEdit::singleline(&mut buffer)
                        .hint_text(RichText::new(UI_TEXT.search_hint).color(UI_CONFIG.colors.text_faint))
                        .text_color(UI_CONFIG.colors.text)
                        .frame(false),
                );
                if input.changed() {
                    outcome.edited = Some(buffer);
                }
                // Enter submits even mid-fetch; a newer request just
                // supersedes the old one.
                if input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    outcome.submitted = true;
                }

                if self.state.loading {
                    ui.add(Spinner::new().color(UI_CONFIG.colors.accent));
                    ui.label(
                        RichText::new(UI_TEXT.analyzing_button).color(UI_CONFIG.colors.text_dim),
                    );
                } else {
                    let analyze = Button::new(
                        RichText::new(UI_TEXT.analyze_button)
                            .strong()
                            .color(Color32::BLACK),
                    )
                    .fill(UI_CONFIG.colors.accent)
                    .corner_radius(CornerRadius::same(8));
                    if ui.add(analyze).clicked() {
                        outcome.submitted = true;
                    }
                }
            });
        });

        if !self.state.loading && !self.state.suggestions.is_empty() {
            UI_CONFIG.suggestion_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                for symbol in &self.state.suggestions {
                    let row = Button::new(RichText::new(symbol).color(UI_CONFIG.colors.text))
                        .fill(Color32::TRANSPARENT)
                        .min_size([ui.available_width(), 24.0].into());
                    if ui.add(row).clicked() {
                        outcome.picked = Some(symbol.clone());
                    }
                }
            });
        }

        outcome
    }
}

/// The empty-session hint shown before the first lookup.
pub struct PromptPanel;

impl PromptPanel {
    pub fn render(&self, ui: &mut Ui) {
        ui.add_space(50.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(UI_TEXT.prompt_line).color(UI_CONFIG.colors.text_faint));
        });
    }
}

/// Header, chart, statistics and news for one committed analysis.
pub struct AnalysisPanels<'a> {
    view: &'a AnalysisView,
}

impl<'a> AnalysisPanels<'a> {
    pub fn new(view: &'a AnalysisView) -> Self {
        Self { view }
    }

    pub fn render(&self, ui: &mut Ui) {
        ui.add_space(15.0);
        self.render_header_card(ui);
        ui.add_space(15.0);
        self.render_stats(ui);
        if !self.view.news.is_empty() {
            ui.add_space(15.0);
            self.render_news(ui);
        }
    }

    fn render_header_card(&self, ui: &mut Ui) {
        UI_CONFIG.chart_card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(RichText::new(&self.view.symbol).color(UI_CONFIG.colors.text));
                    ui.label(
                        RichText::new(&self.view.price_label)
                            .size(UI_CONFIG.price_font_size)
                            .strong()
                            .color(UI_CONFIG.colors.text),
                    );
                });
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Min),
                    |ui| {
                        ui.vertical(|ui| {
                            let badge = Frame {
                                fill: self.view.advice_color,
                                corner_radius: CornerRadius::same(8),
                                inner_margin: Margin::symmetric(20, 10),
                                stroke: Stroke::NONE,
                                ..Default::default()
                            };
                            badge.show(ui, |ui| {
                                ui.label(
                                    RichText::new(&self.view.advice)
                                        .strong()
                                        .color(Color32::BLACK),
                                );
                            });
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(UI_TEXT.label_rsi)
                                        .color(UI_CONFIG.colors.text_dim),
                                );
                                ui.label(
                                    RichText::new(&self.view.rsi_value)
                                        .color(UI_CONFIG.colors.text),
                                );
                            });
                        });
                    },
                );
            });
            ui.add_space(20.0);
            PriceChart::new(self.view).render(ui);
        });
    }

    fn render_stats(&self, ui: &mut Ui) {
        ui.label(
            RichText::new(UI_TEXT.stats_heading)
                .strong()
                .color(UI_CONFIG.colors.accent),
        );
        ui.add_space(8.0);
        Grid::new("key_stats")
            .num_columns(self.view.stats.len())
            .spacing([15.0, 0.0])
            .show(ui, |ui| {
                for stat in &self.view.stats {
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.set_min_width(150.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(stat.label)
                                    .size(12.0)
                                    .color(UI_CONFIG.colors.text_dim),
                            );
                            ui.label(
                                RichText::new(&stat.value)
                                    .strong()
                                    .color(UI_CONFIG.colors.text),
                            );
                        });
                    });
                }
                ui.end_row();
            });
    }

    fn render_news(&self, ui: &mut Ui) {
        ui.label(
            RichText::new(UI_TEXT.news_heading)
                .strong()
                .color(UI_CONFIG.colors.accent),
        );
        ui.add_space(8.0);
        for item in &self.view.news {
            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&item.title).color(UI_CONFIG.colors.text));
                ui.label(
                    RichText::new(format!("{}{}", UI_TEXT.news_source_prefix, item.publisher))
                        .size(12.0)
                        .color(UI_CONFIG.colors.text_faint),
                );
            });
            ui.add_space(6.0);
        }
    }
}

/// Dismissible error banner. Returns true when the user closes it.
pub struct NoticeBanner<'a> {
    text: &'a str,
}

impl<'a> NoticeBanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn render(&self, ui: &mut Ui) -> bool {
        let mut dismissed = false;
        UI_CONFIG.banner_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.text).color(UI_CONFIG.colors.text));
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        if ui
                            .add(
                                Button::new(RichText::new("✕").color(UI_CONFIG.colors.text_dim))
                                    .fill(Color32::TRANSPARENT),
                            )
                            .clicked()
                        {
                            dismissed = true;
                        }
                    },
                );
            });
        });
        dismissed
    }
}
