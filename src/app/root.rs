use std::sync::mpsc::{self, Receiver, Sender};

use eframe::Frame;
use eframe::egui::{CentralPanel, Context, RichText, ScrollArea, Visuals};

use crate::app::session::{Effect, SessionEvent, SessionState};
use crate::data::{FetchCompletion, spawn_fetch};
use crate::ui::{
    AnalysisPanels, NoticeBanner, PromptPanel, SearchOutcome, SearchPanel, SessionView, UI_CONFIG,
    UI_TEXT,
};

pub struct App {
    session: SessionState,
    /// Current banner text, if a fetch failure is on display.
    notice: Option<String>,
    completion_tx: Sender<FetchCompletion>,
    completion_rx: Receiver<FetchCompletion>,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel();
        Self {
            session: SessionState::default(),
            notice: None,
            completion_tx,
            completion_rx,
        }
    }

    /// Route one event through the session machine and run whatever
    /// effect falls out. The sole mutation path for session state.
    fn dispatch(&mut self, event: SessionEvent) {
        match self.session.apply(event) {
            Some(Effect::StartFetch { symbol, generation }) => {
                // A fresh attempt retires the previous failure banner.
                self.notice = None;
                spawn_fetch(symbol, generation, self.completion_tx.clone());
            }
            Some(Effect::Notify(text)) => {
                self.notice = Some(text);
            }
            None => {}
        }
    }

    fn drain_completions(&mut self) {
        let completions: Vec<FetchCompletion> = self.completion_rx.try_iter().collect();
        for completion in completions {
            let event = match completion.outcome {
                Ok(result) => SessionEvent::FetchSucceeded {
                    generation: completion.generation,
                    result,
                },
                Err(error) => SessionEvent::FetchFailed {
                    generation: completion.generation,
                    error,
                },
            };
            self.dispatch(event);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.drain_completions();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(UI_CONFIG.content_max_width);

                            ui.heading(
                                RichText::new(UI_TEXT.app_title)
                                    .size(24.0)
                                    .color(UI_CONFIG.colors.accent),
                            );
                            ui.add_space(20.0);

                            if let Some(text) = self.notice.clone() {
                                if NoticeBanner::new(&text).render(ui) {
                                    self.notice = None;
                                }
                                ui.add_space(10.0);
                            }

                            let outcome: SearchOutcome =
                                SearchPanel::new(&self.session).render(ui);
                            if let Some(text) = outcome.edited {
                                self.dispatch(SessionEvent::TickerChanged(text));
                            }
                            if let Some(symbol) = outcome.picked {
                                self.dispatch(SessionEvent::SuggestionPicked(symbol));
                            } else if outcome.submitted {
                                self.dispatch(SessionEvent::SubmitRequested);
                            }

                            match SessionView::derive(&self.session) {
                                SessionView::Prompt => PromptPanel.render(ui),
                                SessionView::Loading => {
                                    // The search bar already shows the spinner.
                                }
                                SessionView::Analysis(view) => {
                                    AnalysisPanels::new(&view).render(ui);
                                }
                            }
                        });
                    });
            });

        // Completions arrive on a channel, not as egui events; keep
        // painting while one is pending so it is picked up promptly.
        if self.session.loading {
            ctx.request_repaint();
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.extreme_bg_color = UI_CONFIG.colors.card;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.text_dim;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.text;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
