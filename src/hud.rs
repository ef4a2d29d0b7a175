use crate::state::{Color, GameState};
use egui_miniquad::EguiMq;
use miniquad::RenderingBackend;

/// Text overlay drawn with egui on top of the playfield.
pub struct Hud {
    egui_mq: EguiMq,
    pub show_report: bool,
}

impl Hud {
    pub fn new(ctx: &mut dyn RenderingBackend) -> Hud {
        Hud {
            egui_mq: EguiMq::new(ctx),
            show_report: false,
        }
    }

    pub fn draw(&mut self, ctx: &mut dyn RenderingBackend, state: &GameState) {
        let show_report = self.show_report;
        self.egui_mq.run(ctx, |_mq_ctx, egui_ctx| {
            egui::Area::new(egui::Id::new("hud"))
                .fixed_pos(egui::pos2(10.0, 4.0))
                .show(egui_ctx, |ui| {
                    for line in state.hud_lines() {
                        ui.label(
                            egui::RichText::new(line)
                                .color(text_color(Color::TEXT))
                                .monospace(),
                        );
                    }
                    if show_report {
                        ui.label(
                            egui::RichText::new(state.player.describe())
                                .color(text_color(Color::TEXT))
                                .monospace(),
                        );
                    }
                });
        });
        self.egui_mq.draw(ctx);
    }
}

fn text_color(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
