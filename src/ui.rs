use crate::form::{CoordinateField, InputError, TriangleForm, COORD_MAX, COORD_MIN};
use crate::geometry::{Point, Triangle};
use eframe::egui;
use egui::{Color32, Pos2, Stroke, Vec2};

pub struct TriangleApp {
    form: TriangleForm,
    // Momentaufnahme der Punkte zum Zeitpunkt der letzten Berechnung
    triangle: Option<Triangle>,
    error: Option<InputError>,
    show_help: bool,
}

impl Default for TriangleApp {
    fn default() -> Self {
        Self {
            form: TriangleForm::default(),
            triangle: None,
            error: None,
            show_help: false,
        }
    }
}

// ========== HILFSFUNKTIONEN: FORMULARZEILEN ==========

/// Eine Koordinatenzeile: Beschriftung, Textfeld und Slider
/// Slider-Änderungen schreiben das Echo in den Text, Text-Änderungen
/// werden nachgeparst; es gibt keine gegenseitigen Beobachter
fn coordinate_row(ui: &mut egui::Ui, field: &mut CoordinateField) {
    ui.horizontal(|ui| {
        ui.label(format!("{}:", field.label));
        let response = ui.add(egui::TextEdit::singleline(&mut field.text).desired_width(120.0));
        if response.changed() {
            field.text_edited();
        }
    });
    let mut value = field.value();
    let slider = egui::Slider::new(&mut value, COORD_MIN..=COORD_MAX).show_value(false);
    if ui.add(slider).changed() {
        field.set_from_slider(value);
    }
}

/// Eine Punkt-Sektion mit den beiden Koordinatenzeilen X und Y
fn point_section(ui: &mut egui::Ui, title: &str, fields: &mut [CoordinateField]) {
    egui::CollapsingHeader::new(title)
        .default_open(true)
        .show(ui, |ui| {
            ui.add_space(3.0);
            for field in fields {
                coordinate_row(ui, field);
            }
        });
}

impl eframe::App for TriangleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Linkes Panel für Eingaben mit Scrollbar
        egui::SidePanel::left("input_panel")
            .min_width(380.0)
            .max_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.heading("📐 Dreieck aus Koordinaten");
                        ui.separator();

                        // === EINGABE SECTION ===
                        ui.add_space(5.0);
                        point_section(ui, "📍 Punkt A", &mut self.form.fields[0..2]);
                        ui.add_space(10.0);
                        point_section(ui, "📍 Punkt B", &mut self.form.fields[2..4]);
                        ui.add_space(10.0);
                        point_section(ui, "📍 Punkt C", &mut self.form.fields[4..6]);

                        ui.add_space(15.0);

                        // Berechnen-Button
                        let calc_button = egui::Button::new(
                            egui::RichText::new("🔢 Berechnen").size(24.0),
                        )
                        .min_size(egui::vec2(250.0, 45.0))
                        .fill(Color32::from_rgb(50, 120, 200));

                        if ui.add(calc_button).clicked() {
                            self.calculate();
                        }

                        // === ERGEBNIS SECTION ===
                        if let Some(result) = self.form.result {
                            ui.add_space(20.0);
                            ui.separator();

                            egui::CollapsingHeader::new("📊 Berechnete Werte")
                                .default_open(true)
                                .show(ui, |ui| {
                                    ui.group(|ui| {
                                        ui.label(egui::RichText::new("Umfang:").strong());
                                        ui.label(format!("  {}", result.perimeter_text()));
                                        ui.add_space(4.0);
                                        ui.label(egui::RichText::new("Fläche:").strong());
                                        ui.label(format!("  {}", result.area_text()));
                                    });
                                });
                        }

                        // === AKTIONEN ===
                        ui.add_space(20.0);
                        ui.separator();

                        if ui.button("🔄 Zurücksetzen").clicked() {
                            self.reset();
                        }

                        ui.add_space(10.0);
                        if ui.button("❓ Hilfe").clicked() {
                            self.show_help = !self.show_help;
                        }

                        ui.add_space(20.0);
                        ui.separator();

                        ui.add_space(10.0);
                        let close_button = egui::Button::new(
                            egui::RichText::new("❌ App schließen")
                                .size(24.0)
                                .color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(180, 40, 40))
                        .min_size(egui::vec2(200.0, 50.0));

                        if ui.add(close_button).clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(triangle) = self.triangle {
                draw_triangle(ui, &triangle);
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(250.0);
                    ui.heading("👈 Bitte Koordinaten eingeben und 'Berechnen' klicken");
                });
            }
        });

        // Fehler-Dialog
        if let Some(error) = self.error.clone() {
            egui::Window::new(format!("⚠️ {}", error.title()))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.set_min_width(400.0);
                    ui.colored_label(Color32::from_rgb(200, 50, 50), error.to_string());

                    ui.add_space(15.0);
                    ui.separator();
                    ui.add_space(10.0);

                    if ui.button("OK - Eingaben überprüfen").clicked() {
                        self.error = None;
                    }
                });
        }

        // Hilfe-Dialog
        if self.show_help {
            egui::Window::new("❓ Hilfe")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label("🔢 Eingabe:");
                    ui.label("  Sechs Koordinaten für die Punkte A, B und C");
                    ui.label("  Dezimalpunkt oder Komma, Slider von -100 bis 100");
                    ui.add_space(5.0);

                    ui.label("📐 Berechnung:");
                    ui.label("  'Berechnen' prüft alle Felder und zeigt");
                    ui.label("  Umfang und Fläche mit 4 Nachkommastellen");
                    ui.add_space(5.0);

                    ui.label("⚠️ Hinweis:");
                    ui.label("  Punkte auf einer Geraden bilden kein Dreieck");

                    ui.add_space(10.0);
                    if ui.button("Schließen").clicked() {
                        self.show_help = false;
                    }
                });
        }
    }
}

impl TriangleApp {
    fn calculate(&mut self) {
        match self.form.calculate() {
            Ok(_) => {
                self.error = None;
                self.triangle = self.form.triangle();
            }
            Err(e) => {
                self.error = Some(e);
                self.triangle = None;
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.triangle = None;
        self.error = None;
    }
}

// ========== ZEICHNEN DES DREIECKS ==========

fn draw_triangle(ui: &mut egui::Ui, triangle: &Triangle) {
    let available_size = ui.available_size();
    let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());

    let vertices = [triangle.a, triangle.b, triangle.c];

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for v in &vertices {
        min_x = min_x.min(v.x);
        max_x = max_x.max(v.x);
        min_y = min_y.min(v.y);
        max_y = max_y.max(v.y);
    }

    // Ein gültiges Dreieck hat in beiden Achsen eine echte Ausdehnung
    let width = max_x - min_x;
    let height = max_y - min_y;

    let padding = 120.0;
    let scale_x = (available_size.x - 2.0 * padding) / width as f32;
    let scale_y = (available_size.y - 2.0 * padding) / height as f32;
    let scale = scale_x.min(scale_y);

    let offset_x = (available_size.x - width as f32 * scale) / 2.0;
    let offset_y = (available_size.y - height as f32 * scale) / 2.0;

    let to_screen = |p: &Point| -> Pos2 {
        Pos2::new(
            response.rect.min.x + offset_x + (p.x - min_x) as f32 * scale,
            // y-Achse zeigt auf dem Bildschirm nach unten
            response.rect.min.y + offset_y + (max_y - p.y) as f32 * scale,
        )
    };

    let screen_vertices: Vec<Pos2> = vertices.iter().map(to_screen).collect();

    for i in 0..3 {
        let next = (i + 1) % 3;
        painter.line_segment(
            [screen_vertices[i], screen_vertices[next]],
            Stroke::new(4.0, Color32::from_rgb(50, 50, 200)),
        );
    }

    let labels = ["A", "B", "C"];
    for i in 0..3 {
        painter.circle_filled(screen_vertices[i], 8.0, Color32::from_rgb(200, 50, 50));

        let offset = Vec2::new(-25.0, -25.0);
        painter.text(
            screen_vertices[i] + offset,
            egui::Align2::CENTER_CENTER,
            labels[i],
            egui::FontId::proportional(28.0),
            Color32::BLACK,
        );

        let coord_offset = Vec2::new(30.0, 30.0);
        painter.text(
            screen_vertices[i] + coord_offset,
            egui::Align2::LEFT_TOP,
            format!("({:.2}, {:.2})", vertices[i].x, vertices[i].y),
            egui::FontId::proportional(18.0),
            Color32::from_rgb(100, 100, 100),
        );
    }

    let side_names = ["AB", "BC", "CA"];
    let side_lengths = triangle.side_lengths();

    for i in 0..3 {
        let next = (i + 1) % 3;
        let mid = Pos2::new(
            (screen_vertices[i].x + screen_vertices[next].x) / 2.0,
            (screen_vertices[i].y + screen_vertices[next].y) / 2.0,
        );

        painter.text(
            mid,
            egui::Align2::CENTER_CENTER,
            format!("{}: {:.4}", side_names[i], side_lengths[i]),
            egui::FontId::proportional(22.0),
            Color32::from_rgb(0, 120, 0),
        );
    }
}
