use eframe::egui::{self, Color32, Frame, RichText, ScrollArea, Ui};

use crate::data::model::{Gender, Intensity};
use crate::state::{AppState, Tab};

const TEAM: [(&str, &str); 5] = [
    ("Afonso Gamito", "20240752"),
    ("Gonçalo Pacheco", "20240695"),
    ("Gonçalo Varanda", "20240691"),
    ("Hassan Bhatti", "20241023"),
    ("João Sampaio", "20240748"),
];

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the horizontal tab menu and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for tab in Tab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.label());
        }

        ui.separator();

        match &state.dataset {
            Ok(ds) => {
                ui.label(format!(
                    "{} records, {} activity types",
                    ds.len(),
                    ds.activity_types().len()
                ));
            }
            Err(msg) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

pub fn home_page(ui: &mut Ui) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("Health & Fitness Data Analysis").size(28.0));
            ui.add_space(8.0);

            ui.strong("Project Team");
            Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                ui.vertical_centered(|ui: &mut Ui| {
                    for (name, student_id) in TEAM {
                        ui.label(format!("{name} - Nº {student_id}"));
                    }
                });
            });
            ui.add_space(12.0);

            ui.heading("Health & Fitness Data Visualization");
            ui.label(
                "Welcome to the Health & Fitness Data Explorer! This interactive tool helps \
                 analyze how different exercise intensities impact calorie burn across \
                 various activities.",
            );
            ui.add_space(8.0);

            ui.strong("About the Project");
            ui.label(
                "This project analyzes the relationship between gender, exercise intensity \
                 and calories burned through clear visualizations. Explore key patterns \
                 and trends to inform your own personal goals.",
            );
            ui.add_space(8.0);

            ui.strong("How to Use the Application");
            ui.label("• Filter by Gender: compare activity trends for Male or Female participants.");
            ui.label("• Choose Exercise Intensity: analyze calorie burn for Low, Medium and High intensity workouts.");
            ui.label("• Visualize the Results: interactive charts reveal key patterns in exercise performance.");
        });
}

// ---------------------------------------------------------------------------
// Explore page – selection widgets
// ---------------------------------------------------------------------------

/// Render the gender / intensity radio groups. Calls back into the state
/// only when a selection actually changes.
pub fn selectors(ui: &mut Ui, state: &mut AppState) {
    let mut gender = state.query.gender;
    let mut intensity = state.query.intensity;

    ui.label("Select Gender");
    ui.horizontal(|ui: &mut Ui| {
        for g in Gender::ALL {
            ui.radio_value(&mut gender, g, g.label());
        }
    });

    ui.label("Select Intensity Level");
    ui.horizontal(|ui: &mut Ui| {
        for i in Intensity::ALL {
            ui.radio_value(&mut intensity, i, i.label());
        }
    });

    state.set_gender(gender);
    state.set_intensity(intensity);
}
