use std::collections::BTreeMap;

use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::{ActivityColors, HISTOGRAM_COLOR};
use crate::data::chart::HistogramBin;
use crate::data::model::{NumericField, Record};
use crate::state::{AppState, ExploreView};
use crate::ui::panels;

const PLOT_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Explore page (central panel)
// ---------------------------------------------------------------------------

/// Render the explore page: selectors, average metric, charts, rows.
pub fn explore_page(ui: &mut Ui, state: &mut AppState) {
    if let Err(msg) = &state.dataset {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(RichText::new(format!("Could not load the dataset\n\n{msg}")).color(Color32::RED));
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("Explore Health & Fitness Data").size(28.0));
            ui.add_space(8.0);

            panels::selectors(ui, state);
            ui.separator();

            let gender = state.query.gender;
            ui.heading(format!("Data Insights for {gender}"));

            match &state.view {
                ExploreView::NoData => {
                    ui.colored_label(
                        Color32::from_rgb(0xE0, 0xA0, 0x00),
                        "No data matches your selection. Try adjusting the filters.",
                    );
                }
                ExploreView::Results {
                    mean_calories,
                    histogram,
                    scatter,
                    rows,
                } => {
                    ui.label("Average Calories Burned");
                    ui.label(RichText::new(format!("{mean_calories:.2} kcal")).size(32.0));
                    ui.add_space(8.0);

                    ui.strong("Calories Burned Distribution by Activity");
                    calories_histogram(ui, histogram);
                    ui.add_space(8.0);

                    ui.strong(format!("Duration vs Calories Burned for {gender}"));
                    duration_scatter(ui, scatter, &state.activity_colors);
                    ui.add_space(8.0);

                    ui.strong(format!("Matching records ({})", rows.len()));
                    rows_table(ui, rows);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn calories_histogram(ui: &mut Ui, bins: &[HistogramBin]) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .name(format!("{:.1} – {:.1}", b.start, b.end))
        })
        .collect();

    Plot::new("calories_histogram")
        .height(PLOT_HEIGHT)
        .x_axis_label(NumericField::CaloriesBurned.label())
        .y_axis_label("count")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(HISTOGRAM_COLOR));
        });
}

fn duration_scatter(ui: &mut Ui, series: &BTreeMap<String, Vec<[f64; 2]>>, colors: &ActivityColors) {
    Plot::new("duration_scatter")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(NumericField::DurationMinutes.label())
        .y_axis_label(NumericField::CaloriesBurned.label())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (activity, points) in series {
                let points = Points::new(PlotPoints::from(points.clone()))
                    .name(activity)
                    .color(colors.color_for(activity))
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Row table
// ---------------------------------------------------------------------------

fn rows_table(ui: &mut Ui, rows: &[Record]) {
    ui.push_id("rows_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(240.0)
            .columns(Column::auto().at_least(80.0), 5)
            .header(20.0, |mut header| {
                for title in ["Gender", "Intensity", "Activity", "Duration (min)", "Calories"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let r = &rows[row.index()];
                    row.col(|ui: &mut Ui| {
                        ui.label(r.gender.label());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(r.intensity.label());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.activity_type);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.0}", r.duration_minutes));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", r.calories_burned));
                    });
                });
            });
    });
}
