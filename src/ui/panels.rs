use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{MAX_ACCOMMODATES, MAX_BEDS, NEIGHBOURHOODS};
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: brand, external links, match count, status message.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Tokyo Airbnb Optimal Price Explorer");

        ui.separator();

        ui.menu_button("Links", |ui: &mut Ui| {
            ui.hyperlink_to("Inside Airbnb (data source)", "http://insideairbnb.com");
        });

        ui.separator();

        ui.label(format!("{} listings match", state.chart.points.len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – tabs and filter controls
// ---------------------------------------------------------------------------

/// Render the tabbed side panel. The Explore tab carries the six filter
/// controls; any change to one of them triggers exactly one update cycle.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        for (tab, label) in [
            (Tab::About, "About"),
            (Tab::Explore, "Explore"),
            (Tab::Background, "Background"),
        ] {
            if ui
                .selectable_label(state.active_tab == tab, label)
                .clicked()
            {
                state.active_tab = tab;
            }
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.active_tab {
            Tab::About => about_tab(ui),
            Tab::Explore => explore_tab(ui, state),
            Tab::Background => background_tab(ui),
        });
}

fn about_tab(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.strong("For what price should you list your Airbnb to make the highest income each month?");
    ui.add_space(8.0);
    ui.label(
        "Select the features of the Airbnb you rent out on the Explore tab and \
         watch the graph update with your specified features. Zoom in to view \
         similar listings.",
    );
    ui.add_space(8.0);
    ui.label(
        "Hovering over a data point highlights a listing with the same features \
         as yours, including the same neighbourhood. Compare the estimated \
         monthly income (in USD) and the price per night of each listing to \
         form a competitive rate for your own.",
    );
}

fn explore_tab(ui: &mut Ui, state: &mut AppState) {
    let mut changed = false;

    ui.add_space(8.0);
    ui.heading("Graph updates as you select features");
    ui.add_space(8.0);

    ui.strong("Select your Airbnb's neighbourhood:");
    let current_label = NEIGHBOURHOODS
        .iter()
        .find(|(_, value)| *value == state.selector.neighbourhood)
        .map(|(label, _)| *label)
        .unwrap_or("?");
    egui::ComboBox::from_id_salt("neighbourhood")
        .selected_text(current_label)
        .show_ui(ui, |ui: &mut Ui| {
            for (label, value) in NEIGHBOURHOODS {
                if ui
                    .selectable_label(state.selector.neighbourhood == value, label)
                    .clicked()
                {
                    state.selector.neighbourhood = value.to_string();
                    changed = true;
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Choose number of beds");
    changed |= ui
        .add(egui::Slider::new(&mut state.selector.beds, 0..=MAX_BEDS))
        .changed();
    ui.add_space(8.0);

    ui.strong("Are you a superhost?");
    changed |= yes_no(ui, "superhost", &mut state.selector.is_superhost);
    ui.add_space(8.0);

    ui.strong("Choose the maximum number of guests allowed");
    changed |= ui
        .add(egui::Slider::new(
            &mut state.selector.accommodates,
            0..=MAX_ACCOMMODATES,
        ))
        .changed();
    ui.add_space(8.0);

    ui.strong("Are you a local host (living in Tokyo)?");
    changed |= yes_no(ui, "local_host", &mut state.selector.is_local_host);
    ui.add_space(8.0);

    ui.strong("Is there a hot tub?");
    changed |= yes_no(ui, "hot_tub", &mut state.selector.has_hot_tub);

    if changed {
        state.refresh();
    }
}

/// Yes/No radio pair bound to a flag. Returns whether the value changed.
fn yes_no(ui: &mut Ui, id: &str, value: &mut bool) -> bool {
    let mut changed = false;
    ui.push_id(id, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            changed |= ui.radio_value(value, true, "Yes").changed();
            changed |= ui.radio_value(value, false, "No").changed();
        });
    });
    changed
}

fn background_tab(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.strong("Background");
    ui.add_space(8.0);
    ui.label(
        "Tokyo Airbnb data was gathered from the Inside Airbnb website, \
         covering listings in 23 neighbourhoods in and around Tokyo. After \
         exploratory analysis and cleaning, 11,612 listings remained; feature \
         engineering (including almost 70 amenities) left each listing with \
         97 features such as the number of guests allowed and the number of \
         beds.",
    );
    ui.add_space(8.0);
    ui.label(
        "Because of the high dimensionality (97 features, thus 97 dimensions), \
         the data was standardized and reduced with Principal Components \
         Analysis to 50 components explaining 60% of the variance.",
    );
    ui.add_space(8.0);
    ui.label(
        "t-Distributed Stochastic Neighbor Embedding (t-SNE) then mapped the \
         components to the three coordinates plotted here. t-SNE measures the \
         similarity of the inputs and of the low-dimensional embedding and \
         minimizes the divergence between the two, so nearby points are \
         similar listings. The coordinates were computed offline; this app \
         only plots them.",
    );
}
