// src/ui/panel.rs
//! Swatch bar panel
//!
//! Three round colour buttons pinned to the bottom-center of the viewport.
//! Clicking one writes its swatch into the selection store; the selected
//! swatch renders larger than the rest, recomputed from store state on
//! every frame.

use imgui::{Condition, StyleColor, StyleVar};

use crate::interaction::store::{SelectionStore, Swatch};

/// Base edge length of a swatch button, logical pixels
const SWATCH_SIZE: f32 = 48.0;

/// Display scale of the currently selected swatch
const SELECTED_SCALE: f32 = 1.2;

/// Horizontal gap between swatches
const SWATCH_GAP: f32 = 24.0;

/// Distance of the bar from the bottom edge of the viewport
const BOTTOM_MARGIN: f32 = 16.0;

/// Display scale for one swatch button, derived from the store selection
pub fn swatch_scale(swatch: Swatch, store: &SelectionStore) -> f32 {
    if store.selected() == swatch {
        SELECTED_SCALE
    } else {
        1.0
    }
}

/// Draws the swatch bar and applies any selection the user makes
pub fn swatch_bar(ui: &imgui::Ui, store: &mut SelectionStore) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    let max_edge = SWATCH_SIZE * SELECTED_SCALE;
    let count = Swatch::ALL.len() as f32;
    let bar_width = count * max_edge + (count - 1.0) * SWATCH_GAP + 24.0;
    let bar_height = max_edge + 24.0;

    ui.window("##swatch_bar")
        .position(
            [
                (display_size[0] - bar_width) * 0.5,
                display_size[1] - bar_height - BOTTOM_MARGIN,
            ],
            Condition::Always,
        )
        .size([bar_width, bar_height], Condition::Always)
        .no_decoration()
        .movable(false)
        .bg_alpha(0.25)
        .build(|| {
            for (i, swatch) in Swatch::ALL.into_iter().enumerate() {
                if i > 0 {
                    ui.same_line_with_spacing(0.0, SWATCH_GAP);
                }
                swatch_button(ui, swatch, max_edge, store);
            }
        });
}

fn swatch_button(ui: &imgui::Ui, swatch: Swatch, max_edge: f32, store: &mut SelectionStore) {
    let edge = SWATCH_SIZE * swatch_scale(swatch, store);
    let colour = swatch.colour();
    let rgba = [colour.r, colour.g, colour.b, 1.0];
    let rgba_bright = [
        (colour.r + 0.1).min(1.0),
        (colour.g + 0.1).min(1.0),
        (colour.b + 0.1).min(1.0),
        1.0,
    ];

    // Center smaller buttons vertically against the selected one
    let cursor = ui.cursor_pos();
    ui.set_cursor_pos([cursor[0], cursor[1] + (max_edge - edge) * 0.5]);

    let _rounding = ui.push_style_var(StyleVar::FrameRounding(edge * 0.5));
    let _button = ui.push_style_color(StyleColor::Button, rgba);
    let _hovered = ui.push_style_color(StyleColor::ButtonHovered, rgba_bright);
    let _active = ui.push_style_color(StyleColor::ButtonActive, rgba);

    if ui.button_with_size(format!("##{}", swatch.id()), [edge, edge]) {
        log::debug!("swatch '{}' selected", swatch.id());
        store.select(swatch);
    }

    if ui.is_item_hovered() {
        ui.tooltip_text(swatch.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_swatch_renders_larger() {
        let mut store = SelectionStore::new();
        store.select(Swatch::Flamered);

        assert_eq!(swatch_scale(Swatch::Flamered, &store), 1.2);
        assert_eq!(swatch_scale(Swatch::Hotpink, &store), 1.0);
        assert_eq!(swatch_scale(Swatch::Blackbrown, &store), 1.0);
    }

    #[test]
    fn exactly_one_swatch_is_enlarged() {
        let store = SelectionStore::new();
        let enlarged = Swatch::ALL
            .into_iter()
            .filter(|s| swatch_scale(*s, &store) > 1.0)
            .count();
        assert_eq!(enlarged, 1);
    }
}
