//! Editor state for one theme being edited.
//!
//! [`EditorState`] is a plain value. Every change goes through
//! [`EditorState::apply`], which consumes the state and returns the next one:
//!
//! ```rust
//! use swatchbook::editor::{EditorOp, EditorState};
//! use swatchbook::UserTheme;
//!
//! let state = EditorState::new(UserTheme::blank("Draft"))
//!     .apply(EditorOp::CreatePalette)
//!     .apply(EditorOp::CreatePalette);
//!
//! assert_eq!(state.user_theme.palettes[1].display_name, "palette 2");
//! ```
//!
//! Operations that point at a palette or color that does not exist leave the
//! state untouched. Edits to a palette set its `updated` flag, which
//! [`EditorState::mark_exported`] clears after a save.

use tracing::{debug, trace};

use crate::color::CssColor;
use crate::names::{NameSource, PrefixConfig};
use crate::theme::{ColorPalette, ThemeColor, UserTheme};

/// A single state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOp {
    /// Appends an empty palette named `palette N`.
    CreatePalette,
    /// Removes the palette with this id.
    DeletePalette(String),
    /// Selects a palette by id, or clears the selection.
    SelectPalette(Option<String>),
    /// Selects a color of the selected palette by index.
    SelectColor(usize),
    DeselectColor,
    /// Replaces the selected color's value, keeping its names.
    UpdateSelectedColor(CssColor),
    /// Appends a color to the selected palette.
    AddColor(ThemeColor),
    /// Removes a color of the selected palette by index.
    DeleteColor(usize),
    /// Re-derives all names of a color in the selected palette.
    RenameColor { index: usize, source: NameSource },
    RenamePalette { id: String, display_name: String },
    /// Replaces the selected palette's colors, e.g. after reordering.
    ReplaceColors(Vec<ThemeColor>),
    /// Swaps in a whole theme and clears all selection.
    ReplaceTheme(UserTheme),
}

/// Selection and theme data of one editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub editor_id: String,
    pub user_theme: UserTheme,
    pub selected_palette_id: Option<String>,
    /// Index into the selected palette's colors.
    pub selected_color: Option<usize>,
    pub color_selected: bool,
}

impl EditorState {
    /// Creates an editor with a fresh id and nothing selected.
    pub fn new(user_theme: UserTheme) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), user_theme)
    }

    pub fn with_id(editor_id: impl Into<String>, user_theme: UserTheme) -> Self {
        Self {
            editor_id: editor_id.into(),
            user_theme,
            selected_palette_id: None,
            selected_color: None,
            color_selected: false,
        }
    }

    /// The selected palette, when the selection points at an existing one.
    pub fn selected_palette(&self) -> Option<&ColorPalette> {
        let id = self.selected_palette_id.as_deref()?;
        self.user_theme.palette(id)
    }

    /// The selected color, when both palette and index resolve.
    pub fn selected_theme_color(&self) -> Option<&ThemeColor> {
        if !self.color_selected {
            return None;
        }
        self.selected_palette()?.colors.get(self.selected_color?)
    }

    /// Applies one operation and returns the resulting state.
    pub fn apply(mut self, op: EditorOp) -> Self {
        trace!(editor = %self.editor_id, op = ?op, "applying editor op");
        match op {
            EditorOp::CreatePalette => {
                let name = format!("palette {}", self.user_theme.palettes.len() + 1);
                debug!(editor = %self.editor_id, palette = %name, "created palette");
                self.user_theme.palettes.push(ColorPalette::empty(name));
            }
            EditorOp::DeletePalette(id) => {
                self.user_theme.palettes.retain(|p| p.id != id);
                if self.selected_palette_id.as_deref() == Some(id.as_str()) {
                    self.clear_selection();
                }
                debug!(editor = %self.editor_id, palette = %id, "deleted palette");
            }
            EditorOp::SelectPalette(Some(id)) => {
                if let Some(palette) = self.user_theme.palette_mut(&id) {
                    palette.updated = true;
                }
                if self.selected_palette_id.as_deref() != Some(id.as_str()) {
                    self.deselect_color();
                }
                self.selected_palette_id = Some(id);
            }
            EditorOp::SelectPalette(None) => self.clear_selection(),
            EditorOp::SelectColor(index) => {
                self.color_selected = true;
                self.selected_color = Some(index);
                if let Some(palette) = self.selected_palette_mut() {
                    for (i, color) in palette.colors.iter_mut().enumerate() {
                        color.is_selected = i == index;
                    }
                }
            }
            EditorOp::DeselectColor => self.deselect_color(),
            EditorOp::UpdateSelectedColor(color) => self.update_selected_color(color),
            EditorOp::AddColor(color) => {
                if let Some(palette) = self.selected_palette_mut() {
                    palette.colors.push(color);
                    palette.updated = true;
                }
            }
            EditorOp::DeleteColor(index) => self.delete_color(index),
            EditorOp::RenameColor { index, source } => self.rename_color(index, &source),
            EditorOp::RenamePalette { id, display_name } => {
                if let Some(palette) = self.user_theme.palette_mut(&id) {
                    palette.rename(display_name);
                    palette.updated = true;
                }
            }
            EditorOp::ReplaceColors(colors) => self.replace_colors(colors),
            EditorOp::ReplaceTheme(theme) => {
                debug!(editor = %self.editor_id, theme = %theme.theme_name, "replaced theme");
                self.user_theme = theme;
                self.clear_selection();
            }
        }
        self
    }

    /// Clears every palette's `updated` flag.
    pub fn mark_exported(mut self) -> Self {
        for palette in &mut self.user_theme.palettes {
            palette.updated = false;
        }
        self
    }

    fn selected_palette_mut(&mut self) -> Option<&mut ColorPalette> {
        let id = self.selected_palette_id.as_deref()?;
        self.user_theme.palettes.iter_mut().find(|p| p.id == id)
    }

    fn clear_selection(&mut self) {
        self.selected_palette_id = None;
        self.deselect_color();
    }

    fn deselect_color(&mut self) {
        self.color_selected = false;
        self.selected_color = None;
        for palette in &mut self.user_theme.palettes {
            for color in &mut palette.colors {
                color.is_selected = false;
            }
        }
    }

    fn update_selected_color(&mut self, color: CssColor) {
        let Some(index) = self.selected_color.filter(|_| self.color_selected) else {
            return;
        };
        let Some(palette) = self.selected_palette_mut() else {
            return;
        };
        let Some(target) = palette.colors.get_mut(index) else {
            return;
        };
        target.value = color.to_string();
        target.color = color.with_name(target.display_name.clone());
        palette.updated = true;
    }

    fn delete_color(&mut self, index: usize) {
        let Some(palette) = self.selected_palette_mut() else {
            return;
        };
        if index >= palette.colors.len() {
            return;
        }
        palette.colors.remove(index);
        palette.updated = true;

        match self.selected_color {
            Some(selected) if selected == index => self.deselect_color(),
            Some(selected) if selected > index => self.selected_color = Some(selected - 1),
            _ => {}
        }
    }

    /// Swaps in new colors, keeping the selection on the same color by its
    /// `is_selected` flag.
    fn replace_colors(&mut self, colors: Vec<ThemeColor>) {
        let color_selected = self.color_selected;
        let Some(palette) = self.selected_palette_mut() else {
            return;
        };
        palette.colors = colors;
        palette.updated = true;
        if !color_selected {
            return;
        }

        let position = palette.colors.iter().position(|c| c.is_selected);
        for (i, color) in palette.colors.iter_mut().enumerate() {
            color.is_selected = Some(i) == position;
        }
        match position {
            Some(index) => self.selected_color = Some(index),
            None => self.deselect_color(),
        }
    }

    fn rename_color(&mut self, index: usize, source: &NameSource) {
        let enabled = self.user_theme.uses_prefix;
        let prefix_text = self.user_theme.theme_prefix.clone();
        let prefix = PrefixConfig {
            enabled,
            prefix: &prefix_text,
        };
        let Some(palette) = self.selected_palette_mut() else {
            return;
        };
        if let Some(color) = palette.colors.get_mut(index) {
            color.rename(prefix, source);
            palette.updated = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn color(prop_name: &str, css: CssColor) -> ThemeColor {
        ThemeColor::from_prop_name(PrefixConfig::NONE, prop_name, css)
    }

    fn state_with_palettes(count: usize) -> EditorState {
        (0..count).fold(
            EditorState::with_id("ed", UserTheme::blank("Draft")),
            |state, _| state.apply(EditorOp::CreatePalette),
        )
    }

    fn palette_id(state: &EditorState, index: usize) -> String {
        state.user_theme.palettes[index].id.clone()
    }

    /// Two palettes, the first selected and holding three colors.
    fn editing_state() -> EditorState {
        let state = state_with_palettes(2);
        let id = palette_id(&state, 0);
        state
            .apply(EditorOp::SelectPalette(Some(id)))
            .apply(EditorOp::AddColor(color("red", CssColor::rgb(255, 0, 0))))
            .apply(EditorOp::AddColor(color("green", CssColor::rgb(0, 255, 0))))
            .apply(EditorOp::AddColor(color("blue", CssColor::rgb(0, 0, 255))))
            .mark_exported()
    }

    // =========================================================================
    // Palettes
    // =========================================================================

    #[test]
    fn test_create_palette_numbers_names() {
        let state = state_with_palettes(3);
        let names: Vec<_> = state
            .user_theme
            .palettes
            .iter()
            .map(|p| p.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["palette 1", "palette 2", "palette 3"]);
        assert_eq!(state.user_theme.palettes[0].prop_name, "palette1");
    }

    #[test]
    fn test_delete_selected_palette_clears_selection() {
        let state = state_with_palettes(2);
        let id = palette_id(&state, 0);
        let state = state
            .apply(EditorOp::SelectPalette(Some(id.clone())))
            .apply(EditorOp::DeletePalette(id));
        assert_eq!(state.user_theme.palettes.len(), 1);
        assert_eq!(state.selected_palette_id, None);
    }

    #[test]
    fn test_delete_other_palette_keeps_selection() {
        let state = state_with_palettes(2);
        let first = palette_id(&state, 0);
        let second = palette_id(&state, 1);
        let state = state
            .apply(EditorOp::SelectPalette(Some(first.clone())))
            .apply(EditorOp::DeletePalette(second));
        assert_eq!(state.selected_palette_id, Some(first));
    }

    #[test]
    fn test_delete_missing_palette_is_noop() {
        let state = state_with_palettes(2);
        let after = state.clone().apply(EditorOp::DeletePalette("nope".into()));
        assert_eq!(after, state);
    }

    #[test]
    fn test_select_palette_marks_updated() {
        let state = state_with_palettes(1);
        let id = palette_id(&state, 0);
        let state = state.apply(EditorOp::SelectPalette(Some(id)));
        assert!(state.user_theme.palettes[0].updated);
        assert!(state.selected_palette().is_some());
    }

    #[test]
    fn test_select_unknown_palette_sets_dangling_selection() {
        let state = state_with_palettes(1).apply(EditorOp::SelectPalette(Some("ghost".into())));
        assert_eq!(state.selected_palette_id.as_deref(), Some("ghost"));
        assert!(state.selected_palette().is_none());
        assert!(!state.user_theme.palettes[0].updated);
    }

    #[test]
    fn test_select_none_clears() {
        let state = editing_state()
            .apply(EditorOp::SelectColor(1))
            .apply(EditorOp::SelectPalette(None));
        assert_eq!(state.selected_palette_id, None);
        assert!(!state.color_selected);
    }

    #[test]
    fn test_rename_palette() {
        let state = state_with_palettes(1);
        let id = palette_id(&state, 0);
        let state = state.apply(EditorOp::RenamePalette {
            id,
            display_name: "Brand Colors".into(),
        });
        let palette = &state.user_theme.palettes[0];
        assert_eq!(palette.display_name, "Brand Colors");
        assert_eq!(palette.prop_name, "brandColors");
        assert!(palette.updated);
    }

    // =========================================================================
    // Colors
    // =========================================================================

    #[test]
    fn test_add_color_marks_updated() {
        let state = editing_state().apply(EditorOp::AddColor(color("gray", CssColor::rgb(128, 128, 128))));
        let palette = state.selected_palette().unwrap();
        assert_eq!(palette.colors.len(), 4);
        assert!(palette.updated);
    }

    #[test]
    fn test_add_color_without_selection_is_noop() {
        let state = state_with_palettes(1);
        let after = state
            .clone()
            .apply(EditorOp::AddColor(color("gray", CssColor::rgb(1, 1, 1))));
        assert_eq!(after, state);
    }

    #[test]
    fn test_select_and_deselect_color() {
        let state = editing_state().apply(EditorOp::SelectColor(1));
        assert!(state.color_selected);
        assert_eq!(state.selected_color, Some(1));
        assert_eq!(state.selected_theme_color().unwrap().display_name, "Green");
        assert!(state.selected_palette().unwrap().colors[1].is_selected);

        let state = state.apply(EditorOp::DeselectColor);
        assert!(!state.color_selected);
        assert!(state.selected_theme_color().is_none());
        assert!(!state.selected_palette().unwrap().colors[1].is_selected);
    }

    #[test]
    fn test_update_selected_color() {
        let state = editing_state()
            .apply(EditorOp::SelectColor(0))
            .apply(EditorOp::UpdateSelectedColor(CssColor::rgb(200, 0, 0)));
        let palette = state.selected_palette().unwrap();
        let updated = &palette.colors[0];
        assert_eq!(updated.color.hex(), "#c80000");
        assert_eq!(updated.value, "#c80000");
        assert_eq!(updated.color.name.as_deref(), Some("Red"));
        assert_eq!(updated.display_name, "Red");
        assert!(palette.updated);
    }

    #[test]
    fn test_update_without_selected_color_is_noop() {
        let state = editing_state();
        let after = state
            .clone()
            .apply(EditorOp::UpdateSelectedColor(CssColor::rgb(1, 2, 3)));
        assert_eq!(after, state);
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let state = editing_state().apply(EditorOp::SelectColor(9));
        let after = state
            .clone()
            .apply(EditorOp::UpdateSelectedColor(CssColor::rgb(1, 2, 3)));
        assert_eq!(after, state);
    }

    #[test]
    fn test_delete_color() {
        let state = editing_state().apply(EditorOp::DeleteColor(1));
        let palette = state.selected_palette().unwrap();
        let names: Vec<_> = palette.colors.iter().map(|c| c.css_var_name.as_str()).collect();
        assert_eq!(names, vec!["red", "blue"]);
        assert!(palette.updated);
    }

    #[test]
    fn test_delete_color_adjusts_selection() {
        let state = editing_state()
            .apply(EditorOp::SelectColor(2))
            .apply(EditorOp::DeleteColor(0));
        assert_eq!(state.selected_color, Some(1));
        assert_eq!(state.selected_theme_color().unwrap().display_name, "Blue");

        let state = state.apply(EditorOp::DeleteColor(1));
        assert!(!state.color_selected);
        assert_eq!(state.selected_color, None);
    }

    #[test]
    fn test_delete_color_out_of_range_is_noop() {
        let state = editing_state();
        let after = state.clone().apply(EditorOp::DeleteColor(3));
        assert_eq!(after, state);
    }

    #[test]
    fn test_rename_color_uses_theme_prefix() {
        let mut state = editing_state();
        state.user_theme = state.user_theme.with_prefix("--ui");
        let state = state.apply(EditorOp::RenameColor {
            index: 0,
            source: NameSource::CssVarName("--ui-danger".into()),
        });
        let renamed = &state.selected_palette().unwrap().colors[0];
        assert_eq!(renamed.prop_name.as_deref(), Some("danger"));
        assert_eq!(renamed.display_name, "Danger");
        assert_eq!(renamed.css_var_name, "--ui-danger");
    }

    #[test]
    fn test_replace_colors_reorders() {
        let state = editing_state();
        let mut colors = state.selected_palette().unwrap().colors.clone();
        colors.reverse();
        let state = state.apply(EditorOp::ReplaceColors(colors));
        let palette = state.selected_palette().unwrap();
        assert_eq!(palette.colors[0].css_var_name, "blue");
        assert!(palette.updated);
    }

    #[test]
    fn test_replace_colors_follows_selected_color() {
        let state = editing_state().apply(EditorOp::SelectColor(0));
        let mut colors = state.selected_palette().unwrap().colors.clone();
        colors.reverse();

        let state = state.apply(EditorOp::ReplaceColors(colors));
        assert_eq!(state.selected_color, Some(2));
        let selected = state.selected_theme_color().unwrap();
        assert_eq!(selected.display_name, "Red");
        assert!(selected.is_selected);

        let state = state.apply(EditorOp::UpdateSelectedColor(CssColor::rgb(1, 1, 1)));
        let palette = state.selected_palette().unwrap();
        assert_eq!(palette.colors[2].display_name, "Red");
        assert_eq!(palette.colors[2].color.hex(), "#010101");
        assert_eq!(palette.colors[0].display_name, "Blue");
        assert_eq!(palette.colors[0].color.hex(), "#0000ff");
    }

    #[test]
    fn test_replace_colors_dropping_selected_color_deselects() {
        let state = editing_state().apply(EditorOp::SelectColor(1));
        let colors: Vec<_> = state
            .selected_palette()
            .unwrap()
            .colors
            .iter()
            .filter(|c| !c.is_selected)
            .cloned()
            .collect();

        let state = state.apply(EditorOp::ReplaceColors(colors));
        assert!(!state.color_selected);
        assert_eq!(state.selected_color, None);
        assert_eq!(state.selected_palette().unwrap().colors.len(), 2);
    }

    // =========================================================================
    // Theme
    // =========================================================================

    #[test]
    fn test_replace_theme_clears_selection() {
        let state = editing_state()
            .apply(EditorOp::SelectColor(0))
            .apply(EditorOp::ReplaceTheme(UserTheme::blank("Other")));
        assert_eq!(state.user_theme.theme_name, "Other");
        assert_eq!(state.selected_palette_id, None);
        assert!(!state.color_selected);
        assert_eq!(state.editor_id, "ed");
    }

    #[test]
    fn test_mark_exported_clears_updated() {
        let state = editing_state().apply(EditorOp::DeleteColor(0));
        assert!(state.user_theme.is_dirty());
        let state = state.mark_exported();
        assert!(!state.user_theme.is_dirty());
    }

    #[test]
    fn test_ops_are_repeatable() {
        let once = editing_state().apply(EditorOp::SelectColor(1));
        let twice = once.clone().apply(EditorOp::SelectColor(1));
        assert_eq!(once, twice);
    }
}
