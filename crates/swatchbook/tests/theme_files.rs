//! Integration tests for loading, exporting and saving theme files.

use std::fs;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use swatchbook::{
    export_theme, import_theme, load_theme, render_theme_as_css, save_theme, ColorFormat,
    DirectorySink, ThemeError, ThemeFile,
};
use tempfile::TempDir;

const OCEAN: &str = r##"{
  "themeName": "Ocean Breeze",
  "modifiedAt": "2024-03-01T12:00:00.000Z",
  "colorFormat": "hex",
  "usesPrefix": true,
  "themePrefix": "--ocean",
  "palettes": [
    {
      "id": "p1",
      "propName": "brand",
      "displayName": "Brand",
      "componentColor": "primary",
      "colors": [
        { "propName": "deepSea", "cssVarName": "--ocean-deep-sea", "displayName": "Deep Sea", "value": "rgb(0, 105, 148)" },
        { "propName": "foam", "cssVarName": "--ocean-foam", "displayName": "Foam", "value": "hsla(0, 0%, 100%, 0.5)" }
      ]
    },
    {
      "id": "p2",
      "propName": "text",
      "displayName": "Text",
      "componentColor": "neutral",
      "colors": [
        { "propName": "ink", "cssVarName": "--ocean-ink", "displayName": "Ink", "value": "currentcolor" }
      ]
    }
  ]
}"##;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_theme_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "ocean.json", OCEAN);

    let theme = load_theme(&path).unwrap();
    assert_eq!(theme.theme_name, "Ocean Breeze");
    assert_eq!(theme.palettes.len(), 2);
    assert_eq!(theme.color_count(), 3);
    assert!(theme.palettes[0].colors[1].color.has_alpha());
}

#[test]
fn test_load_theme_from_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "forest.yaml",
        "themeName: Forest\npalettes:\n  - id: g\n    colors:\n      - cssVarName: --moss\n        displayName: Moss\n        value: \"#8a9a5b\"\n",
    );

    let theme = load_theme(&path).unwrap();
    assert_eq!(theme.palettes[0].colors[0].color.hex(), "#8a9a5b");
}

#[test]
fn test_load_theme_reports_invalid_color() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.json", &OCEAN.replace("currentcolor", "not-a-color"));

    let err = load_theme(&path).unwrap_err();
    assert!(matches!(err, ThemeError::Import(_)));
    assert_eq!(
        err.to_string(),
        "Unable to parse \"not-a-color\" as a valid CSS color value"
    );
}

#[test]
fn test_load_theme_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "ocean.toml", OCEAN);
    assert!(matches!(
        load_theme(&path),
        Err(ThemeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_load_theme_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        load_theme(dir.path().join("absent.json")),
        Err(ThemeError::Io(_))
    ));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_css_output() {
    let theme = import_theme(ThemeFile::from_json(OCEAN).unwrap()).unwrap();
    assert_snapshot!(
        render_theme_as_css(Some(&theme), false),
        @"--ocean-deep-sea: #006994; --ocean-foam: #ffffff80; --ocean-ink: currentcolor"
    );
}

#[test]
fn test_css_output_with_new_lines_in_hsl() {
    let mut theme = import_theme(ThemeFile::from_json(OCEAN).unwrap()).unwrap();
    theme.color_format = ColorFormat::Hsl;
    let css = render_theme_as_css(Some(&theme), true);
    assert_eq!(
        css.lines().collect::<Vec<_>>(),
        vec![
            "--ocean-deep-sea: hsl(197, 100%, 29%)",
            ";--ocean-foam: hsla(0, 0%, 100%, 0.5)",
            ";--ocean-ink: currentcolor",
        ]
    );
}

#[test]
fn test_export_in_rgb() {
    let mut theme = import_theme(ThemeFile::from_json(OCEAN).unwrap()).unwrap();
    theme.color_format = ColorFormat::Rgb;
    let values: Vec<String> = export_theme(&theme)
        .palettes
        .into_iter()
        .flat_map(|p| p.colors)
        .map(|c| c.value)
        .collect();
    assert_snapshot!(
        values.join(" | "),
        @"rgb(0, 105, 148) | rgba(255, 255, 255, 0.5) | currentcolor"
    );
}

// ============================================================================
// Saving
// ============================================================================

#[test]
fn test_save_to_directory_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut theme = import_theme(ThemeFile::from_json(OCEAN).unwrap()).unwrap();
    let mut sink = DirectorySink::new(dir.path());

    let filename = save_theme(&mut theme, &mut sink).unwrap();
    assert_eq!(filename, "ocean-breeze.json");
    assert_ne!(theme.modified_at, "2024-03-01T12:00:00.000Z");

    let saved = load_theme(dir.path().join(&filename)).unwrap();
    assert_eq!(saved.modified_at, theme.modified_at);
    assert_eq!(saved.palettes.len(), theme.palettes.len());
    for (a, b) in saved.palettes.iter().zip(&theme.palettes) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.component_color, b.component_color);
        for (x, y) in a.colors.iter().zip(&b.colors) {
            assert_eq!(x.names(), y.names());
            assert!(x.color.same_color(&y.color));
        }
    }
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(dir.path().join("nope"));
    let mut theme = import_theme(ThemeFile::from_json(OCEAN).unwrap()).unwrap();
    assert!(matches!(
        save_theme(&mut theme, &mut sink),
        Err(ThemeError::Io(_))
    ));
}
