//! Palette emission as a stylesheet block or JSON.

use crate::palette::PaletteVariableSet;

/// `:root { --key: value; ... }` with one declaration per line.
pub fn render_root_block(palette: &PaletteVariableSet) -> String {
    let mut out = String::from(":root {\n");
    for (key, value) in palette.iter() {
        out.push_str(&format!("  --{key}: {value};\n"));
    }
    out.push_str("}\n");
    out
}

/// Palette as a JSON object keyed by `--name`.
pub fn render_json(palette: &PaletteVariableSet) -> Result<String, serde_json::Error> {
    let map: serde_json::Map<String, serde_json::Value> = palette
        .iter()
        .map(|(key, value)| (format!("--{key}"), serde_json::Value::from(value)))
        .collect();
    serde_json::to_string_pretty(&serde_json::Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{derive, AccentColor, ThemeMode};

    fn palette() -> PaletteVariableSet {
        derive(
            ThemeMode::Dark,
            &AccentColor::parse("#2899F5").expect("color"),
        )
    }

    #[test]
    fn root_block_declares_every_variable() {
        let css = render_root_block(&palette());
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --color-primary: #2899F5;\n"));
        assert!(css.contains("  --color-bg-card: var(--color-bg-card-dark);\n"));
        assert_eq!(css.matches(";\n").count(), palette().len());
    }

    #[test]
    fn json_uses_dashed_keys() {
        let json = render_json(&palette()).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["--color-primary-rgb"], "40, 153, 245");
        assert_eq!(value["--color-primary-darken"], "#207ac4");
    }
}
