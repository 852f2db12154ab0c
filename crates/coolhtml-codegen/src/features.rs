//! Feature grid.

use crate::line;
use coolhtml_config::{Feature, FeaturesConfig, Icon};

/// Bootstrap column span for a requested column count, capped at four
/// columns per row.
pub fn column_width(columns: u64) -> u64 {
    12 / columns.clamp(1, 4)
}

pub fn generate(features: &FeaturesConfig) -> String {
    let subtitle = features
        .subtitle
        .as_ref()
        .map(|s| format!("<p class=\"lead\">{s}</p>"))
        .unwrap_or_default();

    let grid = if features.items.is_empty() {
        String::new()
    } else {
        let width = column_width(features.columns);
        let cells: String = features
            .items
            .iter()
            .map(|item| line(3, &cell(item, width)))
            .collect();
        line(2, &format!("<div class=\"row\">{cells}\n    </div>"))
    };

    format!(
        r##"<section class="py-5">
  <div class="container">
    <div class="text-center mb-5">
      <h2>{title}</h2>{subtitle}
    </div>{grid}
  </div>
</section>"##,
        title = features.title,
        subtitle = line(3, &subtitle),
    )
}

fn cell(item: &Feature, width: u64) -> String {
    let icon = match &item.icon {
        Some(Icon::Glyph { class, color }) => {
            format!("<i class=\"bi {class} fs-1 text-{color} mb-3\"></i>")
        }
        Some(Icon::Image { url }) => {
            format!("<img src=\"{url}\" class=\"mb-3\" style=\"height: 60px;\">")
        }
        None => String::new(),
    };
    format!(
        "<div class=\"col-md-{width} col-sm-6 mb-4 text-center\"><div class=\"p-3 h-100\">{icon}<h3>{}</h3><p>{}</p></div></div>",
        item.title, item.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gen(value: serde_json::Value) -> String {
        generate(&FeaturesConfig::from_value(&value))
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(1), 12);
        assert_eq!(column_width(2), 6);
        assert_eq!(column_width(3), 4);
        assert_eq!(column_width(4), 3);
        assert_eq!(column_width(6), 3);
        assert_eq!(column_width(0), 12);
    }

    #[test]
    fn test_defaults() {
        let html = generate(&FeaturesConfig::default());
        assert!(html.contains("<h2>Features</h2>"));
        assert!(!html.contains("class=\"row\""));
        assert!(!html.contains("lead"));
    }

    #[test]
    fn test_items_use_column_width() {
        let html = gen(json!({ "cols": 2, "items": ["A", "B"] }));
        assert_eq!(html.matches("col-md-6 col-sm-6").count(), 2);
        assert!(html.contains("<h3>A</h3><p></p>"));
    }

    #[test]
    fn test_more_than_four_columns_is_capped() {
        let html = gen(json!({ "columns": 6, "items": ["A"] }));
        assert!(html.contains("col-md-3 "));
    }

    #[test]
    fn test_icon_font_glyph() {
        let html = gen(json!({ "items": [{ "title": "Fast", "icon": "bi-lightning" }] }));
        assert!(html.contains("<i class=\"bi bi-lightning fs-1 text-primary mb-3\"></i>"));
    }

    #[test]
    fn test_image_icon() {
        let html = gen(json!({ "items": [{ "title": "Fast", "icon": "/bolt.png", "desc": "Very" }] }));
        assert!(html.contains("<img src=\"/bolt.png\" class=\"mb-3\" style=\"height: 60px;\">"));
        assert!(html.contains("<p>Very</p>"));
    }
}
