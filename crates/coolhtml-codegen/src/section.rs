//! Generic content section.

use crate::{line, style_attr};
use coolhtml_config::SectionConfig;

pub fn generate(section: &SectionConfig) -> String {
    let dark = if section.dark { " text-white" } else { "" };
    let id = section
        .id
        .as_ref()
        .map(|id| format!(" id=\"{id}\""))
        .unwrap_or_default();
    let style = style_attr(section.background.as_ref());
    let align = section
        .align
        .as_ref()
        .map(|align| format!(" class=\"text-{align}\""))
        .unwrap_or_default();

    let mut header = String::new();
    if let Some(title) = &section.title {
        header.push_str(&line(2, &format!("<h2 class=\"text-center mb-4\">{title}</h2>")));
    }
    if let Some(subtitle) = &section.subtitle {
        header.push_str(&line(2, &format!("<p class=\"lead text-center mb-5\">{subtitle}</p>")));
    }

    format!(
        r##"<section class="py-5{dark}"{id}{style}>
  <div class="container">{header}
    <div{align}>{content}</div>
  </div>
</section>"##,
        content = section.content.render()
    )
}
