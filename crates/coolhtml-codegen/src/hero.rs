//! Hero banner.

use crate::{line, style_attr};
use coolhtml_config::HeroConfig;

pub fn generate(hero: &HeroConfig) -> String {
    let dark = if hero.dark { " text-white" } else { "" };
    let style = style_attr(hero.background.as_ref());

    let mut body = String::new();
    if let Some(title) = &hero.title {
        body.push_str(&line(2, &format!("<h1 class=\"display-4\">{title}</h1>")));
    }
    if let Some(subtitle) = &hero.subtitle {
        body.push_str(&line(2, &format!("<p class=\"lead\">{subtitle}</p>")));
    }
    body.push_str(&line(2, &hero.content.render()));
    if !hero.buttons.is_empty() {
        let buttons: String = hero
            .buttons
            .iter()
            .map(|b| format!("<a href=\"{}\" class=\"{} me-2\">{}</a>", b.url, b.class(), b.text))
            .collect();
        body.push_str(&line(2, &format!("<div class=\"mt-4\">{buttons}</div>")));
    }

    format!(
        r##"<div class="py-5 text-{align}{dark}"{style}>
  <div class="container py-5">{body}
  </div>
</div>"##,
        align = hero.align
    )
}
