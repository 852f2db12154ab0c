//! Page footer.

use crate::{line, RenderContext};
use coolhtml_config::FooterConfig;

pub fn generate(footer: &FooterConfig, ctx: &RenderContext) -> String {
    let (theme, muted) = if footer.dark {
        ("bg-dark text-white", "text-white-50")
    } else {
        ("bg-light", "text-muted")
    };

    let social = if footer.social.is_empty() {
        String::new()
    } else {
        let icon_class = if footer.dark { "fs-5 text-white" } else { "fs-5" };
        let icons: String = footer
            .social
            .iter()
            .map(|item| {
                format!(
                    "<a href=\"{}\" class=\"{icon_class}\" aria-label=\"{}\"><i class=\"bi bi-{}\"></i></a>",
                    item.url, item.name, item.icon
                )
            })
            .collect();
        format!("<div class=\"d-flex gap-3 mb-3\">{icons}</div>")
    };

    let links = if footer.links.is_empty() {
        String::new()
    } else {
        let items: String = footer
            .links
            .iter()
            .map(|link| {
                format!(
                    "<li><a href=\"{}\" class=\"{muted}\">{}</a></li>",
                    link.url, link.text
                )
            })
            .collect();
        format!(
            "<div class=\"col-md-4\"><h5>Links</h5><ul class=\"list-unstyled\">{items}</ul></div>"
        )
    };

    let newsletter = footer
        .newsletter
        .as_ref()
        .map(|form| {
            let button = if footer.dark { "light" } else { "dark" };
            format!(
                "<h5>{}</h5><p class=\"{muted}\">{}</p><div class=\"input-group mb-3\"><input type=\"email\" class=\"form-control\" placeholder=\"Email address\"><button class=\"btn btn-{button}\" type=\"button\">{}</button></div>",
                form.title, form.text, form.button
            )
        })
        .unwrap_or_default();

    let copyright = footer
        .copyright
        .clone()
        .unwrap_or_else(|| format!("© {} All rights reserved", ctx.year()));
    let width = if footer.links.is_empty() { 6 } else { 4 };

    format!(
        r##"<footer class="py-4 {theme}">
  <div class="container">
    <div class="row">
      <div class="col-md-{width}">
        <h5>{title}</h5>
        <p class="{muted}">{text}</p>{social}
      </div>{links}
      <div class="col-md-4">{newsletter}</div>
    </div>
    <div class="text-center mt-4">
      <p class="mb-0">{copyright}</p>
    </div>
  </div>
</footer>"##,
        title = footer.title,
        text = footer.text,
        social = line(4, &social),
        links = line(3, &links),
    )
}
