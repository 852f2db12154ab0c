//! Navigation bar.

use crate::line;
use coolhtml_config::NavConfig;

pub fn generate(nav: &NavConfig) -> String {
    let theme = if nav.dark {
        "navbar-dark bg-dark"
    } else {
        "navbar-light bg-light"
    };
    let fixed = if nav.fixed { " fixed-top" } else { "" };
    let logo = nav
        .logo
        .as_ref()
        .map(|src| format!("<img src=\"{src}\" height=\"30\" class=\"me-2\">"))
        .unwrap_or_default();

    let links: String = nav
        .links
        .iter()
        .map(|link| {
            let active = if link.active { " active" } else { "" };
            line(
                4,
                &format!(
                    "<li class=\"nav-item\"><a class=\"nav-link{active}\" href=\"{}\">{}</a></li>",
                    link.url, link.text
                ),
            )
        })
        .collect();

    let button = nav
        .button
        .as_ref()
        .map(|b| {
            format!(
                "\n      <div class=\"ms-auto\">\n        <a href=\"{}\" class=\"{} my-2 my-lg-0\">{}</a>\n      </div>",
                b.url,
                b.class(),
                b.text
            )
        })
        .unwrap_or_default();

    format!(
        r##"<nav class="navbar navbar-expand-lg {theme}{fixed}">
  <div class="container">
    <a class="navbar-brand" href="#">{logo}{title}</a>
    <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav">
      <span class="navbar-toggler-icon"></span>
    </button>
    <div class="collapse navbar-collapse" id="navbarNav">
      <ul class="navbar-nav me-auto">{links}
      </ul>{button}
    </div>
  </div>
</nav>"##,
        title = nav.title
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gen(value: serde_json::Value) -> String {
        generate(&NavConfig::from_value(&value))
    }

    #[test]
    fn test_defaults() {
        let html = generate(&NavConfig::default());
        assert!(html.starts_with("<nav class=\"navbar navbar-expand-lg navbar-dark bg-dark\">"));
        assert!(html.contains("<a class=\"navbar-brand\" href=\"#\">CoolHTML</a>"));
        assert!(!html.contains("ms-auto"));
        assert!(html.ends_with("</nav>"));
    }

    #[test]
    fn test_light_and_fixed() {
        let html = gen(json!({ "dark": false, "fixed": true }));
        assert!(html.contains("navbar-light bg-light fixed-top"));
    }

    #[test]
    fn test_logo() {
        let html = gen(json!({ "title": "Acme", "logo": "/logo.svg" }));
        assert!(html.contains("<img src=\"/logo.svg\" height=\"30\" class=\"me-2\">Acme</a>"));
    }

    #[test]
    fn test_links() {
        let html = gen(json!({
            "links": ["Home", { "text": "Docs", "url": "/docs", "active": true }]
        }));
        assert!(html.contains("<a class=\"nav-link\" href=\"#\">Home</a>"));
        assert!(html.contains("<a class=\"nav-link active\" href=\"/docs\">Docs</a>"));
    }

    #[test]
    fn test_button_on_dark_bar() {
        let html = gen(json!({ "button": { "text": "Login", "url": "/login", "outline": true } }));
        assert!(html.contains(
            "<a href=\"/login\" class=\"btn btn-outline-light my-2 my-lg-0\">Login</a>"
        ));
    }

    #[test]
    fn test_button_on_light_bar() {
        let html = gen(json!({ "dark": false, "btn": {} }));
        assert!(html.contains("class=\"btn btn-primary my-2 my-lg-0\">Button</a>"));
    }
}
