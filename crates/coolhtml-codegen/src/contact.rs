//! Contact form with optional details and map.

use crate::line;
use coolhtml_config::{ContactConfig, ContactInfo};

pub fn generate(contact: &ContactConfig) -> String {
    let map = contact
        .map
        .as_ref()
        .map(|src| {
            format!(
                r##"
    <div class="mt-5">
      <div class="ratio ratio-21x9">
        <iframe src="{src}" style="border:0;" allowfullscreen="" loading="lazy"></iframe>
      </div>
    </div>"##
            )
        })
        .unwrap_or_default();

    format!(
        r##"<section class="py-5">
  <div class="container">
    <div class="text-center mb-5">
      <h2>{title}</h2>
      <p class="lead">{subtitle}</p>
    </div>
    <div class="row">
      <div class="col-lg-5 mb-4">{text}{info}
      </div>
      <div class="col-lg-7">
        <form>
          <div class="mb-3">
            <label for="name" class="form-label">Name</label>
            <input type="text" class="form-control" id="name" required>
          </div>
          <div class="mb-3">
            <label for="email" class="form-label">Email</label>
            <input type="email" class="form-control" id="email" required>
          </div>
          <div class="mb-3">
            <label for="message" class="form-label">Message</label>
            <textarea class="form-control" id="message" rows="4" required></textarea>
          </div>
          <button type="submit" class="btn btn-primary">{button}</button>
        </form>
      </div>
    </div>{map}
  </div>
</section>"##,
        title = contact.title,
        subtitle = contact.subtitle,
        text = line(4, &contact.text.render()),
        info = line(4, &info(&contact.info)),
        button = contact.button,
    )
}

fn info(info: &ContactInfo) -> String {
    if info.is_empty() {
        return String::new();
    }
    let rows = [
        ("bi-geo-alt", &info.address),
        ("bi-envelope", &info.email),
        ("bi-telephone", &info.phone),
    ];
    let body: String = rows
        .into_iter()
        .filter_map(|(icon, value)| {
            value
                .as_ref()
                .map(|value| format!("<p><i class=\"bi {icon} text-primary me-2\"></i> {value}</p>"))
        })
        .collect();
    format!("<div class=\"mb-4\">{body}</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gen(value: serde_json::Value) -> String {
        generate(&ContactConfig::from_value(&value))
    }

    #[test]
    fn test_defaults() {
        let html = generate(&ContactConfig::default());
        assert!(html.contains("<h2>Contact Us</h2>"));
        assert!(html.contains("<button type=\"submit\" class=\"btn btn-primary\">Send</button>"));
        assert!(html.contains("id=\"message\""));
        assert!(!html.contains("mb-4\"><p>"));
        assert!(!html.contains("iframe"));
    }

    #[test]
    fn test_info_rows_in_order() {
        let html = gen(json!({ "info": { "phone": "555", "address": "Main St" } }));
        let address = html.find("bi-geo-alt").unwrap();
        let phone = html.find("bi-telephone").unwrap();
        assert!(address < phone);
        assert!(!html.contains("bi-envelope"));
        assert!(html.contains("<i class=\"bi bi-telephone text-primary me-2\"></i> 555</p>"));
    }

    #[test]
    fn test_text_and_button() {
        let html = gen(json!({ "text": "Write *now*", "btn": "Go" }));
        assert!(html.contains("<p>Write <strong>now</strong></p>"));
        assert!(html.contains(">Go</button>"));
    }

    #[test]
    fn test_map() {
        let html = gen(json!({ "map": "https://maps.example/embed" }));
        assert!(html.contains("<div class=\"ratio ratio-21x9\">"));
        assert!(html.contains("<iframe src=\"https://maps.example/embed\""));
    }
}
