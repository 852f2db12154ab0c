//! Testimonials, as a card grid or a carousel.

use crate::{line, style_attr, RenderContext};
use coolhtml_config::{Testimonial, TestimonialLayout, TestimonialsConfig};

pub fn generate(testimonials: &TestimonialsConfig, ctx: &mut RenderContext) -> String {
    let style = style_attr(testimonials.background.as_ref());

    let body = if testimonials.items.is_empty() {
        String::new()
    } else {
        match testimonials.layout {
            TestimonialLayout::Grid => grid(&testimonials.items),
            TestimonialLayout::Carousel => carousel(&testimonials.items, ctx),
        }
    };

    format!(
        r##"<section class="py-5"{style}>
  <div class="container">
    <div class="text-center mb-5">
      <h2>{title}</h2>
      <p class="lead">{subtitle}</p>
    </div>{body}
  </div>
</section>"##,
        title = testimonials.title,
        subtitle = testimonials.subtitle,
        body = line(2, &body),
    )
}

fn grid(items: &[Testimonial]) -> String {
    let cards: String = items
        .iter()
        .map(|item| {
            let avatar = item
                .image
                .as_ref()
                .map(|src| format!("<img src=\"{src}\" class=\"rounded-circle me-3\" width=\"50\">"))
                .unwrap_or_default();
            line(
                3,
                &format!(
                    "<div class=\"col-lg-4 col-md-6 mb-4\"><div class=\"card h-100\"><div class=\"card-body\"><p class=\"card-text\">\"{}\"</p><div class=\"d-flex align-items-center mt-3\">{avatar}<div><h5 class=\"mb-0\">{}</h5><p class=\"text-muted mb-0\">{}</p></div></div></div></div></div>",
                    item.quote, item.name, item.role
                ),
            )
        })
        .collect();
    format!("<div class=\"row\">{cards}\n    </div>")
}

fn carousel(items: &[Testimonial], ctx: &mut RenderContext) -> String {
    let id = ctx.assign_id("testimonial");
    let slides: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let active = if i == 0 { " active" } else { "" };
            let avatar = item
                .image
                .as_ref()
                .map(|src| format!("<img src=\"{src}\" class=\"rounded-circle mb-3\" width=\"80\">"))
                .unwrap_or_default();
            line(
                4,
                &format!(
                    "<div class=\"carousel-item{active}\"><div class=\"d-flex flex-column align-items-center\">{avatar}<p class=\"lead text-center mb-3\">\"{}\"</p><h5>{}</h5><p class=\"text-muted\">{}</p></div></div>",
                    item.quote, item.name, item.role
                ),
            )
        })
        .collect();

    format!(
        r##"<div id="{id}" class="carousel slide" data-bs-ride="carousel">
      <div class="carousel-inner">{slides}
      </div>
      <button class="carousel-control-prev" type="button" data-bs-target="#{id}" data-bs-slide="prev">
        <span class="carousel-control-prev-icon"></span>
      </button>
      <button class="carousel-control-next" type="button" data-bs-target="#{id}" data-bs-slide="next">
        <span class="carousel-control-next-icon"></span>
      </button>
    </div>"##
    )
}
