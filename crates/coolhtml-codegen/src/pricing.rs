//! Pricing table.

use crate::{line, style_attr};
use coolhtml_config::{Plan, PlanFeature, PricingConfig};

/// Bootstrap column span for each of `plans` plans.
///
/// Integer division: five plans get span 2 each and leave two columns empty.
pub fn plan_width(plans: usize) -> usize {
    12 / plans.max(1)
}

pub fn generate(pricing: &PricingConfig) -> String {
    let style = style_attr(pricing.background.as_ref());

    let grid = if pricing.plans.is_empty() {
        String::new()
    } else {
        let width = plan_width(pricing.plans.len());
        let cards: String = pricing
            .plans
            .iter()
            .map(|plan| line(3, &card(plan, width)))
            .collect();
        line(2, &format!("<div class=\"row\">{cards}\n    </div>"))
    };

    format!(
        r##"<section class="py-5"{style}>
  <div class="container">
    <div class="text-center mb-5">
      <h2>{title}</h2>
      <p class="lead">{subtitle}</p>
    </div>{grid}
  </div>
</section>"##,
        title = pricing.title,
        subtitle = pricing.subtitle,
    )
}

fn card(plan: &Plan, width: usize) -> String {
    let (card, header, button) = if plan.featured {
        (" shadow border-primary", " bg-primary text-white", "btn-primary")
    } else {
        ("", "", "btn-outline-primary")
    };
    let features: String = plan.features.iter().map(feature_line).collect();

    format!(
        r##"<div class="col-lg-{width} col-md-6 mb-4">
        <div class="card h-100{card}">
          <div class="card-header text-center{header}">
            <h4 class="my-0">{title}</h4>
          </div>
          <div class="card-body text-center">
            <h1 class="card-title">{price}<small class="text-muted fw-light">{period}</small></h1>
            <ul class="list-unstyled mt-3 mb-4">{features}</ul>
            <a href="{url}" class="btn {button} w-100">{label}</a>
          </div>
        </div>
      </div>"##,
        title = plan.title,
        price = plan.price,
        period = plan.period,
        url = plan.url,
        label = plan.button,
    )
}

fn feature_line(feature: &PlanFeature) -> String {
    if feature.included {
        format!("<li><i class=\"bi bi-check text-success\"></i> {}</li>", feature.text)
    } else {
        format!(
            "<li class=\"text-muted\"><i class=\"bi bi-x text-muted\"></i> {}</li>",
            feature.text
        )
    }
}
