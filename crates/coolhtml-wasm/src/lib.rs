//! WASM bindings for CoolHTML.
//!
//! Exposes a `Cool` class that owns a page and renders sections into it, plus
//! the stateless helpers `text()`, `css()`, `renderSite()` and `version()`.
//! Configuration objects are converted from JS through serde-wasm-bindgen;
//! bad targets surface as thrown JS errors.

use coolhtml::{
    Content, CoolHtml, Options, RenderContext, SiteConfig, SiteOutput, Style, Target,
};
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn to_value(config: JsValue) -> Result<Value, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))
}

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// A page under construction.
#[wasm_bindgen]
pub struct Cool {
    inner: CoolHtml,
}

#[wasm_bindgen]
impl Cool {
    /// `new Cool(targetId?, loadAssets = true)`
    #[wasm_bindgen(constructor)]
    pub fn new(target: Option<String>, load_assets: Option<bool>) -> Cool {
        let mut options = Options::default();
        if let Some(id) = target {
            options.target = Target::Id(id);
        }
        if load_assets == Some(false) {
            options.assets = None;
        }
        Cool {
            inner: CoolHtml::new(options),
        }
    }

    /// Adopt an existing page's markup.
    #[wasm_bindgen(js_name = fromHtml)]
    pub fn from_html(html: &str, target: Option<String>) -> Cool {
        let mut options = Options::default();
        if let Some(id) = target {
            options.target = Target::Id(id);
        }
        Cool {
            inner: CoolHtml::with_document(coolhtml::Document::parse(html), options),
        }
    }

    /// Use `testimonial-0`, `testimonial-1`, … ids and a fixed copyright
    /// year.
    pub fn deterministic(&mut self, year: i32) {
        *self.inner.context_mut() = RenderContext::deterministic(year);
    }

    pub fn site(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.site_value(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn nav(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.nav(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn hero(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.hero(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn features(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.features(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn section(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.section(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn pricing(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.pricing(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn testimonials(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.testimonials(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn contact(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.contact(&value).map_err(js_error)?;
        Ok(())
    }

    pub fn footer(&mut self, config: JsValue) -> Result<(), JsError> {
        let value = to_value(config)?;
        self.inner.footer(&value).map_err(js_error)?;
        Ok(())
    }

    /// Append raw markup to `targetId`, or to the default target.
    pub fn render(&mut self, html: &str, target: Option<String>) -> Result<(), JsError> {
        let target = target.map(Target::Id);
        self.inner
            .render(html, target.as_ref())
            .map_err(js_error)?;
        Ok(())
    }

    pub fn style(&mut self, css: &str, id: Option<String>) {
        self.inner.style(css, id.as_deref());
    }

    /// Inner markup of `<head>`.
    pub fn head(&self) -> String {
        self.inner.document().head().inner_html()
    }

    /// Inner markup of `<body>`.
    pub fn body(&self) -> String {
        self.inner.document().body().inner_html()
    }

    /// The whole page, doctype included.
    pub fn document(&self) -> String {
        self.inner.document().to_html()
    }
}

/// Format inline markup.
#[wasm_bindgen]
pub fn text(source: &str) -> String {
    coolhtml_text(source)
}

/// Compile a style object (or pass a CSS string through).
#[wasm_bindgen]
pub fn css(style: JsValue, prefix: Option<String>) -> Result<String, JsError> {
    let value = to_value(style)?;
    Ok(compile_style(&value, prefix.as_deref().unwrap_or("")))
}

/// Render a site configuration without a document.
///
/// Returns `{ css: string | undefined, html: string }` where `html` is every
/// section fragment joined by newlines.
#[wasm_bindgen(js_name = renderSite)]
pub fn render_site(config: JsValue) -> Result<JsValue, JsError> {
    let value = to_value(config)?;
    let output = render_site_value(&value);

    let js_obj = js_sys::Object::new();
    let css = output
        .theme_css
        .as_deref()
        .map(JsValue::from)
        .unwrap_or(JsValue::UNDEFINED);
    js_sys::Reflect::set(&js_obj, &"css".into(), &css)
        .map_err(|_| JsError::new("Failed to set css property"))?;
    js_sys::Reflect::set(&js_obj, &"html".into(), &joined_html(&output).into())
        .map_err(|_| JsError::new("Failed to set html property"))?;

    Ok(js_obj.into())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn coolhtml_text(source: &str) -> String {
    Content::from(source).render()
}

fn compile_style(value: &Value, prefix: &str) -> String {
    Style::from_value(value).compile(prefix)
}

fn render_site_value(value: &Value) -> SiteOutput {
    coolhtml::compile(&SiteConfig::from_value(value), &mut RenderContext::new())
}

fn joined_html(output: &SiteOutput) -> String {
    output
        .fragments
        .iter()
        .map(|f| f.html.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
