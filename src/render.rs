use crate::form::ParkingForm;
use crate::types::{FormOptions, PredictionOutcome};
use std::fmt;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    Prediction,
    Error,
}

impl ResultStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            ResultStyle::Prediction => "result",
            ResultStyle::Error => "result error",
        }
    }
}

/// Display-ready form of an outcome. Both the text and the HTML output are
/// built from these lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    pub style: ResultStyle,
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

pub fn render(outcome: &PredictionOutcome) -> RenderedResult {
    match outcome {
        PredictionOutcome::Failed(err) => RenderedResult {
            style: ResultStyle::Error,
            heading: None,
            lines: vec![err.error.clone()],
        },
        PredictionOutcome::Prediction(p) => RenderedResult {
            style: ResultStyle::Prediction,
            heading: Some(format!("Prediction for {}", p.location)),
            lines: vec![
                format!("Day: {}", p.day),
                format!("Time Block: {}", p.time),
                format!("Availability: {} ({}%)", p.availability, p.confidence),
                format!("Estimated Spaces: {}", p.spaces),
            ],
        },
    }
}

impl RenderedResult {
    pub fn to_html(&self) -> String {
        let mut html = format!("<div id=\"result\" class=\"{}\">", self.style.css_class());
        if let Some(heading) = &self.heading {
            let _ = write!(html, "<h3>{}</h3>", escape_html(heading));
        }
        for line in &self.lines {
            let _ = write!(html, "<p>{}</p>", escape_html(line));
        }
        html.push_str("</div>");
        html
    }
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in self.heading.iter().chain(self.lines.iter()) {
            if !first {
                writeln!(f)?;
            }
            f.write_str(line)?;
            first = false;
        }
        Ok(())
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:28rem;margin:2rem auto}\
label{display:block;font-weight:bold;margin-top:.75rem}\
select,button{width:100%;padding:.4rem;margin-top:.25rem}\
.quick{display:flex;gap:.5rem;margin-top:1rem}.quick form{flex:1}\
.result{margin-top:1.5rem;padding:1rem;background:#f3f4f6}\
.error{color:#dc2626}";

fn select(
    html: &mut String,
    name: &str,
    label: &str,
    placeholder: &str,
    items: &[String],
    chosen: &str,
) {
    let _ = write!(
        html,
        "<label for=\"{name}\">{label}</label><select id=\"{name}\" name=\"{name}\"><option value=\"\">{placeholder}</option>"
    );
    for item in items {
        let item = escape_html(item);
        let selected = if escape_html(chosen) == item { " selected" } else { "" };
        let _ = write!(html, "<option value=\"{item}\"{selected}>{item}</option>");
    }
    html.push_str("</select>");
}

/// Whole page: the form pre-filled from `form`, one quick-predict button per
/// location, and the result block when `form` holds an outcome.
pub fn render_page(options: &FormOptions, form: &ParkingForm) -> String {
    let mut html = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    let _ = write!(
        html,
        "<title>Parking Availability Predictor</title><style>{PAGE_STYLE}</style></head><body>"
    );
    html.push_str("<h1>Parking Availability Predictor</h1><form method=\"post\" action=\"/\">");
    select(&mut html, "day", "Day:", "Select a day", &options.days, &form.day);
    select(&mut html, "time", "Time:", "Select a time", &options.times, &form.time);
    select(
        &mut html,
        "location",
        "Parking Location:",
        "Select a location",
        &options.locations,
        &form.location,
    );
    html.push_str("<button type=\"submit\">Predict</button></form><div class=\"quick\">");
    for location in &options.locations {
        let location = escape_html(location);
        let _ = write!(
            html,
            "<form method=\"post\" action=\"/\"><input type=\"hidden\" name=\"location\" value=\"{location}\"><button type=\"submit\">{location}</button></form>"
        );
    }
    html.push_str("</div>");
    if let Some(outcome) = &form.result {
        html.push_str(&render(outcome).to_html());
    }
    html.push_str("</body></html>");
    html
}
