use eframe::egui::{RichText, Ui};

// ---------------------------------------------------------------------------
// Minimal Markdown view for filter reports
// ---------------------------------------------------------------------------
//
// Reports only use `### ` headings, `- ` bullets, `**bold**` and `code`
// spans, so this handles exactly those.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Strong,
    Code,
}

/// Split one line into styled runs. Delimiters are dropped; an unclosed
/// delimiter styles the rest of the line.
pub fn inline_spans(line: &str) -> Vec<(String, SpanStyle)> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut strong = false;
    let mut code = false;
    let mut rest = line;

    let style = |strong: bool, code: bool| {
        if code {
            SpanStyle::Code
        } else if strong {
            SpanStyle::Strong
        } else {
            SpanStyle::Plain
        }
    };

    while let Some(c) = rest.chars().next() {
        let toggles_strong = !code && rest.starts_with("**");
        let toggles_code = c == '`';
        if toggles_strong || toggles_code {
            if !current.is_empty() {
                spans.push((std::mem::take(&mut current), style(strong, code)));
            }
            if toggles_strong {
                strong = !strong;
                rest = &rest[2..];
            } else {
                code = !code;
                rest = &rest[1..];
            }
            continue;
        }
        current.push(c);
        rest = &rest[c.len_utf8()..];
    }
    if !current.is_empty() {
        spans.push((current, style(strong, code)));
    }
    spans
}

/// Render a report produced by `data::report`.
pub fn show(ui: &mut Ui, text: &str) {
    for line in text.lines() {
        if let Some(heading) = line.strip_prefix("### ") {
            ui.heading(heading);
            continue;
        }
        if line.trim().is_empty() {
            ui.add_space(4.0);
            continue;
        }
        let (bullet, body) = match line.strip_prefix("- ") {
            Some(body) => (true, body),
            None => (false, line),
        };
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            if bullet {
                ui.label("• ");
            }
            for (text, style) in inline_spans(body) {
                let rich = RichText::new(text);
                ui.label(match style {
                    SpanStyle::Plain => rich,
                    SpanStyle::Strong => rich.strong(),
                    SpanStyle::Code => rich.code(),
                });
            }
        });
    }
}
