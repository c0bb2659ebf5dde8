//! Renders a profile as a self-contained HTML page. Deterministic output,
//! no external assets, everything user-provided goes through `escape_html`.

use crate::domain::model::Profile;

pub fn render_page(profile: &Profile) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\" />");
    html.push_str(&format!(
        "<title>Astro Profile – {}</title>",
        escape_html(&profile.name)
    ));
    html.push_str(shared_styles());
    html.push_str("</head><body>");

    html.push_str("<header>");
    html.push_str(&format!("<h1>{}</h1>", escape_html(&profile.name)));
    html.push_str(&format!(
        "<p class=\"subtitle\">Born {} ({}) · {} years old · {}</p>",
        escape_html(&profile.dob),
        escape_html(&profile.weekday),
        profile.age,
        escape_html(&profile.zodiac)
    ));
    html.push_str("</header>");

    render_numbers(&mut html, profile);
    render_traits(&mut html, profile);
    render_narratives(&mut html, profile);

    html.push_str("</body></html>");
    html
}

fn render_numbers(html: &mut String, profile: &Profile) {
    html.push_str("<section class=\"numbers\">");
    number_card(html, "Life Path", profile.life_path, &profile.life_path_desc);
    number_card(html, "Destiny", profile.destiny, &profile.destiny_desc);
    number_card(html, "Lucky Number", profile.lucky_number, "");
    number_card(html, "Personal Year", profile.personal_year, "");
    html.push_str("</section>");
}

fn number_card(html: &mut String, label: &str, value: u32, description: &str) {
    html.push_str("<article class=\"card\">");
    html.push_str(&format!("<h3>{}</h3>", label));
    html.push_str(&format!("<p class=\"value\">{}</p>", value));
    if !description.is_empty() {
        html.push_str(&format!(
            "<p class=\"desc\">{}</p>",
            escape_html(description)
        ));
    }
    html.push_str("</article>");
}

fn render_traits(html: &mut String, profile: &Profile) {
    if profile.traits.is_empty() {
        return;
    }

    html.push_str("<section class=\"traits\"><h2>Traits</h2><dl>");
    // Sorted for stable output; the traits table is an arbitrary map.
    let mut keys: Vec<&String> = profile.traits.keys().collect();
    keys.sort();
    for key in keys {
        let rendered = match &profile.traits[key] {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        html.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>",
            escape_html(key),
            escape_html(&rendered)
        ));
    }
    html.push_str("</dl></section>");
}

fn render_narratives(html: &mut String, profile: &Profile) {
    html.push_str("<section class=\"narratives\">");
    narrative_block(html, "Future Prediction", &profile.future_prediction);
    narrative_block(html, "Remedies", &profile.remedies);
    narrative_block(html, "Marriage Life", &profile.marriage_life);
    html.push_str("</section>");
}

fn narrative_block(html: &mut String, title: &str, text: &str) {
    html.push_str("<div class=\"narrative\">");
    html.push_str(&format!("<h2>{}</h2>", title));
    html.push_str(&format!("<p>{}</p>", escape_html(text)));
    html.push_str("</div>");
}

fn shared_styles() -> &'static str {
    "<style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 2rem; color: #121212; background: #fff;}
        header { border-bottom: 1px solid #e0e0e0; margin-bottom: 1.5rem; padding-bottom: 1rem;}
        .subtitle { color: #555; }
        .numbers { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 1.5rem;}
        .numbers .card { border: 1px solid #e0e0e0; border-radius: 8px; padding: 0.75rem 1rem; min-width: 140px;}
        .card h3 { margin: 0; font-size: 0.9rem; color: #666; }
        .card .value { font-size: 1.8rem; margin: 0.25rem 0; }
        .card .desc { font-size: 0.85rem; color: #444; margin: 0; }
        .traits dt { font-weight: 600; margin-top: 0.5rem; }
        .traits dd { margin: 0; color: #444; }
        .narrative { background: #f8f8f8; padding: 1rem; border-radius: 8px; margin-top: 0.75rem; }
        .narrative h2 { margin-top: 0; font-size: 1.05rem; }
    </style>"
}

fn escape_html(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '&' => "&amp;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => ch.to_string(),
        })
        .collect::<String>()
}
