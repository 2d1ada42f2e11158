//! Server-side HTML for the onboarding page.
//!
//! Presentation only: markup is kept minimal and every user-supplied value
//! goes through [`escape`].

use onboard_core::record::DraftRecord;
use onboard_core::services::ServiceKind;
use onboard_core::validation::Field;
use onboard_intake::controller::SUBMIT_LABEL_BUSY;
use onboard_intake::FormController;

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Client Onboarding Form</title>
<style>
body { font-family: sans-serif; margin: 0; padding: 2rem; }
.layout { display: flex; gap: 1.5rem; }
form { flex: 1; display: flex; flex-direction: column; gap: .5rem; }
label.block { display: block; font-weight: 600; }
input[type=text], input[type=email], input[type=number], input[type=date] { width: 100%; padding: .5rem; }
.field-error { color: #b91c1c; font-size: .875rem; margin: .25rem 0 0; }
.banner { padding: .75rem; border-radius: .5rem; }
.banner.success { background: #dcfce7; }
.banner.error { background: #fee2e2; }
.readout { flex: 1; background: #164e63; color: #fff; border-radius: .5rem; padding: 1rem; }
</style>
</head>
<body>
<h1>Client Onboarding Form</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the whole page for the controller's current state.
pub fn render_page(controller: &FormController) -> String {
    let draft = controller.draft();
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(PAGE_HEAD);

    if let Some(banner) = controller.banner() {
        let (class, role) = if banner.is_error() {
            ("error", "alert")
        } else {
            ("success", "status")
        };
        html.push_str(&format!(
            "<p class=\"banner {class}\" role=\"{role}\">{}</p>\n",
            escape(banner.message())
        ));
    }

    html.push_str("<section class=\"layout\">\n");
    html.push_str(&form_open());

    html.push_str(&text_input(controller, Field::FullName, "Full Name", "text", &draft.full_name));
    html.push_str(&text_input(controller, Field::Email, "Email", "email", &draft.email));
    html.push_str(&text_input(
        controller,
        Field::CompanyName,
        "Company Name",
        "text",
        &draft.company_name,
    ));
    html.push_str(&services_group(controller, draft));
    html.push_str(&text_input(
        controller,
        Field::BudgetUsd,
        "Budget (USD)",
        "number",
        &draft.budget_usd,
    ));
    html.push_str(&text_input(
        controller,
        Field::ProjectStartDate,
        "Project Start Date",
        "date",
        &draft.project_start_date,
    ));
    html.push_str(&terms_checkbox(controller, draft));

    let disabled = if controller.is_busy() { " disabled" } else { "" };
    html.push_str(&format!(
        "<button id=\"submit\" type=\"submit\"{disabled}>{}</button>\n</form>\n",
        controller.submit_label()
    ));

    html.push_str("<div class=\"readout\"><pre>");
    if let Some(readout) = controller.readout() {
        html.push_str(&escape(&readout));
    }
    html.push_str("</pre></div>\n</section>\n");

    html.push_str(PAGE_TAIL);
    html
}

/// Opening form tag. The button is disabled and relabelled client-side while
/// the POST is in flight; a second submit is swallowed.
fn form_open() -> String {
    format!(
        "<form method=\"post\" action=\"/\" onsubmit=\"var b=document.getElementById('submit');\
         if(b.disabled){{return false;}}b.disabled=true;b.textContent='{}';\">\n",
        escape(SUBMIT_LABEL_BUSY)
    )
}

fn field_error(controller: &FormController, field: Field) -> String {
    match controller.field_error(field) {
        Some(msg) => format!(
            "<p class=\"field-error\" id=\"{}-error\">{}</p>\n",
            field.as_str(),
            escape(msg)
        ),
        None => String::new(),
    }
}

fn text_input(
    controller: &FormController,
    field: Field,
    label: &str,
    input_type: &str,
    value: &str,
) -> String {
    let name = field.as_str();
    format!(
        "<div>\n<label class=\"block\" for=\"{name}\">{label}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"{input_type}\" value=\"{}\">\n{}</div>\n",
        escape(value),
        field_error(controller, field)
    )
}

fn services_group(controller: &FormController, draft: &DraftRecord) -> String {
    let mut out = String::from("<div>\n<span class=\"block\">Services Interested In</span>\n");
    for kind in ServiceKind::ALL {
        let checked = if draft.has_service(kind) { " checked" } else { "" };
        out.push_str(&format!(
            "<label class=\"block\"><input type=\"checkbox\" name=\"services\" value=\"{0}\"{checked}> {0}</label>\n",
            escape(kind.as_str())
        ));
    }
    out.push_str(&field_error(controller, Field::Services));
    out.push_str("</div>\n");
    out
}

fn terms_checkbox(controller: &FormController, draft: &DraftRecord) -> String {
    let checked = if draft.accept_terms { " checked" } else { "" };
    format!(
        "<div>\n<label><input type=\"checkbox\" name=\"acceptTerms\"{checked}> I accept the terms</label>\n{}</div>\n",
        field_error(controller, Field::AcceptTerms)
    )
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

#[cfg(test)]
mod tests {
    use onboard_intake::client::DEFAULT_TIMEOUT;
    use onboard_intake::IntakeClient;

    use super::*;

    fn controller() -> FormController {
        let client = IntakeClient::new("http://localhost:9/intake", DEFAULT_TIMEOUT).unwrap();
        FormController::new(client)
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn blank_page_has_every_field_and_no_errors() {
        let html = render_page(&controller());
        for field in Field::ALL {
            assert!(html.contains(&format!("name=\"{}\"", field.as_str())), "missing {field:?}");
        }
        assert!(!html.contains("field-error\""));
        assert!(html.contains(">Submit</button>"));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn form_disables_button_while_posting() {
        let html = render_page(&controller());
        assert!(html.contains("onsubmit=\""));
        assert!(html.contains("b.disabled=true;b.textContent='Submitting...';"));
        assert!(html.contains("if(b.disabled){return false;}"));
        assert!(html.contains("<button id=\"submit\" type=\"submit\">Submit</button>"));
    }

    #[test]
    fn draft_values_are_escaped() {
        let mut form = controller();
        form.set_full_name("<script>");
        let html = render_page(&form);
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn selected_services_are_checked() {
        let mut form = controller();
        form.toggle_service(ServiceKind::MobileApp, true);
        let html = render_page(&form);
        assert!(html.contains("value=\"Mobile App\" checked"));
        assert!(html.contains("value=\"Branding\">"));
    }
}
