//! HTML rendering for the site pages.
//!
//! Every handler builds a fresh head model and mounts the consent
//! controllers against it, so script presence is derived from the
//! stored choice on every page load.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::consent::{cookie_categories, ConsentBanner, DocumentHead, SettingsPage};
use crate::content::workflow::WorkflowVersion;
use crate::content::{Project, SiteContent};
use crate::server::ServerState;

pub(crate) async fn home(State(state): State<Arc<ServerState>>) -> Html<String> {
    let head = DocumentHead::new();
    let banner = ConsentBanner::mount(&state.store, &state.loader, &head);
    Html(render_home(&state.content, &head, banner.is_visible()))
}

pub(crate) async fn imprint(State(state): State<Arc<ServerState>>) -> Html<String> {
    let head = DocumentHead::new();
    let banner = ConsentBanner::mount(&state.store, &state.loader, &head);
    Html(render_imprint(&head, banner.is_visible()))
}

#[derive(Debug, Deserialize)]
pub(crate) struct SettingsQuery {
    saved: Option<String>,
}

pub(crate) async fn cookie_settings(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SettingsQuery>,
) -> Html<String> {
    let head = DocumentHead::new();
    let page = SettingsPage::mount(&state.store, &state.loader, &head);
    Html(render_settings(&head, &page, query.saved.is_some()))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_head_scripts(head: &DocumentHead) -> String {
    head.tags()
        .iter()
        .map(|tag| {
            format!(
                "<script src=\"{}\" data-website-id=\"{}\"{}></script>\n",
                escape(&tag.src),
                escape(&tag.website_id),
                if tag.defer { " defer" } else { "" }
            )
        })
        .collect()
}

fn layout(title: &str, head: &DocumentHead, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         {scripts}\
         </head>\n\
         <body>\n\
         <header><nav><a href=\"/\">Lichtwerk Labs</a></nav></header>\n\
         {body}\n\
         {footer}\
         </body>\n\
         </html>\n",
        title = escape(title),
        scripts = render_head_scripts(head),
        body = body,
        footer = render_footer(),
    )
}

fn render_footer() -> String {
    // Other open views reconcile by re-rendering when a change signal
    // arrives; keep-alive comments do not trigger onmessage.
    "<footer>\n\
     <p>We test in production so you don't have to.</p>\n\
     <a href=\"/imprint\">Imprint</a> | <a href=\"/cookie-settings\">Cookie Settings</a>\n\
     </footer>\n\
     <script>\n\
     const feed = new EventSource('/api/events');\n\
     feed.onmessage = () => window.location.reload();\n\
     </script>\n"
        .to_string()
}

fn render_banner() -> String {
    "<div role=\"dialog\" aria-label=\"Cookie settings\" class=\"cookie-banner\">\n\
     <h3>Cookie settings</h3>\n\
     <p>We use cookies to analyze and improve how the site is used. Analytics \
     cookies help us understand how visitors interact with our pages. Details \
     are in our <a href=\"/imprint#datenschutz\">privacy policy</a>.</p>\n\
     <form method=\"post\" action=\"/consent/reject\"><button type=\"submit\">Essential only</button></form>\n\
     <form method=\"post\" action=\"/consent/accept\"><button type=\"submit\">Accept all</button></form>\n\
     </div>\n"
        .to_string()
}

fn render_project(project: &Project) -> String {
    let mut links = String::new();
    if let Some(url) = project.app_url {
        links.push_str(&format!("<a href=\"{}\">Visit app</a>\n", escape(url)));
    }
    if let Some(url) = project.repo_url {
        links.push_str(&format!("<a href=\"{}\">View on GitHub</a>\n", escape(url)));
    }
    format!(
        "<article>\n\
         <h3>{}</h3>\n\
         <p><strong>Problem</strong> {}</p>\n\
         <p><strong>Solution</strong> {}</p>\n\
         <p><strong>Tech stack</strong> {}</p>\n\
         {links}\
         </article>\n",
        escape(project.title),
        escape(project.problem),
        escape(project.solution),
        escape(&project.tech_stack.join(", ")),
    )
}

fn render_workflow_version(version: &WorkflowVersion) -> String {
    let phases: String = version
        .phases
        .iter()
        .map(|phase| {
            format!(
                "<li>{} ({}% assisted) — {}</li>\n",
                escape(phase.name),
                phase.ai_coverage,
                escape(phase.description)
            )
        })
        .collect();
    format!(
        "<article>\n\
         <h3>{} — {}% efficiency, {} per feature</h3>\n\
         <p>{}</p>\n\
         <ul>\n{phases}</ul>\n\
         </article>\n",
        escape(version.name),
        version.efficiency,
        escape(version.time_per_feature),
        escape(version.description),
    )
}

fn render_home(content: &SiteContent, head: &DocumentHead, banner_visible: bool) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<section id=\"hero\">\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        escape(content.hero.title),
        escape(content.hero.tagline)
    ));

    body.push_str("<section id=\"strategy\">\n<h2>How we work</h2>\n");
    for pillar in &content.strategy {
        body.push_str(&format!(
            "<article><h3>{}</h3><p>{}</p></article>\n",
            escape(pillar.title),
            escape(pillar.description)
        ));
    }
    body.push_str("</section>\n");

    body.push_str("<section id=\"projects\">\n<h2>Projects</h2>\n");
    for project in &content.projects {
        body.push_str(&render_project(project));
    }
    body.push_str("</section>\n");

    body.push_str("<section id=\"stack\">\n<h2>Tech stack</h2>\n<ul>\n");
    for item in &content.stack {
        body.push_str(&format!(
            "<li><strong>{}</strong> — {}</li>\n",
            escape(item.title),
            escape(item.description)
        ));
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str("<section id=\"workflow\">\n<h2>Workflow evolution</h2>\n");
    for version in &content.workflow.versions {
        body.push_str(&render_workflow_version(version));
    }
    body.push_str("<h3>Agents</h3>\n<ul>\n");
    for agent in &content.workflow.agents {
        body.push_str(&format!(
            "<li>{} — {}</li>\n",
            escape(agent.name),
            escape(agent.role)
        ));
    }
    body.push_str("</ul>\n<h3>MCP servers</h3>\n<ul>\n");
    for server in &content.workflow.mcp_servers {
        body.push_str(&format!(
            "<li>{} — {}</li>\n",
            escape(server.name),
            escape(server.purpose)
        ));
    }
    body.push_str("</ul>\n<h3>Git hooks</h3>\n<ul>\n");
    for hook in &content.workflow.git_hooks {
        body.push_str(&format!(
            "<li>{} ({}) — {}</li>\n",
            escape(hook.name),
            escape(hook.trigger),
            escape(hook.impact)
        ));
    }
    body.push_str("</ul>\n<h3>Impact</h3>\n<ul>\n");
    for metric in &content.workflow.metrics {
        body.push_str(&format!(
            "<li>{}: {}</li>\n",
            escape(metric.label),
            escape(metric.change)
        ));
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str(&format!(
        "<section id=\"founder\">\n<h2>{}</h2>\n<p>{}</p>\n<p>{}</p>\n</section>\n",
        escape(content.founder.name),
        escape(content.founder.role),
        escape(content.founder.bio)
    ));

    body.push_str("<section id=\"contact\">\n<h2>Contact</h2>\n<ul>\n");
    for link in &content.contact {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(link.href),
            escape(link.label)
        ));
    }
    body.push_str("</ul>\n</section>\n");

    if banner_visible {
        body.push_str(&render_banner());
    }

    layout("Lichtwerk Labs", head, &body)
}

fn render_imprint(head: &DocumentHead, banner_visible: bool) -> String {
    let mut body = String::from(
        "<section id=\"impressum\">\n\
         <h1>Imprint</h1>\n\
         <p>Lichtwerk Labs, R. Weber, Hamburg, Germany. \
         Contact: <a href=\"mailto:hello@lichtwerk.dev\">hello@lichtwerk.dev</a></p>\n\
         </section>\n\
         <section id=\"haftung\">\n\
         <h2>Liability</h2>\n\
         <p>Content is provided without warranty; external links are the \
         responsibility of their operators.</p>\n\
         </section>\n\
         <section id=\"datenschutz\">\n\
         <h2>Privacy</h2>\n\
         <p>This site requires no accounts and stores no personal data beyond \
         a single cookie-consent entry in your browser, kept for 12 months. \
         Analytics run only after explicit consent, self-hosted, with \
         anonymized data. You can change or withdraw your choice at any time \
         on the <a href=\"/cookie-settings\">cookie settings</a> page.</p>\n\
         </section>\n",
    );
    if banner_visible {
        body.push_str(&render_banner());
    }
    layout("Imprint — Lichtwerk Labs", head, &body)
}

fn render_settings(head: &DocumentHead, page: &SettingsPage, show_ack: bool) -> String {
    let mut body = String::from(
        "<section id=\"cookie-settings\">\n\
         <h1>Cookie settings</h1>\n\
         <p>Manage your cookie preferences here. This site requires no \
         accounts and stores no personal data beyond the cookies described \
         below. Your choice is kept by your browser for 12 months and can be \
         changed or withdrawn on this page at any time.</p>\n",
    );

    let mut categories = String::new();
    for category in cookie_categories() {
        let control = if category.always_on {
            "<input type=\"checkbox\" checked disabled aria-label=\"Essential cookies\"> Always active".to_string()
        } else {
            format!(
                "<input type=\"checkbox\" name=\"analytics\"{} aria-label=\"Analytics cookies\"> Optional",
                if page.analytics_enabled() { " checked" } else { "" }
            )
        };
        categories.push_str(&format!(
            "<fieldset id=\"{}\">\n<legend>{}</legend>\n<p>{}</p>\n<label>{control}</label>\n</fieldset>\n",
            category.id,
            escape(category.name),
            escape(category.description),
        ));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"/cookie-settings\">\n\
         {categories}\
         <button type=\"submit\">Save settings</button>\n\
         </form>\n"
    ));

    if show_ack {
        body.push_str("<p role=\"status\" class=\"save-ack\">Your settings have been saved.</p>\n");
    }

    body.push_str(
        "<p>Details are in our <a href=\"/imprint#datenschutz\">privacy policy</a>. \
         For questions about your data contact \
         <a href=\"mailto:hello@lichtwerk.dev\">hello@lichtwerk.dev</a>.</p>\n\
         </section>\n",
    );

    layout("Cookie settings — Lichtwerk Labs", head, &body)
}
