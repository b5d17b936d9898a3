//! Server-rendered landing page.
//!
//! Sections are rendered in a fixed order: hero, how it works, screenshots,
//! why desktop, download. Motion is added by `landing.js` through the
//! `data-*` hooks emitted here.

use maud::{DOCTYPE, Markup, html};

use crate::{
    animation::AnimationSettings,
    config::LandingConfig,
    content::{
        AUTHOR_NAME, AUTHOR_URL, FEATURES, Icon, PRODUCT_NAME, RATIONALE, REFERENCES, SCREENSHOTS,
        TAGLINE,
    },
};

pub const RELEASE_ENDPOINT: &str = "/api/releases?type=latest";
pub const SECTION_ORDER: [&str; 5] = [
    "hero",
    "how-it-works",
    "screenshots",
    "why-desktop",
    "download",
];

pub fn render_page(
    config: &LandingConfig,
    settings: &AnimationSettings,
) -> Result<Markup, serde_json::Error> {
    let settings_json = serde_json::to_string(settings)?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PRODUCT_NAME) " | " (TAGLINE) }
                meta name="description" content=(TAGLINE);
                link rel="stylesheet" href="/static/landing.css";
            }
            body
                data-settings=(settings_json)
                data-release-endpoint=(RELEASE_ENDPOINT)
                data-release-known[config.direct_download_url.is_some()]
            {
                main.page {
                    (hero(config))
                    (how_it_works())
                    (screenshots())
                    (why_desktop())
                    (download(config))
                }
                script src="/static/landing.js" defer {}
            }
        }
    })
}

fn hero(config: &LandingConfig) -> Markup {
    html! {
        section.hero #hero data-section="hero" {
            div.trunk-background #trunk-background aria-hidden="true" {
                canvas #trunk-canvas {}
            }
            div.corner-link.reveal {
                a.button.outline href=(config.project_url) target="_blank" rel="noopener noreferrer" {
                    (github_mark()) "GitHub"
                }
            }
            div.hero-content {
                h1.title.reveal { (PRODUCT_NAME) }
                p.tagline.reveal { (TAGLINE) }
                div.hero-actions.reveal data-chaos-hover {
                    (download_button(config, "Download for Mac", true))
                }
            }
        }
    }
}

/// Download link. Without a known URL it renders disabled until the browser
/// resolves one through the releases endpoint.
fn download_button(config: &LandingConfig, label: &str, outline: bool) -> Markup {
    let url = config.direct_download_url.as_deref();
    html! {
        a.button.large.download-link.outline[outline]
            href=[url]
            target="_blank"
            rel="noopener noreferrer"
            aria-disabled=[url.is_none().then_some("true")]
            data-download-link
            data-label=(label)
        {
            span.icon aria-hidden="true" { "⬇" }
            span.label {
                @if url.is_some() { (label) } @else { "Download coming soon" }
            }
        }
    }
}

fn parallax_section(id: &str, background_class: Option<&str>, content: Markup) -> Markup {
    let background = match background_class {
        Some(extra) => format!("parallax-background {extra}"),
        None => "parallax-background".to_string(),
    };
    html! {
        section.parallax-section id=(id) data-section=(id) data-parallax {
            div.section-inner { (content) }
            div class=(background) aria-hidden="true" data-parallax-background {}
            div.section-fade aria-hidden="true" {}
        }
    }
}

fn section_heading(title: &str, lead: &str) -> Markup {
    html! {
        h2.section-title.reveal { (title) }
        p.section-lead.reveal { (lead) }
    }
}

fn icon_badge(icon: Icon) -> Markup {
    html! {
        div.icon-badge.pop aria-hidden="true" { (icon.glyph()) }
    }
}

fn how_it_works() -> Markup {
    parallax_section(
        "how-it-works",
        None,
        html! {
            div.container {
                (section_heading(
                    "How it works",
                    "Native Pomodoro timer for macOS. Statistics, history and notifications without taking you out of the flow.",
                ))
                div.grid.three {
                    @for (index, feature) in FEATURES.iter().enumerate() {
                        article.card.reveal style=(stagger(index)) {
                            (icon_badge(feature.icon))
                            h3.card-title { (feature.title) }
                            p.card-description { (feature.description) }
                        }
                    }
                }
            }
        },
    )
}

fn screenshots() -> Markup {
    parallax_section(
        "screenshots",
        None,
        html! {
            div.container {
                (section_heading(
                    &format!("See {PRODUCT_NAME} in action"),
                    "A quick look at the main screens of the app: focus timer, statistics and history.",
                ))
                div.grid.three {
                    @for (index, shot) in SCREENSHOTS.iter().enumerate() {
                        figure.screenshot.reveal style=(stagger(index)) {
                            img src={ "/assets/" (shot.src) }
                                alt=(shot.alt)
                                width="1200"
                                height="800"
                                loading=(if index == 0 { "eager" } else { "lazy" });
                            figcaption {
                                h3 { (shot.title) }
                                p { (shot.description) }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn why_desktop() -> Markup {
    parallax_section(
        "why-desktop",
        Some("gradient-secondary"),
        html! {
            div.container {
                (section_heading(
                    "Why not a mobile app?",
                    &format!("{PRODUCT_NAME} was purposefully made for Mac. Keeping your phone away is part of the design."),
                ))
                div.grid.two {
                    @for (index, item) in RATIONALE.iter().enumerate() {
                        article.card.reveal.slide-in
                            data-from=(if index == 0 { "left" } else { "right" })
                            style=(stagger(index + 1))
                        {
                            (icon_badge(item.icon))
                            h3.card-title { (item.title) }
                            p.card-description {
                                (item.body.0) strong { (item.body.1) } (item.body.2)
                            }
                        }
                    }
                }
                div.references.reveal {
                    h3 { "References" }
                    ul {
                        @for reference in REFERENCES {
                            li {
                                a href=(reference.url) target="_blank" rel="noopener noreferrer" {
                                    (reference.label)
                                }
                                " · \u{201c}" (reference.title) "\u{201d}"
                                @if let Some(venue) = reference.venue {
                                    ", " em { (venue) }
                                }
                                @if let Some(note) = reference.note {
                                    " (" (note) ")"
                                }
                                "."
                            }
                        }
                    }
                }
            }
        },
    )
}

fn download(config: &LandingConfig) -> Markup {
    html! {
        section.download #download data-section="download" {
            h2.section-title.reveal { "Download " (PRODUCT_NAME) }
            p.section-lead.reveal {
                "macOS only. Drag the app to Applications after opening the DMG."
                span.latest-version #latest-version hidden {}
            }
            div.download-actions.reveal {
                (download_button(config, &format!("Download {PRODUCT_NAME} (DMG)"), false))
                a.button.large.outline href=(config.project_url) target="_blank" rel="noopener noreferrer" {
                    (github_mark()) "GitHub"
                }
            }
            div.install.reveal {
                p { "Or install from the terminal:" }
                (command_display(&config.install_command()))
            }
            footer.footer.reveal {
                "Made by "
                a href=(AUTHOR_URL) target="_blank" rel="noopener noreferrer" { (AUTHOR_NAME) }
                " · "
                a href=(config.project_url) target="_blank" rel="noopener noreferrer" { "GitHub" }
            }
        }
    }
}

/// Shell command with a copy-to-clipboard button.
pub fn command_display(command: &str) -> Markup {
    html! {
        div.command-display {
            code.command { (command) }
            button.copy-button type="button" aria-label="Copy command" data-copy=(command) {
                span.copy-icon aria-hidden="true" { "⧉" }
                span.copied-icon aria-hidden="true" { "✓" }
            }
        }
    }
}

fn github_mark() -> Markup {
    html! { span.icon aria-hidden="true" { "◐" } }
}

fn stagger(index: usize) -> String {
    format!("--reveal-delay: {}ms", 200 + index * 100)
}
