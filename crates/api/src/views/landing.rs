//! Public landing page: hero, portfolio, about, contact, footer.

use chrono::Datelike;
use folio_core::message::ContactSubmission;
use folio_db::models::project::Project;

use super::{escape, layout, notices};
use crate::controllers::{Notice, PortfolioSection};

/// Shown in place of the grid when there is nothing to draw.
pub const EMPTY_STATE: &str = "No projects found. Add some from the admin page.";

/// Everything the landing page needs.
pub struct LandingView<'a> {
    pub portfolio: &'a PortfolioSection,
    pub contact: &'a ContactSubmission,
    pub contact_notice: Option<&'a Notice>,
    pub signed_in: bool,
}

pub fn render(view: &LandingView<'_>) -> String {
    let mut shown: Vec<&Notice> = Vec::new();
    shown.extend(view.portfolio.notice());
    shown.extend(view.contact_notice);

    let body = format!(
        "{header}\n{notices}\n<main>\n{hero}\n{portfolio}\n{about}\n{contact}\n</main>\n{footer}",
        header = layout::header(view.signed_in),
        notices = notices(&shown),
        hero = HERO,
        portfolio = portfolio_section(view.portfolio),
        about = about(),
        contact = contact(view.contact),
        footer = footer(chrono::Utc::now().year()),
    );
    layout::page("nova. | UX/UI Designer", &body)
}

fn portfolio_section(section: &PortfolioSection) -> String {
    format!(
        r#"<section id="portfolio" class="section section-muted" data-reveal>
<div class="section-intro">
<span class="eyebrow">Selected Projects</span>
<h2>Showcasing My Creative Process</h2>
<p>Each project represents a unique challenge and solution, demonstrating my approach to design thinking.</p>
</div>
{grid}
<noscript><p class="reveal-link"><a href="/?reveal=1#portfolio">Show projects</a></p></noscript>
</section>"#,
        grid = portfolio_grid(section),
    )
}

/// The grid container. Until the latch is set it carries the fragment URL
/// the client script swaps in once the section scrolls into view.
pub fn portfolio_grid(section: &PortfolioSection) -> String {
    let fragment = if section.is_revealed() {
        String::new()
    } else {
        r#" data-fragment="/sections/portfolio""#.to_string()
    };

    let inner = if section.list().is_loading() {
        r#"<div class="spinner" aria-label="Loading"></div>"#.to_string()
    } else {
        let items = section.visible_projects();
        if items.is_empty() {
            format!(r#"<p class="empty-state">{EMPTY_STATE}</p>"#)
        } else {
            items
                .iter()
                .enumerate()
                .map(|(index, project)| portfolio_item(index, project))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };

    format!(r#"<div class="portfolio-grid" id="portfolio-grid"{fragment}>{inner}</div>"#)
}

/// Body of `GET /sections/portfolio`: the grid, preceded by the load
/// failure notice when there is one.
pub fn portfolio_fragment(section: &PortfolioSection) -> String {
    let notice = section
        .notice()
        .map(|n| {
            format!(
                r#"<p class="notice notice-{}" role="alert">{}</p>"#,
                n.level.as_str(),
                escape(&n.message)
            )
        })
        .unwrap_or_default();
    format!("{notice}{}", portfolio_grid(section))
}

fn portfolio_item(index: usize, project: &Project) -> String {
    let featured = if index == 0 { " featured" } else { "" };
    format!(
        r#"<article class="portfolio-item{featured}" style="--delay:{delay}ms">
<img src="{src}" alt="{title}" loading="lazy">
<div class="overlay">
<p class="category">{category}</p>
<h3>{title}</h3>
<p>{description}</p>
<span class="more">View Project</span>
</div>
</article>"#,
        delay = index.min(4) * 150,
        src = escape(project.image_src()),
        title = escape(&project.title),
        category = escape(project.category.as_deref().unwrap_or_default()),
        description = escape(project.description.as_deref().unwrap_or_default()),
    )
}

const HERO: &str = r##"<section id="home" class="hero">
<div class="hero-copy">
<span class="eyebrow">UX/UI Designer</span>
<h1>Crafting intuitive digital experiences</h1>
<p>I'm a product designer focused on creating beautiful, functional interfaces that solve real problems.</p>
<div class="actions">
<a href="#portfolio" class="button">View Portfolio</a>
<a href="#contact" class="button button-outline">Get in Touch</a>
</div>
</div>
<div class="hero-image">
<img src="https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=2340" alt="Designer working on a project">
</div>
</section>"##;

const SKILLS: [(&str, &str); 4] = [
    (
        "UI Design",
        "Creating beautiful, intuitive interfaces that delight users and meet business goals.",
    ),
    (
        "UX Research",
        "Understanding user needs through research, interviews, and usability testing.",
    ),
    (
        "Brand Identity",
        "Crafting cohesive visual languages that communicate brand values.",
    ),
    (
        "Prototyping",
        "Building interactive prototypes to test and validate design solutions.",
    ),
];

fn about() -> String {
    let skills: String = SKILLS
        .iter()
        .map(|(title, description)| {
            format!(r#"<div class="skill"><h3>{title}</h3><p>{description}</p></div>"#)
        })
        .collect();
    format!(
        r#"<section id="about" class="section" data-reveal>
<div class="about-image">
<img src="https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?q=80&w=2340" alt="Designer workspace">
</div>
<div class="about-copy">
<span class="eyebrow">About Me</span>
<h2>Passionate about creating meaningful digital experiences</h2>
<p>I'm a UX/UI designer with 5+ years of experience creating user-centered digital products. My approach combines strategic thinking with creative problem-solving to deliver designs that are both beautiful and functional.</p>
<div class="skills">{skills}</div>
</div>
</section>"#
    )
}

fn contact(draft: &ContactSubmission) -> String {
    format!(
        r#"<section id="contact" class="section" data-reveal>
<div class="section-intro">
<span class="eyebrow">Get in Touch</span>
<h2>Let's start a conversation</h2>
<p>Have a project in mind or just want to chat? Feel free to reach out.</p>
</div>
<form class="card contact-form" method="post" action="/contact#contact" data-submit-once>
<label for="name">Your Name</label>
<input type="text" id="name" name="name" placeholder="John Doe" required value="{name}">
<label for="email">Your Email</label>
<input type="email" id="email" name="email" placeholder="john@example.com" required value="{email}">
<label for="message">Your Message</label>
<textarea id="message" name="message" rows="5" placeholder="Tell me about your project..." required>{message}</textarea>
<button type="submit" class="button" data-busy-label="Sending...">Send Message</button>
</form>
</section>"#,
        name = escape(&draft.name),
        email = escape(&draft.email),
        message = escape(&draft.message),
    )
}

fn footer(year: i32) -> String {
    format!(
        r##"<footer class="site-footer">
<div>
<a href="#home" class="brand">nova.</a>
<p>Crafting intuitive digital experiences</p>
</div>
<p class="legal">&copy; {year} Nova Design. All rights reserved.</p>
</footer>"##
    )
}
