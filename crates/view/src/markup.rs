//! Renders profile content into per-section SVG markup.
//!
//! The markup is the repo's stand-in for a DOM: each section renders to a
//! self-contained SVG document with an opaque white background, laid out
//! top-to-bottom with a simple cursor. The resume view is the rasterization
//! input for the document exporter.

use chrono::Datelike;
use folio_types::{Profile, Section};

/// Logical view width in CSS-like pixels. Height grows with content.
pub const VIEW_WIDTH: f32 = 800.0;

const MARGIN: f32 = 48.0;

/// Render the markup for one section of the site.
pub fn section_markup(profile: &Profile, section: Section) -> String {
    match section {
        Section::Home => home_view(profile),
        Section::About => about_view(profile),
        Section::Projects => projects_view(profile),
        Section::Resume => resume_view(profile),
        Section::Contact => contact_view(profile),
    }
}

/// Cursor-based SVG assembly: text lines are pushed top-to-bottom and the
/// final document height is whatever the cursor reached.
struct ViewBuilder {
    body: String,
    y: f32,
}

impl ViewBuilder {
    fn new() -> Self {
        Self {
            body: String::new(),
            y: MARGIN,
        }
    }

    fn line(&mut self, text: &str, size: f32, color: &str, weight: &str) {
        self.y += size * 1.5;
        self.body.push_str(&format!(
            "<text x=\"{x}\" y=\"{y}\" font-family=\"sans-serif\" font-size=\"{size}\" \
             fill=\"{color}\" font-weight=\"{weight}\">{text}</text>\n",
            x = MARGIN,
            y = self.y,
            text = escape_xml(text),
        ));
    }

    fn heading(&mut self, text: &str) {
        self.gap(10.0);
        self.line(text, 22.0, "#0f172a", "bold");
        self.rule();
    }

    fn title(&mut self, text: &str) {
        self.line(text, 32.0, "#0f172a", "bold");
    }

    fn subheading(&mut self, text: &str) {
        self.gap(6.0);
        self.line(text, 15.0, "#0f172a", "bold");
    }

    fn paragraph(&mut self, text: &str) {
        for wrapped in wrap_text(text, 92) {
            self.line(&wrapped, 13.0, "#334155", "normal");
        }
    }

    fn detail(&mut self, text: &str) {
        self.line(text, 12.0, "#475569", "normal");
    }

    fn bullet(&mut self, text: &str) {
        let mut lines = wrap_text(text, 88).into_iter();
        if let Some(first) = lines.next() {
            self.line(&format!("\u{2022} {first}"), 12.0, "#475569", "normal");
        }
        for rest in lines {
            self.line(&format!("  {rest}"), 12.0, "#475569", "normal");
        }
    }

    fn rule(&mut self) {
        self.y += 8.0;
        self.body.push_str(&format!(
            "<line x1=\"{x1}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"#cbd5e1\" stroke-width=\"1\"/>\n",
            x1 = MARGIN,
            x2 = VIEW_WIDTH - MARGIN,
            y = self.y,
        ));
    }

    fn gap(&mut self, dy: f32) {
        self.y += dy;
    }

    fn finish(self) -> String {
        let height = (self.y + MARGIN).ceil();
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n\
             {body}</svg>",
            width = VIEW_WIDTH,
            body = self.body,
        )
    }
}

fn home_view(profile: &Profile) -> String {
    let mut view = ViewBuilder::new();
    view.detail("Hello, I'm");
    view.title(&profile.name);
    view.line(&profile.title, 18.0, "#0284c7", "normal");
    if !profile.tagline.is_empty() {
        view.gap(4.0);
        view.paragraph(&profile.tagline);
    }
    view.finish()
}

fn about_view(profile: &Profile) -> String {
    let mut view = ViewBuilder::new();
    view.heading("About Me");
    view.paragraph(&profile.summary);

    if !profile.skills.is_empty() {
        view.heading("Technical Skills");
        push_skills(&mut view, profile);
    }
    push_education(&mut view, profile);
    view.finish()
}

fn projects_view(profile: &Profile) -> String {
    let mut view = ViewBuilder::new();
    view.heading("Projects & Experience");
    push_projects(&mut view, profile);
    push_experience(&mut view, profile);
    view.finish()
}

fn contact_view(profile: &Profile) -> String {
    let mut view = ViewBuilder::new();
    view.heading("Get In Touch");
    view.paragraph(
        "I'm currently looking for new opportunities. If you have a project or a role \
         that you think I'd be a good fit for, please don't hesitate to reach out.",
    );
    view.gap(8.0);
    view.detail(&profile.contact.email);
    if let Some(phone) = &profile.contact.phone {
        view.detail(phone);
    }
    if let Some(linkedin) = &profile.contact.linkedin {
        view.detail(linkedin);
    }
    view.gap(16.0);
    let year = chrono::Utc::now().year();
    view.detail(&format!(
        "\u{00a9} {year} {}. All Rights Reserved.",
        profile.name
    ));
    view.finish()
}

/// The full resume view: every profile section in print order.
fn resume_view(profile: &Profile) -> String {
    let mut view = ViewBuilder::new();
    view.title(&profile.name);
    view.line(&profile.title, 16.0, "#0284c7", "normal");
    let mut contact_line = profile.contact.email.clone();
    if let Some(phone) = &profile.contact.phone {
        contact_line.push_str(&format!("  |  {phone}"));
    }
    if let Some(linkedin) = &profile.contact.linkedin {
        contact_line.push_str(&format!("  |  {linkedin}"));
    }
    if !contact_line.is_empty() {
        view.detail(&contact_line);
    }

    view.heading("Professional Summary");
    view.paragraph(&profile.summary);

    if !profile.skills.is_empty() {
        view.heading("Technical Skills");
        push_skills(&mut view, profile);
    }

    push_experience(&mut view, profile);
    push_projects(&mut view, profile);
    push_education(&mut view, profile);
    view.finish()
}

fn push_skills(view: &mut ViewBuilder, profile: &Profile) {
    for category in &profile.skills {
        view.bullet(&format!(
            "{}: {}",
            category.title,
            category.skills.join(", ")
        ));
    }
}

fn push_experience(view: &mut ViewBuilder, profile: &Profile) {
    if profile.experience.is_empty() {
        return;
    }
    view.heading("Experience");
    for entry in &profile.experience {
        view.subheading(&format!("{} ({})", entry.role, entry.date));
        view.detail(&format!("{}, {}", entry.company, entry.location));
        for point in &entry.points {
            view.bullet(point);
        }
    }
}

fn push_projects(view: &mut ViewBuilder, profile: &Profile) {
    if profile.projects.is_empty() {
        return;
    }
    view.heading("Projects");
    for project in &profile.projects {
        view.subheading(&format!("{} ({})", project.title, project.date));
        if !project.tech.is_empty() {
            view.detail(&project.tech.join(", "));
        }
        view.paragraph(&project.description);
    }
}

fn push_education(view: &mut ViewBuilder, profile: &Profile) {
    if !profile.education.is_empty() {
        view.heading("Education");
        for entry in &profile.education {
            view.subheading(&format!("{} ({})", entry.degree, entry.date));
            view.detail(&entry.institution);
            if let Some(cgpa) = &entry.cgpa {
                view.detail(&format!("CGPA: {cgpa}"));
            }
        }
    }
    if !profile.certifications.is_empty() {
        view.heading("Certifications");
        for cert in &profile.certifications {
            view.bullet(&format!("{} \u{2014} {}", cert.name, cert.issuer));
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Greedy word wrap by character count. Words longer than `max_chars` get a
/// line of their own rather than being split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Certification, Contact, SkillCategory};

    fn sample_profile() -> Profile {
        Profile {
            name: "Subject Name".to_string(),
            title: "Full Stack Developer".to_string(),
            tagline: "Building scalable services.".to_string(),
            summary: "A developer with <strong> opinions & a summary long enough to wrap \
                      across more than one rendered line in the resume view output."
                .to_string(),
            skills: vec![SkillCategory {
                title: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "Java".to_string()],
            }],
            certifications: vec![Certification {
                name: "Cloud Practitioner".to_string(),
                issuer: "Some Foundation".to_string(),
            }],
            contact: Contact {
                email: "subject@example.com".to_string(),
                phone: Some("+1 555 0100".to_string()),
                ..Contact::default()
            },
            ..Profile::default()
        }
    }

    #[test]
    fn test_every_section_renders_well_formed_svg() {
        let profile = sample_profile();
        for section in Section::ALL {
            let svg = section_markup(&profile, section);
            assert!(svg.starts_with("<svg"), "{section}: missing svg root");
            assert!(svg.ends_with("</svg>"), "{section}: unterminated svg");
            assert!(
                svg.contains("fill=\"#ffffff\""),
                "{section}: missing white background"
            );
        }
    }

    #[test]
    fn test_resume_view_contains_all_content_blocks() {
        let svg = section_markup(&sample_profile(), Section::Resume);
        assert!(svg.contains("Subject Name"));
        assert!(svg.contains("Professional Summary"));
        assert!(svg.contains("Technical Skills"));
        assert!(svg.contains("Certifications"));
        assert!(svg.contains("subject@example.com"));
    }

    #[test]
    fn test_markup_escapes_reserved_characters() {
        let svg = section_markup(&sample_profile(), Section::Resume);
        assert!(svg.contains("&lt;strong&gt;"));
        assert!(svg.contains("opinions &amp;"));
        assert!(!svg.contains("<strong>"));
    }

    #[test]
    fn test_wrap_text_respects_limit() {
        let lines = wrap_text("one two three four five six seven", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 10, "line too long: {line}");
        }
    }

    #[test]
    fn test_wrap_text_keeps_overlong_words_whole() {
        let lines = wrap_text("short incomprehensibilities short", 10);
        assert!(lines.contains(&"incomprehensibilities".to_string()));
    }

    #[test]
    fn test_view_height_grows_with_content() {
        let profile = sample_profile();
        let mut long = profile.clone();
        for i in 0..20 {
            long.certifications.push(Certification {
                name: format!("Certification {i}"),
                issuer: "Issuer".to_string(),
            });
        }
        let short_svg = section_markup(&profile, Section::Resume);
        let long_svg = section_markup(&long, Section::Resume);
        assert!(long_svg.len() > short_svg.len());
    }
}
