//! The fixed list of technologies scattered across the hero.

use once_cell::sync::Lazy;

/// Which vector graphic to draw for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    React,
    NextJs,
    Google,
    AppStore,
    Firebase,
    Prisma,
    MySql,
    Linux,
    Database,
    Aws,
    TypeScript,
    Tailwind,
}

/// A technology shown on the hero.
#[derive(Debug, PartialEq, Eq)]
pub struct TechIcon {
    pub glyph: Glyph,
    /// Display label. Unique across the registry; doubles as render key and selection identity.
    pub name: &'static str,
    /// English reference copy of the experience blurb.
    pub experience: &'static str,
}

impl TechIcon {
    /// Fluent message id carrying the localized experience blurb,
    /// e.g. `Google Cloud` -> `experience-google-cloud`.
    pub fn message_id(&self) -> String {
        let slug = self
            .name
            .chars()
            .map(|c| match c {
                'a'..='z' | '0'..='9' => c,
                'A'..='Z' => c.to_ascii_lowercase(),
                _ => '-',
            })
            .collect::<String>()
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("experience-{slug}")
    }

    /// Experience blurb in the active locale.
    pub fn experience_text(&self) -> String {
        crate::i18n::message_or(&self.message_id(), self.experience)
    }
}

static TECH_ICONS: Lazy<Vec<TechIcon>> = Lazy::new(|| {
    vec![
        TechIcon {
            glyph: Glyph::React,
            name: "React",
            experience: "Advanced: 5+ years of experience in building complex web applications.",
        },
        TechIcon {
            glyph: Glyph::NextJs,
            name: "Next.js",
            experience: "Intermediate: 3 years of experience in server-side rendering and static site generation.",
        },
        TechIcon {
            glyph: Glyph::Google,
            name: "Google Cloud",
            experience: "Intermediate: Familiar with GCP services for 2 years, including App Engine and Cloud Functions.",
        },
        TechIcon {
            glyph: Glyph::AppStore,
            name: "App Store",
            experience: "Advanced: Published multiple iOS apps over the last 4 years.",
        },
        TechIcon {
            glyph: Glyph::Firebase,
            name: "Firebase",
            experience: "Advanced: Extensive use in real-time databases and authentication for 4+ years.",
        },
        TechIcon {
            glyph: Glyph::Prisma,
            name: "Prisma",
            experience: "Intermediate: 2 years of experience in database ORM and migrations.",
        },
        TechIcon {
            glyph: Glyph::MySql,
            name: "MySQL",
            experience: "Advanced: 6+ years of experience in database design and optimization.",
        },
        TechIcon {
            glyph: Glyph::Linux,
            name: "Linux",
            experience: "Intermediate: 4 years of experience in server management and bash scripting.",
        },
        TechIcon {
            glyph: Glyph::Database,
            name: "Databases",
            experience: "Advanced: Proficient in various database systems including NoSQL for 7+ years.",
        },
        TechIcon {
            glyph: Glyph::Aws,
            name: "AWS",
            experience: "Intermediate: 3 years of experience with various AWS services.",
        },
        TechIcon {
            glyph: Glyph::TypeScript,
            name: "TypeScript",
            experience: "Advanced: 4+ years of experience in large-scale TypeScript projects.",
        },
        TechIcon {
            glyph: Glyph::Tailwind,
            name: "Tailwind",
            experience: "Advanced: 3+ years of using Tailwind CSS for rapid UI development.",
        },
    ]
});

/// All icons, in display order. Built on first access and never mutated.
pub fn tech_icons() -> &'static [TechIcon] {
    TECH_ICONS.as_slice()
}

/// Look up an icon by its display name.
pub fn find(name: &str) -> Option<&'static TechIcon> {
    tech_icons().iter().find(|icon| icon.name == name)
}
