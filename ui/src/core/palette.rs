//! Brand colors for the scattered icons.

/// Color used for any name without a brand entry.
pub const FALLBACK_COLOR: &str = "white";

/// Brand color for an icon name. Total: unknown names get [`FALLBACK_COLOR`].
pub fn icon_color(name: &str) -> &'static str {
    match name {
        "React" => "#61DAFB",
        "Next.js" => "#000000",
        "Google Cloud" => "#4285F4",
        "App Store" => "#A2AAAD",
        "Firebase" => "#FFCA28",
        "Prisma" => "#2D3748",
        "MySQL" => "#4479A1",
        "Linux" => "#FCC624",
        "Databases" => "#00758F",
        "AWS" => "#FF9900",
        "TypeScript" => "#3178C6",
        "Tailwind" => "#06B6D4",
        _ => FALLBACK_COLOR,
    }
}
