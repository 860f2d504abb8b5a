use tracing::debug;

/// What a control shows: a themed icon or a literal markup label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    Icon(String),
    Markup(String),
}

/// Answers whether the active icon theme can draw a given icon name.
pub trait IconResolver {
    fn icon_exists(&self, name: &str) -> bool;
}

impl Glyph {
    /// Resolve an icon name against the theme once. Missing icons fall back to
    /// `fallback` markup, or to the icon name itself when no fallback is given.
    pub fn resolve(icon: &str, fallback: Option<&str>, icons: &dyn IconResolver) -> Glyph {
        if !icon.is_empty() && icons.icon_exists(icon) {
            return Glyph::Icon(icon.to_string());
        }

        let markup = fallback.filter(|markup| !markup.is_empty()).unwrap_or(icon);
        debug!(icon, markup, "Icon not found in theme; using markup label");
        Glyph::Markup(markup.to_string())
    }

    pub fn is_icon(&self) -> bool {
        matches!(self, Glyph::Icon(_))
    }
}
