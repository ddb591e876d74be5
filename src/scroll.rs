use std::fmt;

/// Sections activate this many pixels before their top reaches the viewport top.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// Page regions in document order. The order is load-bearing: the spy
/// assumes each section starts below the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id and anchor name.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{self}")
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The last section whose top is at or above `scroll_y + SCROLL_LOOKAHEAD`.
///
/// `top_of` returns the element's document offset, or `None` if the section
/// is not on the page, in which case it is skipped.
pub fn section_at<F>(scroll_y: f64, top_of: F) -> Option<Section>
where
    F: Fn(Section) -> Option<f64>,
{
    let position = scroll_y + SCROLL_LOOKAHEAD;
    Section::ALL
        .into_iter()
        .rev()
        .find(|&section| top_of(section).is_some_and(|top| position >= top))
}

/// Tracks which section is active as the page scrolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    active: Section,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Recomputes the active section. Above every section the previous
    /// value is kept.
    pub fn update<F>(&mut self, scroll_y: f64, top_of: F) -> Section
    where
        F: Fn(Section) -> Option<f64>,
    {
        if let Some(section) = section_at(scroll_y, top_of) {
            self.active = section;
        }
        self.active
    }
}
