/// Portfolio sections reachable from the desktop
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    About,    // whoami / personal information
    Projects, // code repositories
    Skills,   // technical stack
    Resume,   // work experience
    Contact,  // get in touch
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Resume,
        Section::Contact,
    ];

    /// Script-style name shown in the navigation listing
    pub fn script(&self) -> &'static str {
        match self {
            Section::About => "about.sh",
            Section::Projects => "projects.sh",
            Section::Skills => "skills.sh",
            Section::Resume => "resume.sh",
            Section::Contact => "contact.sh",
        }
    }

    /// One-line description for the navigation listing
    pub fn description(&self) -> &'static str {
        match self {
            Section::About => "Personal information",
            Section::Projects => "Code repositories",
            Section::Skills => "Technical stack",
            Section::Resume => "Work experience",
            Section::Contact => "Get in touch",
        }
    }

    /// Lowercase name used by the command line and --section flag
    pub fn name(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        match name {
            "about" | "whoami" => Some(Section::About),
            "projects" => Some(Section::Projects),
            "skills" => Some(Section::Skills),
            "resume" => Some(Section::Resume),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }
}

/// Discrete size class a render profile is chosen from. The class flips
/// only when the terminal width crosses the breakpoint; small resizes on
/// either side keep the current profile.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeviceClass {
    Compact,
    Wide,
}

impl DeviceClass {
    /// Terminal columns at which the wide profile starts
    pub const BREAKPOINT: u16 = 100;

    pub fn for_width(width: u16) -> DeviceClass {
        if width >= Self::BREAKPOINT {
            DeviceClass::Wide
        } else {
            DeviceClass::Compact
        }
    }
}

/// Forced size class from the command line, or Auto to follow the width
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ProfileOverride {
    Auto,
    Compact,
    Wide,
}

impl ProfileOverride {
    pub fn class_for(&self, width: u16) -> DeviceClass {
        match self {
            ProfileOverride::Auto => DeviceClass::for_width(width),
            ProfileOverride::Compact => DeviceClass::Compact,
            ProfileOverride::Wide => DeviceClass::Wide,
        }
    }
}

/// Configuration for the desktop shell
#[derive(Clone)]
pub struct ShellConfig {
    pub skip_boot: bool,
    pub start_section: Section,
    pub profile: ProfileOverride,
    pub time_step: f32,
    pub seed: Option<u64>,
    pub offline: bool,
}

/// Configuration for the standalone globe view
#[derive(Clone)]
pub struct GlobeConfig {
    pub profile: ProfileOverride,
    pub time_step: f32,
    pub seed: Option<u64>,
    pub offline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_class_flips_at_breakpoint() {
        assert_eq!(DeviceClass::for_width(99), DeviceClass::Compact);
        assert_eq!(DeviceClass::for_width(100), DeviceClass::Wide);
        assert_eq!(DeviceClass::for_width(101), DeviceClass::Wide);
    }

    #[test]
    fn profile_override_wins_over_width() {
        assert_eq!(
            ProfileOverride::Compact.class_for(200),
            DeviceClass::Compact
        );
        assert_eq!(ProfileOverride::Wide.class_for(40), DeviceClass::Wide);
        assert_eq!(ProfileOverride::Auto.class_for(40), DeviceClass::Compact);
    }

    #[test]
    fn section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.name()), Some(section));
        }
        assert_eq!(Section::from_name("whoami"), Some(Section::About));
        assert_eq!(Section::from_name("bogus"), None);
    }

    #[test]
    fn section_next_cycles() {
        let mut section = Section::About;
        for _ in 0..Section::ALL.len() {
            section = section.next();
        }
        assert_eq!(section, Section::About);
    }
}
