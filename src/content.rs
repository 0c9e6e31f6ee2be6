//! Static portfolio content rendered by the desktop sections. The text
//! here is sample data; contact details can be overridden from the
//! config file.

use crate::colors::StatusColor;
use crate::config::Section;
use crate::settings::Settings;

/// Typed out character by character in the about section
pub const ABOUT_TEXT: &str = "$ cat about.txt

Hello, I'm a systems programmer who likes small, fast tools
and interfaces that feel instant. Most of what I build lives
in a terminal: network daemons, observability dashboards and
the occasional generative toy.

With a background in backend services and infrastructure, I
specialize in building reliable, scalable plumbing and the
command-line tooling that keeps it honest.

$ echo \"Always learning, always shipping.\"
Always learning, always shipping.";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Production,
    Development,
    Active,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Production => "Production",
            ProjectStatus::Development => "Development",
            ProjectStatus::Active => "Active",
        }
    }

    pub fn status_color(&self) -> StatusColor {
        match self {
            ProjectStatus::Production => StatusColor::Good,
            ProjectStatus::Development => StatusColor::Warning,
            ProjectStatus::Active => StatusColor::Info,
        }
    }
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
    pub lines: u32,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        name: "Metrics Relay",
        description: "Streaming metrics aggregator with a pull gateway and tiered retention",
        tech: &["Rust", "tokio", "PostgreSQL", "protobuf"],
        status: ProjectStatus::Production,
        lines: 15420,
    },
    Project {
        name: "Fleet Dashboard",
        description: "Interactive ops dashboard rendering live probe data from a Python backend",
        tech: &["D3.js", "Python", "FastAPI", "Redis"],
        status: ProjectStatus::Development,
        lines: 8930,
    },
    Project {
        name: "Chat Backplane",
        description: "WebSocket fanout service with authentication and file handoff",
        tech: &["Rust", "tungstenite", "Redis", "S3"],
        status: ProjectStatus::Production,
        lines: 6750,
    },
    Project {
        name: "Portfolio Terminal UI",
        description: "Terminal-inspired portfolio with boot animations and a pixel globe",
        tech: &["Rust", "crossterm"],
        status: ProjectStatus::Active,
        lines: 3200,
    },
];

/// Footer under the project cards
pub const GIT_LOG_LINES: [&str; 5] = [
    "$ git log --oneline --graph",
    "* feat: Add new portfolio project",
    "* fix: Update project descriptions",
    "* feat: Implement terminal UI design",
    "* docs: Update README files",
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8, // 0-100
    pub years: u8,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        name: "systems",
        skills: &[
            Skill { name: "Rust", level: 95, years: 4 },
            Skill { name: "C", level: 85, years: 6 },
            Skill { name: "Go", level: 80, years: 3 },
            Skill { name: "Linux internals", level: 78, years: 5 },
        ],
    },
    SkillCategory {
        name: "backend",
        skills: &[
            Skill { name: "PostgreSQL", level: 88, years: 5 },
            Skill { name: "Redis", level: 82, years: 4 },
            Skill { name: "gRPC", level: 80, years: 3 },
            Skill { name: "Python", level: 75, years: 6 },
        ],
    },
    SkillCategory {
        name: "devops",
        skills: &[
            Skill { name: "Docker", level: 85, years: 4 },
            Skill { name: "Kubernetes", level: 72, years: 2 },
            Skill { name: "CI/CD", level: 80, years: 4 },
            Skill { name: "AWS", level: 70, years: 3 },
        ],
    },
];

pub const TOOLS: [&str; 10] = [
    "Neovim",
    "Git",
    "tmux",
    "perf",
    "Wireshark",
    "strace",
    "Grafana",
    "Terminal",
    "fzf",
    "ripgrep",
];

pub const UPTIME_JOKE: &str =
    "Learning new technologies for 5+ years, 0 users, load average: always high";

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
    pub location: &'static str,
    pub graduation: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "B.S. in Computer Science",
    school: "Pacific State University",
    period: "2017 - 2021",
    gpa: "3.7/4.0",
    location: "Portland, Oregon",
    graduation: "Graduated May 2021",
};

pub struct Job {
    pub position: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCE: [Job; 2] = [
    Job {
        position: "Backend Engineer",
        company: "Northwire Systems",
        period: "June 2021 - Present",
        description: "Own the ingest path of a telemetry platform handling peak bursts",
        achievements: &[
            "Rewrote the hot aggregation loop, cutting p99 latency by two thirds",
            "Introduced structured backpressure between collectors and storage",
            "Mentored two interns through their first production services",
        ],
    },
    Job {
        position: "Infrastructure Intern",
        company: "Harbor Grid Co-op",
        period: "Summer 2020",
        description: "Kept a small fleet of on-prem machines installed, patched and observable",
        achievements: &[
            "Automated bare-metal provisioning with PXE and preseed images",
            "Built the first monitoring dashboards the team actually watched",
            "Diagnosed and resolved recurring NIC driver faults across the fleet",
        ],
    },
];

pub const COURSEWORK: [&str; 7] = [
    "Data Structures & Algorithms",
    "Operating Systems",
    "Distributed Systems",
    "Computer Networks",
    "Compilers",
    "Databases",
    "Cryptography",
];

pub const ACTIVITIES: [&str; 2] = [
    "Organizer of the campus systems-programming reading group",
    "CTF player, mostly pwn and network forensics challenges",
];

/// Footer under the resume section
pub const WC_FOOTER: [&str; 2] = ["$ wc -l resume.md", "89 resume.md"];

/// Footer under the contact section
pub const PING_FOOTER: [&str; 4] = [
    "$ ping status",
    "Response time: Always fast",
    "Availability: 24/7",
    "Status: Ready to collaborate",
];

/// Contact details, resolved from the config file with placeholders for
/// anything left unset
pub struct Identity {
    pub name: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl Identity {
    pub fn resolve(settings: &Settings) -> Self {
        let identity = &settings.identity;
        Self {
            name: identity.name.clone().unwrap_or_else(|| "dev".to_string()),
            email: identity
                .email
                .clone()
                .unwrap_or_else(|| "dev@example.com".to_string()),
            github: identity
                .github
                .clone()
                .unwrap_or_else(|| "github.com/username".to_string()),
            linkedin: identity
                .linkedin
                .clone()
                .unwrap_or_else(|| "linkedin.com/in/username".to_string()),
        }
    }
}

/// Suggested commands shown while the command line is open
pub fn quick_commands(section: Section) -> [&'static str; 3] {
    match section {
        Section::About => ["whoami", "cat about.txt", "ls -la /personal"],
        Section::Projects => ["ls -la /projects", "git log --oneline", "cat projects.md"],
        Section::Skills => ["cat /proc/skills", "ls skills/", "cat specializations.txt"],
        Section::Resume => ["cat resume.md", "cat experience.txt", "cat education.txt"],
        Section::Contact => ["cat contact.txt", "ping social-media", "curl -X GET /contact"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} level out of range", skill.name);
            }
        }
    }

    #[test]
    fn identity_placeholders_apply() {
        let identity = Identity::resolve(&Settings::default());
        assert_eq!(identity.email, "dev@example.com");
        assert_eq!(identity.github, "github.com/username");
    }

    #[test]
    fn every_section_has_quick_commands() {
        for section in Section::ALL {
            for command in quick_commands(section) {
                assert!(!command.is_empty());
            }
        }
    }
}
