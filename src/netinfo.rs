use serde::Deserialize;
use std::env;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

pub const FALLBACK_IP: &str = "Private Network";
pub const FALLBACK_LOCATION: &str = "Location Unavailable";
pub const UNKNOWN_CLIENT: &str = "Unknown Terminal";

const LOOKUP_URL: &str = "https://ipapi.co/json/";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct GeoResponse {
    ip: Option<String>,
    city: Option<String>,
    region: Option<String>,
}

/// Outcome of the one-shot address lookup. Renderers read both variants
/// through the same accessors, so fallback data flows through the exact
/// same path as real data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoLookup {
    Resolved { ip: String, location: String },
    Fallback,
}

impl GeoLookup {
    pub fn ip(&self) -> &str {
        match self {
            GeoLookup::Resolved { ip, .. } => ip,
            GeoLookup::Fallback => FALLBACK_IP,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            GeoLookup::Resolved { location, .. } => location,
            GeoLookup::Fallback => FALLBACK_LOCATION,
        }
    }

    /// A well-formed body with missing fields still resolves, with
    /// per-field placeholders. A body that fails to parse does not.
    fn parse(body: &str) -> Option<GeoLookup> {
        let geo: GeoResponse = serde_json::from_str(body).ok()?;
        let ip = geo.ip.unwrap_or_else(|| "Unknown".to_string());
        let location = match (geo.city, geo.region) {
            (Some(city), Some(region)) => format!("{}, {}", city, region),
            _ => "Unknown Location".to_string(),
        };
        Some(GeoLookup::Resolved { ip, location })
    }
}

/// Single attempt, no retries. Any failure collapses to the fallback.
fn lookup() -> GeoLookup {
    let body = ureq::get(LOOKUP_URL)
        .timeout(LOOKUP_TIMEOUT)
        .call()
        .ok()
        .and_then(|response| response.into_string().ok());

    match body {
        Some(body) => GeoLookup::parse(&body).unwrap_or(GeoLookup::Fallback),
        None => GeoLookup::Fallback,
    }
}

/// Owns the one-shot lookup thread and exposes its state to the frame
/// loop without blocking. The thread sends exactly one message; if the
/// sampler is dropped first the send fails harmlessly and the thread
/// exits on its own.
pub struct MetadataSampler {
    receiver: Receiver<GeoLookup>,
    result: Option<GeoLookup>,
}

impl MetadataSampler {
    /// Start the lookup in the background and return immediately
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(lookup());
        });

        Self {
            receiver: rx,
            result: None,
        }
    }

    /// Sampler that settles to the fallback without touching the
    /// network, for --no-fetch runs
    pub fn offline() -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(GeoLookup::Fallback);

        Self {
            receiver: rx,
            result: None,
        }
    }

    /// Drain the channel if the lookup has finished. After the first
    /// result lands the sampler never changes again.
    pub fn poll(&mut self) {
        if self.result.is_some() {
            return;
        }
        match self.receiver.try_recv() {
            Ok(lookup) => self.result = Some(lookup),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => self.result = Some(GeoLookup::Fallback),
        }
    }

    pub fn settled(&self) -> bool {
        self.result.is_some()
    }

    pub fn ip(&self) -> &str {
        self.result.as_ref().map_or("Loading...", |r| r.ip())
    }

    pub fn location(&self) -> &str {
        self.result.as_ref().map_or("Loading...", |r| r.location())
    }
}

/// Environment variables the client sniffer looks at, captured up front
/// so the mapping itself is testable.
#[derive(Debug, Default)]
pub struct ClientEnv {
    pub term_program: Option<String>,
    pub term_program_version: Option<String>,
    pub konsole_version: Option<String>,
    pub vte_version: Option<String>,
    pub kitty_window_id: Option<String>,
    pub term: Option<String>,
}

impl ClientEnv {
    pub fn capture() -> Self {
        Self {
            term_program: env::var("TERM_PROGRAM").ok(),
            term_program_version: env::var("TERM_PROGRAM_VERSION").ok(),
            konsole_version: env::var("KONSOLE_VERSION").ok(),
            vte_version: env::var("VTE_VERSION").ok(),
            kitty_window_id: env::var("KITTY_WINDOW_ID").ok(),
            term: env::var("TERM").ok(),
        }
    }
}

/// Best-effort "Name/Version" tag for the hosting terminal emulator.
/// TERM alone only narrows to a family, so those hits report the family
/// name without a version.
pub fn identify_client(env: &ClientEnv) -> String {
    if let Some(program) = &env.term_program {
        let name = match program.as_str() {
            "iTerm.app" => "iTerm2",
            "Apple_Terminal" => "Terminal.app",
            "vscode" => "VS Code",
            other => other,
        };
        return match &env.term_program_version {
            Some(version) => format!("{}/{}", name, version),
            None => name.to_string(),
        };
    }

    if let Some(version) = &env.konsole_version {
        return format!("Konsole/{}", version);
    }
    if env.kitty_window_id.is_some() {
        return "kitty".to_string();
    }
    if let Some(version) = &env.vte_version {
        return format!("VTE/{}", version);
    }

    if let Some(term) = &env.term {
        let name = if term.starts_with("xterm") {
            "xterm"
        } else if term.starts_with("screen") {
            "GNU Screen"
        } else if term.starts_with("tmux") {
            "tmux"
        } else if term.starts_with("rxvt") {
            "rxvt"
        } else if term.starts_with("alacritty") {
            "Alacritty"
        } else if term.starts_with("foot") {
            "foot"
        } else if term == "linux" {
            "Linux Console"
        } else {
            return UNKNOWN_CLIENT.to_string();
        };
        return name.to_string();
    }

    UNKNOWN_CLIENT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_body_resolves() {
        let lookup =
            GeoLookup::parse(r#"{"ip":"203.0.113.7","city":"Bengaluru","region":"Karnataka"}"#);
        assert_eq!(
            lookup,
            Some(GeoLookup::Resolved {
                ip: "203.0.113.7".to_string(),
                location: "Bengaluru, Karnataka".to_string(),
            })
        );
    }

    #[test]
    fn parse_missing_fields_uses_placeholders() {
        let lookup = GeoLookup::parse(r#"{"city":"Bengaluru"}"#);
        match lookup {
            Some(GeoLookup::Resolved { ip, location }) => {
                assert_eq!(ip, "Unknown");
                assert_eq!(location, "Unknown Location");
            }
            other => panic!("expected resolved lookup, got {:?}", other),
        }
    }

    #[test]
    fn parse_malformed_body_fails() {
        assert_eq!(GeoLookup::parse("<html>nope</html>"), None);
        assert_eq!(GeoLookup::parse(""), None);
    }

    #[test]
    fn fallback_strings_are_fixed() {
        let lookup = GeoLookup::Fallback;
        assert_eq!(lookup.ip(), "Private Network");
        assert_eq!(lookup.location(), "Location Unavailable");
    }

    #[test]
    fn sampler_stays_loading_until_result_arrives() {
        let (tx, rx) = mpsc::channel();
        let mut sampler = MetadataSampler {
            receiver: rx,
            result: None,
        };

        sampler.poll();
        assert!(!sampler.settled());
        assert_eq!(sampler.ip(), "Loading...");
        assert_eq!(sampler.location(), "Loading...");

        tx.send(GeoLookup::Resolved {
            ip: "198.51.100.2".to_string(),
            location: "Lisbon, Lisboa".to_string(),
        })
        .ok();

        sampler.poll();
        assert!(sampler.settled());
        assert_eq!(sampler.ip(), "198.51.100.2");
        assert_eq!(sampler.location(), "Lisbon, Lisboa");
    }

    #[test]
    fn sampler_dead_channel_settles_to_fallback() {
        let (tx, rx) = mpsc::channel::<GeoLookup>();
        drop(tx);
        let mut sampler = MetadataSampler {
            receiver: rx,
            result: None,
        };

        sampler.poll();
        assert!(sampler.settled());
        assert_eq!(sampler.ip(), FALLBACK_IP);
        assert_eq!(sampler.location(), FALLBACK_LOCATION);
    }

    #[test]
    fn offline_sampler_settles_immediately() {
        let mut sampler = MetadataSampler::offline();
        sampler.poll();
        assert_eq!(sampler.ip(), FALLBACK_IP);
    }

    #[test]
    fn client_from_term_program_includes_version() {
        let env = ClientEnv {
            term_program: Some("WezTerm".to_string()),
            term_program_version: Some("20240203-110809".to_string()),
            ..Default::default()
        };
        assert_eq!(identify_client(&env), "WezTerm/20240203-110809");
    }

    #[test]
    fn client_known_programs_are_renamed() {
        let env = ClientEnv {
            term_program: Some("iTerm.app".to_string()),
            ..Default::default()
        };
        assert_eq!(identify_client(&env), "iTerm2");
    }

    #[test]
    fn client_falls_back_to_term_family() {
        let env = ClientEnv {
            term: Some("xterm-256color".to_string()),
            ..Default::default()
        };
        assert_eq!(identify_client(&env), "xterm");
    }

    #[test]
    fn client_unknown_when_nothing_matches() {
        assert_eq!(identify_client(&ClientEnv::default()), UNKNOWN_CLIENT);

        let env = ClientEnv {
            term: Some("dumb".to_string()),
            ..Default::default()
        };
        assert_eq!(identify_client(&env), UNKNOWN_CLIENT);
    }
}
