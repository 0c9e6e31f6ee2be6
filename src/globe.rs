//! Rotating pixel globe with live connection readouts. The world is
//! sampled on a fixed lat/lon grid, projected onto an ellipse and
//! folded into braille cells, with a sweeping endpoint marker and the
//! metadata readout beside it.

use crate::colors::{scheme_color, Theme};
use crate::config::{DeviceClass, GlobeConfig, ProfileOverride};
use crate::help;
use crate::netinfo::{identify_client, ClientEnv, MetadataSampler};
use crate::settings::Settings;
use crate::terminal::Terminal;
use crate::timer::Interval;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::io;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Rotation advance per timer firing, in radians
pub const ROTATION_STEP: f32 = 0.008;

const ROTATION_MS: u64 = 50;
const ENDPOINT_MS: u64 = 250;
const STATS_MS: u64 = 3000;

// Dot paint levels, strongest wins when folding to cells
const OCEAN: u8 = 1;
const LAND: u8 = 2;
const HIGHLIGHT: u8 = 3;
const MARKER_GLOW: u8 = 4;
const MARKER_CORE: u8 = 5;

/// Discrete render profile per device class. Dot dimensions, radii and
/// dot sizes swap as a block when the class changes; nothing in between.
pub struct GlobeProfile {
    pub dot_w: usize,
    pub dot_h: usize,
    pub rx: f32,
    pub ry: f32,
    pub spacing: usize, // degrees between grid samples
    pub land_dot: usize,
    pub ocean_dot: usize,
}

impl GlobeProfile {
    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Wide => Self {
                dot_w: 160,
                dot_h: 112,
                rx: 48.0,
                ry: 35.0,
                spacing: 4,
                land_dot: 2,
                ocean_dot: 1,
            },
            DeviceClass::Compact => Self {
                dot_w: 120,
                dot_h: 80,
                rx: 36.0,
                ry: 25.0,
                spacing: 3,
                land_dot: 3,
                ocean_dot: 2,
            },
        }
    }

    /// Cell footprint after the braille fold (2x4 dots per cell)
    pub fn cell_size(&self) -> (i32, i32) {
        ((self.dot_w / 2) as i32, (self.dot_h / 4) as i32)
    }
}

/// Ephemeral projection of one grid point under the current rotation
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

impl Projected {
    /// Front-facing when the depth product is strictly positive, so
    /// dots exactly on the rim are culled rather than flickering
    pub fn visible(&self) -> bool {
        self.depth > 0.0
    }
}

/// Orthographic-style projection onto an ellipse. The rotation offset
/// spins longitude only; latitude never moves.
pub fn project(
    lat_deg: f32,
    lon_deg: f32,
    rotation: f32,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
) -> Projected {
    let lat = lat_deg.to_radians();
    let lon_rot = (lon_deg + rotation.to_degrees()).to_radians();

    Projected {
        x: cx + rx * lat.cos() * lon_rot.sin(),
        y: cy - ry * lat.sin(),
        depth: lat.cos() * lon_rot.cos(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Ocean,
    Land,
    Highlight,
}

struct Region {
    lat: (f32, f32),
    lon: (f32, f32),
    highlight: bool,
}

/// Land bounding boxes, checked in order with the first hit winning.
/// Boxes overlap (the subcontinent box sits inside the Asia box), so
/// the order is part of the picture. Accuracy is not the point.
const REGIONS: [Region; 7] = [
    // Africa
    Region { lat: (-35.0, 37.0), lon: (-17.0, 51.0), highlight: false },
    // Asia
    Region { lat: (8.0, 77.0), lon: (60.0, 180.0), highlight: false },
    // Europe
    Region { lat: (36.0, 71.0), lon: (-10.0, 40.0), highlight: false },
    // North America
    Region { lat: (15.0, 83.0), lon: (-168.0, -52.0), highlight: false },
    // South America
    Region { lat: (-56.0, 13.0), lon: (-81.0, -34.0), highlight: false },
    // Australia
    Region { lat: (-44.0, -10.0), lon: (113.0, 154.0), highlight: false },
    // Indian subcontinent, highlighted
    Region { lat: (6.0, 35.0), lon: (68.0, 97.0), highlight: true },
];

pub fn classify(lat: f32, lon: f32) -> Terrain {
    for region in &REGIONS {
        if lat >= region.lat.0
            && lat <= region.lat.1
            && lon >= region.lon.0
            && lon <= region.lon.1
        {
            return if region.highlight {
                Terrain::Highlight
            } else {
                Terrain::Land
            };
        }
    }
    Terrain::Ocean
}

/// Decorative endpoint sweep, derived deterministically from elapsed
/// milliseconds: a slow sine for latitude, a sawtooth for longitude
/// (one full circle every 14.4 seconds).
pub fn endpoint_at(t_ms: u64) -> (f32, f32) {
    let t = t_ms as f32;
    let lat = 10.0 + 30.0 * (t / 2400.0).sin();
    let lon = (t / 40.0).rem_euclid(360.0) - 180.0;
    (lat, lon)
}

/// Animation state for one open view. Timers are owned fields, so they
/// start when the view opens and stop existing when it closes.
pub struct GlobeView {
    rotation: f32,
    endpoint: (f32, f32),
    epoch: Instant,
    rotation_timer: Interval,
    endpoint_timer: Interval,
    paused: bool,
}

impl GlobeView {
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            endpoint: endpoint_at(0),
            epoch: Instant::now(),
            rotation_timer: Interval::every_ms(ROTATION_MS),
            endpoint_timer: Interval::every_ms(ENDPOINT_MS),
            paused: false,
        }
    }

    fn step_rotation(&mut self) {
        self.rotation = (self.rotation + ROTATION_STEP).rem_euclid(TAU);
    }

    /// Poll both timers once for this frame
    fn tick(&mut self) {
        if self.paused {
            return;
        }
        if self.rotation_timer.fire() {
            self.step_rotation();
        }
        if self.endpoint_timer.fire() {
            let t_ms = self.epoch.elapsed().as_millis() as u64;
            self.endpoint = endpoint_at(t_ms);
        }
    }
}

/// Connection readout shown next to the globe: the one-shot lookup
/// results plus simulated link statistics. Owned by the app rather
/// than the view, so reopening the globe never refetches.
pub struct NetStatus {
    pub sampler: MetadataSampler,
    pub client: String,
    connections: u32,
    packets: u64,
    bandwidth: String,
    stats_timer: Interval,
}

impl NetStatus {
    pub fn new(offline: bool) -> Self {
        let sampler = if offline {
            MetadataSampler::offline()
        } else {
            MetadataSampler::spawn()
        };

        Self {
            sampler,
            client: identify_client(&ClientEnv::capture()),
            connections: 127,
            packets: 0,
            bandwidth: "2.4 Mbps".to_string(),
            stats_timer: Interval::every_ms(STATS_MS),
        }
    }

    pub fn tick(&mut self, rng: &mut StdRng) {
        self.sampler.poll();
        if self.stats_timer.fire() {
            self.jitter(rng);
        }
    }

    fn jitter(&mut self, rng: &mut StdRng) {
        self.connections = self.connections.saturating_add_signed(rng.gen_range(-1..=1));
        self.packets += rng.gen_range(0..100);
        self.bandwidth = format!("{:.1} Mbps", rng.gen_range(1.5..3.5));
    }
}

/// Dot-resolution canvas folded into braille cells at blit time. Each
/// dot holds a paint level; the strongest level in a 2x4 block picks
/// the cell color.
struct DotCanvas {
    width: usize,
    height: usize,
    dots: Vec<u8>,
}

impl DotCanvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![0; width * height],
        }
    }

    fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.dots.fill(0);
    }

    fn get(&self, x: usize, y: usize) -> u8 {
        self.dots[y * self.width + x]
    }

    /// Raise one dot to at least `level`; out-of-bounds dots are dropped
    fn mark(&mut self, x: i32, y: i32, level: u8) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            let idx = y as usize * self.width + x as usize;
            self.dots[idx] = self.dots[idx].max(level);
        }
    }

    /// Filled square anchored at (x, y), like a fillRect of dots
    fn stamp(&mut self, x: i32, y: i32, size: usize, level: u8) {
        for dy in 0..size as i32 {
            for dx in 0..size as i32 {
                self.mark(x + dx, y + dy, level);
            }
        }
    }

    fn stamp_diamond(&mut self, cx: i32, cy: i32, radius: i32, level: u8) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() + dy.abs() <= radius {
                    self.mark(cx + dx, cy + dy, level);
                }
            }
        }
    }

    fn blit(&self, term: &mut Terminal, origin_x: i32, origin_y: i32, scheme: u8) {
        const DOT_BITS: [u8; 8] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];

        for cy in 0..self.height / 4 {
            let by = cy * 4;
            for cx in 0..self.width / 2 {
                let bx = cx * 2;

                let positions = [
                    (by, bx),
                    (by + 1, bx),
                    (by + 2, bx),
                    (by, bx + 1),
                    (by + 1, bx + 1),
                    (by + 2, bx + 1),
                    (by + 3, bx),
                    (by + 3, bx + 1),
                ];

                let mut bits: u8 = 0;
                let mut level: u8 = 0;
                for (i, &(py, px)) in positions.iter().enumerate() {
                    let val = self.get(px, py);
                    if val > 0 {
                        bits |= DOT_BITS[i];
                        level = level.max(val);
                    }
                }

                if bits == 0 {
                    continue;
                }
                let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                let (color, bold) = level_color(level, scheme);
                term.set(origin_x + cx as i32, origin_y + cy as i32, ch, Some(color), bold);
            }
        }
    }
}

fn level_color(level: u8, scheme: u8) -> (Color, bool) {
    match level {
        MARKER_CORE => (Color::Yellow, true),
        MARKER_GLOW => (Color::DarkYellow, false),
        HIGHLIGHT => scheme_color(scheme, 3, true),
        LAND => scheme_color(scheme, 1, false),
        _ => scheme_color(scheme, 0, false),
    }
}

/// One full grid pass plus the endpoint marker. The visibility predicate
/// is the only gate on painting; everything else is clipping.
fn paint(canvas: &mut DotCanvas, profile: &GlobeProfile, rotation: f32, endpoint: (f32, f32)) {
    canvas.clear();

    let cx = profile.dot_w as f32 / 2.0;
    let cy = profile.dot_h as f32 / 2.0;

    for lat in (-90..=90).step_by(profile.spacing) {
        for lon in (-180..=180).step_by(profile.spacing) {
            let p = project(lat as f32, lon as f32, rotation, cx, cy, profile.rx, profile.ry);
            if !p.visible() {
                continue;
            }
            let (size, level) = match classify(lat as f32, lon as f32) {
                Terrain::Highlight => (profile.land_dot, HIGHLIGHT),
                Terrain::Land => (profile.land_dot, LAND),
                Terrain::Ocean => (profile.ocean_dot, OCEAN),
            };
            canvas.stamp(p.x.floor() as i32, p.y.floor() as i32, size, level);
        }
    }

    let marker = project(endpoint.0, endpoint.1, rotation, cx, cy, profile.rx, profile.ry);
    if marker.visible() {
        let (mx, my) = (marker.x.floor() as i32, marker.y.floor() as i32);
        canvas.stamp_diamond(mx, my, 4, MARKER_GLOW);
        canvas.stamp(mx - 1, my - 1, 3, MARKER_CORE);
    }
}

/// Why a key closed the view
#[derive(PartialEq, Eq)]
pub enum ViewExit {
    Back,
    Quit,
}

/// Full-screen globe loop on an already-initialized terminal. Returns
/// when the user backs out (g/Esc) or quits (q).
pub fn run_view(
    term: &mut Terminal,
    theme: &mut Theme,
    net: &mut NetStatus,
    rng: &mut StdRng,
    time_step: f32,
    profile: ProfileOverride,
    home: (f32, f32),
) -> io::Result<ViewExit> {
    let help_text = help::build_help(
        "World View",
        &[
            ("space", "pause rotation"),
            ("1-5", "animation speed"),
            ("g/Esc", "back to desktop"),
        ],
    );

    let mut view = GlobeView::new();
    let mut canvas = DotCanvas::new(0, 0);
    let mut speed = time_step;
    let mut show_help = false;
    let mut frame: u64 = 0;

    term.clear_screen()?;

    loop {
        term.resize_if_needed()?;
        let (width, height) = term.size();
        let class = profile.class_for(width);
        let prof = GlobeProfile::for_class(class);
        if canvas.dims() != (prof.dot_w, prof.dot_h) {
            canvas = DotCanvas::new(prof.dot_w, prof.dot_h);
        }

        if let Some((code, _)) = term.check_key()? {
            if !theme.handle_key(code) {
                match code {
                    KeyCode::Char('q') => return Ok(ViewExit::Quit),
                    KeyCode::Esc | KeyCode::Char('g') => return Ok(ViewExit::Back),
                    KeyCode::Char(' ') => view.paused = !view.paused,
                    KeyCode::Char('?') => show_help = !show_help,
                    KeyCode::Char('1') => speed = 0.15,
                    KeyCode::Char('2') => speed = 0.1,
                    KeyCode::Char('3') => speed = 0.05,
                    KeyCode::Char('4') => speed = 0.02,
                    KeyCode::Char('5') => speed = 0.01,
                    _ => {}
                }
            }
        }

        view.tick();
        net.tick(rng);

        term.clear();
        paint(&mut canvas, &prof, view.rotation, view.endpoint);

        let (cells_w, cells_h) = prof.cell_size();
        let (ox, oy) = match class {
            DeviceClass::Wide => {
                let total = cells_w + 28;
                (((width as i32 - total) / 2).max(0), ((height as i32 - cells_h) / 2).max(1))
            }
            DeviceClass::Compact => (((width as i32 - cells_w) / 2).max(0), 1),
        };

        canvas.blit(term, ox, oy, theme.scheme);
        draw_corner_labels(term, theme, ox, oy, cells_w, cells_h, home, frame);

        match class {
            DeviceClass::Wide => {
                draw_readout_column(term, theme, net, ox + cells_w + 4, oy + 1);
            }
            DeviceClass::Compact => {
                draw_readout_grid(term, theme, net, ox, oy + cells_h + 1, cells_w);
            }
        }

        if show_help {
            help::render_help_overlay(term, width, height, &help_text);
        }

        term.present()?;
        term.sleep(speed);
        frame += 1;
    }
}

fn draw_corner_labels(
    term: &mut Terminal,
    theme: &Theme,
    ox: i32,
    oy: i32,
    cells_w: i32,
    cells_h: i32,
    home: (f32, f32),
    frame: u64,
) {
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);

    term.set_str(ox + 1, oy, "WORLD VIEW", Some(mid), false);
    term.set_str(ox + cells_w - 8, oy, "LAT/LON", Some(dim), false);
    term.set_str(ox + 1, oy + cells_h - 1, &format!("{:.4}", home.0), Some(dim), false);
    let lon_label = format!("{:.4}", home.1);
    term.set_str(
        ox + cells_w - 1 - lon_label.chars().count() as i32,
        oy + cells_h - 1,
        &lon_label,
        Some(mid),
        false,
    );

    // Pulsing status dot just past the top-right corner
    let dot_color = if frame % 16 < 8 {
        Color::Green
    } else {
        Color::DarkGreen
    };
    term.set(ox + cells_w, oy - 1, '●', Some(dot_color), false);
}

fn draw_readout_column(term: &mut Terminal, theme: &Theme, net: &NetStatus, x: i32, y: i32) {
    let (bright, _) = theme.color(2);
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);
    // The location line brightens once the lookup lands
    let loc = if net.sampler.settled() { bright } else { dim };

    term.set_str(x, y, &format!("CONN: {}", net.connections), Some(mid), false);
    term.set_str(x, y + 1, &format!("PKT:  {}", net.packets), Some(dim), false);
    term.set_str(x, y + 2, &net.bandwidth, Some(bright), true);

    term.set_str(x, y + 4, &"─".repeat(22), Some(dim), false);

    term.set_str(x, y + 6, &format!("IP:   {}", net.sampler.ip()), Some(mid), false);
    term.set_str(x, y + 7, &format!("UA:   {}", net.client), Some(dim), false);
    term.set_str(x, y + 8, &format!("LOC:  {}", net.sampler.location()), Some(loc), true);
}

fn draw_readout_grid(
    term: &mut Terminal,
    theme: &Theme,
    net: &NetStatus,
    x: i32,
    y: i32,
    cells_w: i32,
) {
    let (bright, _) = theme.color(2);
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);
    let loc = if net.sampler.settled() { bright } else { dim };
    let right = x + cells_w / 2;

    term.set_str(x, y, &format!("CONN: {}", net.connections), Some(mid), false);
    term.set_str(x, y + 1, &format!("PKT:  {}", net.packets), Some(dim), false);
    term.set_str(x, y + 2, &net.bandwidth, Some(bright), true);

    term.set_str(right, y, &format!("IP:  {}", net.sampler.ip()), Some(mid), false);
    term.set_str(right, y + 1, &format!("UA:  {}", net.client), Some(dim), false);
    term.set_str(right, y + 2, &format!("LOC: {}", net.sampler.location()), Some(loc), true);
}

/// Standalone `globe` subcommand entry point
pub fn run(config: &GlobeConfig) -> io::Result<()> {
    let settings = Settings::load();
    let home = settings.home_coords();

    let seed = config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let mut term = Terminal::new(true)?;
    let mut theme = Theme::new(0);
    let mut net = NetStatus::new(config.offline);

    run_view(
        &mut term,
        &mut theme,
        &mut net,
        &mut rng,
        config.time_step,
        config.profile,
        home,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_deterministic() {
        let a = project(33.0, -12.0, 0.7, 80.0, 56.0, 48.0, 35.0);
        let b = project(33.0, -12.0, 0.7, 80.0, 56.0, 48.0, 35.0);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.depth.to_bits(), b.depth.to_bits());
    }

    #[test]
    fn far_hemisphere_is_culled() {
        // Directly behind the viewer at zero rotation
        let p = project(0.0, 180.0, 0.0, 80.0, 56.0, 48.0, 35.0);
        assert!(!p.visible());

        // Facing the viewer, dead center
        let p = project(0.0, 0.0, 0.0, 80.0, 56.0, 48.0, 35.0);
        assert!(p.visible());
        assert!((p.x - 80.0).abs() < 1e-3);
        assert!((p.y - 56.0).abs() < 1e-3);
    }

    #[test]
    fn rim_is_culled_not_flickered() {
        // cos of a right angle lands a hair negative in f32, so points
        // on the terminator fail the strict test and never flicker in.
        assert!(!project(0.0, 90.0, 0.0, 80.0, 56.0, 48.0, 35.0).visible());
        assert!(!project(90.0, 0.0, 0.0, 80.0, 56.0, 48.0, 35.0).visible());
        assert!(project(0.0, 89.0, 0.0, 80.0, 56.0, 48.0, 35.0).visible());
    }

    #[test]
    fn full_turn_is_periodic() {
        let a = project(25.0, 60.0, 1.25, 80.0, 56.0, 48.0, 35.0);
        let b = project(25.0, 60.0, 1.25 + TAU, 80.0, 56.0, 48.0, 35.0);
        assert!((a.x - b.x).abs() < 0.05);
        assert!((a.y - b.y).abs() < 0.05);
    }

    #[test]
    fn rotation_advances_by_exactly_one_step() {
        let mut view = GlobeView::new();
        view.step_rotation();
        assert!((view.rotation - ROTATION_STEP).abs() < f32::EPSILON);
    }

    #[test]
    fn rotation_wraps_modulo_full_turn() {
        let mut view = GlobeView::new();
        view.rotation = TAU - ROTATION_STEP / 2.0;
        view.step_rotation();
        assert!(view.rotation >= 0.0);
        assert!(view.rotation < ROTATION_STEP);
    }

    #[test]
    fn endpoint_latitude_stays_bounded() {
        for t in (0..60_000).step_by(97) {
            let (lat, lon) = endpoint_at(t);
            assert!((-20.0..=40.0).contains(&lat), "lat {} out of range at t={}", lat, t);
            assert!((-180.0..180.0).contains(&lon), "lon {} out of range at t={}", lon, t);
        }
    }

    #[test]
    fn endpoint_longitude_is_a_sawtooth() {
        let (_, start) = endpoint_at(0);
        let (_, mid) = endpoint_at(7200);
        let (_, wrapped) = endpoint_at(14400);
        assert!((start + 180.0).abs() < 1e-3);
        assert!(mid.abs() < 0.5);
        assert!((wrapped + 180.0).abs() < 0.5);
    }

    #[test]
    fn first_matching_region_wins() {
        // Inside both the Asia box and the subcontinent box; Asia is
        // listed first so there is no highlight here.
        assert_eq!(classify(20.0, 80.0), Terrain::Land);
        // South of the Asia box the subcontinent entry takes over.
        assert_eq!(classify(7.0, 80.0), Terrain::Highlight);
        // Middle of the Pacific
        assert_eq!(classify(0.0, -150.0), Terrain::Ocean);
    }

    #[test]
    fn profiles_swap_as_discrete_blocks() {
        let wide = GlobeProfile::for_class(DeviceClass::Wide);
        let compact = GlobeProfile::for_class(DeviceClass::Compact);
        assert_ne!(wide.dot_w, compact.dot_w);
        assert_ne!(wide.dot_h, compact.dot_h);
        assert!(wide.rx > compact.rx);
        assert!(wide.ry > compact.ry);
        assert_ne!(wide.spacing, compact.spacing);
    }

    #[test]
    fn paint_draws_front_hemisphere_and_marker() {
        let profile = GlobeProfile::for_class(DeviceClass::Compact);
        let mut canvas = DotCanvas::new(profile.dot_w, profile.dot_h);

        // Endpoint on the front hemisphere
        paint(&mut canvas, &profile, 0.0, (10.0, 0.0));
        assert!(canvas.dots.iter().any(|&d| d == LAND));
        assert!(canvas.dots.iter().any(|&d| d == OCEAN));
        assert!(canvas.dots.iter().any(|&d| d == MARKER_CORE));
    }

    #[test]
    fn marker_skipped_when_back_facing() {
        let profile = GlobeProfile::for_class(DeviceClass::Compact);
        let mut canvas = DotCanvas::new(profile.dot_w, profile.dot_h);

        paint(&mut canvas, &profile, 0.0, (10.0, 180.0));
        assert!(canvas.dots.iter().all(|&d| d < MARKER_GLOW));
    }

    #[test]
    fn repainting_same_state_is_identical() {
        let profile = GlobeProfile::for_class(DeviceClass::Wide);
        let mut a = DotCanvas::new(profile.dot_w, profile.dot_h);
        let mut b = DotCanvas::new(profile.dot_w, profile.dot_h);

        paint(&mut a, &profile, 2.4, (25.0, 40.0));
        paint(&mut b, &profile, 2.4, (25.0, 40.0));
        assert_eq!(a.dots, b.dots);
    }

    #[test]
    fn stats_jitter_stays_in_range() {
        let mut net = NetStatus::new(true);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            net.jitter(&mut rng);
            let mbps: f32 = net
                .bandwidth
                .trim_end_matches(" Mbps")
                .parse()
                .unwrap_or(0.0);
            // One decimal place of rounding can land on either bound
            assert!((1.5..=3.5).contains(&mbps), "bandwidth {}", net.bandwidth);
        }
        // Random walk of +/-1 from 127 cannot stray past 200 steps
        assert!(net.connections <= 327);
    }

    #[test]
    fn out_of_bounds_stamps_are_dropped() {
        let mut canvas = DotCanvas::new(8, 8);
        canvas.stamp(-5, -5, 2, LAND);
        canvas.stamp(100, 100, 2, LAND);
        assert!(canvas.dots.iter().all(|&d| d == 0));

        // Straddling the edge keeps only the inside dots
        canvas.stamp(7, 7, 3, LAND);
        assert_eq!(canvas.get(7, 7), LAND);
    }
}
