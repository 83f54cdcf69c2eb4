//! Main UI Application
//!
//! Keeps one render atlas per scene, feeds it the session's updates and
//! draws it into the terminal. Nothing here reads world truth directly
//! except the debug panel.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::input::map_key;
use crate::game::{Scene, Session, DEBUG_ITEMS};
use crate::render::{Hud, HudCell, RenderAtlas, ViewportId, ViewportSize};
use crate::world::Rgb;

/// Width of the side panel in columns
const PANEL_WIDTH: u16 = 30;
const CURSOR_COLOR: Color = Color::White;
const ACTIVE_COLOR: Color = Color::Rgb(255, 215, 0);

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Maps viewport pixels onto terminal cells
struct Scale {
    inner: Rect,
    sx: f32,
    sy: f32,
}

impl Scale {
    fn new(inner: Rect, view: ViewportSize) -> Self {
        Self {
            inner,
            sx: inner.width as f32 / view.width.max(1.0),
            sy: inner.height as f32 / view.height.max(1.0),
        }
    }

    /// Cells covered by a square centered at (x, y)
    fn rect(&self, x: f32, y: f32, size: f32) -> Option<Rect> {
        let half = size / 2.0;
        let (w, h) = (self.inner.width as f32, self.inner.height as f32);
        let x0 = ((x - half) * self.sx).floor().max(0.0);
        let y0 = ((y - half) * self.sy).floor().max(0.0);
        if x0 >= w || y0 >= h {
            return None;
        }
        let x1 = ((x + half) * self.sx).floor().max(x0 + 1.0).min(w);
        let y1 = ((y + half) * self.sy).floor().max(y0 + 1.0).min(h);

        Some(Rect::new(
            self.inner.x + x0 as u16,
            self.inner.y + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }

    fn point(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let cx = (x * self.sx).floor();
        let cy = (y * self.sy).floor();
        if cx < 0.0 || cy < 0.0 || cx >= self.inner.width as f32 || cy >= self.inner.height as f32 {
            return None;
        }
        Some((self.inner.x + cx as u16, self.inner.y + cy as u16))
    }
}

fn center_of(r: Rect) -> (u16, u16) {
    (r.x + r.width / 2, r.y + r.height / 2)
}

fn hud_cell(cell: &HudCell) -> String {
    match (cell.x, cell.y) {
        (Some(x), Some(y)) => format!("{},{}", x, y),
        _ => "-".to_string(),
    }
}

/// Main UI application
#[derive(Debug, Default)]
pub struct App {
    overworld: RenderAtlas,
    minimap: RenderAtlas,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atlas(&self, viewport: ViewportId) -> &RenderAtlas {
        match viewport {
            ViewportId::Overworld => &self.overworld,
            ViewportId::Minimap => &self.minimap,
        }
    }

    fn atlas_mut(&mut self, viewport: ViewportId) -> &mut RenderAtlas {
        match viewport {
            ViewportId::Overworld => &mut self.overworld,
            ViewportId::Minimap => &mut self.minimap,
        }
    }

    /// Pull this frame's updates for the active scene into its atlas
    pub fn sync(&mut self, session: &mut Session) {
        let updates = session.frame();
        if !updates.is_empty() {
            log::trace!("Applying {} updates to {:?}", updates.len(), session.scene());
        }
        self.atlas_mut(session.scene().viewport()).apply(&updates);
    }

    /// Handle a key press. Returns false when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> bool {
        match map_key(key, session.scene()) {
            Some(action) => session.handle(action),
            None => true,
        }
    }

    pub fn render(&self, frame: &mut Frame, session: &Session) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(PANEL_WIDTH)])
            .split(frame.area());

        self.render_scene(frame, session, chunks[0]);
        self.render_panel(frame, session, chunks[1]);

        if session.debug.open {
            self.render_debug_overlay(frame, session);
        }
    }

    fn render_scene(&self, frame: &mut Frame, session: &Session, area: Rect) {
        let scene = session.scene();
        let (title, view) = match scene {
            Scene::Overworld => (" Overworld ", session.config().overworld.size()),
            Scene::Minimap => (" Minimap ", session.config().minimap.size()),
        };
        let atlas = self.atlas(scene.viewport());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let scale = Scale::new(inner, view);
        let buf = frame.buffer_mut();

        for tile in atlas.tiles.values() {
            let Some(rect) = scale.rect(tile.x, tile.y, tile.size) else {
                continue;
            };
            let glyph = if scene == Scene::Minimap { '·' } else { ' ' };
            fill(buf, rect, glyph, color(tile.color));
            if tile.is_active() {
                let (cx, cy) = center_of(rect);
                buf[(cx, cy)].set_char('◆').set_fg(ACTIVE_COLOR);
            }
        }

        for entity in atlas.entities.values() {
            if let Some((x, y)) = scale.point(entity.x, entity.y) {
                buf[(x, y)].set_char(entity.kind.glyph()).set_fg(color(entity.color));
            }
        }

        if let Some(cursor) = atlas.cursor {
            if let Some(rect) = scale.rect(cursor.x, cursor.y, cursor.size) {
                outline(buf, rect);

                let show_coords = scene == Scene::Overworld
                    && session.debug.settings.show_in_tile_coords
                    && rect.width > 2;
                if let (true, Some(local)) = (show_coords, session.player().minimap()) {
                    let text = format!("{},{}", local.x, local.y);
                    buf.set_string(rect.x + 1, rect.y, text, Style::default().fg(CURSOR_COLOR));
                }
            }
        }
    }

    fn render_panel(&self, frame: &mut Frame, session: &Session, area: Rect) {
        let atlas = self.atlas(session.scene().viewport());
        let mut lines = vec![
            Line::from(Span::styled(
                match session.scene() {
                    Scene::Overworld => "OVERWORLD",
                    Scene::Minimap => "MINIMAP",
                },
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(hud) = &atlas.hud {
            lines.extend(hud_lines(hud));
        }

        if session.debug.settings.show_hud {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("Seed: {}", session.seed())));
            lines.push(Line::from(format!("Tiles: {}", session.world().tile_count())));
            lines.push(Line::from(format!(
                "Entities: {}",
                session.world().entities().count()
            )));
            if let Some(tile) = session.current_tile() {
                lines.push(Line::from(vec![
                    Span::raw("Active: "),
                    Span::styled(tile.color.hex(), Style::default().fg(color(tile.color))),
                ]));
            }
            lines.push(Line::from(format!("Drawn: {} tiles", atlas.tiles.len())));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "WASD/arrows move",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "E/Tab map · F1 debug · Q quit",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default().borders(Borders::ALL).title(" HUD ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_debug_overlay(&self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let width = 40.min(area.width);
        let height = (DEBUG_ITEMS.len() as u16 + 4).min(area.height);
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let mut lines = vec![Line::from(Span::styled(
            "W/S navigate · Enter toggle",
            Style::default().fg(Color::DarkGray),
        ))];
        for (i, (_, label)) in DEBUG_ITEMS.iter().enumerate() {
            let selected = i == session.debug.selected;
            let state = if session.debug.value(i) { "ON" } else { "OFF" };
            let style = if selected {
                Style::default().fg(ACTIVE_COLOR)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(
                format!("{} {}: {}", if selected { ">" } else { " " }, label, state),
                style,
            )));
        }

        let block = Block::default().borders(Borders::ALL).title(" Debug Tools (F1) ");
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

fn hud_lines(hud: &Hud) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!("O: {},{}", hud.overworld.x, hud.overworld.y)),
        Line::from(format!("M: {}", hud_cell(&hud.minimap))),
    ];
    if let Some(zone) = hud.temperature_zone {
        lines.push(Line::from(vec![
            Span::raw("Temp: "),
            Span::styled(zone.name(), Style::default().fg(color(zone.color()))),
        ]));
    }
    lines
}

fn fill(buf: &mut Buffer, rect: Rect, glyph: char, bg: Color) {
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            buf[(x, y)]
                .set_char(glyph)
                .set_fg(Color::Rgb(0, 0, 0))
                .set_bg(bg);
        }
    }
}

fn outline(buf: &mut Buffer, rect: Rect) {
    if rect.width < 2 || rect.height < 2 {
        let (x, y) = center_of(rect);
        buf[(x, y)].set_char('@').set_fg(CURSOR_COLOR);
        return;
    }
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.width - 1, rect.y + rect.height - 1);
    for (x, y, ch) in [(x0, y0, '┌'), (x1, y0, '┐'), (x0, y1, '└'), (x1, y1, '┘')] {
        buf[(x, y)].set_char(ch).set_fg(CURSOR_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameConfig;
    use crate::game::InputAction;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn session() -> Session {
        Session::new(GameConfig {
            seed: Some(12),
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_sync_fills_active_atlas() {
        let mut session = session();
        let mut app = App::new();
        app.sync(&mut session);

        let overworld = app.atlas(ViewportId::Overworld);
        assert!(!overworld.tiles.is_empty());
        assert!(overworld.cursor.is_some());
        assert!(app.atlas(ViewportId::Minimap).tiles.is_empty());

        session.handle(InputAction::ToggleMap);
        app.sync(&mut session);
        assert_eq!(app.atlas(ViewportId::Minimap).tiles.len(), 400);
    }

    #[test]
    fn test_quit_key() {
        let mut session = session();
        let mut app = App::new();
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.handle_key(q, &mut session));
    }

    #[test]
    fn test_render_to_test_backend() {
        let mut session = session();
        let mut app = App::new();
        app.sync(&mut session);
        session.handle(InputAction::ToggleDebug);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| app.render(f, &session)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("OVERWORLD"));
        assert!(text.contains("Debug Tools"));
    }

    #[test]
    fn test_scale_maps_viewport_to_cells() {
        let scale = Scale::new(Rect::new(1, 1, 40, 20), ViewportSize::new(640.0, 640.0));
        // Center tile of a 5x5 window at 128px
        let rect = scale.rect(320.0, 320.0, 128.0).unwrap();
        assert_eq!(rect, Rect::new(17, 9, 8, 4));
        assert!(scale.point(-1.0, 0.0).is_none());
    }
}
