use crate::ui::backend::{replay, Backend, CellGrid};
use crate::ui::core::color_support::{map_color, TerminalColorSupport};
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    colors: TerminalColorSupport,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>, colors: TerminalColorSupport) -> Self {
        Self { frame, colors }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        let widget = PaintWidget {
            cmds,
            colors: self.colors,
        };
        self.frame.render_widget(widget, area.into());
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    colors: TerminalColorSupport,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout, colors: TerminalColorSupport) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal, colors })
    }

    /// Render one frame. `f` receives the backend and the full terminal area.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        let colors = self.colors;
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame, colors);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
    colors: TerminalColorSupport,
}

impl Widget for PaintWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let area = area.intersection(buf.area).into();
        let mut grid = BufferGrid {
            buf,
            area,
            colors: self.colors,
        };
        replay(&mut grid, self.cmds);
    }
}

/// A ratatui buffer seen through the terminal's color capabilities.
struct BufferGrid<'b> {
    buf: &'b mut Buffer,
    area: Rect,
    colors: TerminalColorSupport,
}

impl CellGrid for BufferGrid<'_> {
    fn area(&self) -> Rect {
        self.area
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        let style = to_ratatui_style(style, self.colors);
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}

fn to_ratatui_style(s: Style, colors: TerminalColorSupport) -> RStyle {
    let mut out = RStyle::default().add_modifier(to_ratatui_mods(s.mods));
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(map_color(fg, colors)));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(map_color(bg, colors)));
    }
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
        (Mod::ITALIC, RModifier::ITALIC),
        (Mod::UNDERLINE, RModifier::UNDERLINED),
        (Mod::REVERSE, RModifier::REVERSED),
    ]
    .into_iter()
    .filter(|(ours, _)| m.contains(*ours))
    .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
}

// Glyph placement is covered by the headless backend tests in `tests/unit/ui/backend/test.rs`.
