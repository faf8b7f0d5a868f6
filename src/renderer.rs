use crate::ca_trait::CellularAutomaton;
use crossterm::{
    cursor::{Hide, MoveTo},
    execute, queue,
    style::{Color, Colors, Print, ResetColor, SetColors},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Two columns per cell so the blocks come out roughly square.
const CELL_BLOCK: &str = "  ";

/// Foreground/background pairs for the two cell states.
///
/// The engines never see this; swapping the theme (or the writer)
/// redirects the whole display.
#[derive(Clone, Copy)]
pub struct Theme {
    pub live: Colors,
    pub dead: Colors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            live: Colors::new(Color::Black, Color::White),
            dead: Colors::new(Color::White, Color::Black),
        }
    }
}

/// Read-only view of a field: draws it, never mutates it.
pub struct Renderer<W: Write> {
    out: W,
    theme: Theme,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    /// Clears the display once, before the first frame.
    pub fn init(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), Hide)
    }

    /// Draws one frame: cursor home, the whole field, then a status line.
    pub fn draw<A: CellularAutomaton>(
        &mut self,
        life: &A,
        generation: u64,
        fps: f64,
    ) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0))?;
        let (rows, cols) = life.size();
        for row in 0..rows {
            for col in 0..cols {
                let colors = if life.get_cell(row, col) {
                    self.theme.live
                } else {
                    self.theme.dead
                };
                queue!(self.out, SetColors(colors), Print(CELL_BLOCK))?;
            }
            queue!(self.out, ResetColor, Print("\r\n"))?;
        }
        queue!(
            self.out,
            Print(format!(
                "generation {:<8} population {:<6} fps {:>5.1}\r\n",
                generation,
                life.population(),
                fps
            ))
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life_naive::ConwayField;

    #[test]
    fn frame_has_one_line_per_row_plus_status() {
        let mut field = ConwayField::blank(3, 4);
        field.set_cell(1, 1, true);

        let mut out = Vec::new();
        let mut renderer = Renderer::new(&mut out, Theme::default());
        renderer.draw(&field, 7, 10.0).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 4);
        assert!(text.contains("generation 7"));
        assert!(text.contains("population 1"));
    }
}
