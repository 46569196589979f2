use crate::core::data::styled_frame::{StyledCell, StyledFrame};
use crate::core::render::glyph::Glyph;
use crate::core::render::rendered_frame::RenderedFrame;
use crossterm::Command;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::fmt::{self, Write};

const BLANK_CELL: char = ' ';
const COUNT_SEPARATOR: char = ' ';

/// Serialises styled cells into ANSI text, one line per row plus a closing reset line.
pub fn encode_frame(
    frame: &StyledFrame,
    glyph: &Glyph,
    clear_first: bool,
) -> Result<RenderedFrame, fmt::Error> {
    let mut lines = Vec::with_capacity(frame.resolution().rows() as usize + 1);

    for row in frame.rows() {
        lines.push(encode_row(row, glyph)?);
    }

    let mut reset = String::new();
    ResetColor.write_ansi(&mut reset)?;
    lines.push(reset);

    Ok(RenderedFrame { clear_first, lines })
}

fn encode_row(row: &[StyledCell], glyph: &Glyph) -> Result<String, fmt::Error> {
    let mut line = String::new();
    let mut previous_was_count = false;

    for cell in row {
        match *cell {
            StyledCell::Blank => {
                line.push(BLANK_CELL);
                previous_was_count = false;
            }
            StyledCell::Count(count) => {
                if previous_was_count {
                    line.push(COUNT_SEPARATOR);
                }
                write!(line, "{}", count)?;
                previous_was_count = true;
            }
            StyledCell::Glyph(colour) => {
                SetForegroundColor(Color::Rgb {
                    r: colour.r,
                    g: colour.g,
                    b: colour.b,
                })
                .write_ansi(&mut line)?;
                line.push_str(glyph.as_str());
                previous_was_count = false;
            }
        }
    }

    Ok(line)
}
