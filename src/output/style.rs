//! Classification to terminal style mapping

use termcolor::{Color, ColorSpec};

use crate::tree::Classification;

/// Foreground, background and weight for one styled segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub intense: bool,
}

impl Style {
    const fn bold(fg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
            bold: true,
            intense: false,
        }
    }

    /// Dim gray used for the exact byte count.
    pub const DIM: Style = Style {
        fg: Some(Color::Black),
        bg: None,
        bold: false,
        intense: true,
    };

    pub fn color_spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(self.fg)
            .set_bg(self.bg)
            .set_bold(self.bold)
            .set_intense(self.intense);
        spec
    }
}

/// Style for a node name.
pub fn style_for(classification: Classification) -> Style {
    match classification {
        Classification::Directory => Style::bold(Color::Blue),
        Classification::Symlink => Style::bold(Color::Cyan),
        Classification::Executable => Style::bold(Color::Green),
        Classification::Image => Style::bold(Color::Magenta),
        Classification::Archive => Style::bold(Color::Red),
        Classification::Error => Style {
            fg: Some(Color::Red),
            bg: Some(Color::Black),
            bold: false,
            intense: false,
        },
        Classification::Plain => Style::default(),
    }
}
