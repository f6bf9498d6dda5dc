use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

// Help section definitions
pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Selection:",
        items: &[
            ("j/↓", "Next visible node"),
            ("k/↑", "Previous visible node"),
            ("h/←", "Parent"),
            ("l/→", "First child"),
            ("g  ", "Root"),
        ],
    },
    HelpSection {
        title: "Nodes:",
        items: &[
            ("⇥/o", "Add child"),
            ("e/⏎", "Rename"),
            ("d  ", "Delete node and its subtree"),
            ("␣  ", "Expand / collapse"),
            ("c  ", "Next color for new nodes"),
            ("C  ", "Paint node with current color"),
            ("HJKL", "Nudge node"),
        ],
    },
    HelpSection {
        title: "View:",
        items: &[
            ("+/-", "Zoom in / out"),
            ("0  ", "Reset view"),
            ("z  ", "Center on selection"),
        ],
    },
    HelpSection {
        title: "File:",
        items: &[
            ("s  ", "Save"),
            ("x  ", "Export snapshot"),
            ("q  ", "Quit"),
            ("Q  ", "Quit without saving"),
        ],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, area: Rect) {
        let help_text = Self::build_help_text();
        let block = Block::default().borders(Borders::ALL).title(" Help ");
        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                "cortex-map",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(vec![Span::styled(
                section.title,
                Style::default().add_modifier(Modifier::BOLD),
            )]));

            for (key, desc) in section.items {
                lines.push(Line::from(format!("  {}  {}", key, desc)));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}
