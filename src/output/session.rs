use comfy_table::{Cell, Color};

use codex_sessions::SessionInfo;
use codex_sessions::utils::Timezone;

use crate::output::format::{create_styled_table, header_cell, styled_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionTableOptions<'a> {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) timezone: Timezone,
    pub(crate) source_label: &'a str,
}

/// Render sessions as a table, in the order given
pub(crate) fn render_session_table(
    sessions: &[&SessionInfo],
    options: SessionTableOptions<'_>,
) -> String {
    let use_color = options.use_color;
    let mut table = create_styled_table();

    let mut header = vec![
        header_cell("Session ID", use_color),
        header_cell("Last Updated", use_color),
    ];
    if !options.compact {
        header.push(header_cell("File", use_color));
    }
    table.set_header(header);

    for session in sessions {
        let mut row = vec![
            styled_cell(&session.identifier, Some(Color::Green), use_color),
            Cell::new(options.timezone.format_datetime(session.last_updated)),
        ];
        if !options.compact {
            row.push(styled_cell(&session.filename, Some(Color::DarkGrey), use_color));
        }
        table.add_row(row);
    }

    format!(
        "\n  {} Sessions\n\n{table}\n  {} session{}",
        options.source_label,
        sessions.len(),
        if sessions.len() == 1 { "" } else { "s" }
    )
}

pub(crate) fn print_session_table(sessions: &[&SessionInfo], options: SessionTableOptions<'_>) {
    println!("{}", render_session_table(sessions, options));
}

pub(crate) fn output_session_json(sessions: &[&SessionInfo]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sessions)
}

pub(crate) fn output_single_session_json(session: &SessionInfo) -> serde_json::Result<String> {
    serde_json::to_string_pretty(session)
}
