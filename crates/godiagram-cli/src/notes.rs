//! Legend lines derived from command-line notes and rendering options

use godiagram::RenderingOptions;

/// Legend lines for user notes: a blank line, a heading, then the notes
///
/// Notes are trimmed and blank ones dropped.
pub fn user_notes(notes: &[String]) -> Vec<String> {
    let notes: Vec<String> = notes
        .iter()
        .map(|note| note.trim())
        .filter(|note| !note.is_empty())
        .map(str::to_string)
        .collect();
    if notes.is_empty() {
        return notes;
    }
    let mut lines = vec![String::new(), "<b><u>Notes</u></b>".to_string()];
    lines.extend(notes);
    lines
}

/// Legend lines describing the rendering options
pub fn options_legend(options: &RenderingOptions) -> Vec<String> {
    let entries = [
        ("Fields", options.fields),
        ("Methods", options.methods),
        ("Compositions", options.compositions),
        ("Implementations", options.implementations),
        ("Aggregations", options.aggregations),
        ("Aliases", options.aliases),
        ("Connection Labels", options.connection_labels),
        ("Private Members", options.private_members),
    ];

    let mut lines = vec!["<u><b>Legend</b></u>".to_string()];
    lines.extend(
        entries
            .iter()
            .map(|(category, shown)| format!("Render {category}: {shown}")),
    );
    lines.push(format!(
        "Private Aggregations: {}",
        options.aggregate_private_members
    ));
    lines
}
