//! Bold, italic and inline-code toggles for the current selection.
//!
//! Each toggle unwraps a selection that already carries the markers and wraps
//! it otherwise. Bold and italic share the `*` marker, so a selection is read
//! by the number of stars on its shorter side: two or more means bold, an odd
//! count means italic (`***x***` is both).

/// Stars wrapping `text` on both sides.
fn wrapping_stars(text: &str) -> usize {
    let lead = text.chars().take_while(|c| *c == '*').count();
    let trail = text.chars().rev().take_while(|c| *c == '*').count();
    lead.min(trail).min(text.len() / 2)
}

fn strip(text: &str, count: usize) -> String {
    text[count..text.len() - count].to_string()
}

pub fn toggle_bold(selection: &str) -> String {
    if wrapping_stars(selection) >= 2 {
        strip(selection, 2)
    } else {
        format!("**{selection}**")
    }
}

pub fn toggle_italic(selection: &str) -> String {
    if wrapping_stars(selection) % 2 == 1 {
        strip(selection, 1)
    } else {
        format!("*{selection}*")
    }
}

/// Inline code for single-line selections, a fenced block otherwise.
pub fn toggle_code(selection: &str, language: Option<&str>) -> String {
    if selection.contains('\n') {
        let trimmed = selection.trim_end_matches('\n');
        if trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.len() > 6 {
            let body_start = trimmed.find('\n').map(|i| i + 1).unwrap_or(trimmed.len());
            let body_end = trimmed.rfind('\n').unwrap_or(body_start);
            if body_start <= body_end {
                return trimmed[body_start..body_end].to_string();
            }
        }
        let language = language.unwrap_or_default();
        return format!("```{language}\n{trimmed}\n```");
    }

    if selection.len() >= 2 && selection.starts_with('`') && selection.ends_with('`') {
        strip(selection, 1)
    } else {
        format!("`{selection}`")
    }
}
