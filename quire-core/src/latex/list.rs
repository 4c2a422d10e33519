//! Wrapping runs of `\item` lines in `itemize` environments

use super::block::Line;

pub const LIST_OPEN: &str = "\\begin{itemize}";
pub const LIST_CLOSE: &str = "\\end{itemize}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    Inside,
}

/// Wrap each run of consecutive item lines in one list environment
///
/// Lists are flat: item indentation is kept as text but never opens a
/// nested environment.
pub fn wrap_lists(lines: impl IntoIterator<Item = Line>) -> Vec<String> {
    let mut out = Vec::new();

    let state = lines
        .into_iter()
        .fold(ListState::Outside, |state, line| {
            let next = match (state, line.is_item()) {
                (ListState::Outside, true) => {
                    out.push(LIST_OPEN.to_string());
                    ListState::Inside
                }
                (ListState::Inside, false) => {
                    out.push(LIST_CLOSE.to_string());
                    ListState::Outside
                }
                (state, _) => state,
            };
            out.push(line.into_string());
            next
        });

    if state == ListState::Inside {
        out.push(LIST_CLOSE.to_string());
    }

    out
}
