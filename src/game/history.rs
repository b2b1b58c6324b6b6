//! Move list shown next to the board

/// Display order of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label of the button that switches to the other order
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "desc",
            SortOrder::Descending => "asc",
        }
    }
}

/// One line of the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to
    pub index: usize,
    pub label: String,
    pub is_current: bool,
}

/// Text for the entry at `index`
pub fn move_label(index: usize, current_move: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else if index == current_move {
        format!("You are at move #{index}")
    } else {
        format!("Go to move #{index}")
    }
}

/// Build the move list for a history of `history_len` snapshots
///
/// `order` only changes the display order; every entry keeps its history index.
pub fn move_list(history_len: usize, current_move: usize, order: SortOrder) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = (0..history_len)
        .map(|index| MoveEntry {
            index,
            label: move_label(index, current_move),
            is_current: index == current_move,
        })
        .collect();

    if order == SortOrder::Descending {
        entries.reverse();
    }
    entries
}
