use crate::core::Command;

pub struct PaletteMatch<'a> {
    pub label: &'a str,
    pub command: &'a Command,
}

#[derive(Debug, Clone)]
pub struct PaletteItem {
    pub label: &'static str,
    pub label_lc: &'static str,
    pub command: Command,
}

pub static PALETTE_ITEMS: &[PaletteItem] = &[
    PaletteItem {
        label: "URNote: Select Root Folder",
        label_lc: "urnote: select root folder",
        command: Command::SelectRootFolder,
    },
    PaletteItem {
        label: "URNote: New File",
        label_lc: "urnote: new file",
        command: Command::NewFile,
    },
    PaletteItem {
        label: "URNote: New Folder",
        label_lc: "urnote: new folder",
        command: Command::NewFolder,
    },
    PaletteItem {
        label: "URNote: New File in Root",
        label_lc: "urnote: new file in root",
        command: Command::NewFileInRoot,
    },
    PaletteItem {
        label: "URNote: New Folder in Root",
        label_lc: "urnote: new folder in root",
        command: Command::NewFolderInRoot,
    },
    PaletteItem {
        label: "URNote: Open Preview",
        label_lc: "urnote: open preview",
        command: Command::OpenMarkdownPreview,
    },
    PaletteItem {
        label: "URNote: Reveal in File Manager",
        label_lc: "urnote: reveal in file manager",
        command: Command::ShowInOsExplorer,
    },
    PaletteItem {
        label: "URNote: Copy Path",
        label_lc: "urnote: copy path",
        command: Command::CopyPath,
    },
    PaletteItem {
        label: "URNote: Copy",
        label_lc: "urnote: copy",
        command: Command::Copy,
    },
    PaletteItem {
        label: "URNote: Cut",
        label_lc: "urnote: cut",
        command: Command::Cut,
    },
    PaletteItem {
        label: "URNote: Paste",
        label_lc: "urnote: paste",
        command: Command::Paste,
    },
    PaletteItem {
        label: "URNote: Rename",
        label_lc: "urnote: rename",
        command: Command::Rename,
    },
    PaletteItem {
        label: "URNote: Delete",
        label_lc: "urnote: delete",
        command: Command::Delete,
    },
    PaletteItem {
        label: "URNote: Refresh",
        label_lc: "urnote: refresh",
        command: Command::Refresh,
    },
    PaletteItem {
        label: "View: Close Preview",
        label_lc: "view: close preview",
        command: Command::ClosePreview,
    },
    PaletteItem {
        label: "Quit",
        label_lc: "quit",
        command: Command::Quit,
    },
];

/// Every whitespace-separated word of the query must appear in the label.
fn matches(label_lc: &str, query_lc: &str) -> bool {
    query_lc.split_whitespace().all(|word| label_lc.contains(word))
}

pub fn match_indices(query: &str) -> Vec<usize> {
    let query_lc = query.trim().to_lowercase();
    if query_lc.is_empty() {
        return (0..PALETTE_ITEMS.len()).collect();
    }

    let mut out = Vec::with_capacity(PALETTE_ITEMS.len());
    for (i, item) in PALETTE_ITEMS.iter().enumerate() {
        if matches(item.label_lc, &query_lc) {
            out.push(i);
        }
    }
    out
}

pub fn match_items(query: &str) -> Vec<PaletteMatch<'static>> {
    match_indices(query)
        .into_iter()
        .map(|i| {
            let item = &PALETTE_ITEMS[i];
            PaletteMatch {
                label: item.label,
                command: &item.command,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/palette.rs"]
mod tests;
