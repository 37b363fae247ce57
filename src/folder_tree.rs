//! Folder tree builder.
//!
//! Turns the flat parent-pointer folder list into the ordered, indented rows
//! shown in the folder panel. The same builder serves both collections; only
//! the per-folder count differs.

use std::collections::{HashMap, HashSet};

use crate::filter::FolderSelector;
use crate::models::{Folder, GENERAL_FOLDER_TITLE};

/// Columns of indentation added per nesting level.
pub const INDENT_PER_LEVEL: usize = 2;

pub const ALL_FOLDERS_TITLE: &str = "All Folders";

/// One rendered row of the folder panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub selector: FolderSelector,
    pub title: String,
    /// 0 for the pseudo nodes, 1 for root folders.
    pub level: usize,
    pub indent: usize,
    /// `None` for pseudo nodes.
    pub count: Option<usize>,
    pub is_selected: bool,
    pub is_pseudo: bool,
}

impl FolderNode {
    fn pseudo(selector: FolderSelector, title: &str, selected: &FolderSelector) -> Self {
        Self {
            is_selected: &selector == selected,
            selector,
            title: title.to_string(),
            level: 0,
            indent: 0,
            count: None,
            is_pseudo: true,
        }
    }
}

/// Build the rows for one collection.
///
/// "All Folders" and "General" always come first. Real folders follow in
/// depth-first order, parents before children, siblings in input order.
/// Folders whose parent is not in `folders` are never emitted, and each
/// folder uid is emitted at most once.
pub fn build_folder_tree<F>(
    folders: &[Folder],
    count_fn: F,
    selected: &FolderSelector,
) -> Vec<FolderNode>
where
    F: Fn(&Folder) -> usize,
{
    let mut nodes = Vec::with_capacity(folders.len() + 2);
    nodes.push(FolderNode::pseudo(
        FolderSelector::All,
        ALL_FOLDERS_TITLE,
        selected,
    ));
    nodes.push(FolderNode::pseudo(
        FolderSelector::general(),
        GENERAL_FOLDER_TITLE,
        selected,
    ));

    let mut children: HashMap<&str, Vec<&Folder>> = HashMap::new();
    let mut roots = Vec::new();
    for folder in folders {
        match folder.parent_uid.as_deref() {
            Some(parent) => children.entry(parent).or_default().push(folder),
            None => roots.push(folder),
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&Folder, usize)> = roots.into_iter().rev().map(|f| (f, 1)).collect();

    while let Some((folder, level)) = stack.pop() {
        if !visited.insert(folder.uid.as_str()) {
            continue;
        }

        let selector = FolderSelector::folder_id(folder.id);
        nodes.push(FolderNode {
            is_selected: &selector == selected,
            selector,
            title: folder.title.clone(),
            level,
            indent: level * INDENT_PER_LEVEL,
            count: Some(count_fn(folder)),
            is_pseudo: false,
        });

        if let Some(kids) = children.get(folder.uid.as_str()) {
            for child in kids.iter().rev() {
                if !visited.contains(child.uid.as_str()) {
                    stack.push((child, level + 1));
                }
            }
        }
    }

    nodes
}

/// Count source for the dashboards panel: the backend's `dashboardCount`.
pub fn dashboard_count(folder: &Folder) -> usize {
    folder.dashboard_count.unwrap_or(0) as usize
}

/// Count source for the alerts panel: a tally of `folderId` over the alert
/// collection.
pub fn tally_by_folder<I>(folder_ids: I) -> HashMap<i64, usize>
where
    I: IntoIterator<Item = i64>,
{
    let mut tally = HashMap::new();
    for id in folder_ids {
        *tally.entry(id).or_insert(0) += 1;
    }
    tally
}
