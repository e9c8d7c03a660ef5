// Tabbed page switcher cycled with TabPrev/TabNext

use crate::error::{NavError, Result};
use crate::input::{Button, PadInput};
use crate::nav::grid::GridRole;
use crate::nav::tree::NavTree;
use crate::nav::types::{HierarchyTag, NavEvent, NodeId, SelectionMode, TabLocation};
use tracing::debug;

/// Pages of a tab switcher. Only the active page is visible.
#[derive(Debug, Clone)]
pub struct TabSet {
    pub(crate) pages: Vec<NodeId>,
    pub(crate) titles: Vec<String>,
    pub(crate) active: usize,
    pub(crate) location: TabLocation,
}

impl TabSet {
    pub fn pages(&self) -> &[NodeId] {
        &self.pages
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_page(&self) -> Option<NodeId> {
        self.pages.get(self.active).copied()
    }

    pub fn location(&self) -> TabLocation {
        self.location
    }
}

impl NavTree {
    pub fn add_tabs(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        location: TabLocation,
    ) -> Result<NodeId> {
        let id = self.add_node(parent, identifier, HierarchyTag::None)?;
        self.set_size(id, [1.0, 1.0])?;
        self.tabs.insert(
            id,
            TabSet {
                pages: Vec::new(),
                titles: Vec::new(),
                active: 0,
                location,
            },
        );
        Ok(id)
    }

    /// Create a new page grid of `panel_count` panels in a tab set.
    pub fn add_tab_page(
        &mut self,
        tabs: NodeId,
        title: impl Into<String>,
        panel_count: usize,
    ) -> Result<NodeId> {
        if !self.tabs.contains_key(&tabs) {
            return Err(NavError::NotTabs(tabs));
        }
        let title = title.into();
        let page = self.add_panel_grid(tabs, title.clone(), panel_count)?;
        self.attach_page(tabs, page, title);
        Ok(page)
    }

    /// Move an existing grid of this tree into a tab set as a new page.
    pub fn adopt_tab_page(
        &mut self,
        tabs: NodeId,
        grid: NodeId,
        title: impl Into<String>,
    ) -> Result<()> {
        if !self.tabs.contains_key(&tabs) {
            return Err(NavError::NotTabs(tabs));
        }
        if grid == self.root || !self.grids.contains_key(&grid) {
            return Err(NavError::NotAGrid(grid));
        }
        self.reparent(grid, tabs)?;
        self.retag(grid, HierarchyTag::PanelGrid);
        if let Some(state) = self.grids.get_mut(&grid) {
            state.role = GridRole::Nested;
        }
        self.attach_page(tabs, grid, title.into());
        Ok(())
    }

    fn attach_page(&mut self, tabs: NodeId, page: NodeId, title: String) {
        let Some(set) = self.tabs.get_mut(&tabs) else {
            return;
        };
        set.pages.push(page);
        set.titles.push(title);
        let visible = set.pages.len() - 1 == set.active;
        self.nodes[page.0].visible = visible;
    }

    pub fn tab_set(&self, tabs: NodeId) -> Option<&TabSet> {
        self.tabs.get(&tabs)
    }

    pub fn next_tab(&mut self, tabs: NodeId) -> Result<()> {
        let set = self.tabs.get(&tabs).ok_or(NavError::NotTabs(tabs))?;
        self.select_tab(tabs, set.active + 1)
    }

    pub fn previous_tab(&mut self, tabs: NodeId) -> Result<()> {
        let set = self.tabs.get(&tabs).ok_or(NavError::NotTabs(tabs))?;
        let count = set.pages.len().max(1);
        self.select_tab(tabs, set.active + count - 1)
    }

    /// Show page `index` (wrapping), notify every page of its visibility and
    /// move the lock along when the old page held it.
    pub fn select_tab(&mut self, tabs: NodeId, index: usize) -> Result<()> {
        let set = self.tabs.get_mut(&tabs).ok_or(NavError::NotTabs(tabs))?;
        if set.pages.is_empty() {
            return Ok(());
        }
        let index = index % set.pages.len();
        if index == set.active {
            return Ok(());
        }
        let old_page = set.pages[set.active];
        let new_page = set.pages[index];
        set.active = index;
        let pages = set.pages.clone();

        for (i, page) in pages.into_iter().enumerate() {
            let visible = i == index;
            self.nodes[page.0].visible = visible;
            for id in std::iter::once(page).chain(self.descendants(page)) {
                if let Some(widget) = self.nodes[id.0].widget.as_deref_mut() {
                    widget.on_visibility_changed(visible);
                }
            }
        }

        let old_held_lock = self.grids.get(&old_page).is_some_and(|g| !g.locked);
        if old_held_lock {
            if let Some(next) = self.grids.get_mut(&new_page) {
                next.locked = false;
            }
            self.with_grid(old_page, |tree, grid| {
                tree.collapse(old_page, grid);
                grid.locked = true;
            });
            self.selected_content = None;
            self.with_grid(new_page, |tree, grid| tree.panel_mode_in(new_page, grid));
        }

        debug!(tabs = %tabs, index, "tab changed");
        self.events.push(NavEvent::TabChanged {
            tabs,
            page: new_page,
            index,
        });
        Ok(())
    }

    /// TabPrev/TabNext: cycle the first reachable tab set, unless the lock
    /// holder is busy inside panel content or navigating some other grid.
    pub(crate) fn cycle_tabs(&mut self, input: &PadInput) {
        let forward = input.pressed(Button::TabNext);
        let back = input.pressed(Button::TabPrev);
        if forward == back {
            return;
        }
        let Some(holder) = self.unlocked_grids().into_iter().next() else {
            return;
        };
        if self
            .grids
            .get(&holder)
            .is_some_and(|g| g.mode == SelectionMode::PanelContent)
        {
            return;
        }

        let mut tab_ids: Vec<NodeId> = self.tabs.keys().copied().collect();
        tab_ids.sort();
        for tabs in tab_ids {
            if !self.is_path_reachable(tabs) {
                continue;
            }
            let active_page = self.tabs[&tabs].active_page();
            let owner = self.parent_grid(tabs);
            let allowed =
                holder == self.root || Some(holder) == active_page || Some(holder) == owner;
            if !allowed {
                continue;
            }
            let result = if forward {
                self.next_tab(tabs)
            } else {
                self.previous_tab(tabs)
            };
            if result.is_ok() {
                return;
            }
        }
    }
}
