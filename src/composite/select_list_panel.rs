use crate::config::Skin;
use crate::error::Result;
use crate::nav::tree::NavTree;
use crate::nav::types::NodeId;
use crate::widgets::SelectList;

/// Node ids of a select-list panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectListPanel {
    pub grid: NodeId,
    pub headline: NodeId,
    pub list: NodeId,
}

impl NavTree {
    /// Headline plus a single list node. Confirm on the list does nothing;
    /// Up/Down drive its item cursor.
    pub fn add_select_list_panel(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        headline: impl Into<String>,
        list: SelectList,
    ) -> Result<SelectListPanel> {
        let identifier = identifier.into();
        let grid = self.add_content_grid(parent, identifier.clone(), true)?;
        let headline = self.add_label(grid, headline)?;
        self.set_size(headline, [1.0, 0.1])?;
        let list = self.add_content(grid, format!("{identifier} list"), list)?;
        self.set_size(list, [1.0, 0.9])?;
        self.node_mut(list)?.skin = Skin::ListBackground;
        Ok(SelectListPanel {
            grid,
            headline,
            list,
        })
    }
}
