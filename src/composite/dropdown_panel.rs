use crate::error::Result;
use crate::nav::tree::NavTree;
use crate::nav::types::NodeId;
use crate::widgets::DropDown;

impl NavTree {
    /// A column of labelled dropdowns in one panel-less grid.
    ///
    /// Each entry takes an equal share of the height. Returns the grid and
    /// the dropdown nodes in entry order.
    pub fn add_dropdown_panel(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        entries: Vec<(String, DropDown)>,
    ) -> Result<(NodeId, Vec<NodeId>)> {
        let grid = self.add_content_grid(parent, identifier, true)?;
        let share = 1.0 / entries.len().max(1) as f32;
        let mut dropdowns = Vec::with_capacity(entries.len());
        for (title, dropdown) in entries {
            let label = self.add_label(grid, title.clone())?;
            self.set_size(label, [0.4, share])?;
            let id = self.add_content(grid, title, dropdown)?;
            self.set_size(id, [0.6, share])?;
            dropdowns.push(id);
        }
        Ok((grid, dropdowns))
    }
}
